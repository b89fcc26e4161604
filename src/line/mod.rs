//! Run loop for cylinder-sort.
//!
//! Provides the line controller with type-state safety: standby, armed for
//! sorting, complete.

mod builder;
mod controller;
pub mod state;
mod summary;

pub use builder::SortLineBuilder;
pub use controller::SortLine;
pub use state::{Armed, Complete, LineState, Standby, StateName};
pub use summary::RunSummary;
