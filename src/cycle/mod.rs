//! Sort cycle for cylinder-sort.
//!
//! A [`Station`] owns the line hardware; a [`SortCycle`] borrows it to move
//! one part from the magazine to its destination.

mod machine;
mod phase;
mod report;
mod station;

pub use machine::SortCycle;
pub use phase::CyclePhase;
pub use report::{CycleOutcome, CycleReport};
pub use station::Station;
