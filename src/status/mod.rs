//! Status reporting for cylinder-sort.
//!
//! The controller reports progress through [`CycleObserver`]; the
//! [`StatusPanel`] observer draws it on any [`StatusDisplay`].

mod display;
mod observer;
mod panel;

pub use display::StatusDisplay;
pub use observer::CycleObserver;
pub use panel::StatusPanel;
