//! Line type-state markers.
//!
//! Uses Rust's type system to enforce the run order at compile time: a line
//! must be started before it sorts, and a finished line cannot sort again.

/// Powered up, waiting for the operator to press go.
#[derive(Debug, Clone, Copy, Default)]
pub struct Standby;

/// Started; sort cycles may run.
#[derive(Debug, Clone, Copy)]
pub struct Armed;

/// Every cycle has run and the color sensor is released.
#[derive(Debug, Clone, Copy)]
pub struct Complete;

/// Trait for line states.
pub trait LineState: private::Sealed {}

impl LineState for Standby {}
impl LineState for Armed {}
impl LineState for Complete {}

mod private {
    pub trait Sealed {}
    impl Sealed for super::Standby {}
    impl Sealed for super::Armed {}
    impl Sealed for super::Complete {}
}

/// State name for display/debugging.
pub trait StateName {
    /// Get the state name as a static string.
    fn name() -> &'static str;
}

impl StateName for Standby {
    fn name() -> &'static str {
        "Standby"
    }
}

impl StateName for Armed {
    fn name() -> &'static str {
        "Armed"
    }
}

impl StateName for Complete {
    fn name() -> &'static str {
        "Complete"
    }
}
