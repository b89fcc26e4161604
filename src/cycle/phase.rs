//! Sort cycle phases.

use crate::color::ColorCategory;

/// Phases of one sort cycle, in execution order.
///
/// Only `AwaitOpticalBreak` can stay in place for an unbounded time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CyclePhase {
    /// Pull the magazine piston back and let the next part settle.
    RetractMagazinePiston,
    /// Push the piston out, ejecting one part onto the track.
    ExtendMagazinePiston,
    /// Poll the optical sensor until the part breaks the beam.
    AwaitOpticalBreak,
    /// Start the conveyor, settle, and read the color sensor.
    Convey,
    /// Map the reading to a category.
    Classify,
    /// Drive punch, diverter and conveyor for the category.
    Route(ColorCategory),
    /// Stop the conveyor and count the cycle.
    Settle,
    /// Cycle finished.
    Done,
}

impl CyclePhase {
    /// Short name for logs.
    pub const fn name(self) -> &'static str {
        match self {
            CyclePhase::RetractMagazinePiston => "retract-piston",
            CyclePhase::ExtendMagazinePiston => "extend-piston",
            CyclePhase::AwaitOpticalBreak => "await-optical",
            CyclePhase::Convey => "convey",
            CyclePhase::Classify => "classify",
            CyclePhase::Route(_) => "route",
            CyclePhase::Settle => "settle",
            CyclePhase::Done => "done",
        }
    }
}
