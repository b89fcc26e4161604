//! Dwell and transit durations for every step of the sort cycle.

use serde::Deserialize;

use super::units::Ticks;

/// Fixed durations used by the sort cycle, in ticks.
///
/// Timing is open-loop: each value must cover the physical motion it waits
/// for, nothing confirms the motion actually happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct TimingTable {
    /// Retracted piston hold, lets the next part drop into the eject slot.
    pub piston_settle: Ticks,

    /// Conveyor run before the color read.
    pub convey_settle: Ticks,

    /// Silver: conveyor run until the part sits under the punch.
    pub silver_to_punch: Ticks,

    /// Silver: punch stroke hold.
    pub punch_dwell: Ticks,

    /// Silver: conveyor run with diverter engaged after punching.
    pub silver_sort: Ticks,

    /// Purple: conveyor run with diverter engaged.
    pub purple_sort: Ticks,

    /// Blue and unclassified: conveyor run to the default bucket.
    pub pass_through: Ticks,

    /// Delay between polls of a waited-on input.
    pub poll: Ticks,

    /// Give up waiting for the optical beam after this long.
    ///
    /// `None` waits forever.
    pub beam_timeout: Option<Ticks>,
}

impl TimingTable {
    /// All durations zero; cycles run without delaying.
    pub const fn zero() -> Self {
        Self {
            piston_settle: Ticks::ZERO,
            convey_settle: Ticks::ZERO,
            silver_to_punch: Ticks::ZERO,
            punch_dwell: Ticks::ZERO,
            silver_sort: Ticks::ZERO,
            purple_sort: Ticks::ZERO,
            pass_through: Ticks::ZERO,
            poll: Ticks::ZERO,
            beam_timeout: None,
        }
    }
}

impl Default for TimingTable {
    fn default() -> Self {
        Self {
            piston_settle: Ticks(200),
            convey_settle: Ticks(100),
            silver_to_punch: Ticks(300),
            punch_dwell: Ticks(300),
            silver_sort: Ticks(1300),
            purple_sort: Ticks(1500),
            pass_through: Ticks(1750),
            poll: Ticks(1),
            beam_timeout: None,
        }
    }
}
