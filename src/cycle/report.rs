//! Per-cycle results.

use crate::color::ColorCategory;
use crate::config::units::{ColorReading, CycleCount, Ticks};

/// What one cycle observed and decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Color reading, `None` if the sensor failed.
    pub reading: Option<ColorReading>,

    /// Category that drove routing.
    pub category: ColorCategory,

    /// Time spent waiting for the part to reach the optical sensor.
    pub beam_wait: Ticks,
}

impl CycleReport {
    /// True when the color read failed and the part took the default route.
    pub fn sensor_failed(&self) -> bool {
        self.reading.is_none()
    }
}

/// A finished cycle and the count it leaves behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleOutcome {
    /// Cycle result.
    pub report: CycleReport,

    /// Cycles still to run.
    pub remaining: CycleCount,
}
