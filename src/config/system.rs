//! Line configuration - root configuration structure.

use serde::Deserialize;

use super::bands::ColorBands;
use super::sensor::AdcScaling;
use super::timing::TimingTable;
use super::units::{CycleCount, Ticks};

/// Root configuration structure from TOML.
///
/// Every field has a compiled-in default, so an empty document (or
/// [`LineConfig::default`]) describes the stock line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    /// Parts to sort in one run (magazine capacity).
    pub cycles: CycleCount,

    /// Length of one tick in microseconds.
    pub tick_us: u32,

    /// Step durations.
    pub timing: TimingTable,

    /// Color threshold bands.
    pub bands: ColorBands,

    /// Raw ADC to color reading conversion.
    pub sensor: AdcScaling,
}

impl LineConfig {
    /// Wall-clock length of a tick duration in microseconds.
    pub fn micros(&self, ticks: Ticks) -> u64 {
        ticks.as_micros(self.tick_us)
    }

    /// Same configuration with every duration set to zero.
    pub fn without_delays(mut self) -> Self {
        self.timing = TimingTable::zero();
        self
    }
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            cycles: CycleCount::new(6),
            tick_us: 1000,
            timing: TimingTable::default(),
            bands: ColorBands::default(),
            sensor: AdcScaling::default(),
        }
    }
}
