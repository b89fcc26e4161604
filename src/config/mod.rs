//! Configuration module for cylinder-sort.
//!
//! Provides the line configuration: cycle count, tick period, step durations,
//! color bands and analog scaling. Loadable from TOML files (with `std`
//! feature) or built from compiled-in defaults.

mod bands;
#[cfg(feature = "std")]
mod loader;
mod sensor;
mod system;
mod timing;
pub mod units;
mod validation;

pub use bands::{ColorBand, ColorBands};
pub use sensor::AdcScaling;
pub use system::LineConfig;
pub use timing::TimingTable;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{ColorReading, CycleCount, Ticks};
