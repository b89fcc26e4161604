//! # cylinder-sort
//!
//! Sequencing controller for a color-sorting conveyor line with embedded-hal 1.0 support.
//!
//! A magazine piston ejects cylindrical parts one at a time onto a conveyor.
//! Each part breaks an optical beam, is read by an analog color sensor, and
//! is routed by color: silver parts are punched and diverted, purple parts
//! are diverted, everything else passes through.
//!
//! ## Features
//!
//! - **Configuration-driven**: Define timings, color bands and cycle count in TOML files
//! - **embedded-hal 1.0**: Uses `InputPin`/`OutputPin` for I/O, `DelayNs` for timing
//! - **no_std compatible**: Core library works without standard library
//! - **Hardware interlock**: Punch and diverter are never engaged together
//! - **Type-state safety**: Compile-time run order (standby, armed, complete)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cylinder_sort::{PinActuators, PinSensors, ScaledColorSensor, SortLine};
//!
//! // Load configuration from TOML
//! let config = cylinder_sort::load_config("line.toml")?;
//!
//! // Create the line with embedded-hal pins
//! let line = SortLine::builder()
//!     .inputs(PinSensors::new(optical, go, jog_retract, jog_extend))
//!     .outputs(PinActuators::new(conveyor, punch, diverter, piston_a, piston_b))
//!     .color_sensor(ScaledColorSensor::new(adc, config.sensor))
//!     .delay(delay)
//!     .config(config)
//!     .build()?;
//!
//! // Wait for go, then sort the configured number of parts
//! let (_line, summary) = line.run_configured()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[macro_use]
mod logging;

// Core modules
pub mod color;
pub mod config;
pub mod cycle;
pub mod error;
pub mod io;
pub mod line;
pub mod status;

// Re-exports for ergonomic API
pub use color::{classify, ColorCategory, ColorClassifier};
pub use config::{validate_config, ColorBand, ColorBands, LineConfig, TimingTable};
pub use cycle::{CycleOutcome, CyclePhase, CycleReport, SortCycle, Station};
pub use error::{Error, Result};
pub use io::{
    Actuator, ActuatorBank, ColorSensor, Input, PinActuators, PinSensors, PistonPosition,
    ScaledColorSensor, SensorBank,
};
pub use line::{state, RunSummary, SortLine, SortLineBuilder};
pub use status::{CycleObserver, StatusDisplay, StatusPanel};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{ColorReading, CycleCount, Ticks};
