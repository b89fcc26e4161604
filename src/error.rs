//! Error types for cylinder-sort.
//!
//! Provides unified error handling across configuration, sensing, actuation
//! and run sequencing.

use core::fmt;

use crate::config::units::Ticks;
use crate::io::{Actuator, Input};

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all cylinder-sort operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Sensor or input error
    Sensor(SensorError),
    /// Actuator output error
    Actuator(ActuatorError),
    /// Run sequencing error
    Line(LineError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// A color band's bounds are out of order (lower must be < upper)
    InvalidBand {
        /// Band name
        band: &'static str,
        /// Exclusive lower bound
        lower: u16,
        /// Exclusive upper bound
        upper: u16,
    },
    /// Two color bands share readings
    OverlappingBands {
        /// First band name
        first: &'static str,
        /// Second band name
        second: &'static str,
    },
    /// Tick period must be > 0 microseconds
    InvalidTick(u32),
    /// Analog scaling is unusable
    InvalidScaling(heapless::String<64>),
    /// A required builder part was not supplied
    MissingPart(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Sensor and input errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Analog channel could not be selected
    ChannelSelect,
    /// Analog conversion did not complete
    Conversion,
    /// Digital input pin could not be read
    InputPin(Input),
    /// No part broke the optical beam within the configured window
    BeamTimeout {
        /// Ticks spent waiting
        waited: Ticks,
    },
}

/// Actuator output errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorError {
    /// Digital output pin could not be written
    Pin(Actuator),
    /// Punch and diverter may not be engaged together
    Interlock {
        /// Output that was asked to engage
        requested: Actuator,
        /// Output already engaged
        engaged: Actuator,
    },
}

/// Run sequencing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineError {
    /// A cycle was requested with no cycles left to run
    CountExhausted,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Sensor(e) => write!(f, "Sensor error: {}", e),
            Error::Actuator(e) => write!(f, "Actuator error: {}", e),
            Error::Line(e) => write!(f, "Line error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidBand { band, lower, upper } => {
                write!(f, "Invalid {} band: lower ({}) must be < upper ({})", band, lower, upper)
            }
            ConfigError::OverlappingBands { first, second } => {
                write!(f, "Color bands '{}' and '{}' overlap", first, second)
            }
            ConfigError::InvalidTick(v) => write!(f, "Invalid tick period: {} us. Must be > 0", v),
            ConfigError::InvalidScaling(msg) => write!(f, "Invalid analog scaling: {}", msg),
            ConfigError::MissingPart(part) => write!(f, "{} is required", part),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::ChannelSelect => write!(f, "Analog channel select failed"),
            SensorError::Conversion => write!(f, "Analog conversion failed"),
            SensorError::InputPin(input) => write!(f, "Failed to read {} input", input.name()),
            SensorError::BeamTimeout { waited } => {
                write!(f, "No part detected after {} ticks", waited.0)
            }
        }
    }
}

impl fmt::Display for ActuatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActuatorError::Pin(actuator) => {
                write!(f, "Failed to drive {} output", actuator.name())
            }
            ActuatorError::Interlock { requested, engaged } => write!(
                f,
                "Cannot engage {} while {} is engaged",
                requested.name(),
                engaged.name()
            ),
        }
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::CountExhausted => write!(f, "No cycles left to run"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Error::Sensor(e)
    }
}

impl From<ActuatorError> for Error {
    fn from(e: ActuatorError) -> Self {
        Error::Actuator(e)
    }
}

impl From<LineError> for Error {
    fn from(e: LineError) -> Self {
        Error::Line(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for SensorError {}

#[cfg(feature = "std")]
impl std::error::Error for ActuatorError {}

#[cfg(feature = "std")]
impl std::error::Error for LineError {}
