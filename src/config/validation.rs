//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::bands::ColorBands;
use super::sensor::AdcScaling;
use super::LineConfig;

/// Validate a line configuration.
///
/// Checks:
/// - Tick period is non-zero
/// - Every color band holds at least one reading
/// - No two color bands share a reading
/// - Analog scaling is usable
pub fn validate_config(config: &LineConfig) -> Result<()> {
    if config.tick_us == 0 {
        return Err(Error::Config(ConfigError::InvalidTick(config.tick_us)));
    }

    validate_bands(&config.bands)?;
    validate_scaling(&config.sensor)?;

    Ok(())
}

fn validate_bands(bands: &ColorBands) -> Result<()> {
    let named = bands.named();

    for &(name, band) in named.iter() {
        if !band.is_valid() {
            return Err(Error::Config(ConfigError::InvalidBand {
                band: name,
                lower: band.lower,
                upper: band.upper,
            }));
        }
    }

    for (i, &(first, a)) in named.iter().enumerate() {
        for &(second, b) in named.iter().skip(i + 1) {
            if a.overlaps(b) {
                return Err(Error::Config(ConfigError::OverlappingBands { first, second }));
            }
        }
    }

    Ok(())
}

fn validate_scaling(scaling: &AdcScaling) -> Result<()> {
    let problem = if scaling.vref.is_nan() || scaling.vref <= 0.0 {
        Some("vref must be > 0")
    } else if scaling.scale.is_nan() || scaling.scale <= 0.0 {
        Some("scale must be > 0")
    } else if scaling.resolution_bits == 0 || scaling.resolution_bits > 16 {
        Some("resolution_bits must be 1-16")
    } else {
        None
    };

    match problem {
        Some(msg) => Err(Error::Config(ConfigError::InvalidScaling(
            heapless::String::try_from(msg).unwrap_or_default(),
        ))),
        None => Ok(()),
    }
}
