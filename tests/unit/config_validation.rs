//! Unit tests for configuration validation.

use cylinder_sort::config::{parse_config, validate_config, ColorBand, LineConfig};
use cylinder_sort::error::{ConfigError, Error};

/// Test validation of the default configuration.
#[test]
fn test_default_config_passes_validation() {
    assert!(validate_config(&LineConfig::default()).is_ok());
}

/// Test validation fails for an empty band.
#[test]
fn test_empty_band_rejected() {
    let toml_str = r#"
[bands.purple]
lower = 900
upper = 700
"#;

    let result = parse_config(toml_str);
    assert_eq!(
        result.err(),
        Some(Error::Config(ConfigError::InvalidBand {
            band: "purple",
            lower: 900,
            upper: 700,
        }))
    );
}

/// Test validation fails when two bands share a reading.
#[test]
fn test_overlapping_bands_rejected() {
    let toml_str = r#"
[bands.silver]
lower = 10
upper = 750
"#;

    let result = parse_config(toml_str);
    assert_eq!(
        result.err(),
        Some(Error::Config(ConfigError::OverlappingBands {
            first: "silver",
            second: "purple",
        }))
    );
}

/// Test that bands sharing only an excluded bound are accepted.
#[test]
fn test_touching_bounds_accepted() {
    let mut config = LineConfig::default();
    config.bands.purple = ColorBand::new(400, 900);
    config.bands.blue = ColorBand::new(900, 1200);
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for a zero tick period.
#[test]
fn test_zero_tick_rejected() {
    let result = parse_config("tick_us = 0");
    assert_eq!(result.err(), Some(Error::Config(ConfigError::InvalidTick(0))));
}

/// Test validation fails for unusable analog scaling.
#[test]
fn test_invalid_scaling_rejected() {
    let toml_str = r#"
[sensor]
vref = 0.0
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidScaling(_)))
    ));
}
