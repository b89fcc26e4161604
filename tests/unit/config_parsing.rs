//! Unit tests for TOML configuration parsing.

use cylinder_sort::config::{load_config, parse_config, LineConfig};
use cylinder_sort::config::units::{CycleCount, Ticks};
use cylinder_sort::error::{ConfigError, Error};

/// Test that an empty document yields the stock line.
#[test]
fn test_empty_document_uses_defaults() {
    let config: LineConfig = toml::from_str("").expect("Failed to parse TOML");
    assert_eq!(config, LineConfig::default());
    assert_eq!(config.cycles, CycleCount::new(6));
    assert_eq!(config.tick_us, 1000);
    assert_eq!(config.timing.piston_settle, Ticks(200));
    assert_eq!(config.timing.pass_through, Ticks(1750));
    assert_eq!(config.timing.beam_timeout, None);
}

/// Test parsing a complete line configuration.
#[test]
fn test_parse_full_config() {
    let toml_str = r#"
cycles = 12
tick_us = 250

[timing]
piston_settle = 150
convey_settle = 80
silver_to_punch = 280
punch_dwell = 250
silver_sort = 1200
purple_sort = 1400
pass_through = 1600
poll = 2
beam_timeout = 5000

[bands.silver]
lower = 20
upper = 380

[bands.purple]
lower = 650
upper = 920

[bands.blue]
lower = 990
upper = 1250

[sensor]
vref = 3.3
resolution_bits = 10
scale = 1000.0
"#;

    let config = parse_config(toml_str).expect("Failed to parse config");

    assert_eq!(config.cycles.get(), 12);
    assert_eq!(config.tick_us, 250);
    assert_eq!(config.timing.punch_dwell, Ticks(250));
    assert_eq!(config.timing.poll, Ticks(2));
    assert_eq!(config.timing.beam_timeout, Some(Ticks(5000)));
    assert_eq!(config.bands.purple.lower, 650);
    assert_eq!(config.bands.blue.upper, 1250);
    assert_eq!(config.sensor.resolution_bits, 10);
    assert_eq!(config.micros(config.timing.pass_through), 400_000);
}

/// Test that a partial timing table keeps the remaining defaults.
#[test]
fn test_partial_timing_keeps_defaults() {
    let config = parse_config(
        r#"
[timing]
silver_sort = 900
"#,
    )
    .expect("Failed to parse config");

    assert_eq!(config.timing.silver_sort, Ticks(900));
    assert_eq!(config.timing.purple_sort, Ticks(1500));
    assert_eq!(config.bands.silver.lower, 10);
}

/// Test that values of the wrong type are rejected during parsing.
#[test]
fn test_wrong_type_rejected() {
    let result = parse_config("cycles = \"six\"");
    assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
}

/// Test that a negative duration is rejected during parsing.
#[test]
fn test_negative_duration_rejected() {
    let result: Result<LineConfig, _> = toml::from_str("[timing]\npunch_dwell = -1");
    assert!(result.is_err(), "Should reject negative tick counts");
}

/// Test loading a configuration file from disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join(format!("cylinder-sort-{}.toml", std::process::id()));
    std::fs::write(&path, "cycles = 3\n").expect("Failed to write config");

    let config = load_config(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(config.expect("Failed to load config").cycles, CycleCount::new(3));
}

/// Test that a missing file reports an I/O error.
#[test]
fn test_load_missing_file() {
    let result = load_config("/nonexistent/cylinder-sort/line.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
}
