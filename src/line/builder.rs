//! Builder pattern for SortLine.

use embedded_hal::delay::DelayNs;

use crate::color::ColorClassifier;
use crate::config::units::CycleCount;
use crate::config::{validate_config, ColorBands, LineConfig, TimingTable};
use crate::cycle::Station;
use crate::error::{ConfigError, Error, Result};
use crate::io::{ActuatorBank, ColorSensor, Pacer, SensorBank};
use crate::status::CycleObserver;

use super::controller::SortLine;
use super::state::Standby;

/// Builder for creating SortLine instances.
///
/// Starts from [`LineConfig::default`]; the hardware parts are required,
/// the observer defaults to `()`.
pub struct SortLineBuilder<IN, OUT, S, D, O = ()>
where
    IN: SensorBank,
    OUT: ActuatorBank,
    S: ColorSensor,
    D: DelayNs,
    O: CycleObserver,
{
    inputs: Option<IN>,
    outputs: Option<OUT>,
    color_sensor: Option<S>,
    delay: Option<D>,
    observer: O,
    config: LineConfig,
}

impl<IN, OUT, S, D> Default for SortLineBuilder<IN, OUT, S, D, ()>
where
    IN: SensorBank,
    OUT: ActuatorBank,
    S: ColorSensor,
    D: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<IN, OUT, S, D> SortLineBuilder<IN, OUT, S, D, ()>
where
    IN: SensorBank,
    OUT: ActuatorBank,
    S: ColorSensor,
    D: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            inputs: None,
            outputs: None,
            color_sensor: None,
            delay: None,
            observer: (),
            config: LineConfig::default(),
        }
    }
}

impl<IN, OUT, S, D, O> SortLineBuilder<IN, OUT, S, D, O>
where
    IN: SensorBank,
    OUT: ActuatorBank,
    S: ColorSensor,
    D: DelayNs,
    O: CycleObserver,
{
    /// Set the input bank.
    pub fn inputs(mut self, inputs: IN) -> Self {
        self.inputs = Some(inputs);
        self
    }

    /// Set the output bank.
    pub fn outputs(mut self, outputs: OUT) -> Self {
        self.outputs = Some(outputs);
        self
    }

    /// Set the color sensor.
    pub fn color_sensor(mut self, sensor: S) -> Self {
        self.color_sensor = Some(sensor);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: D) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Replace the status observer.
    pub fn observer<O2: CycleObserver>(self, observer: O2) -> SortLineBuilder<IN, OUT, S, D, O2> {
        SortLineBuilder {
            inputs: self.inputs,
            outputs: self.outputs,
            color_sensor: self.color_sensor,
            delay: self.delay,
            observer,
            config: self.config,
        }
    }

    /// Configure from a LineConfig.
    pub fn config(mut self, config: LineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the step durations.
    pub fn timing(mut self, timing: TimingTable) -> Self {
        self.config.timing = timing;
        self
    }

    /// Set the color bands.
    pub fn bands(mut self, bands: ColorBands) -> Self {
        self.config.bands = bands;
        self
    }

    /// Set the configured cycle count.
    pub fn cycles(mut self, cycles: CycleCount) -> Self {
        self.config.cycles = cycles;
        self
    }

    /// Set the tick period in microseconds.
    pub fn tick_us(mut self, tick_us: u32) -> Self {
        self.config.tick_us = tick_us;
        self
    }

    /// Build the SortLine.
    ///
    /// # Errors
    ///
    /// Returns an error if a hardware part is missing or the configuration
    /// fails validation.
    pub fn build(self) -> Result<SortLine<IN, OUT, S, D, O, Standby>> {
        validate_config(&self.config)?;

        let inputs = self.inputs.ok_or(Error::Config(ConfigError::MissingPart("inputs")))?;
        let outputs = self.outputs.ok_or(Error::Config(ConfigError::MissingPart("outputs")))?;
        let sensor = self
            .color_sensor
            .ok_or(Error::Config(ConfigError::MissingPart("color_sensor")))?;
        let delay = self.delay.ok_or(Error::Config(ConfigError::MissingPart("delay")))?;

        let LineConfig {
            cycles,
            tick_us,
            timing,
            bands,
            ..
        } = self.config;

        let station = Station::new(inputs, outputs, sensor, Pacer::new(delay, tick_us), self.observer);
        Ok(SortLine::new(station, timing, ColorClassifier::new(bands), cycles))
    }
}
