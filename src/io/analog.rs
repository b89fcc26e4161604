//! Analog color sensing.

use crate::config::units::ColorReading;
use crate::config::AdcScaling;
use crate::error::SensorError;

/// Single-shot color measurement.
pub trait ColorSensor {
    /// Take one reading.
    ///
    /// # Errors
    ///
    /// Returns a [`SensorError`] if the conversion did not complete.
    fn read_color(&mut self) -> Result<ColorReading, SensorError>;

    /// Hand the converter back once the run is over.
    fn release(&mut self) {}
}

/// Raw analog-to-digital converter channel.
pub trait AnalogChannel {
    /// Converter error type.
    type Error: core::fmt::Debug;

    /// Route the converter to the color sensor channel.
    fn select(&mut self) -> Result<(), Self::Error>;

    /// Run one conversion and return the raw count.
    fn convert(&mut self) -> Result<u16, Self::Error>;

    /// Power down the converter.
    fn release(&mut self) {}
}

/// [`ColorSensor`] that scales raw counts from an [`AnalogChannel`].
pub struct ScaledColorSensor<A: AnalogChannel> {
    adc: A,
    scaling: AdcScaling,
}

impl<A: AnalogChannel> ScaledColorSensor<A> {
    /// Wrap a converter channel.
    pub fn new(adc: A, scaling: AdcScaling) -> Self {
        Self { adc, scaling }
    }

    /// Scaling in use.
    pub fn scaling(&self) -> &AdcScaling {
        &self.scaling
    }

    /// Release the converter channel.
    pub fn into_inner(self) -> A {
        self.adc
    }
}

impl<A: AnalogChannel> ColorSensor for ScaledColorSensor<A> {
    fn read_color(&mut self) -> Result<ColorReading, SensorError> {
        self.adc.select().map_err(|_| SensorError::ChannelSelect)?;
        let raw = self.adc.convert().map_err(|_| SensorError::Conversion)?;
        Ok(self.scaling.reading(raw))
    }

    fn release(&mut self) {
        self.adc.release();
    }
}
