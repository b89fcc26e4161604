//! Analog color sensor scaling.

use serde::Deserialize;

use super::units::ColorReading;

/// Conversion from raw ADC counts to a [`ColorReading`].
///
/// `reading = raw / (2^resolution_bits - 1) * vref * scale`, truncated.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct AdcScaling {
    /// Reference voltage of the converter.
    pub vref: f32,

    /// Converter resolution in bits.
    pub resolution_bits: u8,

    /// Multiplier applied to the measured voltage.
    pub scale: f32,
}

impl AdcScaling {
    /// Largest raw count the converter produces.
    #[inline]
    pub fn full_scale(&self) -> u16 {
        ((1u32 << self.resolution_bits.min(16)) - 1) as u16
    }

    /// Voltage for a raw count.
    #[inline]
    pub fn volts(&self, raw: u16) -> f32 {
        raw.min(self.full_scale()) as f32 / self.full_scale() as f32 * self.vref
    }

    /// Scaled color reading for a raw count.
    ///
    /// Truncates toward zero and saturates at `u16::MAX`.
    pub fn reading(&self, raw: u16) -> ColorReading {
        ColorReading((self.volts(raw) * self.scale) as u16)
    }
}

impl Default for AdcScaling {
    fn default() -> Self {
        Self {
            vref: 5.0,
            resolution_bits: 12,
            scale: 1024.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_scale_reads_vref_times_scale() {
        let scaling = AdcScaling::default();
        assert_eq!(scaling.full_scale(), 4095);
        assert_eq!(scaling.reading(4095), ColorReading(5120));
        assert_eq!(scaling.reading(0), ColorReading(0));
    }

    #[test]
    fn test_reading_truncates() {
        let scaling = AdcScaling::default();
        // 160 / 4095 * 5.0 * 1024 = 200.04
        assert_eq!(scaling.reading(160), ColorReading(200));
    }

    #[test]
    fn test_raw_above_full_scale_is_clamped() {
        let scaling = AdcScaling {
            resolution_bits: 10,
            ..AdcScaling::default()
        };
        assert_eq!(scaling.reading(u16::MAX), scaling.reading(1023));
    }
}
