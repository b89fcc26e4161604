//! Threshold-band classifier.

use core::fmt;

use crate::config::units::ColorReading;
use crate::config::ColorBands;

/// Classification outcome for one part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorCategory {
    /// Punched, then diverted to the bucket.
    Silver,
    /// Diverted into the tray.
    Purple,
    /// Passes through to the default bucket.
    Blue,
    /// No band matched; routed like Blue.
    Unclassified,
}

impl ColorCategory {
    /// Four-character label for the status display.
    pub const fn label(self) -> &'static str {
        match self {
            ColorCategory::Silver => "SILV",
            ColorCategory::Purple => "PURP",
            ColorCategory::Blue => "BLUE",
            ColorCategory::Unclassified => "----",
        }
    }

    /// True when the part takes the default pass-through route.
    pub const fn is_pass_through(self) -> bool {
        matches!(self, ColorCategory::Blue | ColorCategory::Unclassified)
    }
}

impl fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies readings against a set of open-interval bands.
///
/// Bands are checked in order silver, purple, blue; a reading equal to a
/// band bound is outside that band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorClassifier {
    bands: ColorBands,
}

impl ColorClassifier {
    /// Create a classifier over the given bands.
    pub const fn new(bands: ColorBands) -> Self {
        Self { bands }
    }

    /// Bands in use.
    pub fn bands(&self) -> &ColorBands {
        &self.bands
    }

    /// Category for a reading.
    pub fn classify(&self, reading: ColorReading) -> ColorCategory {
        if self.bands.silver.contains(reading) {
            ColorCategory::Silver
        } else if self.bands.purple.contains(reading) {
            ColorCategory::Purple
        } else if self.bands.blue.contains(reading) {
            ColorCategory::Blue
        } else {
            ColorCategory::Unclassified
        }
    }
}

/// Classify against the stock bands (10..400, 700..900, 1000..1200, all open).
pub fn classify(reading: ColorReading) -> ColorCategory {
    ColorClassifier::default().classify(reading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColorBand;

    #[test]
    fn test_band_interiors() {
        assert_eq!(classify(ColorReading(200)), ColorCategory::Silver);
        assert_eq!(classify(ColorReading(800)), ColorCategory::Purple);
        assert_eq!(classify(ColorReading(1100)), ColorCategory::Blue);
        assert_eq!(classify(ColorReading(500)), ColorCategory::Unclassified);
    }

    #[test]
    fn test_bounds_are_unclassified() {
        for r in [10, 400, 700, 900, 1000, 1200] {
            assert_eq!(
                classify(ColorReading(r)),
                ColorCategory::Unclassified,
                "reading {} sits on a bound",
                r
            );
        }
    }

    #[test]
    fn test_just_inside_bounds() {
        assert_eq!(classify(ColorReading(11)), ColorCategory::Silver);
        assert_eq!(classify(ColorReading(399)), ColorCategory::Silver);
        assert_eq!(classify(ColorReading(701)), ColorCategory::Purple);
        assert_eq!(classify(ColorReading(899)), ColorCategory::Purple);
        assert_eq!(classify(ColorReading(1001)), ColorCategory::Blue);
        assert_eq!(classify(ColorReading(1199)), ColorCategory::Blue);
    }

    #[test]
    fn test_custom_bands() {
        let classifier = ColorClassifier::new(ColorBands {
            silver: ColorBand::new(0, 100),
            purple: ColorBand::new(100, 200),
            blue: ColorBand::new(200, 300),
        });
        assert_eq!(classifier.classify(ColorReading(50)), ColorCategory::Silver);
        assert_eq!(classifier.classify(ColorReading(100)), ColorCategory::Unclassified);
        assert_eq!(classifier.classify(ColorReading(250)), ColorCategory::Blue);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ColorCategory::Silver.label(), "SILV");
        assert_eq!(ColorCategory::Unclassified.label(), "----");
        assert!(ColorCategory::Unclassified.is_pass_through());
        assert!(!ColorCategory::Purple.is_pass_through());
    }
}
