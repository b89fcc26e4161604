//! Color threshold band configuration.

use serde::Deserialize;

use super::units::ColorReading;

/// Open interval of color readings: `lower < reading < upper`.
///
/// Both bounds are excluded, so a reading equal to either bound never
/// matches the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorBand {
    /// Exclusive lower bound.
    pub lower: u16,

    /// Exclusive upper bound.
    pub upper: u16,
}

impl ColorBand {
    /// Create a new band.
    #[inline]
    pub const fn new(lower: u16, upper: u16) -> Self {
        Self { lower, upper }
    }

    /// Check if a reading falls strictly inside the band.
    #[inline]
    pub const fn contains(&self, reading: ColorReading) -> bool {
        reading.0 > self.lower && reading.0 < self.upper
    }

    /// Check that the lower bound is below the upper bound.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.lower < self.upper
    }

    /// Check if some reading would match both bands.
    pub fn overlaps(&self, other: &ColorBand) -> bool {
        let lower = self.lower.max(other.lower) as u32;
        let upper = self.upper.min(other.upper) as u32;
        lower + 1 < upper
    }
}

/// Threshold bands for every sortable color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ColorBands {
    /// Silver parts are punched, then diverted.
    #[serde(default = "default_silver")]
    pub silver: ColorBand,

    /// Purple parts are diverted into the tray.
    #[serde(default = "default_purple")]
    pub purple: ColorBand,

    /// Blue parts pass through to the bucket.
    #[serde(default = "default_blue")]
    pub blue: ColorBand,
}

fn default_silver() -> ColorBand {
    ColorBand::new(10, 400)
}

fn default_purple() -> ColorBand {
    ColorBand::new(700, 900)
}

fn default_blue() -> ColorBand {
    ColorBand::new(1000, 1200)
}

impl ColorBands {
    /// Named bands in classification priority order.
    pub fn named(&self) -> [(&'static str, &ColorBand); 3] {
        [
            ("silver", &self.silver),
            ("purple", &self.purple),
            ("blue", &self.blue),
        ]
    }
}

impl Default for ColorBands {
    fn default() -> Self {
        Self {
            silver: default_silver(),
            purple: default_purple(),
            blue: default_blue(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validity_only_orders_bounds() {
        assert!(ColorBand::new(5, 6).is_valid());
        assert!(!ColorBand::new(6, 6).is_valid());
        assert!(!ColorBand::new(7, 6).is_valid());
    }

    #[test]
    fn test_band_excludes_bounds() {
        let band = ColorBand::new(10, 400);
        assert!(!band.contains(ColorReading(10)));
        assert!(band.contains(ColorReading(11)));
        assert!(band.contains(ColorReading(399)));
        assert!(!band.contains(ColorReading(400)));
    }

    #[test]
    fn test_overlap_of_open_intervals() {
        let silver = ColorBand::new(10, 400);
        // (399, 700) shares no integer with (10, 400)
        assert!(!silver.overlaps(&ColorBand::new(399, 700)));
        // (398, 700) shares 399
        assert!(silver.overlaps(&ColorBand::new(398, 700)));
        assert!(silver.overlaps(&ColorBand::new(0, 20)));
        assert!(!silver.overlaps(&ColorBand::new(400, 900)));
    }

    #[test]
    fn test_default_bands_are_disjoint() {
        let bands = ColorBands::default();
        assert!(!bands.silver.overlaps(&bands.purple));
        assert!(!bands.purple.overlaps(&bands.blue));
        assert!(!bands.silver.overlaps(&bands.blue));
    }
}
