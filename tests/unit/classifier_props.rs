//! Property tests for color classification.

use proptest::prelude::*;

use cylinder_sort::color::{classify, ColorCategory, ColorClassifier};
use cylinder_sort::config::units::ColorReading;
use cylinder_sort::config::{ColorBand, ColorBands};

fn expected(reading: u16) -> ColorCategory {
    match reading {
        11..=399 => ColorCategory::Silver,
        701..=899 => ColorCategory::Purple,
        1001..=1199 => ColorCategory::Blue,
        _ => ColorCategory::Unclassified,
    }
}

proptest! {
    #[test]
    fn prop_matches_open_intervals(reading in any::<u16>()) {
        prop_assert_eq!(classify(ColorReading(reading)), expected(reading));
    }

    #[test]
    fn prop_classify_is_pure(reading in 0u16..2000) {
        let first = classify(ColorReading(reading));
        let second = classify(ColorReading(reading));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_custom_bands_exclude_bounds(lower in 0u16..1000, width in 2u16..500) {
        let upper = lower + width;
        let classifier = ColorClassifier::new(ColorBands {
            silver: ColorBand::new(lower, upper),
            purple: ColorBand::new(3000, 3100),
            blue: ColorBand::new(4000, 4100),
        });
        prop_assert_eq!(classifier.classify(ColorReading(lower)), ColorCategory::Unclassified);
        prop_assert_eq!(classifier.classify(ColorReading(upper)), ColorCategory::Unclassified);
        prop_assert_eq!(classifier.classify(ColorReading(lower + 1)), ColorCategory::Silver);
        prop_assert_eq!(classifier.classify(ColorReading(upper - 1)), ColorCategory::Silver);
    }
}

#[test]
fn test_boundary_values_are_unclassified() {
    for reading in [10, 400, 700, 900, 1000, 1200] {
        assert_eq!(classify(ColorReading(reading)), ColorCategory::Unclassified);
    }
}
