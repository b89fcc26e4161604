//! Whole-run results.

use crate::color::ColorCategory;
use crate::config::units::CycleCount;
use crate::cycle::CycleOutcome;

/// Tally of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunSummary {
    /// Cycles finished.
    pub completed: u16,

    /// Parts routed as silver.
    pub silver: u16,

    /// Parts routed as purple.
    pub purple: u16,

    /// Parts routed as blue.
    pub blue: u16,

    /// Parts that matched no band, including failed reads.
    pub unclassified: u16,

    /// Cycles whose color read failed.
    pub sensor_failures: u16,

    /// Cycles left when the run stopped.
    pub remaining: CycleCount,
}

impl RunSummary {
    /// Count one finished cycle.
    pub fn record(&mut self, outcome: &CycleOutcome) {
        self.completed = self.completed.saturating_add(1);
        let slot = match outcome.report.category {
            ColorCategory::Silver => &mut self.silver,
            ColorCategory::Purple => &mut self.purple,
            ColorCategory::Blue => &mut self.blue,
            ColorCategory::Unclassified => &mut self.unclassified,
        };
        *slot = slot.saturating_add(1);
        if outcome.report.sensor_failed() {
            self.sensor_failures = self.sensor_failures.saturating_add(1);
        }
        self.remaining = outcome.remaining;
    }

    /// Parts routed as `category`.
    pub fn count(&self, category: ColorCategory) -> u16 {
        match category {
            ColorCategory::Silver => self.silver,
            ColorCategory::Purple => self.purple,
            ColorCategory::Blue => self.blue,
            ColorCategory::Unclassified => self.unclassified,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::units::{ColorReading, Ticks};
    use crate::cycle::CycleReport;

    fn outcome(reading: Option<u16>, category: ColorCategory, remaining: u16) -> CycleOutcome {
        CycleOutcome {
            report: CycleReport {
                reading: reading.map(ColorReading),
                category,
                beam_wait: Ticks::ZERO,
            },
            remaining: CycleCount::new(remaining),
        }
    }

    #[test]
    fn test_record_tallies_categories() {
        let mut summary = RunSummary::default();
        summary.record(&outcome(Some(200), ColorCategory::Silver, 2));
        summary.record(&outcome(None, ColorCategory::Unclassified, 1));
        summary.record(&outcome(Some(1100), ColorCategory::Blue, 0));

        assert_eq!(summary.completed, 3);
        assert_eq!(summary.count(ColorCategory::Silver), 1);
        assert_eq!(summary.count(ColorCategory::Purple), 0);
        assert_eq!(summary.count(ColorCategory::Blue), 1);
        assert_eq!(summary.count(ColorCategory::Unclassified), 1);
        assert_eq!(summary.sensor_failures, 1);
        assert!(summary.remaining.is_exhausted());
    }
}
