//! Observation hooks invoked by the controller.

use crate::color::ColorCategory;
use crate::config::units::{ColorReading, CycleCount};
use crate::cycle::{CyclePhase, CycleReport};
use crate::io::IoSnapshot;
use crate::line::RunSummary;

/// Receives notifications at fixed points of a run.
///
/// Observers only watch: nothing they do feeds back into control
/// decisions. Every hook defaults to a no-op, and `()` observes nothing.
pub trait CycleObserver {
    /// Whether [`on_tick`](Self::on_tick) wants live I/O.
    ///
    /// When `false` the controller skips the per-tick input reads.
    fn tracks_io(&self) -> bool {
        false
    }

    /// Line is powered up and waiting for the operator to start.
    fn on_standby(&mut self) {}

    /// Operator started a run of `cycles` parts.
    fn on_run_started(&mut self, _cycles: CycleCount) {}

    /// A sort cycle is starting with `remaining` cycles left, this one included.
    fn on_cycle_start(&mut self, _remaining: CycleCount) {}

    /// One dwell or poll tick is about to elapse.
    fn on_tick(&mut self, _io: &IoSnapshot) {}

    /// The sort cycle entered a phase.
    fn on_phase(&mut self, _phase: CyclePhase) {}

    /// Color read finished; `None` when the sensor failed.
    fn on_reading(&mut self, _reading: Option<ColorReading>) {}

    /// Part classified.
    fn on_category(&mut self, _category: ColorCategory) {}

    /// A cycle finished and the conveyor is stopped.
    fn on_cycle_complete(&mut self, _report: &CycleReport) {}

    /// Every cycle has run.
    fn on_run_complete(&mut self, _summary: &RunSummary) {}
}

impl CycleObserver for () {}

impl<T: CycleObserver + ?Sized> CycleObserver for &mut T {
    fn tracks_io(&self) -> bool {
        (**self).tracks_io()
    }

    fn on_standby(&mut self) {
        (**self).on_standby()
    }

    fn on_run_started(&mut self, cycles: CycleCount) {
        (**self).on_run_started(cycles)
    }

    fn on_cycle_start(&mut self, remaining: CycleCount) {
        (**self).on_cycle_start(remaining)
    }

    fn on_tick(&mut self, io: &IoSnapshot) {
        (**self).on_tick(io)
    }

    fn on_phase(&mut self, phase: CyclePhase) {
        (**self).on_phase(phase)
    }

    fn on_reading(&mut self, reading: Option<ColorReading>) {
        (**self).on_reading(reading)
    }

    fn on_category(&mut self, category: ColorCategory) {
        (**self).on_category(category)
    }

    fn on_cycle_complete(&mut self, report: &CycleReport) {
        (**self).on_cycle_complete(report)
    }

    fn on_run_complete(&mut self, summary: &RunSummary) {
        (**self).on_run_complete(summary)
    }
}
