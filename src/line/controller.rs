//! Run loop: start gating, repeated sort cycles, completion.

use core::marker::PhantomData;

use embedded_hal::delay::DelayNs;

use crate::color::ColorClassifier;
use crate::config::units::CycleCount;
use crate::config::TimingTable;
use crate::cycle::{CycleOutcome, SortCycle, Station};
use crate::error::Result;
use crate::io::{Actuator, ActuatorBank, ActuatorState, ColorSensor, Input, PistonPosition, SensorBank};
use crate::status::CycleObserver;

use super::builder::SortLineBuilder;
use super::state::{Armed, Complete, LineState, StateName, Standby};
use super::summary::RunSummary;

/// Sorting line controller with type-state safety.
///
/// Generic over:
/// - `IN`: input bank (optical sensor, go button, jog switches)
/// - `OUT`: output bank (conveyor, punch, diverter, piston coils)
/// - `S`: color sensor
/// - `D`: delay provider (must implement `DelayNs`)
/// - `O`: status observer
/// - `STATE`: Type-state marker (defaults to `Standby`)
pub struct SortLine<IN, OUT, S, D, O, STATE = Standby>
where
    IN: SensorBank,
    OUT: ActuatorBank,
    S: ColorSensor,
    D: DelayNs,
    O: CycleObserver,
    STATE: LineState,
{
    /// Hardware owned by the line.
    station: Station<IN, OUT, S, D, O>,

    /// Step durations.
    timing: TimingTable,

    /// Band classifier.
    classifier: ColorClassifier,

    /// Cycle count from configuration.
    configured_cycles: CycleCount,

    /// Tally of cycles run so far.
    summary: RunSummary,

    /// Type-state marker.
    _state: PhantomData<STATE>,
}

impl<IN, OUT, S, D, O, STATE> SortLine<IN, OUT, S, D, O, STATE>
where
    IN: SensorBank,
    OUT: ActuatorBank,
    S: ColorSensor,
    D: DelayNs,
    O: CycleObserver,
    STATE: LineState + StateName,
{
    /// Get the current state name.
    #[inline]
    pub fn state_name(&self) -> &'static str {
        STATE::name()
    }

    /// Output levels as last written.
    #[inline]
    pub fn actuators(&self) -> &ActuatorState {
        self.station.actuators()
    }

    /// Borrow the status observer.
    #[inline]
    pub fn observer(&self) -> &O {
        self.station.observer()
    }

    /// Step durations in use.
    #[inline]
    pub fn timing(&self) -> &TimingTable {
        &self.timing
    }

    /// Classifier in use.
    #[inline]
    pub fn classifier(&self) -> &ColorClassifier {
        &self.classifier
    }

    /// Cycle count from configuration.
    #[inline]
    pub fn configured_cycles(&self) -> CycleCount {
        self.configured_cycles
    }

    /// Tally of cycles run so far.
    #[inline]
    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    fn into_state<NEXT: LineState>(self) -> SortLine<IN, OUT, S, D, O, NEXT> {
        SortLine {
            station: self.station,
            timing: self.timing,
            classifier: self.classifier,
            configured_cycles: self.configured_cycles,
            summary: self.summary,
            _state: PhantomData,
        }
    }

    fn await_go(&mut self) -> Result<()> {
        self.station
            .await_input(Input::Go, self.timing.poll, None, false, true)?;
        Ok(())
    }
}

impl<IN, OUT, S, D> SortLine<IN, OUT, S, D, (), Standby>
where
    IN: SensorBank,
    OUT: ActuatorBank,
    S: ColorSensor,
    D: DelayNs,
{
    /// Create a builder for a new line.
    pub fn builder() -> SortLineBuilder<IN, OUT, S, D> {
        SortLineBuilder::new()
    }
}

impl<IN, OUT, S, D, O> SortLine<IN, OUT, S, D, O, Standby>
where
    IN: SensorBank,
    OUT: ActuatorBank,
    S: ColorSensor,
    D: DelayNs,
    O: CycleObserver,
{
    /// Create a line in the Standby state.
    pub(crate) fn new(
        station: Station<IN, OUT, S, D, O>,
        timing: TimingTable,
        classifier: ColorClassifier,
        configured_cycles: CycleCount,
    ) -> Self {
        Self {
            station,
            timing,
            classifier,
            configured_cycles,
            summary: RunSummary::default(),
            _state: PhantomData,
        }
    }

    /// Put the outputs in a safe state, show the splash screen and wait for
    /// the operator to press go.
    ///
    /// The piston can be jogged while waiting. Once go is pressed the piston
    /// is extended, closing the magazine.
    ///
    /// Returns a line in the `Armed` state.
    pub fn await_start(mut self) -> Result<SortLine<IN, OUT, S, D, O, Armed>> {
        self.station.set(Actuator::Punch, false)?;
        self.station.set(Actuator::Conveyor, false)?;
        self.station.set(Actuator::Diverter, false)?;

        self.station.observer_mut().on_standby();
        log_info!("line ready, waiting for start");

        self.await_go()?;
        self.station.move_piston(PistonPosition::Extended)?;

        Ok(self.into_state())
    }

    /// Wait for the start signal, then sort `cycles` parts.
    ///
    /// Convenience for [`await_start`](Self::await_start) followed by
    /// [`SortLine::run`] on the armed line.
    pub fn run(self, cycles: CycleCount) -> Result<(SortLine<IN, OUT, S, D, O, Complete>, RunSummary)> {
        self.await_start()?.run(cycles)
    }

    /// Like [`run`](Self::run) with the configured cycle count.
    pub fn run_configured(self) -> Result<(SortLine<IN, OUT, S, D, O, Complete>, RunSummary)> {
        let cycles = self.configured_cycles;
        self.run(cycles)
    }
}

impl<IN, OUT, S, D, O> SortLine<IN, OUT, S, D, O, Armed>
where
    IN: SensorBank,
    OUT: ActuatorBank,
    S: ColorSensor,
    D: DelayNs,
    O: CycleObserver,
{
    /// Run one sort cycle and count it.
    ///
    /// `remaining` is the count before this cycle; the outcome carries the
    /// count after it.
    ///
    /// # Errors
    ///
    /// [`LineError::CountExhausted`](crate::error::LineError::CountExhausted)
    /// if `remaining` is zero, plus any error from the cycle itself.
    pub fn run_cycle(&mut self, remaining: CycleCount) -> Result<CycleOutcome> {
        self.station.observer_mut().on_cycle_start(remaining);
        let outcome = SortCycle::new(&mut self.station, &self.timing, &self.classifier, remaining).run()?;
        self.summary.record(&outcome);
        Ok(outcome)
    }

    /// Block until the operator presses go, servicing the jog inputs.
    pub fn await_continue(&mut self) -> Result<()> {
        self.await_go()
    }

    /// Sort `cycles` parts, waiting for go after each one.
    ///
    /// Stops exactly when the count reaches zero, shows the completion
    /// screen and releases the color sensor. The sensor is also released
    /// when the run fails.
    ///
    /// Returns a line in the `Complete` state and the run tally.
    pub fn run(mut self, cycles: CycleCount) -> Result<(SortLine<IN, OUT, S, D, O, Complete>, RunSummary)> {
        self.station.observer_mut().on_run_started(cycles);
        log_info!("starting run of {} parts", cycles.get());

        let mut remaining = cycles;
        self.summary.remaining = remaining;
        while !remaining.is_exhausted() {
            match self.sort_next(remaining) {
                Ok(next) => remaining = next,
                Err(e) => {
                    self.station.release_sensor();
                    log_error!("run aborted after {} parts", self.summary.completed);
                    return Err(e);
                }
            }
        }

        let summary = self.summary;
        self.station.observer_mut().on_run_complete(&summary);
        self.station.release_sensor();
        log_info!(
            "run complete: {} parts, {} silver, {} purple, {} blue, {} unclassified",
            summary.completed,
            summary.silver,
            summary.purple,
            summary.blue,
            summary.unclassified
        );

        Ok((self.into_state(), summary))
    }

    fn sort_next(&mut self, remaining: CycleCount) -> Result<CycleCount> {
        let outcome = self.run_cycle(remaining)?;
        self.await_go()?;
        Ok(outcome.remaining)
    }
}

impl<IN, OUT, S, D, O> SortLine<IN, OUT, S, D, O, Complete>
where
    IN: SensorBank,
    OUT: ActuatorBank,
    S: ColorSensor,
    D: DelayNs,
    O: CycleObserver,
{
    /// Take the line apart, returning the hardware.
    pub fn into_parts(self) -> (IN, OUT, S, D, O) {
        self.station.into_parts()
    }
}
