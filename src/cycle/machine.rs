//! Sort-cycle state machine.

use embedded_hal::delay::DelayNs;

use crate::color::{ColorCategory, ColorClassifier};
use crate::config::units::{ColorReading, CycleCount, Ticks};
use crate::config::TimingTable;
use crate::error::{LineError, Result, SensorError};
use crate::io::{Actuator, ActuatorBank, ColorSensor, Input, PistonPosition, SensorBank, WaitOutcome};
use crate::status::CycleObserver;

use super::phase::CyclePhase;
use super::report::{CycleOutcome, CycleReport};
use super::station::Station;

/// One pass of eject, detect, convey, classify, route and settle.
///
/// Borrows the station for the duration of the cycle; nothing else drives
/// the outputs until it finishes. Drive it with [`step`](Self::step) one
/// phase at a time, or to the end with [`run`](Self::run).
pub struct SortCycle<'a, IN, OUT, S, D, O>
where
    IN: SensorBank,
    OUT: ActuatorBank,
    S: ColorSensor,
    D: DelayNs,
    O: CycleObserver,
{
    station: &'a mut Station<IN, OUT, S, D, O>,
    timing: &'a TimingTable,
    classifier: &'a ColorClassifier,
    phase: CyclePhase,
    remaining: CycleCount,
    reading: Option<ColorReading>,
    category: ColorCategory,
    beam_wait: Ticks,
}

impl<'a, IN, OUT, S, D, O> SortCycle<'a, IN, OUT, S, D, O>
where
    IN: SensorBank,
    OUT: ActuatorBank,
    S: ColorSensor,
    D: DelayNs,
    O: CycleObserver,
{
    /// Prepare a cycle. Nothing is driven until the first step.
    pub fn new(
        station: &'a mut Station<IN, OUT, S, D, O>,
        timing: &'a TimingTable,
        classifier: &'a ColorClassifier,
        remaining: CycleCount,
    ) -> Self {
        Self {
            station,
            timing,
            classifier,
            phase: CyclePhase::RetractMagazinePiston,
            remaining,
            reading: None,
            category: ColorCategory::Unclassified,
            beam_wait: Ticks::ZERO,
        }
    }

    /// Phase that the next [`step`](Self::step) executes.
    #[inline]
    pub fn phase(&self) -> CyclePhase {
        self.phase
    }

    /// True once the cycle has settled.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.phase == CyclePhase::Done
    }

    /// Cycles left, counting this one until it settles.
    #[inline]
    pub fn remaining(&self) -> CycleCount {
        self.remaining
    }

    /// Execute the current phase and advance.
    ///
    /// Returns the phase that will run next. Stepping a finished cycle does
    /// nothing.
    ///
    /// # Errors
    ///
    /// Pin errors, interlock violations, and [`SensorError::BeamTimeout`]
    /// when a beam timeout is configured. A failed color read is not an
    /// error: the part is routed as unclassified. Starting a cycle with an
    /// exhausted count fails with [`LineError::CountExhausted`] before any
    /// output is driven.
    pub fn step(&mut self) -> Result<CyclePhase> {
        let phase = self.phase;
        if phase == CyclePhase::Done {
            return Ok(phase);
        }
        self.check_count()?;
        self.station.observer_mut().on_phase(phase);
        log_debug!("phase {}", phase.name());

        let next = match phase {
            CyclePhase::RetractMagazinePiston => {
                self.station.move_piston(PistonPosition::Retracted)?;
                self.station.dwell(self.timing.piston_settle)?;
                CyclePhase::ExtendMagazinePiston
            }
            CyclePhase::ExtendMagazinePiston => {
                self.station.move_piston(PistonPosition::Extended)?;
                CyclePhase::AwaitOpticalBreak
            }
            CyclePhase::AwaitOpticalBreak => {
                let outcome = self.station.await_input(
                    Input::Optical,
                    self.timing.poll,
                    self.timing.beam_timeout,
                    true,
                    false,
                )?;
                match outcome {
                    WaitOutcome::Ready(waited) => {
                        self.beam_wait = waited;
                        CyclePhase::Convey
                    }
                    WaitOutcome::TimedOut(waited) => {
                        log_error!("no part at optical sensor after {} ticks", waited.0);
                        return Err(SensorError::BeamTimeout { waited }.into());
                    }
                }
            }
            CyclePhase::Convey => {
                self.station.set(Actuator::Conveyor, true)?;
                self.station.dwell(self.timing.convey_settle)?;
                self.reading = match self.station.read_color() {
                    Ok(reading) => Some(reading),
                    Err(e) => {
                        log_warn!("color read failed: {}", e);
                        None
                    }
                };
                self.station.observer_mut().on_reading(self.reading);
                CyclePhase::Classify
            }
            CyclePhase::Classify => {
                self.category = match self.reading {
                    Some(reading) => self.classifier.classify(reading),
                    None => ColorCategory::Unclassified,
                };
                self.station.observer_mut().on_category(self.category);
                CyclePhase::Route(self.category)
            }
            CyclePhase::Route(category) => {
                self.route(category)?;
                CyclePhase::Settle
            }
            CyclePhase::Settle => {
                self.station.set(Actuator::Conveyor, false)?;
                self.remaining = self.remaining.decremented().ok_or(LineError::CountExhausted)?;
                CyclePhase::Done
            }
            CyclePhase::Done => CyclePhase::Done,
        };

        self.phase = next;
        Ok(next)
    }

    /// Run every remaining phase.
    ///
    /// On error the conveyor, punch and diverter are switched off before the
    /// error is returned.
    pub fn run(mut self) -> Result<CycleOutcome> {
        self.check_count()?;
        while !self.is_done() {
            if let Err(e) = self.step() {
                self.station.safe_stop();
                return Err(e);
            }
        }

        let report = CycleReport {
            reading: self.reading,
            category: self.category,
            beam_wait: self.beam_wait,
        };
        log_info!(
            "sorted part: reading {} -> {}, {} left",
            self.reading.map(|r| r.0).unwrap_or(0),
            self.category.label(),
            self.remaining.get()
        );
        self.station.observer_mut().on_cycle_complete(&report);

        Ok(CycleOutcome {
            report,
            remaining: self.remaining,
        })
    }

    fn check_count(&self) -> Result<()> {
        if self.phase == CyclePhase::RetractMagazinePiston && self.remaining.is_exhausted() {
            log_error!("cycle requested with no cycles left");
            return Err(LineError::CountExhausted.into());
        }
        Ok(())
    }

    fn route(&mut self, category: ColorCategory) -> Result<()> {
        let t = self.timing;
        let st = &mut *self.station;
        match category {
            ColorCategory::Silver => {
                st.set(Actuator::Conveyor, true)?;
                st.dwell(t.silver_to_punch)?;
                st.set(Actuator::Conveyor, false)?;
                st.set(Actuator::Punch, true)?;
                st.dwell(t.punch_dwell)?;
                st.set(Actuator::Punch, false)?;
                st.set(Actuator::Diverter, true)?;
                st.set(Actuator::Conveyor, true)?;
                st.dwell(t.silver_sort)?;
                st.set(Actuator::Diverter, false)?;
            }
            ColorCategory::Purple => {
                st.set(Actuator::Conveyor, true)?;
                st.set(Actuator::Diverter, true)?;
                st.dwell(t.purple_sort)?;
                st.set(Actuator::Diverter, false)?;
            }
            ColorCategory::Blue | ColorCategory::Unclassified => {
                st.set(Actuator::Conveyor, true)?;
                st.dwell(t.pass_through)?;
            }
        }
        Ok(())
    }
}
