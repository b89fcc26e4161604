//! The sorting station: every capability one cycle needs, owned together.

use embedded_hal::delay::DelayNs;

use crate::config::units::{ColorReading, Ticks};
use crate::error::{ActuatorError, Error, Result, SensorError};
use crate::io::{
    Actuator, ActuatorBank, ActuatorState, ColorSensor, Input, IoSnapshot, Pacer, PistonPosition,
    SensorBank, WaitOutcome,
};
use crate::status::CycleObserver;

/// Owns the line hardware and tracks the level of every output.
///
/// Generic over:
/// - `IN`: input bank
/// - `OUT`: output bank
/// - `S`: color sensor
/// - `D`: delay provider
/// - `O`: status observer
///
/// All output writes go through the station, which refuses to engage the
/// punch and the diverter at the same time.
pub struct Station<IN, OUT, S, D, O>
where
    IN: SensorBank,
    OUT: ActuatorBank,
    S: ColorSensor,
    D: DelayNs,
    O: CycleObserver,
{
    inputs: IN,
    outputs: OUT,
    sensor: S,
    pacer: Pacer<D>,
    observer: O,
    state: ActuatorState,
}

impl<IN, OUT, S, D, O> Station<IN, OUT, S, D, O>
where
    IN: SensorBank,
    OUT: ActuatorBank,
    S: ColorSensor,
    D: DelayNs,
    O: CycleObserver,
{
    /// Assemble a station. Outputs are assumed low until first written.
    pub fn new(inputs: IN, outputs: OUT, sensor: S, pacer: Pacer<D>, observer: O) -> Self {
        Self {
            inputs,
            outputs,
            sensor,
            pacer,
            observer,
            state: ActuatorState::default(),
        }
    }

    /// Output levels as last written.
    #[inline]
    pub fn actuators(&self) -> &ActuatorState {
        &self.state
    }

    /// Borrow the observer.
    #[inline]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutably borrow the observer.
    #[inline]
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Drive one output.
    ///
    /// # Errors
    ///
    /// [`ActuatorError::Interlock`] when engaging the punch while the
    /// diverter is engaged, or the reverse; pin errors from the bank.
    pub fn set(&mut self, actuator: Actuator, on: bool) -> Result<()> {
        write_tracked(&mut self.outputs, &mut self.state, actuator, on)
    }

    /// Move the magazine piston (coil A first, then coil B).
    pub fn move_piston(&mut self, position: PistonPosition) -> Result<()> {
        move_piston(&mut self.outputs, &mut self.state, position)
    }

    /// Read one input.
    pub fn read(&mut self, input: Input) -> Result<bool> {
        self.inputs.read(input)
    }

    /// Take one color reading.
    pub fn read_color(&mut self) -> core::result::Result<ColorReading, SensorError> {
        self.sensor.read_color()
    }

    /// Hold outputs for a fixed time, refreshing status every tick.
    pub fn dwell(&mut self, ticks: Ticks) -> Result<()> {
        for _ in 0..ticks.0 {
            report_tick(&mut self.inputs, &mut self.observer, &self.state);
            self.pacer.tick();
        }
        Ok(())
    }

    /// Block until `input` reads high.
    ///
    /// Polls every `poll` ticks. With `show_status` each poll refreshes the
    /// status indicators; with `jog` each poll also services the manual
    /// piston jog inputs.
    pub fn await_input(
        &mut self,
        input: Input,
        poll: Ticks,
        timeout: Option<Ticks>,
        show_status: bool,
        jog: bool,
    ) -> Result<WaitOutcome> {
        let Self {
            inputs,
            outputs,
            pacer,
            observer,
            state,
            ..
        } = self;

        pacer.wait_until(poll, timeout, || {
            if inputs.read(input)? {
                return Ok(true);
            }
            if jog {
                jog_piston(inputs, outputs, state)?;
            }
            if show_status {
                report_tick(inputs, observer, state);
            }
            Ok(false)
        })
    }

    /// Service the jog inputs once.
    ///
    /// Jog-retract is checked before jog-extend, so holding both leaves the
    /// piston extended.
    pub fn jog(&mut self) -> Result<()> {
        jog_piston(&mut self.inputs, &mut self.outputs, &mut self.state)
    }

    /// Best-effort stop of conveyor, punch and diverter.
    ///
    /// Used on error paths; write failures are logged and skipped.
    pub fn safe_stop(&mut self) {
        for actuator in [Actuator::Conveyor, Actuator::Punch, Actuator::Diverter] {
            if self.set(actuator, false).is_err() {
                log_error!("failed to stop {}", actuator.name());
            }
        }
    }

    /// Hand the color sensor's converter back.
    pub fn release_sensor(&mut self) {
        self.sensor.release();
    }

    /// Take the station apart.
    pub fn into_parts(self) -> (IN, OUT, S, D, O) {
        (
            self.inputs,
            self.outputs,
            self.sensor,
            self.pacer.into_inner(),
            self.observer,
        )
    }
}

fn interlock(state: &ActuatorState, actuator: Actuator, on: bool) -> Result<()> {
    if !on {
        return Ok(());
    }
    let other = match actuator {
        Actuator::Punch => Actuator::Diverter,
        Actuator::Diverter => Actuator::Punch,
        _ => return Ok(()),
    };
    if state.get(other) {
        return Err(Error::Actuator(ActuatorError::Interlock {
            requested: actuator,
            engaged: other,
        }));
    }
    Ok(())
}

fn write_tracked<OUT: ActuatorBank>(
    outputs: &mut OUT,
    state: &mut ActuatorState,
    actuator: Actuator,
    on: bool,
) -> Result<()> {
    interlock(state, actuator, on)?;
    outputs.write(actuator, on)?;
    state.set(actuator, on);
    Ok(())
}

fn move_piston<OUT: ActuatorBank>(
    outputs: &mut OUT,
    state: &mut ActuatorState,
    position: PistonPosition,
) -> Result<()> {
    let (a, b) = position.coils();
    write_tracked(outputs, state, Actuator::PistonA, a)?;
    write_tracked(outputs, state, Actuator::PistonB, b)
}

fn jog_piston<IN: SensorBank, OUT: ActuatorBank>(
    inputs: &mut IN,
    outputs: &mut OUT,
    state: &mut ActuatorState,
) -> Result<()> {
    if inputs.read(Input::JogRetract)? {
        move_piston(outputs, state, PistonPosition::Retracted)?;
    }
    if inputs.read(Input::JogExtend)? {
        move_piston(outputs, state, PistonPosition::Extended)?;
    }
    Ok(())
}

fn report_tick<IN: SensorBank, O: CycleObserver>(inputs: &mut IN, observer: &mut O, state: &ActuatorState) {
    if !observer.tracks_io() {
        return;
    }
    match inputs.snapshot() {
        Ok(sensors) => observer.on_tick(&IoSnapshot {
            sensors,
            actuators: *state,
        }),
        Err(_) => log_warn!("input read failed, status refresh skipped"),
    }
}
