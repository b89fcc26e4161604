//! Named line inputs and outputs, and the banks that serve them.

use crate::error::Result;

/// Digital inputs read by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Input {
    /// Optical sensor; high while a part breaks the beam.
    Optical,
    /// Operator go button.
    Go,
    /// Manual jog: retract the magazine piston.
    JogRetract,
    /// Manual jog: extend the magazine piston.
    JogExtend,
}

impl Input {
    /// All inputs in display order.
    pub const ALL: [Input; 4] = [Input::Optical, Input::Go, Input::JogRetract, Input::JogExtend];

    /// Name for logs and errors.
    pub const fn name(self) -> &'static str {
        match self {
            Input::Optical => "optical",
            Input::Go => "go",
            Input::JogRetract => "jog-retract",
            Input::JogExtend => "jog-extend",
        }
    }
}

/// Digital outputs driven by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Actuator {
    /// Conveyor belt motor.
    Conveyor,
    /// Pneumatic punch.
    Punch,
    /// Diverter solenoid.
    Diverter,
    /// Magazine piston valve, coil A (energized to retract).
    PistonA,
    /// Magazine piston valve, coil B (energized to extend).
    PistonB,
}

impl Actuator {
    /// All outputs in display order.
    pub const ALL: [Actuator; 5] = [
        Actuator::Conveyor,
        Actuator::Punch,
        Actuator::Diverter,
        Actuator::PistonA,
        Actuator::PistonB,
    ];

    /// Name for logs and errors.
    pub const fn name(self) -> &'static str {
        match self {
            Actuator::Conveyor => "conveyor",
            Actuator::Punch => "punch",
            Actuator::Diverter => "diverter",
            Actuator::PistonA => "piston-a",
            Actuator::PistonB => "piston-b",
        }
    }
}

/// Magazine piston position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PistonPosition {
    /// Pulled back; the next part drops into the eject slot.
    Retracted,
    /// Pushed forward; the part is ejected onto the track.
    Extended,
}

impl PistonPosition {
    /// Coil levels `(A, B)` in the order they are written.
    pub const fn coils(self) -> (bool, bool) {
        match self {
            PistonPosition::Retracted => (true, false),
            PistonPosition::Extended => (false, true),
        }
    }
}

/// Logical level of every output, as last written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorState {
    /// Conveyor running.
    pub conveyor: bool,
    /// Punch extended.
    pub punch: bool,
    /// Diverter engaged.
    pub diverter: bool,
    /// Piston coil A energized.
    pub piston_a: bool,
    /// Piston coil B energized.
    pub piston_b: bool,
}

impl ActuatorState {
    /// Level of one output.
    pub const fn get(&self, actuator: Actuator) -> bool {
        match actuator {
            Actuator::Conveyor => self.conveyor,
            Actuator::Punch => self.punch,
            Actuator::Diverter => self.diverter,
            Actuator::PistonA => self.piston_a,
            Actuator::PistonB => self.piston_b,
        }
    }

    /// Record a new level for one output.
    pub fn set(&mut self, actuator: Actuator, on: bool) {
        match actuator {
            Actuator::Conveyor => self.conveyor = on,
            Actuator::Punch => self.punch = on,
            Actuator::Diverter => self.diverter = on,
            Actuator::PistonA => self.piston_a = on,
            Actuator::PistonB => self.piston_b = on,
        }
    }

    /// Piston position, if the coils agree on one.
    pub const fn piston(&self) -> Option<PistonPosition> {
        match (self.piston_a, self.piston_b) {
            (true, false) => Some(PistonPosition::Retracted),
            (false, true) => Some(PistonPosition::Extended),
            _ => None,
        }
    }
}

/// One read of every input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorState {
    /// A part is breaking the optical beam.
    pub beam_broken: bool,
    /// Go button held.
    pub go: bool,
    /// Jog-retract input held.
    pub jog_retract: bool,
    /// Jog-extend input held.
    pub jog_extend: bool,
}

impl SensorState {
    /// Level of one input.
    pub const fn get(&self, input: Input) -> bool {
        match input {
            Input::Optical => self.beam_broken,
            Input::Go => self.go,
            Input::JogRetract => self.jog_retract,
            Input::JogExtend => self.jog_extend,
        }
    }
}

/// Inputs and outputs at one poll tick, for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IoSnapshot {
    /// Fresh input levels.
    pub sensors: SensorState,
    /// Output levels as last written.
    pub actuators: ActuatorState,
}

/// Source of the line's digital inputs.
pub trait SensorBank {
    /// Read one input.
    fn read(&mut self, input: Input) -> Result<bool>;

    /// Read every input once.
    fn snapshot(&mut self) -> Result<SensorState> {
        Ok(SensorState {
            beam_broken: self.read(Input::Optical)?,
            go: self.read(Input::Go)?,
            jog_retract: self.read(Input::JogRetract)?,
            jog_extend: self.read(Input::JogExtend)?,
        })
    }
}

/// Sink for the line's digital outputs.
pub trait ActuatorBank {
    /// Drive one output.
    fn write(&mut self, actuator: Actuator, on: bool) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piston_coils() {
        let mut state = ActuatorState::default();
        assert_eq!(state.piston(), None);

        let (a, b) = PistonPosition::Retracted.coils();
        state.set(Actuator::PistonA, a);
        state.set(Actuator::PistonB, b);
        assert_eq!(state.piston(), Some(PistonPosition::Retracted));

        let (a, b) = PistonPosition::Extended.coils();
        state.set(Actuator::PistonA, a);
        state.set(Actuator::PistonB, b);
        assert_eq!(state.piston(), Some(PistonPosition::Extended));
    }

    #[test]
    fn test_actuator_state_roundtrip() {
        let mut state = ActuatorState::default();
        for actuator in Actuator::ALL {
            assert!(!state.get(actuator));
            state.set(actuator, true);
            assert!(state.get(actuator));
        }
    }
}
