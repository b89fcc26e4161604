//! Sensor and actuator banks over embedded-hal 1.0 pins.

use embedded_hal::digital::{InputPin, OutputPin};

use crate::error::{ActuatorError, Error, Result, SensorError};

use super::channels::{Actuator, ActuatorBank, Input, SensorBank};

/// Line inputs backed by four `InputPin`s. All inputs are active high.
///
/// Generic over:
/// - `OPT`: optical sensor
/// - `GO`: operator go button
/// - `JR`: jog-retract switch
/// - `JE`: jog-extend switch
pub struct PinSensors<OPT, GO, JR, JE>
where
    OPT: InputPin,
    GO: InputPin,
    JR: InputPin,
    JE: InputPin,
{
    optical: OPT,
    go: GO,
    jog_retract: JR,
    jog_extend: JE,
}

impl<OPT, GO, JR, JE> PinSensors<OPT, GO, JR, JE>
where
    OPT: InputPin,
    GO: InputPin,
    JR: InputPin,
    JE: InputPin,
{
    /// Bundle the input pins.
    pub fn new(optical: OPT, go: GO, jog_retract: JR, jog_extend: JE) -> Self {
        Self {
            optical,
            go,
            jog_retract,
            jog_extend,
        }
    }

    /// Release the pins.
    pub fn release(self) -> (OPT, GO, JR, JE) {
        (self.optical, self.go, self.jog_retract, self.jog_extend)
    }
}

impl<OPT, GO, JR, JE> SensorBank for PinSensors<OPT, GO, JR, JE>
where
    OPT: InputPin,
    GO: InputPin,
    JR: InputPin,
    JE: InputPin,
{
    fn read(&mut self, input: Input) -> Result<bool> {
        let level = match input {
            Input::Optical => self.optical.is_high().ok(),
            Input::Go => self.go.is_high().ok(),
            Input::JogRetract => self.jog_retract.is_high().ok(),
            Input::JogExtend => self.jog_extend.is_high().ok(),
        };
        level.ok_or(Error::Sensor(SensorError::InputPin(input)))
    }
}

/// Line outputs backed by five `OutputPin`s. All outputs are active high.
///
/// Generic over:
/// - `CONV`: conveyor motor
/// - `PUNCH`: punch valve
/// - `DIV`: diverter solenoid
/// - `PA`, `PB`: magazine piston valve coils
pub struct PinActuators<CONV, PUNCH, DIV, PA, PB>
where
    CONV: OutputPin,
    PUNCH: OutputPin,
    DIV: OutputPin,
    PA: OutputPin,
    PB: OutputPin,
{
    conveyor: CONV,
    punch: PUNCH,
    diverter: DIV,
    piston_a: PA,
    piston_b: PB,
}

impl<CONV, PUNCH, DIV, PA, PB> PinActuators<CONV, PUNCH, DIV, PA, PB>
where
    CONV: OutputPin,
    PUNCH: OutputPin,
    DIV: OutputPin,
    PA: OutputPin,
    PB: OutputPin,
{
    /// Bundle the output pins.
    pub fn new(conveyor: CONV, punch: PUNCH, diverter: DIV, piston_a: PA, piston_b: PB) -> Self {
        Self {
            conveyor,
            punch,
            diverter,
            piston_a,
            piston_b,
        }
    }

    /// Release the pins.
    pub fn release(self) -> (CONV, PUNCH, DIV, PA, PB) {
        (
            self.conveyor,
            self.punch,
            self.diverter,
            self.piston_a,
            self.piston_b,
        )
    }
}

fn drive<P: OutputPin>(pin: &mut P, on: bool) -> core::result::Result<(), P::Error> {
    if on {
        pin.set_high()
    } else {
        pin.set_low()
    }
}

impl<CONV, PUNCH, DIV, PA, PB> ActuatorBank for PinActuators<CONV, PUNCH, DIV, PA, PB>
where
    CONV: OutputPin,
    PUNCH: OutputPin,
    DIV: OutputPin,
    PA: OutputPin,
    PB: OutputPin,
{
    fn write(&mut self, actuator: Actuator, on: bool) -> Result<()> {
        let ok = match actuator {
            Actuator::Conveyor => drive(&mut self.conveyor, on).is_ok(),
            Actuator::Punch => drive(&mut self.punch, on).is_ok(),
            Actuator::Diverter => drive(&mut self.diverter, on).is_ok(),
            Actuator::PistonA => drive(&mut self.piston_a, on).is_ok(),
            Actuator::PistonB => drive(&mut self.piston_b, on).is_ok(),
        };
        if ok {
            Ok(())
        } else {
            Err(Error::Actuator(ActuatorError::Pin(actuator)))
        }
    }
}
