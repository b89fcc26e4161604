//! Hardware seams for cylinder-sort.
//!
//! The controller only touches hardware through these traits: named digital
//! inputs and outputs, a single-shot color sensor and a tick pacer over
//! `DelayNs`. Pin-backed implementations wrap embedded-hal 1.0 pins.

mod analog;
mod channels;
mod pacer;
mod pins;

pub use analog::{AnalogChannel, ColorSensor, ScaledColorSensor};
pub use channels::{
    Actuator, ActuatorBank, ActuatorState, Input, IoSnapshot, PistonPosition, SensorBank,
    SensorState,
};
pub use pacer::{Pacer, WaitOutcome};
pub use pins::{PinActuators, PinSensors};
