use arduino_hal::{
    hal::port::Dynamic, port::mode::Output, prelude::_unwrap_infallible_UnwrapInfallible,
};
use avr_hal_generic::port::Pin;
use embedded_hal::digital::{OutputPin, PinState};
use sensor_ttt::Side;

/// One lamp per side, lit while that side is to move.
pub struct TurnLamps {
    human: Pin<Output, Dynamic>,
    machine: Pin<Output, Dynamic>,
}

impl TurnLamps {
    pub fn new(mut human: Pin<Output, Dynamic>, mut machine: Pin<Output, Dynamic>) -> Self {
        human.set_low();
        machine.set_low();
        Self { human, machine }
    }

    pub fn show(&mut self, side: Option<Side>) {
        let lit = |lamp: Side| PinState::from(side == Some(lamp));
        OutputPin::set_state(&mut self.human, lit(Side::Human)).unwrap_infallible();
        OutputPin::set_state(&mut self.machine, lit(Side::Machine)).unwrap_infallible();
    }
}
