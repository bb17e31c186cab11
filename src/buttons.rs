use arduino_hal::{
    hal::port::Dynamic,
    port::mode::{Input, PullUp},
};
use avr_hal_generic::port::Pin;
use sensor_ttt::{consts::DEBOUNCE_MILLIS, Event, Mode};

/// A pull-up push button that reports each debounced press once.
struct Button {
    pin: Pin<Input<PullUp>, Dynamic>,
    pressed: bool,
    changed_at: u32,
}

impl Button {
    const fn new(pin: Pin<Input<PullUp>, Dynamic>) -> Self {
        Self {
            pin,
            pressed: false,
            changed_at: 0,
        }
    }

    fn pressed_since(&mut self, now: u32) -> bool {
        let level = self.pin.is_low();
        if level == self.pressed || now.wrapping_sub(self.changed_at) < DEBOUNCE_MILLIS {
            return false;
        }
        self.pressed = level;
        self.changed_at = now;
        level
    }
}

pub struct Buttons {
    random: Button,
    calculated: Button,
    confirm: Button,
}

impl Buttons {
    pub const fn new([random, calculated, confirm]: [Pin<Input<PullUp>, Dynamic>; 3]) -> Self {
        Self {
            random: Button::new(random),
            calculated: Button::new(calculated),
            confirm: Button::new(confirm),
        }
    }

    /// Events for every button pressed since the last scan.
    pub fn scan(&mut self, now: u32) -> impl Iterator<Item = Event> {
        [
            self.random
                .pressed_since(now)
                .then_some(Event::ModeSelected(Mode::Random)),
            self.calculated
                .pressed_since(now)
                .then_some(Event::ModeSelected(Mode::Calculated)),
            self.confirm
                .pressed_since(now)
                .then_some(Event::ConfirmPressed),
        ]
        .into_iter()
        .flatten()
    }
}

#[macro_export]
macro_rules! pin_triple {
    ($pins:expr, $mode:ident, $($pin:ident),+) => {
        [$($pins.$pin.$mode().downgrade()),+]
    };
}

macro_rules! buttons {
    ($pins:expr) => {{
        use crate::{buttons::Buttons, pin_triple};
        Buttons::new(pin_triple!($pins, into_pull_up_input, d11, d12, a3))
    }};
}

pub(crate) use buttons;
