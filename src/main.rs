#![feature(abi_avr_interrupt)]
#![no_std]
#![no_main]

use arduino_hal::{
    adc::AdcSettings, pins, prelude::_unwrap_infallible_UnwrapInfallible, Adc, Peripherals,
};
use fastrand::Rng;
use millis::{init, millis, next_event, post};
use panic_halt as _;
use sensor_ttt::{BandDecoder, Coordinator, Event};

mod buttons;
mod display;
mod lamps;
mod millis;
mod sensor;

/// Full scale of the on-chip 10-bit converter.
const ADC_MAX: u16 = 1023;

#[arduino_hal::entry]
fn main() -> ! {
    let peripherals = Peripherals::take().unwrap();
    let pins = pins!(peripherals);
    let mut serial = arduino_hal::default_serial!(peripherals, pins, 57600);
    init(&peripherals.TC0);

    let mut adc = Adc::new(peripherals.ADC, AdcSettings::default());
    let seed = {
        let noise = pins.a5.into_analog_input(&mut adc);
        (0..64).fold(0u64, |seed, _| {
            (seed << 1) | u64::from(noise.analog_read(&mut adc) & 1)
        })
    };
    let channel = pins.a4.into_analog_input(&mut adc).into_channel();

    let mut buttons = buttons::buttons!(pins);
    let mut game = Coordinator::new(
        BandDecoder::scaled(ADC_MAX),
        display::display!(pins),
        sensor::Sensor::new(adc, channel),
        Rng::with_seed(seed),
    );
    ufmt::uwriteln!(&mut serial, "ready, pick a mode").unwrap_infallible();

    loop {
        for event in buttons.scan(millis()) {
            post(event);
        }
        if let Some(raw) = game.sampler_mut().poll() {
            post(Event::SampleReady(raw));
        }
        while !game.is_finished() {
            let Some(event) = next_event() else {
                break;
            };
            game.handle(event);
            if cfg!(debug_assertions) && !matches!(event, Event::SampleReady(_)) {
                ufmt::uwriteln!(&mut serial, "{:?} -> {:?}", event, game.phase())
                    .unwrap_infallible();
            }
        }
        game.panel_mut().show();
    }
}
