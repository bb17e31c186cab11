use arduino_hal::{adc::Channel, Adc};
use sensor_ttt::Sampler;

/// The position potentiometer, converted only while the game asks for it.
pub struct Sensor {
    adc: Adc,
    channel: Channel,
    armed: bool,
}

impl Sensor {
    pub const fn new(adc: Adc, channel: Channel) -> Self {
        Self {
            adc,
            channel,
            armed: false,
        }
    }

    /// Returns a finished conversion, if one was requested and is ready.
    pub fn poll(&mut self) -> Option<u16> {
        if !self.armed {
            return None;
        }
        match self.adc.read_nonblocking(&self.channel) {
            Ok(raw) => {
                self.armed = false;
                Some(raw)
            }
            Err(nb::Error::WouldBlock) => None,
            Err(nb::Error::Other(never)) => match never {},
        }
    }
}

impl Sampler for Sensor {
    fn request(&mut self) {
        self.armed = true;
    }

    fn cancel(&mut self) {
        self.armed = false;
    }
}
