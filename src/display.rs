use crate::millis::millis;
use core::{array::from_fn, convert::Infallible};

use arduino_hal::{
    hal::port::Dynamic,
    port::mode::{OpenDrain, Output},
    prelude::_unwrap_infallible_UnwrapInfallible,
};
use avr_hal_generic::{hal_v0::digital::v2::OutputPin, port::Pin};
use sensor_ttt::{
    consts::{CELLS, SIZE},
    GameResult, Panel, Side, Square,
};

use crate::lamps::TurnLamps;

type Frame = [[DisplayPixel; SIZE]; SIZE];

#[derive(Clone, Copy, Default)]
pub struct DisplayPixel {
    red: bool,
    blue: bool,
}

impl DisplayPixel {
    pub const OFF: Self = Self {
        red: false,
        blue: false,
    };

    pub const fn and(self, bool: bool) -> Self {
        Self {
            red: self.red && bool,
            blue: self.blue && bool,
        }
    }

    pub const fn red() -> Self {
        Self {
            red: true,
            blue: false,
        }
    }

    pub const fn blue() -> Self {
        Self {
            red: false,
            blue: true,
        }
    }

    pub const fn red_if(cond: bool) -> Self {
        Self {
            red: cond,
            blue: !cond,
        }
    }

    pub fn write_to(
        self,
        red_pin: &mut Pin<Output, Dynamic>,
        blue_pin: &mut Pin<Output, Dynamic>,
    ) -> Result<(), Infallible> {
        red_pin.set_state(self.red.into())?;
        blue_pin.set_state(self.blue.into())?;
        Ok(())
    }
}

impl From<Side> for DisplayPixel {
    fn from(side: Side) -> Self {
        match side {
            Side::Machine => Self::red(),
            Side::Human => Self::blue(),
        }
    }
}

/// The multiplexed 3x3 red/blue matrix plus the turn lamps.
pub struct Display {
    buffer: Frame,
    preview: Option<Square>,
    result: Option<GameResult>,
    lamps: TurnLamps,
    blue_columns: [Pin<Output, Dynamic>; SIZE],
    red_columns: [Pin<Output, Dynamic>; SIZE],
    led_rows: [Pin<OpenDrain, Dynamic>; SIZE],
}

impl Display {
    pub const fn new(
        lamps: TurnLamps,
        blue_columns: [Pin<Output, Dynamic>; SIZE],
        red_columns: [Pin<Output, Dynamic>; SIZE],
        led_rows: [Pin<OpenDrain, Dynamic>; SIZE],
    ) -> Self {
        Self {
            buffer: [[DisplayPixel::OFF; SIZE]; SIZE],
            preview: None,
            result: None,
            lamps,
            blue_columns,
            red_columns,
            led_rows,
        }
    }

    fn frame(&self) -> Frame {
        let now = millis();
        let blink = now % 1000 < 500;
        let mut pixels = match self.result {
            None | Some(GameResult::InProgress) => {
                let mut frame = self.buffer;
                if let Some(square) = self.preview {
                    frame[square.y()][square.x()] = DisplayPixel::blue().and(blink);
                }
                return frame;
            }
            Some(GameResult::HumanWin) => from_fn::<_, CELLS, _>(|index| {
                DisplayPixel::blue().and(index % 2 == usize::from(blink))
            }),
            Some(GameResult::MachineWin) => from_fn::<_, CELLS, _>(|index| {
                DisplayPixel::red().and(index % 2 == usize::from(blink))
            }),
            Some(GameResult::Draw) => from_fn::<_, CELLS, _>(|index| {
                DisplayPixel::red_if(index % 2 == usize::from(blink))
            }),
        }
        .into_iter();
        from_fn(|_| from_fn(|_| pixels.next().unwrap_or_default()))
    }

    pub fn show(&mut self) {
        let frame = self.frame();
        let y = millis() as usize % SIZE;
        for column in [self.red_columns.each_mut(), self.blue_columns.each_mut()].as_flattened_mut()
        {
            column.set_low();
        }
        for (row, active) in self
            .led_rows
            .iter_mut()
            .zip(from_fn::<_, SIZE, _>(|index| index == y))
        {
            row.set_state((!active).into()).unwrap_infallible();
        }
        for (x, pixel) in frame[y].iter().enumerate() {
            pixel
                .write_to(&mut self.red_columns[x], &mut self.blue_columns[x])
                .unwrap_infallible();
        }
    }
}

impl Panel for Display {
    fn preview(&mut self, square: Square) {
        self.preview = Some(square);
    }

    fn clear_preview(&mut self, square: Square) {
        if self.preview == Some(square) {
            self.preview = None;
        }
    }

    fn confirm(&mut self, square: Square, side: Side) {
        self.buffer[square.y()][square.x()] = side.into();
    }

    fn show_turn(&mut self, side: Option<Side>) {
        self.lamps.show(side);
    }

    fn render_result(&mut self, result: GameResult) {
        self.preview = None;
        self.result = Some(result);
    }
}

macro_rules! display {
    ($pins:expr) => {{
        use crate::{display::Display, lamps::TurnLamps, pin_triple};
        Display::new(
            TurnLamps::new(
                $pins.a0.into_output().downgrade(),
                $pins.a1.into_output().downgrade(),
            ),
            pin_triple!($pins, into_output, d2, d4, d6),
            pin_triple!($pins, into_output, d3, d5, d7),
            pin_triple!($pins, into_opendrain, d8, d9, d10),
        )
    }};
}

pub(crate) use display;
