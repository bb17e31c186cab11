pub const SIZE: usize = 3;
pub const CELLS: usize = SIZE * SIZE;

/// Ticks the human may spend before a move is forced on their behalf.
pub const HUMAN_TIMEOUT_TICKS: u8 = 10;
/// Ticks the machine waits before it plays, so its move is visible.
pub const MACHINE_DELAY_TICKS: u8 = 5;
pub const TICK_MILLIS: u32 = 1000;

pub const EVENT_CAPACITY: usize = 8;
pub const DEBOUNCE_MILLIS: u32 = 30;

pub const WIN_SCORE: i8 = 5;

/// Per-turn deadlines, in timer ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub human_timeout: u8,
    pub machine_delay: u8,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            human_timeout: HUMAN_TIMEOUT_TICKS,
            machine_delay: MACHINE_DELAY_TICKS,
        }
    }
}
