use heapless::Deque;
use ufmt::derive::uDebug;

use crate::{consts::EVENT_CAPACITY, engine::Mode};

/// Everything the hardware can tell the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, uDebug)]
pub enum Event {
    ModeSelected(Mode),
    TimerTick,
    SampleReady(u16),
    ConfirmPressed,
}

/// Bounded FIFO between the interrupt handlers and the game loop.
pub struct EventQueue(Deque<Event, EVENT_CAPACITY>);

impl EventQueue {
    pub const fn new() -> Self {
        Self(Deque::new())
    }

    /// Enqueues `event`, handing it back if the queue is full.
    ///
    /// A dropped button edge behaves like a bounce and a dropped sample is
    /// simply resampled, so callers may ignore the error.
    pub fn push(&mut self, event: Event) -> Result<(), Event> {
        self.0.push_back(event)
    }

    pub fn pop(&mut self) -> Option<Event> {
        self.0.pop_front()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
