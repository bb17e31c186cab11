//! Tic-tac-toe between a human with a position sensor and a machine opponent.
//!
//! The hardware only produces [`Event`]s; a single [`Coordinator`] owns the
//! board, the turn timers and the machine's [`engine`], and drives the
//! [`Panel`] in response.

#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod consts;
pub mod coordinator;
pub mod decoder;
pub mod engine;
pub mod event;
pub mod panel;
pub mod side;
pub mod square;

pub use board::{Board, Cell, GameResult};
pub use consts::Timing;
pub use coordinator::{Coordinator, Phase};
pub use decoder::{AnalogDecoder, BandDecoder};
pub use engine::Mode;
pub use event::{Event, EventQueue};
pub use panel::{Panel, Sampler};
pub use side::Side;
pub use square::{sq, Square};
