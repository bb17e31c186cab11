//! Output side of the game: indicator lights and the converter trigger.
//!
//! Implementations are fire-and-forget; nothing here can fail back into the game.

use crate::{board::GameResult, side::Side, square::Square};

pub trait Panel {
    /// Highlights the square the human is currently pointing at.
    fn preview(&mut self, square: Square);
    fn clear_preview(&mut self, square: Square);
    /// Lights `square` permanently in `side`'s colour.
    fn confirm(&mut self, square: Square, side: Side);
    /// Drives the whose-turn lamps; `None` turns both off.
    fn show_turn(&mut self, side: Option<Side>);
    fn render_result(&mut self, result: GameResult);
}

pub trait Sampler {
    /// Arms the next analog conversion.
    fn request(&mut self);
    /// Stops sampling until the next [`Sampler::request`].
    fn cancel(&mut self);
}
