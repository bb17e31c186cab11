//! Move selection for the machine side.

use fastrand::Rng;
use ufmt::derive::uDebug;

use crate::{
    board::{Board, GameResult},
    consts::WIN_SCORE,
    side::Side,
    square::Square,
};

/// How the machine chooses its moves, fixed for the whole game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, uDebug)]
pub enum Mode {
    Random,
    Calculated,
}

/// Picks the machine's next square, or `None` if the board is full.
pub fn choose(mode: Mode, board: &Board, rng: &mut Rng) -> Option<Square> {
    match mode {
        Mode::Random => pick_random(board, rng),
        Mode::Calculated if board.move_count() <= 1 => Some(pick_opening(board)),
        Mode::Calculated => pick_optimal(board),
    }
}

/// A uniformly chosen empty square.
pub fn pick_random(board: &Board, rng: &mut Rng) -> Option<Square> {
    let empty = board.empty_squares().count();
    if empty == 0 {
        return None;
    }
    board.empty_squares().nth(rng.usize(..empty))
}

/// Centre if free, otherwise the top-left corner. Only meaningful in the
/// first two moves of a game.
pub fn pick_opening(board: &Board) -> Square {
    if board.is_empty(Square::CENTER) {
        Square::CENTER
    } else {
        Square::CORNER
    }
}

/// Exhaustive minimax from the machine's point of view.
///
/// An immediately winning square is returned as soon as it is found; otherwise
/// the lowest-indexed square with the best score wins.
pub fn pick_optimal(board: &Board) -> Option<Square> {
    let mut scratch = *board;
    let mut best: Option<(Square, i8)> = None;
    for square in board.empty_squares() {
        scratch.place(square, Side::Machine);
        if scratch.evaluate() == GameResult::MachineWin {
            return Some(square);
        }
        let score = minimax(&mut scratch, false);
        scratch.lift(square);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((square, score));
        }
    }
    best.map(|(square, _)| square)
}

fn minimax(board: &mut Board, maximizing: bool) -> i8 {
    match board.evaluate() {
        GameResult::MachineWin => return WIN_SCORE,
        GameResult::HumanWin => return -WIN_SCORE,
        GameResult::Draw => return 0,
        GameResult::InProgress => {}
    }
    let side = if maximizing { Side::Machine } else { Side::Human };
    let mut best = if maximizing { i8::MIN } else { i8::MAX };
    for square in Square::all() {
        if !board.is_empty(square) {
            continue;
        }
        board.place(square, side);
        let score = minimax(board, !maximizing);
        board.lift(square);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}
