use core::ops::Index;

use itertools::Itertools;
use ufmt::derive::uDebug;

use crate::{
    consts::{CELLS, SIZE},
    side::Side,
    square::Square,
};

pub type Cell = Option<Side>;

/// Every row, column and diagonal, rows first.
const LINES: [[usize; SIZE]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, uDebug)]
pub enum GameResult {
    InProgress,
    HumanWin,
    MachineWin,
    Draw,
}

impl GameResult {
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub const fn winner(self) -> Option<Side> {
        match self {
            Self::HumanWin => Some(Side::Human),
            Self::MachineWin => Some(Side::Machine),
            Self::InProgress | Self::Draw => None,
        }
    }
}

/// The authoritative game board.
///
/// Results are never cached: [`Board::evaluate`] reads the cells every time,
/// so the search can place and lift hypothetical marks freely.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
    moves: u8,
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [[None; SIZE]; SIZE],
            moves: 0,
        }
    }

    /// Builds a board from row-major cells, counting every mark as an applied move.
    pub fn from_cells(cells: [Cell; CELLS]) -> Self {
        let mut board = Self::new();
        for (square, cell) in Square::all().zip(cells) {
            if let Some(side) = cell {
                board.apply(square, side);
            }
        }
        board
    }

    /// Marks `square` for `side`.
    ///
    /// # Panics
    ///
    /// If the square is already taken. The coordinator never offers one.
    pub fn apply(&mut self, square: Square, side: Side) {
        assert!(self[square].is_none(), "move onto an occupied square");
        self.place(square, side);
        self.moves += 1;
    }

    /// Number of moves applied since the board was created.
    pub const fn move_count(&self) -> u8 {
        self.moves
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self[square].is_none()
    }

    pub fn is_full(&self) -> bool {
        self.cells.as_flattened().iter().all(Option::is_some)
    }

    pub fn empty_squares(&self) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(|&square| self.is_empty(square))
    }

    pub fn evaluate(&self) -> GameResult {
        match self.winner() {
            Some(Side::Human) => GameResult::HumanWin,
            Some(Side::Machine) => GameResult::MachineWin,
            None if self.is_full() => GameResult::Draw,
            None => GameResult::InProgress,
        }
    }

    /// Whether `side` holds any complete line.
    pub fn has_line(&self, side: Side) -> bool {
        self.completed_lines().any(|owner| owner == side)
    }

    fn winner(&self) -> Option<Side> {
        self.completed_lines().next()
    }

    fn completed_lines(&self) -> impl Iterator<Item = Side> + '_ {
        LINES.iter().filter_map(|line| {
            line.iter()
                .map(|&index| self.cells[index / SIZE][index % SIZE])
                .all_equal_value()
                .ok()
                .flatten()
        })
    }

    pub(crate) fn place(&mut self, square: Square, side: Side) {
        self.cells[square.y()][square.x()] = Some(side);
    }

    pub(crate) fn lift(&mut self, square: Square) {
        self.cells[square.y()][square.x()] = None;
    }
}

impl Index<Square> for Board {
    type Output = Cell;

    fn index(&self, square: Square) -> &Cell {
        &self.cells[square.y()][square.x()]
    }
}
