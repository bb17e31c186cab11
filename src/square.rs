use ufmt::derive::uDebug;

use crate::consts::{CELLS, SIZE};

/// One of the nine board positions, row-major from the top left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, uDebug)]
pub struct Square(u8);

impl Square {
    pub const CENTER: Self = Self(4);
    pub const CORNER: Self = Self(0);

    pub const fn new(index: usize) -> Option<Self> {
        if index < CELLS {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    pub const fn at(x: usize, y: usize) -> Option<Self> {
        if x < SIZE && y < SIZE {
            Self::new(y * SIZE + x)
        } else {
            None
        }
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn x(self) -> usize {
        self.index() % SIZE
    }

    pub const fn y(self) -> usize {
        self.index() / SIZE
    }

    /// Every square in ascending index order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CELLS as u8).map(Self)
    }
}

/// Shorthand for tests and tables; panics on an out-of-range index.
pub const fn sq(index: usize) -> Square {
    match Square::new(index) {
        Some(square) => square,
        None => panic!("square index out of range"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_are_row_major() {
        assert_eq!(sq(5).x(), 2);
        assert_eq!(sq(5).y(), 1);
        assert_eq!(Square::at(0, 2), Some(sq(6)));
        assert_eq!(Square::at(3, 0), None);
    }

    #[test]
    fn rejects_indices_past_the_board() {
        assert_eq!(Square::new(8), Some(sq(8)));
        assert_eq!(Square::new(9), None);
    }

    #[test]
    fn all_is_ascending() {
        assert!(Square::all().map(Square::index).eq(0..CELLS));
    }
}
