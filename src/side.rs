use ufmt::derive::uDebug;

/// Who owns a mark, or whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, uDebug)]
pub enum Side {
    Human,
    Machine,
}

impl Side {
    pub const FIRST: Self = Self::Human;

    pub fn flip(&mut self) {
        *self = self.opponent();
    }

    pub const fn opponent(self) -> Self {
        match self {
            Self::Human => Self::Machine,
            Self::Machine => Self::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_alternates() {
        let mut side = Side::FIRST;
        side.flip();
        assert_eq!(side, Side::Machine);
        side.flip();
        assert_eq!(side, Side::Human);
    }
}
