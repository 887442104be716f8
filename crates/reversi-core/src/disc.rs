use std::fmt;

/// Represents the color of a disc, and therefore of a player.
///
/// The `Disc` enum has two variants:
///
/// * `Black` - The player who moves first.
/// * `White` - The second player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    Black,
    White,
}

impl Disc {
    /// Both colors, Black first.
    pub const ALL: [Disc; 2] = [Disc::Black, Disc::White];

    /// Converts the disc to its corresponding character representation.
    ///
    /// # Returns
    ///
    /// * `'X'` for `Disc::Black`
    /// * `'O'` for `Disc::White`
    pub fn to_char(self) -> char {
        match self {
            Disc::Black => 'X',
            Disc::White => 'O',
        }
    }

    /// Returns the opposite disc.
    ///
    /// # Returns
    ///
    /// * `Disc::White` for `Disc::Black`
    /// * `Disc::Black` for `Disc::White`
    #[inline]
    pub fn opposite(self) -> Disc {
        match self {
            Disc::Black => Disc::White,
            Disc::White => Disc::Black,
        }
    }
}

impl fmt::Display for Disc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Disc::Black => write!(f, "BLACK"),
            Disc::White => write!(f, "WHITE"),
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Converts the cell to its character representation (`'-'` when empty).
    pub fn to_char(self) -> char {
        match self.disc() {
            Some(disc) => disc.to_char(),
            None => '-',
        }
    }

    /// Returns the disc occupying the cell, if any.
    #[inline]
    pub fn disc(self) -> Option<Disc> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Disc::Black),
            Cell::White => Some(Disc::White),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Disc> for Cell {
    #[inline]
    fn from(disc: Disc) -> Self {
        match disc {
            Disc::Black => Cell::Black,
            Disc::White => Cell::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for disc in Disc::ALL {
            assert_ne!(disc.opposite(), disc);
            assert_eq!(disc.opposite().opposite(), disc);
        }
    }

    #[test]
    fn test_cell_round_trip() {
        assert_eq!(Cell::from(Disc::Black).disc(), Some(Disc::Black));
        assert_eq!(Cell::from(Disc::White).disc(), Some(Disc::White));
        assert_eq!(Cell::Empty.disc(), None);
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn test_chars() {
        assert_eq!(Cell::Empty.to_char(), '-');
        assert_eq!(Cell::Black.to_char(), 'X');
        assert_eq!(Cell::White.to_char(), 'O');
        assert_eq!(Disc::White.to_string(), "WHITE");
    }
}
