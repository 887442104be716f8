use std::fmt;
use std::str::FromStr;

/// Number of files that have a single-letter label `a`..`z`. Squares further right are
/// displayed as `(col, row)` and cannot be parsed.
pub const LETTERED_FILES: usize = 26;

/// Represents a cell coordinate on a board of any supported size.
///
/// Columns (files) are labelled with letters starting at `a` and rows (ranks) with
/// numbers starting at `1`, so on a 4x4 board:
///
/// ```text
///   a b c d
/// 1 . . . .
/// 2 . O X .
/// 3 . X O .
/// 4 . . . .
/// ```
///
/// Both coordinates are zero-based internally: `a1` is `(0, 0)` and `b3` is `(1, 2)`.
/// A `Square` carries no board size; whether it lies on a given board is checked by
/// the board itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    col: usize,
    row: usize,
}

impl Square {
    /// Creates a square from zero-based column and row.
    #[inline]
    pub const fn new(col: usize, row: usize) -> Square {
        Square { col, row }
    }

    /// Zero-based column index (the file letter minus `a`).
    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Zero-based row index (the rank number minus one).
    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the square one step away in the direction `(dc, dr)`.
    ///
    /// # Arguments
    ///
    /// * `dc` - Column delta, -1, 0 or 1.
    /// * `dr` - Row delta, -1, 0 or 1.
    /// * `size` - Board side length.
    ///
    /// # Returns
    ///
    /// `Some(Square)` if the neighbour is on a `size`x`size` board, `None` otherwise.
    #[inline]
    pub fn offset(self, dc: isize, dr: isize, size: usize) -> Option<Square> {
        let col = self.col.checked_add_signed(dc)?;
        let row = self.row.checked_add_signed(dr)?;
        (col < size && row < size).then_some(Square { col, row })
    }

    /// Iterates every square of a `size`x`size` board in column-major order:
    /// increasing column, then increasing row within each column.
    pub fn iter(size: usize) -> impl Iterator<Item = Square> {
        (0..size).flat_map(move |col| (0..size).map(move |row| Square::new(col, row)))
    }
}

/// Error type for square parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid square string format (a letter followed by a number)
    InvalidFormat,
    /// Invalid file character (must be a-z or A-Z)
    InvalidFile(char),
    /// Invalid rank (must be a number starting at 1)
    InvalidRank(String),
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidFormat => write!(
                f,
                "Invalid square format: must be a letter followed by a number (e.g., 'a2')"
            ),
            SquareError::InvalidFile(c) => write!(f, "Invalid file '{c}': must be a letter"),
            SquareError::InvalidRank(r) => {
                write!(f, "Invalid rank '{r}': must be a number starting at 1")
            }
        }
    }
}

impl std::error::Error for SquareError {}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses a square in algebraic notation (e.g., "a2", "D3").
    ///
    /// The file letter is case-insensitive and the rank is 1-based. No upper bound is
    /// checked against a board size: an off-board square parses fine and is simply
    /// illegal to play.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let file_char = chars.next().ok_or(SquareError::InvalidFormat)?;
        let rank_str = chars.as_str();
        if rank_str.is_empty() {
            return Err(SquareError::InvalidFormat);
        }

        if !file_char.is_ascii_alphabetic() {
            return Err(SquareError::InvalidFile(file_char));
        }

        let rank = rank_str
            .parse::<usize>()
            .ok()
            .filter(|&r| r >= 1 && rank_str.chars().all(|c| c.is_ascii_digit()))
            .ok_or_else(|| SquareError::InvalidRank(rank_str.to_string()))?;

        let col = (file_char.to_ascii_lowercase() as u8 - b'a') as usize;
        Ok(Square::new(col, rank - 1))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.col < LETTERED_FILES {
            write!(f, "{}{}", (b'a' + self.col as u8) as char, self.row + 1)
        } else {
            write!(f, "({}, {})", self.col, self.row)
        }
    }
}
