//! Reversi board representation on a square grid of configurable size.

use std::fmt;

use crate::disc::{Cell, Disc};
use crate::error::ConfigError;
use crate::flip;
use crate::move_list::MoveList;
use crate::square::Square;
use crate::types::Score;

/// Represents a Reversi board together with the color to move.
///
/// Cells are stored row by row: the cell at column `c`, row `r` lives at index
/// `r * size + c`. A `Board` is a plain value. Cloning it yields an independent snapshot,
/// which is how legal-move enumeration and the search explore positions without touching
/// the live game board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    turn: Disc,
}

impl Board {
    /// Creates a new `Board` with the initial Reversi setup and Black to move.
    ///
    /// With `m = size / 2`, Black occupies `(m - 1, m)` and `(m, m - 1)` and White occupies
    /// `(m - 1, m - 1)` and `(m, m)`, all given as `(column, row)`.
    ///
    /// # Arguments
    /// * `size` - Side length of the board. Must be even and at least 2.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if `size` is odd or below 2.
    pub fn new(size: usize) -> Result<Board, ConfigError> {
        validate_size(size)?;

        let mut board = Board {
            size,
            cells: vec![Cell::Empty; size * size],
            turn: Disc::Black,
        };

        let hi = size / 2;
        let lo = hi - 1;
        board.set(Square::new(lo, hi), Cell::Black);
        board.set(Square::new(hi, lo), Cell::Black);
        board.set(Square::new(lo, lo), Cell::White);
        board.set(Square::new(hi, hi), Cell::White);
        Ok(board)
    }

    /// Creates a `Board` from a string representation.
    ///
    /// Cells are read row by row, starting at `a1`. Whitespace is ignored, so the rows may
    /// be laid out on separate lines. Characters are interpreted as:
    /// - `'X'` for a Black disc
    /// - `'O'` for a White disc
    /// - `'-'` or `'.'` for an empty cell
    ///
    /// The side length is inferred from the number of cells.
    ///
    /// # Arguments
    /// * `board_string` - A string representing the board.
    /// * `turn` - The color to move in this position.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if a character is not recognised or the cell count is not
    /// the square of a valid board size.
    pub fn from_string(board_string: &str, turn: Disc) -> Result<Board, ConfigError> {
        let cells = board_string
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c.to_ascii_uppercase() {
                'X' => Ok(Cell::Black),
                'O' => Ok(Cell::White),
                '-' | '.' => Ok(Cell::Empty),
                other => Err(ConfigError::BoardString {
                    message: format!("unexpected character '{other}'"),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let size = cells.len().isqrt();
        if size * size != cells.len() {
            return Err(ConfigError::BoardString {
                message: format!("{} cells do not form a square board", cells.len()),
            });
        }
        validate_size(size)?;

        Ok(Board { size, cells, turn })
    }

    /// Returns the side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the color recorded as next to move in this position.
    #[inline]
    pub fn turn(&self) -> Disc {
        self.turn
    }

    /// Overrides the color to move.
    #[inline]
    pub fn set_turn(&mut self, turn: Disc) {
        self.turn = turn;
    }

    /// Checks whether `sq` lies on this board.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        sq.col() < self.size && sq.row() < self.size
    }

    /// Gets the contents of a square.
    ///
    /// # Panics
    ///
    /// Panics if `sq` is off the board.
    #[inline]
    pub fn cell(&self, sq: Square) -> Cell {
        self.cells[self.index(sq)]
    }

    /// Gets the contents of a square, or `None` if it is off the board.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Cell> {
        self.contains(sq).then(|| self.cell(sq))
    }

    /// Checks if a given square is on the board and empty.
    #[inline]
    pub fn is_square_empty(&self, sq: Square) -> bool {
        self.get(sq).is_some_and(Cell::is_empty)
    }

    #[inline]
    fn index(&self, sq: Square) -> usize {
        assert!(
            self.contains(sq),
            "{} is off a {}x{} board",
            sq,
            self.size,
            self.size
        );
        sq.row() * self.size + sq.col()
    }

    #[inline]
    fn set(&mut self, sq: Square, cell: Cell) {
        let idx = self.index(sq);
        self.cells[idx] = cell;
    }

    /// Places a disc for `disc` at `(col, row)` and flips every captured opponent disc.
    ///
    /// On success the turn passes to the opposite color. An off-board, occupied, or
    /// non-capturing target is an illegal move: the board is left untouched.
    ///
    /// # Arguments
    /// * `col` - Zero-based column.
    /// * `row` - Zero-based row.
    /// * `disc` - The color of the mover.
    ///
    /// # Returns
    /// `true` if the move was legal and has been applied, `false` otherwise.
    pub fn apply_move(&mut self, col: usize, row: usize, disc: Disc) -> bool {
        let sq = Square::new(col, row);
        if !self.is_square_empty(sq) {
            return false;
        }

        let flipped = flip::flip(self, sq, disc);
        if flipped.is_empty() {
            return false;
        }

        self.apply_flips(sq, &flipped, disc);
        true
    }

    #[inline]
    fn apply_flips(&mut self, sq: Square, flipped: &[Square], disc: Disc) {
        let own = Cell::from(disc);
        for &f in flipped {
            self.set(f, own);
        }
        self.set(sq, own);
        self.turn = disc.opposite();
    }

    /// Attempts a move on a copy of this board.
    ///
    /// # Arguments
    /// * `sq` - The square where `disc` is placed.
    /// * `disc` - The color of the mover.
    ///
    /// # Returns
    /// `Some(Board)` with the resulting position if the move is legal, `None` otherwise.
    /// `self` is never modified.
    pub fn try_make_move(&self, sq: Square, disc: Disc) -> Option<Board> {
        if !self.is_square_empty(sq) {
            return None;
        }

        let flipped = flip::flip(self, sq, disc);
        if flipped.is_empty() {
            return None;
        }

        let mut next = self.clone();
        next.apply_flips(sq, &flipped, disc);
        Some(next)
    }

    /// Checks if a move to a specific square is legal for `disc`.
    pub fn is_legal_move(&self, sq: Square, disc: Disc) -> bool {
        self.is_square_empty(sq) && !flip::flip(self, sq, disc).is_empty()
    }

    /// Enumerates the legal moves for `disc` with the position each one produces.
    ///
    /// Squares are visited column by column, top to bottom within a column. Each produced
    /// board is an independent copy whose turn is `disc.opposite()`.
    pub fn legal_moves(&self, disc: Disc) -> MoveList {
        MoveList::new(self, disc)
    }

    /// Enumerates the squares where `disc` may legally play, in the same order as
    /// [`Board::legal_moves`].
    pub fn legal_targets(&self, disc: Disc) -> Vec<Square> {
        Square::iter(self.size)
            .filter(|&sq| self.is_legal_move(sq, disc))
            .collect()
    }

    /// Checks if `disc` has at least one legal move.
    pub fn has_legal_moves(&self, disc: Disc) -> bool {
        Square::iter(self.size).any(|sq| self.is_legal_move(sq, disc))
    }

    /// Checks if the game is over (neither color can make a move).
    pub fn is_terminal(&self) -> bool {
        !self.has_legal_moves(Disc::Black) && !self.has_legal_moves(Disc::White)
    }

    /// Returns the number of discs of the given color on the board.
    pub fn piece_count(&self, disc: Disc) -> u32 {
        let cell = Cell::from(disc);
        self.cells.iter().filter(|&&c| c == cell).count() as u32
    }

    /// Returns the number of empty squares on the board.
    pub fn empty_count(&self) -> u32 {
        self.cells.iter().filter(|c| c.is_empty()).count() as u32
    }

    /// Returns the disc difference in favor of `disc`.
    pub fn score_diff(&self, disc: Disc) -> Score {
        self.piece_count(disc) as Score - self.piece_count(disc.opposite()) as Score
    }

    /// Returns the four corner squares.
    pub fn corners(&self) -> [Square; 4] {
        let last = self.size - 1;
        [
            Square::new(0, 0),
            Square::new(last, last),
            Square::new(last, 0),
            Square::new(0, last),
        ]
    }

    /// Converts the board to a string representation.
    ///
    /// The output shows the board as a grid with:
    /// - 'X' for Black discs
    /// - 'O' for White discs
    /// - '-' for empty squares
    ///
    /// Rows are separated by newlines; the result can be read back with
    /// [`Board::from_string`].
    pub fn to_string_as_board(&self) -> String {
        let mut s = String::with_capacity(self.size * (self.size + 1));
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % self.size == 0 {
                s.push('\n');
            }
            s.push(cell.to_char());
        }
        s
    }
}

/// Checks that `size` is a playable board side length.
///
/// # Errors
/// Returns a [`ConfigError`] describing why `size` is rejected.
pub fn validate_size(size: usize) -> Result<(), ConfigError> {
    if size < 2 {
        Err(ConfigError::TooSmall { size })
    } else if size % 2 != 0 {
        Err(ConfigError::OddSize { size })
    } else {
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_as_board())
    }
}
