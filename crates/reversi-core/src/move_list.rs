//! Legal move generation.

use std::slice;

use crate::board::Board;
use crate::disc::Disc;
use crate::square::Square;

/// Represents a single legal move together with the position it produces.
///
/// This is the search-tree node handed to the search: the board already has the move
/// applied and records the opposite color as next to move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    /// The square where the disc is placed.
    pub sq: Square,
    /// The color that played the move.
    pub disc: Disc,
    /// The board after the move.
    pub board: Board,
}

/// Container for all legal moves of one color in a position.
#[derive(Clone, Debug, Default)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Generates all legal moves for `disc`.
    ///
    /// Every empty square is tried on its own copy of `board`, in column-major order
    /// (increasing column, then increasing row). The order is part of the contract: the
    /// search keeps the first of equally scored moves, so it decides tie-breaks.
    ///
    /// # Arguments
    ///
    /// * `board` - The position to generate moves from. It is not modified.
    /// * `disc` - The color to move.
    pub fn new(board: &Board, disc: Disc) -> MoveList {
        let moves = Square::iter(board.size())
            .filter_map(|sq| {
                board
                    .try_make_move(sq, disc)
                    .map(|next| Move { sq, disc, board: next })
            })
            .collect();
        MoveList { moves }
    }

    /// Returns the number of legal moves.
    #[inline]
    pub fn count(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Move> {
        self.moves.get(index)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Returns the target squares in generation order.
    pub fn squares(&self) -> Vec<Square> {
        self.moves.iter().map(|m| m.sq).collect()
    }

    /// Consumes the list and returns the move at `index`.
    pub fn take(mut self, index: usize) -> Option<Move> {
        (index < self.moves.len()).then(|| self.moves.swap_remove(index))
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::Cell;

    #[test]
    fn test_initial_4x4_black() {
        let board = Board::new(4).unwrap();
        let moves = MoveList::new(&board, Disc::Black);
        // Black b3/c2, White b2/c3: only a2, b1, c4 and d3 capture
        let expected: Vec<Square> = ["a2", "b1", "c4", "d3"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(moves.squares(), expected);
    }

    #[test]
    fn test_moves_are_independent_copies() {
        let board = Board::new(4).unwrap();
        let moves = MoveList::new(&board, Disc::Black);
        assert_eq!(board, Board::new(4).unwrap());

        for m in &moves {
            assert_eq!(m.disc, Disc::Black);
            assert_eq!(m.board.piece_count(Disc::Black), 4);
            assert_eq!(m.board.piece_count(Disc::White), 1);
            assert_eq!(m.board.cell(m.sq), Cell::Black);
        }
    }

    #[test]
    fn test_no_moves() {
        let board = Board::from_string("XXXXXXXXXXXXXXXX", Disc::White).unwrap();
        let moves = MoveList::new(&board, Disc::White);
        assert!(moves.is_empty());
        assert_eq!(moves.count(), 0);
        assert!(moves.take(0).is_none());
    }

    #[test]
    fn test_take() {
        let board = Board::new(8).unwrap();
        let moves = MoveList::new(&board, Disc::Black);
        let third = moves.get(2).cloned().unwrap();
        assert_eq!(moves.take(2), Some(third));
    }
}
