//! Static evaluation used at the search cutoff.

use crate::board::Board;
use crate::disc::{Cell, Disc};
use crate::types::Score;

/// Evaluates `board` in favor of `disc`.
///
/// The value is the disc difference for `disc`, plus a corner bonus once any corner is
/// occupied: each corner held by `disc` adds the board size, each corner held by the
/// opponent subtracts it, and empty corners count for nothing.
///
/// # Arguments
///
/// * `board` - Position to evaluate.
/// * `disc` - Color whose advantage is measured.
///
/// # Returns
///
/// Positive values favor `disc`.
pub fn heuristic(board: &Board, disc: Disc) -> Score {
    let own = Cell::from(disc);
    let other = Cell::from(disc.opposite());

    let tally: Score = board
        .corners()
        .iter()
        .map(|&sq| match board.cell(sq) {
            c if c == own => 1,
            c if c == other => -1,
            _ => 0,
        })
        .sum();

    // With no corner taken the tally is zero and only the disc difference remains.
    board.score_diff(disc) + tally * board.size() as Score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_corners() {
        let board = Board::new(8).unwrap();
        assert_eq!(heuristic(&board, Disc::Black), 0);

        let board = Board::from_string(
            "----\
             -XX-\
             -XO-\
             ----",
            Disc::White,
        )
        .unwrap();
        assert_eq!(heuristic(&board, Disc::Black), 2);
        assert_eq!(heuristic(&board, Disc::White), -2);
    }

    #[test]
    fn test_corner_weight() {
        // Black holds a1, White holds d4; a second Black corner at d1.
        let board = Board::from_string(
            "X--X\
             -XO-\
             -OX-\
             ---O",
            Disc::Black,
        )
        .unwrap();
        // Black 4, White 3, tally +1 for Black
        assert_eq!(heuristic(&board, Disc::Black), 1 + 4);
        assert_eq!(heuristic(&board, Disc::White), -1 - 4);
    }

    #[test]
    fn test_corners_cancel() {
        let board = Board::from_string(
            "X---\
             -XO-\
             -OX-\
             ---O",
            Disc::Black,
        )
        .unwrap();
        // Black 3, White 3, one corner each
        assert_eq!(heuristic(&board, Disc::Black), 0);
        assert_eq!(heuristic(&board, Disc::White), 0);
    }

    #[test]
    fn test_scales_with_size() {
        let board = Board::from_string(
            "O-----\
             ------\
             --OX--\
             --XO--\
             ------\
             ------",
            Disc::Black,
        )
        .unwrap();
        // Black 2, White 3, White holds one corner of a 6x6 board
        assert_eq!(heuristic(&board, Disc::Black), -1 - 6);
        assert_eq!(heuristic(&board, Disc::White), 1 + 6);
    }
}
