//! Disc flip calculation for move execution.

use crate::board::Board;
use crate::disc::{Cell, Disc};
use crate::square::Square;

/// The eight compass directions as `(column delta, row delta)`.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Calculates which opponent discs would be flipped by placing `disc` at `sq`.
///
/// Each direction is scanned outward from `sq`. A direction captures when it crosses one
/// or more contiguous opponent discs and then reaches a disc of the mover's color; it
/// captures nothing when it first meets an empty cell, the mover's own disc, or the edge
/// of the board.
///
/// # Arguments
///
/// * `board` - The board to scan. `sq` must be an empty cell on it.
/// * `sq` - The square where the disc is being placed
/// * `disc` - The color of the mover
///
/// # Returns
///
/// The captured squares, grouped by direction in [`DIRECTIONS`] order and ordered
/// outward within each direction. Empty if the move would flip nothing (invalid move).
pub fn flip(board: &Board, sq: Square, disc: Disc) -> Vec<Square> {
    let mut flipped = Vec::new();
    for (dc, dr) in DIRECTIONS {
        scan_direction(board, sq, disc, dc, dr, &mut flipped);
    }
    flipped
}

/// Pushes the discs captured along one ray onto `flipped`.
fn scan_direction(
    board: &Board,
    sq: Square,
    disc: Disc,
    dc: isize,
    dr: isize,
    flipped: &mut Vec<Square>,
) {
    let own = Cell::from(disc);
    let opponent = Cell::from(disc.opposite());
    let start = flipped.len();

    let mut cursor = sq;
    while let Some(next) = cursor.offset(dc, dr, board.size()) {
        let cell = board.cell(next);
        if cell == opponent {
            flipped.push(next);
            cursor = next;
        } else if cell == own {
            return;
        } else {
            break;
        }
    }

    // Ran off the board or hit an empty cell: nothing on this ray is captured.
    flipped.truncate(start);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_initial_position() {
        let board = Board::new(8).unwrap();
        // d3 captures d4 for Black
        let flipped = flip(&board, "d3".parse().unwrap(), Disc::Black);
        assert_eq!(flipped, vec!["d4".parse::<Square>().unwrap()]);
    }

    #[test]
    fn test_flip_none_when_isolated() {
        let board = Board::new(8).unwrap();
        assert!(flip(&board, "a1".parse().unwrap(), Disc::Black).is_empty());
        // Adjacent to an opponent disc but with no anchor behind it
        assert!(flip(&board, "d2".parse().unwrap(), Disc::Black).is_empty());
    }

    #[test]
    fn test_flip_stops_at_edge() {
        // White run reaches the edge with no Black anchor.
        let board = Board::from_string(
            "----\
             -OO-\
             ----\
             ----",
            Disc::Black,
        )
        .unwrap();
        // a2 looks right over b2, c2 then d2 is empty
        assert!(flip(&board, "a2".parse().unwrap(), Disc::Black).is_empty());

        let board = Board::from_string(
            "----\
             -OOO\
             ----\
             ----",
            Disc::Black,
        )
        .unwrap();
        // The run b2..d2 hits the border without an anchor
        assert!(flip(&board, "a2".parse().unwrap(), Disc::Black).is_empty());
    }

    #[test]
    fn test_flip_long_run() {
        let board = Board::from_string(
            "------\
             ------\
             -OOOOX\
             ------\
             ------\
             ------",
            Disc::Black,
        )
        .unwrap();
        let flipped = flip(&board, "a3".parse().unwrap(), Disc::Black);
        let expected: Vec<Square> = ["b3", "c3", "d3", "e3"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(flipped, expected);
    }
}
