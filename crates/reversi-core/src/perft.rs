use crate::board::Board;
use crate::error::ConfigError;
use crate::types::Depth;

/// Executes a perft run starting from the initial position of a `size` board.
///
/// # Arguments
///
/// * `size` - Board side length.
/// * `depth` - Number of plies to expand from the initial position. A depth of
///   `1` counts the immediate legal moves; larger values walk the tree
///   recursively.
///
/// # Returns
///
/// The total leaf count the walk reaches from the initial position.
///
/// # Errors
///
/// Returns a [`ConfigError`] if `size` is not a valid board size.
pub fn perft_root(size: usize, depth: Depth) -> Result<u64, ConfigError> {
    let board = Board::new(size)?;
    Ok(perft(&board, depth))
}

/// Counts the leaves of the move tree below `board`.
///
/// A forced pass switches the color to move without consuming depth, and a finished
/// game counts as one leaf.
pub fn perft(board: &Board, depth: Depth) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves(board.turn());
    if moves.is_empty() {
        let opponent = board.turn().opposite();
        if !board.has_legal_moves(opponent) {
            return 1;
        }
        let mut next = board.clone();
        next.set_turn(opponent);
        return perft(&next, depth);
    }

    if depth == 1 {
        return moves.count() as u64;
    }

    moves.iter().map(|m| perft(&m.board, depth - 1)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::Disc;

    #[test]
    fn test_perft_shallow() {
        assert_eq!(perft_root(8, 0).unwrap(), 1);
        assert_eq!(perft_root(8, 1).unwrap(), 4);
        assert_eq!(perft_root(8, 2).unwrap(), 12);
        assert_eq!(perft_root(8, 3).unwrap(), 56);
    }

    #[test]
    fn test_perft_invalid_size() {
        assert!(perft_root(5, 1).is_err());
    }

    #[test]
    fn test_perft_finished_game() {
        let board = Board::from_string("XXXXXXXXXXXXXXXX", Disc::Black).unwrap();
        assert_eq!(perft(&board, 5), 1);
    }

    #[test]
    fn test_perft_pass_keeps_depth() {
        // White must pass, then Black has exactly one move (d1)
        let board = Board::from_string(
            "XOO-\
             XXXX\
             XXXX\
             XXXX",
            Disc::White,
        )
        .unwrap();
        assert_eq!(perft(&board, 1), 1);
        assert_eq!(perft(&board, 3), 1);
    }
}
