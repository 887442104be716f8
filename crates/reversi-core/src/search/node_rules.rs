//! Compile-time specialization of the search for each [`SearchRules`] variant.
//!
//! [`SearchRules`]: crate::search::options::SearchRules

use crate::board::Board;
use crate::disc::Disc;
use crate::eval::heuristic;
use crate::search::search_context::SearchContext;
use crate::types::Score;

/// Outcome of a node whose expanded color has no legal move.
pub enum DeadEnd {
    /// The node is a leaf with this value.
    Leaf(Score),
    /// The expanded color passes; search continues from this board.
    Pass(Board),
}

/// Trait for compile-time rules specialization.
pub trait NodeRules {
    /// Whether the minimizing branch stops early once `beta <= alpha`.
    const PRUNE_MINIMIZING: bool;

    /// Whether an expanded minimizing node is worth 0 instead of its smallest child value.
    const MINIMIZING_RETURNS_ZERO: bool;

    /// Color whose moves are generated at `node`.
    fn child_disc(node: &Board, maximizing: bool) -> Disc;

    /// Static value of a node past the cutoff depth.
    fn evaluate(ctx: &SearchContext, node: &Board) -> Score;

    /// Handles a node where [`NodeRules::child_disc`] has no legal move.
    fn dead_end(ctx: &SearchContext, node: &Board, maximizing: bool) -> DeadEnd;
}

/// Classic rules: expansion and scoring keyed off `node.turn` and the branch role.
pub struct ClassicRules;

/// Standard rules: alternate turns, score everything for the root mover.
pub struct StandardRules;

impl NodeRules for ClassicRules {
    const PRUNE_MINIMIZING: bool = false;
    const MINIMIZING_RETURNS_ZERO: bool = true;

    #[inline]
    fn child_disc(node: &Board, maximizing: bool) -> Disc {
        // Black to move: Black expands when maximizing, White when minimizing.
        // White to move: the mirror image.
        if maximizing {
            node.turn()
        } else {
            node.turn().opposite()
        }
    }

    #[inline]
    fn evaluate(_ctx: &SearchContext, node: &Board) -> Score {
        heuristic(node, node.turn())
    }

    #[inline]
    fn dead_end(_ctx: &SearchContext, node: &Board, maximizing: bool) -> DeadEnd {
        let count = node.piece_count(node.turn()) as Score;
        DeadEnd::Leaf(if maximizing { count } else { -count })
    }
}

impl NodeRules for StandardRules {
    const PRUNE_MINIMIZING: bool = true;
    const MINIMIZING_RETURNS_ZERO: bool = false;

    #[inline]
    fn child_disc(node: &Board, _maximizing: bool) -> Disc {
        node.turn()
    }

    #[inline]
    fn evaluate(ctx: &SearchContext, node: &Board) -> Score {
        heuristic(node, ctx.root_disc)
    }

    fn dead_end(ctx: &SearchContext, node: &Board, _maximizing: bool) -> DeadEnd {
        let opponent = node.turn().opposite();
        if node.has_legal_moves(opponent) {
            let mut passed = node.clone();
            passed.set_turn(opponent);
            DeadEnd::Pass(passed)
        } else {
            DeadEnd::Leaf(node.score_diff(ctx.root_disc))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::options::SearchOptions;

    #[test]
    fn test_classic_child_disc() {
        let mut board = Board::new(4).unwrap();
        assert_eq!(ClassicRules::child_disc(&board, true), Disc::Black);
        assert_eq!(ClassicRules::child_disc(&board, false), Disc::White);
        board.set_turn(Disc::White);
        assert_eq!(ClassicRules::child_disc(&board, true), Disc::White);
        assert_eq!(ClassicRules::child_disc(&board, false), Disc::Black);
    }

    #[test]
    fn test_classic_dead_end_counts_turn_discs() {
        let board = Board::from_string(
            "XXXX\
             XXXX\
             XXOO\
             XXOO",
            Disc::White,
        )
        .unwrap();
        let ctx = SearchContext::new(&SearchOptions::default(), Disc::Black);
        assert!(matches!(
            ClassicRules::dead_end(&ctx, &board, true),
            DeadEnd::Leaf(4)
        ));
        assert!(matches!(
            ClassicRules::dead_end(&ctx, &board, false),
            DeadEnd::Leaf(-4)
        ));
    }

    #[test]
    fn test_standard_dead_end() {
        // White to move has nothing, Black can still play d1
        let board = Board::from_string(
            "XOO-\
             XXXX\
             XXXX\
             XXXX",
            Disc::White,
        )
        .unwrap();
        let ctx = SearchContext::new(&SearchOptions::default(), Disc::White);
        match StandardRules::dead_end(&ctx, &board, true) {
            DeadEnd::Pass(passed) => assert_eq!(passed.turn(), Disc::Black),
            DeadEnd::Leaf(_) => panic!("expected a pass"),
        }

        let full = Board::from_string("XXXXXXXXXXXXXXOO", Disc::White).unwrap();
        assert!(matches!(
            StandardRules::dead_end(&ctx, &full, true),
            DeadEnd::Leaf(-12)
        ));
    }
}
