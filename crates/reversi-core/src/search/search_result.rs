//! Search result types.

use std::time::Duration;

use crate::move_list::Move;
use crate::search::options::SearchRules;
use crate::square::Square;
use crate::types::{Depth, Score};

/// Result of a search operation.
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// Value of the root position.
    pub score: Score,
    /// The chosen move and the board it produces, or `None` when the side to move has no
    /// legal move (a forced pass).
    pub best_move: Option<Move>,
    /// Number of nodes visited.
    pub n_nodes: u64,
    /// Cutoff depth the search ran with.
    pub max_depth: Depth,
    pub rules: SearchRules,
    pub elapsed: Duration,
}

impl SearchResult {
    /// Returns the square of the chosen move.
    pub fn best_square(&self) -> Option<Square> {
        self.best_move.as_ref().map(|m| m.sq)
    }

    /// Returns nodes searched per second.
    pub fn nodes_per_second(&self) -> u64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.n_nodes as f64 / secs) as u64
        } else {
            0
        }
    }
}
