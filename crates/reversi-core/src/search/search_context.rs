//! Per-run search state.

use crate::disc::Disc;
use crate::move_list::Move;
use crate::search::options::SearchOptions;
use crate::types::{Depth, Score};

/// State shared by every node of one search run.
///
/// Boards are passed down the recursion by reference and children are owned by the
/// frame that generated them, so the context only carries configuration, counters and
/// the root decision.
pub struct SearchContext {
    /// Cutoff depth.
    pub max_depth: Depth,
    /// Color to move at the root.
    pub root_disc: Disc,
    /// Nodes visited so far.
    pub n_nodes: u64,
    /// Move chosen at the root once the root has been searched.
    pub best_move: Option<Move>,
    /// Values of the root children in generation order, for diagnostics.
    pub root_scores: Vec<Score>,
}

impl SearchContext {
    pub fn new(options: &SearchOptions, root_disc: Disc) -> SearchContext {
        SearchContext {
            max_depth: options.max_depth,
            root_disc,
            n_nodes: 0,
            best_move: None,
            root_scores: Vec::new(),
        }
    }

    /// Checks whether a node at `depth` is past the cutoff.
    #[inline]
    pub fn is_cutoff(&self, depth: Depth) -> bool {
        depth > self.max_depth
    }
}
