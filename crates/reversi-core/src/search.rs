//! Game tree search engine.

pub mod minimax;
pub mod node_rules;
pub mod options;
pub mod search_context;
pub mod search_result;

use std::time::Instant;

use tracing::debug;

use crate::board::Board;
use crate::search::node_rules::{ClassicRules, StandardRules};
use crate::search::options::{SearchOptions, SearchRules};
use crate::search::search_context::SearchContext;
use crate::search::search_result::SearchResult;
use crate::types::Score;

/// Main search engine structure.
///
/// The engine keeps no reference to the boards it is given. Each [`Search::run`] starts
/// from a fresh [`SearchContext`], so repeated runs on the same position are identical.
#[derive(Clone, Debug, Default)]
pub struct Search {
    options: SearchOptions,
}

impl Search {
    /// Creates a new search engine with the given options.
    pub fn new(options: SearchOptions) -> Search {
        Search { options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: SearchOptions) {
        self.options = options;
    }

    /// Runs a search for the color to move on `board`.
    ///
    /// The root is searched as a maximizing node with the full `(Score::MIN, Score::MAX)`
    /// window.
    ///
    /// # Arguments
    ///
    /// * `board` - The position to search. It is not modified.
    ///
    /// # Returns
    ///
    /// A [`SearchResult`] whose `best_move` holds the chosen successor board, or `None`
    /// when the color to move has no legal move and must pass.
    pub fn run(&self, board: &Board) -> SearchResult {
        let start = Instant::now();
        let mut ctx = SearchContext::new(&self.options, board.turn());

        let score = if board.has_legal_moves(board.turn()) {
            match self.options.rules {
                SearchRules::Classic => minimax::search::<ClassicRules>(
                    &mut ctx,
                    board,
                    true,
                    0,
                    Score::MIN,
                    Score::MAX,
                ),
                SearchRules::Standard => minimax::search::<StandardRules>(
                    &mut ctx,
                    board,
                    true,
                    0,
                    Score::MIN,
                    Score::MAX,
                ),
            }
        } else {
            debug!(disc = %board.turn(), "no legal move at the root");
            0
        };

        let result = SearchResult {
            score,
            best_move: ctx.best_move,
            n_nodes: ctx.n_nodes,
            max_depth: self.options.max_depth,
            rules: self.options.rules,
            elapsed: start.elapsed(),
        };

        debug!(
            best = ?result.best_square().map(|sq| sq.to_string()),
            score = result.score,
            nodes = result.n_nodes,
            root_scores = ?ctx.root_scores,
            elapsed_ms = result.elapsed.as_millis() as u64,
            rules = %result.rules,
            "search finished"
        );

        result
    }
}
