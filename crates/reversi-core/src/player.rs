//! Computer opponents.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use tracing::debug;

use crate::board::Board;
use crate::error::GameError;
use crate::game_state::GameState;
use crate::move_list::Move;
use crate::search::Search;
use crate::search::options::SearchOptions;
use crate::search::search_result::SearchResult;

/// A player that picks moves without human input.
pub trait Agent {
    /// Chooses a move for the color to move on `board`.
    ///
    /// # Returns
    ///
    /// The chosen move with its resulting board, or `None` if there is no legal move.
    fn select_move(&mut self, board: &Board) -> Option<Move>;

    /// Short human-readable name.
    fn name(&self) -> &str;
}

/// Plays a uniformly random legal move.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates an agent whose choices are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board) -> Option<Move> {
        board
            .legal_moves(board.turn())
            .into_iter()
            .choose(&mut self.rng)
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Plays the move chosen by the minimax search.
pub struct MinimaxAgent {
    search: Search,
    last_result: Option<SearchResult>,
}

impl MinimaxAgent {
    pub fn new(options: SearchOptions) -> Self {
        Self {
            search: Search::new(options),
            last_result: None,
        }
    }

    pub fn options(&self) -> &SearchOptions {
        self.search.options()
    }

    pub fn set_options(&mut self, options: SearchOptions) {
        self.search.set_options(options);
    }

    /// Returns the result of the most recent search, for reporting.
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, board: &Board) -> Option<Move> {
        let result = self.search.run(board);
        let mv = result.best_move.clone();
        self.last_result = Some(result);
        mv
    }

    fn name(&self) -> &str {
        "minimax"
    }
}

/// Outcome of letting an agent take its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Moved(crate::square::Square),
    Passed,
}

/// Lets `agent` play for the side to move, passing when it has no legal move.
///
/// # Errors
///
/// Returns [`GameError::GameOver`] if the game has already ended.
pub fn play_turn<A: Agent + ?Sized>(game: &mut GameState, agent: &mut A) -> Result<Turn, GameError> {
    if game.is_game_over() {
        return Err(GameError::GameOver);
    }

    match agent.select_move(game.board()) {
        Some(mv) => {
            let sq = mv.sq;
            game.adopt(mv)?;
            debug!(agent = agent.name(), sq = %sq, "agent moved");
            Ok(Turn::Moved(sq))
        }
        None => {
            game.make_pass()?;
            Ok(Turn::Passed)
        }
    }
}
