//! Command-line game configuration and the computer opponent it selects.

use clap::{Args, ValueEnum};
use reversi_core::board::{Board, validate_size};
use reversi_core::disc::Disc;
use reversi_core::move_list::Move;
use reversi_core::player::{Agent, MinimaxAgent, RandomAgent};
use reversi_core::search::options::{DEFAULT_MAX_DEPTH, SearchOptions, SearchRules};
use reversi_core::search::search_result::SearchResult;
use reversi_core::square::LETTERED_FILES;
use reversi_core::types::Depth;

/// Board sizes offered for play.
const PLAYABLE_SIZES: [usize; 3] = [4, 6, 8];

#[derive(Args, Debug, Clone)]
pub struct GameParams {
    /// Board side length
    #[arg(long, default_value_t = 8, value_parser = parse_play_size)]
    pub size: usize,

    /// Kind of computer opponent
    #[arg(long, value_enum, default_value_t = OpponentKind::Minimax)]
    pub opponent: OpponentKind,

    /// Search cutoff depth for the minimax opponent (negative for no cutoff)
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH as i64, allow_negative_numbers = true)]
    pub depth: i64,

    /// How the minimax opponent expands and scores positions
    #[arg(long, default_value_t = SearchRules::Classic)]
    pub rules: SearchRules,

    /// Color played by the human (or by the engine in self-play)
    #[arg(long, value_enum, default_value_t = ColorChoice::Black)]
    pub color: ColorChoice,

    /// Seed for the random opponent
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GameParams {
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions::from_cutoff(self.depth).with_rules(self.rules)
    }

    pub fn opponent(&self) -> Opponent {
        match self.opponent {
            OpponentKind::Random => {
                Opponent::Random(self.seed.map(RandomAgent::with_seed).unwrap_or_default())
            }
            OpponentKind::Minimax => Opponent::Minimax(MinimaxAgent::new(self.search_options())),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpponentKind {
    /// Plays a random legal move
    Random,
    /// Depth-limited minimax with alpha-beta pruning
    Minimax,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Black,
    White,
}

impl ColorChoice {
    pub fn disc(self) -> Disc {
        match self {
            ColorChoice::Black => Disc::Black,
            ColorChoice::White => Disc::White,
        }
    }
}

/// The computer player selected on the command line.
pub enum Opponent {
    Random(RandomAgent),
    Minimax(MinimaxAgent),
}

impl Opponent {
    /// Changes the cutoff depth of a minimax opponent.
    ///
    /// # Returns
    ///
    /// `false` if the opponent does not search.
    pub fn set_depth(&mut self, cutoff: i64) -> bool {
        match self {
            Opponent::Minimax(agent) => {
                let options = SearchOptions::from_cutoff(cutoff).with_rules(agent.options().rules);
                agent.set_options(options);
                true
            }
            Opponent::Random(_) => false,
        }
    }

    pub fn search_options(&self) -> Option<&SearchOptions> {
        match self {
            Opponent::Minimax(agent) => Some(agent.options()),
            Opponent::Random(_) => None,
        }
    }

    pub fn last_result(&self) -> Option<&SearchResult> {
        match self {
            Opponent::Minimax(agent) => agent.last_result(),
            Opponent::Random(_) => None,
        }
    }
}

impl Agent for Opponent {
    fn select_move(&mut self, board: &Board) -> Option<Move> {
        match self {
            Opponent::Random(agent) => agent.select_move(board),
            Opponent::Minimax(agent) => agent.select_move(board),
        }
    }

    fn name(&self) -> &str {
        match self {
            Opponent::Random(agent) => agent.name(),
            Opponent::Minimax(agent) => agent.name(),
        }
    }
}

/// Parses a board size offered for play.
pub fn parse_play_size(s: &str) -> Result<usize, String> {
    let size = parse_board_size(s)?;
    if PLAYABLE_SIZES.contains(&size) {
        Ok(size)
    } else {
        Err(format!("board size must be one of 4, 6 or 8, got {size}"))
    }
}

/// Parses a board size whose columns can all be typed as a letter.
pub fn parse_board_size(s: &str) -> Result<usize, String> {
    let size: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a board size"))?;
    validate_size(size).map_err(|e| e.to_string())?;
    if size > LETTERED_FILES {
        return Err(format!(
            "board size must be at most {LETTERED_FILES}, got {size}"
        ));
    }
    Ok(size)
}

/// Formats a cutoff depth for display.
pub fn describe_depth(options: &SearchOptions) -> String {
    describe_max_depth(options.max_depth)
}

pub fn describe_max_depth(max_depth: Depth) -> String {
    if max_depth == Depth::MAX {
        "unlimited".to_string()
    } else {
        max_depth.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_size() {
        assert_eq!(parse_play_size("6"), Ok(6));
        assert!(parse_play_size("10").is_err());
        assert!(parse_play_size("5").is_err());
        assert!(parse_play_size("x").is_err());
        assert_eq!(parse_board_size("10"), Ok(10));
        assert_eq!(parse_board_size("26"), Ok(26));
        assert!(parse_board_size("28").is_err());
        assert!(parse_board_size("0").is_err());
    }

    #[test]
    fn test_set_depth() {
        let mut opponent = Opponent::Minimax(MinimaxAgent::new(
            SearchOptions::new(5).with_rules(SearchRules::Standard),
        ));
        assert!(opponent.set_depth(-1));
        let options = opponent.search_options().unwrap();
        assert!(options.is_unlimited());
        assert_eq!(options.rules, SearchRules::Standard);
        assert_eq!(describe_depth(options), "unlimited");
        assert_eq!(describe_max_depth(4), "4");

        let mut random = Opponent::Random(RandomAgent::with_seed(0));
        assert!(!random.set_depth(3));
        assert!(random.search_options().is_none());
    }
}
