//! Error types for board construction and game sequencing.
//!
//! Playing an illegal square on a [`Board`](crate::board::Board) is not an error: it is
//! reported by `apply_move` returning `false`. These types cover the cases where the
//! caller cannot proceed, or where the game layer needs to tell the turn loop why a
//! command was refused.

use thiserror::Error;

use crate::disc::Disc;
use crate::square::Square;

/// Rejected board configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Side length is below the minimum of 2
    #[error("Invalid board size {size}: must be at least 2")]
    TooSmall { size: usize },

    /// Side length is odd, so there is no centre cross
    #[error("Invalid board size {size}: must be even")]
    OddSize { size: usize },

    /// Board text could not be read
    #[error("Invalid board string: {message}")]
    BoardString { message: String },
}

/// Refused game-level command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The square is occupied, off the board, or captures nothing
    #[error("Illegal move for {disc}: {sq}")]
    IllegalMove { sq: Square, disc: Disc },

    /// A pass was requested while a legal move exists
    #[error("{disc} cannot pass while legal moves are available")]
    CannotPass { disc: Disc },

    /// Neither side can move any more
    #[error("The game is over")]
    GameOver,
}
