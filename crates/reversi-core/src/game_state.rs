//! Game state management for Reversi.
//!
//! This module provides the `GameState` struct which owns the live board of a game and
//! sequences it: applying human moves, adopting moves chosen by the search, passing when
//! the side to move is stuck, and detecting the end of the game.

use tracing::debug;

use crate::board::Board;
use crate::disc::Disc;
use crate::error::{ConfigError, GameError};
use crate::move_list::Move;
use crate::square::Square;

/// Represents the state of a Reversi game.
///
/// Unlike simulated boards, the live board is mutated in place move by move. Passing is
/// never automatic: the turn loop checks [`GameState::must_pass`] and calls
/// [`GameState::make_pass`] itself.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The current board position. Its turn is the side to move.
    board: Board,
    /// Move history: (move, board_before_move, side_to_move_before).
    /// None for move indicates a pass.
    history: Vec<(Option<Square>, Board, Disc)>,
}

impl GameState {
    /// Creates a new game in the initial position with Black to move.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `size` is not a valid board size.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        Ok(Self::from_board(Board::new(size)?))
    }

    /// Creates a new game state from an existing board position.
    ///
    /// The side to move is taken from the board's turn.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the current board position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Returns which player's turn it is to move.
    pub fn side_to_move(&self) -> Disc {
        self.board.turn()
    }

    /// Plays the side to move's disc on `sq`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalMove`] if `sq` is off the board, occupied, or captures
    /// nothing. The board is unchanged in that case.
    pub fn make_move(&mut self, sq: Square) -> Result<(), GameError> {
        let disc = self.side_to_move();
        let before = self.board.clone();

        if !self.board.apply_move(sq.col(), sq.row(), disc) {
            return Err(GameError::IllegalMove { sq, disc });
        }

        self.history.push((Some(sq), before, disc));
        Ok(())
    }

    /// Installs a move produced by the search or another agent.
    ///
    /// The successor board replaces the live board and the turn passes to the opposite
    /// of the color that was to move. A successor generated for the side to move already
    /// records that turn, so the explicit flip only matters for successors generated for
    /// the other color.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalMove`] if the move's square is not a legal move for
    /// the side to move.
    pub fn adopt(&mut self, mv: Move) -> Result<(), GameError> {
        let mover = self.side_to_move();
        if mv.disc != mover || !self.board.is_legal_move(mv.sq, mover) {
            return Err(GameError::IllegalMove {
                sq: mv.sq,
                disc: mover,
            });
        }

        let before = std::mem::replace(&mut self.board, mv.board);
        self.board.set_turn(mover.opposite());
        self.history.push((Some(mv.sq), before, mover));
        debug!(sq = %mv.sq, disc = %mover, "adopted move");
        Ok(())
    }

    /// Checks whether the side to move is stuck while the game goes on.
    pub fn must_pass(&self) -> bool {
        !self.board.has_legal_moves(self.side_to_move()) && !self.is_game_over()
    }

    /// Executes a pass move (switching players without placing a disc).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::CannotPass`] if the side to move has a legal move, or
    /// [`GameError::GameOver`] if neither side can move.
    pub fn make_pass(&mut self) -> Result<(), GameError> {
        let disc = self.side_to_move();
        if self.board.has_legal_moves(disc) {
            return Err(GameError::CannotPass { disc });
        }
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }

        self.history.push((None, self.board.clone(), disc));
        self.board.set_turn(disc.opposite());
        debug!(disc = %disc, "pass");
        Ok(())
    }

    /// Checks if the game has ended (neither player has a legal move).
    pub fn is_game_over(&self) -> bool {
        self.board.is_terminal()
    }

    /// Returns the disc count for both players.
    ///
    /// # Returns
    ///
    /// A tuple `(black_count, white_count)`.
    pub fn get_score(&self) -> (u32, u32) {
        (
            self.board.piece_count(Disc::Black),
            self.board.piece_count(Disc::White),
        )
    }

    /// Returns the color with more discs, or `None` for a draw.
    pub fn winner(&self) -> Option<Disc> {
        match self.board.score_diff(Disc::Black) {
            d if d > 0 => Some(Disc::Black),
            d if d < 0 => Some(Disc::White),
            _ => None,
        }
    }

    /// Returns the last move played.
    ///
    /// # Returns
    ///
    /// `Some(Square)` if a regular move was played, `None` if the last move was a pass
    /// or if no moves have been played yet
    pub fn last_move(&self) -> Option<Square> {
        self.history.last().and_then(|(sq, _, _)| *sq)
    }

    /// Returns a reference to the move history.
    ///
    /// # Returns
    ///
    /// A slice of tuples containing (move, board_before_move, side_to_move_before).
    /// `None` for the move indicates a pass.
    pub fn move_history(&self) -> &[(Option<Square>, Board, Disc)] {
        &self.history
    }

    /// Undoes the last move or pass if possible.
    ///
    /// # Returns
    ///
    /// `true` if a move was successfully undone, `false` if there are no moves to undo
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some((_, prev_board, _)) => {
                self.board = prev_board;
                true
            }
            None => false,
        }
    }
}
