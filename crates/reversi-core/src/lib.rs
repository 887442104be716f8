pub mod board;
pub mod disc;
pub mod error;
pub mod eval;
mod flip;
pub mod game_state;
pub mod move_list;
pub mod perft;
pub mod player;
pub mod search;
pub mod square;
pub mod types;
