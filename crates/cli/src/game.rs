//! Terminal rendering of a game in progress.

use colored::Colorize;
use reversi_core::disc::{Cell, Disc};
use reversi_core::game_state::GameState;
use reversi_core::square::Square;

/// Builds one horizontal rule of the board frame.
fn rule(size: usize, left: &str, mid: &str, right: &str) -> String {
    let mut line = format!("    {left}");
    for col in 0..size {
        line.push_str("───");
        line.push_str(if col + 1 < size { mid } else { right });
    }
    line
}

/// Renders the board with coordinates, disc counts and the side to move.
///
/// # Arguments
/// * `game` - The game to draw.
/// * `show_hints` - Mark the legal moves of the side to move.
pub fn render(game: &GameState, show_hints: bool) -> String {
    let board = game.board();
    let size = board.size();
    let side_to_move = game.side_to_move();
    let last_move = game.last_move();
    let hints = if show_hints {
        board.legal_targets(side_to_move)
    } else {
        Vec::new()
    };
    let (black_count, white_count) = game.get_score();

    let mut out = String::new();

    // Header
    out.push_str("     ");
    for col in 0..size {
        out.push_str(&format!(" {}  ", (b'a' + col as u8) as char));
    }
    out.push('\n');
    out.push_str(&rule(size, "┌", "┬", "┐"));
    out.push('\n');

    // Board rows
    for row in 0..size {
        out.push_str(&format!("{:>3} │", row + 1));

        for col in 0..size {
            let sq = Square::new(col, row);
            let is_last_move = Some(sq) == last_move;

            let symbol = match board.cell(sq) {
                Cell::Black if is_last_move => " X ".on_bright_black().bright_green(),
                Cell::White if is_last_move => " O ".on_bright_black().bright_yellow(),
                Cell::Black => " X ".bright_green(),
                Cell::White => " O ".bright_yellow(),
                Cell::Empty if hints.contains(&sq) => " · ".bright_cyan(),
                Cell::Empty => "   ".normal(),
            };
            out.push_str(&format!("{symbol}│"));
        }

        // Side information
        match row {
            0 => {
                let player_info = match side_to_move {
                    Disc::Black => "Black's turn (X)".bright_green(),
                    Disc::White => "White's turn (O)".bright_yellow(),
                };
                out.push_str(&format!("   {player_info}"));
            }
            1 => out.push_str(&format!(
                "   Black: {}",
                format!("{black_count:2}").bright_green()
            )),
            2 => out.push_str(&format!(
                "   White: {}",
                format!("{white_count:2}").bright_yellow()
            )),
            3 if game.is_game_over() => {
                out.push_str(&format!("   {}", "*** Game Over ***".bright_red()))
            }
            _ => {}
        }
        out.push('\n');

        if row + 1 < size {
            out.push_str(&rule(size, "├", "┼", "┤"));
            out.push('\n');
        }
    }

    // Footer
    out.push_str(&rule(size, "└", "┴", "┘"));
    out.push('\n');
    out
}

/// Prints the board to stdout.
pub fn print(game: &GameState, show_hints: bool) {
    print!("{}", render(game, show_hints));
}

/// Announces the outcome of a finished game.
pub fn result_message(game: &GameState) -> &'static str {
    match game.winner() {
        Some(Disc::Black) => "Black wins!",
        Some(Disc::White) => "White wins!",
        None => "It's a draw!",
    }
}
