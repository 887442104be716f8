//! Interactive game against the computer.

use anyhow::{Context, Result};
use reversi_core::disc::Disc;
use reversi_core::game_state::GameState;
use reversi_core::player::{Agent, Turn, play_turn};
use reversi_core::square::Square;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::config::{GameParams, Opponent, describe_depth, describe_max_depth};
use crate::game;

/// A line typed by the human player.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Move(Square),
    Hint,
    Undo,
    Depth(Option<i64>),
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut parts = line.split_whitespace();
    let Some(cmd) = parts.next() else {
        return Ok(None);
    };

    let command = match cmd.to_ascii_lowercase().as_str() {
        "h" | "hint" => Command::Hint,
        "u" | "undo" => Command::Undo,
        "help" | "?" => Command::Help,
        "q" | "quit" => Command::Quit,
        "depth" | "d" => match parts.next() {
            Some(arg) => Command::Depth(Some(
                arg.parse()
                    .map_err(|_| format!("Invalid depth: {arg}"))?,
            )),
            None => Command::Depth(None),
        },
        _ => Command::Move(
            cmd.parse::<Square>()
                .map_err(|e| format!("Unknown command '{cmd}': {e}"))?,
        ),
    };
    Ok(Some(command))
}

fn print_help() {
    println!("Commands:");
    println!("  <square>     play a move, e.g. \"a2\" (letter for the column, number for the row)");
    println!("  h, hint      show the legal moves on the board");
    println!("  u, undo      take back your last move");
    println!("  depth [n]    show or set the search depth (-1 for no cutoff)");
    println!("  q, quit      leave the game");
}

/// Takes back moves until the human's last move is undone.
///
/// # Returns
/// `false` if the human has not moved yet. The game is left unchanged in that case.
fn undo_turn(game: &mut GameState, human: Disc) -> bool {
    let has_move = game
        .move_history()
        .iter()
        .any(|(sq, _, side)| sq.is_some() && *side == human);
    if !has_move {
        return false;
    }

    while let Some((sq, _, side)) = game.move_history().last().cloned() {
        game.undo();
        if sq.is_some() && side == human {
            break;
        }
    }
    true
}

fn computer_turn(game: &mut GameState, opponent: &mut Opponent) -> Result<()> {
    println!("I'm picking my move...");
    if let Turn::Moved(sq) = play_turn(game, opponent)? {
        match opponent.last_result() {
            Some(result) => {
                debug!(
                    nps = result.nodes_per_second(),
                    elapsed_ms = result.elapsed.as_millis() as u64,
                    "computer search"
                );
                println!(
                    "Computer plays {sq} (depth {}, score {}, {} nodes)\n",
                    describe_max_depth(result.max_depth),
                    result.score,
                    result.n_nodes
                );
            }
            None => println!("Computer plays {sq}\n"),
        }
    }
    Ok(())
}

/// Main interactive loop.
///
/// The human plays `params.color`; the computer opponent plays the other color. Forced
/// passes are announced and taken automatically for either side.
///
/// # Arguments
/// * `params` - Board size, opponent and search settings from the command line.
pub fn ui_loop(params: &GameParams) -> Result<()> {
    let mut rl = DefaultEditor::new().context("failed to initialize the line editor")?;
    let mut game = GameState::new(params.size)?;
    let mut opponent = params.opponent();
    let human = params.color.disc();
    let mut show_hints = false;

    println!("Welcome to Reversi");
    println!(
        "You play {} ({}) against the {} opponent. Type \"help\" for commands.\n",
        human,
        human.to_char(),
        opponent.name()
    );

    loop {
        if game.is_game_over() {
            game::print(&game, false);
            println!();
            println!("{}", game::result_message(&game));
            break;
        }

        let mover = game.side_to_move();
        if game.must_pass() {
            println!(
                "\nNo moves for {mover} to play! Skipping to {}'s turn\n",
                mover.opposite()
            );
            game.make_pass()?;
            continue;
        }

        if mover != human {
            computer_turn(&mut game, &mut opponent)?;
            continue;
        }

        game::print(&game, show_hints);
        show_hints = false;
        println!();
        println!("Next to play: {mover}");

        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Game Over!");
                break;
            }
            Err(err) => return Err(err).context("failed to read input"),
        };
        let _ = rl.add_history_entry(line.as_str());

        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(Command::Move(sq))) => {
                if let Err(e) = game.make_move(sq) {
                    println!("{e}. Please enter a valid move.\n");
                }
            }
            Ok(Some(Command::Hint)) => show_hints = true,
            Ok(Some(Command::Undo)) => {
                if !undo_turn(&mut game, human) {
                    println!("Cannot undo.\n");
                }
            }
            Ok(Some(Command::Depth(None))) => match opponent.search_options() {
                Some(options) => println!("Search depth: {}\n", describe_depth(options)),
                None => println!("The {} opponent does not search.\n", opponent.name()),
            },
            Ok(Some(Command::Depth(Some(depth)))) => {
                if opponent.set_depth(depth) {
                    if let Some(options) = opponent.search_options() {
                        println!("Search depth set to {}\n", describe_depth(options));
                    }
                } else {
                    println!("The {} opponent does not search.\n", opponent.name());
                }
            }
            Ok(Some(Command::Help)) => print_help(),
            Ok(Some(Command::Quit)) => {
                println!("Game Over!");
                break;
            }
            Err(message) => println!("{message}\n"),
        }
    }

    Ok(())
}
