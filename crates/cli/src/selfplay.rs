//! Engine-versus-opponent matches without human input.

use anyhow::Result;
use num_format::{Locale, ToFormattedString};
use reversi_core::game_state::GameState;
use reversi_core::player::{Agent, MinimaxAgent, play_turn};
use tracing::debug;

use crate::config::{GameParams, describe_depth};
use crate::game;

/// Plays `games` games of the minimax engine, on `params.color`, against the configured
/// opponent and prints each result and the overall tally.
pub fn run(params: &GameParams, games: u32, verbose: bool) -> Result<()> {
    let engine_disc = params.color.disc();
    let mut engine = MinimaxAgent::new(params.search_options());
    let mut opponent = params.opponent();

    println!(
        "Engine ({engine_disc}, depth {}, {} rules) vs {} opponent on {}x{}",
        describe_depth(engine.options()),
        engine.options().rules,
        opponent.name(),
        params.size,
        params.size
    );

    let (mut wins, mut losses, mut draws) = (0u32, 0u32, 0u32);
    let mut total_nodes = 0u64;

    for n in 1..=games {
        let mut game = GameState::new(params.size)?;

        while !game.is_game_over() {
            if game.side_to_move() == engine_disc {
                play_turn(&mut game, &mut engine)?;
                total_nodes += engine.last_result().map_or(0, |r| r.n_nodes);
            } else {
                play_turn(&mut game, &mut opponent)?;
            }
        }

        debug!(game = n, plies = game.move_history().len(), "game finished");
        if verbose {
            game::print(&game, false);
        }

        let (black, white) = game.get_score();
        println!(
            "Game {n}: {} Black {black} - White {white}",
            game::result_message(&game)
        );

        match game.winner() {
            Some(disc) if disc == engine_disc => wins += 1,
            Some(_) => losses += 1,
            None => draws += 1,
        }
    }

    println!();
    println!("Engine wins: {wins}, losses: {losses}, draws: {draws}");
    println!(
        "Engine searched {} nodes",
        total_nodes.to_formatted_string(&Locale::en)
    );

    Ok(())
}
