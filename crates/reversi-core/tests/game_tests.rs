use reversi_core::disc::Disc;
use reversi_core::game_state::GameState;
use reversi_core::player::{Agent, MinimaxAgent, RandomAgent, Turn, play_turn};
use reversi_core::search::options::{SearchOptions, SearchRules};

fn play_out<'a>(size: usize, black: &'a mut dyn Agent, white: &'a mut dyn Agent) -> GameState {
    let mut game = GameState::new(size).unwrap();
    let mut last_total = 4;

    while !game.is_game_over() {
        let mover = game.side_to_move();
        let must_pass = game.must_pass();
        let agent = match mover {
            Disc::Black => &mut *black,
            Disc::White => &mut *white,
        };

        match play_turn(&mut game, agent).unwrap() {
            Turn::Moved(sq) => {
                assert!(!must_pass);
                assert_eq!(game.last_move(), Some(sq));
                let (b, w) = game.get_score();
                assert_eq!(b + w, last_total + 1);
                last_total = b + w;
            }
            Turn::Passed => assert!(must_pass),
        }
        assert_eq!(game.side_to_move(), mover.opposite());
    }

    game
}

#[test]
fn test_random_games_complete() {
    for seed in 0..5 {
        let mut black = RandomAgent::with_seed(seed);
        let mut white = RandomAgent::with_seed(seed + 100);
        let game = play_out(8, &mut black, &mut white);

        let (b, w) = game.get_score();
        assert_eq!(b + w + game.board().empty_count(), 64);
        let expected = match b.cmp(&w) {
            std::cmp::Ordering::Greater => Some(Disc::Black),
            std::cmp::Ordering::Less => Some(Disc::White),
            std::cmp::Ordering::Equal => None,
        };
        assert_eq!(game.winner(), expected);
    }
}

#[test]
fn test_minimax_against_random() {
    for rules in [SearchRules::Classic, SearchRules::Standard] {
        let mut black = RandomAgent::with_seed(9);
        let mut white = MinimaxAgent::new(SearchOptions::new(2).with_rules(rules));
        let game = play_out(6, &mut black, &mut white);
        assert!(game.is_game_over());
        assert!(white.last_result().is_some());
    }
}

#[test]
fn test_undo_whole_game() {
    let mut black = RandomAgent::with_seed(1);
    let mut white = RandomAgent::with_seed(2);
    let mut game = play_out(4, &mut black, &mut white);

    while game.undo() {}
    assert_eq!(game.board(), GameState::new(4).unwrap().board());
    assert_eq!(game.side_to_move(), Disc::Black);
}
