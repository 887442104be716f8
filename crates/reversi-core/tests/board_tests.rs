use reversi_core::board::Board;
use reversi_core::disc::{Cell, Disc};
use reversi_core::square::Square;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn three_way_capture() -> Board {
    Board::from_string(
        "--------\
         -X-X----\
         --OO----\
         -XO-----\
         --------\
         --------\
         --------\
         --------",
        Disc::Black,
    )
    .unwrap()
}

#[test]
fn test_capture_in_three_directions() {
    let before = three_way_capture();
    let mut after = before.clone();
    assert!(after.apply_move(3, 3, Disc::Black));

    for s in ["c3", "d3", "c4", "d4"] {
        assert_eq!(after.cell(sq(s)), Cell::Black, "{s}");
    }
    assert_eq!(after.piece_count(Disc::White), 0);
    assert_eq!(after.turn(), Disc::White);
}

#[test]
fn test_move_changes_only_captured_squares() {
    let before = three_way_capture();
    let after = before.try_make_move(sq("d4"), Disc::Black).unwrap();
    let flipped = before.piece_count(Disc::White) - after.piece_count(Disc::White);

    assert_eq!(
        after.piece_count(Disc::Black),
        before.piece_count(Disc::Black) + 1 + flipped
    );

    let changed: Vec<Square> = Square::iter(8)
        .filter(|&s| before.cell(s) != after.cell(s))
        .collect();
    assert_eq!(changed.len() as u32, 1 + flipped);
    for s in changed {
        assert!(s == sq("d4") || before.cell(s) == Cell::White);
    }
}

#[test]
fn test_every_legal_move_obeys_disc_accounting() {
    for size in [4, 6, 8] {
        let board = Board::new(size).unwrap();
        for mv in board.legal_moves(Disc::Black).iter() {
            let flipped = board.piece_count(Disc::White) - mv.board.piece_count(Disc::White);
            assert!(flipped >= 1);
            assert_eq!(
                mv.board.piece_count(Disc::Black),
                board.piece_count(Disc::Black) + 1 + flipped
            );
            assert_eq!(mv.board.empty_count(), board.empty_count() - 1);
        }
    }
}

#[test]
fn test_illegal_move_leaves_board_untouched() {
    let mut board = Board::new(8).unwrap();
    let before = board.clone();

    // occupied, no capture, off the board
    assert!(!board.apply_move(3, 3, Disc::Black));
    assert!(!board.apply_move(0, 0, Disc::Black));
    assert!(!board.apply_move(8, 2, Disc::Black));
    assert_eq!(board, before);
}

#[test]
fn test_forced_pass_then_continue() {
    let board = Board::from_string(
        "XOO-\
         XXXX\
         XXXX\
         XXXX",
        Disc::White,
    )
    .unwrap();

    assert!(!board.has_legal_moves(Disc::White));
    assert!(board.has_legal_moves(Disc::Black));
    assert!(!board.is_terminal());
    assert_eq!(board.legal_targets(Disc::Black), vec![sq("d1")]);
}
