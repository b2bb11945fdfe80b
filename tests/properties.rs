//! Invariants checked over generated pieces, anchors and command streams

use blockfall::game::{Board, Game, Piece, PieceType};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn piece_type() -> impl Strategy<Value = PieceType> {
    proptest::sample::select(PieceType::ALL.to_vec())
}

fn game_with(piece: Piece) -> Game {
    let mut game = Game::with_board(Board::new(), StdRng::seed_from_u64(0));
    assert!(game.spawn_piece(piece));
    game
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Left,
    Right,
    Rotate,
    Tick,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Left),
        Just(Step::Right),
        Just(Step::Rotate),
        Just(Step::Tick),
    ]
}

proptest! {
    // Every orientation of every piece fits within 4 columns and rows, so
    // these anchors never reject a turn on an empty board.
    #[test]
    fn four_rotations_restore_the_orientation(kind in piece_type(), x in 0..=6i32, y in 0..=16i32) {
        let piece = Piece::at(kind, x, y);
        let mut game = game_with(piece.clone());

        for _ in 0..4 {
            prop_assert!(game.rotate());
        }

        prop_assert_eq!(game.current_piece(), Some(&piece));
    }

    #[test]
    fn left_then_right_is_identity(kind in piece_type(), turns in 0..4usize, x in 1..=5i32) {
        let mut piece = Piece::at(kind, x, 8);
        for _ in 0..turns {
            piece = piece.rotate_clockwise();
        }
        let mut game = game_with(piece.clone());

        prop_assert!(game.move_left());
        prop_assert!(game.move_right());
        prop_assert_eq!(game.current_piece(), Some(&piece));

        prop_assert!(game.move_right());
        prop_assert!(game.move_left());
        prop_assert_eq!(game.current_piece(), Some(&piece));
    }

    #[test]
    fn locked_cells_are_never_overwritten(seed in any::<u64>(), steps in proptest::collection::vec(step(), 0..600)) {
        let mut game = Game::with_seed(seed);

        for step in steps {
            let before = game.board().clone();
            let locked_before = game.pieces_locked();
            let lines_before = game.lines_cleared();

            match step {
                Step::Left => { game.move_left(); }
                Step::Right => { game.move_right(); }
                Step::Rotate => { game.rotate(); }
                Step::Tick => { game.tick(); }
            }

            let filled = |board: &Board| board.rows().iter().flatten().filter(|c| c.is_filled()).count();
            if game.lines_cleared() == lines_before {
                // Cells only ever get added, and only by a lock.
                for (old, new) in before.rows().iter().flatten().zip(game.board().rows().iter().flatten()) {
                    if old.is_filled() {
                        prop_assert_eq!(old, new);
                    }
                }
                let added = 4 * (game.pieces_locked() - locked_before) as usize;
                prop_assert_eq!(filled(game.board()), filled(&before) + added);
            }

            if let Some(piece) = game.current_piece() {
                for (x, y) in piece.get_blocks() {
                    prop_assert!(!game.board().is_occupied(x, y));
                }
            }
        }
    }
}
