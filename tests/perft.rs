use lib::checkers::{Color, Game, Move, Role};
use proptest::sample::Selector;
use rayon::prelude::*;
use test_strategy::proptest;

fn perft(game: &Game, depth: u8) -> usize {
    match depth {
        0 => 1,
        1 => game.moves().count(),
        d => game
            .moves()
            .par_bridge()
            .map(|m| {
                let mut next = game.clone();
                assert!(next.execute(m).is_ok());
                perft(&next, d - 1)
            })
            .sum(),
    }
}

#[test]
fn perft_expands_expected_number_of_nodes() {
    let game = Game::new();
    assert_eq!(perft(&game, 0), 1);
    assert_eq!(perft(&game, 1), 7);
    assert_eq!(perft(&game, 2), 49);
}

#[proptest]
fn random_games_uphold_the_rules(#[strategy(1usize..200)] plies: usize, selector: Selector) {
    let mut game = Game::new();
    let start = game.state();

    for _ in 0..plies {
        let moves: Vec<Move> = game.moves().collect();
        if moves.is_empty() {
            break;
        }

        let before = game.state();
        let m = selector.select(moves);
        let record = game.execute(m)?;
        let piece = record.change.piece;

        assert_eq!(piece.color, before.turn);
        assert_eq!(game.board()[m.whence()], None);
        assert!(piece.is_king() || m.row_diff().signum() == piece.color.forward());

        let (light, dark) = (game.board().count(Color::Light), game.board().count(Color::Dark));
        let captured = usize::from(record.change.captured.is_some());
        assert_eq!(
            light + dark + captured,
            before.board.count(Color::Light) + before.board.count(Color::Dark)
        );

        if let Some((_, p)) = record.change.captured {
            assert_ne!(p.color, piece.color);
        }

        if piece.is_king() {
            assert_eq!(game.board()[m.whither()].map(|p| p.role), Some(Role::King));
        }

        match game.continuation() {
            Some(sq) => {
                assert_eq!(sq, m.whither());
                assert_eq!(game.turn(), before.turn);
                assert!(game.moves().all(|n| n.whence() == sq));
            }

            None => assert_eq!(game.turn(), !before.turn),
        }

        if game.outcome().is_some() {
            assert!(game.moves().next().is_none());
        }
    }

    while game.undo() {}
    assert_eq!(game.state(), start);
}
