//! Castling tests driven through the game controller.

use crate::board::{CastleSide, Color, MoveError, MoveRecord, PieceKind, Square};
use crate::game::Game;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn game_from(fen: &str) -> Game {
    let mut game = Game::new(Color::White);
    game.load_fen(fen).unwrap();
    game
}

fn play(game: &mut Game, from: &str, to: &str) -> Result<MoveRecord, MoveError> {
    game.select(sq(from));
    game.try_move(sq(to))
}

#[test]
fn test_castling_offered_from_start_once_cleared() {
    let mut game = Game::new(Color::White);
    game.select(sq("e1"));
    assert!(!game.legal_destinations().contains(sq("g1")));

    for (from, to) in [("g1", "f3"), ("e2", "e3"), ("f1", "e2")] {
        play(&mut game, from, to).unwrap();
    }
    game.select(sq("e1"));
    assert!(game.legal_destinations().contains(sq("g1")));
    assert!(!game.legal_destinations().contains(sq("c1")));
}

#[test]
fn test_castling_relocates_king_and_rook() {
    let mut game = game_from("r3k2r/8/8/8/8/8/8/R3K2R");
    let record = play(&mut game, "e1", "c1").unwrap();
    assert_eq!(
        record,
        MoveRecord::Castle {
            color: Color::White,
            side: CastleSide::Queen
        }
    );
    let pos = game.position();
    assert_eq!(pos.piece_at(sq("c1")), Some((Color::White, PieceKind::King)));
    assert_eq!(pos.piece_at(sq("d1")), Some((Color::White, PieceKind::Rook)));
    assert!(pos.is_empty(sq("a1")));
    assert!(pos.is_empty(sq("e1")));
    assert!(pos.get(sq("d1")).unwrap().has_moved());
    assert!(pos.is_consistent());
}

#[test]
fn test_castling_right_is_permanent() {
    let mut game = game_from("r3k2r/8/8/8/8/8/8/R3K2R");
    // King steps out and back
    play(&mut game, "e1", "f1").unwrap();
    play(&mut game, "f1", "e1").unwrap();
    game.select(sq("e1"));
    let targets = game.legal_destinations();
    assert!(!targets.contains(sq("g1")));
    assert!(!targets.contains(sq("c1")));
    assert_eq!(
        play(&mut game, "e1", "g1"),
        Err(MoveError::NotReachable {
            from: sq("e1"),
            to: sq("g1")
        })
    );
}

#[test]
fn test_rook_round_trip_loses_right() {
    let mut game = game_from("r3k2r/8/8/8/8/8/8/R3K2R");
    play(&mut game, "h8", "h7").unwrap();
    play(&mut game, "h7", "h8").unwrap();
    game.select(sq("e8"));
    let targets = game.legal_destinations();
    assert!(!targets.contains(sq("g8")));
    assert!(targets.contains(sq("c8")));
}

#[test]
fn test_castling_blocked_until_path_clears() {
    let mut game = game_from("4k3/8/8/8/8/8/8/RN2K3");
    game.select(sq("e1"));
    assert!(!game.legal_destinations().contains(sq("c1")));

    play(&mut game, "b1", "c3").unwrap();
    game.select(sq("e1"));
    assert!(game.legal_destinations().contains(sq("c1")));
}

#[test]
fn test_castling_with_black_at_bottom() {
    let mut game = Game::new(Color::Black);
    game.load_fen("R3K2R/8/8/8/8/8/8/r3k2r").unwrap();
    let record = play(&mut game, "e1", "g1").unwrap();
    assert_eq!(
        record,
        MoveRecord::Castle {
            color: Color::Black,
            side: CastleSide::King
        }
    );
    assert_eq!(game.to_fen(), "R3K2R/8/8/8/8/8/8/r4rk1");
    assert!(game.castling_rights().has(Color::White, CastleSide::King));
}
