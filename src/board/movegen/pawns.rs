use super::super::piece::Piece;
use super::super::position::Position;
use super::super::types::SquareSet;
use super::MoveContext;

impl Position {
    pub(crate) fn generate_pawn_destinations(&self, pawn: &Piece, ctx: &MoveContext) -> SquareSet {
        let mut targets = SquareSet::EMPTY;
        let color = pawn.color();
        let dir = ctx.pawn_direction(color);
        let from = pawn.square();

        if let Some(single) = from.offset(dir, 0) {
            if self.is_empty(single) {
                targets.insert(single);
                if !pawn.has_moved() {
                    if let Some(double) = single.offset(dir, 0) {
                        if self.is_empty(double) {
                            targets.insert(double);
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            if let Some(target) = from.offset(dir, df) {
                if self.get(target).is_some_and(|p| p.color() != color) {
                    targets.insert(target);
                }
            }
        }

        targets
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{CastlingRights, Color, MoveContext, Position, Square, SquareSet};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn set(squares: &[&str]) -> SquareSet {
        squares.iter().map(|s| sq(s)).collect()
    }

    #[test]
    fn test_unmoved_pawn_single_and_double() {
        let pos = Position::from_fen("8/8/8/8/8/8/4P3/8");
        let targets = pos.destinations(sq("e2"), &MoveContext::default());
        assert_eq!(targets, set(&["e3", "e4"]));
    }

    #[test]
    fn test_double_push_blocked_on_far_square() {
        let pos = Position::from_fen("8/8/8/8/4n3/8/4P3/8");
        let targets = pos.destinations(sq("e2"), &MoveContext::default());
        assert_eq!(targets, set(&["e3"]));
    }

    #[test]
    fn test_blocked_pawn_has_no_pushes() {
        let pos = Position::from_fen("8/8/8/8/8/4p3/4P3/8");
        let targets = pos.destinations(sq("e2"), &MoveContext::default());
        assert!(targets.is_empty());
    }

    #[test]
    fn test_moved_pawn_single_push_only() {
        let mut pos = Position::from_fen("8/8/8/8/8/8/4P3/8");
        let mut pawn = pos.take(sq("e2")).unwrap();
        pawn.move_to(sq("e3"));
        pos.set(sq("e3"), Some(pawn));
        let targets = pos.destinations(sq("e3"), &MoveContext::default());
        assert_eq!(targets, set(&["e4"]));
    }

    #[test]
    fn test_captures_enemy_only() {
        let pos = Position::from_fen("8/8/8/8/8/3p1N2/4P3/8");
        let targets = pos.destinations(sq("e2"), &MoveContext::default());
        assert_eq!(targets, set(&["d3", "e3", "e4"]));
    }

    #[test]
    fn test_edge_pawn_capture_does_not_wrap() {
        // Pawn on a2 with an enemy on h3: no wrap-around capture
        let pos = Position::from_fen("8/8/8/8/8/1p5p/P7/8");
        let targets = pos.destinations(sq("a2"), &MoveContext::default());
        assert_eq!(targets, set(&["a3", "a4", "b3"]));
    }

    #[test]
    fn test_black_pawn_moves_down() {
        let pos = Position::from_fen("8/3p4/4P3/8/8/8/8/8");
        let targets = pos.destinations(sq("d7"), &MoveContext::default());
        assert_eq!(targets, set(&["d6", "d5", "e6"]));
    }

    #[test]
    fn test_pawn_on_last_rank_has_no_pushes() {
        let pos = Position::from_fen("4P3/8/8/8/8/8/8/8");
        let targets = pos.destinations(sq("e8"), &MoveContext::default());
        assert!(targets.is_empty());
    }

    #[test]
    fn test_direction_follows_player_color() {
        // Black army at the bottom: black pawns advance up the ranks
        let pos = Position::from_fen("8/8/8/8/8/8/4p3/8");
        let ctx = MoveContext::new(Color::Black, CastlingRights::all());
        let targets = pos.destinations(sq("e2"), &ctx);
        assert_eq!(targets, set(&["e3", "e4"]));
    }
}
