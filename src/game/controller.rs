//! Game controller implementation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    castle_side_for, CastleSide, CastlingRights, Color, FenError, MoveContext, MoveError,
    MoveRecord, Piece, PieceKind, Position, PositionBuilder, Square, SquareSet,
};

use super::config::GameConfig;

/// File of the king's home square
const KING_FILE: usize = 4;

/// Turn, castling rights and orientation of a game
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    /// Side to move
    pub turn: Color,
    /// Remaining castling rights per color and side
    pub castling_rights: CastlingRights,
    /// Army placed on ranks 1-2
    pub player_color: Color,
}

impl GameState {
    #[must_use]
    pub const fn new(player_color: Color) -> Self {
        GameState {
            turn: Color::White,
            castling_rights: CastlingRights::all(),
            player_color,
        }
    }
}

/// Selection phase of the controller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NoSelection,
    PieceSelected(Square),
}

/// Game controller owning the canonical position.
///
/// Moves follow a select-then-move protocol: `select` a piece, then
/// `try_move` (or `move_to`) it to one of its `legal_destinations`. A
/// rejected move leaves the game untouched.
#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    state: GameState,
    config: GameConfig,
    selected: Option<Square>,
}

impl Default for Game {
    fn default() -> Self {
        Self::with_config(GameConfig::default())
    }
}

impl Game {
    /// Start a game with `player_color`'s army on ranks 1-2
    #[must_use]
    pub fn new(player_color: Color) -> Self {
        Self::with_config(GameConfig::new(player_color))
    }

    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Game {
            position: PositionBuilder::starting_position(config.player_color).build(),
            state: GameState::new(config.player_color),
            config,
            selected: None,
        }
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn turn(&self) -> Color {
        self.state.turn
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.state.castling_rights
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.selected {
            Some(square) => Phase::PieceSelected(square),
            None => Phase::NoSelection,
        }
    }

    /// Generation context for the current state
    #[must_use]
    pub fn move_context(&self) -> MoveContext {
        MoveContext::new(self.state.player_color, self.state.castling_rights)
    }

    /// Select the piece on `square`, dropping any prior selection.
    ///
    /// Returns `None` (and leaves nothing selected) when the square is empty.
    pub fn select(&mut self, square: Square) -> Option<&Piece> {
        self.deselect();
        let piece = self.position.get_mut(square)?;
        piece.select();
        self.selected = Some(square);
        Some(&*piece)
    }

    pub fn deselect(&mut self) {
        if let Some(square) = self.selected.take() {
            if let Some(piece) = self.position.get_mut(square) {
                piece.deselect();
            }
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Piece> {
        self.selected.and_then(|square| self.position.get(square))
    }

    /// Candidate destinations of the selected piece (empty with no selection)
    #[must_use]
    pub fn legal_destinations(&self) -> SquareSet {
        match self.selected {
            Some(square) => self.position.destinations(square, &self.move_context()),
            None => SquareSet::EMPTY,
        }
    }

    /// Move the selected piece to `to`.
    ///
    /// # Errors
    ///
    /// `NoSelection`, `SameSquare`, `NotYourTurn` (only with
    /// `enforce_turn`) or `NotReachable`. The game is unchanged on error.
    pub fn try_move(&mut self, to: Square) -> Result<MoveRecord, MoveError> {
        let (from, ctx) = match self.validate_move(to) {
            Ok(checked) => checked,
            Err(err) => {
                log_trace!("rejected move to {to}: {err}");
                return Err(err);
            }
        };

        let Some(piece) = self.position.take(from) else {
            return Err(MoveError::NoSelection);
        };
        let record = match castle_side_for(&piece, to, &ctx) {
            Some(side) => self.apply_castle(piece, to, side),
            None => self.apply_step(piece, to, &ctx),
        };
        self.selected = None;
        self.position.record_move(record);
        Ok(record)
    }

    /// Like `try_move`, with off-board coordinates rejected as `OffBoard`.
    pub fn try_move_at(&mut self, rank: usize, file: usize) -> Result<MoveRecord, MoveError> {
        let to = Square::new(rank, file).ok_or(MoveError::OffBoard { rank, file })?;
        self.try_move(to)
    }

    /// Move the selected piece to `to`, returning whether it happened
    pub fn move_to(&mut self, to: Square) -> bool {
        self.try_move(to).is_ok()
    }

    fn validate_move(&self, to: Square) -> Result<(Square, MoveContext), MoveError> {
        let from = self.selected.ok_or(MoveError::NoSelection)?;
        let piece = self.position.get(from).ok_or(MoveError::NoSelection)?;
        if from == to {
            return Err(MoveError::SameSquare { square: from });
        }
        if self.config.enforce_turn && piece.color() != self.state.turn {
            return Err(MoveError::NotYourTurn {
                color: piece.color(),
            });
        }
        let ctx = self.move_context();
        if !self.position.piece_destinations(piece, &ctx).contains(to) {
            return Err(MoveError::NotReachable { from, to });
        }
        Ok((from, ctx))
    }

    /// Castle with `king`, already lifted off its home square.
    fn apply_castle(&mut self, mut king: Piece, to: Square, side: CastleSide) -> MoveRecord {
        let from = king.square();
        let color = king.color();
        let rook_from = from.with_file(side.rook_file());
        let rook_to = from.with_file(side.rook_target_file());

        king.deselect();
        king.move_to(to);
        self.position.set(to, Some(king));
        if let Some(mut rook) = self.position.take(rook_from) {
            rook.move_to(rook_to);
            self.position.set(rook_to, Some(rook));
        }
        self.state.castling_rights.remove_color(color);

        log_debug!("{color} castles {side}: king {from}-{to}, rook {rook_from}-{rook_to}");
        MoveRecord::Castle { color, side }
    }

    /// Move `mover`, already lifted off its square, onto `to`.
    fn apply_step(&mut self, mut mover: Piece, to: Square, ctx: &MoveContext) -> MoveRecord {
        let from = mover.square();
        let color = mover.color();

        if let Some(victim) = self.position.take(to) {
            log_debug!("{mover} on {from} captures {victim} on {to}");
            if victim.kind() == PieceKind::Rook {
                if let Some(side) = home_corner_side(to, victim.color(), ctx) {
                    self.state.castling_rights.remove(victim.color(), side);
                }
            }
            self.position.record_capture(victim);
        }

        match mover.kind() {
            PieceKind::King => self.state.castling_rights.remove_color(color),
            PieceKind::Rook => {
                if let Some(side) = home_corner_side(from, color, ctx) {
                    self.state.castling_rights.remove(color, side);
                }
            }
            _ => {}
        }

        mover.deselect();
        mover.move_to(to);

        let mut promotion = None;
        if mover.kind() == PieceKind::Pawn && to.rank() == ctx.promotion_rank(color) {
            mover = mover.promoted(PieceKind::Queen);
            promotion = Some(PieceKind::Queen);
            log_debug!("{color} pawn promotes to queen on {to}");
        }
        self.position.set(to, Some(mover));

        let record = MoveRecord::Step {
            from,
            to,
            promotion,
        };
        log_debug!("applied {record}");
        record
    }

    /// Toggle the side to move
    pub fn change_turn(&mut self) {
        self.state.turn = self.state.turn.opponent();
    }

    /// Restore the starting layout, all castling rights, White to move and
    /// no selection
    pub fn reset(&mut self) {
        self.position = PositionBuilder::starting_position(self.state.player_color).build();
        self.state = GameState::new(self.state.player_color);
        self.selected = None;
        log_info!("game reset, {} at the bottom", self.state.player_color);
    }

    /// FEN placement field of the current position
    #[must_use]
    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }

    /// Replace the position with a FEN placement field.
    ///
    /// Clears the move log, the captured lists and the selection, sets White
    /// to move and keeps only the castling rights whose king and rook stand
    /// on their home squares.
    ///
    /// # Errors
    ///
    /// Returns `FenError` if the placement is malformed; the game is then
    /// unchanged.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        let position = Position::try_from_fen(fen)?;
        self.position = position;
        self.selected = None;
        self.state.turn = Color::White;
        self.state.castling_rights = self.rights_from_layout();
        log_info!("loaded position {fen}");
        Ok(())
    }

    fn rights_from_layout(&self) -> CastlingRights {
        let ctx = self.move_context();
        let mut rights = CastlingRights::none();
        for color in Color::BOTH {
            let rank = ctx.home_rank(color);
            let stands = |file: usize, kind: PieceKind| {
                Square::new(rank, file)
                    .and_then(|sq| self.position.piece_at(sq))
                    .is_some_and(|found| found == (color, kind))
            };
            if !stands(KING_FILE, PieceKind::King) {
                continue;
            }
            for side in CastleSide::BOTH {
                if stands(side.rook_file(), PieceKind::Rook) {
                    rights.set(color, side);
                }
            }
        }
        rights
    }

    #[must_use]
    pub fn move_log(&self) -> &[MoveRecord] {
        self.position.move_log()
    }

    /// Pieces of `color` captured so far, in capture order
    #[must_use]
    pub fn captured_pieces(&self, color: Color) -> &[Piece] {
        self.position.captured(color)
    }
}

/// Castling side whose rook starts on `square` for `color`
fn home_corner_side(square: Square, color: Color, ctx: &MoveContext) -> Option<CastleSide> {
    if square.rank() != ctx.home_rank(color) {
        return None;
    }
    CastleSide::BOTH
        .into_iter()
        .find(|side| side.rook_file() == square.file())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn play(game: &mut Game, from: &str, to: &str) -> MoveRecord {
        assert!(game.select(sq(from)).is_some(), "no piece on {from}");
        game.try_move(sq(to)).unwrap()
    }

    #[test]
    fn test_new_game_layout() {
        let game = Game::new(Color::White);
        assert_eq!(game.to_fen(), "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
        assert_eq!(game.position().pieces_of(Color::White).count(), 16);
        assert_eq!(game.position().pieces_of(Color::Black).count(), 16);
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.castling_rights(), CastlingRights::all());
        assert_eq!(game.phase(), Phase::NoSelection);
    }

    #[test]
    fn test_select_and_deselect() {
        let mut game = Game::new(Color::White);
        let piece = game.select(sq("e2")).unwrap();
        assert!(piece.is_selected());
        assert_eq!(game.phase(), Phase::PieceSelected(sq("e2")));

        // Selecting another piece drops the first selection
        game.select(sq("g1"));
        assert!(!game.position().get(sq("e2")).unwrap().is_selected());
        assert_eq!(game.selected().unwrap().kind(), PieceKind::Knight);

        game.deselect();
        assert!(game.selected().is_none());
        assert!(!game.position().get(sq("g1")).unwrap().is_selected());
    }

    #[test]
    fn test_select_empty_square() {
        let mut game = Game::new(Color::White);
        game.select(sq("e2"));
        assert!(game.select(sq("e4")).is_none());
        assert_eq!(game.phase(), Phase::NoSelection);
        assert!(game.legal_destinations().is_empty());
    }

    #[test]
    fn test_simple_move() {
        let mut game = Game::new(Color::White);
        let record = play(&mut game, "e2", "e4");
        assert_eq!(record, MoveRecord::step(sq("e2"), sq("e4")));
        assert!(game.position().is_empty(sq("e2")));
        let pawn = game.position().get(sq("e4")).unwrap();
        assert!(pawn.has_moved());
        assert!(!pawn.is_selected());
        assert_eq!(pawn.previous_square(), Some(sq("e2")));
        assert_eq!(game.move_log(), &[record]);
        assert_eq!(game.phase(), Phase::NoSelection);
        // Turn is left to the caller
        assert_eq!(game.turn(), Color::White);
    }

    #[test]
    fn test_rejections_leave_state_unchanged() {
        let mut game = Game::new(Color::White);
        assert_eq!(game.try_move(sq("e4")), Err(MoveError::NoSelection));

        game.select(sq("e2"));
        let before = game.position().clone();
        assert_eq!(
            game.try_move(sq("e2")),
            Err(MoveError::SameSquare { square: sq("e2") })
        );
        assert_eq!(
            game.try_move(sq("e5")),
            Err(MoveError::NotReachable {
                from: sq("e2"),
                to: sq("e5")
            })
        );
        assert!(!game.move_to(sq("d3")));
        assert_eq!(game.position(), &before);
        assert_eq!(game.phase(), Phase::PieceSelected(sq("e2")));
    }

    #[test]
    fn test_try_move_at_off_board() {
        let mut game = Game::new(Color::White);
        game.select(sq("e2"));
        assert_eq!(
            game.try_move_at(8, 4),
            Err(MoveError::OffBoard { rank: 8, file: 4 })
        );
        assert!(game.try_move_at(3, 4).is_ok());
    }

    #[test]
    fn test_enforce_turn() {
        let mut game = Game::with_config(GameConfig::default().with_enforce_turn(true));
        game.select(sq("e7"));
        assert_eq!(
            game.try_move(sq("e5")),
            Err(MoveError::NotYourTurn {
                color: Color::Black
            })
        );
        play(&mut game, "e2", "e4");
        game.change_turn();
        play(&mut game, "e7", "e5");
        assert_eq!(game.move_log().len(), 2);
    }

    #[test]
    fn test_capture() {
        let mut game = Game::new(Color::White);
        game.load_fen("4k3/8/8/3p4/4P3/8/8/4K3").unwrap();
        let record = play(&mut game, "e4", "d5");
        assert_eq!(record, MoveRecord::step(sq("e4"), sq("d5")));
        assert!(game.position().is_empty(sq("e4")));
        assert_eq!(
            game.position().piece_at(sq("d5")),
            Some((Color::White, PieceKind::Pawn))
        );
        let captured = game.captured_pieces(Color::Black);
        assert_eq!(captured.len(), 1);
        assert!(captured[0].is_captured());
        assert_eq!(captured[0].kind(), PieceKind::Pawn);
        assert!(game.captured_pieces(Color::White).is_empty());
    }

    #[test]
    fn test_king_side_castling() {
        let mut game = Game::new(Color::White);
        game.load_fen("r3k2r/8/8/8/8/8/8/R3K2R").unwrap();
        let record = play(&mut game, "e1", "g1");
        assert_eq!(
            record,
            MoveRecord::Castle {
                color: Color::White,
                side: CastleSide::King
            }
        );
        assert_eq!(game.to_fen(), "r3k2r/8/8/8/8/8/8/R4RK1");
        assert!(!game.castling_rights().has(Color::White, CastleSide::King));
        assert!(!game.castling_rights().has(Color::White, CastleSide::Queen));
        assert!(game.castling_rights().has(Color::Black, CastleSide::Queen));
    }

    #[test]
    fn test_queen_side_castling_for_black() {
        let mut game = Game::new(Color::White);
        game.load_fen("r3k2r/8/8/8/8/8/8/R3K2R").unwrap();
        let record = play(&mut game, "e8", "c8");
        assert_eq!(record.to_string(), "O-O-O");
        assert_eq!(game.to_fen(), "2kr3r/8/8/8/8/8/8/R3K2R");
        assert!(!game.castling_rights().has(Color::Black, CastleSide::King));
    }

    #[test]
    fn test_castling_moves_selected_king_and_rook_once() {
        let mut game = Game::new(Color::White);
        game.load_fen("r3k2r/8/8/8/8/8/8/R3K2R").unwrap();
        play(&mut game, "e1", "g1");

        let king = game.position().get(sq("g1")).unwrap();
        assert_eq!(king.history(), &[sq("e1"), sq("g1")]);
        assert!(!king.is_selected());
        let rook = game.position().get(sq("f1")).unwrap();
        assert_eq!(rook.history(), &[sq("h1"), sq("f1")]);
        assert_eq!(game.move_log().len(), 1);
        assert_eq!(game.position().piece_count(), 6);
        assert!(game.position().is_consistent());
    }

    #[test]
    fn test_rook_move_clears_one_side() {
        let mut game = Game::new(Color::White);
        game.load_fen("r3k2r/8/8/8/8/8/8/R3K2R").unwrap();
        play(&mut game, "a1", "a2");
        assert!(!game.castling_rights().has(Color::White, CastleSide::Queen));
        assert!(game.castling_rights().has(Color::White, CastleSide::King));
    }

    #[test]
    fn test_capturing_home_rook_clears_enemy_right() {
        let mut game = Game::new(Color::White);
        game.load_fen("r3k2r/8/8/8/8/8/8/R3K2R").unwrap();
        play(&mut game, "h1", "h8");
        assert!(!game.castling_rights().has(Color::Black, CastleSide::King));
        assert!(game.castling_rights().has(Color::Black, CastleSide::Queen));
        assert!(!game.castling_rights().has(Color::White, CastleSide::King));
    }

    #[test]
    fn test_promotion_to_queen() {
        let mut game = Game::new(Color::White);
        game.load_fen("7k/P7/8/8/8/8/8/4K3").unwrap();
        let record = play(&mut game, "a7", "a8");
        assert_eq!(
            record,
            MoveRecord::Step {
                from: sq("a7"),
                to: sq("a8"),
                promotion: Some(PieceKind::Queen)
            }
        );
        let queen = game.position().get(sq("a8")).unwrap();
        assert_eq!(queen.kind(), PieceKind::Queen);
        assert_eq!(queen.history(), &[sq("a7"), sq("a8")]);
    }

    #[test]
    fn test_reset() {
        let mut game = Game::new(Color::Black);
        play(&mut game, "e2", "e4");
        game.change_turn();
        game.reset();
        assert_eq!(game.to_fen(), "RNBQKBNR/PPPPPPPP/8/8/8/8/pppppppp/rnbqkbnr");
        assert!(game.move_log().is_empty());
        assert_eq!(game.turn(), Color::White);
        assert_eq!(game.state().player_color, Color::Black);
    }

    #[test]
    fn test_load_fen_rights_from_layout() {
        let mut game = Game::new(Color::White);
        game.load_fen("4k2r/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        let rights = game.castling_rights();
        assert!(rights.has(Color::White, CastleSide::Queen));
        assert!(!rights.has(Color::White, CastleSide::King));
        assert!(rights.has(Color::Black, CastleSide::King));
        assert!(!rights.has(Color::Black, CastleSide::Queen));
    }

    #[test]
    fn test_load_fen_error_keeps_game() {
        let mut game = Game::new(Color::White);
        play(&mut game, "e2", "e4");
        assert!(game.load_fen("8/8/8").is_err());
        assert_eq!(game.move_log().len(), 1);
    }
}
