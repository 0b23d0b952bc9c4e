//! The game: both sides, the turn, and the single move transition.
//!
//! `Game` routes a submitted move to the side to move, then lets the opponent
//! give up a captured piece, lets the mover finish promotion or castling,
//! flips the turn and records the move. A rejected move changes nothing.

use tracing::debug;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{KING_HOME_FILE, STARTING_POSITION_FEN};
use crate::game_state::chess_types::*;
use crate::game_state::side::Side;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// One applied move as it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub mover: Color,
    pub piece: PieceKind,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceKind>,
    pub promoted: bool,
    pub castled: Option<CastleSide>,
    /// The opponent's king was attacked right after the move.
    pub gives_check: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    white: Side,
    black: Side,
    side_to_move: Color,
    material_score: i32,
    start_fen: String,
    start_halfmove: u16,
    start_fullmove: u16,
    history: Vec<MoveRecord>,
}

impl Game {
    /// The standard starting position, White to move.
    pub fn new_game() -> Self {
        let mut game = Game::assemble(
            Side::starting(Color::White),
            Side::starting(Color::Black),
            Color::White,
        );
        game.start_fen = STARTING_POSITION_FEN.to_owned();
        game
    }

    /// Assemble a game from two prepared sides.
    ///
    /// `white` and `black` must carry their own colors, and no square may hold
    /// a piece from both.
    pub fn from_sides(white: Side, black: Side, side_to_move: Color) -> ChessResult<Self> {
        for (side, expected) in [(&white, Color::White), (&black, Color::Black)] {
            if side.color() != expected {
                let square = side
                    .king_square()
                    .unwrap_or(Square::new(KING_HOME_FILE, expected.home_rank()));
                return Err(ChessErrors::InvalidPlacement {
                    color: side.color(),
                    square,
                    reason: "side is filed under the other color",
                });
            }
        }
        if let Some(shared) = white.pieces().find(|piece| black.piece_at(piece.square()).is_some()) {
            return Err(ChessErrors::InvalidPlacement {
                color: Color::Black,
                square: shared.square(),
                reason: "square is already occupied",
            });
        }
        Ok(Game::assemble(white, black, side_to_move))
    }

    fn assemble(white: Side, black: Side, side_to_move: Color) -> Self {
        let mut game = Game {
            white,
            black,
            side_to_move,
            material_score: 0,
            start_fen: String::new(),
            start_halfmove: 0,
            start_fullmove: 1,
            history: Vec::new(),
        };
        game.recompute_score();
        game.start_fen = generate_fen(&game);
        game
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    pub(crate) fn set_start_clocks(&mut self, halfmove: u16, fullmove: u16) {
        self.start_halfmove = halfmove;
        self.start_fullmove = fullmove;
        self.start_fen = generate_fen(self);
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// White material minus Black material.
    #[inline]
    pub fn material_score(&self) -> i32 {
        self.material_score
    }

    pub fn side(&self, color: Color) -> &Side {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn sides_mut(&mut self, mover: Color) -> (&mut Side, &mut Side) {
        match mover {
            Color::White => (&mut self.white, &mut self.black),
            Color::Black => (&mut self.black, &mut self.white),
        }
    }

    /// FEN of the position the game started from.
    pub fn start_fen(&self) -> &str {
        &self.start_fen
    }

    pub fn start_clocks(&self) -> (u16, u16) {
        (self.start_halfmove, self.start_fullmove)
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    pub fn piece_at(&self, square: Square) -> Option<PieceView> {
        self.white
            .piece_at(square)
            .or_else(|| self.black.piece_at(square))
            .map(|piece| piece.view())
    }

    /// Every live piece, White first.
    pub fn pieces(&self) -> impl Iterator<Item = PieceView> + '_ {
        self.white
            .pieces()
            .chain(self.black.pieces())
            .map(|piece| piece.view())
    }

    /// Is `color`'s king attacked right now?
    pub fn king_in_check(&self, color: Color) -> bool {
        let opponent = self.side(color.opposite());
        self.side(color).king_in_check(opponent.roster(), None)
    }

    /// Every `(src, dst)` the side to move would have applied.
    pub fn legal_moves(&self) -> Vec<(Square, Square)> {
        generate_legal_moves(self)
    }

    /// Try to move the piece on `src` to `dst` for the side to move.
    pub fn submit_move(&mut self, src: Square, dst: Square) -> MoveOutcome {
        if !src.is_on_board() || !dst.is_on_board() {
            return MoveOutcome::Rejected;
        }

        let mover_color = self.side_to_move;
        let (mover, opponent) = self.sides_mut(mover_color);
        let Some(piece) = mover.piece_at(src).map(|piece| piece.kind()) else {
            return MoveOutcome::Rejected;
        };
        if !mover.attempt_move(dst, src, opponent.roster()).is_applied() {
            return MoveOutcome::Rejected;
        }

        let captured = opponent.capture_check(dst).map(|victim| victim.kind());
        let sweep = mover.promotion_and_castling_sweep(dst, opponent.roster());
        let gives_check = opponent.king_in_check(mover.roster(), None);

        debug!(
            mover = %mover_color,
            piece = ?piece,
            from = %src,
            to = %dst,
            captured = ?captured,
            promoted = sweep.promoted,
            castled = ?sweep.castled,
            gives_check,
            "move applied"
        );

        self.history.push(MoveRecord {
            mover: mover_color,
            piece,
            from: src,
            to: dst,
            captured,
            promoted: sweep.promoted,
            castled: sweep.castled,
            gives_check,
        });
        self.side_to_move = mover_color.opposite();
        self.recompute_score();

        MoveOutcome::Applied
    }

    fn recompute_score(&mut self) {
        self.material_score = self.white.material_value() - self.black.material_value();
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new_game()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::piece::Piece;

    fn sq(file: i8, rank: i8) -> Square {
        Square::new(file, rank)
    }

    fn lone_king(color: Color, square: Square) -> Side {
        Side::from_pieces(color, &[Piece::king(color, square, true)]).expect("valid side")
    }

    #[test]
    fn from_sides_rejects_overlapping_sides() {
        let result = Game::from_sides(
            lone_king(Color::White, sq(5, 1)),
            Side::from_pieces(
                Color::Black,
                &[
                    Piece::king(Color::Black, sq(5, 8), true),
                    Piece::new(PieceKind::Rook, Color::Black, sq(5, 1)),
                ],
            )
            .expect("valid side"),
            Color::White,
        );
        assert!(matches!(
            result,
            Err(ChessErrors::InvalidPlacement { reason: "square is already occupied", .. })
        ));
    }

    #[test]
    fn from_sides_rejects_swapped_colors() {
        let result = Game::from_sides(
            lone_king(Color::Black, sq(5, 8)),
            lone_king(Color::White, sq(5, 1)),
            Color::White,
        );
        assert!(matches!(
            result,
            Err(ChessErrors::InvalidPlacement { color: Color::Black, .. })
        ));
    }

    #[test]
    fn from_sides_keeps_score_and_fen_in_agreement() {
        let white = Side::from_pieces(
            Color::White,
            &[
                Piece::king(Color::White, sq(5, 1), true),
                Piece::new(PieceKind::Queen, Color::White, sq(4, 1)),
            ],
        )
        .expect("valid side");
        let game = Game::from_sides(white, lone_king(Color::Black, sq(5, 8)), Color::White)
            .expect("valid sides");
        assert_eq!(game.material_score(), 9);
        assert_eq!(game.to_fen(), "4k3/8/8/8/8/8/8/3QK3 w - - 0 1");
    }

    #[test]
    fn new_game_has_the_standard_layout() {
        let game = Game::new_game();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.material_score(), 0);
        assert_eq!(game.pieces().count(), 32);
        assert_eq!(game.to_fen(), STARTING_POSITION_FEN);
        assert_eq!(game.start_fen(), STARTING_POSITION_FEN);

        let king = game.piece_at(sq(5, 8)).expect("black king on e8");
        assert_eq!((king.color, king.kind), (Color::Black, PieceKind::King));
        assert_eq!(game.piece_at(sq(4, 4)), None);
    }

    #[test]
    fn turns_alternate_only_on_applied_moves() {
        let mut game = Game::new_game();
        assert_eq!(game.submit_move(sq(5, 7), sq(5, 5)), MoveOutcome::Rejected);
        assert_eq!(game.side_to_move(), Color::White);

        assert_eq!(game.submit_move(sq(7, 1), sq(6, 3)), MoveOutcome::Applied);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.submit_move(sq(5, 7), sq(5, 5)), MoveOutcome::Applied);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.last_move().map(|r| r.piece), Some(PieceKind::Pawn));
    }

    #[test]
    fn off_board_coordinates_are_rejected() {
        let mut game = Game::new_game();
        let before = game.clone();
        assert_eq!(game.submit_move(sq(0, 2), sq(1, 3)), MoveOutcome::Rejected);
        assert_eq!(game.submit_move(sq(5, 2), sq(5, 9)), MoveOutcome::Rejected);
        assert_eq!(game.submit_move(sq(-3, 40), sq(5, 4)), MoveOutcome::Rejected);
        assert_eq!(game, before);
    }

    #[test]
    fn check_is_recorded_on_the_move_that_gives_it() {
        let mut game = Game::new_game();
        for (src, dst) in [
            (sq(6, 2), sq(6, 3)),
            (sq(5, 7), sq(5, 5)),
            (sq(7, 2), sq(7, 4)),
            (sq(4, 8), sq(8, 4)),
        ] {
            assert_eq!(game.submit_move(src, dst), MoveOutcome::Applied);
        }
        assert!(game.last_move().is_some_and(|r| r.gives_check));
        assert!(game.king_in_check(Color::White));
        assert!(!game.king_in_check(Color::Black));
    }
}
