//! King movement rules.
//!
//! One square in any direction, or a castle: a same-rank double step by a king
//! that has never moved, when every square between it and the corner on that
//! wing is empty. Whether the rook is still at home, and whether the king
//! crosses an attacked square, is not examined.

use crate::game_state::chess_types::{CastleSide, Square};
use crate::game_state::piece::{Piece, Roster};
use crate::moves::move_descriptions::Legality;
use crate::moves::move_shared::{base_precondition, path_is_clear};

pub fn king_legality(
    king: &Piece,
    has_moved: bool,
    dst: Square,
    enemy: &Roster,
    ally: &Roster,
) -> Legality {
    if !base_precondition(dst, ally) {
        return Legality::Illegal;
    }

    let from = king.square();
    let d_file = dst.file - from.file;
    let d_rank = dst.rank - from.rank;

    if d_file.abs() <= 1 && d_rank.abs() <= 1 && (d_file, d_rank) != (0, 0) {
        return Legality::Legal;
    }

    if !has_moved && d_rank == 0 && d_file.abs() == 2 {
        let side = if d_file > 0 {
            CastleSide::Kingside
        } else {
            CastleSide::Queenside
        };
        let corner = Square::new(side.corner_file(), from.rank);
        if path_is_clear(from, corner, enemy, ally) {
            return Legality::Castles(side);
        }
    }

    Legality::Illegal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::piece::roster_of;

    fn white_king() -> Piece {
        Piece::new(PieceKind::King, Color::White, Square::new(5, 1))
    }

    #[test]
    fn king_steps_one_square() {
        let king = white_king();
        let ally = roster_of(&[king]);
        let enemy = roster_of(&[]);
        let count = Square::all()
            .filter(|dst| king_legality(&king, true, *dst, &enemy, &ally) == Legality::Legal)
            .count();
        assert_eq!(count, 5);
        assert_eq!(
            king_legality(&king, true, Square::new(5, 3), &enemy, &ally),
            Legality::Illegal
        );
    }

    #[test]
    fn unmoved_king_castles_on_both_wings_when_clear() {
        let king = white_king();
        let ally = roster_of(&[
            king,
            Piece::new(PieceKind::Rook, Color::White, Square::new(1, 1)),
            Piece::new(PieceKind::Rook, Color::White, Square::new(8, 1)),
        ]);
        let enemy = roster_of(&[]);
        assert_eq!(
            king_legality(&king, false, Square::new(7, 1), &enemy, &ally),
            Legality::Castles(CastleSide::Kingside)
        );
        assert_eq!(
            king_legality(&king, false, Square::new(3, 1), &enemy, &ally),
            Legality::Castles(CastleSide::Queenside)
        );
        assert_eq!(
            king_legality(&king, true, Square::new(7, 1), &enemy, &ally),
            Legality::Illegal
        );
    }

    #[test]
    fn queenside_castle_needs_the_b_file_empty_too() {
        let king = white_king();
        let ally = roster_of(&[
            king,
            Piece::new(PieceKind::Rook, Color::White, Square::new(1, 1)),
            Piece::new(PieceKind::Knight, Color::White, Square::new(2, 1)),
        ]);
        let enemy = roster_of(&[]);
        assert_eq!(
            king_legality(&king, false, Square::new(3, 1), &enemy, &ally),
            Legality::Illegal
        );
    }

    #[test]
    fn enemy_piece_between_king_and_rook_blocks_castling() {
        let king = white_king();
        let ally = roster_of(&[king]);
        let enemy = roster_of(&[Piece::new(PieceKind::Bishop, Color::Black, Square::new(6, 1))]);
        assert_eq!(
            king_legality(&king, false, Square::new(7, 1), &enemy, &ally),
            Legality::Illegal
        );
    }
}
