//! Bishop movement rules: any distance along a diagonal with a clear path.

use crate::game_state::chess_types::Square;
use crate::game_state::piece::{Piece, Roster};
use crate::moves::move_descriptions::Legality;
use crate::moves::move_shared::{base_precondition, path_is_clear};

/// Diagonal geometry plus blocker scan, shared with the queen.
pub fn diagonal_reaches(from: Square, dst: Square, enemy: &Roster, ally: &Roster) -> bool {
    let d_file = (dst.file - from.file).abs();
    let d_rank = (dst.rank - from.rank).abs();
    d_file == d_rank && d_file > 0 && path_is_clear(from, dst, enemy, ally)
}

pub fn bishop_legality(bishop: &Piece, dst: Square, enemy: &Roster, ally: &Roster) -> Legality {
    if base_precondition(dst, ally) && diagonal_reaches(bishop.square(), dst, enemy, ally) {
        Legality::Legal
    } else {
        Legality::Illegal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::piece::roster_of;

    #[test]
    fn bishop_stops_at_the_first_blocker() {
        let bishop = Piece::new(PieceKind::Bishop, Color::White, Square::new(3, 1));
        let ally = roster_of(&[bishop]);
        let enemy = roster_of(&[Piece::new(PieceKind::Pawn, Color::Black, Square::new(5, 3))]);
        assert!(bishop_legality(&bishop, Square::new(4, 2), &enemy, &ally).is_legal());
        assert!(bishop_legality(&bishop, Square::new(5, 3), &enemy, &ally).is_legal());
        assert!(!bishop_legality(&bishop, Square::new(6, 4), &enemy, &ally).is_legal());
    }

    #[test]
    fn bishop_rejects_straight_and_null_moves() {
        let bishop = Piece::new(PieceKind::Bishop, Color::Black, Square::new(4, 4));
        let ally = roster_of(&[bishop]);
        let enemy = roster_of(&[]);
        assert!(!bishop_legality(&bishop, Square::new(4, 6), &enemy, &ally).is_legal());
        assert!(!bishop_legality(&bishop, Square::new(4, 4), &enemy, &ally).is_legal());
        assert!(bishop_legality(&bishop, Square::new(1, 7), &enemy, &ally).is_legal());
    }
}
