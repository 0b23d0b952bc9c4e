//! Rook movement rules: any distance along a rank or file with a clear path.

use crate::game_state::chess_types::Square;
use crate::game_state::piece::{Piece, Roster};
use crate::moves::move_descriptions::Legality;
use crate::moves::move_shared::{base_precondition, path_is_clear};

/// Straight-line geometry plus blocker scan, shared with the queen.
pub fn straight_reaches(from: Square, dst: Square, enemy: &Roster, ally: &Roster) -> bool {
    let same_file = from.file == dst.file;
    let same_rank = from.rank == dst.rank;
    (same_file ^ same_rank) && path_is_clear(from, dst, enemy, ally)
}

pub fn rook_legality(rook: &Piece, dst: Square, enemy: &Roster, ally: &Roster) -> Legality {
    if base_precondition(dst, ally) && straight_reaches(rook.square(), dst, enemy, ally) {
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
    fn rook_on_an_empty_board_reaches_fourteen_squares() {
        let rook = Piece::new(PieceKind::Rook, Color::White, Square::new(4, 4));
        let ally = roster_of(&[rook]);
        let enemy = roster_of(&[]);
        let count = Square::all()
            .filter(|dst| rook_legality(&rook, *dst, &enemy, &ally).is_legal())
            .count();
        assert_eq!(count, 14);
    }

    #[test]
    fn rook_captures_but_does_not_pass_through() {
        let rook = Piece::new(PieceKind::Rook, Color::White, Square::new(1, 1));
        let ally = roster_of(&[rook]);
        let enemy = roster_of(&[Piece::new(PieceKind::Pawn, Color::Black, Square::new(1, 4))]);
        assert!(rook_legality(&rook, Square::new(1, 4), &enemy, &ally).is_legal());
        assert!(!rook_legality(&rook, Square::new(1, 5), &enemy, &ally).is_legal());
        assert!(!rook_legality(&rook, Square::new(2, 2), &enemy, &ally).is_legal());
    }
}
