//! Occupancy helpers shared by every piece predicate.
//!
//! Blocker scans always look at the union of both rosters. None of these
//! functions mutate anything.

use crate::game_state::chess_types::Square;
use crate::game_state::piece::{Piece, Roster};

#[inline]
pub fn occupant(roster: &Roster, square: Square) -> Option<&Piece> {
    roster.iter().flatten().find(|piece| piece.is_on(square))
}

#[inline]
pub fn is_occupied(square: Square, enemy: &Roster, ally: &Roster) -> bool {
    occupant(enemy, square).is_some() || occupant(ally, square).is_some()
}

/// Check every concrete piece must pass: the destination is on the board and
/// not held by a piece of the mover's own side.
#[inline]
pub fn base_precondition(dst: Square, ally: &Roster) -> bool {
    dst.is_on_board() && occupant(ally, dst).is_none()
}

/// True when every square strictly between `from` and `to` is empty.
///
/// `from` and `to` must be distinct and share a rank, a file or a diagonal.
pub fn path_is_clear(from: Square, to: Square, enemy: &Roster, ally: &Roster) -> bool {
    let d_file = (to.file - from.file).signum();
    let d_rank = (to.rank - from.rank).signum();
    debug_assert!(from != to, "path scan needs two distinct squares");
    debug_assert!(
        d_file == 0 || d_rank == 0 || (to.file - from.file).abs() == (to.rank - from.rank).abs(),
        "path scan needs a straight line"
    );

    let mut cursor = Square::new(from.file + d_file, from.rank + d_rank);
    while cursor != to {
        if is_occupied(cursor, enemy, ally) {
            return false;
        }
        cursor = Square::new(cursor.file + d_file, cursor.rank + d_rank);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::piece::roster_of;

    #[test]
    fn path_ignores_the_endpoints() {
        let ally = roster_of(&[Piece::new(PieceKind::Rook, Color::White, Square::new(1, 1))]);
        let enemy = roster_of(&[Piece::new(PieceKind::Rook, Color::Black, Square::new(1, 8))]);
        assert!(path_is_clear(Square::new(1, 1), Square::new(1, 8), &enemy, &ally));
    }

    #[test]
    fn blocker_from_either_roster_closes_the_path() {
        let ally = roster_of(&[Piece::new(PieceKind::Pawn, Color::White, Square::new(3, 3))]);
        let empty = roster_of(&[]);
        assert!(!path_is_clear(Square::new(1, 1), Square::new(5, 5), &empty, &ally));
        assert!(!path_is_clear(Square::new(1, 1), Square::new(5, 5), &ally, &empty));
        assert!(path_is_clear(Square::new(1, 1), Square::new(3, 3), &empty, &ally));
    }

    #[test]
    fn own_piece_on_destination_fails_the_precondition() {
        let ally = roster_of(&[Piece::new(PieceKind::Knight, Color::White, Square::new(2, 1))]);
        assert!(!base_precondition(Square::new(2, 1), &ally));
        assert!(base_precondition(Square::new(3, 3), &ally));
        assert!(!base_precondition(Square::new(9, 3), &ally));
    }
}
