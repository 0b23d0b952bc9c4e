//! Queen movement rules: bishop or rook geometry with the matching blocker scan.

use crate::game_state::chess_types::Square;
use crate::game_state::piece::{Piece, Roster};
use crate::moves::bishop_moves::diagonal_reaches;
use crate::moves::move_descriptions::Legality;
use crate::moves::move_shared::base_precondition;
use crate::moves::rook_moves::straight_reaches;

pub fn queen_legality(queen: &Piece, dst: Square, enemy: &Roster, ally: &Roster) -> Legality {
    if !base_precondition(dst, ally) {
        return Legality::Illegal;
    }
    let from = queen.square();
    if diagonal_reaches(from, dst, enemy, ally) || straight_reaches(from, dst, enemy, ally) {
        Legality::Legal
    } else {
        Legality::Illegal
    }
}
