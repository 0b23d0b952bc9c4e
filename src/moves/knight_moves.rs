//! Knight movement rules. Knights jump, so only the destination matters.

use crate::game_state::chess_types::Square;
use crate::game_state::piece::{Piece, Roster};
use crate::moves::move_descriptions::Legality;
use crate::moves::move_shared::base_precondition;

pub fn knight_legality(knight: &Piece, dst: Square, ally: &Roster) -> Legality {
    if !base_precondition(dst, ally) {
        return Legality::Illegal;
    }
    let d_file = (dst.file - knight.square().file).abs();
    let d_rank = (dst.rank - knight.square().rank).abs();
    if (d_file == 1 && d_rank == 2) || (d_file == 2 && d_rank == 1) {
        Legality::Legal
    } else {
        Legality::Illegal
    }
}
