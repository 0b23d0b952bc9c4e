//! Pawn movement rules.
//!
//! Pawns are the only piece whose capture geometry differs from its quiet
//! geometry: straight ahead onto empty squares, diagonally ahead only onto an
//! enemy piece. There is no en passant.

use crate::game_state::chess_types::Square;
use crate::game_state::piece::{Piece, Roster};
use crate::moves::move_descriptions::Legality;
use crate::moves::move_shared::{base_precondition, is_occupied, occupant};

pub fn pawn_legality(pawn: &Piece, dst: Square, enemy: &Roster, ally: &Roster) -> Legality {
    if !base_precondition(dst, ally) {
        return Legality::Illegal;
    }

    let from = pawn.square();
    let color = pawn.color();
    let forward = color.forward();
    let d_file = dst.file - from.file;
    let d_rank = dst.rank - from.rank;

    let reachable = if d_file == 0 && d_rank == forward {
        !is_occupied(dst, enemy, ally)
    } else if d_file == 0 && d_rank == 2 * forward && from.rank == color.pawn_rank() {
        let skipped = Square::new(from.file, from.rank + forward);
        !is_occupied(skipped, enemy, ally) && !is_occupied(dst, enemy, ally)
    } else if d_file.abs() == 1 && d_rank == forward {
        occupant(enemy, dst).is_some()
    } else {
        false
    };

    if !reachable {
        Legality::Illegal
    } else if dst.rank == color.promotion_rank() {
        Legality::Promotes
    } else {
        Legality::Legal
    }
}
