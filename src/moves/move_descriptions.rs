//! Classification of a legal destination.
//!
//! Legality predicates do not stop at a yes/no answer: they also say what kind
//! of move the destination represents so the owning side can finish compound
//! moves (promotion, castling) after the move has been accepted.

use crate::game_state::chess_types::CastleSide;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Legality {
    /// Geometry, blocking or occupancy forbids the destination.
    Illegal,
    /// An ordinary move or capture.
    Legal,
    /// A pawn move onto its promotion rank.
    Promotes,
    /// A king double step that castles toward the given wing.
    Castles(CastleSide),
}

impl Legality {
    #[inline]
    pub const fn is_legal(self) -> bool {
        !matches!(self, Legality::Illegal)
    }

    #[inline]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self {
            Legality::Castles(side) => Some(side),
            _ => None,
        }
    }
}
