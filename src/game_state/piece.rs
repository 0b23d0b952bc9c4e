//! A single chess piece and its per-kind state.
//!
//! `Role` is the tagged variant that replaces a class hierarchy: the king and
//! the pawn carry the extra flags only they need, every other kind is a bare
//! tag. Legality is dispatched by matching on the role.

use crate::game_state::chess_rules::ROSTER_SLOTS;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_legality;
use crate::moves::king_moves::king_legality;
use crate::moves::knight_moves::knight_legality;
use crate::moves::move_descriptions::Legality;
use crate::moves::pawn_moves::pawn_legality;
use crate::moves::queen_moves::queen_legality;
use crate::moves::rook_moves::rook_legality;

/// Fixed-capacity set of one side's pieces; a captured piece leaves `None`.
pub type Roster = [Option<Piece>; ROSTER_SLOTS];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Pawn {
        just_promoted: bool,
    },
    Knight,
    Bishop,
    Rook,
    Queen,
    King {
        has_moved: bool,
        last_castle: Option<CastleSide>,
    },
}

impl Role {
    pub const fn fresh(kind: PieceKind) -> Self {
        match kind {
            PieceKind::Pawn => Role::Pawn {
                just_promoted: false,
            },
            PieceKind::Knight => Role::Knight,
            PieceKind::Bishop => Role::Bishop,
            PieceKind::Rook => Role::Rook,
            PieceKind::Queen => Role::Queen,
            PieceKind::King => Role::King {
                has_moved: false,
                last_castle: None,
            },
        }
    }

    pub const fn kind(self) -> PieceKind {
        match self {
            Role::Pawn { .. } => PieceKind::Pawn,
            Role::Knight => PieceKind::Knight,
            Role::Bishop => PieceKind::Bishop,
            Role::Rook => PieceKind::Rook,
            Role::Queen => PieceKind::Queen,
            Role::King { .. } => PieceKind::King,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    square: Square,
    color: Color,
    role: Role,
}

impl Piece {
    /// A piece in its initial state (unmoved king, unpromoted pawn).
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Piece {
            square,
            color,
            role: Role::fresh(kind),
        }
    }

    /// A king whose castling eligibility is given explicitly.
    pub const fn king(color: Color, square: Square, has_moved: bool) -> Self {
        Piece {
            square,
            color,
            role: Role::King {
                has_moved,
                last_castle: None,
            },
        }
    }

    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.role.kind()
    }

    #[inline]
    pub const fn material_value(&self) -> i32 {
        self.kind().material_value()
    }

    #[inline]
    pub fn is_on(&self, square: Square) -> bool {
        self.square == square
    }

    /// `true` for a king that has never moved, `false` otherwise (including non-kings).
    pub const fn can_castle(&self) -> bool {
        matches!(self.role, Role::King { has_moved: false, .. })
    }

    pub const fn just_promoted(&self) -> bool {
        matches!(self.role, Role::Pawn { just_promoted: true })
    }

    pub const fn view(&self) -> PieceView {
        PieceView {
            color: self.color,
            kind: self.kind(),
            square: self.square,
        }
    }

    /// Classify `dst` against the current occupancy. Pure: mutates nothing.
    pub fn classify(&self, dst: Square, enemy: &Roster, ally: &Roster) -> Legality {
        match self.role {
            Role::Pawn { .. } => pawn_legality(self, dst, enemy, ally),
            Role::Knight => knight_legality(self, dst, ally),
            Role::Bishop => bishop_legality(self, dst, enemy, ally),
            Role::Rook => rook_legality(self, dst, enemy, ally),
            Role::Queen => queen_legality(self, dst, enemy, ally),
            Role::King { has_moved, .. } => king_legality(self, has_moved, dst, enemy, ally),
        }
    }

    #[inline]
    pub fn legal_destination(&self, dst: Square, enemy: &Roster, ally: &Roster) -> bool {
        self.classify(dst, enemy, ally).is_legal()
    }

    /// Move the piece without any rule checking.
    #[inline]
    pub fn relocate(&mut self, square: Square) {
        self.square = square;
    }

    /// Record the flags of a move that has passed every check.
    pub(crate) fn record_accepted(&mut self, legality: Legality) {
        match &mut self.role {
            Role::King {
                has_moved,
                last_castle,
            } => {
                *has_moved = true;
                *last_castle = legality.castle_side();
            }
            Role::Pawn { just_promoted } => {
                *just_promoted = matches!(legality, Legality::Promotes);
            }
            _ => {}
        }
    }

    /// Consume the king's pending castle marker.
    pub(crate) fn take_last_castle(&mut self) -> Option<CastleSide> {
        match &mut self.role {
            Role::King { last_castle, .. } => last_castle.take(),
            _ => None,
        }
    }
}

/// Build a roster from a slice, filling slots in order.
#[cfg(test)]
pub(crate) fn roster_of(pieces: &[Piece]) -> Roster {
    let mut roster: Roster = [None; ROSTER_SLOTS];
    for (slot, piece) in roster.iter_mut().zip(pieces) {
        *slot = Some(*piece);
    }
    roster
}
