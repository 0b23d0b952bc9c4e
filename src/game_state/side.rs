//! One player's roster and the per-side half of move processing.
//!
//! A `Side` validates and applies its own moves (including the king-safety
//! recheck), gives up captured pieces, and finishes compound moves after the
//! fact: pawn promotion and the rook half of a castle.

use tracing::trace;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::*;
use crate::game_state::chess_types::*;
use crate::game_state::piece::{Piece, Roster};
use crate::game_state::undo_state::TrialMove;
use crate::moves::move_descriptions::Legality;
use crate::moves::move_shared::occupant;

/// What the post-move sweep changed on the mover's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub promoted: bool,
    pub castled: Option<CastleSide>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Side {
    color: Color,
    roster: Roster,
}

impl Side {
    /// The standard sixteen pieces for `color`.
    pub fn starting(color: Color) -> Self {
        let home = color.home_rank();
        let pawns = color.pawn_rank();
        let mut roster: Roster = [None; ROSTER_SLOTS];

        roster[QUEENSIDE_ROOK_SLOT] = Some(Piece::new(PieceKind::Rook, color, Square::new(1, home)));
        roster[KINGSIDE_ROOK_SLOT] = Some(Piece::new(PieceKind::Rook, color, Square::new(8, home)));
        for file in 1..=8i8 {
            roster[1 + file as usize] = Some(Piece::new(PieceKind::Pawn, color, Square::new(file, pawns)));
        }

        let mut slot = 10;
        for kind in [PieceKind::Knight, PieceKind::Bishop, PieceKind::Queen] {
            for (index, file_kind) in BACK_RANK.iter().enumerate() {
                if *file_kind == kind {
                    roster[slot] = Some(Piece::new(kind, color, Square::new(index as i8 + 1, home)));
                    slot += 1;
                }
            }
        }
        roster[KING_SLOT] = Some(Piece::new(PieceKind::King, color, Square::new(KING_HOME_FILE, home)));

        Side { color, roster }
    }

    /// Build a side from an arbitrary set of pieces, assigning roster slots.
    ///
    /// The king goes to the king slot and rooks on their home corners go to the
    /// reserved rook slots. Everything else fills the general slots, then any
    /// rook slot still vacant. Every piece must be of `color`, on the board,
    /// and on a square of its own.
    pub fn from_pieces(color: Color, pieces: &[Piece]) -> ChessResult<Self> {
        let kings = pieces.iter().filter(|p| p.kind() == PieceKind::King).count();
        if kings != 1 {
            return Err(ChessErrors::KingCount {
                color,
                found: kings,
            });
        }
        if pieces.len() > ROSTER_SLOTS {
            return Err(ChessErrors::RosterOverflow {
                color,
                found: pieces.len(),
            });
        }

        for (index, piece) in pieces.iter().enumerate() {
            let reason = if piece.color() != color {
                Some("belongs to the other color")
            } else if !piece.square().is_on_board() {
                Some("square is off the board")
            } else if pieces[..index].iter().any(|other| other.is_on(piece.square())) {
                Some("square is already occupied")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(ChessErrors::InvalidPlacement {
                    color,
                    square: piece.square(),
                    reason,
                });
            }
        }

        let home = color.home_rank();
        let mut roster: Roster = [None; ROSTER_SLOTS];
        let mut unplaced = Vec::with_capacity(pieces.len());

        for piece in pieces {
            let reserved = match piece.kind() {
                PieceKind::King => Some(KING_SLOT),
                PieceKind::Rook if piece.is_on(Square::new(1, home)) => Some(QUEENSIDE_ROOK_SLOT),
                PieceKind::Rook if piece.is_on(Square::new(8, home)) => Some(KINGSIDE_ROOK_SLOT),
                _ => None,
            };
            match reserved {
                Some(slot) => roster[slot] = Some(*piece),
                None => unplaced.push(*piece),
            }
        }

        // Kind order keeps the general slots aligned with the starting layout.
        unplaced.sort_by_key(|piece| piece.kind() as u8);
        let free: Vec<usize> = (2..KING_SLOT)
            .chain([QUEENSIDE_ROOK_SLOT, KINGSIDE_ROOK_SLOT])
            .filter(|slot| roster[*slot].is_none())
            .collect();
        for (slot, piece) in free.into_iter().zip(unplaced) {
            roster[slot] = Some(piece);
        }

        Ok(Side { color, roster })
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.roster.iter().flatten()
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        occupant(&self.roster, square)
    }

    fn slot_at(&self, square: Square) -> Option<usize> {
        self.roster
            .iter()
            .position(|slot| slot.is_some_and(|piece| piece.is_on(square)))
    }

    pub fn king(&self) -> Option<&Piece> {
        self.roster[KING_SLOT].as_ref()
    }

    pub fn king_square(&self) -> Option<Square> {
        self.king().map(Piece::square)
    }

    pub fn material_value(&self) -> i32 {
        self.pieces().map(Piece::material_value).sum()
    }

    /// Validate and, if legal, apply the move `src -> dst` for this side.
    pub fn attempt_move(&mut self, dst: Square, src: Square, enemy: &Roster) -> MoveOutcome {
        match self.vet_move(dst, src, enemy, true) {
            Some(_) => MoveOutcome::Applied,
            None => MoveOutcome::Rejected,
        }
    }

    /// Answer whether `attempt_move` would apply, leaving this side untouched.
    pub fn probe_move(&mut self, dst: Square, src: Square, enemy: &Roster) -> Option<Legality> {
        self.vet_move(dst, src, enemy, false)
    }

    fn vet_move(&mut self, dst: Square, src: Square, enemy: &Roster, keep: bool) -> Option<Legality> {
        if !src.is_on_board() || !dst.is_on_board() {
            return None;
        }
        let slot = self.slot_at(src)?;
        if occupant(enemy, dst).is_some_and(|target| target.kind() == PieceKind::King) {
            return None;
        }

        let piece = self.roster[slot]?;
        let legality = piece.classify(dst, enemy, &self.roster);
        if !legality.is_legal() {
            return None;
        }

        let trial = TrialMove::begin(&mut self.roster, slot, dst)?;
        if king_attacked(trial.roster(), enemy, Some(dst)) {
            return None;
        }
        if !keep {
            drop(trial);
            return Some(legality);
        }
        trial.commit();

        if let Some(moved) = self.roster[slot].as_mut() {
            moved.record_accepted(legality);
        }
        Some(legality)
    }

    /// Is this side's king reached by any enemy predicate?
    ///
    /// A piece standing exactly on `exempt` is skipped. The move path passes its
    /// destination here, which is where a capture victim still sits.
    pub fn king_in_check(&self, enemy: &Roster, exempt: Option<Square>) -> bool {
        king_attacked(&self.roster, enemy, exempt)
    }

    /// Remove this side's piece on `dst`, if any, after the opponent moved there.
    pub fn capture_check(&mut self, dst: Square) -> Option<Piece> {
        let slot = self.slot_at(dst)?;
        if self.roster[slot].is_some_and(|piece| piece.kind() == PieceKind::King) {
            return None;
        }
        self.roster[slot].take()
    }

    /// Finish the compound parts of a move that just landed on `dst`.
    pub fn promotion_and_castling_sweep(&mut self, dst: Square, enemy: &Roster) -> SweepReport {
        let mut report = SweepReport::default();

        for slot in self.roster.iter_mut() {
            if slot.is_some_and(|piece| piece.just_promoted()) {
                *slot = Some(Piece::new(PieceKind::Queen, self.color, dst));
                report.promoted = true;
            }
        }

        let castled = self.roster[KING_SLOT]
            .as_mut()
            .and_then(Piece::take_last_castle);
        if let Some(side) = castled {
            report.castled = Some(side);
            self.relocate_castling_rook(side, enemy);
        }

        report
    }

    fn relocate_castling_rook(&mut self, side: CastleSide, enemy: &Roster) {
        let slot = match side {
            CastleSide::Kingside => KINGSIDE_ROOK_SLOT,
            CastleSide::Queenside => QUEENSIDE_ROOK_SLOT,
        };
        let Some(rook) = self.roster[slot].filter(|piece| piece.kind() == PieceKind::Rook) else {
            return;
        };
        let Some(target) = rook.square().offset(side.rook_shift(), 0) else {
            return;
        };
        if occupant(&self.roster, target).is_some() || occupant(enemy, target).is_some() {
            return;
        }
        if let Some(rook) = self.roster[slot].as_mut() {
            trace!(color = %self.color, from = %rook.square(), to = %target, "castling rook relocated");
            rook.relocate(target);
        }
    }
}

fn king_attacked(ally: &Roster, enemy: &Roster, exempt: Option<Square>) -> bool {
    let Some(king_square) = ally[KING_SLOT].map(|king| king.square()) else {
        return false;
    };
    enemy
        .iter()
        .flatten()
        .filter(|attacker| exempt != Some(attacker.square()))
        .any(|attacker| attacker.legal_destination(king_square, ally, enemy))
}
