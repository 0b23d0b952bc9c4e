//! Scoped apply/revert for trial moves.
//!
//! The king-safety recheck moves the piece in place instead of copying the
//! roster. `TrialMove` relocates on creation and puts the piece back when it
//! is dropped, unless `commit` was called first.

use crate::game_state::chess_types::Square;
use crate::game_state::piece::Roster;

pub struct TrialMove<'a> {
    roster: &'a mut Roster,
    slot: usize,
    origin: Square,
    committed: bool,
}

impl<'a> TrialMove<'a> {
    /// Relocate the piece in `slot` to `dst`; `None` if the slot is vacant.
    pub fn begin(roster: &'a mut Roster, slot: usize, dst: Square) -> Option<Self> {
        let piece = roster.get_mut(slot)?.as_mut()?;
        let origin = piece.square();
        piece.relocate(dst);
        Some(TrialMove {
            roster,
            slot,
            origin,
            committed: false,
        })
    }

    /// The roster as it looks with the trial move applied.
    #[inline]
    pub fn roster(&self) -> &Roster {
        self.roster
    }

    /// Keep the move in place.
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        if let Some(piece) = self.roster[self.slot].as_mut() {
            piece.relocate(self.origin);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::piece::{roster_of, Piece};

    #[test]
    fn dropped_trial_restores_the_origin() {
        let mut roster = roster_of(&[Piece::new(PieceKind::Rook, Color::White, Square::new(1, 1))]);
        {
            let trial = TrialMove::begin(&mut roster, 0, Square::new(1, 5)).expect("slot 0 is live");
            assert_eq!(trial.roster()[0].map(|p| p.square()), Some(Square::new(1, 5)));
        }
        assert_eq!(roster[0].map(|p| p.square()), Some(Square::new(1, 1)));
    }

    #[test]
    fn committed_trial_keeps_the_move() {
        let mut roster = roster_of(&[Piece::new(PieceKind::Rook, Color::White, Square::new(1, 1))]);
        let trial = TrialMove::begin(&mut roster, 0, Square::new(1, 5)).expect("slot 0 is live");
        trial.commit();
        assert_eq!(roster[0].map(|p| p.square()), Some(Square::new(1, 5)));
    }

    #[test]
    fn vacant_slot_has_no_trial() {
        let mut roster = roster_of(&[]);
        assert!(TrialMove::begin(&mut roster, 3, Square::new(1, 5)).is_none());
    }
}
