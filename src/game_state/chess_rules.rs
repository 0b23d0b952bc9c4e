//! Canonical chess-rule constants.
//!
//! Starting layout, roster slot assignments and the standard starting FEN.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Fixed roster capacity per side.
pub const ROSTER_SLOTS: usize = 16;

/// Slot of the rook that starts on the a-file.
pub const QUEENSIDE_ROOK_SLOT: usize = 0;
/// Slot of the rook that starts on the h-file.
pub const KINGSIDE_ROOK_SLOT: usize = 1;
/// The king always lives in the last slot.
pub const KING_SLOT: usize = 15;

/// Back-rank order for files a..h.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// File the king starts on.
pub const KING_HOME_FILE: i8 = 5;
