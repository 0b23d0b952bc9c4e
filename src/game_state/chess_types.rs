//! Shared value types for the rules engine.
//!
//! Colors, piece kinds, 1-based board coordinates and the outcome of a
//! submitted move. Everything here is `Copy` plain data.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;

/// Side to move / owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank holding the back-row pieces at the start of the game.
    #[inline]
    pub const fn home_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 8,
        }
    }

    /// Rank the pawns start on; the only rank a double step is allowed from.
    #[inline]
    pub const fn pawn_rank(self) -> i8 {
        match self {
            Color::White => 2,
            Color::Black => 7,
        }
    }

    /// Rank on which a pawn promotes.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Color::White => 8,
            Color::Black => 1,
        }
    }

    /// Rank delta of a pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

/// Piece kind without any per-piece state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Points used for the material score. The king is never captured and counts 0.
    #[inline]
    pub const fn material_value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    /// Lowercase FEN letter.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

/// Which wing a castle went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// File of the rook's home corner.
    #[inline]
    pub const fn corner_file(self) -> i8 {
        match self {
            CastleSide::Kingside => 8,
            CastleSide::Queenside => 1,
        }
    }

    /// File delta the rook travels when the castle is completed.
    #[inline]
    pub const fn rook_shift(self) -> i8 {
        match self {
            CastleSide::Kingside => -2,
            CastleSide::Queenside => 3,
        }
    }
}

/// Result of `submit_move` / `attempt_move`. A rejection is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Applied,
    Rejected,
}

impl MoveOutcome {
    #[inline]
    pub const fn is_applied(self) -> bool {
        matches!(self, MoveOutcome::Applied)
    }
}

/// A 1-based `(file, rank)` coordinate.
///
/// Construction is unchecked so that malformed caller input can reach the
/// engine and be rejected there; use [`Square::is_on_board`] to test bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: i8,
    pub rank: i8,
}

impl Square {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Square { file, rank }
    }

    /// Bounds-checked constructor.
    #[inline]
    pub const fn checked(file: i8, rank: i8) -> Option<Self> {
        let square = Square::new(file, rank);
        if square.is_on_board() {
            Some(square)
        } else {
            None
        }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.file >= 1 && self.file <= 8 && self.rank >= 1 && self.rank <= 8
    }

    /// Square shifted by `(d_file, d_rank)`, or `None` when it falls off the board.
    #[inline]
    pub const fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        Square::checked(self.file + d_file, self.rank + d_rank)
    }

    /// Every square of the board, rank 1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=8).flat_map(|rank| (1..=8).map(move |file| Square::new(file, rank)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({},{})", self.file, self.rank);
        }
        let file = char::from(b'a' + (self.file - 1) as u8);
        let rank = char::from(b'0' + self.rank as u8);
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessErrors::InvalidSquareText(s.to_owned()));
        }
        let file = match bytes[0] {
            b @ b'a'..=b'h' => (b - b'a' + 1) as i8,
            _ => return Err(ChessErrors::InvalidSquareText(s.to_owned())),
        };
        let rank = match bytes[1] {
            b @ b'1'..=b'8' => (b - b'0') as i8,
            _ => return Err(ChessErrors::InvalidSquareText(s.to_owned())),
        };
        Ok(Square::new(file, rank))
    }
}

/// Read-only description of a live piece for display layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceView {
    pub color: Color,
    pub kind: PieceKind,
    pub square: Square,
}
