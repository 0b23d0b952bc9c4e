//! Errors used at the text boundaries of the engine.
//!
//! Rule violations are never errors: a refused move is an ordinary
//! `MoveOutcome::Rejected`. `ChessErrors` covers the places where text enters
//! the crate (FEN, coordinate notation, PGN records, console input and
//! environment configuration) and the roster-construction checks behind them.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A square was not a file letter `a..h` followed by a rank digit `1..8`.
    #[error("invalid square text: {0:?}")]
    InvalidSquareText(String),

    /// A move was not written as `e2e4` or `e7e8q`.
    #[error("invalid long algebraic move: {0:?}")]
    InvalidLongAlgebraic(String),

    #[error("FEN is missing the {0} field")]
    MissingFenField(&'static str),

    #[error("FEN has extra trailing fields")]
    ExtraFenFields,

    /// The placement field did not describe an 8x8 board.
    #[error("invalid FEN board layout: {0}")]
    InvalidFenBoard(String),

    #[error("invalid FEN token {token:?} in the {field} field")]
    InvalidFenToken { field: &'static str, token: String },

    #[error("{color} has {found} kings; exactly one is required")]
    KingCount { color: Color, found: usize },

    #[error("{color} has {found} pieces; a roster holds at most 16")]
    RosterOverflow { color: Color, found: usize },

    /// A piece handed to a roster was off the board, shared a square or
    /// belonged to the other color.
    #[error("{color} piece on {square} cannot be placed: {reason}")]
    InvalidPlacement {
        color: Color,
        square: Square,
        reason: &'static str,
    },

    #[error("invalid PGN header line: {0:?}")]
    InvalidPgnHeader(String),

    /// Replaying a game record hit a move the rules refuse.
    #[error("recorded move {text:?} was rejected at ply {ply}")]
    RecordedMoveRejected { ply: usize, text: String },

    #[error("invalid value {value:?} for {key}")]
    InvalidConfigValue { key: &'static str, value: String },

    #[error("unknown command: {0:?}")]
    UnknownCommand(String),
}

pub type ChessResult<T> = Result<T, ChessErrors>;
