//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for the console, tests and
//! diagnostics in text environments.

use crate::game_state::{chess_types::*, game_state::Game};

/// Render the board to a Unicode string for terminal output, rank 8 on top.
pub fn render_game_state(game: &Game) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (1..=8i8).rev() {
        let label = char::from(b'0' + rank as u8);
        out.push(label);
        out.push(' ');

        for file in 1..=8i8 {
            match game.piece_at(Square::new(file, rank)) {
                Some(view) => out.push(piece_to_unicode(view.color, view.kind)),
                None => out.push('·'),
            }

            if file < 8 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
