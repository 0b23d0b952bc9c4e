use crate::game_state::chess_rules::{KINGSIDE_ROOK_SLOT, QUEENSIDE_ROOK_SLOT};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::Game;
use crate::game_state::piece::Piece;

pub fn generate_fen(game: &Game) -> String {
    let board = generate_board_field(game);
    let side_to_move = match game.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(game);
    let (halfmove_clock, fullmove_number) = clocks(game);

    format!("{board} {side_to_move} {castling} - {halfmove_clock} {fullmove_number}")
}

fn generate_board_field(game: &Game) -> String {
    let mut out = String::new();

    for rank in (1..=8i8).rev() {
        let mut empty_count = 0u8;

        for file in 1..=8i8 {
            match game.piece_at(Square::new(file, rank)) {
                Some(view) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_fen_char(view.color, view.kind));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 1 {
            out.push('/');
        }
    }

    out
}

fn piece_fen_char(color: Color, kind: PieceKind) -> char {
    match color {
        Color::White => kind.letter().to_ascii_uppercase(),
        Color::Black => kind.letter(),
    }
}

/// `K`/`Q` are written for an unmoved king whose rook still stands on that
/// wing's corner.
fn generate_castling_field(game: &Game) -> String {
    let mut out = String::new();

    for color in [Color::White, Color::Black] {
        let side = game.side(color);
        if !side.king().is_some_and(Piece::can_castle) {
            continue;
        }
        for (slot, castle_side, letter) in [
            (KINGSIDE_ROOK_SLOT, CastleSide::Kingside, 'k'),
            (QUEENSIDE_ROOK_SLOT, CastleSide::Queenside, 'q'),
        ] {
            let corner = Square::new(castle_side.corner_file(), color.home_rank());
            let rook_home = side.roster()[slot]
                .is_some_and(|rook| rook.kind() == PieceKind::Rook && rook.is_on(corner));
            if rook_home {
                out.push(match color {
                    Color::White => letter.to_ascii_uppercase(),
                    Color::Black => letter,
                });
            }
        }
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}

/// Halfmove clock and fullmove number, continued from the starting FEN.
fn clocks(game: &Game) -> (u16, u16) {
    let (start_halfmove, start_fullmove) = game.start_clocks();
    let history = game.history();

    let halfmove = match history
        .iter()
        .rposition(|record| record.piece == PieceKind::Pawn || record.captured.is_some())
    {
        Some(reset) => history.len() - reset - 1,
        None => start_halfmove as usize + history.len(),
    };
    let black_moves = history
        .iter()
        .filter(|record| record.mover == Color::Black)
        .count();

    (
        u16::try_from(halfmove).unwrap_or(u16::MAX),
        start_fullmove.saturating_add(u16::try_from(black_moves).unwrap_or(u16::MAX)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    #[test]
    fn starting_position_fen_round_trips() {
        let game = Game::from_fen(STARTING_POSITION_FEN).expect("valid FEN");
        assert_eq!(generate_fen(&game), STARTING_POSITION_FEN);
    }

    #[test]
    fn clocks_follow_the_history() {
        let mut game = Game::new_game();
        assert!(game.submit_move(Square::new(7, 1), Square::new(6, 3)).is_applied());
        assert!(game.submit_move(Square::new(7, 8), Square::new(6, 6)).is_applied());
        assert!(game.submit_move(Square::new(5, 2), Square::new(5, 4)).is_applied());

        assert_eq!(
            generate_fen(&game),
            "rnbqkb1r/pppppppp/5n2/8/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 0 2"
        );
    }

    #[test]
    fn castling_letters_drop_when_the_king_moves() {
        let mut game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 10").expect("valid FEN");
        assert!(game.submit_move(Square::new(5, 1), Square::new(7, 1)).is_applied());
        assert_eq!(game.to_fen(), "r3k2r/8/8/8/8/8/8/R4RK1 b kq - 4 10");
    }
}
