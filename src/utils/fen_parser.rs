//! FEN-to-Game parser.
//!
//! Builds both rosters from a Forsyth-Edwards Notation string. Castling
//! letters only decide whether each king counts as unmoved; the en-passant
//! field is validated and then ignored since the rules have no en passant.

use tracing::info;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::KING_HOME_FILE;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::Game;
use crate::game_state::piece::Piece;
use crate::game_state::side::Side;

pub fn parse_fen(fen: &str) -> ChessResult<Game> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(ChessErrors::MissingFenField("board layout"))?;
    let side_part = parts.next().ok_or(ChessErrors::MissingFenField("side-to-move"))?;
    let castling_part = parts.next().ok_or(ChessErrors::MissingFenField("castling rights"))?;
    let en_passant_part = parts.next().ok_or(ChessErrors::MissingFenField("en-passant square"))?;
    let halfmove_part = parts.next().ok_or(ChessErrors::MissingFenField("halfmove clock"))?;
    let fullmove_part = parts.next().ok_or(ChessErrors::MissingFenField("fullmove number"))?;

    if parts.next().is_some() {
        return Err(ChessErrors::ExtraFenFields);
    }

    let placed = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let unmoved = parse_castling_rights(castling_part)?;
    parse_en_passant_square(en_passant_part)?;
    let halfmove = parse_counter("halfmove clock", halfmove_part)?;
    let fullmove = parse_counter("fullmove number", fullmove_part)?;

    let white = build_side(Color::White, &placed, unmoved[Color::White.index()])?;
    let black = build_side(Color::Black, &placed, unmoved[Color::Black.index()])?;

    let mut game = Game::from_sides(white, black, side_to_move)?;
    game.set_start_clocks(halfmove, fullmove.max(1));

    info!(fen = %game.to_fen(), "game set up from FEN");
    Ok(game)
}

fn parse_board(board_part: &str) -> ChessResult<Vec<(Color, PieceKind, Square)>> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFenBoard(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    let mut placed = Vec::new();
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 8 - fen_rank_idx as i8;
        let mut file = 1i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFenBoard(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as i8;
                if file > 9 {
                    return Err(ChessErrors::InvalidFenBoard(format!(
                        "rank {rank} has too many files"
                    )));
                }
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch).ok_or_else(|| ChessErrors::InvalidFenToken {
                field: "board layout",
                token: ch.to_string(),
            })?;

            if file > 8 {
                return Err(ChessErrors::InvalidFenBoard(format!(
                    "rank {rank} has too many files"
                )));
            }

            placed.push((color, kind, Square::new(file, rank)));
            file += 1;
        }

        if file != 9 {
            return Err(ChessErrors::InvalidFenBoard(format!(
                "rank {rank} does not sum to 8 files"
            )));
        }
    }

    Ok(placed)
}

fn build_side(
    color: Color,
    placed: &[(Color, PieceKind, Square)],
    castling_letters: bool,
) -> ChessResult<Side> {
    let home = Square::new(KING_HOME_FILE, color.home_rank());
    let pieces: Vec<Piece> = placed
        .iter()
        .filter(|(owner, _, _)| *owner == color)
        .map(|&(_, kind, square)| match kind {
            PieceKind::King => Piece::king(color, square, !(castling_letters && square == home)),
            _ => Piece::new(kind, color, square),
        })
        .collect();
    Side::from_pieces(color, &pieces)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(ChessErrors::InvalidFenToken {
            field: "side-to-move",
            token: side_part.to_owned(),
        }),
    }
}

/// Whether each color (by `Color::index`) has any castling letter.
fn parse_castling_rights(castling_part: &str) -> ChessResult<[bool; 2]> {
    let mut unmoved = [false; 2];
    if castling_part == "-" {
        return Ok(unmoved);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' | 'Q' => unmoved[Color::White.index()] = true,
            'k' | 'q' => unmoved[Color::Black.index()] = true,
            _ => {
                return Err(ChessErrors::InvalidFenToken {
                    field: "castling rights",
                    token: castling_part.to_owned(),
                })
            }
        }
    }

    Ok(unmoved)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    en_passant_part
        .parse::<Square>()
        .map(Some)
        .map_err(|_| ChessErrors::InvalidFenToken {
            field: "en-passant square",
            token: en_passant_part.to_owned(),
        })
}

fn parse_counter(field: &'static str, text: &str) -> ChessResult<u16> {
    text.parse::<u16>().map_err(|_| ChessErrors::InvalidFenToken {
        field,
        token: text.to_owned(),
    })
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let piece = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, piece))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::Game;
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let game = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&game));

        assert_eq!(game, Game::new_game());
        assert_eq!(game.start_clocks(), (0, 1));
    }

    #[test]
    fn kings_without_castling_letters_count_as_moved() {
        let game = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").expect("valid FEN");
        assert!(!game.side(Color::White).king().is_some_and(|k| k.can_castle()));

        let game = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").expect("valid FEN");
        assert!(game.side(Color::White).king().is_some_and(|k| k.can_castle()));
        assert!(game.side(Color::Black).king().is_some_and(|k| k.can_castle()));
    }

    #[test]
    fn malformed_fields_are_reported() {
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/4K3 w - -"),
            Err(ChessErrors::MissingFenField("halfmove clock"))
        );
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/4K3 x - - 0 1"),
            Err(ChessErrors::InvalidFenToken { field: "side-to-move", .. })
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(ChessErrors::InvalidFenBoard(_))
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(ChessErrors::KingCount { color: Color::Black, found: 0 })
        ));
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra"),
            Err(ChessErrors::ExtraFenFields)
        );
    }

    #[test]
    fn clocks_are_kept_from_the_fen() {
        let game = parse_fen("4k3/8/8/8/8/8/8/4K3 b - - 7 31").expect("valid FEN");
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.start_clocks(), (7, 31));
    }
}
