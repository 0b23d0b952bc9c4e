//! Coordinate move notation (`e2e4`, `a7a8q`).
//!
//! Promotion is always to a queen, so the only accepted suffix is `q`; it is
//! optional on input and written on output whenever the move promoted.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::{MoveOutcome, Square};
use crate::game_state::game_state::{Game, MoveRecord};

/// Parse `e2e4` / `e7e8q` into `(src, dst)`.
pub fn parse_long_algebraic(long_algebraic: &str) -> ChessResult<(Square, Square)> {
    let invalid = || ChessErrors::InvalidLongAlgebraic(long_algebraic.to_owned());

    let text = long_algebraic.trim();
    let squares = match text.len() {
        4 => text,
        5 if text.ends_with(['q', 'Q']) => &text[..4],
        _ => return Err(invalid()),
    };
    if !squares.is_ascii() {
        return Err(invalid());
    }

    let from = squares[0..2].parse::<Square>().map_err(|_| invalid())?;
    let to = squares[2..4].parse::<Square>().map_err(|_| invalid())?;
    Ok((from, to))
}

pub fn move_to_long_algebraic(record: &MoveRecord) -> String {
    let mut out = format!("{}{}", record.from, record.to);
    if record.promoted {
        out.push('q');
    }
    out
}

/// Parse and submit one move. A well-formed but refused move is `Ok(Rejected)`.
pub fn submit_long_algebraic(game: &mut Game, long_algebraic: &str) -> ChessResult<MoveOutcome> {
    let (from, to) = parse_long_algebraic(long_algebraic)?;
    Ok(game.submit_move(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_promotion_moves() {
        assert_eq!(
            parse_long_algebraic("e2e4"),
            Ok((Square::new(5, 2), Square::new(5, 4)))
        );
        assert_eq!(
            parse_long_algebraic("a7a8q"),
            Ok((Square::new(1, 7), Square::new(1, 8)))
        );
    }

    #[test]
    fn rejects_malformed_text() {
        for bad in ["", "e2", "e2e9", "e2e4n", "i2e4", "e2e4q5", "é2e4"] {
            assert!(
                matches!(parse_long_algebraic(bad), Err(ChessErrors::InvalidLongAlgebraic(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn promotion_moves_are_written_with_a_q_suffix() {
        let mut game = Game::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("valid FEN");
        assert_eq!(submit_long_algebraic(&mut game, "a7a8"), Ok(MoveOutcome::Applied));
        let record = game.last_move().copied().expect("one move played");
        assert_eq!(move_to_long_algebraic(&record), "a7a8q");
    }

    #[test]
    fn refused_moves_are_not_errors() {
        let mut game = Game::new_game();
        assert_eq!(submit_long_algebraic(&mut game, "e2e5"), Ok(MoveOutcome::Rejected));
    }
}
