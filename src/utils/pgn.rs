//! PGN read/write utilities for game history interchange.
//!
//! Serializes a game's move history and headers to PGN text (moves in long
//! algebraic form) and replays PGN text back into a `Game`.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{Color, MoveOutcome};
use crate::game_state::game_state::Game;
use crate::utils::long_algebraic::{move_to_long_algebraic, parse_long_algebraic};

/// A replayed PGN game.
#[derive(Debug, Clone)]
pub struct PgnGame {
    pub headers: BTreeMap<String, String>,
    pub game: Game,
    pub result: String,
}

/// Seven-tag roster for `game`, dated `date`, plus `SetUp`/`FEN` when the
/// game did not start from the standard position.
pub fn default_headers(game: &Game, date: NaiveDate) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Duel Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), date.format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), "*".to_owned());

    if game.start_fen() != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), game.start_fen().to_owned());
    }

    headers
}

/// PGN for `game`, dated today in local time.
pub fn write_pgn(game: &Game) -> String {
    write_pgn_dated(game, Local::now().date_naive())
}

pub fn write_pgn_dated(game: &Game, date: NaiveDate) -> String {
    write_pgn_with_headers(game, &default_headers(game, date))
}

pub fn write_pgn_with_headers(game: &Game, headers: &BTreeMap<String, String>) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let (_, start_fullmove) = game.start_clocks();
    let mut movetext_parts = Vec::<String>::with_capacity(game.history().len() + 1);
    for (ply, record) in game.history().iter().enumerate() {
        let mut lan = move_to_long_algebraic(record);
        if record.gives_check {
            lan.push('+');
        }

        let number = usize::from(start_fullmove) + ply_offset(game, ply) / 2;
        if ply_offset(game, ply) % 2 == 0 {
            movetext_parts.push(format!("{number}. {lan}"));
        } else if ply == 0 {
            movetext_parts.push(format!("{number}... {lan}"));
        } else {
            movetext_parts.push(lan);
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

/// Ply index counted from a White move, so a Black-to-move start is odd.
fn ply_offset(game: &Game, ply: usize) -> usize {
    match game.history().first() {
        Some(first) if first.mover == Color::Black => ply + 1,
        _ => ply,
    }
}

pub fn read_pgn(pgn: &str) -> ChessResult<PgnGame> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut movetext_lines = Vec::<String>::new();

    for line in pgn.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            let (k, v) = parse_header_line(trimmed)?;
            headers.insert(k, v);
        } else {
            movetext_lines.push(trimmed.to_owned());
        }
    }

    let mut game = if headers.get("SetUp").map(|x| x.as_str()) == Some("1") {
        let fen = headers
            .get("FEN")
            .ok_or(ChessErrors::MissingFenField("PGN FEN header"))?;
        Game::from_fen(fen)?
    } else {
        Game::new_game()
    };

    let mut result = "*".to_owned();
    let movetext = strip_pgn_comments_and_variations(&movetext_lines.join(" "));
    for token in movetext.split_whitespace() {
        if is_move_number_token(token) {
            continue;
        }

        let cleaned = trim_annotation_suffix(token);
        if is_result_token(cleaned) {
            result = cleaned.to_owned();
            break;
        }

        let (from, to) = parse_long_algebraic(cleaned)?;
        if game.submit_move(from, to) != MoveOutcome::Applied {
            return Err(ChessErrors::RecordedMoveRejected {
                ply: game.history().len(),
                text: cleaned.to_owned(),
            });
        }
    }

    if let Some(header_result) = headers.get("Result") {
        result = normalize_result(header_result).to_owned();
    }

    Ok(PgnGame {
        headers,
        game,
        result,
    })
}

fn parse_header_line(line: &str) -> ChessResult<(String, String)> {
    let invalid = || ChessErrors::InvalidPgnHeader(line.to_owned());

    let inner = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(invalid)?;
    let (key, value_raw) = inner.split_once(' ').ok_or_else(invalid)?;
    let value = value_raw
        .trim()
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(invalid)?;

    Ok((key.trim().to_owned(), value.replace("\\\"", "\"")))
}

fn strip_pgn_comments_and_variations(text: &str) -> String {
    let mut out = String::new();
    let mut brace_depth = 0usize;
    let mut paren_depth = 0usize;

    for ch in text.chars() {
        match ch {
            '{' => brace_depth = brace_depth.saturating_add(1),
            '}' => brace_depth = brace_depth.saturating_sub(1),
            '(' => paren_depth = paren_depth.saturating_add(1),
            ')' => paren_depth = paren_depth.saturating_sub(1),
            _ if brace_depth == 0 && paren_depth == 0 => out.push(ch),
            _ => {}
        }
    }

    out
}

fn is_move_number_token(token: &str) -> bool {
    let digits = token.trim_end_matches('.');
    digits.len() < token.len() && !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn trim_annotation_suffix(token: &str) -> &str {
    token.trim_end_matches(|c: char| matches!(c, '+' | '#' | '!' | '?'))
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
