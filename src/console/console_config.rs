//! Console settings read from the environment.

use std::env;

use crate::chess_errors::{ChessErrors, ChessResult};

pub const SHOW_BOARD_VAR: &str = "DUEL_CHESS_SHOW_BOARD";
pub const AUTO_REPLY_VAR: &str = "DUEL_CHESS_AUTO_REPLY";
pub const SEED_VAR: &str = "DUEL_CHESS_SEED";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Print the board after every accepted move.
    pub show_board: bool,
    /// Answer each accepted move with a random legal reply.
    pub auto_reply: bool,
    /// Seed for the reply generator; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            show_board: true,
            auto_reply: false,
            seed: None,
        }
    }
}

impl ConsoleConfig {
    pub fn from_env() -> ChessResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> ChessResult<Self> {
        let mut config = Self::default();
        if let Some(value) = lookup(SHOW_BOARD_VAR) {
            config.show_board = parse_flag(SHOW_BOARD_VAR, &value)?;
        }
        if let Some(value) = lookup(AUTO_REPLY_VAR) {
            config.auto_reply = parse_flag(AUTO_REPLY_VAR, &value)?;
        }
        if let Some(value) = lookup(SEED_VAR) {
            let seed = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ChessErrors::InvalidConfigValue {
                    key: SEED_VAR,
                    value: value.clone(),
                })?;
            config.seed = Some(seed);
        }
        Ok(config)
    }
}

fn parse_flag(key: &'static str, value: &str) -> ChessResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ChessErrors::InvalidConfigValue {
            key,
            value: value.to_owned(),
        }),
    }
}
