//! Line-oriented console front-end and command loop.
//!
//! Reads one command per line, keeps the current game, and answers on the
//! given writer. Moves are typed in long algebraic form (`e2e4`).

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::console::console_config::ConsoleConfig;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::{MoveOutcome, Square};
use crate::game_state::game_state::Game;
use crate::utils::long_algebraic::{move_to_long_algebraic, parse_long_algebraic};
use crate::utils::pgn::write_pgn;
use crate::utils::render_game_state::render_game_state;

const HELP_TEXT: &str = "\
commands:
  e2e4                 play a move for the side to move (promotion is always to a queen)
  board                show the board
  fen                  print the current position as FEN
  position startpos    reset to the starting position
  position fen <fen>   set up a position
  score                material balance, white minus black
  check                whether the side to move is in check
  moves                list legal moves
  random               play a random legal move
  pgn                  print the game so far as PGN
  new                  start a new game
  help                 show this text
  quit                 leave";

pub fn run_stdio_loop(config: ConsoleConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut console = ConsoleState::new(config);

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = console.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct ConsoleState {
    game: Game,
    engine: Box<dyn Engine>,
    config: ConsoleConfig,
}

impl ConsoleState {
    pub fn new(config: ConsoleConfig) -> Self {
        let engine: Box<dyn Engine> = match config.seed {
            Some(seed) => Box::new(RandomEngine::seeded(seed)),
            None => Box::new(RandomEngine::new()),
        };
        Self {
            game: Game::new_game(),
            engine,
            config,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Handle one input line. Returns `true` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "board" => writeln!(out, "{}", render_game_state(&self.game))?,
            "fen" => writeln!(out, "{}", self.game.to_fen())?,
            "position" => {
                if let Err(err) = self.handle_position(trimmed) {
                    writeln!(out, "error: {err}")?;
                }
            }
            "score" => writeln!(out, "{}", self.game.material_score())?,
            "check" => {
                let mover = self.game.side_to_move();
                let state = if self.game.king_in_check(mover) {
                    "in check"
                } else {
                    "not in check"
                };
                writeln!(out, "{mover} {state}")?;
            }
            "moves" => {
                let listed: Vec<String> = self
                    .game
                    .legal_moves()
                    .into_iter()
                    .map(|(src, dst)| format!("{src}{dst}"))
                    .collect();
                writeln!(out, "{}", listed.join(" "))?;
            }
            "random" => self.play_engine_move(out)?,
            "pgn" => write!(out, "{}", write_pgn(&self.game))?,
            "new" => {
                self.game = Game::new_game();
                self.engine.new_game();
                writeln!(out, "new game, white to move")?;
            }
            "help" => writeln!(out, "{HELP_TEXT}")?,
            "quit" => return Ok(true),
            _ => match parse_long_algebraic(cmd) {
                Ok((src, dst)) => self.play_human_move(cmd, src, dst, out)?,
                Err(_) => writeln!(out, "error: {}", ChessErrors::UnknownCommand(cmd.to_owned()))?,
            },
        }
        Ok(false)
    }

    fn handle_position(&mut self, line: &str) -> ChessResult<()> {
        let mut tokens = line.split_whitespace();
        let _ = tokens.next(); // "position"
        let game = match tokens.next() {
            Some("startpos") => Game::new_game(),
            Some("fen") => {
                let fen = tokens.collect::<Vec<_>>().join(" ");
                if fen.is_empty() {
                    return Err(ChessErrors::MissingFenField("board layout"));
                }
                Game::from_fen(&fen)?
            }
            Some(other) => return Err(ChessErrors::UnknownCommand(format!("position {other}"))),
            None => return Err(ChessErrors::UnknownCommand("position".to_owned())),
        };
        self.game = game;
        self.engine.new_game();
        Ok(())
    }

    fn play_human_move(
        &mut self,
        text: &str,
        src: Square,
        dst: Square,
        out: &mut impl Write,
    ) -> io::Result<()> {
        if self.game.submit_move(src, dst) == MoveOutcome::Rejected {
            return writeln!(out, "rejected {text}");
        }
        self.report_last_move(out)?;

        if self.config.auto_reply {
            self.play_engine_move(out)?;
        }
        Ok(())
    }

    fn play_engine_move(&mut self, out: &mut impl Write) -> io::Result<()> {
        let Some((src, dst)) = self.engine.choose_move(&self.game) else {
            return writeln!(out, "no legal moves for {}", self.game.side_to_move());
        };
        if self.game.submit_move(src, dst) == MoveOutcome::Rejected {
            warn!(engine = self.engine.name(), from = %src, to = %dst, "engine proposed a refused move");
            return writeln!(out, "rejected {src}{dst}");
        }
        self.report_last_move(out)
    }

    fn report_last_move(&self, out: &mut impl Write) -> io::Result<()> {
        if let Some(record) = self.game.last_move() {
            let suffix = if record.gives_check { "+" } else { "" };
            writeln!(out, "{} played {}{suffix}", record.mover, move_to_long_algebraic(record))?;
        }
        if self.config.show_board {
            writeln!(out, "{}", render_game_state(&self.game))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::Color;

    fn quiet() -> ConsoleConfig {
        ConsoleConfig {
            show_board: false,
            auto_reply: false,
            seed: Some(3),
        }
    }

    fn run(state: &mut ConsoleState, line: &str) -> String {
        let mut out = Vec::new();
        state.handle_command(line, &mut out).expect("writing to a Vec cannot fail");
        String::from_utf8(out).expect("console output is UTF-8")
    }

    #[test]
    fn moves_are_applied_and_reported() {
        let mut state = ConsoleState::new(quiet());
        assert_eq!(run(&mut state, "e2e4"), "white played e2e4\n");
        assert_eq!(run(&mut state, "e7e6"), "black played e7e6\n");
        assert_eq!(run(&mut state, "e4e6"), "rejected e4e6\n");
        assert_eq!(state.game().history().len(), 2);
    }

    #[test]
    fn position_fen_replaces_the_game() {
        let mut state = ConsoleState::new(quiet());
        run(&mut state, "e2e4");
        run(&mut state, "position fen 4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
        assert_eq!(run(&mut state, "fen"), "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1\n");

        run(&mut state, "position startpos");
        assert_eq!(state.game().to_fen(), STARTING_POSITION_FEN);
        assert!(run(&mut state, "position fen 8/8 w").starts_with("error: "));
    }

    #[test]
    fn auto_reply_answers_every_accepted_move() {
        let mut state = ConsoleState::new(ConsoleConfig {
            auto_reply: true,
            ..quiet()
        });
        let output = run(&mut state, "d2d4");
        assert!(output.starts_with("white played d2d4\nblack played "));
        assert_eq!(state.game().side_to_move(), Color::White);
    }

    #[test]
    fn unknown_commands_are_reported_and_quit_stops() {
        let mut state = ConsoleState::new(quiet());
        assert_eq!(run(&mut state, "castle"), "error: unknown command: \"castle\"\n");
        assert_eq!(run(&mut state, "score"), "0\n");
        assert_eq!(run(&mut state, "check"), "white not in check\n");

        let mut out = Vec::new();
        assert!(state.handle_command("quit", &mut out).expect("no io error"));
    }
}
