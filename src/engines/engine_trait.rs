//! Move-chooser abstraction used by the console.
//!
//! A chooser looks at the current game and proposes one `(src, dst)` for the
//! side to move, or nothing when that side has no legal move.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::Game;

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, game: &Game) -> Option<(Square, Square)>;
}
