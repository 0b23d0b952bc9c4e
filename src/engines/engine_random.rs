//! Random-move chooser.
//!
//! Selects uniformly from legal moves and is used for console auto-replies,
//! randomized invariant tests and low-strength play.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Square;
use crate::game_state::game_state::Game;

/// Pick one of the side to move's legal moves with `rng`.
pub fn pick_random_move<R: Rng + ?Sized>(game: &Game, rng: &mut R) -> Option<(Square, Square)> {
    game.legal_moves().as_slice().choose(rng).copied()
}

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible move sequence for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Duel Chess Random"
    }

    fn choose_move(&mut self, game: &Game) -> Option<(Square, Square)> {
        pick_random_move(game, &mut self.rng)
    }
}
