//! Legal move enumeration.
//!
//! A move is legal exactly when `Game::submit_move` would apply it, so the
//! generator asks the mover's own vetting path instead of keeping a second
//! copy of the rules. Candidates are probed on a scratch clone of the mover's
//! side; the probe never keeps a move.

use crate::game_state::chess_types::{MoveOutcome, Square};
use crate::game_state::game_state::{Game, MoveRecord};
use crate::game_state::piece::Piece;

/// A legal move together with the position it leads to.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub src: Square,
    pub dst: Square,
    pub record: MoveRecord,
    pub game_after_move: Game,
}

/// Every `(src, dst)` the side to move may play, in roster-then-board order.
pub fn generate_legal_moves(game: &Game) -> Vec<(Square, Square)> {
    let mover = game.side(game.side_to_move());
    let enemy = game.side(game.side_to_move().opposite()).roster();
    let sources: Vec<Square> = mover.pieces().map(Piece::square).collect();

    let mut scratch = mover.clone();
    let mut moves = Vec::new();
    for src in sources {
        for dst in Square::all() {
            if scratch.probe_move(dst, src, enemy).is_some() {
                moves.push((src, dst));
            }
        }
    }
    moves
}

/// Apply every legal move to a copy of `game`.
pub fn generate_successors(game: &Game) -> Vec<GeneratedMove> {
    generate_legal_moves(game)
        .into_iter()
        .filter_map(|(src, dst)| {
            let mut after = game.clone();
            if after.submit_move(src, dst) != MoveOutcome::Applied {
                return None;
            }
            let record = *after.last_move()?;
            Some(GeneratedMove {
                src,
                dst,
                record,
                game_after_move: after,
            })
        })
        .collect()
}
