//! Leaf counting by replaying `Game::submit_move` on clones, so every node is
//! a position the rules engine itself accepted.

use crate::game_state::game_state::{Game, MoveRecord};
use crate::move_generation::legal_move_generator::{generate_successors, GeneratedMove};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
}

impl PerftCounts {
    fn tally(&mut self, record: &MoveRecord) {
        self.nodes += 1;
        if record.captured.is_some() {
            self.captures += 1;
        }
        if record.castled.is_some() {
            self.castles += 1;
        }
        if record.promoted {
            self.promotions += 1;
        }
        if record.gives_check {
            self.checks += 1;
        }
    }
}

/// Count leaf positions `depth` plies below `game`, with per-kind tallies of
/// the moves that reach them.
pub fn perft(game: &Game, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generate_successors(game) {
        perft_recurse(&mv, depth, 1, &mut total);
    }
    total
}

fn perft_recurse(mv: &GeneratedMove, search_depth: u8, current_depth: u8, counts: &mut PerftCounts) {
    if current_depth == search_depth {
        counts.tally(&mv.record);
        return;
    }

    for child in generate_successors(&mv.game_after_move) {
        perft_recurse(&child, search_depth, current_depth + 1, counts);
    }
}

/// Per-root-move node counts, for diffing against a reference engine.
pub fn perft_divide(game: &Game, depth: u8) -> Vec<(String, usize)> {
    if depth == 0 {
        return Vec::new();
    }
    generate_successors(game)
        .into_iter()
        .map(|mv| {
            let nodes = perft(&mv.game_after_move, depth - 1).nodes;
            (format!("{}{}", mv.src, mv.dst), nodes)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_zero_is_one_node() {
        assert_eq!(perft(&Game::new_game(), 0).nodes, 1);
    }

    #[test]
    fn start_position_shallow_counts() {
        let game = Game::new_game();
        assert_eq!(perft(&game, 1).nodes, 20);

        let two = perft(&game, 2);
        assert_eq!(two.nodes, 400);
        assert_eq!(two.captures, 0);
        assert_eq!(two.checks, 0);
    }

    #[test]
    fn divide_sums_to_the_total() {
        let game = Game::new_game();
        let divided = perft_divide(&game, 2);
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<usize>(), 400);
        assert!(divided.iter().all(|(_, n)| *n == 20));
    }

    #[test]
    fn castles_and_promotions_are_tallied() {
        let game = Game::from_fen("4k3/P7/8/8/8/8/8/1N2K2R w K - 0 1").expect("valid FEN");
        assert_eq!(
            perft(&game, 1),
            PerftCounts {
                nodes: 19,
                captures: 0,
                castles: 1,
                promotions: 1,
                checks: 2,
            }
        );
    }
}
