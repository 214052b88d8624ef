//! One-ply greedy agent.
//!
//! Scores every legal move with the general heuristic and plays one of the
//! best at random.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::engines::engine_trait::Engine;
use crate::game_state::absolute_board::{AbsoluteBoard, GameMove, PlayerColor};
use crate::game_state::chess_types::Move;
use crate::game_state::relative_state::{get_game_move, RelativeState};
use crate::move_generation::legal_move_generator::get_all_moves;
use crate::search::board_scoring::GeneralScorer;

pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Passant Greedy"
    }

    fn choose_move(
        &mut self,
        board: &AbsoluteBoard,
        color: PlayerColor,
        _time_up: &dyn Fn() -> bool,
    ) -> GameMove {
        let state = RelativeState::from_absolute(board, color);
        let moves = get_all_moves(&state, true, Some(&GeneralScorer));

        let Some(best_value) = moves.iter().map(|mv| mv.value).max() else {
            return GameMove::stalemate();
        };
        let best: Vec<&Move> = moves.iter().filter(|mv| mv.value == best_value).collect();
        debug!(
            legal = moves.len(),
            tied = best.len(),
            value = best_value,
            "greedy candidates"
        );

        match best.choose(&mut self.rng) {
            Some(mv) => get_game_move(mv, color),
            None => GameMove::stalemate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GreedyEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::absolute_board::{AbsoluteBoard, PlayerColor};
    use crate::game_state::chess_types::{MoveFlag, Square};
    use crate::utils::fen_parser::parse_placement;

    #[test]
    fn grabs_a_free_queen() {
        // White rook on a4 can take the undefended black queen on f4.
        let board = parse_placement("7k/8/8/8/R4q2/8/8/K7").expect("placement should parse");
        let mut engine = GreedyEngine::with_seed(3);
        let chosen = engine.choose_move(&board, PlayerColor::White, &|| false);
        assert_eq!(chosen.from, Some(Square::new(0, 4)));
        assert_eq!(chosen.to, Some(Square::new(5, 4)));
    }

    #[test]
    fn same_seed_same_choice() {
        let board = AbsoluteBoard::standard();
        let mut first = GreedyEngine::with_seed(11);
        let mut second = GreedyEngine::with_seed(11);
        for _ in 0..5 {
            assert_eq!(
                first.choose_move(&board, PlayerColor::Black, &|| false),
                second.choose_move(&board, PlayerColor::Black, &|| false)
            );
        }
    }

    #[test]
    fn chosen_moves_are_legal() {
        let board = AbsoluteBoard::standard();
        let mut engine = GreedyEngine::with_seed(5);
        for _ in 0..10 {
            let chosen = engine.choose_move(&board, PlayerColor::White, &|| false);
            assert_eq!(engine.is_valid_move(&board, &chosen, PlayerColor::White), Ok(()));
        }
    }

    #[test]
    fn no_moves_means_stalemate() {
        let board = parse_placement("k7/2Q5/8/8/8/8/8/7K").expect("placement should parse");
        let mut engine = GreedyEngine::with_seed(0);
        let chosen = engine.choose_move(&board, PlayerColor::Black, &|| false);
        assert_eq!(chosen.flag, MoveFlag::Stalemate);
    }
}
