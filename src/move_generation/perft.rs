//! Leaf-node counting over friend-relative states.
//!
//! Each ply hands the position to the other side with `enemy_state`, so the
//! counts exercise orientation flips as well as move generation.

use crate::game_state::chess_types::Move;
use crate::game_state::relative_state::RelativeState;
use crate::move_generation::legal_move_generator::get_all_moves;

pub fn perft(state: &RelativeState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = get_all_moves(state, false, None);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|mv| perft(&state.apply_move(mv).enemy_state(), depth - 1))
        .sum()
}

/// Per-root-move leaf counts, in enumeration order.
pub fn perft_divide(state: &RelativeState, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    get_all_moves(state, false, None)
        .into_iter()
        .map(|mv| {
            let nodes = perft(&state.apply_move(&mv).enemy_state(), depth - 1);
            (mv, nodes)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide};
    use crate::game_state::absolute_board::{AbsoluteBoard, PlayerColor};
    use crate::game_state::relative_state::RelativeState;

    #[test]
    fn starting_position_perft() {
        let state = RelativeState::from_absolute(&AbsoluteBoard::standard(), PlayerColor::White);
        assert_eq!(perft(&state, 1), 20);
        assert_eq!(perft(&state, 2), 400);
        assert_eq!(perft(&state, 3), 8902);
    }

    #[test]
    fn divide_sums_to_perft() {
        let state = RelativeState::from_absolute(&AbsoluteBoard::standard(), PlayerColor::Black);
        let divided = perft_divide(&state, 2);
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<u64>(), 400);
    }
}
