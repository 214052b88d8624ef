use crate::game_state::chess_types::*;
use crate::game_state::relative_state::RelativeState;

/// Orthogonal steps first, then diagonals.
const KING_STEPS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// King candidates. Stepping next to the enemy king is left to the legality
/// filter.
pub fn generate_king_moves(state: &RelativeState, from: Square, out: &mut Vec<Move>) {
    for (dx, dy) in KING_STEPS {
        if let Some(to) = from.offset(dx, dy) {
            if state.piece_at(to) <= EMPTY {
                out.push(Move::new(from, to));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::*;
    use crate::game_state::relative_state::RelativeState;

    #[test]
    fn king_steps_in_fixed_order() {
        let mut state = RelativeState::empty();
        state.set(Square::new(0, 0), KING);
        state.set(Square::new(1, 0), ROOK);
        let mut out = Vec::new();
        generate_king_moves(&state, Square::new(0, 0), &mut out);
        let to: Vec<Square> = out.iter().map(|mv| mv.to).collect();
        assert_eq!(to, vec![Square::new(0, 1), Square::new(1, 1)]);
    }
}
