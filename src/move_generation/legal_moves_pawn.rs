use crate::game_state::chess_types::*;
use crate::game_state::relative_state::RelativeState;

/// Pawn candidates from `from`: single push, double push from row 1, then
/// the two diagonal captures (right before left).
pub fn generate_pawn_moves(state: &RelativeState, from: Square, out: &mut Vec<Move>) {
    // A pawn can only sit on row 0 in a hand-built position; it never pushes.
    if from.y >= 1 {
        if let Some(one) = from.offset(0, 1) {
            if state.piece_at(one) == EMPTY {
                out.push(Move::new(from, one));
                if from.y == 1 {
                    if let Some(two) = from.offset(0, 2) {
                        if state.piece_at(two) == EMPTY {
                            out.push(Move::new(from, two));
                        }
                    }
                }
            }
        }
    }

    for dx in [1, -1] {
        if let Some(target) = from.offset(dx, 1) {
            if state.piece_at(target) < EMPTY {
                out.push(Move::new(from, target));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::*;
    use crate::game_state::relative_state::RelativeState;

    fn targets(state: &RelativeState, from: Square) -> Vec<Square> {
        let mut out = Vec::new();
        generate_pawn_moves(state, from, &mut out);
        out.into_iter().map(|mv| mv.to).collect()
    }

    #[test]
    fn double_push_only_from_second_row() {
        let mut state = RelativeState::empty();
        state.set(Square::new(2, 1), PAWN);
        state.set(Square::new(5, 3), PAWN);
        assert_eq!(
            targets(&state, Square::new(2, 1)),
            vec![Square::new(2, 2), Square::new(2, 3)]
        );
        assert_eq!(targets(&state, Square::new(5, 3)), vec![Square::new(5, 4)]);
    }

    #[test]
    fn blocked_pawn_only_captures() {
        let mut state = RelativeState::empty();
        state.set(Square::new(4, 1), PAWN);
        state.set(Square::new(4, 2), -KNIGHT);
        state.set(Square::new(5, 2), -BISHOP);
        state.set(Square::new(3, 2), ROOK);
        assert_eq!(targets(&state, Square::new(4, 1)), vec![Square::new(5, 2)]);
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        let mut state = RelativeState::empty();
        state.set(Square::new(0, 1), PAWN);
        state.set(Square::new(0, 3), -PAWN);
        assert_eq!(targets(&state, Square::new(0, 1)), vec![Square::new(0, 2)]);
    }

    #[test]
    fn back_row_pawn_does_not_push() {
        let mut state = RelativeState::empty();
        state.set(Square::new(3, 0), PAWN);
        state.set(Square::new(2, 1), -ROOK);
        assert_eq!(targets(&state, Square::new(3, 0)), vec![Square::new(2, 1)]);
    }
}
