use crate::game_state::chess_types::*;
use crate::game_state::relative_state::RelativeState;
use crate::move_generation::attack_oracle::KNIGHT_JUMPS;

/// Knight candidates: every on-board jump not landing on a friend piece.
pub fn generate_knight_moves(state: &RelativeState, from: Square, out: &mut Vec<Move>) {
    for (dx, dy) in KNIGHT_JUMPS {
        if let Some(to) = from.offset(dx, dy) {
            if state.piece_at(to) <= EMPTY {
                out.push(Move::new(from, to));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::*;
    use crate::game_state::relative_state::RelativeState;

    #[test]
    fn corner_knight_has_two_jumps() {
        let mut state = RelativeState::empty();
        state.set(Square::new(0, 0), KNIGHT);
        let mut out = Vec::new();
        generate_knight_moves(&state, Square::new(0, 0), &mut out);
        let to: Vec<Square> = out.iter().map(|mv| mv.to).collect();
        assert_eq!(to, vec![Square::new(1, 2), Square::new(2, 1)]);
    }

    #[test]
    fn knight_skips_friends_but_captures_enemies() {
        let mut state = RelativeState::empty();
        state.set(Square::new(3, 3), KNIGHT);
        state.set(Square::new(4, 5), PAWN);
        state.set(Square::new(2, 5), -PAWN);
        let mut out = Vec::new();
        generate_knight_moves(&state, Square::new(3, 3), &mut out);
        assert_eq!(out.len(), 7);
        assert_eq!(out[0].to, Square::new(2, 5));
    }
}
