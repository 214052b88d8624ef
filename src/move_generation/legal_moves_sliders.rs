//! Ray walkers for bishops, rooks and queens.

use crate::game_state::chess_types::*;
use crate::game_state::relative_state::RelativeState;

pub const BISHOP_RAYS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];
pub const ROOK_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub fn generate_bishop_moves(state: &RelativeState, from: Square, out: &mut Vec<Move>) {
    walk_rays(state, from, &BISHOP_RAYS, out);
}

pub fn generate_rook_moves(state: &RelativeState, from: Square, out: &mut Vec<Move>) {
    walk_rays(state, from, &ROOK_RAYS, out);
}

/// Bishop rays, then rook rays.
pub fn generate_queen_moves(state: &RelativeState, from: Square, out: &mut Vec<Move>) {
    walk_rays(state, from, &BISHOP_RAYS, out);
    walk_rays(state, from, &ROOK_RAYS, out);
}

/// Each ray stops before a friend piece and on an enemy piece.
fn walk_rays(state: &RelativeState, from: Square, rays: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dx, dy) in rays {
        let mut distance = 1i8;
        while let Some(to) = from.offset(dx * distance, dy * distance) {
            let code = state.piece_at(to);
            if code > EMPTY {
                break;
            }
            out.push(Move::new(from, to));
            if code < EMPTY {
                break;
            }
            distance += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_bishop_moves, generate_queen_moves, generate_rook_moves};
    use crate::game_state::chess_types::*;
    use crate::game_state::relative_state::RelativeState;

    #[test]
    fn rook_ray_includes_capture_and_stops() {
        let mut state = RelativeState::empty();
        state.set(Square::new(0, 0), ROOK);
        state.set(Square::new(0, 2), -PAWN);
        state.set(Square::new(2, 0), KNIGHT);
        let mut out = Vec::new();
        generate_rook_moves(&state, Square::new(0, 0), &mut out);
        let to: Vec<Square> = out.iter().map(|mv| mv.to).collect();
        assert_eq!(
            to,
            vec![Square::new(1, 0), Square::new(0, 1), Square::new(0, 2)]
        );
    }

    #[test]
    fn central_bishop_and_queen_counts() {
        let mut state = RelativeState::empty();
        state.set(Square::new(3, 3), QUEEN);
        let mut bishop = Vec::new();
        generate_bishop_moves(&state, Square::new(3, 3), &mut bishop);
        assert_eq!(bishop.len(), 13);
        // First ray walks toward +x, -y.
        assert_eq!(bishop[0].to, Square::new(4, 2));

        let mut queen = Vec::new();
        generate_queen_moves(&state, Square::new(3, 3), &mut queen);
        assert_eq!(queen.len(), 27);
        assert_eq!(&queen[..13], &bishop[..]);
    }
}
