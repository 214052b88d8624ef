//! Square attack detection on friend-relative states.
//!
//! A target holding a negative code is treated as an enemy piece and is
//! threatened by friend pieces; anything else (a friend piece or an empty
//! square) is threatened by enemy pieces.

use tracing::warn;

use crate::game_state::chess_types::*;
use crate::game_state::relative_state::RelativeState;

/// Ray directions as `(dx, dy, diagonal)`.
const RAYS: [(i8, i8, bool); 8] = [
    (0, -1, false),
    (0, 1, false),
    (-1, 0, false),
    (1, 0, false),
    (-1, -1, true),
    (1, -1, true),
    (-1, 1, true),
    (1, 1, true),
];

pub(crate) const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
];

/// True if the piece (or empty square) at `target` can be captured by the
/// opposing side in one move.
pub fn in_danger(state: &RelativeState, target: Square) -> bool {
    let enemy_target = state.piece_at(target) < EMPTY;
    // Attackers carry the sign opposite to the target.
    let sign: i8 = if enemy_target { 1 } else { -1 };

    for (dx, dy, diagonal) in RAYS {
        let mut distance = 1i8;
        while let Some(square) = target.offset(dx * distance, dy * distance) {
            let code = state.piece_at(square);
            if code == EMPTY {
                distance += 1;
                continue;
            }

            let slider = if diagonal { BISHOP } else { ROOK };
            if code == sign * QUEEN || code == sign * slider {
                return true;
            }
            if distance == 1 {
                if code == sign * KING {
                    return true;
                }
                // Friend pawns advance toward +y, so they attack from the row
                // below; enemy pawns attack from the row above.
                let pawn_row = if enemy_target { -1 } else { 1 };
                if diagonal && dy == pawn_row && code == sign * PAWN {
                    return true;
                }
            }
            break;
        }
    }

    KNIGHT_JUMPS.iter().any(|&(dx, dy)| {
        target
            .offset(dx, dy)
            .is_some_and(|square| state.piece_at(square) == sign * KNIGHT)
    })
}

/// True if the friend king (or the enemy king when `enemy` is set) is
/// attacked. A missing king is logged and reported as in check.
pub fn in_check(state: &RelativeState, enemy: bool) -> bool {
    let king = if enemy { -KING } else { KING };
    match state.locate(king) {
        Some(square) => in_danger(state, square),
        None => {
            warn!(enemy, "king missing from board state");
            true
        }
    }
}
