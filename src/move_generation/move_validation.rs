//! Checks an opponent's claimed move against the legal move list.

use crate::errors::MoveRejection;
use crate::game_state::absolute_board::{AbsoluteBoard, GameMove, PlayerColor};
use crate::game_state::relative_state::{get_game_move, RelativeState};
use crate::move_generation::legal_move_generator::get_all_moves;

/// Accepts `claimed` if it matches a legal move of `mover` on `board_before`,
/// squares and flag alike. Stalemate claims are always accepted.
pub fn validate_move(
    board_before: &AbsoluteBoard,
    claimed: &GameMove,
    mover: PlayerColor,
) -> Result<(), MoveRejection> {
    if claimed.is_stalemate() {
        return Ok(());
    }

    let state = RelativeState::from_absolute(board_before, mover);
    let legal: Vec<GameMove> = get_all_moves(&state, true, None)
        .iter()
        .map(|mv| get_game_move(mv, mover))
        .collect();

    if legal.iter().any(|mv| mv == claimed) {
        return Ok(());
    }

    match legal
        .iter()
        .find(|mv| mv.from == claimed.from && mv.to == claimed.to)
    {
        Some(near) => Err(MoveRejection::FlagMismatch {
            claimed: *claimed,
            expected: near.flag,
        }),
        None => Err(MoveRejection::NotLegal { claimed: *claimed }),
    }
}
