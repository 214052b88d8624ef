//! Common interface for move-selecting agents.
//!
//! A host hands an agent the absolute board, the color to move, and a
//! time-up predicate, and gets exactly one [`GameMove`] back. Agents also act
//! as referees for their opponent's moves through [`Engine::is_valid_move`].

use tracing::warn;

use crate::errors::MoveRejection;
use crate::game_state::absolute_board::{AbsoluteBoard, GameMove, PlayerColor};
use crate::move_generation::move_validation::validate_move;

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Clears per-game state.
    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        board: &AbsoluteBoard,
        color: PlayerColor,
        time_up: &dyn Fn() -> bool,
    ) -> GameMove;

    /// Checks `candidate`, played by `mover` on `board_before`. Rejections
    /// are logged before being returned.
    fn is_valid_move(
        &self,
        board_before: &AbsoluteBoard,
        candidate: &GameMove,
        mover: PlayerColor,
    ) -> Result<(), MoveRejection> {
        validate_move(board_before, candidate, mover).inspect_err(|rejection| {
            warn!(engine = self.name(), mover = %mover, "{rejection}");
        })
    }
}
