//! Iterative-deepening alpha-beta agent.

use crate::engines::engine_trait::Engine;
use crate::game_state::absolute_board::{AbsoluteBoard, GameMove, PlayerColor};
use crate::search::iterative_deepening::SearchConfig;
use crate::search::session::SearchSession;

#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    session: SearchSession,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            session: SearchSession::new(config),
        }
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Passant Minimax"
    }

    fn new_game(&mut self) {
        self.session.reset();
    }

    fn choose_move(
        &mut self,
        board: &AbsoluteBoard,
        color: PlayerColor,
        time_up: &dyn Fn() -> bool,
    ) -> GameMove {
        self.session.choose_move(board, color, time_up)
    }
}
