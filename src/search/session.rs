//! Per-agent move selection: evaluator choice, search, and repetition memory.

use tracing::info;

use crate::game_state::absolute_board::{AbsoluteBoard, GameMove, PlayerColor};
use crate::game_state::relative_state::{get_game_move, RelativeState};
use crate::search::board_scoring::Evaluator;
use crate::search::iterative_deepening::{iterative_deepening_search, SearchConfig};
use crate::search::move_history::MoveHistory;

/// Owns the search configuration and the recent-move history of one agent.
/// Two sessions never share history.
#[derive(Debug, Clone)]
pub struct SearchSession {
    config: SearchConfig,
    history: MoveHistory,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl SearchSession {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            history: MoveHistory::new(config.history_capacity),
            config,
        }
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut MoveHistory {
        &mut self.history
    }

    /// Forgets recent moves, e.g. between games.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Picks a move for `color` on `board`, searching until `time_up` fires.
    ///
    /// Always returns a move: a stalemate-flagged one with no squares when
    /// `color` has no legal move.
    pub fn choose_move(
        &mut self,
        board: &AbsoluteBoard,
        color: PlayerColor,
        time_up: &dyn Fn() -> bool,
    ) -> GameMove {
        let evaluator = Evaluator::for_position(board, color);
        let state = RelativeState::from_absolute(board, color);
        let result = iterative_deepening_search(&state, color, &evaluator, self.config, time_up);

        let ranked: Vec<GameMove> = result
            .ranked
            .iter()
            .map(|mv| get_game_move(mv, color))
            .collect();

        match self.history.select(&ranked) {
            Some(chosen) => {
                info!(
                    color = %color,
                    chosen = %chosen,
                    value = chosen.value,
                    max_depth = ?result.completed_depth,
                    rotation = self.history.rotation(),
                    remembered = self.history.len(),
                    evaluator = ?evaluator,
                    nodes = result.nodes,
                    "move chosen"
                );
                chosen
            }
            None => {
                info!(color = %color, "no legal move, claiming stalemate");
                GameMove::stalemate()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SearchSession;
    use crate::game_state::absolute_board::PlayerColor;
    use crate::game_state::chess_types::{MoveFlag, Square};
    use crate::search::iterative_deepening::SearchConfig;
    use crate::utils::fen_parser::parse_placement;

    fn fixed_depth(max_depth: i32) -> SearchSession {
        SearchSession::new(SearchConfig {
            max_depth: Some(max_depth),
            ..SearchConfig::default()
        })
    }

    #[test]
    fn plays_the_back_rank_mate() {
        let board = parse_placement("4k3/3ppp2/8/8/3P4/8/8/Q3K3").expect("placement should parse");
        let mut session = fixed_depth(1);
        let chosen = session.choose_move(&board, PlayerColor::White, &|| false);

        assert_eq!(chosen.from, Some(Square::new(0, 7)));
        assert_eq!(chosen.to, Some(Square::new(0, 0)));
        assert_eq!(chosen.flag, MoveFlag::Checkmate);
        assert!(chosen.value >= 5000);
        assert!(session.history().contains(&chosen));
    }

    #[test]
    fn repeated_best_move_gives_way_to_the_runner_up() {
        let board = parse_placement("4k3/3ppp2/8/8/3P4/8/8/Q3K3").expect("placement should parse");
        let mut session = fixed_depth(1);

        let best = session.choose_move(&board, PlayerColor::White, &|| false);
        assert_eq!(best.flag, MoveFlag::Checkmate);
        assert_eq!(session.history().rotation(), 0);

        // Same position again: the best move is remembered, so the next one
        // in the ranking is played instead.
        let runner_up = session.choose_move(&board, PlayerColor::White, &|| false);
        assert_ne!(runner_up, best);
        assert_ne!(runner_up.flag, MoveFlag::Checkmate);
        assert_eq!(session.history().rotation(), 1);

        // A fresh history goes back to the best move.
        session.reset();
        let chosen = session.choose_move(&board, PlayerColor::White, &|| false);
        assert_eq!(chosen, best);
        assert_eq!(session.history().rotation(), 0);
    }

    #[test]
    fn stalemated_side_claims_stalemate() {
        // Black king cornered by the white queen, not in check.
        let board = parse_placement("k7/2Q5/8/8/8/8/8/7K").expect("placement should parse");
        let mut session = SearchSession::default();
        let chosen = session.choose_move(&board, PlayerColor::Black, &|| false);
        assert!(chosen.is_stalemate());
        assert_eq!(chosen.from, None);
        assert_eq!(chosen.to, None);
        assert!(session.history().is_empty());
    }

    #[test]
    fn expired_clock_still_returns_a_legal_move() {
        let board = crate::game_state::absolute_board::AbsoluteBoard::standard();
        let mut session = SearchSession::default();
        let chosen = session.choose_move(&board, PlayerColor::White, &|| true);
        assert!(!chosen.is_stalemate());
        assert_eq!(
            crate::move_generation::move_validation::validate_move(&board, &chosen, PlayerColor::White),
            Ok(())
        );
    }
}
