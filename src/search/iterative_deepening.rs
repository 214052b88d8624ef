//! Iterative deepening driver on top of the alpha-beta core.
//!
//! Each pass re-sorts the root moves by the previous pass's values, searches
//! every one of them one level deeper, and keeps the results in a ranked
//! list. The loop runs until the clock expires, unless `max_depth` stops it
//! earlier.

use tracing::debug;

use crate::game_state::absolute_board::PlayerColor;
use crate::game_state::chess_types::Move;
use crate::game_state::relative_state::{get_game_move, RelativeState};
use crate::move_generation::legal_move_generator::get_all_moves;
use crate::search::alpha_beta::{min_value, sort_by_value_desc, SearchContext};
use crate::search::board_scoring::BoardScorer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Depth of the first pass; depth `d` looks `d + 1` plies ahead.
    pub initial_depth: i32,
    /// Stop after completing a pass at this depth.
    pub max_depth: Option<i32>,
    /// Number of recent own moves remembered for repetition avoidance.
    pub history_capacity: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            initial_depth: 1,
            max_depth: None,
            history_capacity: 10,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    /// Root moves, best first. Empty when there is no legal move.
    pub ranked: Vec<Move>,
    /// Deepest pass that ran through every root move, if any.
    pub completed_depth: Option<i32>,
    pub nodes: u64,
}

/// Runs passes at increasing depth until `time_up` fires, the move list is
/// empty, or `config.max_depth` is exceeded.
///
/// The ranking comes from the last pass that finished every root move. If no
/// pass finished, the interrupted pass is used, and if nothing was searched
/// the heuristic ordering is returned.
pub fn iterative_deepening_search(
    state: &RelativeState,
    color: PlayerColor,
    evaluator: &dyn BoardScorer,
    config: SearchConfig,
    time_up: &dyn Fn() -> bool,
) -> SearchResult {
    let mut ctx = SearchContext::new(evaluator, time_up);
    let mut moves = get_all_moves(state, true, Some(evaluator));

    let mut completed: Option<Vec<Move>> = None;
    let mut completed_depth = None;
    let mut interrupted: Option<Vec<Move>> = None;
    let mut depth = config.initial_depth;

    while !ctx.is_time_up()
        && !moves.is_empty()
        && config.max_depth.map_or(true, |max| depth <= max)
    {
        sort_by_value_desc(&mut moves);

        let mut best = Vec::<Move>::with_capacity(moves.len());
        let mut alpha = i32::MIN;
        let beta = i32::MAX;
        let mut processed = 0usize;

        for mv in moves.iter_mut() {
            if ctx.is_time_up() {
                break;
            }
            let after = state.apply_move(mv);
            let value = min_value(&mut ctx, &after, mv, depth - 1, alpha, beta);
            // A subtree cut short by the clock has no trustworthy value.
            if ctx.is_time_up() {
                break;
            }
            mv.value = value;

            // Equal values stay in the order they were searched.
            let pos = best
                .iter()
                .position(|ranked| ranked.value < mv.value)
                .unwrap_or(best.len());
            best.insert(pos, *mv);

            alpha = alpha.max(mv.value);
            processed += 1;
        }

        if let Some(top) = best.first() {
            debug!(
                depth,
                processed,
                total = moves.len(),
                best = %get_game_move(top, color),
                value = top.value,
                "search pass finished"
            );
        }

        if processed == moves.len() && !ctx.is_time_up() {
            completed = Some(best);
            completed_depth = Some(depth);
        } else {
            interrupted = Some(best);
        }
        depth += 1;
    }

    let ranked = match (completed, interrupted) {
        (Some(ranked), _) => ranked,
        (None, Some(partial)) if !partial.is_empty() => partial,
        _ => {
            sort_by_value_desc(&mut moves);
            moves
        }
    };

    SearchResult {
        ranked,
        completed_depth,
        nodes: ctx.nodes,
    }
}
