//! Alpha-beta minimax over friend-relative states.
//!
//! `min_value` answers for the opponent's reply to a friend move and
//! `max_value` for the friend reply to an opponent move. Each level flips the
//! state with `enemy_state`, so both sides are generated as "friend". Scores
//! stay in the root mover's frame: opponent leaves are negated.

use crate::game_state::chess_types::*;
use crate::game_state::relative_state::RelativeState;
use crate::move_generation::legal_move_generator::get_all_moves;
use crate::search::board_scoring::BoardScorer;

/// Everything a search needs besides the position.
pub struct SearchContext<'a> {
    pub evaluator: &'a dyn BoardScorer,
    pub time_up: &'a dyn Fn() -> bool,
    pub nodes: u64,
}

impl<'a> SearchContext<'a> {
    pub fn new(evaluator: &'a dyn BoardScorer, time_up: &'a dyn Fn() -> bool) -> Self {
        Self {
            evaluator,
            time_up,
            nodes: 0,
        }
    }

    #[inline]
    pub fn is_time_up(&self) -> bool {
        (self.time_up)()
    }

    /// Scored replies for the side to move in `state`, best first. Ties keep
    /// enumeration order.
    fn ordered_moves(&mut self, state: &RelativeState) -> Vec<Move> {
        self.nodes += 1;
        let mut moves = get_all_moves(state, true, Some(self.evaluator));
        sort_by_value_desc(&mut moves);
        moves
    }
}

/// Stable sort, highest value first.
pub fn sort_by_value_desc(moves: &mut [Move]) {
    moves.sort_by(|a, b| b.value.cmp(&a.value));
}

/// Value of the position after the opponent played `mv`, with the friend side
/// to move in `state_after`'s enemy view.
pub fn max_value(
    ctx: &mut SearchContext<'_>,
    state_after: &RelativeState,
    mv: &Move,
    depth: i32,
    mut alpha: i32,
    beta: i32,
) -> i32 {
    // `mv` was scored from the opponent's side.
    if depth < 0 || mv.flag == MoveFlag::Checkmate {
        return -mv.value;
    }

    let state = state_after.enemy_state();
    let mut value = i32::MIN;

    for reply in ctx.ordered_moves(&state) {
        if ctx.is_time_up() {
            break;
        }
        let next = state.apply_move(&reply);
        value = value.max(min_value(ctx, &next, &reply, depth - 1, alpha, beta));
        if value >= beta {
            return value;
        }
        alpha = alpha.max(value);
    }

    value
}

/// Value of the position after the friend side played `mv`, with the
/// opponent to move in `state_after`'s enemy view.
pub fn min_value(
    ctx: &mut SearchContext<'_>,
    state_after: &RelativeState,
    mv: &Move,
    depth: i32,
    alpha: i32,
    mut beta: i32,
) -> i32 {
    if depth < 0 || mv.flag == MoveFlag::Checkmate {
        return mv.value;
    }

    let state = state_after.enemy_state();
    let mut value = i32::MAX;

    for reply in ctx.ordered_moves(&state) {
        if ctx.is_time_up() {
            break;
        }
        let next = state.apply_move(&reply);
        value = value.min(max_value(ctx, &next, &reply, depth - 1, alpha, beta));
        if value <= alpha {
            return value;
        }
        beta = beta.min(value);
    }

    value
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{max_value, min_value, sort_by_value_desc, SearchContext};
    use crate::game_state::absolute_board::{AbsoluteBoard, PlayerColor};
    use crate::game_state::chess_types::*;
    use crate::game_state::relative_state::RelativeState;
    use crate::move_generation::legal_move_generator::get_all_moves;
    use crate::search::board_scoring::{BoardScorer, GeneralScorer};

    fn never() -> bool {
        false
    }

    fn reference_min(scorer: &dyn BoardScorer, state_after: &RelativeState, mv: &Move, depth: i32) -> i32 {
        if depth < 0 || mv.flag == MoveFlag::Checkmate {
            return mv.value;
        }
        let state = state_after.enemy_state();
        get_all_moves(&state, true, Some(scorer))
            .iter()
            .map(|reply| reference_max(scorer, &state.apply_move(reply), reply, depth - 1))
            .min()
            .unwrap_or(i32::MAX)
    }

    fn reference_max(scorer: &dyn BoardScorer, state_after: &RelativeState, mv: &Move, depth: i32) -> i32 {
        if depth < 0 || mv.flag == MoveFlag::Checkmate {
            return -mv.value;
        }
        let state = state_after.enemy_state();
        get_all_moves(&state, true, Some(scorer))
            .iter()
            .map(|reply| reference_min(scorer, &state.apply_move(reply), reply, depth - 1))
            .max()
            .unwrap_or(i32::MIN)
    }

    fn assert_matches_reference(state: &RelativeState, depth: i32) {
        let time_up: &dyn Fn() -> bool = &never;
        for mv in get_all_moves(state, true, Some(&GeneralScorer)) {
            let mut ctx = SearchContext::new(&GeneralScorer, time_up);
            let after = state.apply_move(&mv);
            let pruned = min_value(&mut ctx, &after, &mv, depth, i32::MIN, i32::MAX);
            let full = reference_min(&GeneralScorer, &after, &mv, depth);
            assert_eq!(pruned, full, "move {mv} at depth {depth}");
        }
    }

    #[test]
    fn pruning_matches_plain_minimax_from_the_start() {
        let state = RelativeState::from_absolute(&AbsoluteBoard::standard(), PlayerColor::White);
        assert_matches_reference(&state, 0);
    }

    #[test]
    fn pruning_matches_plain_minimax_on_sparse_positions() {
        let mut rng = StdRng::seed_from_u64(99);
        let squares: Vec<Square> = Square::all().collect();
        for _ in 0..12 {
            let mut state = RelativeState::empty();
            for code in [KING, -KING, ROOK, -KNIGHT, -PAWN, BISHOP] {
                loop {
                    let sq = squares[rng.random_range(0..squares.len())];
                    if state.piece_at(sq) == EMPTY {
                        state.set(sq, code);
                        break;
                    }
                }
            }
            assert_matches_reference(&state, 1);
        }
    }

    #[test]
    fn leaves_return_scores_in_the_root_frame() {
        let state = RelativeState::empty();
        let mut mv = Move::new(Square::new(0, 0), Square::new(0, 1));
        mv.value = 42;
        let time_up: &dyn Fn() -> bool = &never;
        let mut ctx = SearchContext::new(&GeneralScorer, time_up);
        assert_eq!(min_value(&mut ctx, &state, &mv, -1, i32::MIN, i32::MAX), 42);
        assert_eq!(max_value(&mut ctx, &state, &mv, -1, i32::MIN, i32::MAX), -42);

        mv.flag = MoveFlag::Checkmate;
        assert_eq!(min_value(&mut ctx, &state, &mv, 5, i32::MIN, i32::MAX), 42);
    }

    #[test]
    fn expired_clock_stops_before_any_child() {
        let state = RelativeState::from_absolute(&AbsoluteBoard::standard(), PlayerColor::Black);
        let mv = get_all_moves(&state, true, Some(&GeneralScorer))[0];
        let always = || true;
        let time_up: &dyn Fn() -> bool = &always;
        let mut ctx = SearchContext::new(&GeneralScorer, time_up);
        let after = state.apply_move(&mv);
        assert_eq!(min_value(&mut ctx, &after, &mv, 3, i32::MIN, i32::MAX), i32::MAX);
    }

    #[test]
    fn sorting_is_descending_and_stable() {
        let mut moves: Vec<Move> = (0..4u8)
            .map(|x| {
                let mut mv = Move::new(Square::new(x, 0), Square::new(x, 1));
                mv.value = if x % 2 == 0 { 1 } else { 5 };
                mv
            })
            .collect();
        sort_by_value_desc(&mut moves);
        let order: Vec<u8> = moves.iter().map(|mv| mv.from.x).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }
}
