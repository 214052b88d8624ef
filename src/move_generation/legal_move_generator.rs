//! Full legal move generation pipeline.
//!
//! Walks the friend pieces in row-major order, collects each piece's
//! candidates, drops those that leave the friend king attacked, and annotates
//! the survivors with check / checkmate flags and an optional score.

use std::ops::ControlFlow;

use crate::game_state::chess_types::*;
use crate::game_state::relative_state::RelativeState;
use crate::move_generation::attack_oracle::in_check;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliders::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};
use crate::search::board_scoring::BoardScorer;

/// Every legal move for the side to move, in enumeration order.
///
/// With `calculate_checkmate` set, checking moves that leave the opponent
/// without a reply are flagged [`MoveFlag::Checkmate`]. With an evaluator,
/// each move's `value` is the evaluator's score of the resulting state.
pub fn get_all_moves(
    state: &RelativeState,
    calculate_checkmate: bool,
    evaluator: Option<&dyn BoardScorer>,
) -> Vec<Move> {
    let mut legal = Vec::with_capacity(48);
    for_each_legal_move(state, calculate_checkmate, evaluator, |mv| {
        legal.push(mv);
        ControlFlow::Continue(())
    });
    legal
}

/// True if the side to move has at least one legal move. Stops at the
/// first one found.
pub fn has_legal_move(state: &RelativeState) -> bool {
    let mut found = false;
    for_each_legal_move(state, false, None, |_| {
        found = true;
        ControlFlow::Break(())
    });
    found
}

/// Candidate moves of the friend piece on `from`, before the legality filter.
pub fn generate_piece_moves(state: &RelativeState, from: Square, out: &mut Vec<Move>) {
    match state.piece_at(from) {
        PAWN => generate_pawn_moves(state, from, out),
        KNIGHT => generate_knight_moves(state, from, out),
        BISHOP => generate_bishop_moves(state, from, out),
        ROOK => generate_rook_moves(state, from, out),
        QUEEN => generate_queen_moves(state, from, out),
        KING => generate_king_moves(state, from, out),
        _ => {}
    }
}

fn for_each_legal_move<F>(
    state: &RelativeState,
    calculate_checkmate: bool,
    evaluator: Option<&dyn BoardScorer>,
    mut visit: F,
) where
    F: FnMut(Move) -> ControlFlow<()>,
{
    let mut candidates = Vec::<Move>::with_capacity(32);

    for from in Square::all() {
        if state.piece_at(from) <= EMPTY {
            continue;
        }
        candidates.clear();
        generate_piece_moves(state, from, &mut candidates);

        for mut mv in candidates.drain(..) {
            let next = state.apply_move(&mv);

            // Illegal if own king is attacked after the move.
            if in_check(&next, false) {
                continue;
            }

            if in_check(&next, true) {
                mv.flag = MoveFlag::Check;
                if calculate_checkmate && !has_legal_move(&next.enemy_state()) {
                    mv.flag = MoveFlag::Checkmate;
                }
            }

            if let Some(scorer) = evaluator {
                mv.value = scorer.evaluate(&next, &mv);
            }

            if visit(mv).is_break() {
                return;
            }
        }
    }
}
