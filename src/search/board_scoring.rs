//! Pluggable move evaluation interfaces and the general-play heuristic.
//!
//! Scorers see the state right after a move together with the move itself
//! (its flag matters), and score from the mover's point of view.

use crate::game_state::absolute_board::{AbsoluteBoard, PlayerColor};
use crate::game_state::chess_types::*;
use crate::game_state::relative_state::RelativeState;
use crate::move_generation::attack_oracle::in_danger;
use crate::search::endgame_scoring::{is_endgame, EndgameScorer};

pub const CHECKMATE_BONUS: i32 = 5000;

pub trait BoardScorer: Send + Sync {
    /// Score of `state_after`, the position produced by `mv`.
    fn evaluate(&self, state_after: &RelativeState, mv: &Move) -> i32;
}

/// Signed material value of a piece code (friend positive).
#[inline]
pub const fn piece_value(code: i8) -> i32 {
    let magnitude = match code.unsigned_abs() as i8 {
        PAWN => 1,
        KNIGHT | BISHOP => 3,
        ROOK => 5,
        QUEEN => 9,
        KING => 10,
        _ => 0,
    };
    if code < 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Material count that ignores friend pieces en prise, plus small nudges for
/// checks and for pawns with a free run to promotion.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeneralScorer;

impl GeneralScorer {
    fn pawn_has_free_run(state: &RelativeState, square: Square) -> bool {
        state.piece_at(square) == PAWN
            && (square.y as usize + 1..ROWS)
                .all(|y| state.piece_at(Square::new(square.x, y as u8)) == EMPTY)
    }
}

impl BoardScorer for GeneralScorer {
    fn evaluate(&self, state_after: &RelativeState, mv: &Move) -> i32 {
        let mut result = 0;

        if mv.flag == MoveFlag::Check {
            result += 1;
        }

        if mv.flag == MoveFlag::Checkmate {
            result += CHECKMATE_BONUS;
        } else if !in_danger(state_after, mv.to) && Self::pawn_has_free_run(state_after, mv.to) {
            result += 1;
        }

        for (square, code) in state_after.occupied() {
            // Friend pieces that can be taken are not counted.
            if code < EMPTY || !in_danger(state_after, square) {
                result += piece_value(code);
            }
        }

        result
    }
}

/// The two heuristics the search switches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluator {
    General,
    Endgame,
}

impl Evaluator {
    /// Endgame scoring for king + rook/queen against a lone king, general
    /// scoring otherwise.
    pub fn for_position(board: &AbsoluteBoard, color: PlayerColor) -> Self {
        if is_endgame(board, color) {
            Evaluator::Endgame
        } else {
            Evaluator::General
        }
    }
}

impl BoardScorer for Evaluator {
    fn evaluate(&self, state_after: &RelativeState, mv: &Move) -> i32 {
        match self {
            Evaluator::General => GeneralScorer.evaluate(state_after, mv),
            Evaluator::Endgame => EndgameScorer.evaluate(state_after, mv),
        }
    }
}
