//! King + rook/queen against lone king heuristic.
//!
//! Pulls the friend king toward the enemy king, keeps the heavy piece next
//! to its king or out of reach, squeezes the enemy king's box, and rewards the
//! corner layouts listed in [`crate::search::endgame_patterns`].

use crate::game_state::absolute_board::{AbsoluteBoard, PlayerColor};
use crate::game_state::chess_types::*;
use crate::game_state::relative_state::RelativeState;
use crate::move_generation::attack_oracle::in_danger;
use crate::search::board_scoring::{BoardScorer, CHECKMATE_BONUS};
use crate::search::endgame_patterns::{corner_adjustment, EndgameLayout};

/// True when the board holds only the two kings plus one rook or queen
/// owned by `color`.
pub fn is_endgame(board: &AbsoluteBoard, color: PlayerColor) -> bool {
    let mut count = 0;
    for (_, piece) in board.pieces() {
        count += 1;
        match piece.kind {
            PieceKind::King => {}
            PieceKind::Rook | PieceKind::Queen if piece.color == color => {}
            _ => return false,
        }
    }
    count == 3
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EndgameScorer;

const UNSET: (i32, i32) = (-1, -1);

impl EndgameScorer {
    /// Column-major scan; the last matching square wins.
    fn layout(state: &RelativeState) -> Option<EndgameLayout> {
        let mut enemy_king = UNSET;
        let mut king = UNSET;
        let mut rook = None;
        let mut is_queen = true;

        for x in 0..COLUMNS as u8 {
            for y in 0..ROWS as u8 {
                let at = (x as i32, y as i32);
                match state.piece_at(Square::new(x, y)) {
                    code if code == -KING => enemy_king = at,
                    KING => king = at,
                    ROOK => {
                        rook = Some(at);
                        is_queen = false;
                    }
                    QUEEN => rook = Some(at),
                    _ => {}
                }
            }
        }

        rook.map(|rook| EndgameLayout {
            enemy_king,
            king,
            rook,
            is_queen,
        })
    }

    fn score_layout(state: &RelativeState, layout: &EndgameLayout) -> i32 {
        let (ek_col, ek_row) = layout.enemy_king;
        let (k_col, k_row) = layout.king;
        let (r_col, r_row) = layout.rook;
        let mut result = 0i32;

        let beside_king = (r_col - k_col).abs() <= 1
            && (r_row - k_row).abs() <= 1
            && layout.rook != layout.king;

        if beside_king {
            result += 1000;
            let shields_columns = (ek_col < r_col && k_col < r_col) || (ek_col > r_col && k_col > r_col);
            let shields_rows = (ek_row < r_row && k_row < r_row) || (ek_row > r_row && k_row > r_row);
            if !shields_columns || !shields_rows {
                result += 1000;
            }
        } else if in_danger(state, Square::new(r_col as u8, r_row as u8)) {
            result = i32::MIN + 1;
        } else if (ek_col - k_col).abs() == 2
            || ((ek_row - k_row).abs() == 2
                && ((k_col - r_col).abs() == 1 || (k_row - r_row).abs() == 1))
        {
            // Kings nearly in opposition: bring the heavy piece back.
            result += 1500;
        } else {
            result += (700 - (ek_col - k_col).abs() * 100) + (700 - (ek_row - k_row).abs() * 100);
        }

        // Smaller box for the enemy king is better.
        let last_col = COLUMNS as i32 - 1;
        let last_row = ROWS as i32 - 1;
        let area = if r_col > ek_col && r_row < ek_row {
            Some(r_col * (last_row - r_row))
        } else if r_col > ek_col && r_row > ek_row {
            Some(r_col * r_row)
        } else if r_col < ek_col && r_row < ek_row {
            Some((last_col - r_col) * (last_row - r_row))
        } else if r_col < ek_col && r_row > ek_row {
            Some((last_col - r_col) * r_row)
        } else {
            None
        };
        if let Some(area) = area {
            result += 64 - area;
        }

        corner_adjustment(result, layout)
    }
}

impl BoardScorer for EndgameScorer {
    fn evaluate(&self, state_after: &RelativeState, mv: &Move) -> i32 {
        let mut result = match Self::layout(state_after) {
            Some(layout) => Self::score_layout(state_after, &layout),
            None => 0,
        };
        if mv.flag == MoveFlag::Checkmate {
            result += CHECKMATE_BONUS;
        }
        result
    }
}
