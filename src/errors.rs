//! Error types for parsing and opponent-move validation.
//!
//! The search core itself never fails: every turn yields a move, falling back
//! to a stalemate claim. Errors only surface at the crate's edges.

use thiserror::Error;

use crate::game_state::absolute_board::GameMove;
use crate::game_state::chess_types::MoveFlag;

/// Failures while reading a FEN piece-placement field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("FEN placement must have 8 ranks, found {found}")]
    RankCount { found: usize },

    #[error("FEN rank {rank} describes {width} files instead of 8")]
    RankWidth { rank: usize, width: usize },

    #[error("unknown piece character '{symbol}' in FEN rank {rank}")]
    UnknownPiece { symbol: char, rank: usize },

    #[error("invalid empty-square run '{digit}' in FEN rank {rank}")]
    EmptyRun { digit: char, rank: usize },

    #[error("missing board layout in FEN")]
    MissingPlacement,

    #[error("invalid side-to-move field: {field}")]
    SideToMove { field: String },
}

/// Why an opponent's move was refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveRejection {
    /// The squares form a legal move but the claimed flag is wrong.
    #[error("Invalid Move ({claimed}). Expected the {expected} flag to be set.")]
    FlagMismatch {
        claimed: GameMove,
        expected: MoveFlag,
    },

    #[error("Invalid Move ({claimed}). The move was not in my list of possible moves.")]
    NotLegal { claimed: GameMove },
}

pub type BoardResult<T> = Result<T, BoardError>;
