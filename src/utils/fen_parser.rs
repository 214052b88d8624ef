//! FEN-to-AbsoluteBoard parser.
//!
//! Only the placement and side-to-move fields matter here; castling,
//! en-passant and the clocks are accepted and ignored. The first FEN rank
//! (Black's back rank) lands on row `y = 0`.

use crate::errors::{BoardError, BoardResult};
use crate::game_state::absolute_board::{AbsoluteBoard, Piece, PlayerColor};
use crate::game_state::chess_types::*;

pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parses a full FEN string (trailing fields optional). A missing side field
/// means White to move.
pub fn parse_fen(fen: &str) -> BoardResult<(AbsoluteBoard, PlayerColor)> {
    let mut parts = fen.split_whitespace();
    let placement = parts.next().ok_or(BoardError::MissingPlacement)?;
    let board = parse_placement(placement)?;
    let side = match parts.next() {
        None | Some("w") => PlayerColor::White,
        Some("b") => PlayerColor::Black,
        Some(other) => {
            return Err(BoardError::SideToMove {
                field: other.to_owned(),
            })
        }
    };
    Ok((board, side))
}

/// Parses the piece-placement field alone.
pub fn parse_placement(placement: &str) -> BoardResult<AbsoluteBoard> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != ROWS {
        return Err(BoardError::RankCount { found: ranks.len() });
    }

    let mut board = AbsoluteBoard::empty();
    for (y, rank_str) in ranks.iter().enumerate() {
        let mut x = 0usize;
        for ch in rank_str.chars() {
            if let Some(run) = ch.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(BoardError::EmptyRun { digit: ch, rank: y });
                }
                x += run as usize;
                continue;
            }

            let piece =
                piece_from_fen_char(ch).ok_or(BoardError::UnknownPiece { symbol: ch, rank: y })?;
            if x >= COLUMNS {
                return Err(BoardError::RankWidth { rank: y, width: x + 1 });
            }
            board.set(Square::new(x as u8, y as u8), Some(piece));
            x += 1;
        }

        if x != COLUMNS {
            return Err(BoardError::RankWidth { rank: y, width: x });
        }
    }

    Ok(board)
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        PlayerColor::White
    } else if ch.is_ascii_lowercase() {
        PlayerColor::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}
