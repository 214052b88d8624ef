//! Terminal-oriented Unicode board renderer for logs and diagnostics.

use crate::game_state::absolute_board::{AbsoluteBoard, Piece, PlayerColor};
use crate::game_state::chess_types::*;

/// Renders the board with White at the bottom.
///
/// Row `y = 0` (Black's back rank) is printed first as rank 8.
pub fn render_board(board: &AbsoluteBoard) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for y in 0..ROWS as u8 {
        let rank = char::from(b'8' - y);
        out.push(rank);
        out.push(' ');

        for x in 0..COLUMNS as u8 {
            match board.get(Square::new(x, y)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if x < COLUMNS as u8 - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (PlayerColor::White, PieceKind::Pawn) => '♙',
        (PlayerColor::White, PieceKind::Knight) => '♘',
        (PlayerColor::White, PieceKind::Bishop) => '♗',
        (PlayerColor::White, PieceKind::Rook) => '♖',
        (PlayerColor::White, PieceKind::Queen) => '♕',
        (PlayerColor::White, PieceKind::King) => '♔',
        (PlayerColor::Black, PieceKind::Pawn) => '♟',
        (PlayerColor::Black, PieceKind::Knight) => '♞',
        (PlayerColor::Black, PieceKind::Bishop) => '♝',
        (PlayerColor::Black, PieceKind::Rook) => '♜',
        (PlayerColor::Black, PieceKind::Queen) => '♛',
        (PlayerColor::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::game_state::absolute_board::AbsoluteBoard;

    #[test]
    fn renders_the_start_position_with_white_below() {
        let rendered = render_board(&AbsoluteBoard::standard());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[4], "5 · · · · · · · · 5");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }
}
