//! Host-facing board and move types.
//!
//! The host addresses squares absolutely: `x` is the file, `y = 0` is Black's
//! back rank and `y = 7` is White's. White is therefore the color that has to
//! be mirrored into the friend-relative view.

use std::fmt;

use crate::game_state::chess_types::*;

/// Side to move, in the host's absolute terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerColor {
    White,
    Black,
}

impl PlayerColor {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            PlayerColor::White => PlayerColor::Black,
            PlayerColor::Black => PlayerColor::White,
        }
    }

    /// True for the color whose pieces start at the high-index corner.
    #[inline]
    pub const fn is_mirrored(self) -> bool {
        matches!(self, PlayerColor::White)
    }

    /// Row a pawn of this color promotes on.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            PlayerColor::White => 0,
            PlayerColor::Black => ROWS as u8 - 1,
        }
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerColor::White => f.write_str("white"),
            PlayerColor::Black => f.write_str("black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: PlayerColor,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: PlayerColor, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// Absolute 8x8 board as the host sees it, indexed `[x][y]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsoluteBoard {
    squares: [[Option<Piece>; ROWS]; COLUMNS],
}

impl Default for AbsoluteBoard {
    fn default() -> Self {
        Self::empty()
    }
}

const BACK_RANK: [PieceKind; COLUMNS] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl AbsoluteBoard {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; ROWS]; COLUMNS],
        }
    }

    /// Standard starting layout.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (x, kind) in BACK_RANK.iter().enumerate() {
            let x = x as u8;
            board.set(Square::new(x, 0), Some(Piece::new(PlayerColor::Black, *kind)));
            board.set(Square::new(x, 1), Some(Piece::new(PlayerColor::Black, PieceKind::Pawn)));
            board.set(Square::new(x, 6), Some(Piece::new(PlayerColor::White, PieceKind::Pawn)));
            board.set(Square::new(x, 7), Some(Piece::new(PlayerColor::White, *kind)));
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.x as usize][square.y as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.x as usize][square.y as usize] = piece;
    }

    /// Occupied squares with their pieces, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Plays a host move. Stalemate moves (no squares) leave the board as is.
    ///
    /// A pawn that lands on its color's far row becomes a queen; no other
    /// special rule applies.
    pub fn apply_game_move(&mut self, game_move: &GameMove) {
        let (Some(from), Some(to)) = (game_move.from, game_move.to) else {
            return;
        };
        let Some(mut piece) = self.get(from) else {
            return;
        };
        if piece.kind == PieceKind::Pawn && to.y == piece.color.promotion_row() {
            piece.kind = PieceKind::Queen;
        }
        self.set(from, None);
        self.set(to, Some(piece));
    }
}

/// A move in the host's absolute coordinates.
///
/// Stalemate moves carry no squares. Equality compares `(from, to, flag)`.
#[derive(Debug, Clone, Copy)]
pub struct GameMove {
    pub from: Option<Square>,
    pub to: Option<Square>,
    pub flag: MoveFlag,
    pub value: i32,
}

impl GameMove {
    pub const fn new(from: Square, to: Square, flag: MoveFlag) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            flag,
            value: 0,
        }
    }

    pub const fn stalemate() -> Self {
        Self {
            from: None,
            to: None,
            flag: MoveFlag::Stalemate,
            value: 0,
        }
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.flag == MoveFlag::Stalemate
    }
}

impl PartialEq for GameMove {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.flag == other.flag
    }
}

impl Eq for GameMove {}

impl fmt::Display for GameMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.from, self.to) {
            (Some(from), Some(to)) => write!(f, "{from} -> {to}")?,
            _ => f.write_str("(no move)")?,
        }
        if self.flag != MoveFlag::None {
            write!(f, " [{}]", self.flag)?;
        }
        Ok(())
    }
}
