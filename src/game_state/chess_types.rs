//! Shared primitive types for the friend-relative engine core.
//!
//! Board states are `i8` grids: `0` is empty, magnitudes `1..=6` name the
//! piece kind, and the sign tells friend (side to move, positive) from foe
//! (negative).

use std::fmt;

pub const COLUMNS: usize = 8;
pub const ROWS: usize = 8;

pub const EMPTY: i8 = 0;
pub const PAWN: i8 = 1;
pub const KNIGHT: i8 = 2;
pub const BISHOP: i8 = 3;
pub const ROOK: i8 = 4;
pub const QUEEN: i8 = 5;
pub const KING: i8 = 6;

/// Piece kind (color is carried separately, by sign or by `PlayerColor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn code(self) -> i8 {
        match self {
            PieceKind::Pawn => PAWN,
            PieceKind::Knight => KNIGHT,
            PieceKind::Bishop => BISHOP,
            PieceKind::Rook => ROOK,
            PieceKind::Queen => QUEEN,
            PieceKind::King => KING,
        }
    }

    /// Kind of a signed piece code, ignoring the sign.
    #[inline]
    pub const fn from_code(code: i8) -> Option<Self> {
        match code.unsigned_abs() as i8 {
            PAWN => Some(PieceKind::Pawn),
            KNIGHT => Some(PieceKind::Knight),
            BISHOP => Some(PieceKind::Bishop),
            ROOK => Some(PieceKind::Rook),
            QUEEN => Some(PieceKind::Queen),
            KING => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Board coordinate. `x` is the column, `y` the row; both in `0..8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub x: u8,
    pub y: u8,
}

impl Square {
    #[inline]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Square displaced by `(dx, dy)`, or `None` when it falls off the board.
    #[inline]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Square> {
        let x = self.x as i8 + dx;
        let y = self.y as i8 + dy;
        if (0..COLUMNS as i8).contains(&x) && (0..ROWS as i8).contains(&y) {
            Some(Square::new(x as u8, y as u8))
        } else {
            None
        }
    }

    /// 180 degree rotation: `(x, y) -> (COLUMNS - 1 - x, ROWS - 1 - y)`.
    #[inline]
    pub const fn rotated(self) -> Square {
        Square::new(COLUMNS as u8 - 1 - self.x, ROWS as u8 - 1 - self.y)
    }

    /// All squares in row-major order (row 0 first, columns left to right).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..ROWS as u8).flat_map(|y| (0..COLUMNS as u8).map(move |x| Square::new(x, y)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Annotation attached to a move by the generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MoveFlag {
    #[default]
    None,
    Check,
    Checkmate,
    Stalemate,
}

impl fmt::Display for MoveFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveFlag::None => "none",
            MoveFlag::Check => "check",
            MoveFlag::Checkmate => "checkmate",
            MoveFlag::Stalemate => "stalemate",
        };
        f.write_str(name)
    }
}

/// A move in friend-relative coordinates.
///
/// Identity for equality is `(from, to, flag)`; `value` is the evaluator's
/// score and does not take part in comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub flag: MoveFlag,
    pub value: i32,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            flag: MoveFlag::None,
            value: 0,
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.flag == other.flag
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)?;
        if self.flag != MoveFlag::None {
            write!(f, " [{}]", self.flag)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, MoveFlag, PieceKind, Square, QUEEN};

    #[test]
    fn offset_stays_on_board() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, 2), Some(Square::new(1, 2)));
        assert_eq!(Square::new(7, 7).offset(1, 1), None);
    }

    #[test]
    fn rotation_is_an_involution() {
        for sq in Square::all() {
            assert_eq!(sq.rotated().rotated(), sq);
        }
        assert_eq!(Square::new(0, 0).rotated(), Square::new(7, 7));
        assert_eq!(Square::new(2, 5).rotated(), Square::new(5, 2));
    }

    #[test]
    fn squares_are_listed_row_major() {
        let first: Vec<Square> = Square::all().take(9).collect();
        assert_eq!(first[0], Square::new(0, 0));
        assert_eq!(first[7], Square::new(7, 0));
        assert_eq!(first[8], Square::new(0, 1));
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn piece_kind_ignores_sign() {
        assert_eq!(PieceKind::from_code(-QUEEN), Some(PieceKind::Queen));
        assert_eq!(PieceKind::from_code(QUEEN), Some(PieceKind::Queen));
        assert_eq!(PieceKind::from_code(0), None);
    }

    #[test]
    fn move_equality_ignores_value() {
        let mut a = Move::new(Square::new(1, 1), Square::new(1, 3));
        let mut b = a;
        a.value = 10;
        b.value = -4;
        assert_eq!(a, b);
        b.flag = MoveFlag::Check;
        assert_ne!(a, b);
    }
}
