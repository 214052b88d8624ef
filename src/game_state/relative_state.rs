//! Friend-relative board state.
//!
//! The side to move always owns the positive codes and always starts near
//! `(0, 0)`. Every time the side to move changes, the search re-establishes
//! that orientation with [`RelativeState::enemy_state`], so move generation
//! and scoring only ever have to be written for one side.

use crate::game_state::absolute_board::{AbsoluteBoard, GameMove, PlayerColor};
use crate::game_state::chess_types::*;

/// 8x8 grid of signed piece codes, indexed `[x][y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RelativeState {
    grid: [[i8; ROWS]; COLUMNS],
}

impl Default for RelativeState {
    fn default() -> Self {
        Self::empty()
    }
}

impl RelativeState {
    pub const fn empty() -> Self {
        Self {
            grid: [[EMPTY; ROWS]; COLUMNS],
        }
    }

    /// Builds the view of `board` as seen by `color`.
    ///
    /// Mirrored colors get both axes flipped; pieces not owned by `color`
    /// are negated.
    pub fn from_absolute(board: &AbsoluteBoard, color: PlayerColor) -> Self {
        let mut state = Self::empty();
        for (square, piece) in board.pieces() {
            let target = if color.is_mirrored() {
                square.rotated()
            } else {
                square
            };
            let code = piece.kind.code();
            state.set(target, if piece.color == color { code } else { -code });
        }
        state
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> i8 {
        self.grid[square.x as usize][square.y as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, code: i8) {
        self.grid[square.x as usize][square.y as usize] = code;
    }

    /// First square (row-major) holding exactly `code`.
    pub fn locate(&self, code: i8) -> Option<Square> {
        Square::all().find(|sq| self.piece_at(*sq) == code)
    }

    /// Occupied squares with their codes, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, i8)> + '_ {
        Square::all().filter_map(|sq| {
            let code = self.piece_at(sq);
            (code != EMPTY).then_some((sq, code))
        })
    }

    /// The same position seen from the opponent: rotated 180 degrees with
    /// every code negated. Applying it twice returns the original state.
    pub fn enemy_state(&self) -> Self {
        let mut enemy = Self::empty();
        for square in Square::all() {
            enemy.set(square, -self.piece_at(square.rotated()));
        }
        enemy
    }

    /// Copy of the state with `mv` played. A friend pawn reaching the far
    /// row becomes a queen.
    pub fn apply_move(&self, mv: &Move) -> Self {
        let mut next = *self;
        let mut moving = next.piece_at(mv.from);
        if moving == PAWN && mv.to.y as usize == ROWS - 1 {
            moving = QUEEN;
        }
        next.set(mv.to, moving);
        next.set(mv.from, EMPTY);
        next
    }

    /// Number of occupied squares.
    pub fn piece_count(&self) -> usize {
        self.occupied().count()
    }
}

/// Converts a friend-relative move back into host coordinates for `color`.
pub fn get_game_move(mv: &Move, color: PlayerColor) -> GameMove {
    let (from, to) = if color.is_mirrored() {
        (mv.from.rotated(), mv.to.rotated())
    } else {
        (mv.from, mv.to)
    };
    GameMove {
        from: Some(from),
        to: Some(to),
        flag: mv.flag,
        value: mv.value,
    }
}
