//! Hand-tuned corner mating patterns for king + rook/queen against a king.
//!
//! Coordinates are friend-relative `(column, row)` pairs. Each corner box has
//! a queen-only rule list and a general rule list; within a list the first
//! matching rule wins. Some corners are not exact mirrors of each other and a
//! few rules can never fire because an earlier one covers them. They are kept
//! as tuned.

/// Constraint on a single coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pin {
    Any,
    Is(i32),
    Either(i32, i32),
    Not(i32),
}

impl Pin {
    #[inline]
    const fn matches(self, value: i32) -> bool {
        match self {
            Pin::Any => true,
            Pin::Is(a) => value == a,
            Pin::Either(a, b) => value == a || value == b,
            Pin::Not(a) => value != a,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternEffect {
    /// Discard everything accumulated so far.
    Reset,
    Bonus(i32),
}

#[derive(Debug, Clone, Copy)]
pub struct MatePattern {
    enemy_king: (Pin, Pin),
    king: (Pin, Pin),
    rook: (Pin, Pin),
    rook_only: bool,
    effect: PatternEffect,
}

impl MatePattern {
    fn matches(&self, layout: &EndgameLayout) -> bool {
        let hit = |pin: (Pin, Pin), at: (i32, i32)| pin.0.matches(at.0) && pin.1.matches(at.1);
        (!self.rook_only || !layout.is_queen)
            && hit(self.enemy_king, layout.enemy_king)
            && hit(self.king, layout.king)
            && hit(self.rook, layout.rook)
    }
}

/// Piece coordinates the patterns are matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndgameLayout {
    pub enemy_king: (i32, i32),
    pub king: (i32, i32),
    pub rook: (i32, i32),
    pub is_queen: bool,
}

struct CornerPatterns {
    enemy_king_box: (Pin, Pin),
    queen_rules: &'static [MatePattern],
    rules: &'static [MatePattern],
}

const fn when(
    enemy_king: (Pin, Pin),
    king: (Pin, Pin),
    rook: (Pin, Pin),
    effect: PatternEffect,
) -> MatePattern {
    MatePattern {
        enemy_king,
        king,
        rook,
        rook_only: false,
        effect,
    }
}

const fn rook_only(pattern: MatePattern) -> MatePattern {
    MatePattern {
        rook_only: true,
        ..pattern
    }
}

use self::PatternEffect::{Bonus, Reset};
use self::Pin::{Any, Either, Is, Not};

const ANY: (Pin, Pin) = (Any, Any);

const LOW_COLUMN_HIGH_ROW: CornerPatterns = CornerPatterns {
    enemy_king_box: (Either(0, 1), Either(6, 7)),
    queen_rules: &[
        when(ANY, (Is(0), Any), ANY, Reset),
        when(ANY, (Any, Is(7)), ANY, Reset),
        when((Is(0), Is(7)), ANY, (Is(1), Is(5)), Reset),
        when((Is(0), Is(7)), ANY, (Is(2), Is(6)), Reset),
        when((Is(0), Is(6)), (Is(2), Is(6)), (Is(2), Either(7, 5)), Reset),
        when((Is(1), Is(7)), (Is(1), Is(5)), (Either(2, 0), Is(5)), Reset),
        when((Is(0), Either(6, 7)), (Is(2), Either(5, 6)), (Is(1), Not(7)), Bonus(1000)),
        when((Either(0, 1), Is(7)), (Either(1, 2), Is(5)), (Any, Is(6)), Bonus(1000)),
    ],
    rules: &[
        when((Is(0), Is(7)), (Is(0), Is(5)), ANY, Reset),
        rook_only(when((Is(0), Is(7)), ANY, (Is(1), Is(6)), Reset)),
        when((Is(0), Either(7, 6)), (Is(2), Is(5)), (Is(1), Is(5)), Bonus(500)),
        when((Is(0), Is(7)), (Is(2), Is(5)), (Is(1), Is(5)), Bonus(1000)),
        when((Either(0, 1), Is(7)), (Is(2), Is(5)), (Is(2), Is(6)), Bonus(500)),
        when((Is(1), Is(7)), (Is(1), Is(5)), (Is(2), Is(6)), Bonus(1000)),
        when((Is(0), Is(7)), (Is(1), Is(4)), (Is(2), Is(6)), Bonus(4000)),
        when((Is(0), Is(7)), (Is(3), Is(6)), (Is(1), Is(5)), Bonus(4000)),
        when((Is(0), Is(6)), (Is(2), Is(6)), (Is(1), Is(5)), Bonus(1000)),
    ],
};

const HIGH_COLUMN_HIGH_ROW: CornerPatterns = CornerPatterns {
    enemy_king_box: (Either(7, 6), Either(6, 7)),
    queen_rules: &[
        when(ANY, (Is(7), Any), ANY, Reset),
        when(ANY, (Any, Is(7)), ANY, Reset),
        when((Is(7), Is(7)), ANY, (Is(6), Is(5)), Reset),
        when((Is(7), Is(6)), (Is(5), Is(6)), (Is(5), Either(7, 5)), Reset),
        when((Is(6), Is(7)), (Is(6), Is(5)), (Either(5, 7), Is(5)), Reset),
        when((Is(7), Is(7)), ANY, (Is(5), Is(6)), Reset),
        when((Is(7), Either(6, 7)), (Is(5), Either(5, 6)), (Is(6), Not(7)), Bonus(1000)),
        when((Either(7, 6), Is(7)), (Either(6, 5), Is(5)), (Any, Is(6)), Bonus(1000)),
    ],
    rules: &[
        when((Is(7), Is(7)), (Is(7), Is(5)), (Is(6), Any), Reset),
        rook_only(when((Is(7), Is(7)), ANY, (Is(6), Is(6)), Reset)),
        when((Is(7), Either(7, 6)), (Is(5), Is(5)), (Is(6), Is(5)), Bonus(500)),
        when((Is(7), Is(7)), (Is(5), Is(5)), (Is(6), Is(5)), Bonus(1000)),
        when((Either(7, 6), Is(7)), (Is(5), Is(5)), (Is(5), Is(6)), Bonus(500)),
        when((Is(6), Is(7)), (Is(6), Is(5)), (Is(5), Is(6)), Bonus(1000)),
        when((Is(7), Is(7)), (Is(6), Is(4)), (Is(5), Is(6)), Bonus(4000)),
        when((Is(7), Is(6)), (Is(5), Is(6)), (Is(6), Is(5)), Bonus(1000)),
        when((Is(7), Is(7)), (Is(4), Is(6)), (Is(6), Is(5)), Bonus(4000)),
    ],
};

const HIGH_COLUMN_LOW_ROW: CornerPatterns = CornerPatterns {
    enemy_king_box: (Either(7, 6), Either(1, 0)),
    queen_rules: &[
        when(ANY, (Is(7), Any), ANY, Reset),
        when(ANY, (Any, Is(0)), ANY, Reset),
        when((Is(7), Is(0)), ANY, (Is(6), Is(2)), Reset),
        when((Is(7), Is(1)), (Is(5), Is(1)), (Is(5), Either(0, 2)), Reset),
        when((Is(6), Is(0)), (Is(6), Is(2)), (Either(5, 7), Is(2)), Reset),
        when((Is(7), Is(0)), ANY, (Is(5), Is(1)), Reset),
        when((Is(7), Either(1, 0)), (Is(5), Either(2, 1)), (Is(6), Not(0)), Bonus(1000)),
        when((Either(7, 6), Is(0)), (Either(6, 5), Is(2)), (Any, Is(1)), Bonus(1000)),
    ],
    rules: &[
        when((Is(7), Is(0)), (Is(7), Is(2)), ANY, Reset),
        rook_only(when((Is(7), Is(0)), ANY, (Is(6), Is(1)), Reset)),
        when((Is(7), Either(0, 1)), (Is(5), Is(2)), (Is(6), Is(2)), Bonus(500)),
        when((Is(7), Is(0)), (Is(5), Is(2)), (Is(6), Is(2)), Bonus(1000)),
        when((Either(7, 6), Is(0)), (Is(5), Is(2)), (Is(5), Is(1)), Bonus(500)),
        when((Is(6), Is(0)), (Is(6), Is(2)), (Is(5), Is(1)), Bonus(1000)),
        when((Is(7), Is(0)), (Is(6), Is(3)), (Is(5), Is(1)), Bonus(4000)),
        when((Is(7), Is(1)), (Is(5), Is(1)), (Is(6), Is(2)), Bonus(1000)),
        when((Is(7), Is(0)), (Is(4), Is(1)), (Is(6), Is(2)), Bonus(4000)),
    ],
};

const LOW_COLUMN_LOW_ROW: CornerPatterns = CornerPatterns {
    enemy_king_box: (Either(0, 1), Either(1, 0)),
    queen_rules: &[
        when(ANY, (Is(0), Any), ANY, Reset),
        when(ANY, (Any, Is(0)), ANY, Reset),
        when((Is(0), Is(0)), ANY, (Is(1), Is(2)), Reset),
        when((Is(0), Is(1)), (Is(2), Is(1)), (Is(2), Either(0, 2)), Reset),
        when((Is(1), Is(0)), (Is(1), Is(2)), (Either(2, 0), Is(2)), Reset),
        when((Is(0), Is(0)), ANY, (Is(2), Is(1)), Reset),
        when((Is(0), Either(1, 0)), (Is(2), Either(2, 1)), (Is(1), Not(0)), Bonus(1000)),
        when((Either(0, 1), Is(0)), (Either(1, 2), Is(2)), (Any, Is(1)), Bonus(1000)),
    ],
    rules: &[
        when((Is(0), Is(0)), (Is(0), Is(2)), ANY, Reset),
        rook_only(when((Is(0), Is(0)), ANY, (Is(1), Is(1)), Reset)),
        when((Is(0), Either(0, 1)), (Is(2), Is(2)), (Is(1), Is(2)), Bonus(500)),
        when((Is(0), Is(0)), (Is(2), Is(2)), (Is(1), Is(2)), Bonus(1000)),
        when((Either(0, 1), Is(0)), (Is(2), Is(2)), (Is(2), Is(1)), Bonus(500)),
        when((Is(1), Is(0)), (Is(1), Is(2)), (Is(2), Is(1)), Bonus(1000)),
        when((Is(0), Is(0)), (Is(1), Is(3)), (Is(2), Is(1)), Bonus(4000)),
        when((Is(0), Is(1)), (Is(2), Is(1)), (Is(1), Is(2)), Bonus(1000)),
        when((Is(0), Is(0)), (Is(3), Is(1)), (Is(1), Is(2)), Bonus(4000)),
    ],
};

/// Corners in the order they are tried; only the first box holding the
/// enemy king applies.
static CORNERS: [CornerPatterns; 4] = [
    LOW_COLUMN_HIGH_ROW,
    HIGH_COLUMN_HIGH_ROW,
    HIGH_COLUMN_LOW_ROW,
    LOW_COLUMN_LOW_ROW,
];

fn apply_first(result: i32, rules: &[MatePattern], layout: &EndgameLayout) -> i32 {
    match rules
        .iter()
        .find(|rule| rule.matches(layout))
        .map(|rule| rule.effect)
    {
        Some(Reset) => 0,
        Some(Bonus(bonus)) => result + bonus,
        None => result,
    }
}

/// Applies the corner pattern adjustments to an accumulated endgame score.
pub fn corner_adjustment(result: i32, layout: &EndgameLayout) -> i32 {
    let (ek_col, ek_row) = layout.enemy_king;
    let Some(corner) = CORNERS.iter().find(|corner| {
        corner.enemy_king_box.0.matches(ek_col) && corner.enemy_king_box.1.matches(ek_row)
    }) else {
        return result;
    };

    let mut result = result;
    if layout.is_queen {
        result = apply_first(result, corner.queen_rules, layout);
    }
    apply_first(result, corner.rules, layout)
}
