//! Recent-move memory used to break back-and-forth shuffles.

use std::collections::VecDeque;

use crate::game_state::absolute_board::GameMove;

/// Bounded FIFO of the engine's own recent moves plus a rotating index into
/// the ranked move list.
#[derive(Debug, Clone)]
pub struct MoveHistory {
    recent: VecDeque<GameMove>,
    capacity: usize,
    rotation: usize,
}

impl MoveHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            recent: VecDeque::with_capacity(capacity),
            capacity,
            rotation: 0,
        }
    }

    pub fn contains(&self, game_move: &GameMove) -> bool {
        self.recent.contains(game_move)
    }

    /// Number of remembered moves.
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    #[inline]
    pub fn rotation(&self) -> usize {
        self.rotation
    }

    /// Remembers `game_move`, evicting the oldest entries past capacity.
    pub fn record(&mut self, game_move: GameMove) {
        self.recent.push_back(game_move);
        while self.recent.len() > self.capacity {
            self.recent.pop_front();
        }
    }

    /// Picks from `ranked` (best first) and records the pick.
    ///
    /// If the top move was played recently the rotation index advances and
    /// the move at `rotation % len` is taken instead; otherwise the index
    /// resets and the top move is taken.
    pub fn select(&mut self, ranked: &[GameMove]) -> Option<GameMove> {
        let top = ranked.first()?;
        if self.contains(top) {
            self.rotation += 1;
        } else {
            self.rotation = 0;
        }
        let chosen = ranked[self.rotation % ranked.len()];
        self.record(chosen);
        Some(chosen)
    }

    pub fn clear(&mut self) {
        self.recent.clear();
        self.rotation = 0;
    }
}
