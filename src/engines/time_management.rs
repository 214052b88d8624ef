//! Turn deadline used as the search's time-up predicate.

use std::time::{Duration, Instant};

/// Starts counting on construction; `is_up` turns true once `budget` has
/// elapsed and stays true.
#[derive(Debug, Clone, Copy)]
pub struct TurnClock {
    start: Instant,
    budget: Duration,
}

impl TurnClock {
    pub fn new(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    #[inline]
    pub fn is_up(&self) -> bool {
        self.start.elapsed() >= self.budget
    }
}
