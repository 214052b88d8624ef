//! Minimal head-to-head engine match harness.
//!
//! Stands in for a host: alternates two `Engine`s on an absolute board, has
//! each move refereed by the opponent, and stops on a checkmate or stalemate
//! flag, a rejected move, or the ply cap.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::engines::engine_trait::Engine;
use crate::engines::time_management::TurnClock;
use crate::game_state::absolute_board::{AbsoluteBoard, GameMove, PlayerColor};
use crate::game_state::chess_types::MoveFlag;
use crate::utils::render_board::render_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    /// The opponent refused the move `offender` played.
    InvalidMove { offender: PlayerColor },
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub move_time: Duration,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            move_time: Duration::from_millis(250),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: AbsoluteBoard,
    pub played_moves: Vec<GameMove>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

impl MatchResult {
    pub fn report(&self) -> String {
        format!(
            "outcome={:?} plies={} white_avg_ms={:.3} black_avg_ms={:.3}",
            self.outcome,
            self.played_moves.len(),
            average_ms(self.white_total_time_ns, self.white_move_count),
            average_ms(self.black_total_time_ns, self.black_move_count),
        )
    }
}

fn average_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        total_ns as f64 / f64::from(moves) / 1_000_000.0
    }
}

/// Plays a match from the standard start, White first.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> MatchResult {
    play_engine_match_from_board(
        AbsoluteBoard::standard(),
        PlayerColor::White,
        engine_white,
        engine_black,
        config,
    )
}

/// Plays a match from `start`, with `first` to move.
pub fn play_engine_match_from_board(
    start: AbsoluteBoard,
    first: PlayerColor,
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> MatchResult {
    engine_white.new_game();
    engine_black.new_game();

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_board: start,
        played_moves: Vec::new(),
        white_move_count: 0,
        black_move_count: 0,
        white_total_time_ns: 0,
        black_total_time_ns: 0,
    };
    let mut mover = first;

    for ply in 0..config.max_plies {
        let clock = TurnClock::new(config.move_time);
        let time_up = || clock.is_up();
        let started = Instant::now();
        let chosen = match mover {
            PlayerColor::White => engine_white.choose_move(&result.final_board, mover, &time_up),
            PlayerColor::Black => engine_black.choose_move(&result.final_board, mover, &time_up),
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            PlayerColor::White => {
                result.white_move_count = result.white_move_count.saturating_add(1);
                result.white_total_time_ns = result.white_total_time_ns.saturating_add(elapsed_ns);
            }
            PlayerColor::Black => {
                result.black_move_count = result.black_move_count.saturating_add(1);
                result.black_total_time_ns = result.black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let (engine, referee): (&dyn Engine, &dyn Engine) = match mover {
            PlayerColor::White => (&*engine_white, &*engine_black),
            PlayerColor::Black => (&*engine_black, &*engine_white),
        };
        if referee
            .is_valid_move(&result.final_board, &chosen, mover)
            .is_err()
        {
            result.outcome = MatchOutcome::InvalidMove { offender: mover };
            break;
        }

        if chosen.is_stalemate() {
            result.outcome = MatchOutcome::DrawStalemate;
            break;
        }

        info!(ply, mover = %mover, engine = engine.name(), chosen = %chosen, "played");
        result.final_board.apply_game_move(&chosen);
        result.played_moves.push(chosen);
        debug!("\n{}", render_board(&result.final_board));

        if chosen.flag == MoveFlag::Checkmate {
            result.outcome = match mover {
                PlayerColor::White => MatchOutcome::WhiteWinCheckmate,
                PlayerColor::Black => MatchOutcome::BlackWinCheckmate,
            };
            break;
        }

        mover = mover.opposite();
    }

    result
}
