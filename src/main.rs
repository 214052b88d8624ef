use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use passant_chess::engines::engine_greedy::GreedyEngine;
use passant_chess::engines::engine_minimax::MinimaxEngine;
use passant_chess::engines::engine_trait::Engine;
use passant_chess::errors::BoardError;
use passant_chess::search::iterative_deepening::SearchConfig;
use passant_chess::utils::fen_parser::{parse_fen, STARTING_POSITION_FEN};
use passant_chess::utils::render_board::render_board;
use passant_chess::utils::self_play::{play_engine_match_from_board, MatchConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineKind {
    Minimax,
    Greedy,
}

#[derive(Parser)]
#[command(name = "passant-chess")]
#[command(about = "Plays the Passant agents against each other", long_about = None)]
struct Args {
    /// Agent playing White
    #[arg(long, value_enum, default_value_t = EngineKind::Minimax)]
    white: EngineKind,

    /// Agent playing Black
    #[arg(long, value_enum, default_value_t = EngineKind::Greedy)]
    black: EngineKind,

    /// Time budget per move in milliseconds
    #[arg(long, default_value_t = 500)]
    move_time_ms: u64,

    /// Stop the game after this many plies
    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    /// Seed for the greedy agents' tie-breaking
    #[arg(long)]
    seed: Option<u64>,

    /// Stop deepening after a completed pass at this depth
    #[arg(long)]
    max_depth: Option<i32>,

    /// Starting position
    #[arg(long, default_value = STARTING_POSITION_FEN)]
    fen: String,
}

fn build_engine(kind: EngineKind, args: &Args, seed_offset: u64) -> Box<dyn Engine> {
    match kind {
        EngineKind::Minimax => Box::new(MinimaxEngine::new(SearchConfig {
            max_depth: args.max_depth,
            ..SearchConfig::default()
        })),
        EngineKind::Greedy => match args.seed {
            Some(seed) => Box::new(GreedyEngine::with_seed(seed.wrapping_add(seed_offset))),
            None => Box::new(GreedyEngine::new()),
        },
    }
}

fn main() -> Result<(), BoardError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let (board, first) = parse_fen(&args.fen)?;

    let mut white = build_engine(args.white, &args, 0);
    let mut black = build_engine(args.black, &args, 1);
    info!(white = white.name(), black = black.name(), first = %first, "starting game");

    let config = MatchConfig {
        max_plies: args.max_plies,
        move_time: Duration::from_millis(args.move_time_ms),
    };
    let result =
        play_engine_match_from_board(board, first, white.as_mut(), black.as_mut(), &config);

    println!("{}", render_board(&result.final_board));
    println!("{}", result.report());
    Ok(())
}
