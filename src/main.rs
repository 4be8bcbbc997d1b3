use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use taperbot::board::Position;
use taperbot::clock::Clock;
use taperbot::eval::{Evaluator, Material, Tapered};
use taperbot::search::{SearchResult, Searcher, MAX_DEPTH};
use taperbot::uci::UciEngine;

#[derive(Parser, Debug)]
#[command(author, version, about = "Pick a move for a chess position under a time budget", long_about = None)]
struct Args {
    /// Starting FEN position (default: the standard opening position)
    #[arg(long)]
    fen: Option<String>,

    /// UCI moves to apply after the starting position
    #[arg(long, num_args = 0.., value_name = "MOVE")]
    moves: Vec<String>,

    /// Remaining game time in milliseconds (engine spends ~1/30th of it)
    #[arg(long)]
    remaining_ms: Option<u64>,

    /// Fixed time for this move in milliseconds
    #[arg(long, default_value_t = 1000)]
    movetime_ms: u64,

    /// Cap the iterative-deepening depth
    #[arg(long)]
    depth: Option<i32>,

    /// Evaluation function to search with
    #[arg(long, value_enum, default_value = "tapered")]
    eval: EvalKind,

    /// Run as a UCI engine on stdin/stdout
    #[arg(long)]
    uci: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EvalKind {
    Tapered,
    Material,
}

fn solve<E: Evaluator>(eval: E, pos: &Position, clock: &Clock, depth: i32) -> SearchResult {
    let mut searcher = Searcher::new(eval);
    searcher.think_to_depth(pos, clock, depth)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.uci {
        UciEngine::new().run_loop();
        return Ok(());
    }

    let mut pos = match &args.fen {
        Some(fen) => Position::from_fen(fen)?,
        None => Position::startpos(),
    };
    for m in &args.moves {
        pos.play_uci(m)?;
    }

    let clock = match args.remaining_ms {
        Some(ms) => Clock::budget(Duration::from_millis(ms)),
        None => Clock::movetime(Duration::from_millis(args.movetime_ms)),
    };
    let depth = args.depth.unwrap_or(MAX_DEPTH);

    let res = match args.eval {
        EvalKind::Tapered => solve(Tapered::new(), &pos, &clock, depth),
        EvalKind::Material => solve(Material, &pos, &clock, depth),
    };

    log::info!("searched {} nodes to depth {}", res.nodes, res.depth);
    match res.best {
        Some(best) => println!("bestmove {best} score cp {}", res.score),
        None => anyhow::bail!("no legal moves in this position"),
    }
    Ok(())
}
