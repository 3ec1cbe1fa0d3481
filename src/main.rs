use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use uctbot::board::{CozyGame, Rules};
use uctbot::clock::{GameClock, ManualClock};
use uctbot::mcts::{NodeId, Searcher};
use uctbot::uci::UciEngine;
use uctbot::SearchParams;

#[derive(Parser, Debug)]
#[command(author, version, about = "UCT chess engine; speaks UCI on stdin unless --fen is given", long_about = None)]
struct Args {
    /// JSON file with search parameters; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Spend remaining/N of the clock per move
    #[arg(long)]
    time_divisor: Option<u64>,

    /// Fixed time per move in milliseconds
    #[arg(long)]
    movetime: Option<u64>,

    /// Stop after this many iterations
    #[arg(long)]
    iterations: Option<u64>,

    /// UCT exploration weight
    #[arg(long)]
    exploration: Option<f64>,

    /// Search this position once, print the move and exit
    #[arg(long)]
    fen: Option<String>,

    /// Remaining clock for the one-shot search
    #[arg(long, default_value_t = 60_000)]
    remaining_ms: u64,

    /// Print root statistics after a one-shot search
    #[arg(long)]
    verbose: bool,
}

fn load_params(args: &Args) -> Result<SearchParams> {
    let mut params = match &args.config {
        Some(p) => SearchParams::from_json_file(p).with_context(|| format!("loading {}", p.display()))?,
        None => SearchParams::default(),
    };
    if let Some(d) = args.time_divisor {
        if d == 0 { anyhow::bail!("--time-divisor must be positive"); }
        params.time_divisor = d;
    }
    if args.movetime.is_some() { params.movetime_ms = args.movetime; }
    if args.iterations.is_some() { params.max_iterations = args.iterations; }
    if let Some(c) = args.exploration { params.exploration = c; }
    if !(params.eval.ceiling > 0.0 && params.eval.ceiling < 1.0) {
        anyhow::bail!("eval ceiling must lie in (0, 1), got {}", params.eval.ceiling);
    }
    Ok(params)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let params = load_params(&args)?;

    let Some(fen) = args.fen.as_deref() else {
        let mut engine = UciEngine::new(params);
        engine.run_loop()?;
        return Ok(());
    };

    let mut game = if fen == "startpos" { CozyGame::startpos() } else { CozyGame::from_fen(fen)? };
    let searcher = Searcher::new(params);
    let (tree, res) = if params.max_iterations.is_some() && params.movetime_ms.is_none() {
        searcher.search(&mut game, &ManualClock::frozen())
    } else {
        searcher.search(&mut game, &GameClock::start(Duration::from_millis(args.remaining_ms)))
    };
    if args.verbose {
        println!("{}", tree.statistics_string(NodeId::ROOT, params.exploration, |m| game.move_text(m)));
        println!(
            "iterations={} root_visits={} nodes={} elapsed={}ms",
            res.iterations, res.root_visits, res.tree_nodes, res.elapsed_ms
        );
    }
    match res.best_move {
        Some(m) => println!("bestmove {} mean {:.4}", game.uci(m), res.mean_score),
        None => println!("bestmove 0000"),
    }
    Ok(())
}
