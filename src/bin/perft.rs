use anyhow::Context;
use clap::Parser;
use std::time::Instant;
use uctbot::board::CozyGame;
use uctbot::perft::perft;

#[derive(Parser, Debug)]
#[command(name = "perft", about = "Perft driver for uctbot's rules adapter")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// FEN string or "startpos"
    #[arg(value_name = "FEN", default_value = "startpos")]
    fen: String,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut game = if args.fen == "startpos" {
        CozyGame::startpos()
    } else {
        CozyGame::from_fen(&args.fen).context("parsing FEN")?
    };
    let t0 = Instant::now();
    let nodes = perft(&mut game, args.depth);
    let dt = t0.elapsed().as_secs_f64();
    if args.nps {
        let nps = if dt > 0.0 { nodes as f64 / dt } else { 0.0 };
        println!("nodes: {} elapsed: {:.3}s nps: {:.0}", nodes, dt, nps);
    } else {
        println!("nodes: {}", nodes);
    }
    Ok(())
}
