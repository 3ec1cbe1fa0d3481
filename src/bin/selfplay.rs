use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use uctbot::selfplay::{play_game, write_jsonl, SelfPlayParams, Termination};
use uctbot::SearchParams;

#[derive(Parser, Debug)]
#[command(name = "uctbot-selfplay", about = "Play engine-vs-engine games and write them as JSON lines")]
struct Args {
    #[arg(long, default_value_t = 10)]
    games: usize,
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
    #[arg(long, default_value_t = 4)]
    random_plies: usize,
    #[arg(long, default_value_t = 2_000)]
    iterations: u64,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let search = match &a.config {
        Some(p) => SearchParams::from_json_file(p)?,
        None => SearchParams::default(),
    };
    let params = SelfPlayParams {
        games: a.games,
        max_plies: a.max_plies,
        random_plies: a.random_plies,
        iterations: a.iterations,
        seed: a.seed,
        search,
    };

    let pb = ProgressBar::new(a.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}] {msg}")?);
    let mut games = Vec::with_capacity(a.games);
    for gi in 0..a.games {
        let g = play_game(&params, gi);
        pb.set_message(format!("last: {} plies, {:?}", g.moves.len(), g.termination));
        games.push(g);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let mates = games.iter().filter(|g| g.termination == Termination::Checkmate).count();
    let score: i32 = games.iter().map(|g| g.result as i32).sum();
    eprintln!("{} games, {} decisive by mate, white net score {}", games.len(), mates, score);
    write_jsonl(&games, &a.out)?;
    eprintln!("Wrote {}", a.out.display());
    Ok(())
}
