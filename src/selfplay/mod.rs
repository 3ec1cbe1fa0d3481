use cozy_chess::{Color, Move};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use crate::board::{CozyGame, Rules};
use crate::clock::ManualClock;
use crate::config::SearchParams;
use crate::error::EngineError;
use crate::mcts::Searcher;

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub random_plies: usize, // uniformly random opening moves before the engine takes over
    pub iterations: u64,     // search iterations per engine move
    pub seed: u64,
    pub search: SearchParams,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 10, max_plies: 200, random_plies: 4, iterations: 2_000, seed: 42, search: SearchParams::default() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Termination {
    Checkmate,
    Draw,
    MaxPlies,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<String>,
    pub result: i8, // 1 white win, 0 draw/unfinished, -1 black win
    pub termination: Termination,
}

pub fn generate_games(params: &SelfPlayParams) -> Vec<GameRecord> {
    (0..params.games).map(|gi| play_game(params, gi)).collect()
}

pub fn play_game(params: &SelfPlayParams, game_index: usize) -> GameRecord {
    let mut rng = SmallRng::seed_from_u64(params.seed ^ game_index as u64);
    let searcher = Searcher::new(SearchParams { max_iterations: Some(params.iterations.max(1)), ..params.search });
    let clock = ManualClock::frozen();
    let mut game = CozyGame::startpos();
    let mut moves = Vec::new();

    let (result, termination) = loop {
        if game.is_checkmate() {
            let result = if game.side_to_move() == Color::White { -1 } else { 1 };
            break (result, Termination::Checkmate);
        }
        if game.is_draw() { break (0, Termination::Draw); }
        if moves.len() >= params.max_plies { break (0, Termination::MaxPlies); }

        let mv = if moves.len() < params.random_plies {
            select_random_move(&game, &mut rng)
        } else {
            searcher.choose_move(&mut game, &clock).best_move
        };
        let Some(m) = mv else { break (0, Termination::Draw) };
        moves.push(game.uci(m));
        game.apply_move(m);
    };
    GameRecord { moves, result, termination }
}

fn select_random_move(game: &CozyGame, rng: &mut SmallRng) -> Option<Move> {
    let mut moves = Vec::new();
    game.legal_moves(&mut moves);
    if moves.is_empty() { None } else { Some(moves[rng.gen_range(0..moves.len())]) }
}

pub fn write_jsonl<P: AsRef<Path>>(games: &[GameRecord], path: P) -> Result<(), EngineError> {
    if let Some(dir) = path.as_ref().parent() {
        if !dir.as_os_str().is_empty() { create_dir_all(dir)?; }
    }
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>, EngineError> {
    let rdr = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in rdr.lines() {
        let line = line?;
        let l = line.trim();
        if l.is_empty() { continue; }
        out.push(serde_json::from_str(l)?);
    }
    Ok(out)
}

/// Replay a record's moves from the start position.
pub fn replay(record: &GameRecord) -> Result<CozyGame, EngineError> {
    CozyGame::set_from_fen_and_moves(None, &record.moves)
}
