use std::io::{self, BufRead, Write};
use std::time::Duration;
use cozy_chess::Color;
use log::warn;
use crate::board::{CozyGame, Rules};
use crate::clock::{GameClock, ManualClock};
use crate::config::SearchParams;
use crate::mcts::Searcher;

/// Remaining time assumed when `go` carries no clock information.
const DEFAULT_REMAINING_MS: u64 = 60_000;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GoArgs {
    pub wtime: Option<u64>,
    pub btime: Option<u64>,
    pub movetime: Option<u64>,
    pub nodes: Option<u64>,
}

impl GoArgs {
    pub fn parse(args: &str) -> Self {
        let mut go = GoArgs::default();
        let mut tokens = args.split_whitespace();
        while let Some(tok) = tokens.next() {
            let slot = match tok {
                "wtime" => &mut go.wtime,
                "btime" => &mut go.btime,
                "movetime" => &mut go.movetime,
                "nodes" => &mut go.nodes,
                _ => continue,
            };
            *slot = tokens.next().and_then(|s| s.parse::<u64>().ok());
        }
        go
    }

    fn remaining_ms(&self, stm: Color) -> u64 {
        let own = if stm == Color::White { self.wtime } else { self.btime };
        own.unwrap_or(DEFAULT_REMAINING_MS)
    }
}

pub struct UciEngine {
    game: CozyGame,
    searcher: Searcher,
}

impl Default for UciEngine {
    fn default() -> Self { Self::new(SearchParams::default()) }
}

impl UciEngine {
    pub fn new(params: SearchParams) -> Self { Self { game: CozyGame::startpos(), searcher: Searcher::new(params) } }

    pub fn game(&self) -> &CozyGame { &self.game }

    fn cmd_uci<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name uctbot")?;
        writeln!(out, "id author uctbot Team")?;
        writeln!(out, "uciok")
    }

    fn cmd_position(&mut self, args: &str) {
        // 'position startpos [moves ...]' | 'position fen <fields> [moves ...]'
        let mut tokens = args.split_whitespace();
        let fen = match tokens.next() {
            Some("startpos") => None,
            // Clocks may be omitted, so read fields up to 'moves' rather than a fixed six.
            Some("fen") => {
                let mut fields: Vec<&str> = tokens.by_ref().take_while(|&t| t != "moves").collect();
                // EPD-style 4 fields: pad halfmove/fullmove
                if fields.len() == 4 { fields.extend(["0", "1"]); }
                Some(fields.join(" "))
            }
            _ => { warn!("unsupported position command: {args}"); return; }
        };
        if fen.is_none() && tokens.next().is_some_and(|t| t != "moves") {
            warn!("unsupported position command: {args}");
            return;
        }
        let moves: Vec<String> = tokens.map(|s| s.to_string()).collect();
        match CozyGame::set_from_fen_and_moves(fen.as_deref(), &moves) {
            Ok(g) => self.game = g,
            Err(e) => warn!("ignoring position: {e}"),
        }
    }

    fn cmd_go<W: Write>(&mut self, args: &str, out: &mut W) -> io::Result<()> {
        let go = GoArgs::parse(args);
        let mut params = *self.searcher.params();
        if go.movetime.is_some() { params.movetime_ms = go.movetime; }
        if go.nodes.is_some() { params.max_iterations = go.nodes; }
        let searcher = Searcher::new(params);

        // Castling text depends on the root position, so keep a copy for output.
        let root = self.game.clone();
        let res = if go.nodes.is_some() && go.movetime.is_none() && go.wtime.is_none() && go.btime.is_none() {
            searcher.choose_move(&mut self.game, &ManualClock::frozen())
        } else {
            let remaining = go.remaining_ms(self.game.side_to_move());
            searcher.choose_move(&mut self.game, &GameClock::start(Duration::from_millis(remaining)))
        };
        writeln!(out, "info nodes {} time {} string mean {:.4}", res.iterations, res.elapsed_ms, res.mean_score)?;
        match res.best_move {
            Some(m) => writeln!(out, "bestmove {}", root.uci(m)),
            None => writeln!(out, "bestmove 0000"),
        }
    }

    /// Handle one input line; returns false on `quit`.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<bool> {
        let line = line.trim();
        match line {
            "" => {}
            "uci" => self.cmd_uci(out)?,
            "isready" => writeln!(out, "readyok")?,
            "ucinewgame" => self.game = CozyGame::startpos(),
            "quit" => return Ok(false),
            "stop" => {}
            _ => {
                if let Some(rest) = line.strip_prefix("position ") { self.cmd_position(rest); }
                else if line == "go" { self.cmd_go("", out)?; }
                else if let Some(rest) = line.strip_prefix("go ") { self.cmd_go(rest, out)?; }
                else { warn!("unknown command: {line}"); }
            }
        }
        out.flush()?;
        Ok(true)
    }

    pub fn run_loop(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for line in stdin.lock().lines() {
            if !self.handle_line(&line?, &mut out)? { break; }
        }
        Ok(())
    }
}
