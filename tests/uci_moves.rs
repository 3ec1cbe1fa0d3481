use cozy_chess::Color;
use uctbot::board::{CozyGame, Rules};
use uctbot::uci::{GoArgs, UciEngine};
use uctbot::SearchParams;

fn run(engine: &mut UciEngine, lines: &[&str]) -> String {
    let mut out = Vec::new();
    for l in lines { engine.handle_line(l, &mut out).expect("write to vec"); }
    String::from_utf8(out).expect("utf8")
}

#[test]
fn apply_startpos_moves_sequence() {
    let moves = vec!["e2e4".to_string(), "e7e5".to_string(), "g1f3".to_string()];
    let g = CozyGame::set_from_fen_and_moves(None, &moves).expect("legal move sequence");
    assert_eq!(g.side_to_move(), Color::Black, "expected black to move after 3 plies");
}

#[test]
fn handshake() {
    let mut e = UciEngine::default();
    let out = run(&mut e, &["uci", "isready"]);
    assert!(out.contains("uciok"));
    assert!(out.trim_end().ends_with("readyok"));
}

#[test]
fn position_then_go_nodes_returns_legal_move() {
    let mut e = UciEngine::default();
    let out = run(&mut e, &["position startpos moves e2e4 e7e5", "go nodes 300"]);
    let line = out.lines().find(|l| l.starts_with("bestmove ")).expect("bestmove line");
    let mv = line.trim_start_matches("bestmove ").trim();
    assert!(e.game().find_move_uci(mv).is_some(), "illegal bestmove {mv}");
    assert!(out.contains("info nodes 300 "));
}

#[test]
fn bestmove_uses_standard_castling_text() {
    // Whatever gets picked, castling must never go out in king-takes-rook form.
    let mut e = UciEngine::new(SearchParams { exploration: 0.0, ..SearchParams::default() });
    let out = run(&mut e, &["position fen 4k3/8/8/8/8/8/8/4K2R w K - 0 1", "go nodes 200"]);
    let line = out.lines().find(|l| l.starts_with("bestmove ")).unwrap();
    assert!(!line.contains("e1h1"), "cozy castling text leaked: {line}");
}

#[test]
fn mated_root_reports_null_move() {
    let mut e = UciEngine::default();
    let out = run(&mut e, &["position fen R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1", "go nodes 10"]);
    assert!(out.contains("bestmove 0000"));
}

#[test]
fn bad_position_keeps_previous_game() {
    let mut e = UciEngine::default();
    run(&mut e, &["position startpos moves e2e4", "position startpos moves e2e5"]);
    assert_eq!(e.game().ply(), 1);
}

#[test]
fn fen_without_clock_fields_accepts_moves() {
    let mut e = UciEngine::default();
    run(&mut e, &["position fen 4k3/8/8/8/8/8/4P3/4K3 w - - moves e2e4"]);
    assert_eq!(e.game().ply(), 1);
    assert_eq!(e.game().side_to_move(), Color::Black);
}

#[test]
fn full_fen_then_moves() {
    let mut e = UciEngine::default();
    run(&mut e, &["position fen 4k3/8/8/8/8/8/4P3/4K3 w - - 0 1 moves e2e4 e8d7"]);
    assert_eq!(e.game().ply(), 2);
}

#[test]
fn go_args_parse() {
    let go = GoArgs::parse(" wtime 1000 btime 2000 winc 10 movetime 50 nodes 7");
    assert_eq!(go, GoArgs { wtime: Some(1000), btime: Some(2000), movetime: Some(50), nodes: Some(7) });
}

#[test]
fn quit_stops_the_loop() {
    let mut e = UciEngine::default();
    let mut out = Vec::new();
    assert!(!e.handle_line("quit", &mut out).unwrap());
}
