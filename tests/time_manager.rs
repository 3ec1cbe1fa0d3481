use std::time::{Duration, Instant};
use uctbot::board::CozyGame;
use uctbot::clock::GameClock;
use uctbot::mcts::Searcher;
use uctbot::SearchParams;

#[test]
fn thirtieth_of_remaining_bounds_the_decision() {
    let mut g = CozyGame::startpos();
    let t0 = Instant::now();
    // 600ms left -> 20ms budget.
    let res = Searcher::default().choose_move(&mut g, &GameClock::start(Duration::from_millis(600)));
    let elapsed = t0.elapsed();
    assert!(res.best_move.is_some(), "no bestmove under clock");
    assert!(res.iterations >= 1);
    assert!(elapsed < Duration::from_millis(500), "search exceeded time: {:?}", elapsed);
}

#[test]
fn movetime_overrides_clock_share() {
    let mut g = CozyGame::startpos();
    let s = Searcher::new(SearchParams { movetime_ms: Some(10), ..SearchParams::default() });
    let t0 = Instant::now();
    // A whole hour left would allow two minutes without the override.
    let res = s.choose_move(&mut g, &GameClock::start(Duration::from_secs(3600)));
    assert!(res.best_move.is_some());
    assert!(t0.elapsed() < Duration::from_millis(500));
    assert!(res.elapsed_ms >= 10);
}

#[test]
fn empty_clock_still_answers() {
    let mut g = CozyGame::startpos();
    let res = Searcher::default().choose_move(&mut g, &GameClock::start(Duration::ZERO));
    assert_eq!(res.iterations, 1);
    assert!(res.best_move.is_some());
}
