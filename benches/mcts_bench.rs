use criterion::{black_box, criterion_group, criterion_main, Criterion};
use uctbot::board::CozyGame;
use uctbot::clock::ManualClock;
use uctbot::mcts::Searcher;
use uctbot::SearchParams;

fn bench_iterations(c: &mut Criterion) {
    for n in [100u64, 1_000, 10_000] {
        let searcher = Searcher::new(SearchParams { max_iterations: Some(n), ..SearchParams::default() });
        c.bench_function(&format!("mcts_{}_iterations_startpos", n), |b| {
            b.iter(|| {
                let mut g = CozyGame::startpos();
                black_box(searcher.choose_move(black_box(&mut g), &ManualClock::frozen()))
            })
        });
    }
}

criterion_group!(benches, bench_iterations);
criterion_main!(benches);
