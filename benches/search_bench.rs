use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use taperbot::board::Position;
use taperbot::clock::Clock;
use taperbot::eval::Tapered;
use taperbot::search::Searcher;

fn bench_search(c: &mut Criterion) {
    let pos = Position::startpos();
    let clock = Clock::movetime(Duration::from_secs(3600));

    c.bench_function("think_depth_4_startpos", |b| {
        b.iter(|| {
            let mut s = Searcher::with_tt_capacity(Tapered::new(), 1 << 16);
            black_box(s.think_to_depth(black_box(&pos), &clock, 4))
        })
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
