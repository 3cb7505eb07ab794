use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use cardbox_core::model::Rating;
use cardbox_core::parser::parse_deck;
use cardbox_core::scheduler::Session;

fn generate_deck(n: usize) -> String {
    let mut s = String::new();
    for i in 0..n {
        s.push_str(&format!("term_{i}:description text for record {i}\n"));
    }
    s
}

fn bench_select_next(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_next");

    for &n in &[10usize, 100, 1000] {
        let now = Utc::now();
        let session = Session::new(parse_deck(&generate_deck(n), now));

        group.bench_function(format!("{n}_cards"), |b| {
            b.iter_batched(
                || session.clone(),
                |mut s| black_box(s.select_next(now)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_full_review_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("review_pass");

    // One select+rate per card over the whole deck, the hot path of a
    // study session.
    for &n in &[10usize, 100] {
        let now = Utc::now();
        let session = Session::new(parse_deck(&generate_deck(n), now));

        group.bench_function(format!("{n}_cards"), |b| {
            b.iter_batched(
                || session.clone(),
                |mut s| {
                    let mut clock = now;
                    while let Some(_sel) = s.select_next(clock) {
                        s.rate(Rating::Good, clock).unwrap();
                        clock += Duration::seconds(1);
                    }
                    black_box(s)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_select_next, bench_full_review_pass);
criterion_main!(benches);
