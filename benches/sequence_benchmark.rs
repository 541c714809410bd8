// Benchmarks for representative sequence pipelines

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_sequence_engine::Sequence;

fn sample_rows(count: usize) -> Vec<(u32, i64)> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| (rng.gen_range(0..100), rng.gen_range(0..1_000)))
        .collect()
}

fn filter_select_sum(c: &mut Criterion) {
    let sequence = Sequence::from(sample_rows(10_000));

    c.bench_function("filter_select_sum", |b| {
        b.iter(|| {
            let total = sequence
                .filter(|&(_, value), _| value % 2 == 0)
                .sum_of(|&(_, value)| Some(value as f64));
            black_box(total)
        })
    });
}

fn order_by_then_by(c: &mut Criterion) {
    let sequence = Sequence::from(sample_rows(10_000));

    c.bench_function("order_by_then_by", |b| {
        b.iter(|| {
            let sorted = sequence
                .order_by(|&(key, _)| key)
                .then_by(|&(_, value)| value)
                .to_vec();
            black_box(sorted)
        })
    });
}

fn group_by_count(c: &mut Criterion) {
    let sequence = Sequence::from(sample_rows(10_000));

    c.bench_function("group_by_count", |b| {
        b.iter(|| {
            let groups = sequence.group_by(|&(key, _)| key).count();
            black_box(groups)
        })
    });
}

criterion_group!(benches, filter_select_sum, order_by_then_by, group_by_count);
criterion_main!(benches);
