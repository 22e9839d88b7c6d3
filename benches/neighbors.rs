use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use knnviz::knn::{self, QueryPoint};
use knnviz::sampler::{self, ScatterParams};
use knnviz::session::VisualizerSession;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

fn bench_nearest(c: &mut Criterion) {
    let params = ScatterParams::default();
    let points = sampler::scatter(&mut StdRng::seed_from_u64(17), &params);
    let query = QueryPoint::unknown(250.0, 250.0);
    c.bench_function("nearest_k7_60_points", |b| {
        b.iter(|| knn::nearest(black_box(&points), black_box(&query), 7))
    });
}

fn bench_place_and_classify(c: &mut Criterion) {
    let params = ScatterParams::default();
    c.bench_function("scatter_place_classify", |b| {
        b.iter_batched(
            || StdRng::seed_from_u64(29),
            |mut rng| {
                let mut session = VisualizerSession::new();
                session.scatter(&mut rng, &params);
                session.place_query(120.0, 310.0);
                black_box(session.classify(5))
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_nearest, bench_place_and_classify);
criterion_main!(benches);
