use criterion::{criterion_group, criterion_main, Criterion};
use fastagen::{generate, GeneratorConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

pub fn generate_one_mb(c: &mut Criterion) {
    let config = GeneratorConfig {
        target_size: 1024 * 1024,
        ..GeneratorConfig::default()
    };

    c.bench_function("1 MiB to sink", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(0);
            let summary = generate(&mut std::io::sink(), &config, &mut rng).unwrap();
            black_box(summary);
        })
    });
}

criterion_group!(benches, generate_one_mb);
criterion_main!(benches);
