use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use sleek_id::{Generator, GeneratorConfig};

fn generator() -> Generator {
    Generator::new(GeneratorConfig {
        checksum_token: 30,
        random_length: 15,
        ..GeneratorConfig::default()
    })
    .expect("valid config")
}

fn bench_generate(c: &mut Criterion) {
    let generator = generator();
    c.bench_function("generate", |b| b.iter(|| generator.generate(black_box("usr"))));
}

fn bench_inspect(c: &mut Criterion) {
    let generator = generator();
    let id = generator.generate("usr").expect("random source");

    c.bench_function("prefix", |b| b.iter(|| generator.prefix(black_box(id.as_str()))));
    c.bench_function("timestamp", |b| b.iter(|| generator.timestamp(black_box(&id))));
}

fn bench_validate(c: &mut Criterion) {
    let generator = generator();
    let id = generator.generate("usr").expect("random source");

    c.bench_function("validate", |b| b.iter(|| generator.validate(black_box(&id))));
    c.bench_function("validate_with_prefix", |b| {
        b.iter(|| generator.validate_with_prefix(black_box("usr"), black_box(&id)))
    });
}

criterion_group!(benches, bench_generate, bench_inspect, bench_validate);
criterion_main!(benches);
