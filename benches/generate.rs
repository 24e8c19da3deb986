use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use spg::{Generator, PasswordConfig};

fn bench_generate(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::seed_from_u64(0);

    let default = Generator::new(&PasswordConfig::default()).unwrap();
    c.bench_function("default_16", |b| {
        b.iter(|| default.generate_one(&mut rng).unwrap())
    });

    let constrained = Generator::new(&PasswordConfig {
        no_repeat: true,
        require_classes: true,
        no_ambiguous: true,
        ..PasswordConfig::with_length(32)
    })
    .unwrap();
    c.bench_function("no_repeat_require_classes_32", |b| {
        b.iter(|| constrained.generate_one(&mut rng).unwrap())
    });

    let batch = Generator::new(&PasswordConfig {
        count: 1000,
        ..PasswordConfig::with_length(black_box(24))
    })
    .unwrap();
    c.bench_function("batch_1000x24", |b| {
        b.iter(|| batch.generate_batch(&mut rng).unwrap())
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
