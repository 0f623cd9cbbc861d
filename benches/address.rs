// SPDX short identifier: Unlicense

use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    Criterion,
    BenchmarkId
};

use heiring::{
    common::*,
    token::{HeiToken, locate_signer}
};

fn stealth_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Stealth");

    let params = (
        b"5f2b3e8c19a0d4bb721f00e8a65cbd2f".to_vec(),
        b"0x687422eea2cb73b5d3e242ba5456b782919afc85".to_vec()
    );
    group.bench_with_input(BenchmarkId::new("derive", "fixed inputs"), &params,
        |b, (secret, recipient)| b.iter(|| {
            black_box(StealthKeys::derive(secret, recipient).unwrap());
        }));

    group.bench_with_input(BenchmarkId::new("token", "parse"), &(),
        |b, ()| b.iter(|| {
            black_box(HeiToken::parse("hei-2-14-5f2b3e8c19a0d4bb721f00e8a65cbd2f").unwrap());
        }));

    for x in [4usize, 16, 64] {
        let keys = StealthKeys::from_secret(random_scalar()).unwrap();
        let mut ring = Ring::new();
        for _ in 0..x - 1 {
            ring.push(random_point());
        }
        ring.push(keys.public.clone());

        let params = (ring, keys);
        group.bench_with_input(BenchmarkId::new("locate", format!("Ring size: {x}")), &params,
            |b, (ring, keys)| b.iter(|| {
                black_box(locate_signer(ring, keys).unwrap());
            }));
    }
}

criterion_group!(address_stealth, stealth_benchmark);
criterion_main!(address_stealth);
