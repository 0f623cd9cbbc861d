// SPDX short identifier: Unlicense

use criterion::{
    criterion_group,
    criterion_main,
    Criterion,
    BenchmarkId
};
use rand::{thread_rng, Rng};

const RING_SIZES: [usize; 6] = [2, 4, 8, 16, 32, 64];

use heiring::{
    common::*,
    signature::LSAGSignature
};

fn random_ring(n: usize) -> (Vec<StealthKeys>, Ring) {
    let mut keys: Vec<StealthKeys> = Vec::new();
    let mut ring: Ring = Ring::new();
    for _ in 0..n {
        let member = StealthKeys::from_secret(random_scalar()).unwrap();
        ring.push(member.public.clone());
        keys.push(member);
    }
    return (keys, ring)
}

fn lsag_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("LSAG");
    group.sample_size(20);

    //sign
    for x in RING_SIZES {
        let (keys, ring) = random_ring(x);
        let signer_index = thread_rng().gen::<usize>() % x;
        let my_key = keys[signer_index].clone();

        let params = (ring, my_key, signer_index);
        group.bench_with_input(BenchmarkId::new("sign", format!("Ring size: {x}")), &params,
            |b, (ring, my_key, signer_index)| b.iter(|| {
                LSAGSignature::sign(ring, &my_key.secret, *signer_index, b"abcdef").unwrap()
            }));
    }

    //verify
    for x in RING_SIZES {
        let (keys, ring) = random_ring(x);
        let signer_index = thread_rng().gen::<usize>() % x;
        let sig = LSAGSignature::sign(&ring, &keys[signer_index].secret, signer_index, b"abcdef").unwrap();

        let params = (sig, ring);
        group.bench_with_input(BenchmarkId::new("verify", format!("Ring size: {x}")), &params,
            |b, (sig, ring)| b.iter(|| {
                sig.verify(ring, b"abcdef").unwrap()
            }));
    }
}

criterion_group!(signature_lsag, lsag_benchmark);
criterion_main!(signature_lsag);
