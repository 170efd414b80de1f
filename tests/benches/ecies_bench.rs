use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use k1ecies::prelude::*;
use std::hint::black_box;

fn bench_keys(c: &mut Criterion) {
    let ecies = Ecies::new();
    let sk = ecies.generate_private().unwrap();
    let peer = ecies.generate_keypair().unwrap();

    let mut group = c.benchmark_group("secp256k1");
    group.bench_function("get_public", |b| b.iter(|| ecies.get_public(black_box(&sk))));
    group.bench_function("derive", |b| {
        b.iter(|| ecies.derive(black_box(&sk), black_box(peer.public_key())))
    });
    group.finish();
}

fn bench_ecdsa(c: &mut Criterion) {
    let ecies = Ecies::new();
    let keypair = ecies.generate_keypair().unwrap();
    let message = [0x5au8; 32];
    let sig = ecies.sign(keypair.private_key(), message).unwrap();

    let mut group = c.benchmark_group("ECDSA-secp256k1");
    group.bench_function("sign", |b| {
        b.iter(|| ecies.sign(keypair.private_key(), black_box(message)))
    });
    group.bench_function("verify", |b| {
        b.iter(|| ecies.verify(keypair.public_key(), black_box(message), &sig))
    });
    group.finish();
}

fn bench_ecies(c: &mut Criterion) {
    let ecies = Ecies::new();
    let keypair = ecies.generate_keypair().unwrap();

    let mut group = c.benchmark_group("ECIES");
    for size in [16usize, 256, 1024, 16384] {
        let message = vec![0u8; size];
        let envelope = ecies.encrypt(keypair.public_key(), &message).unwrap();
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("encrypt", size), &message, |b, m| {
            b.iter(|| ecies.encrypt(keypair.public_key(), black_box(m)))
        });
        group.bench_with_input(BenchmarkId::new("decrypt", size), &envelope, |b, e| {
            b.iter(|| ecies.decrypt(keypair.private_key(), black_box(e)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_keys, bench_ecdsa, bench_ecies);
criterion_main!(benches);
