use chain_admin::constants::{admin_chain_id, SIG_LENGTH};
use chain_admin::{AdminBlock, Signature, WireCodec};
use chain_core::Hash;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn sample_block(signatures: u8) -> AdminBlock {
    let mut block = AdminBlock::new(admin_chain_id(), Hash::new([7; 32]), 42, 64);
    for i in 0..signatures {
        block
            .add_db_signature(
                Hash::new([i; 32]),
                Hash::new([i.wrapping_add(1); 32]),
                Signature::new([i; SIG_LENGTH]),
            )
            .unwrap();
    }
    for minute in 1..=10 {
        block.add_end_of_minute_marker(minute).unwrap();
    }
    block
}

fn bench_codec(c: &mut Criterion) {
    let block = sample_block(32);
    let bytes = block.encode().unwrap();

    c.bench_function("admin_block_encode", |b| {
        b.iter(|| black_box(&block).encode().unwrap())
    });

    c.bench_function("admin_block_decode", |b| {
        b.iter(|| AdminBlock::from_bytes(black_box(&bytes)).unwrap())
    });

    c.bench_function("admin_block_hash", |b| {
        b.iter(|| {
            let mut block = block.clone();
            block.build_self_hash().unwrap()
        })
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
