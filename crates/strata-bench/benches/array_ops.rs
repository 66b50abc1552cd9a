//! Criterion micro-benchmarks for array construction, fill, and
//! cross-space transfer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use strata_array::Array1d;
use strata_mem::{Device, Host};

/// Deterministic input data shared by every benchmark run.
fn make_data(len: usize) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    (0..len).map(|_| rng.gen::<f32>() * 2.0 - 1.0).collect()
}

fn bench_construction(c: &mut Criterion) {
    let data = make_data(10_000);

    c.bench_function("array1d_host_with_len_10k", |b| {
        b.iter(|| Array1d::<f32, Host>::with_len(black_box(10_000)).unwrap())
    });

    c.bench_function("array1d_host_from_elem_10k", |b| {
        b.iter(|| Array1d::<f32, Host>::from_elem(black_box(10_000), 1.5).unwrap())
    });

    c.bench_function("array1d_host_from_slice_10k", |b| {
        b.iter(|| Array1d::<f32, Host>::from_slice(black_box(&data)).unwrap())
    });

    c.bench_function("array1d_device_with_len_10k", |b| {
        b.iter(|| Array1d::<f32, Device>::with_len(black_box(10_000)).unwrap())
    });
}

fn bench_transfer(c: &mut Criterion) {
    let host = Array1d::<f32, Host>::from_slice(&make_data(10_000)).unwrap();
    let device = host.to_device().unwrap();

    c.bench_function("transfer_host_to_device_10k", |b| {
        b.iter(|| black_box(&host).to_device().unwrap())
    });

    c.bench_function("transfer_device_to_host_10k", |b| {
        b.iter(|| black_box(&device).to_host().unwrap())
    });

    c.bench_function("round_trip_host_device_host_10k", |b| {
        b.iter(|| {
            black_box(&host)
                .to_device()
                .unwrap()
                .to_host()
                .unwrap()
        })
    });
}

fn bench_mutation(c: &mut Criterion) {
    let data = make_data(10_000);

    c.bench_function("array1d_host_assign_10k", |b| {
        let mut arr = Array1d::<f32, Host>::with_len(10_000).unwrap();
        b.iter(|| arr.assign_slice(black_box(&data)).unwrap())
    });

    c.bench_function("array1d_host_fill_10k", |b| {
        let mut arr = Array1d::<f32, Host>::with_len(10_000).unwrap();
        b.iter(|| arr.fill(black_box(3.25)))
    });
}

criterion_group!(benches, bench_construction, bench_transfer, bench_mutation);
criterion_main!(benches);
