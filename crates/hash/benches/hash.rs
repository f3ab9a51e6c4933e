// Copyright 2024-2025 Irreducible Inc.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use digest::Digest;
use rand::{thread_rng, Rng, RngCore};
use tigergatun_hash::{
	radiogatun::{round, RadioGatunState},
	tiger::compress,
	RadioGatun32, RadioGatun64, Tiger, Tiger2,
};
use tigergatun_utils::{
	env::{boolean_env_flag_set, byte_count_env_var},
	tracing::init_tracing,
};

fn input_sizes() -> Vec<usize> {
	let mut sizes = vec![64, 1 << 12, 1 << 16];
	if boolean_env_flag_set("TIGERGATUN_BENCH_LARGE") {
		sizes.push(1 << 20);
	}
	if let Some(size) = byte_count_env_var("TIGERGATUN_BENCH_SIZE") {
		sizes.push(size);
	}
	tracing::info!(?sizes, "hash benchmark input sizes");
	sizes
}

fn bench_digest<D: Digest>(c: &mut Criterion, name: &str) {
	let mut group = c.benchmark_group(name);
	let mut rng = thread_rng();

	for size in input_sizes() {
		let mut data = vec![0u8; size];
		rng.fill_bytes(&mut data);

		group.throughput(Throughput::Bytes(size as u64));
		group.bench_with_input(BenchmarkId::from_parameter(size), &data, |bench, data| {
			bench.iter(|| D::digest(data))
		});
	}

	group.finish()
}

fn bench_tiger(c: &mut Criterion) {
	init_tracing();

	bench_digest::<Tiger>(c, "Tiger");
	bench_digest::<Tiger2>(c, "Tiger2");

	let mut group = c.benchmark_group("Tiger compression");
	let mut rng = thread_rng();
	let state = [rng.next_u64(), rng.next_u64(), rng.next_u64()];
	let block: [u64; 8] = std::array::from_fn(|_| rng.next_u64());

	group.throughput(Throughput::Bytes(64));
	group.bench_function("compress", |bench| {
		bench.iter(|| compress(black_box(state), black_box(&block)))
	});
	group.finish()
}

fn bench_radiogatun(c: &mut Criterion) {
	init_tracing();

	bench_digest::<RadioGatun32>(c, "RadioGatun[32]");
	bench_digest::<RadioGatun64>(c, "RadioGatun[64]");

	let mut group = c.benchmark_group("RadioGatun round");
	let mut rng = thread_rng();

	let mut state32 = RadioGatunState::<u32>::default();
	rng.fill(&mut state32.mill[..]);
	rng.fill(&mut state32.belt[..]);
	let input32 = [rng.next_u32(), rng.next_u32(), rng.next_u32()];
	group.bench_function("RadioGatun[32]", |bench| {
		bench.iter(|| round(black_box(state32), Some(black_box(&input32))))
	});

	let mut state64 = RadioGatunState::<u64>::default();
	rng.fill(&mut state64.mill[..]);
	rng.fill(&mut state64.belt[..]);
	let input64 = [rng.next_u64(), rng.next_u64(), rng.next_u64()];
	group.bench_function("RadioGatun[64]", |bench| {
		bench.iter(|| round(black_box(state64), Some(black_box(&input64))))
	});

	group.finish()
}

criterion_group!(hash, bench_tiger, bench_radiogatun);
criterion_main!(hash);
