use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use seqkit::search::{binary_closest_search, binary_search};

pub fn benchmark(c: &mut Criterion) {
	let mut group = c.benchmark_group("Binary search");

	for len in [16usize, 1024, 65536] {
		let sorted: Vec<u64> = (0..len as u64).map(|i| i * 2).collect();
		let keys: Vec<u64> = (0..256).map(|i| (i * 7919) % (len as u64 * 2)).collect();

		group.bench_with_input(BenchmarkId::new("seqkit", len), &sorted, |b, sorted| {
			b.iter(|| {
				for key in &keys {
					black_box(binary_search(sorted, black_box(key)));
				}
			})
		});

		group.bench_with_input(BenchmarkId::new("std", len), &sorted, |b, sorted| {
			b.iter(|| {
				for key in &keys {
					black_box(sorted.binary_search(black_box(key)));
				}
			})
		});

		group.bench_with_input(BenchmarkId::new("closest", len), &sorted, |b, sorted| {
			b.iter(|| {
				for key in &keys {
					black_box(binary_closest_search(sorted, black_box(key)));
				}
			})
		});
	}

	group.finish();
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
