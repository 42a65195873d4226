use criterion::{criterion_group, criterion_main, BatchSize, Bencher, Criterion, Throughput};
use libgenfile::{config::GenConfig, generator::FileGenerator, request::GenerationRequest, MIB};

criterion_group!(benches, write_bench);
criterion_main!(benches);

const BENCH_SIZE_MIB: &str = "64";

fn write_bench(c: &mut Criterion) {
	let mut group = c.benchmark_group("write");
	group.sample_size(10);
	group.throughput(Throughput::Bytes(64 * MIB));

	for block_size in [ 8 * 1024, 64 * 1024, MIB, 16 * MIB ] {
		let config = GenConfig { block_size, sync: true };
		group.bench_with_input(format!("block_size/{}", block_size), &config, bench_generate);
	}

	group.finish();
}

fn bench_generate(b: &mut Bencher, config: &GenConfig) {
	let generator = FileGenerator::new(config.clone()).unwrap();
	let request = GenerationRequest::parse(BENCH_SIZE_MIB).unwrap();

	b.iter_batched(|| tempfile::tempdir().unwrap(), |dir| {
		generator.generate_in(&request, dir.path()).unwrap();
		dir
	}, BatchSize::PerIteration);
}
