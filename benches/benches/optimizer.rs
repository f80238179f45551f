use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use unicode_tables_benches::synthetic_assignment;
use unicode_tables_prepare::tables::{search, TwoStageTable};

mod group;

fn optimizer(c: &mut Criterion)
{
    let encoded = synthetic_assignment();

    let mut group = c.benchmark_group("optimizer");
    group::configure(&mut group);
    // один перебор - это 16 разбиений всей области определения
    group.sample_size(10);

    group.bench_function("search", |b| b.iter(|| search(black_box(&encoded))));

    for block_size in [16, 128, 1024] {
        group.bench_with_input(BenchmarkId::new("build", block_size), &block_size, |b, &block_size| {
            b.iter(|| TwoStageTable::build(black_box(&encoded), block_size))
        });
    }

    group.finish();
}

criterion_group!(benches, optimizer);
criterion_main!(benches);
