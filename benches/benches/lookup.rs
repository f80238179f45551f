use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use unicode_tables_benches::synthetic_assignment;
use unicode_tables_prepare::tables::{search, TwoStageTable};

mod group;

/// поиск значений для всех кодпоинтов с шагом step
#[inline(never)]
fn lookup_all(table: &TwoStageTable<i8>, step: usize) -> i64
{
    (0 ..= 0x10FFFF).step_by(step).map(|code| i64::from(table.get(code))).sum()
}

fn lookup(c: &mut Criterion)
{
    let encoded = synthetic_assignment();

    let mut group = c.benchmark_group("lookup");
    group::configure(&mut group);

    let mut block_sizes = vec![32, search(&encoded).unwrap().block_size, 4096];
    block_sizes.sort_unstable();
    block_sizes.dedup();

    for block_size in block_sizes {
        let table = TwoStageTable::build(&encoded, block_size).unwrap();

        group.bench_with_input(BenchmarkId::new("get", block_size), &table, |b, table| {
            b.iter(|| lookup_all(black_box(table), 17))
        });
    }

    group.finish();
}

criterion_group!(benches, lookup);
criterion_main!(benches);
