//! Debug formatting versus the generated lookup, for every `TestEnum` value.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fast_enum_string_demo::{TestEnum, ToStringFast};

fn bench_enum_to_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("enum_to_string");
    for value in TestEnum::ALL {
        group.bench_with_input(BenchmarkId::new("debug_format", format!("{value:?}")), &value, |b, v| {
            b.iter(|| format!("{:?}", black_box(v)))
        });
        group.bench_with_input(BenchmarkId::new("to_string_fast", format!("{value:?}")), &value, |b, v| {
            b.iter(|| black_box(v).to_string_fast())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_enum_to_string);
criterion_main!(benches);
