use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cql_parser::{read, simplify, transform_cql_to_filter, transform_filter_to_cql, write};

/// Benchmark parsing of single-node expressions
fn bench_read_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_simple");

    group.bench_function("comparison", |b| {
        b.iter(|| read(black_box("title ILIKE 'cat*'")))
    });

    group.bench_function("between", |b| {
        b.iter(|| read(black_box("height BETWEEN 1 AND 3")))
    });

    group.bench_function("temporal", |b| {
        b.iter(|| read(black_box("created DURING 2020-01-01/2020-06-30")))
    });

    group.bench_function("spatial", |b| {
        b.iter(|| read(black_box("INTERSECTS(anyGeo, POLYGON((1 2,3 4,5 6,1 2)))")))
    });

    group.bench_function("filter_function", |b| {
        b.iter(|| read(black_box("proximity('anyText',3,'cat dog') = true")))
    });

    group.finish();
}

/// Benchmark parsing of compound expressions
fn bench_read_compound(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_compound");

    group.bench_function("mixed_logical", |b| {
        b.iter(|| {
            read(black_box(
                "(title ILIKE 'cat*' AND height > 3) OR NOT (created BEFORE 2020-01-01)",
            ))
        })
    });

    group.bench_function("spatial_conjunction", |b| {
        b.iter(|| {
            read(black_box(
                "(INTERSECTS(anyGeo, POLYGON((1 2,3 4,5 6,1 2)))) AND \
                 (DWITHIN(anyGeo, POINT(1 2), 100, meters))",
            ))
        })
    });

    group.finish();
}

/// Benchmark serialization and the full round trip
fn bench_write_and_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("write");

    let tree = simplify(
        read("(title ILIKE 'cat*' AND height > 3) OR NOT (created BEFORE 2020-01-01)").unwrap(),
    );
    group.bench_function("compound_tree", |b| b.iter(|| write(black_box(&tree))));

    let cql = "(INTERSECTS(anyGeo, POLYGON((1 2,3 4,5 6,1 2))))";
    group.bench_function("transform_round_trip", |b| {
        b.iter(|| {
            let filter = transform_cql_to_filter(black_box(cql)).unwrap();
            transform_filter_to_cql(&filter)
        })
    });

    group.finish();
}

/// Benchmark simplify over increasingly wide AND chains
fn bench_simplify_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplify_scaling");

    for size in [4usize, 16, 64] {
        let cql = (0..size)
            .map(|i| format!("p{} = {}", i, i))
            .collect::<Vec<_>>()
            .join(" AND ");
        let tree = read(&cql).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &tree, |b, tree| {
            b.iter(|| simplify(black_box(tree.clone())))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_read_simple,
    bench_read_compound,
    bench_write_and_round_trip,
    bench_simplify_scaling
);
criterion_main!(benches);
