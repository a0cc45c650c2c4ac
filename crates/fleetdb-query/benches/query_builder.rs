use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fleetdb_query::{QueryBuilder, agent};

/// Build an agent query with `n` WHERE/AND predicates:
/// agent 0 sql SELECT * FROM t WHERE col0 = 'v0' AND col1 = 'v1' ...
fn build_agent_query(n: usize) -> QueryBuilder {
    let mut qb = agent("0").unwrap().select_all().from_table("t").unwrap();
    for i in 0..n {
        let column = format!("col{i}");
        let value = format!("v{i}");
        qb = if i == 0 {
            qb.where_column(&column).unwrap()
        } else {
            qb.and_column(&column).unwrap()
        };
        qb = qb.equals_to(&value).unwrap();
    }
    qb
}

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_builder/chain");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_agent_query(n)));
        });
    }

    group.finish();
}

fn bench_chain_and_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_builder/chain_and_build");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_agent_query(n).build()));
        });
    }

    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_builder/validation");

    for len in [8, 64, 512] {
        let text = "a".repeat(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| {
                let qb = QueryBuilder::default().from_table(black_box(text)).unwrap();
                black_box(qb)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_chain, bench_chain_and_build, bench_validation);
criterion_main!(benches);
