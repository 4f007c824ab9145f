//! Benchmarks for navigation tree construction and lookup.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use navmenu_tree::{NavLiteral, NavTree, NodeLiteral, SourceFormat};

const MENUDATA: &str = include_str!("../tests/fixtures/menudata.js");

/// Create a literal with the given depth and breadth.
fn create_literal(depth: usize, breadth: usize) -> NavLiteral {
    fn create_level(
        prefix: &str,
        current_depth: usize,
        max_depth: usize,
        breadth: usize,
    ) -> Vec<NodeLiteral> {
        (0..breadth)
            .map(|i| {
                let name = format!("{prefix}{i}");
                let children = if current_depth < max_depth {
                    create_level(&format!("{name}_"), current_depth + 1, max_depth, breadth)
                } else {
                    Vec::new()
                };
                NodeLiteral::new(name.clone(), format!("{name}.html#index_{i}"))
                    .with_children(children)
            })
            .collect()
    }

    NavLiteral::new(create_level("n", 0, depth, breadth))
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_load");

    group.bench_function("menudata_fixture", |b| {
        b.iter(|| NavTree::from_source(MENUDATA, SourceFormat::Auto).unwrap());
    });

    for (depth, breadth) in [(2, 10), (3, 8), (5, 4)] {
        let literal = create_literal(depth, breadth);
        group.bench_with_input(
            BenchmarkId::new("from_literal", format!("{depth}x{breadth}")),
            &literal,
            |b, literal| b.iter(|| NavTree::from_literal(literal.clone()).unwrap()),
        );
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let tree = NavTree::from_literal(create_literal(3, 8)).unwrap();

    let mut group = c.benchmark_group("tree_lookup");

    group.bench_function("find_by_url_hit", |b| {
        b.iter(|| tree.find_by_url("n7_7_7_7.html#index_7"));
    });

    group.bench_function("find_by_url_miss", |b| {
        b.iter(|| tree.find_by_url("missing.html"));
    });

    group.bench_function("find_by_page", |b| {
        b.iter(|| tree.find_by_page("n7_7_7_7.html"));
    });

    group.bench_function("breadcrumbs", |b| {
        b.iter(|| tree.breadcrumbs("n7_7_7_7.html#index_7"));
    });

    group.bench_function("traverse", |b| {
        b.iter(|| tree.traverse().map(|(_, depth)| depth).sum::<usize>());
    });

    group.finish();
}

criterion_group!(benches, bench_load, bench_lookup);
criterion_main!(benches);
