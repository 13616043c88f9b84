//! Criterion benchmarks for the ticker-graph query layer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ticker_graph::{builtin, GraphDataset, GraphElement};

/// Build a synthetic dataset with the curated datasets' type mix.
fn make_dataset(node_count: usize) -> GraphDataset {
    let tags = [
        "category",
        "subcategory",
        "segment",
        "competitor",
        "swot_strength",
        "swot_weakness",
        "swot_opportunity",
        "swot_threat",
        "main_category",
    ];
    let mut elements = Vec::with_capacity(node_count * 2);
    for i in 0..node_count {
        let tag = tags[i % tags.len()];
        elements.push(GraphElement::node(
            format!("node_{}", i),
            format!("Node {}", i),
            tag,
        ));
    }
    for i in 1..node_count {
        elements.push(GraphElement::edge(
            format!("node_{}", i / 2),
            format!("node_{}", i),
        ));
    }
    GraphDataset::load_strict(elements).unwrap()
}

fn bench_load(c: &mut Criterion) {
    let amazon = builtin::document("amazon")
        .expect("embedded")
        .expect("parses");
    c.bench_function("load_strict_amazon", |b| {
        b.iter(|| GraphDataset::load_strict(black_box(amazon.elements.clone())).unwrap())
    });
}

fn bench_queries(c: &mut Criterion) {
    let small = make_dataset(200);
    let large = make_dataset(5_000);

    c.bench_function("nodes_by_type_200", |b| {
        b.iter(|| black_box(&small).nodes_by_type("segment"))
    });
    c.bench_function("swot_elements_200", |b| {
        b.iter(|| black_box(&small).swot_elements())
    });
    c.bench_function("stats_200", |b| b.iter(|| black_box(&small).stats()));
    c.bench_function("stats_5000", |b| b.iter(|| black_box(&large).stats()));
}

fn bench_registry(c: &mut Criterion) {
    c.bench_function("load_builtin_registry", |b| {
        b.iter(|| builtin::load_registry().unwrap())
    });
}

criterion_group!(benches, bench_load, bench_queries, bench_registry);
criterion_main!(benches);
