// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 Dragonscale Team

//! MST engine benchmarks
//!
//! Run with:
//! cargo bench --bench mst_benchmarks

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::Rng;
use spantrace_algo::{Graph, Kruskal, MstAlgorithm, MstConfig, Prim, TraceVerbosity};
use std::collections::HashSet;
use std::env;

#[derive(Clone, Debug)]
struct MstBenchConfig {
    nodes: usize,
    edges_per_node: usize,
}

impl MstBenchConfig {
    fn from_env() -> Self {
        let nodes = env::var("BENCH_NODES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1000);
        let edges_per_node = env::var("BENCH_EDGES_PER_NODE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);
        Self {
            nodes,
            edges_per_node,
        }
    }

    fn label(&self) -> String {
        format!("{}n_{}deg", self.nodes, self.edges_per_node)
    }
}

fn build_graph(config: &MstBenchConfig) -> Graph {
    let mut rng = rand::thread_rng();
    let n = config.nodes;
    let mut pairs = HashSet::new();
    let mut edges = Vec::new();

    // Random spanning tree keeps the graph connected
    for v in 1..n {
        let u = rng.gen_range(0..v);
        pairs.insert((u, v));
        edges.push((u as i64, v as i64, rng.gen_range(0.0..100.0)));
    }
    for _ in 0..n * config.edges_per_node {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a != b && pairs.insert((a.min(b), a.max(b))) {
            edges.push((a as i64, b as i64, rng.gen_range(0.0..100.0)));
        }
    }

    Graph::build((0..n as i64).collect::<Vec<_>>(), edges).expect("benchmark graph is valid")
}

fn mst_benchmarks(c: &mut Criterion) {
    let config = MstBenchConfig::from_env();
    let graph = build_graph(&config);
    let mut group = c.benchmark_group("mst");

    group.bench_with_input(
        BenchmarkId::new("prim_full", config.label()),
        &graph,
        |b, graph| b.iter(|| Prim::run(graph, MstConfig::default())),
    );
    group.bench_with_input(
        BenchmarkId::new("prim_decisions", config.label()),
        &graph,
        |b, graph| {
            let mst_config = MstConfig::default().with_verbosity(TraceVerbosity::Decisions);
            b.iter(|| Prim::run(graph, mst_config.clone()))
        },
    );
    group.bench_with_input(
        BenchmarkId::new("kruskal", config.label()),
        &graph,
        |b, graph| b.iter(|| Kruskal::run(graph, MstConfig::default())),
    );

    group.finish();
}

criterion_group!(benches, mst_benchmarks);
criterion_main!(benches);
