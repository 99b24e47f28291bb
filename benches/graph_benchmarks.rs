use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use graphwerk::algo::{bfs, dijkstra, floyd, kosaraju, kruskal};
use graphwerk::{Graph, VertexId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn build_random(seed: u64, n: usize, m: usize) -> (Graph, Vec<VertexId>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = Graph::new();
    let vs: Vec<VertexId> = (0..n).map(|i| g.add_vertex(format!("v{}", i))).collect();
    for _ in 0..m {
        let from = vs[rng.gen_range(0..n)];
        let to = vs[rng.gen_range(0..n)];
        g.add_edge(from, to, rng.gen_range(1..=100)).unwrap();
    }
    (g, vs)
}

/// Benchmark vertex and edge insertion throughput
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut g = Graph::new();
                let vs: Vec<VertexId> =
                    (0..size).map(|i| g.add_vertex(format!("v{}", i))).collect();
                for i in 1..size {
                    g.add_edge(vs[i - 1], vs[i], (i % 100) as i64).unwrap();
                }
                criterion::black_box(g.edge_count());
            });
        });
    }
    group.finish();
}

/// Benchmark full-graph BFS
fn bench_bfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfs");

    for size in [100, 1000, 10_000].iter() {
        let (g, _) = build_random(42, *size, size * 4);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let forest = bfs(&g);
                criterion::black_box(forest.len());
            });
        });
    }
    group.finish();
}

/// Benchmark single-source Dijkstra
fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");

    for size in [100, 1000, 10_000].iter() {
        let (g, vs) = build_random(42, *size, size * 4);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let sp = dijkstra(&g, vs[0]).unwrap();
                criterion::black_box(sp.dist.len());
            });
        });
    }
    group.finish();
}

/// Benchmark all-pairs Floyd-Warshall (dense cubic work, kept small)
fn bench_floyd(c: &mut Criterion) {
    let mut group = c.benchmark_group("floyd");

    for size in [50, 100, 200].iter() {
        let (g, _) = build_random(42, *size, size * 4);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let result = floyd(&g);
                criterion::black_box(result.vertices().len());
            });
        });
    }
    group.finish();
}

/// Benchmark strongly connected component decomposition
fn bench_kosaraju(c: &mut Criterion) {
    let mut group = c.benchmark_group("kosaraju");

    for size in [100, 1000, 10_000].iter() {
        let (g, _) = build_random(42, *size, size * 4);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let scc = kosaraju(&g);
                criterion::black_box(scc.len());
            });
        });
    }
    group.finish();
}

/// Benchmark Kruskal MST over a connected random graph
fn bench_kruskal(c: &mut Criterion) {
    let mut group = c.benchmark_group("kruskal");

    for size in [100, 1000, 10_000].iter() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut g = Graph::new();
        let vs: Vec<VertexId> = (0..*size).map(|i| g.add_vertex(format!("v{}", i))).collect();
        for i in 1..*size {
            let w = rng.gen_range(1..=100);
            g.add_edge(vs[i - 1], vs[i], w).unwrap();
            g.add_edge(vs[i], vs[i - 1], w).unwrap();
        }
        for _ in 0..(*size * 2) {
            let a = vs[rng.gen_range(0..*size)];
            let b = vs[rng.gen_range(0..*size)];
            let w = rng.gen_range(1..=100);
            g.add_edge(a, b, w).unwrap();
            g.add_edge(b, a, w).unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mst = kruskal(&g);
                criterion::black_box(mst.total_weight);
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_bfs,
    bench_dijkstra,
    bench_floyd,
    bench_kosaraju,
    bench_kruskal
);
criterion_main!(benches);
