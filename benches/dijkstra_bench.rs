use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shortway::graph::MutableGraph;
use shortway::{Dijkstra, ShortestPathAlgorithm, UndirectedGraph};

fn random_graph(num_nodes: usize, edge_factor: f64) -> UndirectedGraph {
    let mut rng = StdRng::seed_from_u64(7);
    let names: Vec<String> = (0..num_nodes).map(|i| format!("n{}", i)).collect();
    let mut graph: UndirectedGraph = UndirectedGraph::new(names.clone()).unwrap();

    let num_edges = (edge_factor * num_nodes as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..num_nodes);
        let v = rng.gen_range(0..num_nodes);
        if u != v {
            graph.add_edge(&names[u], &names[v], rng.gen_range(1..100)).unwrap();
        }
    }
    graph
}

fn bench_find_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_shortest_path");
    let dijkstra = Dijkstra::new();

    for &size in &[16usize, 64, 256] {
        let graph = random_graph(size, 3.0);
        let end = format!("n{}", size - 1);

        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| {
                let _ = black_box(dijkstra.find_shortest_path(graph, "n0", &end));
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find_shortest_path);
criterion_main!(benches);
