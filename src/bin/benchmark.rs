use std::env;
use std::time::{Duration, Instant};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shortway::graph::{Graph, MutableGraph};
use shortway::{Dijkstra, ShortestPathAlgorithm, UndirectedGraph};

// Function to generate a random named graph with specified parameters
fn generate_random_graph(
    rng: &mut StdRng,
    num_nodes: usize,
    edge_factor: f64,
) -> shortway::Result<UndirectedGraph> {
    let names: Vec<String> = (0..num_nodes).map(|i| format!("n{}", i)).collect();
    let mut graph: UndirectedGraph = UndirectedGraph::new(names.clone())?;

    // Approximately edge_factor * n edges
    let num_edges = (edge_factor * num_nodes as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..num_nodes);
        let v = rng.gen_range(0..num_nodes);
        // Avoid self-loops and keep weights positive
        if u != v {
            graph.add_edge(&names[u], &names[v], rng.gen_range(1..100))?;
        }
    }

    Ok(graph)
}

fn sample_graph() -> shortway::Result<UndirectedGraph> {
    UndirectedGraph::from_edges(
        ["a", "b", "c", "d", "e", "f"],
        [
            ("a", "b", 1),
            ("a", "c", 10),
            ("b", "c", 18),
            ("b", "d", 10),
            ("b", "f", 30),
            ("c", "e", 5),
            ("d", "f", 10),
            ("e", "f", 5),
        ],
    )
}

fn benchmark_sweeps(
    dijkstra: &Dijkstra,
    graph: &UndirectedGraph,
    sources: usize,
) -> shortway::Result<Duration> {
    let start = Instant::now();
    let sweeps = sources.min(graph.node_count());
    let mut reachable = 0;

    for source in 0..sweeps {
        reachable += dijkstra.compute_shortest_paths(graph, source)?.reachable_count();
    }

    let duration = start.elapsed();
    info!("settled {} nodes over {} sweeps", reachable, sweeps);
    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let max_nodes: usize = args.get(1).and_then(|arg| arg.parse().ok()).unwrap_or(512);
    let edge_factor: f64 = args.get(2).and_then(|arg| arg.parse().ok()).unwrap_or(3.0);
    let seed: Option<u64> = args.get(3).and_then(|arg| arg.parse().ok());

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let dijkstra = Dijkstra::new();

    let graph = sample_graph()?;
    println!("Sample route b -> f: {}", dijkstra.find_shortest_path(&graph, "b", "f")?);

    println!("=====================================================");
    println!("Benchmark: Dijkstra sweeps on random named graphs");
    println!("Edge factor: {} edges per node (on average)", edge_factor);
    if let Some(seed) = seed {
        println!("Seed: {}", seed);
    }
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<15}", "Nodes", "Edges", "100 sweeps (ms)");

    let mut size = 16;
    while size <= max_nodes {
        let graph = generate_random_graph(&mut rng, size, edge_factor)?;
        let duration = benchmark_sweeps(&dijkstra, &graph, 100)?;

        println!(
            "{:<10} | {:<10} | {:<15.2}",
            size,
            graph.edge_count(),
            duration.as_secs_f64() * 1000.0
        );
        size *= 2;
    }

    Ok(())
}
