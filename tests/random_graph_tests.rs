use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shortway::graph::{Graph, MutableGraph};
use shortway::{Dijkstra, Error, ShortestPathAlgorithm, TieBreak, UndirectedGraph};

// Function to generate a random named graph with roughly edge_factor * n edges
fn generate_random_graph(rng: &mut StdRng, num_nodes: usize, edge_factor: f64) -> UndirectedGraph {
    let names: Vec<String> = (0..num_nodes).map(|i| format!("n{}", i)).collect();
    let mut graph: UndirectedGraph = UndirectedGraph::new(names.clone()).unwrap();

    let num_edges = (edge_factor * num_nodes as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..num_nodes);
        let v = rng.gen_range(0..num_nodes);
        if u != v {
            graph.add_edge(&names[u], &names[v], rng.gen_range(1..50)).unwrap();
        }
    }

    graph
}

// Floyd-Warshall over the adjacency matrix
fn all_pairs_oracle(graph: &UndirectedGraph) -> Vec<Vec<Option<u32>>> {
    let n = graph.node_count();
    let mut dist = vec![vec![None; n]; n];

    for i in 0..n {
        dist[i][i] = Some(0);
        for (j, weight) in graph.neighbors(i) {
            dist[i][j] = Some(weight);
        }
    }

    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(ik), Some(kj)) = (dist[i][k], dist[k][j]) {
                    let through = ik + kj;
                    if dist[i][j].map_or(true, |current| through < current) {
                        dist[i][j] = Some(through);
                    }
                }
            }
        }
    }

    dist
}

#[test]
fn test_random_graphs_match_oracle() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for round in 0..20 {
        let n = rng.gen_range(2..25);
        let graph = generate_random_graph(&mut rng, n, 1.5);
        let oracle = all_pairs_oracle(&graph);

        for tie_break in [TieBreak::InsertionOrder, TieBreak::Name] {
            let dijkstra = Dijkstra::new().with_tie_break(tie_break);

            for source in 0..n {
                let result = dijkstra.compute_shortest_paths(&graph, source).unwrap();
                for target in 0..n {
                    assert_eq!(
                        result.distance_to(target),
                        oracle[source][target],
                        "round {} {:?}: {} -> {}",
                        round,
                        tie_break,
                        source,
                        target
                    );
                }
            }
        }
    }
}

#[test]
fn test_random_routes_are_consistent() {
    let mut rng = StdRng::seed_from_u64(42);
    let graph = generate_random_graph(&mut rng, 30, 2.0);
    let dijkstra = Dijkstra::new();

    for start in graph.names() {
        for end in graph.names() {
            match dijkstra.find_shortest_path(&graph, start, end) {
                Ok(route) => {
                    assert_eq!(route.start(), Some(start.as_str()));
                    assert_eq!(route.end(), Some(end.as_str()));

                    let total: u32 = route
                        .path
                        .windows(2)
                        .map(|pair| graph.edge_weight(&pair[0], &pair[1]).unwrap().unwrap())
                        .sum();
                    assert_eq!(route.distance, total);
                }
                Err(Error::NodeNotFound(message)) => {
                    assert!(message.starts_with("no route found"), "{}", message);
                    // unreachable in one direction means unreachable in both
                    assert!(dijkstra.find_shortest_path(&graph, end, start).is_err());
                }
                Err(other) => panic!("unexpected error: {}", other),
            }
        }
    }
}
