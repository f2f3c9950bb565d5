//! Shortway - Dijkstra shortest paths over named, undirected graphs
//!
//! A graph is built from a fixed set of string identifiers and symmetric
//! positive integer edge weights. The [`Dijkstra`] engine answers two queries:
//! a single-source sweep reporting the best distance and predecessor of every
//! reachable node, and a reconstructed [`Route`] between two named nodes.
//!
//! ```
//! use shortway::graph::MutableGraph;
//! use shortway::{Dijkstra, ShortestPathAlgorithm, UndirectedGraph};
//!
//! let mut graph = UndirectedGraph::<u32>::new(["a", "b", "c"]).unwrap();
//! graph.add_edge("a", "b", 4).unwrap();
//! graph.add_edge("b", "c", 3).unwrap();
//!
//! let route = Dijkstra::new().find_shortest_path(&graph, "a", "c").unwrap();
//! assert_eq!(route.to_string(), "7: a b c ");
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{Dijkstra, DijkstraConfig, TieBreak},
    Route, SearchRecord, ShortestPathAlgorithm, SweepResult,
};
/// Re-export main types for convenient use
pub use graph::undirected::UndirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed graph construction or unusable engine configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// An identifier is absent from the graph, or the target cannot be reached
    #[error("node not found: {0}")]
    NodeNotFound(String),

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
