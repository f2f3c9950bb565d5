use std::collections::HashSet;
use std::fmt;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Settled state of one node after a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRecord<W>
where
    W: Weight,
{
    /// Node index in the graph
    pub node: usize,

    /// Shortest distance from the sweep's source
    pub distance: W,

    /// Node this one was reached from, `None` for the source
    pub predecessor: Option<usize>,
}

/// Result of a single-source sweep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepResult<W>
where
    W: Weight,
{
    /// Distances from source to each node, `None` when unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor nodes in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source node index
    pub source: usize,

    /// Nodes in the order they were settled
    pub settled: Vec<usize>,
}

impl<W> SweepResult<W>
where
    W: Weight,
{
    pub fn distance_to(&self, node: usize) -> Option<W> {
        self.distances.get(node).copied().flatten()
    }

    pub fn predecessor_of(&self, node: usize) -> Option<usize> {
        self.predecessors.get(node).copied().flatten()
    }

    pub fn is_reachable(&self, node: usize) -> bool {
        self.distance_to(node).is_some()
    }

    /// Number of settled nodes, source included
    pub fn reachable_count(&self) -> usize {
        self.settled.len()
    }

    pub fn settled_order(&self) -> &[usize] {
        &self.settled
    }

    /// Settled record of a node
    pub fn record(&self, node: usize) -> Option<SearchRecord<W>> {
        self.distance_to(node).map(|distance| SearchRecord {
            node,
            distance,
            predecessor: self.predecessor_of(node),
        })
    }

    /// All settled records, in settle order
    pub fn records(&self) -> impl Iterator<Item = SearchRecord<W>> + '_ {
        self.settled.iter().filter_map(move |&node| self.record(node))
    }

    /// Walks predecessor links from `target` back to the source
    ///
    /// Returns the node indices in source-to-target order, or `None` when the
    /// target was not reached.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut visited = HashSet::new();
        let mut current = target;

        while current != self.source {
            if !visited.insert(current) {
                warn!("cycle in predecessor links at node {}", current);
                return None;
            }
            path.push(current);
            current = self.predecessor_of(current)?;
        }

        path.push(self.source);
        path.reverse();
        Some(path)
    }

    /// Builds the named route to `end`
    ///
    /// Fails with [`Error::NodeNotFound`] if `end` is unknown or unreachable.
    pub fn route_to<G>(&self, graph: &G, end: &str) -> Result<Route<W>>
    where
        G: Graph<W>,
    {
        let target = graph
            .index_of(end)
            .ok_or_else(|| Error::NodeNotFound(end.to_string()))?;

        let no_route = || {
            let start = graph.name_of(self.source).unwrap_or_default();
            Error::NodeNotFound(format!("no route found from {} to {}", start, end))
        };

        let distance = self.distance_to(target).ok_or_else(no_route)?;
        let nodes = self.path_to(target).ok_or_else(no_route)?;

        let path = nodes
            .into_iter()
            .map(|node| {
                graph
                    .name_of(node)
                    .map(str::to_string)
                    .ok_or(Error::InvalidVertex(node))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Route { distance, path })
    }
}

/// A shortest path between two named nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route<W> {
    /// Total weight of the path
    pub distance: W,

    /// Node identifiers from start to end
    pub path: Vec<String>,
}

impl<W> Route<W> {
    pub fn start(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    pub fn end(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Renders as `"<distance>: <id> <id> ... "`, each identifier followed by a space
impl<W> fmt::Display for Route<W>
where
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.distance)?;
        for id in &self.path {
            write!(f, "{} ", id)?;
        }
        Ok(())
    }
}

/// Trait for single-source shortest path algorithms over named graphs
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from a source node index to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<SweepResult<W>>;

    /// Compute shortest paths from a named source to all other nodes
    fn sweep(&self, graph: &G, start: &str) -> Result<SweepResult<W>> {
        let source = graph
            .index_of(start)
            .ok_or_else(|| Error::NodeNotFound(start.to_string()))?;
        self.compute_shortest_paths(graph, source)
    }

    /// Get the shortest path from source to target as a sequence of node indices
    fn get_path(&self, result: &SweepResult<W>, target: usize) -> Option<Vec<usize>> {
        result.path_to(target)
    }

    /// Find the shortest route between two named nodes
    ///
    /// Runs a fresh sweep from `start` on every call.
    fn find_shortest_path(&self, graph: &G, start: &str, end: &str) -> Result<Route<W>> {
        if graph.index_of(end).is_none() {
            return Err(Error::NodeNotFound(end.to_string()));
        }
        let result = self.sweep(graph, start)?;
        result.route_to(graph, end)
    }
}
