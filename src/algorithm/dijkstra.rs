use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::algorithm::{ShortestPathAlgorithm, SweepResult};
use crate::data_structures::Frontier;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Order in which nodes with equal distance leave the frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Lower node index (earlier inserted identifier) first
    #[default]
    InsertionOrder,
    /// Lexicographically smaller identifier first
    Name,
}

/// Configuration for the [`Dijkstra`] engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DijkstraConfig {
    pub tie_break: TieBreak,

    /// Nodes farther than this from the source are treated as unreachable
    pub max_distance: Option<u64>,
}

/// Classic Dijkstra's algorithm over an undirected named graph
///
/// The engine only holds configuration. Every sweep owns its own frontier and
/// settled set, so a single engine can serve concurrent queries.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra {
    config: DijkstraConfig,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra::default()
    }

    pub fn with_config(config: DijkstraConfig) -> Self {
        Dijkstra { config }
    }

    /// Set how equal-distance nodes are ordered
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.config.tie_break = tie_break;
        self
    }

    /// Stop expanding paths longer than `max_distance`
    pub fn with_max_distance(mut self, max_distance: u64) -> Self {
        self.config.max_distance = Some(max_distance);
        self
    }

    /// Tie key per node index
    fn tie_ranks<W, G>(&self, graph: &G) -> Vec<usize>
    where
        W: Weight,
        G: Graph<W>,
    {
        let n = graph.node_count();
        match self.config.tie_break {
            TieBreak::InsertionOrder => (0..n).collect(),
            TieBreak::Name => {
                let mut order: Vec<usize> = (0..n).collect();
                order.sort_by(|a, b| graph.name_of(*a).cmp(&graph.name_of(*b)));

                let mut ranks = vec![0; n];
                for (rank, node) in order.into_iter().enumerate() {
                    ranks[node] = rank;
                }
                ranks
            }
        }
    }

    // Weights that do not fit in u64 are beyond any configured bound
    fn exceeds_bound<W: Weight>(&self, distance: W) -> bool {
        match self.config.max_distance {
            Some(max) => distance.to_u64().map_or(true, |d| d > max),
            None => false,
        }
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<SweepResult<W>> {
        if !graph.has_node(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.node_count();
        let ranks = self.tie_ranks::<W, G>(graph);

        // A node's distance is set exactly when it is settled
        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut settled = Vec::new();

        let mut frontier: Frontier<W, Option<usize>> = Frontier::new();
        frontier.push(source, W::zero(), ranks[source], None);

        debug!(
            "{} sweep from {:?} over {} nodes",
            <Self as ShortestPathAlgorithm<W, G>>::name(self),
            graph.name_of(source),
            n
        );

        while let Some((u, dist_u, predecessor)) = frontier.pop() {
            distances[u] = Some(dist_u);
            predecessors[u] = predecessor;
            settled.push(u);

            for (v, weight) in graph.neighbors(u) {
                if distances[v].is_some() {
                    continue;
                }

                // Paths longer than W can hold are dropped
                let candidate = match dist_u.checked_add(&weight) {
                    Some(candidate) => candidate,
                    None => {
                        warn!("distance overflow relaxing edge {} - {}, skipped", u, v);
                        continue;
                    }
                };

                if self.exceeds_bound(candidate) {
                    continue;
                }

                if frontier.push(v, candidate, ranks[v], Some(u)) {
                    trace!("relaxed node {} to distance {} via {}", v, candidate, u);
                }
            }
        }

        debug!("sweep settled {} of {} nodes", settled.len(), n);

        Ok(SweepResult {
            distances,
            predecessors,
            source,
            settled,
        })
    }
}
