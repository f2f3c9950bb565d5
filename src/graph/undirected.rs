use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};
use log::{debug, warn};
use std::collections::HashSet;

/// An undirected graph with named nodes, backed by a symmetric adjacency matrix
///
/// A weight of zero marks an absent edge, so zero-weight edges cannot be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedGraph<W = u32>
where
    W: Weight,
{
    /// Node identifiers in insertion order; position is the node index
    names: Vec<String>,

    /// N x N weights, `weights[i][j] == weights[j][i]`
    weights: Vec<Vec<W>>,
}

impl<W> UndirectedGraph<W>
where
    W: Weight,
{
    /// Creates a graph over a fixed set of unique identifiers with no edges
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        {
            let mut seen = HashSet::with_capacity(names.len());
            for name in &names {
                if !seen.insert(name.as_str()) {
                    return Err(Error::Config(format!(
                        "duplicate node identifier '{}'",
                        name
                    )));
                }
            }
        }

        let n = names.len();
        debug!("created graph with {} nodes", n);
        Ok(UndirectedGraph {
            names,
            weights: vec![vec![W::zero(); n]; n],
        })
    }

    /// Creates a graph and adds every `(a, b, weight)` edge, stopping at the first error
    pub fn from_edges<I, S, E, A, B>(names: I, edges: E) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        E: IntoIterator<Item = (A, B, W)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut graph = Self::new(names)?;
        for (a, b, weight) in edges {
            graph.add_edge(a.as_ref(), b.as_ref(), weight)?;
        }
        Ok(graph)
    }

    /// Node identifiers in index order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns true if an identifier belongs to the graph
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Looks up the weight of the edge between two named nodes
    pub fn edge_weight(&self, a: &str, b: &str) -> Result<Option<W>> {
        let (i, j) = self.resolve_pair(a, b)?;
        Ok(self.get_edge_weight(i, j))
    }

    fn resolve(&self, name: &str) -> Result<usize> {
        self.index_of(name)
            .ok_or_else(|| Error::NodeNotFound(name.to_string()))
    }

    fn resolve_pair(&self, a: &str, b: &str) -> Result<(usize, usize)> {
        Ok((self.resolve(a)?, self.resolve(b)?))
    }
}

impl<W> Graph<W> for UndirectedGraph<W>
where
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.names.len()
    }

    fn edge_count(&self) -> usize {
        let mut count = 0;
        for i in 0..self.weights.len() {
            for j in i..self.weights.len() {
                if self.weights[i][j] != W::zero() {
                    count += 1;
                }
            }
        }
        count
    }

    fn neighbors(&self, node: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.weights.get(node) {
            Some(row) => Box::new(
                row.iter()
                    .enumerate()
                    .filter(|(_, weight)| **weight != W::zero())
                    .map(|(j, weight)| (j, *weight)),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    // Linear scan; graphs are expected to be small
    fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|candidate| candidate == name)
    }

    fn name_of(&self, node: usize) -> Option<&str> {
        self.names.get(node).map(String::as_str)
    }

    fn get_edge_weight(&self, a: usize, b: usize) -> Option<W> {
        self.weights
            .get(a)
            .and_then(|row| row.get(b))
            .copied()
            .filter(|weight| *weight != W::zero())
    }
}

impl<W> MutableGraph<W> for UndirectedGraph<W>
where
    W: Weight,
{
    fn add_edge(&mut self, a: &str, b: &str, weight: W) -> Result<()> {
        let (i, j) = self.resolve_pair(a, b)?;

        if weight == W::zero() {
            warn!("zero weight for edge {} - {} clears the edge", a, b);
        }

        self.weights[i][j] = weight;
        self.weights[j][i] = weight;
        Ok(())
    }

    fn remove_edge(&mut self, a: &str, b: &str) -> Result<bool> {
        let (i, j) = self.resolve_pair(a, b)?;
        let existed = self.weights[i][j] != W::zero();

        self.weights[i][j] = W::zero();
        self.weights[j][i] = W::zero();
        Ok(existed)
    }
}
