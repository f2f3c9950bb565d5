use std::fmt::{Debug, Display};
use num_traits::{PrimInt, Unsigned};

use crate::Result;

/// Edge weight type: an unsigned primitive integer where zero means "no edge"
pub trait Weight: PrimInt + Unsigned + Debug + Display + Send + Sync + 'static {}

impl<T> Weight for T where T: PrimInt + Unsigned + Debug + Display + Send + Sync + 'static {}

/// Trait representing a weighted undirected graph with named nodes
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of undirected edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the `(neighbor, weight)` pairs of a node
    fn neighbors(&self, node: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Resolves an identifier to its node index
    fn index_of(&self, name: &str) -> Option<usize>;

    /// Returns the identifier stored at a node index
    fn name_of(&self, node: usize) -> Option<&str>;

    /// Returns true if the node index exists in the graph
    fn has_node(&self, node: usize) -> bool {
        node < self.node_count()
    }

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, a: usize, b: usize) -> bool {
        self.get_edge_weight(a, b).is_some()
    }

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, a: usize, b: usize) -> Option<W>;
}

/// Trait for adding and removing edges by node name
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Sets the weight of the undirected edge `a - b`, replacing any previous weight
    fn add_edge(&mut self, a: &str, b: &str, weight: W) -> Result<()>;

    /// Removes the edge `a - b`, returning whether it existed
    fn remove_edge(&mut self, a: &str, b: &str) -> Result<bool>;
}
