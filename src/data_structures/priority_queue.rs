use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::fmt::Debug;

/// Priority queue of discovered-but-unsettled nodes for shortest path sweeps
///
/// Holds at most one live entry per node: pushing a node that is already queued
/// keeps whichever entry has the smaller priority. Replaced entries stay in the
/// heap and are skipped when they surface.
///
/// Ordering is by ascending priority, then ascending `tie` key.
#[derive(Debug)]
pub struct Frontier<P, T>
where
    P: Ord + Copy + Debug,
{
    /// Heap of `(priority, tie, node, generation)`, min-first
    heap: BinaryHeap<Reverse<(P, usize, usize, u64)>>,

    /// Live entry per node: priority, generation and payload
    live: HashMap<usize, (P, u64, T)>,

    generation: u64,
}

impl<P, T> Frontier<P, T>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            generation: 0,
        }
    }

    /// Returns true if no node is queued
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Returns the number of queued nodes
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns true if the node currently has a queued entry
    pub fn contains(&self, node: usize) -> bool {
        self.live.contains_key(&node)
    }

    /// Current priority of a queued node
    pub fn priority_of(&self, node: usize) -> Option<P> {
        self.live.get(&node).map(|(priority, _, _)| *priority)
    }

    /// Queues a node, or lowers the priority of an already queued one
    ///
    /// Returns false when the node is already queued with a priority less than
    /// or equal to `priority`; the queued entry is left untouched in that case.
    pub fn push(&mut self, node: usize, priority: P, tie: usize, payload: T) -> bool {
        if let Some((current, _, _)) = self.live.get(&node) {
            if *current <= priority {
                return false;
            }
        }

        self.generation += 1;
        self.live.insert(node, (priority, self.generation, payload));
        self.heap.push(Reverse((priority, tie, node, self.generation)));
        true
    }

    /// Removes the node with the smallest priority
    pub fn pop(&mut self) -> Option<(usize, P, T)> {
        while let Some(Reverse((priority, _, node, generation))) = self.heap.pop() {
            let is_live = matches!(self.live.get(&node), Some((_, g, _)) if *g == generation);
            if !is_live {
                continue;
            }
            if let Some((_, _, payload)) = self.live.remove(&node) {
                return Some((node, priority, payload));
            }
        }
        None
    }
}

impl<P, T> Default for Frontier<P, T>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
