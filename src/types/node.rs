//! Vertex identity and storage.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Stable handle of a node inside the [`Network`](crate::graph::Network) that issued it.
///
/// Ids are handed out in creation order, so ordering ids is ordering by age.
/// Every algorithm in this crate uses that order to break ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in its network's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A graph vertex: caller payload plus a symmetric neighbour set.
///
/// Adjacency is only changed through the owning network, which keeps
/// `b ∈ a.neighbors() ⇔ a ∈ b.neighbors()`.
#[derive(Debug, Clone)]
pub struct Node<P> {
    payload: P,
    neighbors: BTreeSet<NodeId>,
}

impl<P> Node<P> {
    pub(crate) fn new(payload: P) -> Self {
        Self {
            payload,
            neighbors: BTreeSet::new(),
        }
    }

    /// The caller-supplied payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Mutable access to the payload. Adjacency is not reachable from here.
    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }

    /// Current neighbours, ascending by id.
    pub fn neighbors(&self) -> &BTreeSet<NodeId> {
        &self.neighbors
    }

    /// Number of neighbours.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// True when the node has no neighbours.
    pub fn is_isolated(&self) -> bool {
        self.neighbors.is_empty()
    }

    pub(crate) fn link(&mut self, other: NodeId) -> bool {
        self.neighbors.insert(other)
    }

    pub(crate) fn unlink(&mut self, other: NodeId) -> bool {
        self.neighbors.remove(&other)
    }
}
