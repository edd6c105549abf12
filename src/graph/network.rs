//! Core graph structure: an arena of nodes with symmetric adjacency.

use std::collections::BTreeSet;

use log::trace;

use crate::types::{NetworkError, NetworkResult, Node, NodeId};

/// Arena holding every node of one undirected graph.
///
/// There is no separate edge list: the graph is the union of the nodes'
/// adjacency sets. Nodes are never removed, so an id issued by `add_node`
/// stays valid for the lifetime of the network.
#[derive(Debug, Clone)]
pub struct Network<P> {
    nodes: Vec<Node<P>>,
}

impl<P> Network<P> {
    /// Create a new empty network.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create an empty network with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Add an unconnected node, returns its ID.
    pub fn add_node(&mut self, payload: P) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(payload));
        id
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum::<usize>() / 2
    }

    /// True if `id` was issued by this network.
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&Node<P>> {
        self.nodes.get(id.index())
    }

    fn require(&self, id: NodeId) -> NetworkResult<&Node<P>> {
        self.node(id).ok_or(NetworkError::NodeNotFound(id))
    }

    fn require_mut(&mut self, id: NodeId) -> NetworkResult<&mut Node<P>> {
        self.nodes
            .get_mut(id.index())
            .ok_or(NetworkError::NodeNotFound(id))
    }

    /// Payload of a node.
    pub fn payload(&self, id: NodeId) -> NetworkResult<&P> {
        Ok(self.require(id)?.payload())
    }

    /// Mutable payload of a node.
    pub fn payload_mut(&mut self, id: NodeId) -> NetworkResult<&mut P> {
        Ok(self.require_mut(id)?.payload_mut())
    }

    /// Read-only view of a node's neighbours (ascending by id).
    pub fn neighbors(&self, id: NodeId) -> NetworkResult<&BTreeSet<NodeId>> {
        Ok(self.require(id)?.neighbors())
    }

    /// Number of neighbours of a node.
    pub fn degree(&self, id: NodeId) -> NetworkResult<usize> {
        Ok(self.require(id)?.degree())
    }

    /// All node IDs in creation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId::new)
    }

    /// All nodes with their IDs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<P>)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::new(i), node))
    }

    /// Connect two nodes in both directions.
    ///
    /// Idempotent; connecting a node to itself is a no-op.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> NetworkResult<&mut Self> {
        self.require(a)?;
        self.require(b)?;
        if a == b {
            trace!("ignoring self-connection on {}", a);
            return Ok(self);
        }
        self.nodes[a.index()].link(b);
        self.nodes[b.index()].link(a);
        Ok(self)
    }

    /// Remove the connection between two nodes, if any.
    pub fn disconnect(&mut self, a: NodeId, b: NodeId) -> NetworkResult<&mut Self> {
        self.require(a)?;
        self.require(b)?;
        if a != b {
            self.nodes[a.index()].unlink(b);
            self.nodes[b.index()].unlink(a);
        }
        Ok(self)
    }

    /// Connect one node to each node in `others`.
    pub fn connect_many(&mut self, a: NodeId, others: &[NodeId]) -> NetworkResult<&mut Self> {
        for &other in others {
            self.connect(a, other)?;
        }
        Ok(self)
    }

    /// Make `links` the exact neighbour set of `a`.
    ///
    /// Neighbours not in `links` are disconnected, missing ones connected.
    /// `a` itself is skipped if listed.
    pub fn set_links(&mut self, a: NodeId, links: &[NodeId]) -> NetworkResult<&mut Self> {
        for &link in links {
            self.require(link)?;
        }
        let wanted: BTreeSet<NodeId> = links.iter().copied().filter(|&l| l != a).collect();
        let current = self.neighbors(a)?.clone();
        for &stale in current.difference(&wanted) {
            self.disconnect(a, stale)?;
        }
        for &fresh in wanted.difference(&current) {
            self.connect(a, fresh)?;
        }
        Ok(self)
    }

    /// Create a new node already connected to `from`.
    pub fn spawn(&mut self, from: NodeId, payload: P) -> NetworkResult<NodeId> {
        self.require(from)?;
        let id = self.add_node(payload);
        self.connect(from, id)?;
        Ok(id)
    }

    /// Create a new node connected to every node in `others`.
    pub fn spawn_linked(&mut self, payload: P, others: &[NodeId]) -> NetworkResult<NodeId> {
        for &other in others {
            self.require(other)?;
        }
        let id = self.add_node(payload);
        self.connect_many(id, others)?;
        Ok(id)
    }

    /// Connect each node to the next one in `ids`.
    pub fn chain(&mut self, ids: &[NodeId]) -> NetworkResult<&mut Self> {
        for pair in ids.windows(2) {
            self.connect(pair[0], pair[1])?;
        }
        Ok(self)
    }

    /// Connect every node in `ids` to every other.
    pub fn interconnect(&mut self, ids: &[NodeId]) -> NetworkResult<&mut Self> {
        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i + 1..] {
                self.connect(a, b)?;
            }
        }
        Ok(self)
    }
}

impl<P: PartialEq> Network<P> {
    /// First node (lowest id) whose payload equals `payload`.
    pub fn find(&self, payload: &P) -> Option<NodeId> {
        self.iter()
            .find(|(_, node)| node.payload() == payload)
            .map(|(id, _)| id)
    }
}

impl<P> Default for Network<P> {
    fn default() -> Self {
        Self::new()
    }
}
