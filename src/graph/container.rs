//! Ordered node groups and the composition algebra that wires them together.

use log::trace;

use crate::types::{NetworkError, NetworkResult, NodeId};

use super::Network;

/// How two containers are wired when composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Last node of the left operand to first node of the right (chains).
    Series,
    /// First node of the left operand to first node of the right (fan-out).
    Heads,
    /// Every left node to every right node (complete bipartite join).
    AllPairs,
    /// First to first and last to last (parallel rails).
    Parallel,
    /// Every left node of degree < 2 to every such right node (open ends).
    EndpointsOnly,
    /// No wiring, concatenation only.
    Union,
}

impl Pattern {
    /// All patterns, in declaration order.
    pub const ALL: [Pattern; 6] = [
        Pattern::Series,
        Pattern::Heads,
        Pattern::AllPairs,
        Pattern::Parallel,
        Pattern::EndpointsOnly,
        Pattern::Union,
    ];

    /// Return a human-readable name for this pattern.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Series => "series",
            Self::Heads => "heads",
            Self::AllPairs => "all_pairs",
            Self::Parallel => "parallel",
            Self::EndpointsOnly => "endpoints_only",
            Self::Union => "union",
        }
    }

    /// Connect the nodes of `left` and `right` according to this pattern.
    ///
    /// Wiring is skipped when either operand is empty.
    pub fn wire<P>(
        self,
        network: &mut Network<P>,
        left: &NodeContainer,
        right: &NodeContainer,
    ) -> NetworkResult<()> {
        let (Some(left_first), Some(right_first), Some(left_last), Some(right_last)) =
            (left.first(), right.first(), left.last(), right.last())
        else {
            trace!("{}: empty operand, wiring skipped", self.name());
            return Ok(());
        };

        match self {
            Self::Series => {
                network.connect(left_last, right_first)?;
            }
            Self::Heads => {
                network.connect(left_first, right_first)?;
            }
            Self::AllPairs => {
                for &a in left.nodes() {
                    network.connect_many(a, right.nodes())?;
                }
            }
            Self::Parallel => {
                network.connect(left_first, right_first)?;
                network.connect(left_last, right_last)?;
            }
            Self::EndpointsOnly => {
                // Both sides are sampled before any edge is added.
                let left_ends = left.open_ends(network)?;
                let right_ends = right.open_ends(network)?;
                for &a in &left_ends {
                    network.connect_many(a, &right_ends)?;
                }
            }
            Self::Union => {}
        }
        Ok(())
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One input to [`NodeContainer::build`].
#[derive(Debug, Clone)]
pub enum Element<P> {
    /// Raw payload, wrapped into a fresh node.
    Payload(P),
    /// Existing node, absorbed by id.
    Node(NodeId),
    /// Another container, spliced in one level deep.
    Container(NodeContainer),
}

impl<P> From<NodeId> for Element<P> {
    fn from(id: NodeId) -> Self {
        Element::Node(id)
    }
}

impl<P> From<NodeContainer> for Element<P> {
    fn from(container: NodeContainer) -> Self {
        Element::Container(container)
    }
}

/// An ordered list of node ids. `first`/`last` are the series endpoints.
///
/// A container has no identity of its own and owns no nodes; composing
/// containers wires the underlying network and yields a new list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeContainer {
    nodes: Vec<NodeId>,
}

impl NodeContainer {
    /// Create an empty container.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Wrap an existing id list. No ids are checked or connected.
    pub fn from_nodes(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    /// A single fresh node holding `payload`.
    pub fn singleton<P>(network: &mut Network<P>, payload: P) -> Self {
        Self {
            nodes: vec![network.add_node(payload)],
        }
    }

    /// Resolve mixed elements into a flat container, in order.
    ///
    /// Payloads become new nodes; nothing is connected.
    pub fn build<P, I>(network: &mut Network<P>, elements: I) -> NetworkResult<Self>
    where
        I: IntoIterator<Item = Element<P>>,
    {
        let mut nodes = Vec::new();
        for element in elements {
            match element {
                Element::Payload(payload) => nodes.push(network.add_node(payload)),
                Element::Node(id) => {
                    if !network.contains(id) {
                        return Err(NetworkError::NodeNotFound(id));
                    }
                    nodes.push(id);
                }
                Element::Container(container) => {
                    let foreign = container.iter().find(|&&id| !network.contains(id));
                    if let Some(&bad) = foreign {
                        return Err(NetworkError::NodeNotFound(bad));
                    }
                    nodes.extend(container.nodes);
                }
            }
        }
        Ok(Self { nodes })
    }

    /// Wrap each payload into a fresh, unconnected node.
    pub fn from_payloads<P, I>(network: &mut Network<P>, payloads: I) -> Self
    where
        I: IntoIterator<Item = P>,
    {
        Self {
            nodes: payloads.into_iter().map(|p| network.add_node(p)).collect(),
        }
    }

    /// Node ids in order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Iterate over node ids in order.
    pub fn iter(&self) -> std::slice::Iter<'_, NodeId> {
        self.nodes.iter()
    }

    /// First node.
    pub fn first(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Last node.
    pub fn last(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Number of entries (a node listed twice counts twice).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    /// Nodes with fewer than two neighbours.
    pub fn open_ends<P>(&self, network: &Network<P>) -> NetworkResult<Vec<NodeId>> {
        let mut ends = Vec::new();
        for &id in &self.nodes {
            if network.degree(id)? < 2 {
                ends.push(id);
            }
        }
        Ok(ends)
    }

    /// Concatenate without wiring, returning a new container.
    pub fn combine(&self, other: &NodeContainer) -> NodeContainer {
        let mut nodes = Vec::with_capacity(self.nodes.len() + other.nodes.len());
        nodes.extend_from_slice(&self.nodes);
        nodes.extend_from_slice(&other.nodes);
        Self { nodes }
    }

    /// Append `other`'s nodes without wiring.
    pub fn extend(&mut self, other: &NodeContainer) {
        self.nodes.extend_from_slice(&other.nodes);
    }

    /// Wire `self` to `other` with `pattern` and return the concatenation.
    pub fn compose<P>(
        &self,
        network: &mut Network<P>,
        pattern: Pattern,
        other: &NodeContainer,
    ) -> NetworkResult<NodeContainer> {
        pattern.wire(network, self, other)?;
        Ok(self.combine(other))
    }

    /// Wire `self` to `other` with `pattern` and append `other` to `self`.
    pub fn compose_in_place<P>(
        &mut self,
        network: &mut Network<P>,
        pattern: Pattern,
        other: &NodeContainer,
    ) -> NetworkResult<&mut Self> {
        pattern.wire(network, self, other)?;
        self.extend(other);
        Ok(self)
    }

    /// Left fold: `((self op a) op b) op ...`.
    pub fn compose_chain<P>(
        &self,
        network: &mut Network<P>,
        pattern: Pattern,
        operands: &[NodeContainer],
    ) -> NetworkResult<NodeContainer> {
        let mut acc = self.clone();
        acc.compose_chain_in_place(network, pattern, operands)?;
        Ok(acc)
    }

    /// In-place form of [`compose_chain`](Self::compose_chain).
    pub fn compose_chain_in_place<P>(
        &mut self,
        network: &mut Network<P>,
        pattern: Pattern,
        operands: &[NodeContainer],
    ) -> NetworkResult<&mut Self> {
        for operand in operands {
            self.compose_in_place(network, pattern, operand)?;
        }
        Ok(self)
    }

    pub fn series<P>(
        &self,
        network: &mut Network<P>,
        other: &NodeContainer,
    ) -> NetworkResult<NodeContainer> {
        self.compose(network, Pattern::Series, other)
    }

    pub fn series_in_place<P>(
        &mut self,
        network: &mut Network<P>,
        other: &NodeContainer,
    ) -> NetworkResult<&mut Self> {
        self.compose_in_place(network, Pattern::Series, other)
    }

    pub fn heads<P>(
        &self,
        network: &mut Network<P>,
        other: &NodeContainer,
    ) -> NetworkResult<NodeContainer> {
        self.compose(network, Pattern::Heads, other)
    }

    pub fn heads_in_place<P>(
        &mut self,
        network: &mut Network<P>,
        other: &NodeContainer,
    ) -> NetworkResult<&mut Self> {
        self.compose_in_place(network, Pattern::Heads, other)
    }

    pub fn all_pairs<P>(
        &self,
        network: &mut Network<P>,
        other: &NodeContainer,
    ) -> NetworkResult<NodeContainer> {
        self.compose(network, Pattern::AllPairs, other)
    }

    pub fn all_pairs_in_place<P>(
        &mut self,
        network: &mut Network<P>,
        other: &NodeContainer,
    ) -> NetworkResult<&mut Self> {
        self.compose_in_place(network, Pattern::AllPairs, other)
    }

    pub fn parallel<P>(
        &self,
        network: &mut Network<P>,
        other: &NodeContainer,
    ) -> NetworkResult<NodeContainer> {
        self.compose(network, Pattern::Parallel, other)
    }

    pub fn parallel_in_place<P>(
        &mut self,
        network: &mut Network<P>,
        other: &NodeContainer,
    ) -> NetworkResult<&mut Self> {
        self.compose_in_place(network, Pattern::Parallel, other)
    }

    pub fn endpoints_only<P>(
        &self,
        network: &mut Network<P>,
        other: &NodeContainer,
    ) -> NetworkResult<NodeContainer> {
        self.compose(network, Pattern::EndpointsOnly, other)
    }

    pub fn endpoints_only_in_place<P>(
        &mut self,
        network: &mut Network<P>,
        other: &NodeContainer,
    ) -> NetworkResult<&mut Self> {
        self.compose_in_place(network, Pattern::EndpointsOnly, other)
    }

    pub fn union<P>(
        &self,
        network: &mut Network<P>,
        other: &NodeContainer,
    ) -> NetworkResult<NodeContainer> {
        self.compose(network, Pattern::Union, other)
    }

    pub fn union_in_place<P>(
        &mut self,
        network: &mut Network<P>,
        other: &NodeContainer,
    ) -> NetworkResult<&mut Self> {
        self.compose_in_place(network, Pattern::Union, other)
    }
}

impl From<NodeId> for NodeContainer {
    fn from(id: NodeId) -> Self {
        Self { nodes: vec![id] }
    }
}

impl FromIterator<NodeId> for NodeContainer {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a NodeContainer {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
