//! Shortest paths by bidirectional breadth-first search.

use log::debug;

use crate::graph::{LevelWalker, Network};
use crate::types::{NetworkResult, NodeId};

/// A shortest route between two nodes, endpoints included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodePath {
    nodes: Vec<NodeId>,
    explored: usize,
}

impl NodePath {
    /// Nodes from source to target.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Get the source node.
    pub fn source(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Get the target node.
    pub fn target(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Number of nodes on the path (a node to itself has length 1).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges on the path.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Distinct nodes the two searches discovered before meeting.
    pub fn explored(&self) -> usize {
        self.explored
    }

    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }
}

/// Stateless shortest-path search.
///
/// Two frontiers grow alternately, one from each endpoint, until one
/// reaches a node the other has already discovered. When several nodes
/// meet at once the lowest id is the bridge, and the route back to each
/// endpoint always steps to the lowest-id neighbour on the previous level,
/// so the returned path is deterministic for a given network.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathFinder;

impl PathFinder {
    /// Create a new path finder.
    pub fn new() -> Self {
        Self
    }

    /// Shortest path from `source` to `target`, or `None` if they lie in
    /// different islands.
    pub fn find_path<P>(
        &self,
        network: &Network<P>,
        source: NodeId,
        target: NodeId,
    ) -> NetworkResult<Option<NodePath>> {
        let mut forward = LevelWalker::new(network, source)?;
        let mut backward = LevelWalker::new(network, target)?;

        if source == target {
            return Ok(Some(NodePath {
                nodes: vec![source],
                explored: 1,
            }));
        }

        loop {
            let Some(level) = forward.step(network) else {
                break;
            };
            let bridge = level.iter().copied().find(|&id| backward.has_visited(id));
            if let Some(bridge) = bridge {
                return join(network, &forward, &backward, bridge).map(Some);
            }

            let Some(level) = backward.step(network) else {
                break;
            };
            let bridge = level.iter().copied().find(|&id| forward.has_visited(id));
            if let Some(bridge) = bridge {
                return join(network, &forward, &backward, bridge).map(Some);
            }
        }

        // One side ran out of nodes: its whole island is known and the
        // other endpoint is not in it.
        debug!(
            "no path {} -> {} (explored {} + {} nodes)",
            source,
            target,
            forward.visited().len(),
            backward.visited().len()
        );
        Ok(None)
    }
}

/// `reverse(source..bridge) + (bridge..target)` with the bridge listed once.
fn join<P>(
    network: &Network<P>,
    forward: &LevelWalker,
    backward: &LevelWalker,
    bridge: NodeId,
) -> NetworkResult<NodePath> {
    let mut nodes = forward.trace_back(network, bridge)?;
    nodes.reverse();
    let backward_half = backward.trace_back(network, bridge)?;
    nodes.extend_from_slice(&backward_half[1..]);

    let explored = forward.visited().len()
        + backward
            .visited()
            .iter()
            .filter(|id| !forward.has_visited(**id))
            .count();
    debug!(
        "path found: {} hops via bridge {}, {} nodes explored",
        nodes.len() - 1,
        bridge,
        explored
    );
    Ok(NodePath { nodes, explored })
}
