//! Island discovery and distance layering.

use std::collections::{BTreeSet, HashSet};

use log::debug;

use crate::graph::{LevelWalker, Network};
use crate::types::{NetworkError, NetworkResult, NodeId};

/// Stateless connectivity queries over a network.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectivityEngine;

impl ConnectivityEngine {
    /// Create a new connectivity engine.
    pub fn new() -> Self {
        Self
    }

    /// Every node reachable from `start`, including `start`.
    pub fn island<P>(
        &self,
        network: &Network<P>,
        start: NodeId,
    ) -> NetworkResult<BTreeSet<NodeId>> {
        let mut walker = LevelWalker::new(network, start)?;
        walker.run(network);
        let island: BTreeSet<NodeId> = walker.visited().iter().copied().collect();
        debug!(
            "island of {}: {} nodes over {} levels",
            start,
            island.len(),
            walker.levels().len()
        );
        Ok(island)
    }

    /// Nodes grouped by hop distance from `start`; index 0 is `{start}`.
    pub fn propagation_levels<P>(
        &self,
        network: &Network<P>,
        start: NodeId,
    ) -> NetworkResult<Vec<BTreeSet<NodeId>>> {
        let mut walker = LevelWalker::new(network, start)?;
        walker.run(network);
        debug!("propagation from {}: depth {}", start, walker.depth());
        Ok(walker.into_levels())
    }

    /// Partition the whole network into islands, ordered by lowest member id.
    pub fn islands<P>(&self, network: &Network<P>) -> Vec<BTreeSet<NodeId>> {
        let mut seen: HashSet<NodeId> = HashSet::with_capacity(network.node_count());
        let mut islands = Vec::new();
        for id in network.ids() {
            if seen.contains(&id) {
                continue;
            }
            let mut walker = LevelWalker::seeded(id);
            walker.run(network);
            let island: BTreeSet<NodeId> = walker.visited().iter().copied().collect();
            seen.extend(island.iter().copied());
            islands.push(island);
        }
        debug!(
            "{} islands across {} nodes",
            islands.len(),
            network.node_count()
        );
        islands
    }

    /// Hop distance between two nodes, `None` if they lie in different islands.
    pub fn distance<P>(
        &self,
        network: &Network<P>,
        from: NodeId,
        to: NodeId,
    ) -> NetworkResult<Option<usize>> {
        if !network.contains(to) {
            return Err(NetworkError::NodeNotFound(to));
        }
        let mut walker = LevelWalker::new(network, from)?;
        while !walker.has_visited(to) {
            if walker.step(network).is_none() {
                return Ok(None);
            }
        }
        Ok(Some(walker.depth()))
    }

    /// True when both nodes lie in the same island.
    pub fn is_connected<P>(
        &self,
        network: &Network<P>,
        a: NodeId,
        b: NodeId,
    ) -> NetworkResult<bool> {
        Ok(self.distance(network, a, b)?.is_some())
    }
}
