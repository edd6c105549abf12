//! Graph traversal primitive (level-synchronous BFS).

use std::collections::{BTreeSet, HashSet};

use log::trace;

use crate::types::{NetworkError, NetworkResult, NodeId};

use super::Network;

/// Breadth-first frontier expansion from one start node.
///
/// Level `k` holds exactly the nodes at hop distance `k` from the start.
/// Each walker carries its own visited set, so no state leaks between
/// searches, and expansion is iterative with no recursion depth limit.
#[derive(Debug, Clone)]
pub struct LevelWalker {
    levels: Vec<BTreeSet<NodeId>>,
    visited: HashSet<NodeId>,
}

impl LevelWalker {
    /// Seed a walker at `start` (level 0 = `{start}`).
    pub fn new<P>(network: &Network<P>, start: NodeId) -> NetworkResult<Self> {
        if !network.contains(start) {
            return Err(NetworkError::NodeNotFound(start));
        }
        Ok(Self::seeded(start))
    }

    /// Seed without checking `start`; for ids taken from the network itself.
    pub(crate) fn seeded(start: NodeId) -> Self {
        Self {
            levels: vec![BTreeSet::from([start])],
            visited: HashSet::from([start]),
        }
    }

    /// Expand the current frontier by one hop.
    ///
    /// Returns the new level, or `None` once nothing new is reachable;
    /// an empty level is never recorded.
    pub fn step<P>(&mut self, network: &Network<P>) -> Option<&BTreeSet<NodeId>> {
        let frontier = self.levels.last()?;
        let mut next = BTreeSet::new();
        for &id in frontier {
            let Some(node) = network.node(id) else {
                continue;
            };
            for &neighbor in node.neighbors() {
                if !self.visited.contains(&neighbor) {
                    next.insert(neighbor);
                }
            }
        }
        if next.is_empty() {
            return None;
        }
        self.visited.extend(next.iter().copied());
        trace!(
            "level {}: {} new nodes, {} visited",
            self.levels.len(),
            next.len(),
            self.visited.len()
        );
        self.levels.push(next);
        self.levels.last()
    }

    /// Expand until the island is exhausted.
    pub fn run<P>(&mut self, network: &Network<P>) -> &mut Self {
        while self.step(network).is_some() {}
        self
    }

    /// Levels discovered so far.
    pub fn levels(&self) -> &[BTreeSet<NodeId>] {
        &self.levels
    }

    /// The most recent level.
    pub fn frontier(&self) -> &BTreeSet<NodeId> {
        // A walker is always seeded with level 0.
        &self.levels[self.levels.len() - 1]
    }

    /// Depth of the most recent level.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Has this node been discovered?
    pub fn has_visited(&self, id: NodeId) -> bool {
        self.visited.contains(&id)
    }

    /// All nodes discovered so far.
    pub fn visited(&self) -> &HashSet<NodeId> {
        &self.visited
    }

    /// Level index containing `id`, if discovered.
    pub fn level_of(&self, id: NodeId) -> Option<usize> {
        if !self.visited.contains(&id) {
            return None;
        }
        self.levels.iter().position(|level| level.contains(&id))
    }

    /// Consume the walker, returning its levels.
    pub fn into_levels(self) -> Vec<BTreeSet<NodeId>> {
        self.levels
    }

    /// Walk from a discovered node back to the start, one hop per level.
    ///
    /// Picks the lowest-id neighbour on each preceding level. The returned
    /// list starts at `id` and ends at the walker's start node.
    pub fn trace_back<P>(&self, network: &Network<P>, id: NodeId) -> NetworkResult<Vec<NodeId>> {
        let depth = self.level_of(id).ok_or(NetworkError::NotDiscovered(id))?;
        let mut route = Vec::with_capacity(depth + 1);
        let mut current = id;
        route.push(current);
        for level in self.levels[..depth].iter().rev() {
            let neighbors = network.neighbors(current)?;
            // Fails only if the network changed after the walk.
            let Some(&previous) = neighbors.iter().find(|&n| level.contains(n)) else {
                return Err(NetworkError::NotDiscovered(current));
            };
            route.push(previous);
            current = previous;
        }
        Ok(route)
    }
}
