//! Serializable view of a network, for JSON output.

use std::fmt::Display;
use std::io::Write;

use serde::Serialize;

use crate::graph::Network;
use crate::types::{NetworkResult, NodeId};

/// One node as it appears in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeRecord {
    pub id: NodeId,
    pub payload: String,
    pub neighbors: Vec<NodeId>,
}

/// Point-in-time copy of a network's nodes and adjacency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkSnapshot {
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes: Vec<NodeRecord>,
}

impl NetworkSnapshot {
    /// Copy the current state of `network`, payloads rendered with `Display`.
    pub fn capture<P: Display>(network: &Network<P>) -> Self {
        let nodes = network
            .iter()
            .map(|(id, node)| NodeRecord {
                id,
                payload: node.payload().to_string(),
                neighbors: node.neighbors().iter().copied().collect(),
            })
            .collect();
        Self {
            node_count: network.node_count(),
            edge_count: network.edge_count(),
            nodes,
        }
    }

    /// Serialize as JSON to any writer.
    pub fn write_json(&self, writer: &mut impl Write, pretty: bool) -> NetworkResult<()> {
        if pretty {
            serde_json::to_writer_pretty(&mut *writer, self)?;
        } else {
            serde_json::to_writer(&mut *writer, self)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}
