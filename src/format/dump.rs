//! Plain-text adjacency dump.

use std::fmt::Display;
use std::io::Write;

use crate::graph::Network;
use crate::types::NetworkResult;

/// Render one line per node: `payload: neighbour, neighbour`.
///
/// Nodes appear in id order, neighbours ascending by id. Isolated nodes
/// end with a bare colon.
pub fn dump<P: Display>(network: &Network<P>) -> String {
    let mut out = String::new();
    for (_, node) in network.iter() {
        let neighbors: Vec<String> = node
            .neighbors()
            .iter()
            .filter_map(|&id| network.node(id))
            .map(|n| n.payload().to_string())
            .collect();
        out.push_str(&node.payload().to_string());
        out.push(':');
        if !neighbors.is_empty() {
            out.push(' ');
            out.push_str(&neighbors.join(", "));
        }
        out.push('\n');
    }
    out
}

/// Write [`dump`] output to any writer.
pub fn write_dump<P: Display>(network: &Network<P>, writer: &mut impl Write) -> NetworkResult<()> {
    writer.write_all(dump(network).as_bytes())?;
    Ok(())
}
