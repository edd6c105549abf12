//! Textual notation for building topologies.
//!
//! ```text
//! A-B-C-D-A          four-node cycle (names are reused nodes)
//! (X,Y)*(Z,W)        complete bipartite join
//! H^L1^L2^L3         star around H
//! (A-B)|(C-D)        ladder with one square
//! ```
//!
//! Operators are left associative and share one precedence level:
//! `-` series, `^` heads, `*` all pairs, `|` parallel, `~` endpoints only.
//! `,` groups without wiring and binds loosest. `()` is an empty group.
//! Statements are separated by newlines or `;`, and `#` starts a comment.

mod parser;

use std::collections::BTreeMap;

use log::debug;

use crate::graph::{Network, NodeContainer};
use crate::types::{NetworkError, NetworkResult, NodeId};

use parser::Parser;

/// A network built from notation, with its name table.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    network: Network<String>,
    symbols: BTreeMap<String, NodeId>,
    container: NodeContainer,
}

impl Topology {
    /// Parse notation into a fresh network.
    pub fn parse(source: &str) -> NetworkResult<Self> {
        let mut topology = Self::default();
        topology.extend(source)?;
        Ok(topology)
    }

    /// Parse more statements into this topology. Known names refer to
    /// the existing nodes.
    ///
    /// On error the network may already hold part of the new statements.
    pub fn extend(&mut self, source: &str) -> NetworkResult<&mut Self> {
        let added = {
            let mut parser = Parser::new(source, &mut self.network, &mut self.symbols)?;
            parser.parse_statements()?
        };
        self.container.extend(&added);
        debug!(
            "topology now has {} nodes, {} edges",
            self.network.node_count(),
            self.network.edge_count()
        );
        Ok(self)
    }

    /// Read and parse a notation file.
    pub fn from_file(path: &std::path::Path) -> NetworkResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::parse(&source)
    }

    pub fn network(&self) -> &Network<String> {
        &self.network
    }

    pub fn network_mut(&mut self) -> &mut Network<String> {
        &mut self.network
    }

    /// Every node mentioned, in the order the statements produced them.
    pub fn container(&self) -> &NodeContainer {
        &self.container
    }

    /// Name to id table.
    pub fn symbols(&self) -> &BTreeMap<String, NodeId> {
        &self.symbols
    }

    /// Look up a node by name.
    pub fn resolve(&self, name: &str) -> NetworkResult<NodeId> {
        self.symbols
            .get(name)
            .copied()
            .ok_or_else(|| NetworkError::UnknownSymbol(name.to_string()))
    }

    /// Name of a node.
    pub fn name(&self, id: NodeId) -> NetworkResult<&str> {
        Ok(self.network.payload(id)?.as_str())
    }
}
