//! NodeNetwork: in-memory undirected node networks.
//!
//! Nodes live in an arena ([`Network`]) and are wired together by composing
//! ordered groups ([`NodeContainer`]) with a fixed set of connection patterns.
//! Islands, distance levels and shortest paths are computed by iterative
//! breadth-first search.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod notation;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{ConnectivityEngine, NodePath, PathFinder};
pub use format::{dump, NetworkSnapshot};
pub use graph::{topology, Element, LevelWalker, Network, NodeContainer, Pattern};
pub use notation::Topology;
pub use types::{NetworkError, NetworkResult, Node, NodeId};
