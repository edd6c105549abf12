//! In-memory graph operations: the core data structure.

pub mod container;
pub mod network;
pub mod topology;
pub mod traversal;

pub use container::{Element, NodeContainer, Pattern};
pub use network::Network;
pub use traversal::LevelWalker;
