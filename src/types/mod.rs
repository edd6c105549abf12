//! All data types for the node network library.

pub mod error;
pub mod node;

pub use error::{NetworkError, NetworkResult};
pub use node::{Node, NodeId};
