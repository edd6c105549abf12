//! Error types for the node network library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the node network library.
///
/// The graph core itself is total over the ids a network issued; these
/// variants cover foreign ids, notation input and the CLI.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Node ID not issued by this network.
    #[error("Node ID {0} not found")]
    NodeNotFound(NodeId),

    /// Node is not on any level recorded by a traversal.
    #[error("Node ID {0} was not discovered by this traversal")]
    NotDiscovered(NodeId),

    /// Notation input could not be parsed.
    #[error("Parse error at position {position}: {message}")]
    Parse { position: usize, message: String },

    /// A node name that the parsed topology does not define.
    #[error("Unknown node symbol: {0}")]
    UnknownSymbol(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for node network operations.
pub type NetworkResult<T> = Result<T, NetworkError>;
