//! High-level queries: connectivity and shortest paths.

pub mod connectivity;
pub mod path;

pub use connectivity::ConnectivityEngine;
pub use path::{NodePath, PathFinder};
