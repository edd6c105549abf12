//! Diagnostic renderings of a network (text dump, JSON snapshot).

pub mod dump;
pub mod snapshot;

pub use dump::{dump, write_dump};
pub use snapshot::{NetworkSnapshot, NodeRecord};
