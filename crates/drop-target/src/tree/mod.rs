//! The node tree the rewriter mutates.
//!
//! [`TreeStore`] is the seam to the external tree-structured store;
//! [`MemoryTree`] is the in-memory implementation used in tests and for
//! embedding without a real backend.

pub mod memory;
pub mod store;
pub mod types;

pub use memory::MemoryTree;
pub use store::TreeStore;
pub use types::{NodeId, PropertyValue, TreeError};
