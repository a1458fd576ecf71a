//! Multi-field drop-target rewriter.
//!
//! Processes form submissions whose field names encode a path into a
//! hierarchical tree of named nodes. A field name carrying the reserved
//! prefix (`./dropTarget->`) is an instruction: strip the prefix, parse the
//! remainder into a path expression, walk (and lazily create) the matching
//! nodes, and write the submitted value into the target property. Properties
//! written outside a composite child are kept array-shaped; each
//! `{{COMPOSITE}}` segment mints a fresh auto-numbered `item<n>` child that
//! receives a plain scalar.
//!
//! The tree behind the walk is reached through the [`tree::TreeStore`] trait,
//! so the core runs against [`tree::MemoryTree`] in tests and against a real
//! backend in a host pipeline.
//!
//! # Example
//!
//! ```
//! use drop_target::rewriter::{process, FieldMap};
//! use drop_target::tree::{MemoryTree, PropertyValue, TreeStore};
//!
//! let mut tree = MemoryTree::new();
//! let root = tree.root();
//!
//! let fields: FieldMap = [
//!     ("./dropTarget->@items", "a"),
//!     ("./dropTarget->/subNode/{{COMPOSITE}}/@link", "b"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let modifications = process(&mut tree, root, &fields).unwrap();
//! assert_eq!(modifications.len(), 2);
//!
//! assert_eq!(
//!     tree.get_property(root, "items"),
//!     Some(PropertyValue::multi(["a"]))
//! );
//! let sub = tree.get_child(root, "subNode").unwrap();
//! let item0 = tree.get_child(sub, "item0").unwrap();
//! assert_eq!(
//!     tree.get_property(item0, "link"),
//!     Some(PropertyValue::single("b"))
//! );
//! ```

pub mod rewriter;
pub mod tree;

pub use rewriter::{process, FieldMap, Modification, ModificationKind, RewriteError};
pub use tree::{MemoryTree, NodeId, PropertyValue, TreeError, TreeStore};

// Re-export the path-expression crate so hosts depend on one crate only.
pub use drop_target_path as path;
