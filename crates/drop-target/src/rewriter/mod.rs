//! The multi-field drop-target rewriter.
//!
//! One pass over a submission: every field name carrying the reserved prefix
//! is parsed into a path expression and its value applied to the node tree.
//! See [`process`] for the contract.

pub mod apply;
pub mod types;

pub use apply::process;
pub use types::{FieldMap, Modification, ModificationKind, RewriteError};
