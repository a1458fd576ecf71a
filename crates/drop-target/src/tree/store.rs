//! The tree-store collaborator seam.

use super::types::{NodeId, PropertyValue, TreeError};

/// Abstract capability over the external tree of nodes the rewriter mutates.
///
/// All calls are synchronous; failures are fatal for the submission being
/// processed (the rewriter performs no retries and no rollback). Child names
/// are unique among a node's direct children, and children are ordered and
/// countable, which the composite numbering scheme relies on.
pub trait TreeStore {
    /// Look up a direct child by name.
    fn get_child(&self, node: NodeId, name: &str) -> Option<NodeId>;

    /// Create a new direct child with an empty property set.
    ///
    /// # Errors
    ///
    /// `TreeError::ChildExists` if a child with that name is already present.
    fn create_child(&mut self, parent: NodeId, name: &str) -> Result<NodeId, TreeError>;

    /// Delete a direct child and its subtree.
    ///
    /// # Errors
    ///
    /// `TreeError::NoSuchChild` if no child with that name exists.
    fn delete_child(&mut self, parent: NodeId, name: &str) -> Result<(), TreeError>;

    /// Number of direct children. Re-queried freshly by the rewriter whenever
    /// a composite segment is reached.
    fn count_children(&self, node: NodeId) -> usize;

    /// Read a property value. `None` when the property is absent.
    fn get_property(&self, node: NodeId, name: &str) -> Option<PropertyValue>;

    /// Write a property value, replacing any existing value.
    fn set_property(
        &mut self,
        node: NodeId,
        name: &str,
        value: PropertyValue,
    ) -> Result<(), TreeError>;

    /// Remove a property. A no-op when the property is absent, so cleanup
    /// stays idempotent.
    fn remove_property(&mut self, node: NodeId, name: &str) -> Result<(), TreeError>;

    /// The node's unique slash-separated path, for change records.
    fn path_of(&self, node: NodeId) -> &str;
}
