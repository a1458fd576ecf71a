//! The drop-target rewrite pass.
//!
//! Walks every submitted field carrying the drop-target prefix, parses the
//! encoded path expression, and applies the submitted value to the node tree.

use drop_target_path::{parse_path_expr, scratch_node_name, target_of, Segment};

use super::types::{FieldMap, Modification, RewriteError};
use crate::tree::{NodeId, PropertyValue, TreeStore};

/// Process one submission against the tree rooted at `root`.
///
/// For every field whose name starts with the drop-target prefix, in
/// submission order: strip the prefix, parse the remainder into a path
/// expression, and apply the field's first submitted value starting from
/// `root`. Fields without the prefix, and fields whose remainder parses to an
/// empty expression, are skipped without error.
///
/// Returns one [`Modification`] record per applied field, identifying the
/// mutated subtree's root path.
///
/// # Errors
///
/// The first tree-store failure aborts the whole pass. No rollback is
/// performed; the host's transaction boundary owns atomicity.
///
/// # Example
///
/// ```
/// use drop_target::rewriter::{process, FieldMap};
/// use drop_target::tree::{MemoryTree, PropertyValue, TreeStore};
///
/// let mut tree = MemoryTree::new();
/// let root = tree.root();
/// let fields: FieldMap = [("./dropTarget->@items", "a")].into_iter().collect();
///
/// let modifications = process(&mut tree, root, &fields).unwrap();
/// assert_eq!(modifications.len(), 1);
/// assert_eq!(
///     tree.get_property(root, "items"),
///     Some(PropertyValue::multi(["a"]))
/// );
/// ```
pub fn process<S: TreeStore>(
    store: &mut S,
    root: NodeId,
    fields: &FieldMap,
) -> Result<Vec<Modification>, RewriteError> {
    let mut modifications = Vec::new();
    for (name, values) in fields.iter() {
        let Some(target) = target_of(name) else {
            continue;
        };
        let Some(value) = values.first() else {
            continue;
        };
        let expr = parse_path_expr(target);
        if expr.is_empty() {
            // Parse skip: no mutation, no record, no error.
            continue;
        }
        apply_field(store, root, name, &expr, value)?;
        modifications.push(Modification::modified(store.path_of(root)));
    }
    Ok(modifications)
}

/// Apply one parsed field entry: cleanup, then the walk.
fn apply_field<S: TreeStore>(
    store: &mut S,
    root: NodeId,
    raw_key: &str,
    expr: &[Segment],
    value: &str,
) -> Result<(), RewriteError> {
    cleanup(store, root, raw_key)?;

    let mut current = root;
    let mut is_array = true;
    for segment in expr {
        match segment {
            Segment::Navigate(name) => {
                current = match store.get_child(current, name) {
                    Some(child) => child,
                    None => store.create_child(current, name)?,
                };
            }
            Segment::Composite => {
                // Numbering re-counts children at this very moment; earlier
                // field entries of the same pass may already have added items.
                let count = store.count_children(current);
                current = store.create_child(current, &format!("item{count}"))?;
                is_array = false;
            }
            Segment::Property(name) => {
                write_property(store, current, name, value, is_array)?;
                // The first property segment terminates the walk; trailing
                // segments are ignored.
                break;
            }
        }
    }
    Ok(())
}

/// Write the submitted value into the target property.
///
/// Outside a composite child the property stays array-shaped: an absent value
/// reads as an empty sequence, a single value is promoted to a one-element
/// sequence, and the new value is appended. Inside a composite child the node
/// is fresh, so the value is written as a plain scalar.
fn write_property<S: TreeStore>(
    store: &mut S,
    node: NodeId,
    name: &str,
    value: &str,
    is_array: bool,
) -> Result<(), RewriteError> {
    if is_array {
        let mut values = match store.get_property(node, name) {
            Some(existing) => existing.into_values(),
            None => Vec::new(),
        };
        values.push(value.to_string());
        store.remove_property(node, name)?;
        store.set_property(node, name, PropertyValue::Multi(values))?;
    } else {
        store.set_property(node, name, PropertyValue::single(value))?;
    }
    Ok(())
}

/// Per-field cleanup, before the walk.
///
/// Removes the raw field key from the root's own properties if it was ever
/// speculatively stored there, and deletes the stale scratch child a previous
/// widget implementation staged under the root. Both are idempotent no-ops
/// when absent.
fn cleanup<S: TreeStore>(store: &mut S, root: NodeId, raw_key: &str) -> Result<(), RewriteError> {
    store.remove_property(root, raw_key)?;
    let scratch = scratch_node_name();
    if store.get_child(root, scratch).is_some() {
        store.delete_child(root, scratch)?;
    }
    Ok(())
}
