//! In-memory tree store, for tests and for embedding without a real backend.

use indexmap::IndexMap;
use serde_json::Value;

use super::store::TreeStore;
use super::types::{NodeId, PropertyValue, TreeError};

#[derive(Debug, Clone)]
struct NodeEntry {
    path: String,
    properties: IndexMap<String, PropertyValue>,
    children: IndexMap<String, NodeId>,
}

impl NodeEntry {
    fn new(path: String) -> Self {
        NodeEntry {
            path,
            properties: IndexMap::new(),
            children: IndexMap::new(),
        }
    }
}

/// Slab-allocated in-memory node tree.
///
/// Children and properties are ordered maps, so insertion order is observable
/// and child counts are stable, which the composite numbering scheme needs.
/// Deleting a child unlinks its subtree; the slab slots are not reclaimed, and
/// handles into a deleted subtree dangle. Request-scoped use only.
#[derive(Debug, Clone)]
pub struct MemoryTree {
    nodes: Vec<NodeEntry>,
}

impl MemoryTree {
    /// Empty tree with a root node at path `/`.
    pub fn new() -> Self {
        Self::with_root_path("/")
    }

    /// Empty tree with a root node at the given path.
    pub fn with_root_path(path: impl Into<String>) -> Self {
        MemoryTree {
            nodes: vec![NodeEntry::new(path.into())],
        }
    }

    /// Handle to the root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Build a tree from a JSON fixture, rooted at `/`.
    ///
    /// Conversion is lenient, in the shape tests want:
    /// - a JSON object becomes a child node,
    /// - a string becomes a single-valued property,
    /// - an array becomes a multi-valued property (elements stringified),
    /// - other scalars are stringified into single-valued properties.
    ///
    /// # Example
    ///
    /// ```
    /// use drop_target::tree::{MemoryTree, PropertyValue, TreeStore};
    /// use serde_json::json;
    ///
    /// let tree = MemoryTree::from_json(&json!({
    ///     "items": ["a"],
    ///     "subNode": {"link": "x"},
    /// }));
    /// let root = tree.root();
    /// assert_eq!(
    ///     tree.get_property(root, "items"),
    ///     Some(PropertyValue::multi(["a"]))
    /// );
    /// let sub = tree.get_child(root, "subNode").unwrap();
    /// assert_eq!(tree.path_of(sub), "/subNode");
    /// ```
    pub fn from_json(value: &Value) -> Self {
        Self::from_json_at("/", value)
    }

    /// Build a tree from a JSON fixture, rooted at the given path.
    pub fn from_json_at(root_path: impl Into<String>, value: &Value) -> Self {
        let mut tree = Self::with_root_path(root_path);
        if let Value::Object(map) = value {
            tree.load_object(NodeId(0), map);
        }
        tree
    }

    fn load_object(&mut self, node: NodeId, map: &serde_json::Map<String, Value>) {
        for (key, value) in map {
            match value {
                Value::Object(child_map) => {
                    // Fixture objects are well-formed; a duplicate key cannot
                    // occur inside one JSON object.
                    let child = self
                        .create_child(node, key)
                        .unwrap_or_else(|_| unreachable!("fresh child name"));
                    self.load_object(child, child_map);
                }
                Value::Array(items) => {
                    let values: Vec<String> = items.iter().map(json_text).collect();
                    self.nodes[node.0]
                        .properties
                        .insert(key.clone(), PropertyValue::Multi(values));
                }
                other => {
                    self.nodes[node.0]
                        .properties
                        .insert(key.clone(), PropertyValue::Single(json_text(other)));
                }
            }
        }
    }

    /// Export the tree as a JSON value, properties before children, both in
    /// insertion order. Inverse of [`MemoryTree::from_json`] for string-only
    /// fixtures.
    pub fn to_json(&self) -> Value {
        self.node_to_json(NodeId(0))
    }

    fn node_to_json(&self, node: NodeId) -> Value {
        let entry = &self.nodes[node.0];
        let mut map = serde_json::Map::new();
        for (name, value) in &entry.properties {
            let json_value = match value {
                PropertyValue::Single(v) => Value::String(v.clone()),
                PropertyValue::Multi(vs) => {
                    Value::Array(vs.iter().cloned().map(Value::String).collect())
                }
            };
            map.insert(name.clone(), json_value);
        }
        for (name, child) in &entry.children {
            map.insert(name.clone(), self.node_to_json(*child));
        }
        Value::Object(map)
    }

    /// Names of a node's direct children, in order.
    pub fn child_names(&self, node: NodeId) -> Vec<String> {
        self.nodes
            .get(node.0)
            .map(|entry| entry.children.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn join_path(parent: &str, name: &str) -> String {
        if parent.ends_with('/') {
            format!("{parent}{name}")
        } else {
            format!("{parent}/{name}")
        }
    }
}

impl Default for MemoryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeStore for MemoryTree {
    fn get_child(&self, node: NodeId, name: &str) -> Option<NodeId> {
        self.nodes.get(node.0)?.children.get(name).copied()
    }

    fn create_child(&mut self, parent: NodeId, name: &str) -> Result<NodeId, TreeError> {
        let parent_entry = self.nodes.get(parent.0).ok_or(TreeError::NoSuchNode)?;
        if parent_entry.children.contains_key(name) {
            return Err(TreeError::ChildExists(name.to_string()));
        }
        let path = Self::join_path(&parent_entry.path, name);
        let child = NodeId(self.nodes.len());
        self.nodes.push(NodeEntry::new(path));
        self.nodes[parent.0].children.insert(name.to_string(), child);
        Ok(child)
    }

    fn delete_child(&mut self, parent: NodeId, name: &str) -> Result<(), TreeError> {
        let parent_entry = self.nodes.get_mut(parent.0).ok_or(TreeError::NoSuchNode)?;
        parent_entry
            .children
            .shift_remove(name)
            .map(|_| ())
            .ok_or_else(|| TreeError::NoSuchChild(name.to_string()))
    }

    fn count_children(&self, node: NodeId) -> usize {
        self.nodes
            .get(node.0)
            .map(|entry| entry.children.len())
            .unwrap_or(0)
    }

    fn get_property(&self, node: NodeId, name: &str) -> Option<PropertyValue> {
        self.nodes.get(node.0)?.properties.get(name).cloned()
    }

    fn set_property(
        &mut self,
        node: NodeId,
        name: &str,
        value: PropertyValue,
    ) -> Result<(), TreeError> {
        let entry = self.nodes.get_mut(node.0).ok_or(TreeError::NoSuchNode)?;
        entry.properties.insert(name.to_string(), value);
        Ok(())
    }

    fn remove_property(&mut self, node: NodeId, name: &str) -> Result<(), TreeError> {
        let entry = self.nodes.get_mut(node.0).ok_or(TreeError::NoSuchNode)?;
        entry.properties.shift_remove(name);
        Ok(())
    }

    fn path_of(&self, node: NodeId) -> &str {
        self.nodes
            .get(node.0)
            .map(|entry| entry.path.as_str())
            .unwrap_or("")
    }
}

fn json_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_and_get_child() {
        let mut tree = MemoryTree::new();
        let root = tree.root();
        let child = tree.create_child(root, "subNode").unwrap();
        assert_eq!(tree.get_child(root, "subNode"), Some(child));
        assert_eq!(tree.path_of(child), "/subNode");
        assert_eq!(tree.count_children(root), 1);
    }

    #[test]
    fn test_create_duplicate_child() {
        let mut tree = MemoryTree::new();
        let root = tree.root();
        tree.create_child(root, "subNode").unwrap();
        assert_eq!(
            tree.create_child(root, "subNode"),
            Err(TreeError::ChildExists("subNode".to_string()))
        );
    }

    #[test]
    fn test_delete_child() {
        let mut tree = MemoryTree::new();
        let root = tree.root();
        tree.create_child(root, "a").unwrap();
        tree.create_child(root, "b").unwrap();
        tree.delete_child(root, "a").unwrap();
        assert_eq!(tree.get_child(root, "a"), None);
        assert_eq!(tree.count_children(root), 1);
        assert_eq!(
            tree.delete_child(root, "a"),
            Err(TreeError::NoSuchChild("a".to_string()))
        );
    }

    #[test]
    fn test_properties() {
        let mut tree = MemoryTree::new();
        let root = tree.root();
        assert_eq!(tree.get_property(root, "items"), None);
        tree.set_property(root, "items", PropertyValue::single("a"))
            .unwrap();
        assert_eq!(
            tree.get_property(root, "items"),
            Some(PropertyValue::single("a"))
        );
        tree.remove_property(root, "items").unwrap();
        assert_eq!(tree.get_property(root, "items"), None);
        // Removing again is a no-op
        tree.remove_property(root, "items").unwrap();
    }

    #[test]
    fn test_child_order_and_paths() {
        let mut tree = MemoryTree::with_root_path("/content/page");
        let root = tree.root();
        tree.create_child(root, "item0").unwrap();
        tree.create_child(root, "item1").unwrap();
        assert_eq!(tree.child_names(root), vec!["item0", "item1"]);
        let item1 = tree.get_child(root, "item1").unwrap();
        assert_eq!(tree.path_of(item1), "/content/page/item1");
    }

    #[test]
    fn test_from_json() {
        let tree = MemoryTree::from_json(&json!({
            "title": "hello",
            "items": ["a", "b"],
            "subNode": {
                "link": "x",
            },
        }));
        let root = tree.root();
        assert_eq!(
            tree.get_property(root, "title"),
            Some(PropertyValue::single("hello"))
        );
        assert_eq!(
            tree.get_property(root, "items"),
            Some(PropertyValue::multi(["a", "b"]))
        );
        let sub = tree.get_child(root, "subNode").unwrap();
        assert_eq!(
            tree.get_property(sub, "link"),
            Some(PropertyValue::single("x"))
        );
    }

    #[test]
    fn test_from_json_stringifies_scalars() {
        let tree = MemoryTree::from_json(&json!({"count": 3, "flags": [true, false]}));
        let root = tree.root();
        assert_eq!(
            tree.get_property(root, "count"),
            Some(PropertyValue::single("3"))
        );
        assert_eq!(
            tree.get_property(root, "flags"),
            Some(PropertyValue::multi(["true", "false"]))
        );
    }

    #[test]
    fn test_to_json_roundtrip() {
        let fixture = json!({
            "items": ["a", "b"],
            "subNode": {
                "link": "x",
                "nested": {"deep": "y"},
            },
        });
        let tree = MemoryTree::from_json(&fixture);
        assert_eq!(tree.to_json(), fixture);
    }

    #[test]
    fn test_invalid_handle_reads() {
        let tree = MemoryTree::new();
        let bogus = NodeId(99);
        assert_eq!(tree.get_child(bogus, "x"), None);
        assert_eq!(tree.count_children(bogus), 0);
        assert_eq!(tree.get_property(bogus, "x"), None);
        assert_eq!(tree.path_of(bogus), "");
    }

    #[test]
    fn test_invalid_handle_writes() {
        let mut tree = MemoryTree::new();
        let bogus = NodeId(99);
        assert_eq!(
            tree.set_property(bogus, "x", PropertyValue::single("v")),
            Err(TreeError::NoSuchNode)
        );
        assert_eq!(tree.create_child(bogus, "x"), Err(TreeError::NoSuchNode));
    }
}
