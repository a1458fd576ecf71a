//! Type definitions for drop-target path expressions.

/// One step of a path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Walk into (or create) the child node with this name.
    Navigate(String),
    /// Create a fresh auto-numbered child under the current node and continue
    /// there.
    Composite,
    /// Write the submitted value into this property of the current node.
    /// Always the last meaningful step of an expression.
    Property(String),
}

/// A parsed path expression.
pub type PathExpr = Vec<Segment>;

impl Segment {
    /// Returns true for property segments, which terminate the walk.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Segment::Property(_))
    }

    /// The property name, if this is a property segment.
    pub fn property_name(&self) -> Option<&str> {
        match self {
            Segment::Property(name) => Some(name),
            _ => None,
        }
    }

    /// The child-node name, if this is a navigation segment.
    pub fn node_name(&self) -> Option<&str> {
        match self {
            Segment::Navigate(name) => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_terminal() {
        assert!(Segment::Property("items".to_string()).is_terminal());
        assert!(!Segment::Navigate("subNode".to_string()).is_terminal());
        assert!(!Segment::Composite.is_terminal());
    }

    #[test]
    fn test_accessors() {
        let prop = Segment::Property("items".to_string());
        assert_eq!(prop.property_name(), Some("items"));
        assert_eq!(prop.node_name(), None);

        let nav = Segment::Navigate("subNode".to_string());
        assert_eq!(nav.node_name(), Some("subNode"));
        assert_eq!(nav.property_name(), None);

        assert_eq!(Segment::Composite.node_name(), None);
        assert_eq!(Segment::Composite.property_name(), None);
    }
}
