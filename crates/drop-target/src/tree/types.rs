//! Core types for the tree module.

use thiserror::Error;

/// Handle to a node inside a [`TreeStore`](crate::tree::TreeStore).
///
/// Handles are store-specific and only meaningful against the store that
/// issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// The value of a node property: one text value or an ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Single(String),
    Multi(Vec<String>),
}

impl PropertyValue {
    /// Single value from a `&str`.
    pub fn single(value: impl Into<String>) -> Self {
        PropertyValue::Single(value.into())
    }

    /// Multi value from anything iterable over strings.
    pub fn multi<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropertyValue::Multi(values.into_iter().map(Into::into).collect())
    }

    /// Flatten into a sequence: a single value becomes a one-element vec.
    /// This is the promotion step of the append path.
    pub fn into_values(self) -> Vec<String> {
        match self {
            PropertyValue::Single(value) => vec![value],
            PropertyValue::Multi(values) => values,
        }
    }

    /// The scalar text, if this is a single value.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            PropertyValue::Single(value) => Some(value),
            PropertyValue::Multi(_) => None,
        }
    }

    /// The sequence, if this is a multi value.
    pub fn as_multi(&self) -> Option<&[String]> {
        match self {
            PropertyValue::Single(_) => None,
            PropertyValue::Multi(values) => Some(values),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("NO_SUCH_NODE")]
    NoSuchNode,
    #[error("NO_SUCH_CHILD: {0}")]
    NoSuchChild(String),
    #[error("CHILD_EXISTS: {0}")]
    ChildExists(String),
}
