//! Core types for the rewriter module.

use indexmap::IndexMap;
use thiserror::Error;

use crate::tree::TreeError;

/// Ordered multimap of submitted form fields.
///
/// Mirrors a multi-part form parameter model: each field name maps to one or
/// more submitted text values, and iteration follows insertion order, which
/// defines the processing order of a submission. The rewriter only reads the
/// first value per matched name.
#[derive(Debug, Clone, Default)]
pub struct FieldMap {
    entries: IndexMap<String, Vec<String>>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one value under a field name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// Append several values under a field name.
    pub fn insert_all<I, S>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry(name.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
    }

    /// The first submitted value for a field name.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.entries.get(name)?.first().map(String::as_str)
    }

    /// Iterate fields in submission order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N, V> FromIterator<(N, V)> for FieldMap
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut map = FieldMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

// ── Change records ────────────────────────────────────────────────────────

/// What happened to the node named in a [`Modification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModificationKind {
    Modified,
}

/// One change record emitted per applied field entry, identifying the mutated
/// subtree's root path. The host logs these for auditing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modification {
    pub kind: ModificationKind,
    pub path: String,
}

impl Modification {
    pub fn modified(path: impl Into<String>) -> Self {
        Modification {
            kind: ModificationKind::Modified,
            path: path.into(),
        }
    }
}

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RewriteError {
    #[error("TREE: {0}")]
    Tree(#[from] TreeError),
}
