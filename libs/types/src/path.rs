//! Node addressing
//!
//! Callable targets live in the application's object tree and are addressed
//! by a hierarchical, `/`-separated path (e.g. `/world/player1`). The path
//! travels on the wire as a plain string so that the receiving peer can
//! resolve the same logical node in its own tree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hierarchical address of a node in the application's object tree.
///
/// Immutable once formed and cheap to clone; equality and hashing are
/// defined on the textual form, which makes paths usable as registry keys.
/// No validation is performed on construction: a path may name a node that
/// does not exist yet, which is legal at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath(String);

impl NodePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the path is rooted (starts with `/`).
    pub fn is_absolute(&self) -> bool {
        self.0.starts_with('/')
    }

    /// The path's segments, skipping the empty segment before a leading `/`.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }
}

impl From<&str> for NodePath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for NodePath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
