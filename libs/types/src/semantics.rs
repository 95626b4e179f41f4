//! Call semantics and procedure keys
//!
//! Every callable procedure is registered under a `(path, method)` key with
//! one of four call kinds. The kind is fixed for the lifetime of a
//! registration and drives both the send-side routing decision and the
//! receive-side authority check.

use crate::path::NodePath;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared semantics of a registered procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallKind {
    /// Deliver to the named recipient(s); never executes locally on send.
    Remote,
    /// Deliver to the named recipient(s) AND execute locally at the sender,
    /// exactly once.
    RemoteSync,
    /// Deliver only to recipients that are NOT the owner of the target; on
    /// receipt, executes only if the local peer is not the owner.
    Puppet,
    /// Deliver only to the recipient that IS the owner of the target; on
    /// receipt, executes only if the local peer is the owner.
    Master,
}

impl CallKind {
    /// Whether this kind requires the target to expose an owner.
    pub fn requires_ownership(self) -> bool {
        matches!(self, CallKind::Puppet | CallKind::Master)
    }
}

impl fmt::Display for CallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CallKind::Remote => "remote",
            CallKind::RemoteSync => "remote-sync",
            CallKind::Puppet => "puppet",
            CallKind::Master => "master",
        };
        f.write_str(name)
    }
}

/// Composite key identifying one callable procedure: the target's address
/// plus the method name. No two distinct procedures share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProcedureKey {
    pub path: NodePath,
    pub method: String,
}

impl ProcedureKey {
    pub fn new(path: impl Into<NodePath>, method: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
        }
    }
}

// Rendered as `path::method`, the form used in every diagnostic about a
// procedure.
impl fmt::Display for ProcedureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.path, self.method)
    }
}
