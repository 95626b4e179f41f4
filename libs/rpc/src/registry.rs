//! Procedure registry
//!
//! Maps `(path, method)` keys to their declared call semantics. Populated
//! at target-initialization time, read on every send and receive.
//! Registration is an unconditional upsert: re-registering a key overwrites
//! its semantics, which lets a target re-declare its procedures when it is
//! re-initialized. Target existence is deliberately not validated: the
//! node a path names may not exist yet.

use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::info;
use types::{CallKind, NodePath, ProcedureKey};

/// Shared `ProcedureKey -> CallKind` mapping.
///
/// Registration is rare and lookups are frequent, so the map sits behind a
/// read-mostly lock; an upsert is a single atomic map write, never
/// partially visible.
#[derive(Debug, Default)]
pub struct ProcedureRegistry {
    procedures: RwLock<HashMap<ProcedureKey, CallKind>>,
}

impl ProcedureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or re-register) a procedure under the given semantics.
    pub fn register(
        &self,
        path: impl Into<NodePath>,
        method: impl Into<String>,
        kind: CallKind,
    ) {
        let key = ProcedureKey::new(path, method);
        info!("registered rpc procedure {key} as {kind}");
        self.procedures.write().insert(key, kind);
    }

    /// Semantics of a registered procedure, if any.
    pub fn lookup(&self, key: &ProcedureKey) -> Option<CallKind> {
        self.procedures.read().get(key).copied()
    }

    /// Number of registered procedures.
    pub fn len(&self) -> usize {
        self.procedures.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.procedures.read().is_empty()
    }
}
