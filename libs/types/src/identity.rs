//! Peer identity
//!
//! A peer is any connected participant in a session, including the host.
//! Identities are assigned by the session layer (lobby/matchmaking) before
//! any RPC traffic flows; this crate treats them as opaque 64-bit values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of a session participant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct PeerId(pub u64);

impl PeerId {
    /// Raw numeric form, for logging and map keys in external systems.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for PeerId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "peer:{}", self.0)
    }
}
