//! Session context
//!
//! The single shared state object of the dispatch layer: local and host
//! identities, the connection set, the procedure registry and the
//! deduplicated diagnostic log. Owned by the session/runtime layer and
//! passed by reference to senders and receivers: one instance per
//! process-wide session, no ambient globals.

use crate::diagnostics::DiagnosticLog;
use crate::registry::ProcedureRegistry;
use network::ConnectionHandle;
use std::collections::HashMap;
use types::{CallKind, NodePath, PeerId};

/// Identities, connections and shared dispatch state for one session.
///
/// Invariant: exactly one of {the local peer is host, a connection to the
/// host is set} holds at steady state; the two constructors each establish
/// one side of it. Connections themselves are owned by the external
/// session layer: this context only indexes them.
#[derive(Debug)]
pub struct SessionContext {
    local_peer: PeerId,
    host_peer: PeerId,
    playing_as_host: bool,
    connection_to_host: Option<ConnectionHandle>,
    connections: HashMap<PeerId, ConnectionHandle>,
    registry: ProcedureRegistry,
    diagnostics: DiagnosticLog,
}

impl SessionContext {
    /// Context for the hosting peer. The host is its own authority relay
    /// and has no connection-to-host.
    pub fn host(local_peer: PeerId) -> Self {
        Self {
            local_peer,
            host_peer: local_peer,
            playing_as_host: true,
            connection_to_host: None,
            connections: HashMap::new(),
            registry: ProcedureRegistry::new(),
            diagnostics: DiagnosticLog::new(),
        }
    }

    /// Context for a non-host client with an established connection to the
    /// host.
    pub fn client(local_peer: PeerId, host_peer: PeerId, to_host: ConnectionHandle) -> Self {
        Self {
            local_peer,
            host_peer,
            playing_as_host: false,
            connection_to_host: Some(to_host),
            connections: HashMap::new(),
            registry: ProcedureRegistry::new(),
            diagnostics: DiagnosticLog::new(),
        }
    }

    pub fn local_peer(&self) -> PeerId {
        self.local_peer
    }

    pub fn host_peer(&self) -> PeerId {
        self.host_peer
    }

    pub fn is_host(&self) -> bool {
        self.playing_as_host
    }

    /// Whether the local peer is the authority over a target owned by
    /// `owner`.
    pub fn is_authority(&self, owner: PeerId) -> bool {
        self.local_peer == owner
    }

    pub fn connection_to_host(&self) -> Option<ConnectionHandle> {
        self.connection_to_host
    }

    /// Index an established peer connection. Hosts track one entry per
    /// connected client.
    pub fn add_peer(&mut self, peer: PeerId, conn: ConnectionHandle) {
        self.connections.insert(peer, conn);
    }

    /// Drop a peer from the connection set (e.g. on disconnect).
    pub fn remove_peer(&mut self, peer: PeerId) -> Option<ConnectionHandle> {
        self.connections.remove(&peer)
    }

    pub fn peer_connection(&self, peer: PeerId) -> Option<ConnectionHandle> {
        self.connections.get(&peer).copied()
    }

    /// All indexed peer connections, in unspecified order.
    pub fn peers(&self) -> impl Iterator<Item = (PeerId, ConnectionHandle)> + '_ {
        self.connections.iter().map(|(p, c)| (*p, *c))
    }

    pub fn peer_count(&self) -> usize {
        self.connections.len()
    }

    /// Register a procedure in this session's registry.
    pub fn register(&self, path: impl Into<NodePath>, method: impl Into<String>, kind: CallKind) {
        self.registry.register(path, method, kind);
    }

    pub fn registry(&self) -> &ProcedureRegistry {
        &self.registry
    }

    pub fn diagnostics(&self) -> &DiagnosticLog {
        &self.diagnostics
    }
}
