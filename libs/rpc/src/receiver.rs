//! Dispatch receiver
//!
//! Driven by the scheduler once per tick: drain every open connection
//! (just the host link on a client, every client link on the host), decode
//! each buffer, then validate target existence, registration and authority
//! before invoking. Every envelope terminates within its tick, dropped or
//! executed, and a bad buffer never tears down its connection.

use crate::error::DispatchError;
use crate::node::NodeTree;
use crate::session::SessionContext;
use codec::{Envelope, PacketKind};
use network::{ConnectionHandle, Transport, DEFAULT_POLL_BATCH};
use tracing::error;
use types::{CallKind, ProcedureKey};

/// Per-tick drain-and-dispatch pump for one session.
pub struct RpcReceiver<'a, T: Transport + ?Sized> {
    session: &'a SessionContext,
    transport: &'a T,
}

impl<'a, T: Transport + ?Sized> RpcReceiver<'a, T> {
    pub fn new(session: &'a SessionContext, transport: &'a T) -> Self {
        Self { session, transport }
    }

    /// Drain and dispatch all pending inbound traffic. Call once per tick.
    ///
    /// Per-connection arrival order is preserved through dispatch; the
    /// order in which distinct connections are visited is unspecified.
    pub fn pump(&self, tree: &mut dyn NodeTree) {
        if let Some(conn) = self.session.connection_to_host() {
            self.drain_connection(conn, tree);
        } else {
            for (_peer, conn) in self.session.peers() {
                self.drain_connection(conn, tree);
            }
        }
    }

    fn drain_connection(&self, conn: ConnectionHandle, tree: &mut dyn NodeTree) {
        for buffer in self.transport.poll(conn, DEFAULT_POLL_BATCH) {
            self.handle_buffer(&buffer, tree);
        }
    }

    fn handle_buffer(&self, buffer: &[u8], tree: &mut dyn NodeTree) {
        let envelope = match codec::decode(buffer) {
            Ok(envelope) => envelope,
            Err(err) => {
                self.session
                    .diagnostics()
                    .error_once(DispatchError::Decode(err).to_string());
                return;
            }
        };
        match envelope.kind {
            PacketKind::Rpc => self.handle_rpc(envelope, tree),
        }
    }

    fn handle_rpc(&self, envelope: Envelope, tree: &mut dyn NodeTree) {
        let Envelope {
            path, method, args, ..
        } = envelope;

        let Some(target) = tree.resolve(&path) else {
            self.session
                .diagnostics()
                .warn_once(DispatchError::MissingTarget { path }.to_string());
            return;
        };

        let key = ProcedureKey::new(path, method);
        let Some(kind) = self.session.registry().lookup(&key) else {
            self.session
                .diagnostics()
                .warn_once(DispatchError::Unregistered { key }.to_string());
            return;
        };

        let is_owner = if kind.requires_ownership() {
            let Some(owner) = target.ownership().map(|o| o.owner()) else {
                self.session.diagnostics().error_once(
                    DispatchError::MissingOwnership {
                        path: key.path,
                        kind,
                    }
                    .to_string(),
                );
                return;
            };
            self.session.is_authority(owner)
        } else {
            false
        };

        let execute = match kind {
            CallKind::Remote | CallKind::RemoteSync => true,
            CallKind::Puppet => !is_owner,
            CallKind::Master => is_owner,
        };

        if execute {
            if let Err(err) = target.invoke(&key.method, &args) {
                // The target's own error policy applies; the dispatch layer
                // just records the outcome and moves to the next buffer.
                error!(path = %key.path, method = %key.method, "rpc invocation failed: {err}");
            }
        }
    }
}
