//! Dispatch sender
//!
//! Per recipient, a send resolves the registered call semantics to a
//! `(send, execute locally)` pair, pushes an encoded envelope through the
//! transport when sending, and runs the target locally when the semantics
//! ask for it. Dispatch-layer failures go to the deduplicated diagnostic
//! channel and the affected recipient is skipped; sends are fire-and-forget
//! and never surface transport conditions to the caller.

use crate::error::{DispatchError, InvocationError};
use crate::node::RpcTarget;
use crate::session::SessionContext;
use network::{ConnectionHandle, DeliveryTier, Transport};
use types::{CallKind, PeerId, ProcedureKey, Value};

/// Application-facing send surface for one session.
///
/// Borrows the session context and a transport; construct freely, it holds
/// no state of its own.
pub struct RpcSender<'a, T: Transport + ?Sized> {
    session: &'a SessionContext,
    transport: &'a T,
}

impl<'a, T: Transport + ?Sized> RpcSender<'a, T> {
    pub fn new(session: &'a SessionContext, transport: &'a T) -> Self {
        Self { session, transport }
    }

    /// Send an RPC to the host. When the local peer is itself the host,
    /// the call executes locally exactly once and nothing touches the
    /// wire.
    pub fn send_to_host(
        &self,
        target: &mut dyn RpcTarget,
        method: &str,
        args: &[Value],
    ) -> Result<(), InvocationError> {
        self.send_to_host_with_tier(target, method, args, DeliveryTier::Reliable)
    }

    pub fn send_to_host_with_tier(
        &self,
        target: &mut dyn RpcTarget,
        method: &str,
        args: &[Value],
        tier: DeliveryTier,
    ) -> Result<(), InvocationError> {
        let recipient = self.session.host_peer();
        let conn = self.session.connection_to_host();
        self.dispatch_one(conn, recipient, target, method, args, tier, true)
            .map(|_| ())
    }

    /// Send an RPC to one specific peer.
    pub fn send_to_peer(
        &self,
        peer: PeerId,
        target: &mut dyn RpcTarget,
        method: &str,
        args: &[Value],
    ) -> Result<(), InvocationError> {
        self.send_to_peer_with_tier(peer, target, method, args, DeliveryTier::Reliable)
    }

    pub fn send_to_peer_with_tier(
        &self,
        peer: PeerId,
        target: &mut dyn RpcTarget,
        method: &str,
        args: &[Value],
        tier: DeliveryTier,
    ) -> Result<(), InvocationError> {
        let conn = self.session.peer_connection(peer);
        self.dispatch_one(conn, peer, target, method, args, tier, true)
            .map(|_| ())
    }

    /// Send an RPC to every connected peer. Meaningful on the host, whose
    /// connection set holds one entry per client; RemoteSync procedures
    /// execute locally exactly once across the whole expansion.
    pub fn send_to_all_peers(
        &self,
        target: &mut dyn RpcTarget,
        method: &str,
        args: &[Value],
    ) -> Result<(), InvocationError> {
        self.send_to_all_peers_with_tier(target, method, args, DeliveryTier::Reliable)
    }

    pub fn send_to_all_peers_with_tier(
        &self,
        target: &mut dyn RpcTarget,
        method: &str,
        args: &[Value],
        tier: DeliveryTier,
    ) -> Result<(), InvocationError> {
        let recipients: Vec<(PeerId, ConnectionHandle)> = self.session.peers().collect();
        let mut executed = false;
        for (peer, conn) in recipients {
            let ran = self.dispatch_one(
                Some(conn),
                peer,
                target,
                method,
                args,
                tier,
                !executed,
            )?;
            executed = executed || ran;
        }
        Ok(())
    }

    /// One recipient through the full decision pipeline. Returns whether
    /// the target executed locally, so multi-recipient expansions can keep
    /// local execution to exactly once.
    fn dispatch_one(
        &self,
        conn: Option<ConnectionHandle>,
        recipient: PeerId,
        target: &mut dyn RpcTarget,
        method: &str,
        args: &[Value],
        tier: DeliveryTier,
        allow_local: bool,
    ) -> Result<bool, InvocationError> {
        let key = ProcedureKey::new(target.path(), method);
        let Some(kind) = self.session.registry().lookup(&key) else {
            self.session
                .diagnostics()
                .error_once(DispatchError::Unregistered { key }.to_string());
            return Ok(false);
        };

        let owner = if kind.requires_ownership() {
            match target.ownership().map(|o| o.owner()) {
                Some(owner) => Some(owner),
                None => {
                    self.session.diagnostics().error_once(
                        DispatchError::MissingOwnership {
                            path: key.path.clone(),
                            kind,
                        }
                        .to_string(),
                    );
                    return Ok(false);
                }
            }
        } else {
            None
        };

        let (send, execute_locally) = match kind {
            CallKind::Remote => (true, false),
            CallKind::RemoteSync => (true, true),
            CallKind::Puppet => (owner != Some(recipient), false),
            CallKind::Master => (owner == Some(recipient), false),
        };

        if send {
            match conn {
                Some(conn) => match codec::encode_rpc(&key.path, method, args) {
                    Ok(wire) => self.transport.send(conn, &wire, tier),
                    Err(source) => self.session.diagnostics().error_once(
                        DispatchError::Encode {
                            key: key.clone(),
                            source,
                        }
                        .to_string(),
                    ),
                },
                None if recipient == self.session.local_peer() && self.session.is_host() => {
                    // The hosting peer addressed itself: there is no wire
                    // hop, so the "send" is a local execution, and the
                    // RemoteSync echo below must not run it a second time.
                    target.invoke(method, args)?;
                    return Ok(true);
                }
                None => {
                    // A missing connection to some other peer is a dead
                    // link, not an invitation to run the call here.
                    self.session.diagnostics().warn_once(
                        DispatchError::PeerUnreachable { peer: recipient }.to_string(),
                    );
                }
            }
        }

        if execute_locally && allow_local {
            target.invoke(method, args)?;
            return Ok(true);
        }

        Ok(false)
    }
}
