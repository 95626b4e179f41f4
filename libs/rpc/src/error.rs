//! Dispatch error taxonomy
//!
//! Dispatch-layer failures are non-fatal and locally absorbed: rendered
//! once into the deduplicated diagnostic channel, then the affected send or
//! receive is dropped. They are never returned to callers and never tear
//! down a connection. The one deliberate exception is [`InvocationError`],
//! which is produced by the invoked target itself, not by this layer, and
//! follows the target's own contract.

use codec::CodecError;
use thiserror::Error;
use types::{CallKind, NodePath, PeerId, ProcedureKey};

/// A send or receive the dispatch layer had to drop.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DispatchError {
    /// The `(path, method)` pair was never registered.
    #[error("method not registered as rpc: {key}")]
    Unregistered { key: ProcedureKey },

    /// Puppet/Master semantics were used on a target without an owner.
    #[error("target {path} does not expose ownership, required by {kind} procedures")]
    MissingOwnership { path: NodePath, kind: CallKind },

    /// Receive-side address did not resolve to a live node. Expected in a
    /// live session (the target may have been destroyed between send and
    /// receive) and therefore a warning, not an error.
    #[error("rpc call to missing node: {path}")]
    MissingTarget { path: NodePath },

    /// Inbound buffer failed framing or body validation.
    #[error("failed to decode inbound packet: {0}")]
    Decode(#[from] CodecError),

    /// Outgoing envelope failed to serialize.
    #[error("failed to encode rpc {key}: {source}")]
    Encode { key: ProcedureKey, source: CodecError },

    /// A send named a peer with no open connection (and the peer was not
    /// the hosting local peer, so local execution was not the intent).
    #[error("no open connection to {peer}; rpc dropped")]
    PeerUnreachable { peer: PeerId },
}

/// Failure surfaced by an invoked target method.
///
/// Opaque to the dispatch layer: senders pass it through to the caller,
/// the receiver logs it and moves to the next buffer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InvocationError {
    /// The target has no method by that name in its dispatch table.
    #[error("unknown method: {0}")]
    UnknownMethod(String),

    /// The argument tuple did not match the method's arity or types.
    #[error("bad arguments for {method}: {detail}")]
    BadArguments { method: String, detail: String },

    /// The method ran and failed on its own terms.
    #[error("{0}")]
    Failed(String),
}
