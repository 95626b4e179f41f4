//! Target capability traits
//!
//! The host runtime owns an addressable object tree; the dispatch layer
//! sees it only through these traits. Dynamic "call by name" stays on the
//! wire, but on each peer it lands on a statically-typed dispatch table:
//! a target implements [`RpcTarget::invoke`] with an explicit match over
//! its method names. Ownership is an optional capability queried at
//! dispatch time, not a base-class obligation.

use crate::error::InvocationError;
use types::{NodePath, PeerId, Value};

/// Authority metadata a target may expose.
///
/// The owner is the identity designated as the single source of truth for
/// the target's state; Puppet and Master procedures cannot be dispatched
/// without it.
pub trait Ownership {
    /// Identity that owns this target. Set at target creation or ownership
    /// assignment, stable while a call is in flight.
    fn owner(&self) -> PeerId;
}

/// A node that can be called through the RPC layer.
pub trait RpcTarget {
    /// The node's address in the object tree, used when forming outgoing
    /// envelopes so the receiving peer can resolve the same logical node.
    fn path(&self) -> NodePath;

    /// Invoke a method by its wire name with a decoded argument tuple.
    ///
    /// Arity and type checking happen here, inside the target's own
    /// dispatch table; the RPC layer neither catches nor reinterprets the
    /// resulting errors.
    fn invoke(&mut self, method: &str, args: &[Value]) -> Result<(), InvocationError>;

    /// Ownership capability query. Targets without authority semantics
    /// keep the default.
    fn ownership(&self) -> Option<&dyn Ownership> {
        None
    }
}

/// Resolves wire addresses to live targets in the host runtime's tree.
pub trait NodeTree {
    /// Look up a node by address. `None` is an expected outcome, not an
    /// error: the node may have been destroyed between send and receive.
    fn resolve(&mut self, path: &NodePath) -> Option<&mut dyn RpcTarget>;
}
