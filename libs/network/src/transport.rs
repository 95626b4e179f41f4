//! Transport trait
//!
//! Both operations are non-blocking by contract: `send` is fire-and-forget
//! with no delivery confirmation surfaced to the caller, and `poll` returns
//! immediately with whatever is pending (possibly nothing). The dispatch
//! core is driven by a cooperative tick and must never be suspended by its
//! transport.

use crate::connection::ConnectionHandle;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Delivery tier requested for one send.
///
/// A hint to the transport, which owns what the tiers actually mean.
/// In-process transports deliver everything; a platform transport typically
/// maps these to its reliable and best-effort channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DeliveryTier {
    /// Delivered in order, retransmitted on loss. RPC sends default to this.
    #[default]
    Reliable,
    /// Fire-and-forget datagram; may be dropped or reordered by the network.
    Unreliable,
}

/// Moves opaque byte buffers over established connections.
pub trait Transport: Send + Sync {
    /// Send one buffer on a connection. Best-effort: errors are the
    /// transport's to absorb (and log), never the caller's to handle.
    fn send(&self, conn: ConnectionHandle, payload: &[u8], tier: DeliveryTier);

    /// Take up to `max` pending inbound buffers from a connection,
    /// preserving arrival order. Returns an empty vec when nothing is
    /// pending; never waits.
    fn poll(&self, conn: ConnectionHandle, max: usize) -> Vec<Bytes>;
}
