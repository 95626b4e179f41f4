//! # Parley Transport Boundary
//!
//! ## Purpose
//!
//! The seam between the RPC dispatch core and whatever actually moves bytes
//! between peers. This crate ONLY handles:
//! - Opaque connection handles
//! - Best-effort, non-blocking send and poll
//! - Delivery tier hints (reliable / unreliable)
//!
//! It does NOT handle:
//! - Connection handshakes or session establishment
//! - Reliability, ordering across connections, congestion control
//! - Envelope contents (the dispatch layer never shows this crate a decoded
//!   message, and this crate never inspects a payload)
//!
//! ## Architecture Role
//!
//! ```text
//! rpc (dispatch) → [Transport trait] → platform sockets / relay service
//!        ↓                ↓
//!   encoded bytes    MemoryTransport (in-process reference impl)
//! ```
//!
//! Real sessions plug a platform transport in behind the [`Transport`]
//! trait; tests, examples and single-machine sessions use
//! [`MemoryTransport`].

pub mod connection;
pub mod memory;
pub mod transport;

pub use connection::ConnectionHandle;
pub use memory::MemoryTransport;
pub use transport::{DeliveryTier, Transport};

/// Default bound on buffers taken from one connection per poll.
///
/// A receiver drains at most this many pending messages per connection per
/// tick; anything beyond stays queued in the transport for the next tick.
pub const DEFAULT_POLL_BATCH: usize = 16;
