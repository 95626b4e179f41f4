//! In-process transport
//!
//! Pairs of cross-linked mailboxes behind one mutex. A send on one end of a
//! pair appends to the other end's queue; a poll drains the caller's own
//! queue in FIFO order. Used by tests, examples and single-machine
//! sessions; delivery tiers are accepted and ignored since nothing here can
//! be lost.

use crate::connection::ConnectionHandle;
use crate::transport::{DeliveryTier, Transport};
use bytes::Bytes;
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

#[derive(Default)]
struct Mailboxes {
    /// Inbound queue per local handle.
    inbound: HashMap<ConnectionHandle, VecDeque<Bytes>>,
    /// Local handle -> the handle whose queue a send lands in.
    peer: HashMap<ConnectionHandle, ConnectionHandle>,
}

/// In-process [`Transport`] built from cross-linked mailbox pairs.
#[derive(Default)]
pub struct MemoryTransport {
    inner: Mutex<Mailboxes>,
    next_handle: AtomicU64,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a linked pair of connections. Bytes sent on the first handle
    /// arrive at the second and vice versa.
    pub fn open_pair(&self) -> (ConnectionHandle, ConnectionHandle) {
        let a = ConnectionHandle(self.next_handle.fetch_add(1, Ordering::SeqCst));
        let b = ConnectionHandle(self.next_handle.fetch_add(1, Ordering::SeqCst));

        let mut inner = self.inner.lock();
        inner.inbound.insert(a, VecDeque::new());
        inner.inbound.insert(b, VecDeque::new());
        inner.peer.insert(a, b);
        inner.peer.insert(b, a);
        (a, b)
    }

    /// Close both ends of the pair `conn` belongs to. Pending messages on
    /// either end are discarded.
    pub fn close(&self, conn: ConnectionHandle) {
        let mut inner = self.inner.lock();
        if let Some(remote) = inner.peer.remove(&conn) {
            inner.peer.remove(&remote);
            inner.inbound.remove(&remote);
        }
        inner.inbound.remove(&conn);
    }

    /// Number of buffers waiting to be polled on `conn`.
    pub fn pending(&self, conn: ConnectionHandle) -> usize {
        self.inner
            .lock()
            .inbound
            .get(&conn)
            .map_or(0, VecDeque::len)
    }
}

impl Transport for MemoryTransport {
    fn send(&self, conn: ConnectionHandle, payload: &[u8], _tier: DeliveryTier) {
        let mut inner = self.inner.lock();
        let Some(remote) = inner.peer.get(&conn).copied() else {
            warn!(%conn, "send on unknown or closed connection; dropping {} bytes", payload.len());
            return;
        };
        if let Some(queue) = inner.inbound.get_mut(&remote) {
            queue.push_back(Bytes::copy_from_slice(payload));
        }
    }

    fn poll(&self, conn: ConnectionHandle, max: usize) -> Vec<Bytes> {
        let mut inner = self.inner.lock();
        let Some(queue) = inner.inbound.get_mut(&conn) else {
            return Vec::new();
        };
        let count = queue.len().min(max);
        queue.drain(..count).collect()
    }
}
