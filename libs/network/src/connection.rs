//! Opaque connection handles
//!
//! Connections are owned by the session layer; the dispatch core only
//! indexes them. A handle says nothing about the transport behind it.

use std::fmt;

/// Opaque handle to one open connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionHandle(pub u64);

impl fmt::Display for ConnectionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn:{}", self.0)
    }
}
