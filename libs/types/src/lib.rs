//! # Parley Shared Types
//!
//! ## Purpose
//!
//! Pure data structures shared by every layer of the Parley session RPC
//! system. This crate defines the vocabulary of the protocol (who a peer
//! is, how a callable node is addressed, what an argument tuple may carry,
//! and which call semantics a procedure was registered with) and nothing
//! else.
//!
//! ## Architecture Role
//!
//! ```text
//! libs/types → libs/codec → libs/network
//!     ↑            ↓             ↓
//! Pure Data    Wire Format    Transport
//! PeerId       Envelope       Connections
//! CallKind     Checksums      Mailboxes
//! ```
//!
//! ## What This Crate Does NOT Contain
//! - Wire encoding rules (belongs in `codec`)
//! - Transport or connection handling (belongs in `network`)
//! - Dispatch policy and authority checks (belongs in `rpc`)

pub mod identity;
pub mod path;
pub mod semantics;
pub mod value;

pub use identity::PeerId;
pub use path::NodePath;
pub use semantics::{CallKind, ProcedureKey};
pub use value::Value;
