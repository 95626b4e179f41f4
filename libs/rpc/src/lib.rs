//! # Parley RPC Dispatch Core
//!
//! ## Purpose
//!
//! The dispatch engine of the Parley session protocol: registration of
//! callable procedures with authority semantics, per-recipient send/execute
//! routing, and the receive-side validation pipeline. This is the layer
//! that decides who executes what: the transport moves bytes, the codec
//! frames them, and everything in between lives here.
//!
//! ## Integration Points
//!
//! - **SessionContext**: owned by the session/runtime layer; holds the
//!   local identity, the connection set and the shared registry and
//!   diagnostic state. Passed by reference to senders and receivers.
//! - **RpcSender**: application-facing send surface (`send_to_host`,
//!   `send_to_peer`, `send_to_all_peers`).
//! - **RpcReceiver**: scheduler-facing pump, called once per tick to drain
//!   and dispatch every open connection.
//! - **RpcTarget / NodeTree**: capability traits the host runtime
//!   implements so targets stay statically typed while remaining callable
//!   by wire name.
//!
//! ## Architecture Role
//!
//! ```text
//! application code → RpcSender → codec → network → (peer)
//!        ↑                                            ↓
//!    NodeTree  ←  RpcReceiver  ←  codec  ←  network poll (per tick)
//! ```
//!
//! ## Concurrency Model
//!
//! Single-threaded cooperative scheduling: sends interleave synchronously
//! with application code, and the receiver pump runs once per external
//! tick. Nothing blocks or suspends. The registry and diagnostic set are
//! still lock-guarded so that a parallelized poller stays correct; under
//! the cooperative model the locks are uncontended.

pub mod diagnostics;
pub mod error;
pub mod node;
pub mod receiver;
pub mod registry;
pub mod sender;
pub mod session;

#[cfg(test)]
pub(crate) mod testkit;

pub use diagnostics::DiagnosticLog;
pub use error::{DispatchError, InvocationError};
pub use node::{NodeTree, Ownership, RpcTarget};
pub use receiver::RpcReceiver;
pub use registry::ProcedureRegistry;
pub use sender::RpcSender;
pub use session::SessionContext;
