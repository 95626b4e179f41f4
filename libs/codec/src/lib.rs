//! # Parley Wire Codec
//!
//! ## Purpose
//!
//! Encoding and decoding rules for the Parley session protocol. An RPC call
//! travels as a single datagram: a fixed little-endian header carrying the
//! protocol magic, version, packet kind and a CRC32 of the body, followed by
//! a bincode-encoded body with the target path, method name and argument
//! tuple. The body is self-describing, with `Value` variants carrying
//! their own tags, so heterogeneous, nested argument tuples round-trip
//! without any out-of-band schema.
//!
//! ## Integration Points
//!
//! - **Send path**: `encode_rpc` builds a fresh buffer per call; the sender
//!   hands it to the transport unmodified.
//! - **Receive path**: `decode` validates framing and integrity before the
//!   dispatch layer sees the envelope. A failed decode is reported by the
//!   receiver and the buffer is dropped; it never tears down a connection.
//!
//! ## What This Crate Does NOT Contain
//! - Transport or connection handling (belongs in `network`)
//! - Registration, authority or dispatch policy (belongs in `rpc`)

pub mod envelope;
pub mod error;

pub use envelope::{
    decode, encode_rpc, Envelope, PacketKind, HEADER_SIZE, PACKET_MAGIC, PROTOCOL_VERSION,
};
pub use error::{CodecError, CodecResult};
