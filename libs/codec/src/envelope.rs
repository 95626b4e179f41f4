//! Envelope framing
//!
//! Wire layout, little-endian throughout:
//!
//! ```text
//! offset  size  field
//!      0     4  magic        0x50524C59 ("PRLY")
//!      4     1  version      protocol revision, currently 1
//!      5     1  kind         packet kind discriminant (PacketKind)
//!      6     4  body length  bincode body size in bytes
//!     10     4  checksum     CRC32 of the body
//!     14     …  body         bincode (path, method, args)
//! ```
//!
//! The checksum covers the body only, so a corrupted or unknown kind byte is
//! still reported as a kind error rather than a checksum error.

use crate::error::{CodecError, CodecResult};
use bytes::Bytes;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use types::{NodePath, Value};

/// Protocol identification magic, first four bytes of every packet.
pub const PACKET_MAGIC: u32 = 0x50524C59; // "PRLY"

/// Wire protocol revision this build speaks.
pub const PROTOCOL_VERSION: u8 = 1;

/// Fixed header size preceding the body.
pub const HEADER_SIZE: usize = 14;

/// Packet kind discriminant.
///
/// A single kind exists today; the byte is carried on the wire so the
/// protocol can grow non-RPC packets without reframing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum PacketKind {
    Rpc = 0,
}

/// Decoded wire record: one remote procedure call.
///
/// Constructed fresh per send and never mutated after encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub kind: PacketKind,
    pub path: NodePath,
    pub method: String,
    pub args: Vec<Value>,
}

impl Envelope {
    /// Build an RPC envelope for the given target and argument tuple.
    pub fn rpc(path: impl Into<NodePath>, method: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            kind: PacketKind::Rpc,
            path: path.into(),
            method: method.into(),
            args,
        }
    }

    /// Serialize to the wire form described in the module docs.
    pub fn encode(&self) -> CodecResult<Bytes> {
        let body = bincode::serialize(&(&self.path, &self.method, &self.args)).map_err(|e| {
            CodecError::Body {
                detail: e.to_string(),
            }
        })?;

        let mut buf = Vec::with_capacity(HEADER_SIZE + body.len());
        buf.extend_from_slice(&PACKET_MAGIC.to_le_bytes());
        buf.push(PROTOCOL_VERSION);
        buf.push(self.kind.into());
        buf.extend_from_slice(&(body.len() as u32).to_le_bytes());
        buf.extend_from_slice(&crc32fast::hash(&body).to_le_bytes());
        buf.extend_from_slice(&body);

        Ok(Bytes::from(buf))
    }
}

/// Encode one RPC call without building an [`Envelope`] first.
///
/// This is the send path's entry point: a fresh buffer per call.
pub fn encode_rpc(path: &NodePath, method: &str, args: &[Value]) -> CodecResult<Bytes> {
    let body =
        bincode::serialize(&(path, method, args)).map_err(|e| CodecError::Body {
            detail: e.to_string(),
        })?;

    let mut buf = Vec::with_capacity(HEADER_SIZE + body.len());
    buf.extend_from_slice(&PACKET_MAGIC.to_le_bytes());
    buf.push(PROTOCOL_VERSION);
    buf.push(PacketKind::Rpc.into());
    buf.extend_from_slice(&(body.len() as u32).to_le_bytes());
    buf.extend_from_slice(&crc32fast::hash(&body).to_le_bytes());
    buf.extend_from_slice(&body);

    Ok(Bytes::from(buf))
}

/// Validate framing and integrity, then deserialize the body.
pub fn decode(data: &[u8]) -> CodecResult<Envelope> {
    if data.len() < HEADER_SIZE {
        return Err(CodecError::BufferTooSmall {
            need: HEADER_SIZE,
            got: data.len(),
        });
    }

    let magic = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    if magic != PACKET_MAGIC {
        return Err(CodecError::InvalidMagic {
            expected: PACKET_MAGIC,
            actual: magic,
        });
    }

    let version = data[4];
    if version != PROTOCOL_VERSION {
        return Err(CodecError::UnsupportedVersion {
            version,
            supported: PROTOCOL_VERSION,
        });
    }

    let kind = PacketKind::try_from(data[5])
        .map_err(|_| CodecError::UnknownPacketKind { kind: data[5] })?;

    let declared = u32::from_le_bytes([data[6], data[7], data[8], data[9]]) as usize;
    let body = &data[HEADER_SIZE..];
    if declared != body.len() {
        return Err(CodecError::LengthMismatch {
            declared,
            actual: body.len(),
        });
    }

    let expected = u32::from_le_bytes([data[10], data[11], data[12], data[13]]);
    let calculated = crc32fast::hash(body);
    if expected != calculated {
        return Err(CodecError::ChecksumMismatch {
            expected,
            calculated,
        });
    }

    let (path, method, args): (NodePath, String, Vec<Value>) =
        bincode::deserialize(body).map_err(|e| CodecError::Body {
            detail: e.to_string(),
        })?;

    Ok(Envelope {
        kind,
        path,
        method,
        args,
    })
}
