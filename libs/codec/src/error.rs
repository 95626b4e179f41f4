//! Codec error taxonomy
//!
//! Every way an inbound buffer can fail validation maps to a distinct
//! variant with enough context to diagnose the failure from a log line
//! alone. Decode errors are non-fatal by contract: the dispatch layer
//! reports them once and drops the buffer.

use thiserror::Error;

/// Envelope framing and deserialization errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CodecError {
    /// Buffer ends before the fixed header does.
    #[error("buffer too small: need {need} bytes, got {got}")]
    BufferTooSmall { need: usize, got: usize },

    /// Leading magic does not identify a Parley packet.
    #[error("invalid magic number: expected {expected:#010x}, got {actual:#010x}")]
    InvalidMagic { expected: u32, actual: u32 },

    /// Header names a protocol version this build does not speak.
    #[error("unsupported protocol version {version}: this build speaks version {supported}")]
    UnsupportedVersion { version: u8, supported: u8 },

    /// Packet kind discriminant is not recognized (reserved for future
    /// protocol extension; today only the RPC kind exists).
    #[error("unknown packet kind {kind}")]
    UnknownPacketKind { kind: u8 },

    /// Header-declared body length disagrees with the buffer.
    #[error("payload length mismatch: header declares {declared} bytes, buffer carries {actual}")]
    LengthMismatch { declared: usize, actual: usize },

    /// Body bytes fail the CRC32 carried in the header.
    #[error("checksum mismatch: expected {expected:#010x}, calculated {calculated:#010x}")]
    ChecksumMismatch { expected: u32, calculated: u32 },

    /// Framing was intact but the body did not deserialize.
    #[error("malformed envelope body: {detail}")]
    Body { detail: String },
}

/// Result type alias for codec operations.
pub type CodecResult<T> = std::result::Result<T, CodecError>;
