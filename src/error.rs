//! Error types for the argument-property codec.

/// Errors that can occur while encoding or decoding argument properties.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("malformed VarInt: {0}")]
    MalformedVarInt(String),

    #[error("truncated input: need {needed} bytes but only {remaining} remaining")]
    TruncatedInput { needed: usize, remaining: usize },

    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("non-ASCII character {ch:?} at index {index}")]
    NonAscii { index: usize, ch: char },

    #[error("invalid boolean byte: 0x{0:02X}")]
    InvalidBoolean(u8),

    #[error("invalid flags byte: 0x{0:02X}")]
    InvalidFlags(u8),

    #[error("{0} trailing bytes after properties")]
    TrailingBytes(usize),

    #[error("properties for {parser} do not match schema {expected}")]
    SchemaMismatch {
        parser: &'static str,
        expected: &'static str,
    },

    #[error("unknown parser: {0}")]
    UnknownParser(String),

    #[error("parser {parser} is not available in protocol {version}")]
    UnavailableParser {
        parser: &'static str,
        version: crate::version::ProtocolVersion,
    },
}

impl CodecError {
    /// Builds a `TruncatedInput` error for a read of `needed` bytes.
    pub(crate) fn truncated(needed: usize, remaining: usize) -> Self {
        Self::TruncatedInput { needed, remaining }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CodecError>;
