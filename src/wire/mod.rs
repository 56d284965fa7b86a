//! Binary encoding of argument parser properties.
//!
//! Integers are VarInts: 7-bit groups, least significant first, with the high
//! bit set on every byte but the last. Strings are a VarInt byte count
//! followed by one byte per ASCII character. Booleans are a single byte.

pub mod decode;
pub mod encode;
pub mod marker;

pub use decode::{decode_ascii_string, decode_bool, decode_identifier, decode_varint, get_varint};
pub use encode::{
    encode_ascii_string, encode_ascii_string_lossy, encode_bool, encode_identifier,
    encode_varint, pack_entity_flags, varint_len, write_varint,
};
