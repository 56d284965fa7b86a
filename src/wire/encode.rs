//! Property encoding: values → bytes.

use bytes::{BufMut, BytesMut};

use super::marker;
use crate::error::{CodecError, Result};
use crate::types::Identifier;

/// Returns the number of bytes `value` occupies as a VarInt (1..=5).
pub fn varint_len(value: u32) -> usize {
    // leading_zeros(0) is 32; clamping keeps zero at one byte.
    let significant = 31 - value.leading_zeros().min(31);
    (significant / 7 + 1) as usize
}

/// Writes `value` as a VarInt into `dest` starting at `offset` and returns
/// the number of bytes written.
///
/// The caller sizes `dest` with [`varint_len`].
///
/// # Panics
///
/// Panics if `dest` has fewer than `offset + varint_len(value)` bytes.
pub fn write_varint(value: u32, dest: &mut [u8], offset: usize) -> usize {
    let mut remaining = value;
    let mut pos = offset;
    loop {
        let mut current = (remaining & u32::from(marker::VARINT_SEGMENT)) as u8;
        remaining >>= 7;
        if remaining != 0 {
            current |= marker::VARINT_CONTINUE;
        }
        dest[pos] = current;
        pos += 1;
        if remaining == 0 {
            return pos - offset;
        }
    }
}

/// Appends `value` as a VarInt to the buffer.
pub fn encode_varint(buf: &mut BytesMut, value: u32) {
    let mut scratch = [0u8; marker::VARINT_MAX_LEN];
    let len = write_varint(value, &mut scratch, 0);
    buf.put_slice(&scratch[..len]);
}

pub fn encode_bool(buf: &mut BytesMut, value: bool) {
    buf.put_u8(if value { marker::TRUE } else { marker::FALSE });
}

/// Packs the entity selector flags into one byte: bit 0 is `single`,
/// bit 1 is `only_players`.
pub fn pack_entity_flags(single: bool, only_players: bool) -> u8 {
    let mut flags = 0;
    if single {
        flags |= marker::ENTITY_SINGLE;
    }
    if only_players {
        flags |= marker::ENTITY_ONLY_PLAYERS;
    }
    flags
}

/// Encodes an ASCII string as a VarInt byte count followed by its bytes.
///
/// Any non-ASCII character is rejected with [`CodecError::NonAscii`]; use
/// [`encode_ascii_string_lossy`] to truncate instead.
pub fn encode_ascii_string(buf: &mut BytesMut, value: &str) -> Result<()> {
    if let Some((index, ch)) = value.chars().enumerate().find(|(_, ch)| !ch.is_ascii()) {
        return Err(CodecError::NonAscii { index, ch });
    }
    put_ascii(buf, value.as_bytes())
}

/// Encodes a string with one byte per character, keeping only the low 8 bits
/// of each character's code point.
pub fn encode_ascii_string_lossy(buf: &mut BytesMut, value: &str) -> Result<()> {
    let mut truncated = 0usize;
    let bytes: Vec<u8> = value
        .chars()
        .map(|ch| {
            if !ch.is_ascii() {
                truncated += 1;
            }
            u32::from(ch) as u8
        })
        .collect();
    if truncated > 0 {
        tracing::warn!(truncated, len = bytes.len(), "truncated non-ASCII characters");
    }
    put_ascii(buf, &bytes)
}

/// Encodes an identifier in its `namespace:path` form.
pub fn encode_identifier(buf: &mut BytesMut, identifier: &Identifier) {
    let text = identifier.as_str();
    // Identifiers are ASCII and bounded by `Identifier::MAX_LEN`.
    encode_varint(buf, text.len() as u32);
    buf.put_slice(text.as_bytes());
}

fn put_ascii(buf: &mut BytesMut, bytes: &[u8]) -> Result<()> {
    let len = u32::try_from(bytes.len()).map_err(|_| {
        CodecError::MalformedVarInt(format!("length {} does not fit in 32 bits", bytes.len()))
    })?;
    buf.reserve(varint_len(len) + bytes.len());
    encode_varint(buf, len);
    buf.put_slice(bytes);
    Ok(())
}
