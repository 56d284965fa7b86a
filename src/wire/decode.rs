//! Property decoding: bytes → values.
//!
//! Nothing on the host side reads these buffers back; the decoders exist so
//! encoded properties can be checked and inspected.

use bytes::Buf;

use super::marker;
use crate::error::{CodecError, Result};
use crate::types::Identifier;

/// Decodes a VarInt from `buf` starting at `offset`.
///
/// Returns the value and the number of bytes it occupied.
pub fn decode_varint(buf: &[u8], offset: usize) -> Result<(u32, usize)> {
    let mut value = 0u32;
    for i in 0..marker::VARINT_MAX_LEN {
        let Some(&byte) = buf.get(offset + i) else {
            return Err(CodecError::MalformedVarInt(format!(
                "input ended after {i} bytes"
            )));
        };
        value |= segment(byte, i)? << (7 * i);
        if byte & marker::VARINT_CONTINUE == 0 {
            return Ok((value, i + 1));
        }
    }
    Err(too_long())
}

/// Reads a VarInt from the front of `buf`, advancing past it.
pub fn get_varint(buf: &mut impl Buf) -> Result<u32> {
    let mut value = 0u32;
    for i in 0..marker::VARINT_MAX_LEN {
        if !buf.has_remaining() {
            return Err(CodecError::MalformedVarInt(format!(
                "input ended after {i} bytes"
            )));
        }
        let byte = buf.get_u8();
        value |= segment(byte, i)? << (7 * i);
        if byte & marker::VARINT_CONTINUE == 0 {
            return Ok(value);
        }
    }
    Err(too_long())
}

/// Extracts the 7 data bits of the `index`-th VarInt byte.
fn segment(byte: u8, index: usize) -> Result<u32> {
    let bits = u32::from(byte & marker::VARINT_SEGMENT);
    // The fifth byte may only contribute the top 4 bits of a u32.
    if index == marker::VARINT_MAX_LEN - 1 && bits > 0x0F {
        return Err(CodecError::MalformedVarInt(format!(
            "final byte 0x{byte:02X} overflows 32 bits"
        )));
    }
    Ok(bits)
}

fn too_long() -> CodecError {
    CodecError::MalformedVarInt(format!(
        "continuation bit still set after {} bytes",
        marker::VARINT_MAX_LEN
    ))
}

pub fn decode_bool(buf: &mut impl Buf) -> Result<bool> {
    ensure_remaining(buf, 1)?;
    match buf.get_u8() {
        marker::FALSE => Ok(false),
        marker::TRUE => Ok(true),
        other => Err(CodecError::InvalidBoolean(other)),
    }
}

/// Decodes a VarInt-prefixed ASCII string.
pub fn decode_ascii_string(buf: &mut impl Buf) -> Result<String> {
    let len = get_varint(buf)? as usize;
    ensure_remaining(buf, len)?;
    let mut data = vec![0u8; len];
    buf.copy_to_slice(&mut data);
    if let Some(index) = data.iter().position(|b| !b.is_ascii()) {
        return Err(CodecError::NonAscii {
            index,
            ch: char::from(data[index]),
        });
    }
    Ok(data.into_iter().map(char::from).collect())
}

/// Decodes a VarInt-prefixed identifier in `namespace:path` form.
pub fn decode_identifier(buf: &mut impl Buf) -> Result<Identifier> {
    let text = decode_ascii_string(buf)?;
    Identifier::parse(&text)
}

pub(crate) fn ensure_remaining(buf: &impl Buf, needed: usize) -> Result<()> {
    if buf.remaining() < needed {
        Err(CodecError::truncated(needed, buf.remaining()))
    } else {
        Ok(())
    }
}
