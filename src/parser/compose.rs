//! Property composition: parser + properties → property buffer.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use super::catalog::{ParserKind, PropertySchema};
use crate::error::{CodecError, Result};
use crate::types::Identifier;
use crate::wire::{decode, encode, marker};

/// Configurable properties of a parser, one variant per non-empty schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Properties {
    EntityFlags { single: bool, only_players: bool },
    Boolean(bool),
    Registry(Identifier),
}

impl Properties {
    fn matches(&self, schema: PropertySchema) -> bool {
        matches!(
            (self, schema),
            (Self::EntityFlags { .. }, PropertySchema::EntityFlags)
                | (Self::Boolean(_), PropertySchema::Boolean { .. })
                | (Self::Registry(_), PropertySchema::Registry)
        )
    }
}

/// Builds the property buffer for `parser`.
///
/// Returns `Ok(None)` for parsers without properties. Properties of the wrong
/// shape, or missing ones, fail with [`CodecError::SchemaMismatch`].
pub fn compose(parser: ParserKind, properties: Option<&Properties>) -> Result<Option<Bytes>> {
    let schema = parser.schema();
    let props = match (schema, properties) {
        (PropertySchema::None, None) => return Ok(None),
        (_, Some(props)) if props.matches(schema) => props,
        _ => return Err(mismatch(parser, schema)),
    };

    let mut buf = BytesMut::new();
    match props {
        Properties::EntityFlags {
            single,
            only_players,
        } => buf.put_u8(encode::pack_entity_flags(*single, *only_players)),
        Properties::Boolean(value) => encode::encode_bool(&mut buf, *value),
        Properties::Registry(registry) => encode::encode_identifier(&mut buf, registry),
    }
    tracing::trace!(parser = %parser, len = buf.len(), "composed parser properties");
    Ok(Some(buf.freeze()))
}

/// Reads a property buffer produced by [`compose`] back into properties.
///
/// `bytes` must hold exactly one buffer; leftovers are an error.
pub fn decode_properties(parser: ParserKind, bytes: &[u8]) -> Result<Option<Properties>> {
    let mut cursor = bytes;
    let props = match parser.schema() {
        PropertySchema::None => None,
        PropertySchema::EntityFlags => {
            decode::ensure_remaining(&cursor, 1)?;
            let flags = cursor.get_u8();
            if flags & !marker::ENTITY_FLAGS_MASK != 0 {
                return Err(CodecError::InvalidFlags(flags));
            }
            Some(Properties::EntityFlags {
                single: flags & marker::ENTITY_SINGLE != 0,
                only_players: flags & marker::ENTITY_ONLY_PLAYERS != 0,
            })
        }
        PropertySchema::Boolean { .. } => Some(Properties::Boolean(decode::decode_bool(
            &mut cursor,
        )?)),
        PropertySchema::Registry => Some(Properties::Registry(decode::decode_identifier(
            &mut cursor,
        )?)),
    };
    if cursor.has_remaining() {
        return Err(CodecError::TrailingBytes(cursor.remaining()));
    }
    Ok(props)
}

fn mismatch(parser: ParserKind, schema: PropertySchema) -> CodecError {
    CodecError::SchemaMismatch {
        parser: parser.name(),
        expected: schema.as_str(),
    }
}
