//! The host seam: how argument types reach a command framework.
//!
//! A host hands out one builder per parser identifier; the builder takes the
//! optional property bytes and produces the host's opaque argument type.
//! [`DescriptorHost`] is the in-crate host, producing plain
//! [`ArgumentTypeDescriptor`] values.

use bytes::{Bytes, BytesMut};

use crate::error::Result;
use crate::parser::{ParserKind, Properties, decode_properties};
use crate::types::Identifier;

/// Collects the properties of one opaque argument type.
pub trait OpaqueArgumentTypeBuilder {
    type Output;

    /// Appends property bytes to the argument type.
    fn with_properties(self, properties: Bytes) -> Self;

    fn build(self) -> Self::Output;
}

/// A command framework able to build opaque argument types.
pub trait ArgumentTypeHost {
    type Output;
    type Builder: OpaqueArgumentTypeBuilder<Output = Self::Output>;

    /// Starts an argument type for the parser named `identifier`.
    fn opaque_argument_type_builder(&self, identifier: Identifier) -> Self::Builder;
}

/// A parser identifier paired with its encoded properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentTypeDescriptor {
    identifier: Identifier,
    properties: Option<Bytes>,
}

impl ArgumentTypeDescriptor {
    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Returns the property buffer, or `None` when the parser has none.
    pub fn properties(&self) -> Option<&[u8]> {
        self.properties.as_deref()
    }

    /// Returns the catalog entry for this descriptor's parser, if any.
    pub fn parser(&self) -> Option<ParserKind> {
        ParserKind::from_name(self.identifier.as_str()).ok()
    }

    /// Decodes the property buffer against the parser's schema.
    pub fn decode_properties(&self) -> Result<Option<Properties>> {
        let parser = ParserKind::from_name(self.identifier.as_str())?;
        decode_properties(parser, self.properties().unwrap_or_default())
    }
}

/// Host producing [`ArgumentTypeDescriptor`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorHost;

#[derive(Debug)]
pub struct DescriptorBuilder {
    identifier: Identifier,
    properties: Option<Bytes>,
}

impl OpaqueArgumentTypeBuilder for DescriptorBuilder {
    type Output = ArgumentTypeDescriptor;

    fn with_properties(mut self, properties: Bytes) -> Self {
        self.properties = Some(match self.properties.take() {
            Some(existing) => {
                let mut joined = BytesMut::with_capacity(existing.len() + properties.len());
                joined.extend_from_slice(&existing);
                joined.extend_from_slice(&properties);
                joined.freeze()
            }
            None => properties,
        });
        self
    }

    fn build(self) -> ArgumentTypeDescriptor {
        ArgumentTypeDescriptor {
            identifier: self.identifier,
            properties: self.properties,
        }
    }
}

impl ArgumentTypeHost for DescriptorHost {
    type Output = ArgumentTypeDescriptor;
    type Builder = DescriptorBuilder;

    fn opaque_argument_type_builder(&self, identifier: Identifier) -> DescriptorBuilder {
        DescriptorBuilder {
            identifier,
            properties: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_without_properties() {
        let id = Identifier::minecraft("uuid").unwrap();
        let descriptor = DescriptorHost.opaque_argument_type_builder(id.clone()).build();
        assert_eq!(descriptor.identifier(), &id);
        assert_eq!(descriptor.properties(), None);
        assert_eq!(descriptor.parser(), Some(ParserKind::Uuid));
        assert_eq!(descriptor.decode_properties().unwrap(), None);
    }

    #[test]
    fn builder_appends_properties() {
        let id = Identifier::new("custom", "pair").unwrap();
        let descriptor = DescriptorHost
            .opaque_argument_type_builder(id)
            .with_properties(Bytes::from_static(&[0x01]))
            .with_properties(Bytes::from_static(&[0x02, 0x03]))
            .build();
        assert_eq!(descriptor.properties(), Some(&[0x01, 0x02, 0x03][..]));
        assert_eq!(descriptor.parser(), None);
    }
}
