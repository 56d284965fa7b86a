//! Argument type factories over an [`ArgumentTypeHost`].

use crate::error::{CodecError, Result};
use crate::host::backend::{ArgumentTypeHost, OpaqueArgumentTypeBuilder};
use crate::parser::{ParserKind, Properties, compose};
use crate::types::Identifier;
use crate::version::ProtocolVersion;

/// Builds argument types for the vanilla parsers through a host.
///
/// ```
/// use opaque_argtypes::host::{ArgumentTypes, DescriptorHost};
///
/// let types = ArgumentTypes::new(DescriptorHost);
/// let selector = types.entity(true, true).unwrap();
/// assert_eq!(selector.identifier().as_str(), "minecraft:entity");
/// assert_eq!(selector.properties(), Some(&[0x03][..]));
/// ```
#[derive(Debug, Clone)]
pub struct ArgumentTypes<H> {
    host: H,
    version: Option<ProtocolVersion>,
}

impl<H: ArgumentTypeHost> ArgumentTypes<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            version: None,
        }
    }

    /// Rejects parsers the client at `version` no longer knows.
    pub fn strict_catalog(mut self, version: ProtocolVersion) -> Self {
        self.version = Some(version);
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Builds the argument type for `parser` with the given properties.
    pub fn argument_type(
        &self,
        parser: ParserKind,
        properties: Option<&Properties>,
    ) -> Result<H::Output> {
        if let Some(version) = self.version
            && !parser.is_available_in(version)
        {
            tracing::debug!(parser = %parser, %version, "parser not available");
            return Err(CodecError::UnavailableParser {
                parser: parser.name(),
                version,
            });
        }

        let encoded = compose(parser, properties)?;
        tracing::debug!(
            parser = %parser,
            properties_len = encoded.as_ref().map_or(0, |b| b.len()),
            "building opaque argument type"
        );
        let mut builder = self.host.opaque_argument_type_builder(parser.identifier());
        if let Some(bytes) = encoded {
            builder = builder.with_properties(bytes);
        }
        Ok(builder.build())
    }

    /// Builds the argument type for a parser that takes no properties.
    pub fn plain(&self, parser: ParserKind) -> Result<H::Output> {
        self.argument_type(parser, None)
    }

    /// `minecraft:entity`: a selector, player name or UUID.
    pub fn entity(&self, single: bool, only_players: bool) -> Result<H::Output> {
        let props = Properties::EntityFlags {
            single,
            only_players,
        };
        self.argument_type(ParserKind::Entity, Some(&props))
    }

    /// `minecraft:score_holder`: anything that can hold a score.
    pub fn score_holder(&self, multiple: bool) -> Result<H::Output> {
        self.argument_type(ParserKind::ScoreHolder, Some(&Properties::Boolean(multiple)))
    }

    /// `minecraft:range`, removed in 1.19.
    pub fn range(&self, decimals: bool) -> Result<H::Output> {
        self.argument_type(ParserKind::Range, Some(&Properties::Boolean(decimals)))
    }

    pub fn resource_or_tag(&self, registry: Identifier) -> Result<H::Output> {
        self.registry_scoped(ParserKind::ResourceOrTag, registry)
    }

    pub fn resource_or_tag_key(&self, registry: Identifier) -> Result<H::Output> {
        self.registry_scoped(ParserKind::ResourceOrTagKey, registry)
    }

    pub fn resource(&self, registry: Identifier) -> Result<H::Output> {
        self.registry_scoped(ParserKind::Resource, registry)
    }

    pub fn resource_key(&self, registry: Identifier) -> Result<H::Output> {
        self.registry_scoped(ParserKind::ResourceKey, registry)
    }

    fn registry_scoped(&self, parser: ParserKind, registry: Identifier) -> Result<H::Output> {
        self.argument_type(parser, Some(&Properties::Registry(registry)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::backend::DescriptorHost;
    use bytes::Bytes;

    #[test]
    fn entity_descriptor() {
        let types = ArgumentTypes::new(DescriptorHost);
        let d = types.entity(false, true).unwrap();
        assert_eq!(d.identifier().as_str(), "minecraft:entity");
        assert_eq!(d.properties(), Some(&[0x02][..]));
        assert_eq!(
            d.decode_properties().unwrap(),
            Some(Properties::EntityFlags {
                single: false,
                only_players: true,
            })
        );
    }

    #[test]
    fn boolean_descriptors() {
        let types = ArgumentTypes::new(DescriptorHost);
        assert_eq!(types.score_holder(true).unwrap().properties(), Some(&[0x01][..]));
        assert_eq!(types.range(false).unwrap().properties(), Some(&[0x00][..]));
    }

    #[test]
    fn registry_descriptors() {
        let types = ArgumentTypes::new(DescriptorHost);
        let registry = Identifier::parse("test").unwrap();
        for d in [
            types.resource_or_tag(registry.clone()).unwrap(),
            types.resource_or_tag_key(registry.clone()).unwrap(),
            types.resource(registry.clone()).unwrap(),
            types.resource_key(registry.clone()).unwrap(),
        ] {
            let props = d.properties().unwrap();
            assert_eq!(props[0], 0x0E);
            assert_eq!(&props[1..], b"minecraft:test");
        }
    }

    #[test]
    fn plain_descriptor_has_no_properties() {
        let types = ArgumentTypes::new(DescriptorHost);
        let d = types.plain(ParserKind::BlockPos).unwrap();
        assert_eq!(d.identifier().as_str(), "minecraft:block_pos");
        assert_eq!(d.properties(), None);
    }

    #[test]
    fn plain_rejects_parsers_with_properties() {
        let types = ArgumentTypes::new(DescriptorHost);
        assert!(matches!(
            types.plain(ParserKind::Entity),
            Err(CodecError::SchemaMismatch { .. })
        ));
    }

    #[test]
    fn strict_catalog_rejects_removed_parsers() {
        let types =
            ArgumentTypes::new(DescriptorHost).strict_catalog(ProtocolVersion::MINECRAFT_1_19_3);
        assert_eq!(
            types.range(true),
            Err(CodecError::UnavailableParser {
                parser: "range",
                version: ProtocolVersion::MINECRAFT_1_19_3,
            })
        );
        assert!(types.plain(ParserKind::MobEffect).is_err());
        assert!(types.plain(ParserKind::Time).is_ok());

        // Without a version every parser is allowed.
        let lenient = ArgumentTypes::new(DescriptorHost);
        assert!(lenient.range(true).is_ok());
    }

    /// Host recording the calls it receives, standing in for a real framework.
    #[derive(Default)]
    struct RecordingHost;

    struct RecordingBuilder {
        calls: Vec<String>,
    }

    impl OpaqueArgumentTypeBuilder for RecordingBuilder {
        type Output = Vec<String>;

        fn with_properties(mut self, properties: Bytes) -> Self {
            self.calls.push(format!("properties {:02X?}", &properties[..]));
            self
        }

        fn build(mut self) -> Vec<String> {
            self.calls.push("build".into());
            self.calls
        }
    }

    impl ArgumentTypeHost for RecordingHost {
        type Output = Vec<String>;
        type Builder = RecordingBuilder;

        fn opaque_argument_type_builder(&self, identifier: Identifier) -> RecordingBuilder {
            RecordingBuilder {
                calls: vec![format!("builder {identifier}")],
            }
        }
    }

    #[test]
    fn custom_host_receives_calls_in_order() {
        let types = ArgumentTypes::new(RecordingHost);
        assert_eq!(
            types.entity(true, true).unwrap(),
            ["builder minecraft:entity", "properties [03]", "build"]
        );
        assert_eq!(
            types.plain(ParserKind::Uuid).unwrap(),
            ["builder minecraft:uuid", "build"]
        );
    }

    #[test]
    fn types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ArgumentTypes<DescriptorHost>>();
        assert_send_sync::<crate::host::ArgumentTypeDescriptor>();
        assert_send_sync::<Identifier>();
    }
}
