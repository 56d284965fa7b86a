//! The vanilla argument parser catalog.
//!
//! Each parser is a row of static data: its name in the `minecraft`
//! namespace, the layout of its property buffer and the protocol version
//! that dropped it, if any.

use std::fmt;

use crate::error::{CodecError, Result};
use crate::types::Identifier;
use crate::version::ProtocolVersion;

/// Layout of the property buffer a parser carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertySchema {
    /// No properties; the buffer is omitted.
    None,
    /// A single boolean byte. `field` names what the flag controls.
    Boolean { field: &'static str },
    /// `single` and `only_players` packed into one byte.
    EntityFlags,
    /// The identifier of a registry, as a length-prefixed string.
    Registry,
}

impl PropertySchema {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Boolean { .. } => "boolean",
            Self::EntityFlags => "entity flags",
            Self::Registry => "registry",
        }
    }
}

/// A parser known to the vanilla client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParserKind {
    Entity,
    GameProfile,
    BlockPos,
    ColumnPos,
    Vec3,
    Vec2,
    BlockState,
    BlockPredicate,
    ItemStack,
    ItemPredicate,
    Color,
    Component,
    Message,
    Nbt,
    NbtTag,
    NbtPath,
    Objective,
    ObjectiveCriteria,
    Operation,
    Particle,
    Angle,
    Rotation,
    ScoreboardSlot,
    ScoreHolder,
    Swizzle,
    Team,
    ItemSlot,
    ResourceLocation,
    MobEffect,
    Function,
    EntityAnchor,
    Range,
    IntRange,
    FloatRange,
    ItemEnchantment,
    EntitySummon,
    Dimension,
    GameMode,
    NbtCompoundTag,
    Time,
    ResourceOrTag,
    ResourceOrTagKey,
    Resource,
    ResourceKey,
    TemplateMirror,
    TemplateRotation,
    Uuid,
}

/// One row of the catalog.
#[derive(Debug, Clone, Copy)]
pub struct ParserEntry {
    pub kind: ParserKind,
    pub name: &'static str,
    pub schema: PropertySchema,
    pub removed_in: Option<ProtocolVersion>,
}

const fn entry(kind: ParserKind, name: &'static str, schema: PropertySchema) -> ParserEntry {
    ParserEntry {
        kind,
        name,
        schema,
        removed_in: None,
    }
}

const fn removed(
    kind: ParserKind,
    name: &'static str,
    schema: PropertySchema,
    version: ProtocolVersion,
) -> ParserEntry {
    ParserEntry {
        kind,
        name,
        schema,
        removed_in: Some(version),
    }
}

use ParserKind as K;
use PropertySchema as S;

/// Rows are ordered by `ParserKind` discriminant.
pub static CATALOG: [ParserEntry; 47] = [
    entry(K::Entity, "entity", S::EntityFlags),
    entry(K::GameProfile, "game_profile", S::None),
    entry(K::BlockPos, "block_pos", S::None),
    entry(K::ColumnPos, "column_pos", S::None),
    entry(K::Vec3, "vec3", S::None),
    entry(K::Vec2, "vec2", S::None),
    entry(K::BlockState, "block_state", S::None),
    entry(K::BlockPredicate, "block_predicate", S::None),
    entry(K::ItemStack, "item_stack", S::None),
    entry(K::ItemPredicate, "item_predicate", S::None),
    entry(K::Color, "color", S::None),
    entry(K::Component, "component", S::None),
    entry(K::Message, "message", S::None),
    entry(K::Nbt, "nbt", S::None),
    entry(K::NbtTag, "nbt_tag", S::None),
    entry(K::NbtPath, "nbt_path", S::None),
    entry(K::Objective, "objective", S::None),
    entry(K::ObjectiveCriteria, "objective_criteria", S::None),
    entry(K::Operation, "operation", S::None),
    entry(K::Particle, "particle", S::None),
    entry(K::Angle, "angle", S::None),
    entry(K::Rotation, "rotation", S::None),
    entry(K::ScoreboardSlot, "scoreboard_slot", S::None),
    entry(K::ScoreHolder, "score_holder", S::Boolean { field: "multiple" }),
    entry(K::Swizzle, "swizzle", S::None),
    entry(K::Team, "team", S::None),
    entry(K::ItemSlot, "item_slot", S::None),
    entry(K::ResourceLocation, "resource_location", S::None),
    removed(K::MobEffect, "mob_effect", S::None, ProtocolVersion::MINECRAFT_1_19_3),
    entry(K::Function, "function", S::None),
    entry(K::EntityAnchor, "entity_anchor", S::None),
    removed(
        K::Range,
        "range",
        S::Boolean { field: "decimals" },
        ProtocolVersion::MINECRAFT_1_19,
    ),
    entry(K::IntRange, "int_range", S::None),
    entry(K::FloatRange, "float_range", S::None),
    removed(
        K::ItemEnchantment,
        "item_enchantment",
        S::None,
        ProtocolVersion::MINECRAFT_1_19_3,
    ),
    removed(K::EntitySummon, "entity_summon", S::None, ProtocolVersion::MINECRAFT_1_19_3),
    entry(K::Dimension, "dimension", S::None),
    entry(K::GameMode, "gamemode", S::None),
    removed(
        K::NbtCompoundTag,
        "nbt_compound_tag",
        S::None,
        ProtocolVersion::MINECRAFT_1_19,
    ),
    entry(K::Time, "time", S::None),
    entry(K::ResourceOrTag, "resource_or_tag", S::Registry),
    entry(K::ResourceOrTagKey, "resource_or_tag_key", S::Registry),
    entry(K::Resource, "resource", S::Registry),
    entry(K::ResourceKey, "resource_key", S::Registry),
    entry(K::TemplateMirror, "template_mirror", S::None),
    entry(K::TemplateRotation, "template_rotation", S::None),
    entry(K::Uuid, "uuid", S::None),
];

impl ParserKind {
    /// Every parser in catalog order.
    pub fn all() -> impl Iterator<Item = ParserKind> {
        CATALOG.iter().map(|e| e.kind)
    }

    pub fn entry(self) -> &'static ParserEntry {
        &CATALOG[self as usize]
    }

    /// Returns the path of the parser's identifier, e.g. `block_pos`.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    pub fn schema(self) -> PropertySchema {
        self.entry().schema
    }

    pub fn removed_in(self) -> Option<ProtocolVersion> {
        self.entry().removed_in
    }

    /// Whether clients speaking `version` still know this parser.
    pub fn is_available_in(self, version: ProtocolVersion) -> bool {
        self.removed_in().is_none_or(|removed| version < removed)
    }

    /// Returns the parser's identifier, e.g. `minecraft:block_pos`.
    pub fn identifier(self) -> Identifier {
        Identifier::from_parts(Identifier::DEFAULT_NAMESPACE, self.name())
    }

    /// Looks a parser up by `path` or `minecraft:path`.
    pub fn from_name(name: &str) -> Result<Self> {
        let id = Identifier::parse(name)?;
        if id.namespace() != Identifier::DEFAULT_NAMESPACE {
            return Err(CodecError::UnknownParser(name.to_string()));
        }
        CATALOG
            .iter()
            .find(|e| e.name == id.path())
            .map(|e| e.kind)
            .ok_or_else(|| CodecError::UnknownParser(name.to_string()))
    }
}

impl fmt::Display for ParserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", Identifier::DEFAULT_NAMESPACE, self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_discriminants() {
        for (i, e) in CATALOG.iter().enumerate() {
            assert_eq!(e.kind as usize, i, "row {i} is {}", e.name);
        }
    }

    #[test]
    fn names_are_unique_and_valid() {
        let mut seen = std::collections::HashSet::new();
        for kind in ParserKind::all() {
            assert!(seen.insert(kind.name()), "duplicate {}", kind.name());
            assert_eq!(
                Identifier::minecraft(kind.name()).unwrap(),
                kind.identifier()
            );
        }
        assert_eq!(seen.len(), 47);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(ParserKind::from_name("entity").unwrap(), ParserKind::Entity);
        assert_eq!(
            ParserKind::from_name("minecraft:resource_or_tag_key").unwrap(),
            ParserKind::ResourceOrTagKey
        );
        assert_eq!(
            ParserKind::from_name("brigadier:bool"),
            Err(CodecError::UnknownParser("brigadier:bool".into()))
        );
        assert_eq!(
            ParserKind::from_name("nope"),
            Err(CodecError::UnknownParser("nope".into()))
        );
    }

    #[test]
    fn schemas() {
        assert_eq!(ParserKind::Entity.schema(), PropertySchema::EntityFlags);
        assert_eq!(
            ParserKind::ScoreHolder.schema(),
            PropertySchema::Boolean { field: "multiple" }
        );
        assert_eq!(
            ParserKind::Range.schema(),
            PropertySchema::Boolean { field: "decimals" }
        );
        assert_eq!(ParserKind::Resource.schema(), PropertySchema::Registry);
        assert_eq!(ParserKind::Vec3.schema(), PropertySchema::None);
        let with_props = ParserKind::all()
            .filter(|k| k.schema() != PropertySchema::None)
            .count();
        assert_eq!(with_props, 7);
    }

    #[test]
    fn availability() {
        let v1_19 = ProtocolVersion::MINECRAFT_1_19;
        let v1_19_3 = ProtocolVersion::MINECRAFT_1_19_3;
        assert!(ParserKind::Range.is_available_in(ProtocolVersion::MINECRAFT_1_18_2));
        assert!(!ParserKind::Range.is_available_in(v1_19));
        assert!(!ParserKind::NbtCompoundTag.is_available_in(v1_19));
        assert!(ParserKind::MobEffect.is_available_in(v1_19));
        assert!(!ParserKind::MobEffect.is_available_in(v1_19_3));
        assert!(ParserKind::Entity.is_available_in(v1_19_3));
    }

    #[test]
    fn display_is_identifier() {
        assert_eq!(ParserKind::GameMode.to_string(), "minecraft:gamemode");
        assert_eq!(ParserKind::GameMode.identifier().as_str(), "minecraft:gamemode");
    }
}
