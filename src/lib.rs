//! Opaque argument types — encoder for Minecraft command-argument parser
//! properties.
//!
//! Servers that forward commands to the vanilla client describe each argument
//! by a parser identifier plus a small property buffer. This crate encodes
//! those buffers and hands them to a host framework's argument-type builder.
//!
//! # Architecture
//!
//! - **`wire`** — VarInt, length-prefixed ASCII string and boolean codecs
//! - **`types`** — Namespaced identifiers (`namespace:path`)
//! - **`parser`** — Parser catalog and property buffer composition
//! - **`host`** — Builder seam to a command framework, with an in-crate host
//! - **`version`** — Protocol versions annotating removed parsers

pub mod error;
pub mod host;
pub mod parser;
pub mod types;
pub mod version;
pub mod wire;

pub use error::{CodecError, Result};
pub use host::{ArgumentTypeDescriptor, ArgumentTypes, DescriptorHost};
pub use parser::{ParserKind, Properties, PropertySchema};
pub use types::Identifier;
pub use version::ProtocolVersion;
