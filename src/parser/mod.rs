//! Argument parsers and their property buffers.

pub mod catalog;
pub mod compose;

pub use catalog::{CATALOG, ParserEntry, ParserKind, PropertySchema};
pub use compose::{Properties, compose, decode_properties};
