//! Value types shared by the codec and the parser catalog.

mod identifier;

pub use identifier::Identifier;
