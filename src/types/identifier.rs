//! Namespaced identifiers (`namespace:path`).

use std::fmt;
use std::str::FromStr;

use crate::error::{CodecError, Result};

/// A namespaced identifier such as `minecraft:entity`.
///
/// Namespaces may contain `[a-z0-9_.-]`, paths additionally `/`. Both parts
/// are non-empty, so an identifier is always ASCII.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier {
    value: String,
    separator: usize,
}

impl Identifier {
    /// Namespace used when none is given.
    pub const DEFAULT_NAMESPACE: &'static str = "minecraft";

    /// Longest identifier the protocol's string fields accept.
    pub const MAX_LEN: usize = 32767;

    /// Creates an identifier from its two parts.
    pub fn new(namespace: &str, path: &str) -> Result<Self> {
        if namespace.is_empty() {
            return Err(CodecError::InvalidIdentifier(format!(
                "empty namespace in {namespace}:{path}"
            )));
        }
        if path.is_empty() {
            return Err(CodecError::InvalidIdentifier(format!(
                "empty path in {namespace}:"
            )));
        }
        if let Some(ch) = namespace.chars().find(|&c| !is_namespace_char(c)) {
            return Err(CodecError::InvalidIdentifier(format!(
                "character {ch:?} not allowed in namespace {namespace:?}"
            )));
        }
        if let Some(ch) = path.chars().find(|&c| !is_path_char(c)) {
            return Err(CodecError::InvalidIdentifier(format!(
                "character {ch:?} not allowed in path {path:?}"
            )));
        }
        let len = namespace.len() + 1 + path.len();
        if len > Self::MAX_LEN {
            return Err(CodecError::InvalidIdentifier(format!(
                "{len} bytes exceeds the {} byte limit",
                Self::MAX_LEN
            )));
        }
        Ok(Self::from_parts(namespace, path))
    }

    /// Creates an identifier in the default `minecraft` namespace.
    pub fn minecraft(path: &str) -> Result<Self> {
        Self::new(Self::DEFAULT_NAMESPACE, path)
    }

    /// Parses `namespace:path`, or a bare `path` in the default namespace.
    ///
    /// A leading `:` also selects the default namespace.
    pub fn parse(text: &str) -> Result<Self> {
        match text.split_once(':') {
            Some(("", path)) => Self::minecraft(path),
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::minecraft(text),
        }
    }

    /// Builds an identifier from parts already known to be valid.
    pub(crate) fn from_parts(namespace: &str, path: &str) -> Self {
        Self {
            value: format!("{namespace}:{path}"),
            separator: namespace.len(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.value[..self.separator]
    }

    pub fn path(&self) -> &str {
        &self.value[self.separator + 1..]
    }

    /// Returns the `namespace:path` form.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-')
}

fn is_path_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Identifier {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
