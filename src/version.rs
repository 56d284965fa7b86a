//! Protocol versions referenced by the parser catalog.
//!
//! Versions only annotate when a parser left the vanilla client; nothing here
//! negotiates a version with a peer.

use std::fmt;

/// A Minecraft protocol version, ordered by protocol number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProtocolVersion(u32);

/// Named releases (protocol number, display name) in ascending order.
const KNOWN_VERSIONS: [(u32, &str); 4] = [
    (393, "1.13"),
    (758, "1.18.2"),
    (759, "1.19"),
    (761, "1.19.3"),
];

impl ProtocolVersion {
    /// First release with the command-argument parser registry.
    pub const MINECRAFT_1_13: Self = Self(393);
    pub const MINECRAFT_1_18_2: Self = Self(758);
    pub const MINECRAFT_1_19: Self = Self(759);
    pub const MINECRAFT_1_19_3: Self = Self(761);

    pub const fn new(protocol: u32) -> Self {
        Self(protocol)
    }

    /// Returns the numeric protocol id sent in the handshake.
    pub const fn protocol(self) -> u32 {
        self.0
    }

    /// Returns the release name if this is a known version.
    pub fn name(self) -> Option<&'static str> {
        KNOWN_VERSIONS
            .iter()
            .find(|&&(protocol, _)| protocol == self.0)
            .map(|&(_, name)| name)
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} ({})", self.0),
            None => write!(f, "protocol {}", self.0),
        }
    }
}
