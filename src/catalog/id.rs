//! Composite identifiers for catalog items.
//!
//! Resources and playlists share one list on screen, so every item is
//! addressed by its kind plus the service's numeric id. The string form
//! (`res-17`, `pl-3`) only exists at the rendering/navigation boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Which backend collection an id belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemKind {
    Resource,
    Playlist,
}

impl ItemKind {
    /// Prefix used in the composite string form
    pub fn prefix(self) -> &'static str {
        match self {
            ItemKind::Resource => "res",
            ItemKind::Playlist => "pl",
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "res" => Some(ItemKind::Resource),
            "pl" => Some(ItemKind::Playlist),
            _ => None,
        }
    }
}

/// Errors decoding a composite id
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Composite id '{0}' contains no numeric component")]
    NoDigits(String),

    #[error("Composite id '{0}' is missing the kind prefix")]
    MissingPrefix(String),

    #[error("Unknown kind prefix '{prefix}' in composite id '{input}'")]
    UnknownPrefix { prefix: String, input: String },

    #[error("Composite id '{0}' has an invalid numeric component")]
    InvalidNumber(String),
}

/// Kind-tagged item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId {
    pub kind: ItemKind,
    pub id: u64,
}

impl ItemId {
    pub fn new(kind: ItemKind, id: u64) -> Self {
        Self { kind, id }
    }

    pub fn resource(id: u64) -> Self {
        Self::new(ItemKind::Resource, id)
    }

    pub fn playlist(id: u64) -> Self {
        Self::new(ItemKind::Playlist, id)
    }

    pub fn is_playlist(&self) -> bool {
        self.kind == ItemKind::Playlist
    }

    /// Encode to the composite string form
    pub fn encode(&self) -> String {
        encode(self.kind, self.id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind.prefix(), self.id)
    }
}

impl FromStr for ItemId {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

impl Serialize for ItemId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        decode(&s).map_err(serde::de::Error::custom)
    }
}

/// Encode a kind and numeric id as `<prefix>-<id>`
pub fn encode(kind: ItemKind, id: u64) -> String {
    ItemId::new(kind, id).to_string()
}

/// Decode a composite id produced by [`encode`].
///
/// Strict: the prefix must be a known kind and everything after the
/// separator must be ASCII digits. A string without any digit is always
/// reported as [`DecodeError::NoDigits`].
pub fn decode(input: &str) -> Result<ItemId, DecodeError> {
    let trimmed = input.trim();

    if !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return Err(DecodeError::NoDigits(input.to_string()));
    }

    let (prefix, digits) = trimmed
        .split_once('-')
        .ok_or_else(|| DecodeError::MissingPrefix(input.to_string()))?;

    let kind = ItemKind::from_prefix(prefix).ok_or_else(|| DecodeError::UnknownPrefix {
        prefix: prefix.to_string(),
        input: input.to_string(),
    })?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecodeError::InvalidNumber(input.to_string()));
    }

    let id = digits
        .parse::<u64>()
        .map_err(|_| DecodeError::InvalidNumber(input.to_string()))?;

    Ok(ItemId::new(kind, id))
}
