//! Entity identity - stable prefixed ULID identifiers for persisted segments

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use ulid::Ulid;

/// Entity type prefixes for the four persisted component kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityPrefix {
    Body,
    Taper,
    Thread,
    Liner,
}

impl EntityPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::Body => "BODY",
            EntityPrefix::Taper => "TPR",
            EntityPrefix::Thread => "THD",
            EntityPrefix::Liner => "LNR",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "BODY" => Some(EntityPrefix::Body),
            "TPR" => Some(EntityPrefix::Taper),
            "THD" => Some(EntityPrefix::Thread),
            "LNR" => Some(EntityPrefix::Liner),
            _ => None,
        }
    }
}

impl fmt::Display for EntityPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors from parsing an entity ID string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdParseError {
    #[error("missing '-' separator in entity ID '{0}'")]
    MissingSeparator(String),

    #[error("unknown entity prefix '{0}' (expected BODY, TPR, THD, or LNR)")]
    UnknownPrefix(String),

    #[error("invalid ULID part '{0}'")]
    InvalidUlid(String),
}

/// A unique entity identifier: `PREFIX-ULID` (e.g. `BODY-01J8X2K9QZ...`)
///
/// IDs are lexicographically sortable within a prefix (ULIDs embed a
/// timestamp) and serialize as plain strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Generate a fresh ID for the given entity kind
    pub fn new(prefix: EntityPrefix) -> Self {
        EntityId(format!("{}-{}", prefix.as_str(), Ulid::new()))
    }

    /// Parse and validate an ID string
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        let (prefix, ulid_part) = s
            .split_once('-')
            .ok_or_else(|| IdParseError::MissingSeparator(s.to_string()))?;

        if EntityPrefix::parse(prefix).is_none() {
            return Err(IdParseError::UnknownPrefix(prefix.to_string()));
        }

        Ulid::from_str(ulid_part).map_err(|_| IdParseError::InvalidUlid(ulid_part.to_string()))?;

        Ok(EntityId(s.to_string()))
    }

    /// The entity kind prefix, if this ID is well-formed
    pub fn prefix(&self) -> Option<EntityPrefix> {
        self.0.split_once('-').and_then(|(p, _)| EntityPrefix::parse(p))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_has_prefix() {
        let id = EntityId::new(EntityPrefix::Taper);
        assert!(id.as_str().starts_with("TPR-"));
        assert_eq!(id.prefix(), Some(EntityPrefix::Taper));
    }

    #[test]
    fn test_parse_roundtrip() {
        let id = EntityId::new(EntityPrefix::Body);
        let parsed = EntityId::parse(id.as_str()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_parse_rejects_bad_prefix() {
        let err = EntityId::parse("REQ-01J8X2K9QZABCDEF1234567890").unwrap_err();
        assert!(matches!(err, IdParseError::UnknownPrefix(_)));
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        let err = EntityId::parse("BODY01J8X2K9QZ").unwrap_err();
        assert!(matches!(err, IdParseError::MissingSeparator(_)));
    }

    #[test]
    fn test_serde_as_plain_string() {
        let id = EntityId::new(EntityPrefix::Liner);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }
}
