//! Document envelope - versioned JSON persistence for a ShaftSpec
//!
//! The envelope carries version, unit preference, and timestamps around the
//! spec. Derived values (resolved layouts, the OAL window) are never part of
//! the envelope; they are recomputed from the spec on every read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::units::Unit;
use crate::doc::diagnostics::DocumentError;
use crate::entities::shaft::ShaftSpec;

/// Current document format version
pub const DOCUMENT_VERSION: u32 = 1;

/// The persisted document shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShaftDocument {
    pub version: u32,

    /// Display unit the drafter prefers; the spec itself is always mm
    #[serde(default)]
    pub preferred_unit: Unit,

    /// When true the CLI refuses to switch display units (shop policy)
    #[serde(default)]
    pub unit_locked: bool,

    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,

    pub spec: ShaftSpec,
}

impl ShaftDocument {
    pub fn new(overall_length_mm: f64, preferred_unit: Unit) -> Self {
        let now = Utc::now();
        ShaftDocument {
            version: DOCUMENT_VERSION,
            preferred_unit,
            unit_locked: false,
            created: now,
            modified: now,
            spec: ShaftSpec::new(overall_length_mm),
        }
    }

    /// Load and version-check a document
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: display.clone(),
            source,
        })?;
        let doc: ShaftDocument =
            serde_json::from_str(&content).map_err(|source| DocumentError::Parse {
                path: display.clone(),
                source,
            })?;
        if doc.version > DOCUMENT_VERSION {
            return Err(DocumentError::UnsupportedVersion {
                path: display,
                found: doc.version,
                supported: DOCUMENT_VERSION,
            });
        }
        Ok(doc)
    }

    /// Persist as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        let display = path.display().to_string();
        let json = serde_json::to_string_pretty(self).map_err(|source| DocumentError::Parse {
            path: display.clone(),
            source,
        })?;
        std::fs::write(path, json + "\n").map_err(|source| DocumentError::Write {
            path: display,
            source,
        })
    }

    /// Replace the spec and refresh the modified timestamp
    pub fn with_spec(&self, spec: ShaftSpec) -> Self {
        let mut next = self.clone();
        next.spec = spec;
        next.modified = Utc::now();
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::{EntityId, EntityPrefix};
    use crate::entities::segment::Body;
    use tempfile::TempDir;

    fn doc_with_body() -> ShaftDocument {
        let doc = ShaftDocument::new(120.0, Unit::Mm);
        doc.with_spec(doc.spec.with_body(Body {
            id: EntityId::new(EntityPrefix::Body),
            start_from_aft_mm: 0.0,
            length_mm: 40.0,
            dia_mm: 50.0,
        }))
    }

    #[test]
    fn test_save_load_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("shaft.json");
        let doc = doc_with_body();
        doc.save(&path).unwrap();
        let loaded = ShaftDocument::load(&path).unwrap();
        assert_eq!(loaded.spec, doc.spec);
        assert_eq!(loaded.version, DOCUMENT_VERSION);
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = ShaftDocument::load(&tmp.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, DocumentError::Read { .. }));
    }

    #[test]
    fn test_load_rejects_future_version() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("shaft.json");
        let mut doc = ShaftDocument::new(100.0, Unit::Mm);
        doc.version = DOCUMENT_VERSION + 1;
        doc.save(&path).unwrap();
        let err = ShaftDocument::load(&path).unwrap_err();
        assert!(matches!(err, DocumentError::UnsupportedVersion { .. }));
    }

    #[test]
    fn test_load_rejects_garbage() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("shaft.json");
        std::fs::write(&path, "not json at all").unwrap();
        let err = ShaftDocument::load(&path).unwrap_err();
        assert!(matches!(err, DocumentError::Parse { .. }));
    }

    #[test]
    fn test_envelope_never_contains_derived_fields() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("shaft.json");
        doc_with_body().save(&path).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("measure_start"));
        assert!(!raw.contains("auto_body"));
        assert!(!raw.contains("resolved"));
    }
}
