//! ShaftSpec - the immutable root aggregate
//!
//! A spec is a flat value: overall length plus four component lists. Every
//! mutation produces a new spec; derived geometry (resolved layouts, the OAL
//! window) is recomputed from scratch on every read and never stored here.

use serde::{Deserialize, Serialize};

use crate::core::identity::EntityId;
use crate::entities::segment::{Body, ComponentKind, Liner, Segment, Taper, Thread};
use crate::geometry::EPS_MM;

/// The persisted shaft definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ShaftSpec {
    /// Physical overall length, AFT datum to FWD end (mm)
    pub overall_length_mm: f64,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bodies: Vec<Body>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tapers: Vec<Taper>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub threads: Vec<Thread>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub liners: Vec<Liner>,
}

/// Severity of a validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// One validation finding against a spec
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<EntityId>,
}

impl ValidationIssue {
    fn error(message: impl Into<String>, component: Option<&EntityId>) -> Self {
        ValidationIssue {
            severity: Severity::Error,
            message: message.into(),
            component: component.cloned(),
        }
    }

    fn warning(message: impl Into<String>, component: Option<&EntityId>) -> Self {
        ValidationIssue {
            severity: Severity::Warning,
            message: message.into(),
            component: component.cloned(),
        }
    }
}

impl ShaftSpec {
    pub fn new(overall_length_mm: f64) -> Self {
        ShaftSpec {
            overall_length_mm,
            ..Default::default()
        }
    }

    pub fn component_count(&self) -> usize {
        self.bodies.len() + self.tapers.len() + self.threads.len() + self.liners.len()
    }

    /// New spec with the overall length replaced
    pub fn with_overall_length(&self, overall_length_mm: f64) -> Self {
        let mut next = self.clone();
        next.overall_length_mm = overall_length_mm;
        next
    }

    /// New spec with a body appended
    pub fn with_body(&self, body: Body) -> Self {
        let mut next = self.clone();
        next.bodies.push(body);
        next
    }

    /// New spec with a taper appended
    pub fn with_taper(&self, taper: Taper) -> Self {
        let mut next = self.clone();
        next.tapers.push(taper);
        next
    }

    /// New spec with a thread appended
    pub fn with_thread(&self, thread: Thread) -> Self {
        let mut next = self.clone();
        next.threads.push(thread);
        next
    }

    /// New spec with a liner appended
    pub fn with_liner(&self, liner: Liner) -> Self {
        let mut next = self.clone();
        next.liners.push(liner);
        next
    }

    /// New spec with the identified component removed; `removed` reports
    /// whether anything matched
    pub fn with_component_removed(&self, id: &EntityId) -> (Self, bool) {
        let mut next = self.clone();
        let before = next.component_count();
        next.bodies.retain(|b| &b.id != id);
        next.tapers.retain(|t| &t.id != id);
        next.threads.retain(|t| &t.id != id);
        next.liners.retain(|l| &l.id != id);
        let removed = next.component_count() < before;
        (next, removed)
    }

    /// Look up a component's kind by id
    pub fn kind_of(&self, id: &EntityId) -> Option<ComponentKind> {
        if self.bodies.iter().any(|b| &b.id == id) {
            Some(ComponentKind::Body)
        } else if self.tapers.iter().any(|t| &t.id == id) {
            Some(ComponentKind::Taper)
        } else if self.threads.iter().any(|t| &t.id == id) {
            Some(ComponentKind::Thread)
        } else if self.liners.iter().any(|l| &l.id == id) {
            Some(ComponentKind::Liner)
        } else {
            None
        }
    }

    /// Structural validation
    ///
    /// Errors are violations of the data-model invariants (negative values,
    /// malformed keyways, unparseable thread pitch). Warnings cover
    /// conditions the engine tolerates but a drafter should see: spans past
    /// the shaft end, zero-length segments, overlapping explicit components.
    /// Overlap is never an error (spec components may legitimately share
    /// axial span, e.g. a liner over a body).
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.overall_length_mm < 0.0 {
            issues.push(ValidationIssue::error(
                format!("overall length is negative ({} mm)", self.overall_length_mm),
                None,
            ));
        }
        if self.overall_length_mm <= 0.0 && self.component_count() > 0 {
            issues.push(ValidationIssue::warning(
                "components exist but overall length is zero; layout is degenerate",
                None,
            ));
        }

        for b in &self.bodies {
            self.check_common(&mut issues, b.kind(), &b.id, b.start_from_aft_mm, b.length_mm);
            if b.dia_mm < 0.0 {
                issues.push(ValidationIssue::error("body diameter is negative", Some(&b.id)));
            }
        }

        for t in &self.tapers {
            self.check_common(&mut issues, t.kind(), &t.id, t.start_from_aft_mm, t.length_mm);
            if t.start_dia_mm < 0.0 || t.end_dia_mm < 0.0 {
                issues.push(ValidationIssue::error("taper diameter is negative", Some(&t.id)));
            }
            if let Some(kw) = &t.keyway {
                if kw.length_mm > t.length_mm + EPS_MM {
                    issues.push(ValidationIssue::error(
                        format!(
                            "keyway length {} mm exceeds taper length {} mm",
                            kw.length_mm, t.length_mm
                        ),
                        Some(&t.id),
                    ));
                }
                if kw.width_mm < 0.0 || kw.depth_mm < 0.0 || kw.length_mm < 0.0 {
                    issues.push(ValidationIssue::error("keyway dimensions are negative", Some(&t.id)));
                }
            }
        }

        for t in &self.threads {
            self.check_common(&mut issues, t.kind(), &t.id, t.start_from_aft_mm, t.length_mm);
            if t.major_dia_mm < 0.0 {
                issues.push(ValidationIssue::error("thread major diameter is negative", Some(&t.id)));
            }
            if t.pitch_mm.is_none() && t.tpi.is_none() {
                issues.push(ValidationIssue::error(
                    "thread has neither pitch nor TPI",
                    Some(&t.id),
                ));
            }
            if matches!(t.pitch_mm, Some(p) if p <= 0.0) || matches!(t.tpi, Some(v) if v <= 0.0) {
                issues.push(ValidationIssue::error(
                    "thread pitch/TPI must be positive",
                    Some(&t.id),
                ));
            }
        }

        for l in &self.liners {
            self.check_common(&mut issues, l.kind(), &l.id, l.start_from_aft_mm, l.length_mm);
            if l.od_mm < 0.0 {
                issues.push(ValidationIssue::error("liner OD is negative", Some(&l.id)));
            }
        }

        issues
    }

    /// True when validation reports no errors (warnings permitted)
    pub fn is_valid(&self) -> bool {
        self.validate()
            .iter()
            .all(|i| i.severity != Severity::Error)
    }

    fn check_common(
        &self,
        issues: &mut Vec<ValidationIssue>,
        kind: ComponentKind,
        id: &EntityId,
        start_mm: f64,
        length_mm: f64,
    ) {
        if start_mm < 0.0 {
            issues.push(ValidationIssue::error(
                format!("{} start is negative ({} mm)", kind, start_mm),
                Some(id),
            ));
        }
        if length_mm < 0.0 {
            issues.push(ValidationIssue::error(
                format!("{} length is negative ({} mm)", kind, length_mm),
                Some(id),
            ));
        } else if length_mm <= EPS_MM {
            issues.push(ValidationIssue::warning(
                format!("{} has zero length and contributes no geometry", kind),
                Some(id),
            ));
        }
        if start_mm + length_mm > self.overall_length_mm + EPS_MM {
            issues.push(ValidationIssue::warning(
                format!(
                    "{} ends at {} mm, past the shaft end ({} mm)",
                    kind,
                    start_mm + length_mm,
                    self.overall_length_mm
                ),
                Some(id),
            ));
        }
    }
}
