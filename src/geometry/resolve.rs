//! Explicit-component resolver
//!
//! Converts each authored segment into its physical (AFT-measured) span.
//! AFT-authored positions are authoritative as stored; FWD-authored positions
//! are re-derived on every resolution from the current measurement datum, so
//! editing a component that shifts the effective window re-anchors every
//! FWD-authored component on the next read without touching any stored field.

use crate::core::identity::EntityId;
use crate::entities::segment::{
    AxialReference, ComponentKind, EndAttachment, Keyway, Segment, TaperOrientation,
};
use crate::entities::shaft::ShaftSpec;
use crate::geometry::window::{compute_oal_window, OalWindow};

/// Where a resolved component came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// User-authored, persisted segment
    Explicit,
    /// Synthetic gap filler; never persisted
    Auto,
    /// In-progress authoring preview; never persisted
    Draft,
}

/// Identity of a gap region via its explicit neighbors
///
/// Auto bodies have no id of their own; callers that want to track "the same
/// gap" across edits key on the ids of the explicit segments flanking it
/// (`None` at the shaft ends). Recomputed from scratch every derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoBodyKey {
    pub left_id: Option<EntityId>,
    pub right_id: Option<EntityId>,
}

/// Kind-specific payload of a resolved component
///
/// Stored diameters pass through unchanged: a taper's `start_dia_mm` always
/// names the AFT end of the span and `end_dia_mm` the FWD end, no matter how
/// the taper was authored. Only position is affected by authoring reference.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedDetail {
    Body {
        dia_mm: f64,
    },
    Taper {
        start_dia_mm: f64,
        end_dia_mm: f64,
        keyway: Option<Keyway>,
        orientation: Option<TaperOrientation>,
    },
    Thread {
        major_dia_mm: f64,
        pitch_mm: Option<f64>,
        tpi: Option<f64>,
        exclude_from_oal: bool,
        end_attachment: Option<EndAttachment>,
    },
    Liner {
        od_mm: f64,
        label: Option<String>,
    },
}

/// One fully-resolved axial component; ephemeral, never serialized
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedComponent {
    /// Stable id of the source segment; `None` for AUTO fillers
    pub id: Option<EntityId>,
    pub kind: ComponentKind,
    pub source: Source,
    pub start_mm_physical: f64,
    pub end_mm_physical: f64,

    /// Neighbor keying for AUTO fillers only
    pub auto_body_key: Option<AutoBodyKey>,
    pub detail: ResolvedDetail,
}

impl ResolvedComponent {
    pub fn length_mm(&self) -> f64 {
        self.end_mm_physical - self.start_mm_physical
    }

    /// Outline diameter at the AFT end of the span (for rendering)
    pub fn aft_dia_mm(&self) -> f64 {
        match &self.detail {
            ResolvedDetail::Body { dia_mm } => *dia_mm,
            ResolvedDetail::Taper { start_dia_mm, .. } => *start_dia_mm,
            ResolvedDetail::Thread { major_dia_mm, .. } => *major_dia_mm,
            ResolvedDetail::Liner { od_mm, .. } => *od_mm,
        }
    }

    /// Outline diameter at the FWD end of the span (for rendering)
    pub fn fwd_dia_mm(&self) -> f64 {
        match &self.detail {
            ResolvedDetail::Body { dia_mm } => *dia_mm,
            ResolvedDetail::Taper { end_dia_mm, .. } => *end_dia_mm,
            ResolvedDetail::Thread { major_dia_mm, .. } => *major_dia_mm,
            ResolvedDetail::Liner { od_mm, .. } => *od_mm,
        }
    }
}

/// Physical start for a FWD-authored segment
fn fwd_start(datum_mm: f64, offset_from_fwd_mm: f64, length_mm: f64) -> f64 {
    datum_mm - offset_from_fwd_mm - length_mm
}

/// Resolve every stored segment to its physical span
///
/// Pure: resolving the same spec twice yields identical results, and the
/// spec is never written back to. One EXPLICIT entry per stored segment, in
/// storage order (bodies, tapers, threads, liners); callers sort as needed.
///
/// FWD datum rule: FWD-authored components measure from the measurement
/// datum (`measure_end_mm`), except a thread that is itself excluded from
/// OAL, which measures from the physical overall length - its span lies
/// beyond the window it would otherwise define.
pub fn resolve_explicit_components(spec: &ShaftSpec) -> Vec<ResolvedComponent> {
    let window = compute_oal_window(spec);
    resolve_with_window(spec, &window)
}

/// Resolution against a precomputed window (avoids recomputing it when the
/// caller already holds one)
pub fn resolve_with_window(spec: &ShaftSpec, window: &OalWindow) -> Vec<ResolvedComponent> {
    let overall = spec.overall_length_mm;
    let mut out = Vec::with_capacity(spec.component_count());

    for b in &spec.bodies {
        out.push(ResolvedComponent {
            id: Some(b.id.clone()),
            kind: ComponentKind::Body,
            source: Source::Explicit,
            start_mm_physical: b.start_from_aft_mm,
            end_mm_physical: b.end_from_aft_mm(),
            auto_body_key: None,
            detail: ResolvedDetail::Body { dia_mm: b.dia_mm },
        });
    }

    for t in &spec.tapers {
        let start = match t.authored_reference {
            AxialReference::Aft => t.start_from_aft_mm,
            AxialReference::Fwd => fwd_start(
                window.measure_end_mm,
                t.authored_start_from_fwd_mm.unwrap_or(0.0),
                t.length_mm,
            ),
        };
        out.push(ResolvedComponent {
            id: Some(t.id.clone()),
            kind: ComponentKind::Taper,
            source: Source::Explicit,
            start_mm_physical: start,
            end_mm_physical: start + t.length_mm,
            auto_body_key: None,
            detail: ResolvedDetail::Taper {
                start_dia_mm: t.start_dia_mm,
                end_dia_mm: t.end_dia_mm,
                keyway: t.keyway.clone(),
                orientation: t.orientation,
            },
        });
    }

    for t in &spec.threads {
        let t = t.normalized();
        let start = match t.authored_reference {
            AxialReference::Aft => t.start_from_aft_mm,
            AxialReference::Fwd => {
                let datum = if t.exclude_from_oal {
                    overall
                } else {
                    window.measure_end_mm
                };
                fwd_start(datum, t.authored_start_from_fwd_mm.unwrap_or(0.0), t.length_mm)
            }
        };
        out.push(ResolvedComponent {
            id: Some(t.id.clone()),
            kind: ComponentKind::Thread,
            source: Source::Explicit,
            start_mm_physical: start,
            end_mm_physical: start + t.length_mm,
            auto_body_key: None,
            detail: ResolvedDetail::Thread {
                major_dia_mm: t.major_dia_mm,
                pitch_mm: t.pitch_mm,
                tpi: t.tpi,
                exclude_from_oal: t.exclude_from_oal,
                end_attachment: t.end_attachment,
            },
        });
    }

    for l in &spec.liners {
        let l = l.normalized();
        let start = match l.authored_reference {
            AxialReference::Aft => l.start_from_aft_mm,
            AxialReference::Fwd => fwd_start(
                window.measure_end_mm,
                l.authored_start_from_fwd_mm.unwrap_or(0.0),
                l.length_mm,
            ),
        };
        out.push(ResolvedComponent {
            id: Some(l.id.clone()),
            kind: ComponentKind::Liner,
            source: Source::Explicit,
            start_mm_physical: start,
            end_mm_physical: start + l.length_mm,
            auto_body_key: None,
            detail: ResolvedDetail::Liner {
                od_mm: l.od_mm,
                label: l.label.clone(),
            },
        });
    }

    out
}
