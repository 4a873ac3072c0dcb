//! Gap derivation - synthetic auto-body fillers for uncovered axial spans
//!
//! The drafting domain wants every axial millimeter visually accounted for:
//! no blank shaft segments in the preview or the exported drawing, without
//! forcing the drafter to author filler cylinders by hand. Gaps between
//! explicit components become ephemeral AUTO bodies, re-derived from scratch
//! on every read and never persisted.

use crate::core::identity::EntityId;
use crate::entities::segment::ComponentKind;
use crate::entities::shaft::ShaftSpec;
use crate::geometry::resolve::{
    resolve_with_window, AutoBodyKey, ResolvedComponent, ResolvedDetail, Source,
};
use crate::geometry::window::{compute_oal_window, OalWindow};
use crate::geometry::EPS_MM;

/// A fully resolved shaft: window plus explicit and AUTO components sorted by
/// physical start
#[derive(Debug, Clone, PartialEq)]
pub struct ShaftLayout {
    pub overall_length_mm: f64,
    pub window: OalWindow,
    pub components: Vec<ResolvedComponent>,
}

impl ShaftLayout {
    pub fn explicit(&self) -> impl Iterator<Item = &ResolvedComponent> {
        self.components.iter().filter(|c| c.source == Source::Explicit)
    }

    pub fn auto_bodies(&self) -> impl Iterator<Item = &ResolvedComponent> {
        self.components.iter().filter(|c| c.source == Source::Auto)
    }
}

/// Span and neighbor bookkeeping for one explicit interval
struct Interval<'a> {
    start: f64,
    end: f64,
    component: &'a ResolvedComponent,
}

/// Derive one AUTO body per uncovered gap in `[0, overall_length_mm]`
///
/// Walks the explicit intervals sorted by start, tracking a cursor from 0.
/// Overlapping explicit intervals are not an error: the cursor advances via
/// max, so gaps stay correct regardless of overlap. Intervals with length
/// <= epsilon contribute no coverage and are skipped entirely.
pub fn derive_auto_bodies(
    overall_length_mm: f64,
    explicit: &[ResolvedComponent],
) -> Vec<ResolvedComponent> {
    let mut intervals: Vec<Interval> = explicit
        .iter()
        .filter(|c| c.length_mm() > EPS_MM)
        .map(|c| Interval {
            start: c.start_mm_physical,
            end: c.end_mm_physical,
            component: c,
        })
        .collect();
    intervals.sort_by(|a, b| {
        a.start
            .total_cmp(&b.start)
            .then_with(|| a.end.total_cmp(&b.end))
    });

    let mut gaps = Vec::new();
    let mut cursor = 0.0f64;
    // The explicit component whose end currently defines the cursor; becomes
    // the left neighbor of the next gap.
    let mut cursor_owner: Option<&ResolvedComponent> = None;

    for iv in &intervals {
        if iv.start > cursor + EPS_MM {
            gaps.push(make_auto_body(
                cursor,
                iv.start,
                cursor_owner,
                Some(iv.component),
            ));
        }
        if iv.end > cursor {
            cursor = iv.end;
            cursor_owner = Some(iv.component);
        }
    }

    if cursor < overall_length_mm - EPS_MM {
        gaps.push(make_auto_body(cursor, overall_length_mm, cursor_owner, None));
    }

    gaps
}

fn make_auto_body(
    start: f64,
    end: f64,
    left: Option<&ResolvedComponent>,
    right: Option<&ResolvedComponent>,
) -> ResolvedComponent {
    // Display diameter inherits from the adjacent end of a neighbor; the gap
    // interval itself never depends on this.
    let dia_mm = left
        .map(|l| l.fwd_dia_mm())
        .filter(|d| *d > 0.0)
        .or_else(|| right.map(|r| r.aft_dia_mm()).filter(|d| *d > 0.0))
        .unwrap_or(0.0);

    ResolvedComponent {
        id: None,
        kind: ComponentKind::Body,
        source: Source::Auto,
        start_mm_physical: start,
        end_mm_physical: end,
        auto_body_key: Some(AutoBodyKey {
            left_id: left.and_then(|c| c.id.clone()),
            right_id: right.and_then(|c| c.id.clone()),
        }),
        detail: ResolvedDetail::Body { dia_mm },
    }
}

/// Resolve a spec end to end: explicit components plus AUTO fillers, sorted
/// by physical start, with the measurement window
///
/// Preview and export both consume this, so they are guaranteed to see
/// identical derived geometry for the same spec.
pub fn resolve_layout(spec: &ShaftSpec) -> ShaftLayout {
    let window = compute_oal_window(spec);
    let mut components = resolve_with_window(spec, &window);
    let autos = derive_auto_bodies(spec.overall_length_mm, &components);
    components.extend(autos);
    components.sort_by(|a, b| {
        a.start_mm_physical
            .total_cmp(&b.start_mm_physical)
            .then_with(|| a.end_mm_physical.total_cmp(&b.end_mm_physical))
    });

    ShaftLayout {
        overall_length_mm: spec.overall_length_mm,
        window,
        components,
    }
}
