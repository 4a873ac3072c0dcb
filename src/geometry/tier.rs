//! Dimension-rail tier assignment
//!
//! Preview and SVG dimension callouts share one packing rule: overlapping
//! spans stack onto successive tiers instead of colliding. Assignment is
//! deterministic and independent of input ordering; the sort happens here.

use crate::geometry::EPS_MM;

/// Dimension-line kind, in packing priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RailKind {
    /// Per-component length callout; visually a thin tick pair
    Local,
    /// Measurement from a shaft datum to a feature
    Datum,
    /// The overall-length callout; always on its own dedicated top rail
    Oal,
}

impl RailKind {
    fn rank(&self) -> u8 {
        match self {
            RailKind::Local => 0,
            RailKind::Datum => 1,
            RailKind::Oal => 2,
        }
    }
}

/// An axial span to be placed on a dimension rail
#[derive(Debug, Clone, PartialEq)]
pub struct DimSpan<T> {
    pub start_mm: f64,
    pub end_mm: f64,
    pub kind: RailKind,
    pub payload: T,
}

impl<T> DimSpan<T> {
    pub fn new(start_mm: f64, end_mm: f64, kind: RailKind, payload: T) -> Self {
        DimSpan {
            start_mm,
            end_mm,
            kind,
            payload,
        }
    }

    fn length(&self) -> f64 {
        self.end_mm - self.start_mm
    }

    /// Strict overlap beyond epsilon; touching endpoints do not collide
    fn overlaps(&self, other_start: f64, other_end: f64) -> bool {
        self.start_mm < other_end - EPS_MM && other_start < self.end_mm - EPS_MM
    }
}

/// A span with its assigned tier (0 = closest to the shaft outline)
#[derive(Debug, Clone, PartialEq)]
pub struct TieredSpan<T> {
    pub span: DimSpan<T>,
    pub tier: usize,
}

/// Occupancy record on one tier
#[derive(Clone, Copy)]
struct Occupant {
    start: f64,
    end: f64,
    kind: RailKind,
}

/// Assign non-colliding tiers to a set of dimension spans
///
/// Ordering (total, stable): kind rank first (LOCAL packs greedily before
/// DATUM), then start ascending; ties on start break shorter-first for DATUM
/// (nested datum dimensions stair-step outward) and longer-first for LOCAL.
/// Placement scans tiers from 0: a DATUM span is blocked by any overlapping
/// occupant, a LOCAL span only by overlapping DATUM occupants (thin local
/// ticks may share a tier with each other). OAL spans are not tiered at all;
/// the caller renders them on a dedicated top rail.
pub fn assign_tiers<T>(spans: Vec<DimSpan<T>>) -> Vec<TieredSpan<T>> {
    let mut spans: Vec<DimSpan<T>> = spans
        .into_iter()
        .filter(|s| s.kind != RailKind::Oal)
        .collect();

    spans.sort_by(|a, b| {
        a.kind
            .rank()
            .cmp(&b.kind.rank())
            .then_with(|| a.start_mm.total_cmp(&b.start_mm))
            .then_with(|| match a.kind {
                RailKind::Datum => a.length().total_cmp(&b.length()),
                _ => b.length().total_cmp(&a.length()),
            })
    });

    let mut tiers: Vec<Vec<Occupant>> = Vec::new();
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        let mut placed_tier = None;
        for (t, occupants) in tiers.iter().enumerate() {
            let blocked = occupants.iter().any(|occ| {
                let collides = span.overlaps(occ.start, occ.end);
                match span.kind {
                    RailKind::Datum => collides,
                    RailKind::Local => collides && occ.kind == RailKind::Datum,
                    RailKind::Oal => unreachable!("OAL spans are filtered out"),
                }
            });
            if !blocked {
                placed_tier = Some(t);
                break;
            }
        }

        let tier = match placed_tier {
            Some(t) => t,
            None => {
                tiers.push(Vec::new());
                tiers.len() - 1
            }
        };
        tiers[tier].push(Occupant {
            start: span.start_mm,
            end: span.end_mm,
            kind: span.kind,
        });
        out.push(TieredSpan { span, tier });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: f64, end: f64, kind: RailKind, name: &str) -> DimSpan<String> {
        DimSpan::new(start, end, kind, name.to_string())
    }

    fn tier_of(result: &[TieredSpan<String>], name: &str) -> usize {
        result
            .iter()
            .find(|t| t.span.payload == name)
            .unwrap_or_else(|| panic!("span {} missing from result", name))
            .tier
    }

    #[test]
    fn test_disjoint_spans_share_tier_zero() {
        let result = assign_tiers(vec![
            span(0.0, 20.0, RailKind::Datum, "a"),
            span(30.0, 50.0, RailKind::Datum, "b"),
        ]);
        assert_eq!(tier_of(&result, "a"), 0);
        assert_eq!(tier_of(&result, "b"), 0);
    }

    #[test]
    fn test_overlapping_datums_stack() {
        let result = assign_tiers(vec![
            span(0.0, 40.0, RailKind::Datum, "outer"),
            span(0.0, 20.0, RailKind::Datum, "inner"),
        ]);
        // shorter datum packs first on ties, so it lands closer to the shaft
        assert_eq!(tier_of(&result, "inner"), 0);
        assert_eq!(tier_of(&result, "outer"), 1);
    }

    #[test]
    fn test_touching_endpoints_do_not_collide() {
        let result = assign_tiers(vec![
            span(0.0, 20.0, RailKind::Datum, "a"),
            span(20.0, 40.0, RailKind::Datum, "b"),
        ]);
        assert_eq!(tier_of(&result, "a"), 0);
        assert_eq!(tier_of(&result, "b"), 0);
    }

    #[test]
    fn test_locals_may_share_a_tier() {
        let result = assign_tiers(vec![
            span(0.0, 30.0, RailKind::Local, "a"),
            span(10.0, 40.0, RailKind::Local, "b"),
        ]);
        assert_eq!(tier_of(&result, "a"), 0);
        assert_eq!(tier_of(&result, "b"), 0);
    }

    #[test]
    fn test_local_blocked_by_datum_only() {
        // LOCAL packs first (rank 0) onto tier 0. DATUM is blocked by ANY
        // overlap, including the local tick already on tier 0, so it climbs
        // to tier 1.
        let result = assign_tiers(vec![
            span(0.0, 30.0, RailKind::Local, "tick"),
            span(0.0, 50.0, RailKind::Datum, "datum"),
        ]);
        assert_eq!(tier_of(&result, "tick"), 0);
        assert_eq!(tier_of(&result, "datum"), 1);
    }

    #[test]
    fn test_oal_spans_excluded_from_tiering() {
        let result = assign_tiers(vec![
            span(0.0, 100.0, RailKind::Oal, "oal"),
            span(0.0, 40.0, RailKind::Datum, "d"),
        ]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].span.payload, "d");
    }

    #[test]
    fn test_nested_datums_stair_step_outward() {
        let result = assign_tiers(vec![
            span(0.0, 60.0, RailKind::Datum, "c"),
            span(0.0, 40.0, RailKind::Datum, "b"),
            span(0.0, 20.0, RailKind::Datum, "a"),
        ]);
        assert_eq!(tier_of(&result, "a"), 0);
        assert_eq!(tier_of(&result, "b"), 1);
        assert_eq!(tier_of(&result, "c"), 2);
    }

    // Spec property 6: shuffling the input never changes the assignment.
    #[test]
    fn test_assignment_is_order_independent() {
        let base = vec![
            span(0.0, 20.0, RailKind::Datum, "d1"),
            span(0.0, 40.0, RailKind::Datum, "d2"),
            span(10.0, 30.0, RailKind::Local, "l1"),
            span(25.0, 60.0, RailKind::Local, "l2"),
            span(35.0, 55.0, RailKind::Datum, "d3"),
        ];

        // a few deterministic permutations
        let orders: Vec<Vec<usize>> = vec![
            vec![0, 1, 2, 3, 4],
            vec![4, 3, 2, 1, 0],
            vec![2, 0, 4, 1, 3],
            vec![3, 4, 0, 2, 1],
        ];

        let reference: Vec<(String, usize)> = {
            let mut r: Vec<(String, usize)> = assign_tiers(base.clone())
                .into_iter()
                .map(|t| (t.span.payload, t.tier))
                .collect();
            r.sort();
            r
        };

        for order in orders {
            let shuffled: Vec<DimSpan<String>> =
                order.iter().map(|&i| base[i].clone()).collect();
            let mut result: Vec<(String, usize)> = assign_tiers(shuffled)
                .into_iter()
                .map(|t| (t.span.payload, t.tier))
                .collect();
            result.sort();
            assert_eq!(result, reference);
        }
    }

    #[test]
    fn test_local_ties_longer_first() {
        // Two locals starting together over a datum field: the longer one
        // sorts first; both still land on the same tier since locals do not
        // block each other.
        let result = assign_tiers(vec![
            span(0.0, 10.0, RailKind::Local, "short"),
            span(0.0, 30.0, RailKind::Local, "long"),
        ]);
        assert_eq!(tier_of(&result, "long"), 0);
        assert_eq!(tier_of(&result, "short"), 0);
    }
}
