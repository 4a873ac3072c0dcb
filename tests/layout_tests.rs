//! Library-level resolution scenarios - authored specs through the geometry engine

use shaftkit::core::identity::{EntityId, EntityPrefix};
use shaftkit::entities::segment::{AxialReference, Body, EndAttachment, Liner, Taper, Thread};
use shaftkit::entities::shaft::ShaftSpec;
use shaftkit::geometry::{compute_oal_window, resolve_layout, Source};

const TOL: f64 = 1e-9;

fn body(start: f64, len: f64, dia: f64) -> Body {
    Body {
        id: EntityId::new(EntityPrefix::Body),
        start_from_aft_mm: start,
        length_mm: len,
        dia_mm: dia,
    }
}

fn taper(start: f64, len: f64, start_dia: f64, end_dia: f64) -> Taper {
    Taper {
        id: EntityId::new(EntityPrefix::Taper),
        start_from_aft_mm: start,
        length_mm: len,
        start_dia_mm: start_dia,
        end_dia_mm: end_dia,
        keyway: None,
        orientation: None,
        authored_reference: AxialReference::Aft,
        authored_start_from_fwd_mm: None,
    }
}

fn excluded_thread(start: f64, len: f64) -> Thread {
    Thread {
        id: EntityId::new(EntityPrefix::Thread),
        start_from_aft_mm: start,
        length_mm: len,
        major_dia_mm: 30.0,
        pitch_mm: Some(2.0),
        tpi: None,
        exclude_from_oal: true,
        end_attachment: Some(EndAttachment::Nut),
        authored_reference: AxialReference::Aft,
        authored_start_from_fwd_mm: None,
    }
}

#[test]
fn test_bare_shaft_resolves_to_single_auto_body() {
    let spec = ShaftSpec::new(200.0);
    let layout = resolve_layout(&spec);

    assert_eq!(layout.components.len(), 1);
    let auto = &layout.components[0];
    assert_eq!(auto.source, Source::Auto);
    assert!(auto.start_mm_physical.abs() < TOL);
    assert!((auto.end_mm_physical - 200.0).abs() < TOL);
}

#[test]
fn test_full_tiling_with_mixed_components() {
    let spec = ShaftSpec::new(300.0)
        .with_body(body(50.0, 100.0, 60.0))
        .with_taper(taper(250.0, 50.0, 60.0, 48.0));
    let layout = resolve_layout(&spec);

    // components tile [0, 300] with no gaps once sorted by start
    let mut sorted: Vec<_> = layout
        .components
        .iter()
        .map(|c| (c.start_mm_physical, c.end_mm_physical))
        .collect();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));
    assert!(sorted.first().unwrap().0.abs() < TOL);
    assert!((sorted.last().unwrap().1 - 300.0).abs() < TOL);
    for pair in sorted.windows(2) {
        assert!((pair[0].1 - pair[1].0).abs() < 1e-3, "gap between segments");
    }

    let autos = layout.components.iter().filter(|c| c.source == Source::Auto);
    assert_eq!(autos.count(), 2);
}

#[test]
fn test_excluded_end_threads_shrink_window_both_ends() {
    let spec = ShaftSpec::new(400.0)
        .with_thread(excluded_thread(0.0, 25.0))
        .with_thread(excluded_thread(370.0, 30.0));

    let window = compute_oal_window(&spec);
    assert!((window.measure_start_mm - 25.0).abs() < TOL);
    assert!((window.measure_end_mm - 370.0).abs() < TOL);
    assert!((window.span_mm() - 345.0).abs() < TOL);
}

#[test]
fn test_interior_excluded_thread_leaves_window_alone() {
    let spec = ShaftSpec::new(400.0).with_thread(excluded_thread(150.0, 30.0));
    let window = compute_oal_window(&spec);
    assert!(window.measure_start_mm.abs() < TOL);
    assert!((window.measure_end_mm - 400.0).abs() < TOL);
}

#[test]
fn test_fwd_liner_tracks_window_not_physical_end() {
    let liner = Liner {
        id: EntityId::new(EntityPrefix::Liner),
        start_from_aft_mm: 0.0,
        length_mm: 40.0,
        od_mm: 70.0,
        label: None,
        authored_reference: AxialReference::Fwd,
        authored_start_from_fwd_mm: Some(0.0),
        end_mm_physical: 0.0,
    };

    // without the excluded thread the liner ends at the physical FWD end
    let spec = ShaftSpec::new(400.0).with_liner(liner.clone());
    let layout = resolve_layout(&spec);
    let resolved = layout
        .components
        .iter()
        .find(|c| c.id.as_ref() == Some(&liner.id))
        .unwrap();
    assert!((resolved.end_mm_physical - 400.0).abs() < TOL);

    // an excluded FWD-end thread pulls the datum back; the liner follows it
    let spec = spec.with_thread(excluded_thread(370.0, 30.0));
    let layout = resolve_layout(&spec);
    let resolved = layout
        .components
        .iter()
        .find(|c| c.id.as_ref() == Some(&liner.id))
        .unwrap();
    assert!((resolved.end_mm_physical - 370.0).abs() < TOL);
    assert!((resolved.start_mm_physical - 330.0).abs() < TOL);
}

#[test]
fn test_removal_restores_prior_geometry() {
    let extra = body(100.0, 50.0, 60.0);
    let base = ShaftSpec::new(300.0).with_body(body(0.0, 80.0, 55.0));
    let before = resolve_layout(&base);

    let with_extra = base.with_body(extra.clone());
    let (after_rm, removed) = with_extra.with_component_removed(&extra.id);
    assert!(removed);

    let after = resolve_layout(&after_rm);
    assert_eq!(before.components.len(), after.components.len());
    for (x, y) in before.components.iter().zip(after.components.iter()) {
        assert!((x.start_mm_physical - y.start_mm_physical).abs() < TOL);
        assert!((x.end_mm_physical - y.end_mm_physical).abs() < TOL);
    }
}

#[test]
fn test_resolution_never_mutates_spec() {
    let spec = ShaftSpec::new(250.0)
        .with_body(body(10.0, 90.0, 60.0))
        .with_thread(excluded_thread(0.0, 10.0));
    let snapshot = serde_json::to_string(&spec).unwrap();

    let _ = resolve_layout(&spec);
    let _ = compute_oal_window(&spec);

    assert_eq!(serde_json::to_string(&spec).unwrap(), snapshot);
}
