//! Terminal visualization using braille graphics
//!
//! Renders the resolved shaft profile on a drawille canvas and stacks
//! dimension rails beneath it using the tier assigner, so overlapping
//! callouts stair-step instead of colliding.

use drawille::Canvas;

use crate::core::units::{format_length, Unit};
use crate::geometry::tier::{assign_tiers, DimSpan, RailKind};
use crate::geometry::{ShaftLayout, Source, EPS_MM};

/// Canvas width in braille dots
const PROFILE_WIDTH: u32 = 240;
const PROFILE_HEIGHT: u32 = 56;

/// Text width of a dimension rail line in characters
const RAIL_WIDTH: usize = 120;

/// Build the dimension spans a schematic carries
///
/// One LOCAL span per explicit component (its length callout), one DATUM
/// span from the measurement start to each component start that does not sit
/// on the datum itself, and the OAL span over the measurement window.
pub fn dimension_spans(layout: &ShaftLayout, unit: Unit) -> Vec<DimSpan<String>> {
    let mut spans = Vec::new();

    for c in layout.components.iter().filter(|c| c.source == Source::Explicit) {
        if c.length_mm() <= EPS_MM {
            continue;
        }
        spans.push(DimSpan::new(
            c.start_mm_physical,
            c.end_mm_physical,
            RailKind::Local,
            format_length(c.length_mm(), unit),
        ));

        let datum = layout.window.measure_start_mm;
        if c.start_mm_physical > datum + EPS_MM {
            spans.push(DimSpan::new(
                datum,
                c.start_mm_physical,
                RailKind::Datum,
                format_length(c.start_mm_physical - datum, unit),
            ));
        }
    }

    spans.push(DimSpan::new(
        layout.window.measure_start_mm,
        layout.window.measure_end_mm,
        RailKind::Oal,
        format_length(layout.window.span_mm(), unit),
    ));

    spans
}

/// Render the full ASCII schematic: profile, dimension rails, OAL callout
pub fn render_schematic(layout: &ShaftLayout, unit: Unit) -> String {
    if layout.overall_length_mm <= EPS_MM {
        return "  (empty shaft - set an overall length first)".to_string();
    }

    let mut output = String::new();
    output.push_str(&render_profile(layout));
    output.push('\n');
    output.push_str(&render_rails(layout, unit));
    output
}

/// Braille-canvas side profile: each component outlined between its AFT and
/// FWD diameters, mirrored about the shaft centerline
fn render_profile(layout: &ShaftLayout) -> String {
    let overall = layout.overall_length_mm;
    let max_dia = layout
        .components
        .iter()
        .map(|c| c.aft_dia_mm().max(c.fwd_dia_mm()))
        .fold(0.0f64, f64::max);

    let mut canvas = Canvas::new(PROFILE_WIDTH, PROFILE_HEIGHT);
    let center_y = PROFILE_HEIGHT / 2;
    let x_scale = (PROFILE_WIDTH - 1) as f64 / overall;
    let y_scale = if max_dia > 0.0 {
        (PROFILE_HEIGHT as f64 * 0.45) / max_dia
    } else {
        0.0
    };

    let to_x = |mm: f64| -> u32 { (mm.clamp(0.0, overall) * x_scale).round() as u32 };
    let half = |dia: f64| -> u32 { (dia * y_scale).round() as u32 };

    for c in &layout.components {
        if c.length_mm() <= EPS_MM {
            continue;
        }
        let (x0, x1) = (to_x(c.start_mm_physical), to_x(c.end_mm_physical));
        let (h0, h1) = (half(c.aft_dia_mm()), half(c.fwd_dia_mm()));
        if x1 <= x0 {
            continue;
        }

        // Auto bodies render as a sparse outline so fillers read differently
        // from authored material.
        let step = if c.source == Source::Auto { 3 } else { 1 };

        for x in (x0..=x1).step_by(step) {
            let t = (x - x0) as f64 / (x1 - x0) as f64;
            let h = (h0 as f64 + t * (h1 as f64 - h0 as f64)).round() as u32;
            if x == x0 || x == x1 {
                // vertical shoulder
                for y in 0..=h {
                    canvas.set(x, center_y - y);
                    canvas.set(x, center_y + y);
                }
            } else {
                canvas.set(x, center_y - h);
                canvas.set(x, center_y + h);
            }
        }
    }

    // centerline
    for x in (0..PROFILE_WIDTH).step_by(4) {
        canvas.set(x, center_y);
    }

    canvas.frame()
}

/// Dimension rails as text lines, tier 0 nearest the profile
fn render_rails(layout: &ShaftLayout, unit: Unit) -> String {
    let overall = layout.overall_length_mm;
    let scale = (RAIL_WIDTH - 1) as f64 / overall;
    let to_col = |mm: f64| -> usize {
        (mm.clamp(0.0, overall) * scale).round() as usize
    };

    let spans = dimension_spans(layout, unit);
    let tiered = assign_tiers(spans);
    let tier_count = tiered.iter().map(|t| t.tier + 1).max().unwrap_or(0);

    let mut lines: Vec<Vec<char>> = vec![vec![' '; RAIL_WIDTH]; tier_count];
    for t in &tiered {
        draw_callout(
            &mut lines[t.tier],
            to_col(t.span.start_mm),
            to_col(t.span.end_mm),
            &t.span.payload,
        );
    }

    let mut output = String::new();
    for line in &lines {
        output.push_str(&line.iter().collect::<String>());
        output.push('\n');
    }

    // dedicated OAL rail, always outermost
    let mut oal_line = vec![' '; RAIL_WIDTH];
    let label = format!(
        "OAL {} {}",
        format_length(layout.window.span_mm(), unit),
        unit.suffix()
    );
    draw_callout(
        &mut oal_line,
        to_col(layout.window.measure_start_mm),
        to_col(layout.window.measure_end_mm),
        &label,
    );
    output.push_str(&oal_line.iter().collect::<String>());
    output.push('\n');
    output
}

/// Write `|<--- label --->|` into a character row between two columns
fn draw_callout(row: &mut [char], col_start: usize, col_end: usize, label: &str) {
    let col_end = col_end.min(row.len() - 1);
    let col_start = col_start.min(col_end);

    row[col_start] = '|';
    row[col_end] = '|';
    for cell in row.iter_mut().take(col_end).skip(col_start + 1) {
        *cell = '-';
    }
    if col_end > col_start + 1 {
        row[col_start + 1] = '<';
        row[col_end - 1] = '>';
    }

    let width = col_end.saturating_sub(col_start);
    if width > label.len() + 3 {
        let label_start = col_start + (width - label.len()) / 2;
        for (i, ch) in label.chars().enumerate() {
            row[label_start + i] = ch;
        }
    }
}
