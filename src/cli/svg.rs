//! SVG export - dimensioned 2-D profile drawing
//!
//! Emits the same derived geometry the terminal preview shows: component
//! profiles mirrored about the centerline, stacked dimension rails, and the
//! OAL callout on its own top rail. Pure string emission; no canvas library.

use crate::cli::viz::dimension_spans;
use crate::core::units::{format_length, Unit};
use crate::geometry::tier::{assign_tiers, RailKind};
use crate::geometry::{ShaftLayout, Source, EPS_MM};

const DRAWING_WIDTH_PX: f64 = 900.0;
const PROFILE_HEIGHT_PX: f64 = 240.0;
const MARGIN_PX: f64 = 40.0;
const RAIL_STEP_PX: f64 = 28.0;

/// Render a complete SVG document for a resolved layout
pub fn render_svg(layout: &ShaftLayout, unit: Unit) -> String {
    let overall = layout.overall_length_mm.max(EPS_MM);
    let x_scale = (DRAWING_WIDTH_PX - 2.0 * MARGIN_PX) / overall;
    let max_dia = layout
        .components
        .iter()
        .map(|c| c.aft_dia_mm().max(c.fwd_dia_mm()))
        .fold(0.0f64, f64::max)
        .max(EPS_MM);
    let y_scale = (PROFILE_HEIGHT_PX * 0.9) / max_dia;
    let center_y = MARGIN_PX + PROFILE_HEIGHT_PX / 2.0;

    let to_x = |mm: f64| MARGIN_PX + mm * x_scale;

    let spans = dimension_spans(layout, unit);
    let tiered = assign_tiers(spans);
    let tier_count = tiered.iter().map(|t| t.tier + 1).max().unwrap_or(0);

    // rails grow downward from the profile; OAL gets one extra rail
    let rails_base_y = MARGIN_PX + PROFILE_HEIGHT_PX + RAIL_STEP_PX;
    let total_height = rails_base_y + (tier_count as f64 + 1.5) * RAIL_STEP_PX + MARGIN_PX;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
         viewBox=\"0 0 {w} {h}\">\n",
        w = DRAWING_WIDTH_PX,
        h = total_height
    ));
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");

    // centerline, dash-dot per drafting convention
    svg.push_str(&format!(
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#888\" \
         stroke-width=\"0.5\" stroke-dasharray=\"12 3 2 3\"/>\n",
        to_x(0.0) - 10.0,
        center_y,
        to_x(overall) + 10.0,
        center_y
    ));

    for c in &layout.components {
        if c.length_mm() <= EPS_MM {
            continue;
        }
        let x0 = to_x(c.start_mm_physical.clamp(0.0, overall));
        let x1 = to_x(c.end_mm_physical.clamp(0.0, overall));
        let h0 = c.aft_dia_mm() * y_scale / 2.0;
        let h1 = c.fwd_dia_mm() * y_scale / 2.0;

        let (stroke, dash) = match c.source {
            Source::Explicit => ("#222", ""),
            Source::Auto => ("#777", " stroke-dasharray=\"4 3\""),
            Source::Draft => ("#36c", " stroke-dasharray=\"2 2\""),
        };

        svg.push_str(&format!(
            "<polygon points=\"{x0:.2},{t0:.2} {x1:.2},{t1:.2} {x1:.2},{b1:.2} {x0:.2},{b0:.2}\" \
             fill=\"none\" stroke=\"{stroke}\" stroke-width=\"1.2\"{dash}/>\n",
            t0 = center_y - h0,
            t1 = center_y - h1,
            b1 = center_y + h1,
            b0 = center_y + h0,
        ));
    }

    for t in &tiered {
        let y = rails_base_y + t.tier as f64 * RAIL_STEP_PX;
        let color = match t.span.kind {
            RailKind::Local => "#06c",
            RailKind::Datum => "#080",
            RailKind::Oal => "#000",
        };
        push_dimension_line(
            &mut svg,
            to_x(t.span.start_mm),
            to_x(t.span.end_mm),
            y,
            &t.span.payload,
            color,
        );
    }

    // OAL on the dedicated outermost rail
    let oal_y = rails_base_y + tier_count as f64 * RAIL_STEP_PX + RAIL_STEP_PX * 0.5;
    let oal_label = format!(
        "OAL {} {}",
        format_length(layout.window.span_mm(), unit),
        unit.suffix()
    );
    push_dimension_line(
        &mut svg,
        to_x(layout.window.measure_start_mm),
        to_x(layout.window.measure_end_mm),
        oal_y,
        &oal_label,
        "#000",
    );

    svg.push_str("</svg>\n");
    svg
}

/// A dimension line: extension ticks, the measure line, centered label
fn push_dimension_line(svg: &mut String, x0: f64, x1: f64, y: f64, label: &str, color: &str) {
    svg.push_str(&format!(
        "<line x1=\"{x0:.2}\" y1=\"{y0:.2}\" x2=\"{x0:.2}\" y2=\"{y1:.2}\" \
         stroke=\"{color}\" stroke-width=\"0.8\"/>\n",
        y0 = y - 5.0,
        y1 = y + 5.0,
    ));
    svg.push_str(&format!(
        "<line x1=\"{x1:.2}\" y1=\"{y0:.2}\" x2=\"{x1:.2}\" y2=\"{y1:.2}\" \
         stroke=\"{color}\" stroke-width=\"0.8\"/>\n",
        y0 = y - 5.0,
        y1 = y + 5.0,
    ));
    svg.push_str(&format!(
        "<line x1=\"{x0:.2}\" y1=\"{y:.2}\" x2=\"{x1:.2}\" y2=\"{y:.2}\" \
         stroke=\"{color}\" stroke-width=\"0.8\"/>\n",
    ));
    svg.push_str(&format!(
        "<text x=\"{cx:.2}\" y=\"{ty:.2}\" font-size=\"11\" font-family=\"sans-serif\" \
         text-anchor=\"middle\" fill=\"{color}\">{label}</text>\n",
        cx = (x0 + x1) / 2.0,
        ty = y - 3.0,
        label = escape_xml(label),
    ));
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
