//! `shaftkit list` - list explicit components

use clap::Args;
use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::Path;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::args::OutputFormat;
use crate::cli::helpers::{format_short_id, load_document, truncate_str};
use crate::core::units::{format_length, Unit};
use crate::entities::segment::{AxialReference, Segment, Thread};
use crate::entities::shaft::ShaftSpec;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Tabled, Serialize)]
struct ComponentRow {
    #[tabled(rename = "REF")]
    reference: String,

    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "KIND")]
    kind: String,

    #[tabled(rename = "START")]
    start: String,

    #[tabled(rename = "LEN")]
    len: String,

    #[tabled(rename = "END")]
    end: String,

    #[tabled(rename = "DETAIL")]
    detail: String,
}

fn thread_detail(t: &Thread, unit: Unit) -> String {
    let t = t.normalized();
    let mut detail = format!("major Ø{}", format_length(t.major_dia_mm, unit));
    if let Some(pitch) = t.pitch_mm {
        detail.push_str(&format!(", pitch {pitch} mm"));
    }
    if t.exclude_from_oal {
        detail.push_str(", excl OAL");
    }
    detail
}

/// Stored-position columns; FWD-authored components have no authoritative
/// stored AFT start, so their position shows as the authored FWD offset
fn position_columns(
    seg: &dyn Segment,
    reference: AxialReference,
    fwd_offset_mm: Option<f64>,
    unit: Unit,
) -> (String, String, String) {
    match reference {
        AxialReference::Aft => (
            format_length(seg.start_from_aft_mm(), unit),
            format_length(seg.length_mm(), unit),
            format_length(seg.end_from_aft_mm(), unit),
        ),
        AxialReference::Fwd => (
            format!("FWD+{}", format_length(fwd_offset_mm.unwrap_or(0.0), unit)),
            format_length(seg.length_mm(), unit),
            "-".to_string(),
        ),
    }
}

fn rows(spec: &ShaftSpec, unit: Unit) -> Vec<ComponentRow> {
    let mut rows = Vec::new();

    let mut push = |reference: String,
                    seg: &dyn Segment,
                    (start, len, end): (String, String, String),
                    detail: String| {
        rows.push(ComponentRow {
            reference,
            id: format_short_id(seg.id()),
            kind: seg.kind().to_string(),
            start,
            len,
            end,
            detail,
        });
    };

    for (i, b) in spec.bodies.iter().enumerate() {
        push(
            format!("BODY@{}", i + 1),
            b,
            position_columns(b, AxialReference::Aft, None, unit),
            format!("Ø{}", format_length(b.dia_mm, unit)),
        );
    }
    for (i, t) in spec.tapers.iter().enumerate() {
        let mut detail = format!(
            "Ø{} → Ø{}",
            format_length(t.start_dia_mm, unit),
            format_length(t.end_dia_mm, unit)
        );
        if t.keyway.is_some() {
            detail.push_str(", keyway");
        }
        push(
            format!("TPR@{}", i + 1),
            t,
            position_columns(t, t.authored_reference, t.authored_start_from_fwd_mm, unit),
            detail,
        );
    }
    for (i, t) in spec.threads.iter().enumerate() {
        push(
            format!("THD@{}", i + 1),
            t,
            position_columns(t, t.authored_reference, t.authored_start_from_fwd_mm, unit),
            thread_detail(t, unit),
        );
    }
    for (i, l) in spec.liners.iter().enumerate() {
        let mut detail = format!("OD Ø{}", format_length(l.od_mm, unit));
        if let Some(label) = &l.label {
            detail.push_str(&format!(", \"{}\"", truncate_str(label, 24)));
        }
        push(
            format!("LNR@{}", i + 1),
            l,
            position_columns(l, l.authored_reference, l.authored_start_from_fwd_mm, unit),
            detail,
        );
    }

    rows
}

pub fn run(args: ListArgs, file: &Path) -> Result<()> {
    let doc = load_document(file)?;
    let unit = doc.preferred_unit;
    let rows = rows(&doc.spec, unit);

    if rows.is_empty() {
        println!("No components found");
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => {
            let mut table = Table::new(&rows);
            table.with(Style::sharp());
            println!("{table}");
            println!(
                "{} component(s), overall length {} {}",
                rows.len(),
                format_length(doc.spec.overall_length_mm, unit),
                unit.suffix(),
            );
        }
        OutputFormat::Tsv => {
            for r in &rows {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    r.reference, r.id, r.kind, r.start, r.len, r.end, r.detail
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows).into_diagnostic()?);
        }
    }

    if doc.spec.overall_length_mm <= 0.0 {
        println!(
            "{}",
            style("note: overall length is zero; run `shaftkit set-length`").yellow()
        );
    }
    Ok(())
}
