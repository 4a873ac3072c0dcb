//! `shaftkit resolve` - show the fully resolved layout
//!
//! This is the same derived geometry the preview and the SVG export consume:
//! explicit components at their physical spans plus AUTO gap fillers, and
//! the OAL measurement window.

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
use crate::geometry::{resolve_layout, ResolvedComponent, ResolvedDetail, ShaftLayout, Source};

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Tabled, Serialize)]
struct ResolvedRow {
    #[tabled(rename = "SOURCE")]
    source: String,

    #[tabled(rename = "KIND")]
    kind: String,

    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "START")]
    start: String,

    #[tabled(rename = "END")]
    end: String,

    #[tabled(rename = "LEN")]
    len: String,

    #[tabled(rename = "DETAIL")]
    detail: String,
}

fn detail_text(c: &ResolvedComponent, unit: Unit) -> String {
    match &c.detail {
        ResolvedDetail::Body { dia_mm } => format!("Ø{}", format_length(*dia_mm, unit)),
        ResolvedDetail::Taper {
            start_dia_mm,
            end_dia_mm,
            keyway,
            ..
        } => {
            let mut s = format!(
                "Ø{} → Ø{}",
                format_length(*start_dia_mm, unit),
                format_length(*end_dia_mm, unit)
            );
            if keyway.is_some() {
                s.push_str(", keyway");
            }
            s
        }
        ResolvedDetail::Thread {
            major_dia_mm,
            pitch_mm,
            exclude_from_oal,
            ..
        } => {
            let mut s = format!("major Ø{}", format_length(*major_dia_mm, unit));
            if let Some(pitch) = pitch_mm {
                s.push_str(&format!(", pitch {pitch} mm"));
            }
            if *exclude_from_oal {
                s.push_str(", excl OAL");
            }
            s
        }
        ResolvedDetail::Liner { od_mm, label } => {
            let mut s = format!("OD Ø{}", format_length(*od_mm, unit));
            if let Some(label) = label {
                s.push_str(&format!(", \"{}\"", truncate_str(label, 24)));
            }
            s
        }
    }
}

fn rows(layout: &ShaftLayout, unit: Unit) -> Vec<ResolvedRow> {
    layout
        .components
        .iter()
        .map(|c| {
            let source = match c.source {
                Source::Explicit => "explicit",
                Source::Auto => "auto",
                Source::Draft => "draft",
            };
            ResolvedRow {
                source: source.to_string(),
                kind: c.kind.to_string(),
                id: c
                    .id
                    .as_ref()
                    .map(format_short_id)
                    .unwrap_or_else(|| "-".to_string()),
                start: format_length(c.start_mm_physical, unit),
                end: format_length(c.end_mm_physical, unit),
                len: format_length(c.length_mm(), unit),
                detail: detail_text(c, unit),
            }
        })
        .collect()
}

pub fn run(args: ResolveArgs, file: &Path) -> Result<()> {
    let doc = load_document(file)?;
    let unit = doc.preferred_unit;
    let layout = resolve_layout(&doc.spec);
    let rows = rows(&layout, unit);

    match args.format {
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("No components to resolve");
            } else {
                let mut table = Table::new(&rows);
                table.with(Style::sharp());
                println!("{table}");
            }
            println!(
                "OAL window: {} .. {} {} (span {})",
                format_length(layout.window.measure_start_mm, unit),
                format_length(layout.window.measure_end_mm, unit),
                unit.suffix(),
                style(format_length(layout.window.span_mm(), unit)).bold(),
            );
        }
        OutputFormat::Tsv => {
            for r in &rows {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    r.source, r.kind, r.id, r.start, r.end, r.len, r.detail
                );
            }
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Output {
                measure_start: String,
                measure_end: String,
                components: Vec<ResolvedRow>,
            }
            let out = Output {
                measure_start: format_length(layout.window.measure_start_mm, unit),
                measure_end: format_length(layout.window.measure_end_mm, unit),
                components: rows,
            };
            println!("{}", serde_json::to_string_pretty(&out).into_diagnostic()?);
        }
    }
    Ok(())
}
