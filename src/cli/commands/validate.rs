//! `shaftkit validate` - structural validation report
//!
//! The geometry engine itself never rejects a spec (total functions,
//! defensive clamping); this command is the calling validation layer that
//! flags what the engine silently tolerates.

use clap::Args;
use console::style;
use miette::{miette, Result};
use std::path::Path;

use crate::cli::helpers::{format_short_id, load_document};
use crate::entities::segment::ComponentKind;
use crate::entities::shaft::Severity;
use crate::geometry::{resolve_layout, Source, EPS_MM};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Treat warnings as failures
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, file: &Path) -> Result<()> {
    let doc = load_document(file)?;
    let mut issues = doc.spec.validate();
    issues.sort_by_key(|i| match i.severity {
        Severity::Error => 0,
        Severity::Warning => 1,
    });

    let mut errors = 0usize;
    let mut warnings = 0usize;
    for issue in &issues {
        let tag = match issue.severity {
            Severity::Error => {
                errors += 1;
                style("error:").red().bold()
            }
            Severity::Warning => {
                warnings += 1;
                style("warning:").yellow().bold()
            }
        };
        match &issue.component {
            Some(id) => println!("{} {} ({})", tag, issue.message, format_short_id(id)),
            None => println!("{} {}", tag, issue.message),
        }
    }

    // Overlap between explicit components is engine-legal; surface it as a
    // drafting warning so colliding material gets seen. Liners legitimately
    // sleeve over other components and are skipped.
    let layout = resolve_layout(&doc.spec);
    let explicit: Vec<_> = layout
        .components
        .iter()
        .filter(|c| c.source == Source::Explicit && c.length_mm() > EPS_MM)
        .collect();
    for (i, a) in explicit.iter().enumerate() {
        for b in explicit.iter().skip(i + 1) {
            let overlaps = a.start_mm_physical < b.end_mm_physical - EPS_MM
                && b.start_mm_physical < a.end_mm_physical - EPS_MM;
            let sleeve = a.kind == ComponentKind::Liner || b.kind == ComponentKind::Liner;
            if overlaps && !sleeve {
                warnings += 1;
                println!(
                    "{} {} and {} overlap axially",
                    style("warning:").yellow().bold(),
                    a.id.as_ref().map(format_short_id).unwrap_or_default(),
                    b.id.as_ref().map(format_short_id).unwrap_or_default(),
                );
            }
        }
    }

    if errors == 0 && warnings == 0 {
        println!("{} document is valid", style("ok:").green().bold());
    } else {
        println!("{} error(s), {} warning(s)", errors, warnings);
    }

    if errors > 0 || (args.strict && warnings > 0) {
        return Err(miette!("validation failed"));
    }
    Ok(())
}
