//! `shaftkit set-length` - update the overall physical length

use clap::Args;
use console::style;
use miette::{miette, IntoDiagnostic, Result};
use std::path::Path;

use crate::cli::helpers::load_document;
use crate::core::units::format_length;

#[derive(Args, Debug)]
pub struct SetLengthArgs {
    /// New overall length (in the document's preferred unit)
    pub length: f64,
}

pub fn run(args: SetLengthArgs, file: &Path) -> Result<()> {
    let doc = load_document(file)?;
    let unit = doc.preferred_unit;
    let length_mm = unit.to_mm(args.length);
    if length_mm < 0.0 {
        return Err(miette!("overall length cannot be negative"));
    }

    let next = doc.with_spec(doc.spec.with_overall_length(length_mm));
    next.save(file).into_diagnostic()?;

    println!(
        "{} overall length to {} {}",
        style("Set").green().bold(),
        format_length(length_mm, unit),
        unit.suffix(),
    );
    Ok(())
}
