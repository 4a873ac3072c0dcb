//! `shaftkit new` - create a new shaft document

use clap::Args;
use console::style;
use miette::{miette, IntoDiagnostic, Result};
use std::path::Path;

use crate::core::units::Unit;
use crate::doc::ShaftDocument;

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Overall physical length, AFT to FWD end (in the chosen unit)
    #[arg(long = "overall-length", default_value_t = 0.0)]
    pub overall_length: f64,

    /// Preferred display unit
    #[arg(long, value_enum, default_value_t = Unit::Mm)]
    pub unit: Unit,

    /// Overwrite an existing document
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: NewArgs, file: &Path) -> Result<()> {
    if file.exists() && !args.force {
        return Err(miette!(
            "'{}' already exists (use --force to overwrite)",
            file.display()
        ));
    }

    let overall_mm = args.unit.to_mm(args.overall_length);
    if overall_mm < 0.0 {
        return Err(miette!("overall length cannot be negative"));
    }

    let doc = ShaftDocument::new(overall_mm, args.unit);
    doc.save(file).into_diagnostic()?;

    println!(
        "{} {} (overall length {} {})",
        style("Created").green().bold(),
        file.display(),
        args.overall_length,
        args.unit.suffix(),
    );
    Ok(())
}
