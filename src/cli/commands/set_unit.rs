//! `shaftkit set-unit` - change the preferred display unit

use clap::Args;
use console::style;
use miette::{miette, IntoDiagnostic, Result};
use std::path::Path;

use crate::cli::helpers::load_document;
use crate::core::units::Unit;

#[derive(Args, Debug)]
pub struct SetUnitArgs {
    /// Display unit
    #[arg(value_enum)]
    pub unit: Unit,

    /// Lock the unit so later edits cannot switch it (shop policy)
    #[arg(long)]
    pub lock: bool,
}

pub fn run(args: SetUnitArgs, file: &Path) -> Result<()> {
    let doc = load_document(file)?;

    if doc.unit_locked && doc.preferred_unit != args.unit {
        return Err(miette!(
            "display unit is locked to {}; unlock requires editing the document",
            doc.preferred_unit.suffix()
        ));
    }

    let mut next = doc.clone();
    next.preferred_unit = args.unit;
    next.unit_locked = next.unit_locked || args.lock;
    next.modified = chrono::Utc::now();
    next.save(file).into_diagnostic()?;

    println!(
        "{} display unit to {}{}",
        style("Set").green().bold(),
        args.unit.suffix(),
        if next.unit_locked { " (locked)" } else { "" },
    );
    Ok(())
}
