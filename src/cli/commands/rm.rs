//! `shaftkit rm` - remove a component

use clap::Args;
use console::style;
use miette::{miette, IntoDiagnostic, Result};
use std::path::Path;

use crate::cli::helpers::{format_short_id, load_document, resolve_component_ref};

#[derive(Args, Debug)]
pub struct RmArgs {
    /// Component to remove: full id or KIND@n (e.g. BODY@1, LNR@2)
    pub reference: String,
}

pub fn run(args: RmArgs, file: &Path) -> Result<()> {
    let doc = load_document(file)?;
    let id = resolve_component_ref(&doc.spec, &args.reference)?;
    let kind = doc.spec.kind_of(&id);

    let (spec, removed) = doc.spec.with_component_removed(&id);
    if !removed {
        return Err(miette!("no component matches '{}'", args.reference));
    }

    doc.with_spec(spec).save(file).into_diagnostic()?;
    println!(
        "{} {} {}",
        style("Removed").green().bold(),
        kind.map(|k| k.to_string()).unwrap_or_default(),
        format_short_id(&id),
    );
    Ok(())
}
