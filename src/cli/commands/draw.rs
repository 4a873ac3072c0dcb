//! `shaftkit draw` - ASCII schematic in the terminal

use clap::Args;
use miette::Result;
use std::path::Path;

use crate::cli::helpers::load_document;
use crate::cli::viz;
use crate::geometry::resolve_layout;

#[derive(Args, Debug)]
pub struct DrawArgs {}

pub fn run(_args: DrawArgs, file: &Path) -> Result<()> {
    let doc = load_document(file)?;
    let layout = resolve_layout(&doc.spec);
    println!("{}", viz::render_schematic(&layout, doc.preferred_unit));
    Ok(())
}
