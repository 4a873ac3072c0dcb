//! `shaftkit export` - dimensioned drawing export

use clap::{Args, Subcommand};
use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::{Path, PathBuf};

use crate::cli::helpers::load_document;
use crate::cli::svg::render_svg;
use crate::geometry::resolve_layout;

#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export an SVG drawing
    Svg(SvgArgs),
}

#[derive(Args, Debug)]
pub struct SvgArgs {
    /// Output path (defaults to the document name with an .svg extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(cmd: ExportCommands, file: &Path) -> Result<()> {
    match cmd {
        ExportCommands::Svg(args) => {
            let doc = load_document(file)?;
            let layout = resolve_layout(&doc.spec);
            let svg = render_svg(&layout, doc.preferred_unit);

            let output = args
                .output
                .unwrap_or_else(|| file.with_extension("svg"));
            std::fs::write(&output, svg).into_diagnostic()?;

            println!(
                "{} {} ({} component(s))",
                style("Exported").green().bold(),
                output.display(),
                layout.components.len(),
            );
            Ok(())
        }
    }
}
