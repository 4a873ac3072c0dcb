//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands;

/// Shaftkit - propeller-shaft schematic drafting from the command line
#[derive(Parser, Debug)]
#[command(name = "shaftkit", version, about)]
pub struct Cli {
    /// Shaft document to operate on
    #[arg(
        short = 'f',
        long = "file",
        global = true,
        env = "SHAFTKIT_FILE",
        default_value = "shaft.json"
    )]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new shaft document
    New(commands::new::NewArgs),

    /// Set the overall physical length
    SetLength(commands::set_length::SetLengthArgs),

    /// Change the preferred display unit
    SetUnit(commands::set_unit::SetUnitArgs),

    /// Add a component
    #[command(subcommand)]
    Add(commands::add::AddCommands),

    /// Remove a component by id or KIND@n reference
    Rm(commands::rm::RmArgs),

    /// List explicit components
    List(commands::list::ListArgs),

    /// Show the fully resolved layout (explicit components + auto fillers)
    Resolve(commands::resolve::ResolveArgs),

    /// Draw an ASCII schematic with stacked dimension rails
    Draw(commands::draw::DrawArgs),

    /// Export a dimensioned drawing
    #[command(subcommand)]
    Export(commands::export::ExportCommands),

    /// Validate the document and report findings
    Validate(commands::validate::ValidateArgs),

    /// Generate shell completions
    Completions(commands::completions::CompletionsArgs),
}

/// Output format for list-style commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[derive(Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Tsv,
    Json,
}
