//! CLI module - argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod helpers;
pub mod svg;
pub mod viz;

pub use args::{Cli, Commands, OutputFormat};
