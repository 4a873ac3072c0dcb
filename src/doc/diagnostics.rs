//! Document error diagnostics

use miette::Diagnostic;
use thiserror::Error;

/// Errors loading or saving a shaft document
#[derive(Debug, Error, Diagnostic)]
pub enum DocumentError {
    #[error("cannot read document '{path}'")]
    #[diagnostic(
        code(shaftkit::doc::read),
        help("check that the file exists and is readable; create one with `shaftkit new`")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write document '{path}'")]
    #[diagnostic(code(shaftkit::doc::write))]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("document '{path}' is not valid JSON")]
    #[diagnostic(
        code(shaftkit::doc::parse),
        help("the file may be corrupt or not a shaftkit document")
    )]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("document '{path}' has version {found}, but this build supports version {supported}")]
    #[diagnostic(
        code(shaftkit::doc::version),
        help("upgrade shaftkit to open newer documents")
    )]
    UnsupportedVersion {
        path: String,
        found: u32,
        supported: u32,
    },
}
