//! Document persistence - the versioned JSON envelope around a ShaftSpec

pub mod diagnostics;
pub mod store;

pub use diagnostics::DocumentError;
pub use store::{ShaftDocument, DOCUMENT_VERSION};
