//! Core module - identity and unit utilities

pub mod identity;
pub mod units;

pub use identity::{EntityId, EntityPrefix, IdParseError};
pub use units::{format_length, Unit, MM_PER_INCH};
