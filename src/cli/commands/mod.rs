//! Command implementations

pub mod add;
pub mod completions;
pub mod draw;
pub mod export;
pub mod list;
pub mod new;
pub mod resolve;
pub mod rm;
pub mod set_length;
pub mod set_unit;
pub mod validate;
