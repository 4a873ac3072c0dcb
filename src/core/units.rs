//! Display units - mm/inch conversion and formatting for the CLI surface
//!
//! The geometry engine is millimeter-only; units exist purely at the
//! input/output boundary. Documents remember the user's preferred unit.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const MM_PER_INCH: f64 = 25.4;

/// Display unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Unit {
    #[default]
    Mm,
    #[value(name = "in")]
    Inch,
}

impl Unit {
    /// Convert a value entered in this unit to millimeters
    pub fn to_mm(&self, value: f64) -> f64 {
        match self {
            Unit::Mm => value,
            Unit::Inch => value * MM_PER_INCH,
        }
    }

    /// Convert a millimeter value to this unit for display
    pub fn from_mm(&self, value_mm: f64) -> f64 {
        match self {
            Unit::Mm => value_mm,
            Unit::Inch => value_mm / MM_PER_INCH,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Mm => "mm",
            Unit::Inch => "in",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

/// Round a value to a sensible number of decimals for table output
///
/// Millimeter values show up to 2 decimals, inch values up to 4 (shops quote
/// inches in tenths/thousandths); trailing zeros are trimmed.
pub fn format_length(value_mm: f64, unit: Unit) -> String {
    let value = unit.from_mm(value_mm);
    let decimals = match unit {
        Unit::Mm => 2,
        Unit::Inch => 4,
    };
    let s = format!("{:.*}", decimals, value);
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
