//! Unit name parsing - normalize names and split "from->to" strings

use unitconv_core::{Category, ConvertError};
use crate::Unit;
use crate::units::UNITS;

/// Canonical lookup key: trimmed, lowercase, spaces and dashes as underscores
pub fn normalize_unit_name(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Parse a conversion string like "km->mi" or "celsius to kelvin" within a category
pub fn parse_conversion(category: Category, s: &str) -> Result<(&'static Unit, &'static Unit), ConvertError> {
    let (from, to) = split_conversion(s)
        .ok_or_else(|| ConvertError::unknown_unit(category, s.trim()))?;

    let from_unit = UNITS.resolve(category, from)?;
    let to_unit = UNITS.resolve(category, to)?;
    Ok((from_unit, to_unit))
}

fn split_conversion(s: &str) -> Option<(&str, &str)> {
    for sep in ["->", "→", " to ", " in "] {
        if let Some((from, to)) = s.split_once(sep) {
            if !from.trim().is_empty() && !to.trim().is_empty() {
                return Some((from, to));
            }
        }
    }
    None
}
