//! Conversion requests and results

use serde::{Deserialize, Serialize};
use crate::Category;

/// Decimal places used when a result is shown to a user
pub const DISPLAY_PRECISION: usize = 2;

/// A single conversion to perform. Both units must belong to `category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub value: f64,
    pub category: Category,
    pub from_unit: String,
    pub to_unit: String,
}

impl ConversionRequest {
    pub fn new(value: f64, category: Category, from_unit: impl Into<String>, to_unit: impl Into<String>) -> Self {
        Self {
            value,
            category,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }
}

/// Outcome of a conversion: the full-precision value and the formula used
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// Converted value, not rounded
    pub value: f64,
    /// Canonical name of the target unit
    pub unit: String,
    /// Human-readable formula
    pub explanation: String,
}

impl Conversion {
    pub fn new(value: f64, unit: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
            explanation: explanation.into(),
        }
    }

    /// Result rounded for display, e.g. "0.00 kilometer"
    pub fn display(&self) -> String {
        format!("{} {}", format_fixed(self.value), self.unit)
    }

    /// Split into `(result, explanation)`
    pub fn into_parts(self) -> (f64, String) {
        (self.value, self.explanation)
    }
}

/// Format with the fixed display precision
pub fn format_fixed(value: f64) -> String {
    format!("{:.*}", DISPLAY_PRECISION, value)
}

/// Magnitudes at or above this switch to exponent form
const EXPONENT_ABOVE: f64 = 1e16;
/// Nonzero magnitudes below this switch to exponent form
const EXPONENT_BELOW: f64 = 1e-6;

/// Shortest representation that reads back to the same value ("1", "0.0254").
/// Very large or very small magnitudes use exponent form ("1e308").
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= EXPONENT_ABOVE || (magnitude > 0.0 && magnitude < EXPONENT_BELOW) {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}
