//! Unit representation with its scale

use std::fmt;
use serde::Serialize;
use unitconv_core::Category;
use crate::TemperatureScale;

/// How a unit relates to the rest of its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Scale {
    /// Magnitude relative to the category's base unit (value_base = value * factor)
    Linear(f64),
    /// Temperature scale with its own zero point
    Affine(TemperatureScale),
}

/// A named unit belonging to exactly one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    /// Canonical name (e.g., "meter", "fluid_ounce")
    pub name: &'static str,
    pub category: Category,
    pub scale: Scale,
}

impl Unit {
    /// Create a unit with a linear scale factor
    pub const fn linear(name: &'static str, category: Category, factor: f64) -> Self {
        Unit { name, category, scale: Scale::Linear(factor) }
    }

    /// Create a temperature unit
    pub const fn affine(name: &'static str, scale: TemperatureScale) -> Self {
        Unit { name, category: Category::Temperature, scale: Scale::Affine(scale) }
    }

    /// Scale factor, if this unit has one
    pub fn factor(&self) -> Option<f64> {
        match self.scale {
            Scale::Linear(f) => Some(f),
            Scale::Affine(_) => None,
        }
    }

    /// Check if this is the base unit of its category
    pub fn is_base(&self) -> bool {
        self.name == self.category.base_unit()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
