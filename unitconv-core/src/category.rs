//! Unit categories
//!
//! A category groups mutually convertible units. Every category except
//! temperature converts linearly through a base unit.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::ConvertError;

/// The closed set of supported unit categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Category {
    Length,
    Weight,
    Temperature,
    Volume,
    Time,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 5] = [
        Category::Length,
        Category::Weight,
        Category::Temperature,
        Category::Volume,
        Category::Time,
    ];

    /// Canonical lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Temperature => "temperature",
            Category::Volume => "volume",
            Category::Time => "time",
        }
    }

    /// Reference unit of the category (factor 1 for linear categories)
    pub fn base_unit(&self) -> &'static str {
        match self {
            Category::Length => "meter",
            Category::Weight => "gram",
            Category::Temperature => "celsius",
            Category::Volume => "liter",
            Category::Time => "second",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::Length => "Convert between different length units like meters, inches, and miles.",
            Category::Weight => "Convert weights like kilograms, pounds, and ounces.",
            Category::Temperature => "Convert temperatures between Celsius, Fahrenheit, and Kelvin.",
            Category::Volume => "Convert volume measurements like liters, gallons, and cups.",
            Category::Time => "Convert time units like seconds, minutes, and hours.",
        }
    }

    /// Whether units of this category relate by a pure scale factor.
    /// Temperature scales have different zero points.
    pub fn is_linear(&self) -> bool {
        !matches!(self, Category::Temperature)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| ConvertError::UnknownCategory(s.trim().to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = ConvertError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
