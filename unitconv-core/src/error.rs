//! Structured conversion errors
//!
//! Every error here is a contract violation between the caller and the
//! unit data, never a transient condition. Callers report them and move on.

use serde::Serialize;
use thiserror::Error;
use crate::Category;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNSUPPORTED_CONVERSION: &str = "UNSUPPORTED_CONVERSION";
    pub const INVALID_VALUE: &str = "INVALID_VALUE";
}

/// Errors raised by the unit table and the conversion engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown unit '{unit}' for category {category}")]
    UnknownUnit { category: Category, unit: String },

    #[error("unsupported conversion: {from} to {to}")]
    UnsupportedConversion { from: String, to: String },

    #[error("invalid value: {0}")]
    InvalidValue(String),
}

impl ConvertError {
    pub fn unknown_unit(category: Category, unit: impl Into<String>) -> Self {
        Self::UnknownUnit { category, unit: unit.into() }
    }

    pub fn unsupported(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::UnsupportedConversion { from: from.into(), to: to.into() }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::UnknownCategory(_) => codes::UNKNOWN_CATEGORY,
            ConvertError::UnknownUnit { .. } => codes::UNKNOWN_UNIT,
            ConvertError::UnsupportedConversion { .. } => codes::UNSUPPORTED_CONVERSION,
            ConvertError::InvalidValue(_) => codes::INVALID_VALUE,
        }
    }

    /// Hint for fixing the request
    pub fn suggestion(&self) -> String {
        match self {
            ConvertError::UnknownCategory(_) => {
                let names: Vec<_> = Category::ALL.iter().map(|c| c.name()).collect();
                format!("Use one of: {}", names.join(", "))
            }
            ConvertError::UnknownUnit { category, .. } => {
                format!("Use list_units(\"{}\") for valid units", category)
            }
            ConvertError::UnsupportedConversion { .. } => {
                "Temperature converts between celsius, fahrenheit and kelvin only; other categories use linear factors".to_string()
            }
            ConvertError::InvalidValue(_) => "Provide a finite number".to_string(),
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code(),
            message: self.to_string(),
            suggestion: self.suggestion(),
        }
    }
}

/// Serializable form of a `ConvertError`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub code: &'static str,
    pub message: String,
    pub suggestion: String,
}
