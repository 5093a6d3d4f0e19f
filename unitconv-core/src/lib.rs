//! unitconv Core - Fundamental types
//!
//! This crate provides the core types shared by the unitconv crates:
//! - `Category`: The closed set of unit categories
//! - `ConversionRequest` / `Conversion`: One request in, one result out
//! - `ConvertError`: Structured errors with machine-readable codes

mod category;
mod conversion;
mod error;

pub use category::Category;
pub use conversion::{Conversion, ConversionRequest, format_fixed, format_number, DISPLAY_PRECISION};
pub use error::{ConvertError, ErrorReport, codes};
