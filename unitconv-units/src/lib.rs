//! unitconv Units - Unit table and conversion engine
//!
//! Converts values between units of one category and explains the formula.
//!
//! Categories:
//! - Length (meter, kilometer, inch, mile, etc.)
//! - Weight (gram, kilogram, ounce, pound, etc.)
//! - Temperature (celsius, fahrenheit, kelvin)
//! - Volume (liter, gallon, cup, fluid_ounce, etc.)
//! - Time (second, hour, week, year, etc.)
//!
//! Linear categories convert through their base unit. Temperature uses a
//! fixed affine formula per directed pair of scales.

mod unit;
mod units;
mod convert;
mod temperature;
mod parse;

pub use unit::{Scale, Unit};
pub use units::{factor, UnitRegistry, UNITS};
pub use convert::{convert, convert_request};
pub use temperature::{convert_temperature, TemperatureScale};
pub use parse::{normalize_unit_name, parse_conversion};
