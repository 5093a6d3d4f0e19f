//! Temperature conversion
//!
//! The three scales have different zero points, so no single factor relates
//! them. Each of the six directed pairs has its own affine formula.

use serde::Serialize;
use tracing::debug;
use unitconv_core::{format_fixed, format_number, Category, Conversion, ConvertError};
use crate::convert::{check_finite, check_result, identity};
use crate::units::UNITS;
use crate::Scale;

/// A temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureScale {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureScale {
    pub const ALL: [TemperatureScale; 3] = [
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
        TemperatureScale::Kelvin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "celsius",
            TemperatureScale::Fahrenheit => "fahrenheit",
            TemperatureScale::Kelvin => "kelvin",
        }
    }

    fn lookup(name: &str) -> Option<TemperatureScale> {
        match UNITS.get(Category::Temperature, name)?.scale {
            Scale::Affine(scale) => Some(scale),
            Scale::Linear(_) => None,
        }
    }
}

/// Convert a temperature between celsius, fahrenheit and kelvin
pub fn convert_temperature(value: f64, from_unit: &str, to_unit: &str) -> Result<Conversion, ConvertError> {
    check_finite(value)?;

    let (from, to) = match (TemperatureScale::lookup(from_unit), TemperatureScale::lookup(to_unit)) {
        (Some(from), Some(to)) => (from, to),
        _ => return Err(ConvertError::unsupported(from_unit.trim(), to_unit.trim())),
    };

    if from == to {
        return Ok(identity(value, from.name(), to.name()));
    }

    use TemperatureScale::*;
    let v = format_number(value);
    let (result, formula) = match (from, to) {
        (Celsius, Fahrenheit) => (value * 9.0 / 5.0 + 32.0, format!("({} × 9/5) + 32", v)),
        (Celsius, Kelvin) => (value + 273.15, format!("{} + 273.15", v)),
        (Fahrenheit, Celsius) => ((value - 32.0) * 5.0 / 9.0, format!("({} - 32) × 5/9", v)),
        (Fahrenheit, Kelvin) => ((value - 32.0) * 5.0 / 9.0 + 273.15, format!("(({} - 32) × 5/9) + 273.15", v)),
        (Kelvin, Celsius) => (value - 273.15, format!("{} - 273.15", v)),
        (Kelvin, Fahrenheit) => ((value - 273.15) * 9.0 / 5.0 + 32.0, format!("(({} - 273.15) × 9/5) + 32", v)),
        (from, to) => return Err(ConvertError::unsupported(from.name(), to.name())),
    };

    check_result(result)?;

    debug!(value, from = from.name(), to = to.name(), result, "temperature conversion");

    let explanation = format!("{} = {} {}", formula, format_fixed(result), to.name());
    Ok(Conversion::new(result, to.name(), explanation))
}
