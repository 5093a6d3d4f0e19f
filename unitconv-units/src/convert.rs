//! Linear unit conversion and request dispatch

use tracing::debug;
use unitconv_core::{format_fixed, format_number, Category, Conversion, ConversionRequest, ConvertError};
use crate::temperature::convert_temperature;
use crate::units::UNITS;

/// Convert `value` between two units of a linear category.
///
/// Goes through the base unit: `value * factor(from) / factor(to)`.
/// The returned value keeps full precision; only the explanation is rounded.
pub fn convert(value: f64, category: Category, from_unit: &str, to_unit: &str) -> Result<Conversion, ConvertError> {
    if !category.is_linear() {
        return Err(ConvertError::unsupported(from_unit.trim(), to_unit.trim()));
    }
    check_finite(value)?;

    let from = UNITS.resolve(category, from_unit)?;
    let to = UNITS.resolve(category, to_unit)?;

    if from.name == to.name {
        return Ok(identity(value, from.name, to.name));
    }

    let factor_from = UNITS.factor(category, from.name)?;
    let factor_to = UNITS.factor(category, to.name)?;
    let result = value * factor_from / factor_to;
    check_result(result)?;

    debug!(value, %category, from = from.name, to = to.name, result, "linear conversion");

    let explanation = format!(
        "{} × ({} ÷ {}) = {} {}",
        format_number(value),
        format_number(factor_from),
        format_number(factor_to),
        format_fixed(result),
        to.name,
    );
    Ok(Conversion::new(result, to.name, explanation))
}

/// Run a request through the conversion rule of its category
pub fn convert_request(request: &ConversionRequest) -> Result<Conversion, ConvertError> {
    match request.category {
        Category::Temperature => convert_temperature(request.value, &request.from_unit, &request.to_unit),
        category => convert(request.value, category, &request.from_unit, &request.to_unit),
    }
}

pub(crate) fn identity(value: f64, from: &str, to: &str) -> Conversion {
    let v = format_number(value);
    Conversion::new(value, to, format!("{} {} is the same as {} {}.", v, from, v, to))
}

pub(crate) fn check_finite(value: f64) -> Result<(), ConvertError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConvertError::InvalidValue(format_number(value)))
    }
}

/// A finite input can still overflow once scaled
pub(crate) fn check_result(result: f64) -> Result<(), ConvertError> {
    if result.is_finite() {
        Ok(())
    } else {
        Err(ConvertError::InvalidValue("result out of range".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    fn linear_categories() -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(|c| c.is_linear())
    }

    #[test]
    fn test_meter_to_kilometer() {
        let c = convert(1.0, Category::Length, "meter", "kilometer").unwrap();
        assert!(approx_eq(c.value, 0.001));
        assert_eq!(c.explanation, "1 × (1 ÷ 1000) = 0.00 kilometer");
    }

    #[test]
    fn test_kilogram_to_pound() {
        let c = convert(5.0, Category::Weight, "kilogram", "pound").unwrap();
        assert!(approx_eq(c.value, 5.0 * 1000.0 / 453.592));
        assert_eq!(c.display(), "11.02 pound");
        assert_eq!(c.explanation, "5 × (1000 ÷ 453.592) = 11.02 pound");
    }

    #[test]
    fn test_gallon_to_liter() {
        let c = convert(2.0, Category::Volume, "gallon", "liter").unwrap();
        assert!(approx_eq(c.value, 7.57082));
        assert_eq!(c.display(), "7.57 liter");
    }

    #[test]
    fn test_year_to_day() {
        let c = convert(1.0, Category::Time, "year", "day").unwrap();
        assert!(approx_eq(c.value, 31540000.0 / 86400.0));
        assert_eq!(c.display(), "365.05 day");
        assert_eq!(c.explanation, "1 × (31540000 ÷ 86400) = 365.05 day");
    }

    #[test]
    fn test_identity_for_every_unit() {
        for category in linear_categories() {
            for unit in UNITS.units(category) {
                let c = convert(-12.75, category, unit, unit).unwrap();
                assert_eq!(c.value, -12.75);
                assert_eq!(c.explanation, format!("-12.75 {} is the same as -12.75 {}.", unit, unit));
            }
        }
    }

    #[test]
    fn test_identity_through_alias() {
        let c = convert(3.0, Category::Length, "m", "meter").unwrap();
        assert_eq!(c.value, 3.0);
        assert_eq!(c.explanation, "3 meter is the same as 3 meter.");
    }

    #[test]
    fn test_round_trip_all_pairs() {
        for category in linear_categories() {
            let units = UNITS.units(category);
            for a in &units {
                for b in &units {
                    let there = convert(42.5, category, a, b).unwrap();
                    let back = convert(there.value, category, b, a).unwrap();
                    assert!(approx_eq(back.value, 42.5), "{}: {} -> {} -> {}", category, a, b, a);
                }
            }
        }
    }

    #[test]
    fn test_transitivity_all_triples() {
        for category in linear_categories() {
            let units = UNITS.units(category);
            for a in &units {
                for b in &units {
                    for c in &units {
                        let ab = convert(7.0, category, a, b).unwrap();
                        let abc = convert(ab.value, category, b, c).unwrap();
                        let ac = convert(7.0, category, a, c).unwrap();
                        assert!(approx_eq(abc.value, ac.value), "{}: {} -> {} -> {}", category, a, b, c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_unknown_unit() {
        let err = convert(1.0, Category::Length, "furlong", "meter").unwrap_err();
        assert_eq!(err, ConvertError::unknown_unit(Category::Length, "furlong"));

        // units are checked before the identity shortcut
        let err = convert(1.0, Category::Length, "furlong", "furlong").unwrap_err();
        assert!(matches!(err, ConvertError::UnknownUnit { .. }));
    }

    #[test]
    fn test_cross_category_unit_rejected() {
        let err = convert(1.0, Category::Weight, "meter", "gram").unwrap_err();
        assert_eq!(err, ConvertError::unknown_unit(Category::Weight, "meter"));
    }

    #[test]
    fn test_temperature_is_not_linear() {
        let err = convert(1.0, Category::Temperature, "celsius", "kelvin").unwrap_err();
        assert_eq!(err, ConvertError::unsupported("celsius", "kelvin"));
    }

    #[test]
    fn test_rejects_infinite() {
        let err = convert(f64::INFINITY, Category::Length, "meter", "foot").unwrap_err();
        assert_eq!(err, ConvertError::InvalidValue("inf".to_string()));
    }

    #[test]
    fn test_overflowing_result_rejected() {
        let err = convert(1e308, Category::Weight, "ton", "milligram").unwrap_err();
        assert_eq!(err, ConvertError::InvalidValue("result out of range".to_string()));
    }

    #[test]
    fn test_large_finite_result_uses_exponent_form() {
        let c = convert(1e300, Category::Length, "kilometer", "meter").unwrap();
        assert!(approx_eq(c.value, 1e303));
        assert!(c.explanation.starts_with("1e300 × (1000 ÷ 1) = "));
    }

    #[test]
    fn test_request_dispatch() {
        let req = ConversionRequest::new(100.0, Category::Temperature, "celsius", "kelvin");
        assert!(approx_eq(convert_request(&req).unwrap().value, 373.15));

        let req = ConversionRequest::new(2.0, Category::Volume, "gallon", "liter");
        assert!(approx_eq(convert_request(&req).unwrap().value, 7.57082));
    }
}
