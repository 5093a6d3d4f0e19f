//! Unit definitions organized by category
//!
//! Linear factors are relative to the category base unit:
//! meter, gram, liter, second. Temperature scales carry no factor.

use std::collections::HashMap;
use std::sync::LazyLock;
use unitconv_core::{Category, ConvertError};
use crate::{Unit, TemperatureScale};
use crate::parse::normalize_unit_name;

/// Global unit registry, built once and never mutated
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::new);

/// Registry of all known units
pub struct UnitRegistry {
    units: HashMap<Category, Vec<Unit>>,
    aliases: HashMap<(Category, String), &'static str>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
            aliases: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Get a unit of `category` by canonical name or alias
    pub fn get(&self, category: Category, name: &str) -> Option<&Unit> {
        let key = normalize_unit_name(name);
        let units = self.units.get(&category)?;

        // Try direct lookup first
        if let Some(unit) = units.iter().find(|u| u.name == key) {
            return Some(unit);
        }
        // Try alias lookup
        let canonical = self.aliases.get(&(category, key))?;
        units.iter().find(|u| u.name == *canonical)
    }

    /// Like `get`, failing with `UnknownUnit`
    pub fn resolve(&self, category: Category, name: &str) -> Result<&Unit, ConvertError> {
        self.get(category, name)
            .ok_or_else(|| ConvertError::unknown_unit(category, name.trim()))
    }

    /// Scale factor of a unit relative to its category base unit
    pub fn factor(&self, category: Category, name: &str) -> Result<f64, ConvertError> {
        let unit = self.resolve(category, name)?;
        unit.factor()
            .ok_or_else(|| ConvertError::unsupported(unit.name, category.base_unit()))
    }

    /// Unit names of a category in registration order, base unit first
    pub fn units(&self, category: Category) -> Vec<&'static str> {
        self.units.get(&category)
            .map(|units| units.iter().map(|u| u.name).collect())
            .unwrap_or_default()
    }

    /// All units of a category
    pub fn by_category(&self, category: Category) -> &[Unit] {
        self.units.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    fn register(&mut self, unit: Unit) {
        self.units.entry(unit.category).or_default().push(unit);
    }

    fn alias(&mut self, category: Category, alias: &str, name: &'static str) {
        self.aliases.insert((category, normalize_unit_name(alias)), name);
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_weight_units();
        self.register_temperature_units();
        self.register_volume_units();
        self.register_time_units();
    }

    fn register_length_units(&mut self) {
        use Category::Length;

        self.register(Unit::linear("meter", Length, 1.0));
        self.register(Unit::linear("kilometer", Length, 1000.0));
        self.register(Unit::linear("centimeter", Length, 0.01));
        self.register(Unit::linear("millimeter", Length, 0.001));
        self.register(Unit::linear("inch", Length, 0.0254));
        self.register(Unit::linear("foot", Length, 0.3048));
        self.register(Unit::linear("yard", Length, 0.9144));
        self.register(Unit::linear("mile", Length, 1609.34));

        // Aliases
        self.alias(Length, "m", "meter");
        self.alias(Length, "meters", "meter");
        self.alias(Length, "metre", "meter");
        self.alias(Length, "metres", "meter");
        self.alias(Length, "km", "kilometer");
        self.alias(Length, "kilometers", "kilometer");
        self.alias(Length, "kilometre", "kilometer");
        self.alias(Length, "kilometres", "kilometer");
        self.alias(Length, "cm", "centimeter");
        self.alias(Length, "centimeters", "centimeter");
        self.alias(Length, "mm", "millimeter");
        self.alias(Length, "millimeters", "millimeter");
        self.alias(Length, "in", "inch");
        self.alias(Length, "inches", "inch");
        self.alias(Length, "ft", "foot");
        self.alias(Length, "feet", "foot");
        self.alias(Length, "yd", "yard");
        self.alias(Length, "yards", "yard");
        self.alias(Length, "mi", "mile");
        self.alias(Length, "miles", "mile");
    }

    fn register_weight_units(&mut self) {
        use Category::Weight;

        self.register(Unit::linear("gram", Weight, 1.0));
        self.register(Unit::linear("kilogram", Weight, 1000.0));
        self.register(Unit::linear("milligram", Weight, 0.001));
        self.register(Unit::linear("ounce", Weight, 28.3495));
        self.register(Unit::linear("pound", Weight, 453.592));
        self.register(Unit::linear("ton", Weight, 1000000.0));

        // Aliases
        self.alias(Weight, "g", "gram");
        self.alias(Weight, "grams", "gram");
        self.alias(Weight, "kg", "kilogram");
        self.alias(Weight, "kilograms", "kilogram");
        self.alias(Weight, "mg", "milligram");
        self.alias(Weight, "milligrams", "milligram");
        self.alias(Weight, "oz", "ounce");
        self.alias(Weight, "ounces", "ounce");
        self.alias(Weight, "lb", "pound");
        self.alias(Weight, "lbs", "pound");
        self.alias(Weight, "pounds", "pound");
        self.alias(Weight, "t", "ton");
        self.alias(Weight, "tons", "ton");
        self.alias(Weight, "tonne", "ton");
        self.alias(Weight, "tonnes", "ton");
    }

    fn register_temperature_units(&mut self) {
        use Category::Temperature;

        for scale in TemperatureScale::ALL {
            self.register(Unit::affine(scale.name(), scale));
        }

        // Aliases
        self.alias(Temperature, "c", "celsius");
        self.alias(Temperature, "°c", "celsius");
        self.alias(Temperature, "centigrade", "celsius");
        self.alias(Temperature, "f", "fahrenheit");
        self.alias(Temperature, "°f", "fahrenheit");
        self.alias(Temperature, "k", "kelvin");
    }

    fn register_volume_units(&mut self) {
        use Category::Volume;

        self.register(Unit::linear("liter", Volume, 1.0));
        self.register(Unit::linear("milliliter", Volume, 0.001));
        self.register(Unit::linear("gallon", Volume, 3.78541));
        self.register(Unit::linear("quart", Volume, 0.946353));
        self.register(Unit::linear("pint", Volume, 0.473176));
        self.register(Unit::linear("cup", Volume, 0.24));
        self.register(Unit::linear("fluid_ounce", Volume, 0.0295735));

        // Aliases
        self.alias(Volume, "l", "liter");
        self.alias(Volume, "liters", "liter");
        self.alias(Volume, "litre", "liter");
        self.alias(Volume, "litres", "liter");
        self.alias(Volume, "ml", "milliliter");
        self.alias(Volume, "milliliters", "milliliter");
        self.alias(Volume, "gal", "gallon");
        self.alias(Volume, "gallons", "gallon");
        self.alias(Volume, "qt", "quart");
        self.alias(Volume, "quarts", "quart");
        self.alias(Volume, "pt", "pint");
        self.alias(Volume, "pints", "pint");
        self.alias(Volume, "cups", "cup");
        self.alias(Volume, "fl_oz", "fluid_ounce");
        self.alias(Volume, "floz", "fluid_ounce");
        self.alias(Volume, "fluid_ounces", "fluid_ounce");
    }

    fn register_time_units(&mut self) {
        use Category::Time;

        self.register(Unit::linear("second", Time, 1.0));
        self.register(Unit::linear("minute", Time, 60.0));
        self.register(Unit::linear("hour", Time, 3600.0));
        self.register(Unit::linear("day", Time, 86400.0));
        self.register(Unit::linear("week", Time, 604800.0));
        self.register(Unit::linear("month", Time, 2628000.0)); // ~30.42 days
        self.register(Unit::linear("year", Time, 31540000.0)); // ~365.05 days

        // Aliases
        self.alias(Time, "s", "second");
        self.alias(Time, "sec", "second");
        self.alias(Time, "seconds", "second");
        self.alias(Time, "min", "minute");
        self.alias(Time, "minutes", "minute");
        self.alias(Time, "h", "hour");
        self.alias(Time, "hr", "hour");
        self.alias(Time, "hours", "hour");
        self.alias(Time, "d", "day");
        self.alias(Time, "days", "day");
        self.alias(Time, "wk", "week");
        self.alias(Time, "weeks", "week");
        self.alias(Time, "mo", "month");
        self.alias(Time, "months", "month");
        self.alias(Time, "yr", "year");
        self.alias(Time, "years", "year");
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Scale factor of `unit` within `category`
pub fn factor(category: Category, unit: &str) -> Result<f64, ConvertError> {
    UNITS.factor(category, unit)
}
