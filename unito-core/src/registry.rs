//! Unit tables - the closed per-category unit sets
//!
//! All tables are built once at first use and never mutated. Scale factors
//! are relative to each category's base unit (the unit whose factor is 1);
//! which unit is the base is invisible to callers.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::{Category, Unit};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(|| UnitRegistry::new());

/// Registry of every unit offered per category
pub struct UnitRegistry {
    units: HashMap<Category, Vec<Unit>>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        let mut registry = UnitRegistry {
            units: HashMap::new(),
        };
        registry.register_all_units();
        registry
    }

    /// Ordered unit list for a category, as shown in selection widgets
    pub fn units(&self, category: Category) -> &[Unit] {
        self.units.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ordered unit names for a category
    pub fn names(&self, category: Category) -> Vec<&'static str> {
        self.units(category).iter().map(|u| u.name).collect()
    }

    /// Case-sensitive membership lookup
    pub fn get(&self, category: Category, name: &str) -> Option<&Unit> {
        self.units(category).iter().find(|u| u.name == name)
    }

    /// Linear scale factor relative to the category base unit
    pub fn scale(&self, category: Category, name: &str) -> Option<f64> {
        self.get(category, name).and_then(|u| u.scale)
    }

    fn register(&mut self, category: Category, units: Vec<Unit>) {
        self.units.insert(category, units);
    }

    fn register_all_units(&mut self) {
        self.register_length_units();
        self.register_mass_units();
        self.register_temperature_units();
        self.register_area_units();
        self.register_speed_units();
        self.register_time_units();
        self.register_volume_units();
        self.register_pressure_units();
        self.register_energy_units();
        self.register_frequency_units();
        self.register_fuel_economy_units();
        self.register_plane_angle_units();
    }

    fn register_length_units(&mut self) {
        self.register(
            Category::Length,
            vec![
                Unit::linear("Meters", 1.0),
                Unit::linear("Kilometers", 1000.0),
                Unit::linear("Miles", 1609.34),
                Unit::linear("Feet", 0.3048),
                Unit::linear("Inches", 0.0254),
            ],
        );
    }

    fn register_mass_units(&mut self) {
        self.register(
            Category::Mass,
            vec![
                Unit::linear("Kilograms", 1.0),
                Unit::linear("Grams", 0.001),
                Unit::linear("Pounds", 0.453592),
                Unit::linear("Ounces", 0.0283495),
            ],
        );
    }

    fn register_temperature_units(&mut self) {
        // Non-proportional scales; conversions live in the engine
        self.register(
            Category::Temperature,
            vec![
                Unit::formula("Celsius"),
                Unit::formula("Fahrenheit"),
                Unit::formula("Kelvin"),
            ],
        );
    }

    fn register_area_units(&mut self) {
        self.register(
            Category::Area,
            vec![
                Unit::linear("Square Meters", 1.0),
                Unit::linear("Square Kilometers", 1_000_000.0),
                Unit::linear("Square Miles", 2_589_988.11),
                Unit::linear("Hectares", 10_000.0),
                Unit::linear("Acres", 4046.86),
            ],
        );
    }

    fn register_speed_units(&mut self) {
        self.register(
            Category::Speed,
            vec![
                Unit::linear("Meters per second", 1.0),
                Unit::linear("Kilometers per hour", 0.277778),
                Unit::linear("Miles per hour", 0.44704),
                Unit::linear("Knots", 0.514444),
            ],
        );
    }

    fn register_time_units(&mut self) {
        self.register(
            Category::Time,
            vec![
                Unit::linear("Seconds", 1.0),
                Unit::linear("Minutes", 60.0),
                Unit::linear("Hours", 3600.0),
                Unit::linear("Days", 86400.0),
            ],
        );
    }

    fn register_volume_units(&mut self) {
        self.register(
            Category::Volume,
            vec![
                Unit::linear("Liters", 1.0),
                Unit::linear("Milliliters", 0.001),
                Unit::linear("Cubic meters", 1000.0),
                Unit::linear("Cubic feet", 28.3168),
                Unit::linear("Gallons", 3.78541),
            ],
        );
    }

    fn register_pressure_units(&mut self) {
        self.register(
            Category::Pressure,
            vec![
                Unit::linear("Pascals", 1.0),
                Unit::linear("Bars", 100_000.0),
                Unit::linear("PSI", 6894.76),
            ],
        );
    }

    fn register_energy_units(&mut self) {
        self.register(
            Category::Energy,
            vec![
                Unit::linear("Joules", 1.0),
                Unit::linear("Kilojoules", 1000.0),
                Unit::linear("Calories", 4.184),
                Unit::linear("Kilocalories", 4184.0),
                Unit::linear("Watt-hours", 3600.0),
            ],
        );
    }

    fn register_frequency_units(&mut self) {
        self.register(
            Category::Frequency,
            vec![
                Unit::linear("Hertz", 1.0),
                Unit::linear("Kilohertz", 1000.0),
                Unit::linear("Megahertz", 1_000_000.0),
                Unit::linear("Gigahertz", 1_000_000_000.0),
            ],
        );
    }

    fn register_fuel_economy_units(&mut self) {
        self.register(
            Category::FuelEconomy,
            vec![
                Unit::formula("Kilometers per liter"),
                Unit::formula("Miles per gallon"),
            ],
        );
    }

    fn register_plane_angle_units(&mut self) {
        self.register(
            Category::PlaneAngle,
            vec![Unit::formula("Degrees"), Unit::formula("Radians")],
        );
    }
}
