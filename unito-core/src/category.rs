//! Measurement categories
//!
//! Each category owns a closed set of units and one of two conversion
//! strategies: a linear factor table, or a small set of named formulas.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The twelve measurement domains the converter knows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Length,
    Mass,
    Temperature,
    Area,
    Speed,
    Time,
    Volume,
    Pressure,
    Energy,
    Frequency,
    #[serde(rename = "Fuel Economy")]
    FuelEconomy,
    #[serde(rename = "Plane Angle")]
    PlaneAngle,
}

impl Category {
    /// All categories, in presentation order
    pub const ALL: [Category; 12] = [
        Category::Length,
        Category::Mass,
        Category::Temperature,
        Category::Area,
        Category::Speed,
        Category::Time,
        Category::Volume,
        Category::Pressure,
        Category::Energy,
        Category::Frequency,
        Category::FuelEconomy,
        Category::PlaneAngle,
    ];

    /// Display name, also the case-sensitive lookup key
    pub fn name(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Mass => "Mass",
            Category::Temperature => "Temperature",
            Category::Area => "Area",
            Category::Speed => "Speed",
            Category::Time => "Time",
            Category::Volume => "Volume",
            Category::Pressure => "Pressure",
            Category::Energy => "Energy",
            Category::Frequency => "Frequency",
            Category::FuelEconomy => "Fuel Economy",
            Category::PlaneAngle => "Plane Angle",
        }
    }

    /// Definition text shown next to the category selector
    pub fn definition(&self) -> &'static str {
        match self {
            Category::Length => {
                "Length measures the distance between two points. It is commonly measured in meters, feet, and miles."
            }
            Category::Mass => {
                "Mass represents the amount of matter in an object. It is measured in kilograms, grams, and pounds."
            }
            Category::Temperature => {
                "Temperature quantifies the degree of heat or cold in a substance. It is measured in Celsius, Fahrenheit, and Kelvin."
            }
            Category::Area => {
                "Area defines the extent of a two-dimensional surface. Common units include square meters, acres, and hectares."
            }
            Category::Speed => {
                "Speed is the rate of motion of an object. It is measured in meters per second, kilometers per hour, and miles per hour."
            }
            Category::Time => {
                "Time measures the duration of an event or interval. It is commonly measured in seconds, minutes, and hours."
            }
            Category::Volume => {
                "Volume determines the three-dimensional space occupied by a substance. It is measured in liters, gallons, and cubic meters."
            }
            Category::Pressure => {
                "Pressure is the force exerted per unit area. It is measured in pascals, bars, and PSI."
            }
            Category::Energy => {
                "Energy is the capacity to perform work. It is measured in joules, calories, and watt-hours."
            }
            Category::Frequency => {
                "Frequency measures the number of occurrences of a repeating event per unit time. It is measured in hertz, kilohertz, and megahertz."
            }
            Category::FuelEconomy => {
                "Fuel economy indicates how efficiently a vehicle uses fuel. It is measured in kilometers per liter and miles per gallon."
            }
            Category::PlaneAngle => {
                "Plane angles measure rotation between two intersecting lines. It is measured in degrees and radians."
            }
        }
    }

    /// Whether the category converts through the linear factor table
    ///
    /// The remaining three (Temperature, Fuel Economy, Plane Angle) use
    /// explicitly enumerated formulas.
    pub fn is_linear(&self) -> bool {
        !matches!(
            self,
            Category::Temperature | Category::FuelEconomy | Category::PlaneAngle
        )
    }

    /// Case-sensitive lookup by display name
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
