//! Unito Core - Measurement Categories and Unit Conversion
//!
//! Converts a numeric value between units within one measurement category.
//! Built for a browser presentation shell: the shell supplies a category
//! name, a value and two unit names, and gets back either the converted
//! value or a typed "unsupported" signal to render.
//!
//! Categories:
//! - Length (Meters, Kilometers, Miles, Feet, Inches)
//! - Mass (Kilograms, Grams, Pounds, Ounces)
//! - Temperature (Celsius, Fahrenheit, Kelvin)
//! - Area (Square Meters, Square Kilometers, Square Miles, Hectares, Acres)
//! - Speed (Meters per second, Kilometers per hour, Miles per hour, Knots)
//! - Time (Seconds, Minutes, Hours, Days)
//! - Volume (Liters, Milliliters, Cubic meters, Cubic feet, Gallons)
//! - Pressure (Pascals, Bars, PSI)
//! - Energy (Joules, Kilojoules, Calories, Kilocalories, Watt-hours)
//! - Frequency (Hertz, Kilohertz, Megahertz, Gigahertz)
//! - Fuel Economy (Kilometers per liter, Miles per gallon)
//! - Plane Angle (Degrees, Radians)
//!
//! Nine categories convert through a linear factor table; Temperature,
//! Fuel Economy and Plane Angle use explicitly enumerated formulas.

mod catalog;
mod category;
mod convert;
mod error;
mod parse;
mod registry;
mod unit;

pub use catalog::{convert_request, entries, format_result, CategoryEntry, ConversionRequest};
pub use category::Category;
pub use convert::convert;
pub use error::ConvertError;
pub use parse::parse_value;
pub use registry::{UnitRegistry, UNITS};
pub use unit::Unit;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{convert, Category, ConvertError, Unit, UNITS};
}
