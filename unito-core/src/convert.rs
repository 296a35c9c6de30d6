//! Conversion engine
//!
//! One pure routine per conversion shape. Both unit names are validated
//! against the registry before any arithmetic, and identity pairs return
//! the input unchanged for every category, so the formula routines only
//! ever see distinct in-category units.

use std::f64::consts::PI;

use crate::{Category, ConvertError, UNITS};

/// km/L × 2.35215 = MPG
const KM_PER_L_TO_MPG: f64 = 2.35215;

/// Convert `value` between two units of `category`
///
/// Pure and deterministic; every failure is a `ConvertError` value, never
/// a panic.
pub fn convert(category: Category, value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
    if UNITS.get(category, from).is_none() {
        return Err(ConvertError::unknown_unit(category, from));
    }
    if UNITS.get(category, to).is_none() {
        return Err(ConvertError::unknown_unit(category, to));
    }

    // Identity pairs bypass the formulas entirely, so the original value
    // comes back bit-for-bit in every category.
    if from == to {
        return Ok(value);
    }

    match category {
        Category::Temperature => convert_temperature(value, from, to),
        Category::FuelEconomy => convert_fuel_economy(value, from, to),
        Category::PlaneAngle => convert_plane_angle(value, from, to),
        Category::Length
        | Category::Mass
        | Category::Area
        | Category::Speed
        | Category::Time
        | Category::Volume
        | Category::Pressure
        | Category::Energy
        | Category::Frequency => convert_linear(category, value, from, to),
    }
}

/// value × factor(from) / factor(to) over the registry scale table
fn convert_linear(category: Category, value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
    let from_scale = UNITS
        .scale(category, from)
        .ok_or_else(|| ConvertError::unsupported(category, from, to))?;
    let to_scale = UNITS
        .scale(category, to)
        .ok_or_else(|| ConvertError::unsupported(category, from, to))?;
    Ok(value * from_scale / to_scale)
}

fn convert_temperature(value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
    match (from, to) {
        ("Celsius", "Fahrenheit") => Ok(value * 9.0 / 5.0 + 32.0),
        ("Celsius", "Kelvin") => Ok(value + 273.15),
        ("Fahrenheit", "Celsius") => Ok((value - 32.0) * 5.0 / 9.0),
        ("Fahrenheit", "Kelvin") => Ok((value - 32.0) * 5.0 / 9.0 + 273.15),
        ("Kelvin", "Celsius") => Ok(value - 273.15),
        ("Kelvin", "Fahrenheit") => Ok((value - 273.15) * 9.0 / 5.0 + 32.0),
        _ => Err(ConvertError::unsupported(Category::Temperature, from, to)),
    }
}

fn convert_fuel_economy(value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
    match (from, to) {
        ("Kilometers per liter", "Miles per gallon") => Ok(value * KM_PER_L_TO_MPG),
        ("Miles per gallon", "Kilometers per liter") => Ok(value / KM_PER_L_TO_MPG),
        _ => Err(ConvertError::unsupported(Category::FuelEconomy, from, to)),
    }
}

fn convert_plane_angle(value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
    match (from, to) {
        ("Degrees", "Radians") => Ok(value * PI / 180.0),
        ("Radians", "Degrees") => Ok(value * 180.0 / PI),
        _ => Err(ConvertError::unsupported(Category::PlaneAngle, from, to)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_kilometers_to_meters() {
        let result = convert(Category::Length, 1.0, "Kilometers", "Meters").unwrap();
        assert_eq!(result, 1000.0);
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        let result = convert(Category::Temperature, 0.0, "Celsius", "Fahrenheit").unwrap();
        assert_eq!(result, 32.0);
    }

    #[test]
    fn test_fahrenheit_to_kelvin() {
        let result = convert(Category::Temperature, 212.0, "Fahrenheit", "Kelvin").unwrap();
        assert_close(result, 373.15);
    }

    #[test]
    fn test_fuel_economy() {
        let result = convert(
            Category::FuelEconomy,
            10.0,
            "Kilometers per liter",
            "Miles per gallon",
        )
        .unwrap();
        assert_close(result, 23.5215);
    }

    #[test]
    fn test_degrees_to_radians() {
        let result = convert(Category::PlaneAngle, 180.0, "Degrees", "Radians").unwrap();
        assert_close(result, PI);
    }

    #[test]
    fn test_fuel_economy_identity_skips_formula() {
        let result = convert(
            Category::FuelEconomy,
            5.0,
            "Kilometers per liter",
            "Kilometers per liter",
        )
        .unwrap();
        assert_eq!(result, 5.0);
    }

    #[test]
    fn test_identity_law_every_unit() {
        for category in Category::ALL {
            for unit in UNITS.names(category) {
                for value in [0.0, 1.0, -7.25, 1234.5678, 1e-9] {
                    let result = convert(category, value, unit, unit).unwrap();
                    assert_eq!(result, value, "identity failed for {} {}", category, unit);
                }
            }
        }
    }

    #[test]
    fn test_all_temperature_pairs() {
        assert_close(
            convert(Category::Temperature, 100.0, "Celsius", "Fahrenheit").unwrap(),
            212.0,
        );
        assert_close(
            convert(Category::Temperature, 100.0, "Celsius", "Kelvin").unwrap(),
            373.15,
        );
        assert_close(
            convert(Category::Temperature, 32.0, "Fahrenheit", "Celsius").unwrap(),
            0.0,
        );
        assert_close(
            convert(Category::Temperature, 0.0, "Kelvin", "Celsius").unwrap(),
            -273.15,
        );
        assert_close(
            convert(Category::Temperature, 273.15, "Kelvin", "Fahrenheit").unwrap(),
            32.0,
        );
        assert_close(
            convert(Category::Temperature, -40.0, "Fahrenheit", "Celsius").unwrap(),
            -40.0,
        );
    }

    #[test]
    fn test_linear_transitivity() {
        for category in Category::ALL.iter().copied().filter(Category::is_linear) {
            let names = UNITS.names(category);
            for &a in &names {
                for &b in &names {
                    for &c in &names {
                        let direct = convert(category, 3.5, a, c).unwrap();
                        let via_b = convert(category, 3.5, a, b).unwrap();
                        let stepped = convert(category, via_b, b, c).unwrap();
                        assert_close(stepped, direct);
                    }
                }
            }
        }
    }

    #[test]
    fn test_round_trip_every_pair() {
        for category in Category::ALL {
            let names = UNITS.names(category);
            for &a in &names {
                for &b in &names {
                    let out = convert(category, 12.75, a, b).unwrap();
                    let back = convert(category, out, b, a).unwrap();
                    assert_close(back, 12.75);
                }
            }
        }
    }

    #[test]
    fn test_negative_and_fractional_values() {
        assert_close(
            convert(Category::Length, -2.5, "Kilometers", "Meters").unwrap(),
            -2500.0,
        );
        assert_close(
            convert(Category::Mass, 0.5, "Kilograms", "Grams").unwrap(),
            500.0,
        );
    }

    #[test]
    fn test_unknown_unit_rejected_before_engine() {
        let err = convert(Category::Length, 1.0, "Cubits", "Meters").unwrap_err();
        assert_eq!(err, ConvertError::unknown_unit(Category::Length, "Cubits"));

        let err = convert(Category::Length, 1.0, "Meters", "Cubits").unwrap_err();
        assert_eq!(err, ConvertError::unknown_unit(Category::Length, "Cubits"));

        // Unit valid in another category is still foreign here
        let err = convert(Category::Mass, 1.0, "Meters", "Grams").unwrap_err();
        assert_eq!(err, ConvertError::unknown_unit(Category::Mass, "Meters"));
    }

    #[test]
    fn test_formula_routines_reject_uncovered_pairs() {
        let err = convert_temperature(1.0, "Celsius", "Rankine").unwrap_err();
        assert!(matches!(err, ConvertError::Unsupported { .. }));

        let err = convert_fuel_economy(1.0, "Miles per gallon", "Liters per 100 km").unwrap_err();
        assert!(matches!(err, ConvertError::Unsupported { .. }));

        let err = convert_plane_angle(1.0, "Degrees", "Gradians").unwrap_err();
        assert!(matches!(err, ConvertError::Unsupported { .. }));
    }
}
