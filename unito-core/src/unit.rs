//! Unit representation with linear scale factors

use std::fmt;

use serde::Serialize;

/// A unit of measurement within one category
///
/// Linear-category units carry a positive scale expressing
/// "1 unit = scale × category base unit". Formula-category units
/// (temperature scales, fuel economy, angles) carry no scale; their
/// conversions are enumerated in the engine instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Unit {
    /// Display name, unique and case-sensitive within its category
    pub name: &'static str,
    /// Scale relative to the category base unit, where defined
    pub scale: Option<f64>,
}

impl Unit {
    /// Create a unit converted through the factor table
    pub const fn linear(name: &'static str, scale: f64) -> Self {
        Unit {
            name,
            scale: Some(scale),
        }
    }

    /// Create a unit converted through enumerated formulas
    pub const fn formula(name: &'static str) -> Self {
        Unit { name, scale: None }
    }

    /// Whether this is the category's base unit (scale exactly 1)
    pub fn is_base(&self) -> bool {
        self.scale == Some(1.0)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
