//! Conversion errors
//!
//! Errors never crash the converter. They are values that propagate to the
//! presentation shell, which decides how to render them.

use thiserror::Error;

use crate::Category;

/// Error type for conversion operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// Category name not present in the catalog
    #[error("conversion logic not implemented for '{0}'")]
    NotImplemented(String),

    /// Unit name outside the category's unit set
    #[error("unknown unit '{unit}' in category {category}")]
    UnknownUnit { category: Category, unit: String },

    /// Both units are valid but no formula covers the pair
    #[error("unsupported conversion from '{from}' to '{to}' in category {category}")]
    Unsupported {
        category: Category,
        from: String,
        to: String,
    },

    /// Value field did not parse as a decimal number
    #[error("invalid numeric value: '{0}'")]
    InvalidValue(String),
}

impl ConvertError {
    pub fn unknown_unit(category: Category, unit: &str) -> Self {
        ConvertError::UnknownUnit {
            category,
            unit: unit.to_string(),
        }
    }

    pub fn unsupported(category: Category, from: &str, to: &str) -> Self {
        ConvertError::Unsupported {
            category,
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ConvertError::NotImplemented("Loudness".to_string());
        assert_eq!(
            format!("{}", err),
            "conversion logic not implemented for 'Loudness'"
        );

        let err = ConvertError::unknown_unit(Category::Length, "Cubits");
        assert_eq!(
            format!("{}", err),
            "unknown unit 'Cubits' in category Length"
        );
    }

    #[test]
    fn test_unsupported_names_both_units() {
        let err = ConvertError::unsupported(Category::FuelEconomy, "Kilometers per liter", "Liters per 100 km");
        let display = format!("{}", err);
        assert!(display.contains("Kilometers per liter"));
        assert!(display.contains("Liters per 100 km"));
    }
}
