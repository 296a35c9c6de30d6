//! Category catalog - the dispatch point consumed by the presentation shell
//!
//! The shell knows categories only by name. Lookup resolves the name to a
//! `Category`, and an unknown name comes back as `NotImplemented` rather
//! than a fault.

use serde::{Deserialize, Serialize};

use crate::{convert, Category, ConvertError, UNITS};

/// One selectable category, as handed to the shell's widgets
#[derive(Debug, Clone, Serialize)]
pub struct CategoryEntry {
    pub name: &'static str,
    pub definition: &'static str,
    pub units: Vec<&'static str>,
}

/// All twelve categories in presentation order
pub fn entries() -> Vec<CategoryEntry> {
    Category::ALL
        .iter()
        .map(|&category| CategoryEntry {
            name: category.name(),
            definition: category.definition(),
            units: UNITS.names(category),
        })
        .collect()
}

/// A single conversion attempt as it arrives from the shell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub category: String,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

/// Resolve the category name and run the conversion
pub fn convert_request(request: &ConversionRequest) -> Result<f64, ConvertError> {
    let category = Category::from_name(&request.category)
        .ok_or_else(|| ConvertError::NotImplemented(request.category.clone()))?;
    convert(
        category,
        request.value,
        &request.from_unit,
        &request.to_unit,
    )
}

/// The display line the shell renders for a successful conversion
pub fn format_result(request: &ConversionRequest, result: f64) -> String {
    format!(
        "{} {} = {} {}",
        request.value, request.from_unit, result, request.to_unit
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(category: &str, value: f64, from: &str, to: &str) -> ConversionRequest {
        ConversionRequest {
            category: category.to_string(),
            value,
            from_unit: from.to_string(),
            to_unit: to.to_string(),
        }
    }

    #[test]
    fn test_entries_cover_all_categories_in_order() {
        let entries = entries();
        assert_eq!(entries.len(), 12);
        assert_eq!(entries[0].name, "Length");
        assert_eq!(entries[10].name, "Fuel Economy");
        assert_eq!(entries[11].name, "Plane Angle");
        for entry in &entries {
            assert!(!entry.definition.is_empty());
            assert!(entry.units.len() >= 2);
        }
    }

    #[test]
    fn test_convert_request() {
        let req = request("Length", 1.0, "Kilometers", "Meters");
        assert_eq!(convert_request(&req).unwrap(), 1000.0);
    }

    #[test]
    fn test_unknown_category_not_implemented() {
        let req = request("Loudness", 1.0, "Decibels", "Sones");
        let err = convert_request(&req).unwrap_err();
        assert_eq!(err, ConvertError::NotImplemented("Loudness".to_string()));
    }

    #[test]
    fn test_category_lookup_is_case_sensitive() {
        let req = request("length", 1.0, "Kilometers", "Meters");
        assert!(matches!(
            convert_request(&req).unwrap_err(),
            ConvertError::NotImplemented(_)
        ));
    }

    #[test]
    fn test_bad_unit_propagates() {
        let req = request("Length", 1.0, "Cubits", "Meters");
        assert!(matches!(
            convert_request(&req).unwrap_err(),
            ConvertError::UnknownUnit { .. }
        ));
    }

    #[test]
    fn test_format_result() {
        let req = request("Length", 1.0, "Kilometers", "Meters");
        let result = convert_request(&req).unwrap();
        assert_eq!(format_result(&req, result), "1 Kilometers = 1000 Meters");
    }
}
