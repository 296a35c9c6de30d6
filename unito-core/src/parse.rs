//! Spoken-input bridge
//!
//! Browser speech capture hands the converter a decimal transcript and
//! nothing else of the speech stack crosses the boundary. The transcript
//! must already be a plain number ("42", "-3.5", "1e3"); word-to-digit
//! normalization is the recognizer's job.

use crate::ConvertError;

/// Parse a transcribed decimal string into a value
pub fn parse_value(text: &str) -> Result<f64, ConvertError> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ConvertError::InvalidValue(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_decimals() {
        assert_eq!(parse_value("42").unwrap(), 42.0);
        assert_eq!(parse_value("-3.5").unwrap(), -3.5);
        assert_eq!(parse_value("0.001").unwrap(), 0.001);
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(parse_value("1e3").unwrap(), 1000.0);
        assert_eq!(parse_value("2.5E-2").unwrap(), 0.025);
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(parse_value("  7.5 ").unwrap(), 7.5);
    }

    #[test]
    fn test_rejects_junk() {
        assert!(parse_value("").is_err());
        assert!(parse_value("   ").is_err());
        assert!(parse_value("forty two").is_err());
        assert!(parse_value("3.5 meters").is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(parse_value("inf").is_err());
        assert!(parse_value("NaN").is_err());
    }

    #[test]
    fn test_error_keeps_original_text() {
        let err = parse_value(" not a number ").unwrap_err();
        assert_eq!(
            err,
            ConvertError::InvalidValue(" not a number ".to_string())
        );
    }
}
