//! # Validation Utilities
//!
//! Form input validation helpers.

/// Parse a numeric form field.
///
/// Returns `Ok(None)` for an empty field, `Ok(Some(n))` for a finite non-negative
/// number and an error message for anything else.
pub fn parse_amount(value: &str, field_name: &str) -> Result<Option<f64>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(Some(n)),
        Ok(_) => Err(format!("{} must be a non-negative number", field_name)),
        Err(_) => Err(format!("{} must be a number", field_name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("", "Amount"), Ok(None));
        assert_eq!(parse_amount("  0.5 ", "Amount"), Ok(Some(0.5)));
        assert!(parse_amount("abc", "Amount").is_err());
        assert!(parse_amount("-1", "Amount").is_err());
        assert!(parse_amount("inf", "Amount").is_err());
    }
}
