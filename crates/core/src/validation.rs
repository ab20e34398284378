//! Shared field validation helpers.

use crate::error::CoreError;

/// Lowest accepted review rating.
pub const MIN_RATING: i32 = 1;

/// Highest accepted review rating.
pub const MAX_RATING: i32 = 5;

/// Reject empty or whitespace-only required fields.
pub fn require_field(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Prices are non-negative amounts in the local currency.
pub fn validate_price(field: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::Validation(format!(
            "{field} must be a non-negative amount, got {value}"
        )));
    }
    Ok(())
}

pub fn validate_rating(rating: i32) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_field_rejected() {
        assert!(require_field("name", "").is_err());
        assert!(require_field("name", " \t").is_err());
        assert!(require_field("name", "Mehmet").is_ok());
    }

    #[test]
    fn test_price_bounds() {
        assert!(validate_price("basePrice", 0.0).is_ok());
        assert!(validate_price("basePrice", 750.5).is_ok());
        assert!(validate_price("basePrice", -0.01).is_err());
        assert!(validate_price("basePrice", f64::NAN).is_err());
    }

    #[test]
    fn test_rating_bounds() {
        for rating in 1..=5 {
            assert!(validate_rating(rating).is_ok());
        }
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }
}
