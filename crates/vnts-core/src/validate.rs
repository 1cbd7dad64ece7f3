//! Field-level validation for create and update payloads.
//!
//! The backend validates everything again server-side; these checks exist
//! so obviously bad input fails before a request is spent on it.

use thiserror::Error;

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Rejects empty or whitespace-only values.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming `field` when `value` is blank.
pub fn require_nonempty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(())
}

/// Minimal shape check: something before and after a single `@`, with a
/// dot in the domain part. Full RFC validation belongs to the backend.
///
/// # Errors
///
/// Returns a [`ValidationError`] when `value` does not look like an address.
pub fn require_email(field: &str, value: &str) -> Result<(), ValidationError> {
    require_nonempty(field, value)?;
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return Err(ValidationError::new(field, "must be an email address"));
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.contains('@') {
        return Err(ValidationError::new(field, "must be an email address"));
    }
    Ok(())
}

/// Seller access codes are all digits, four to eight of them.
///
/// # Errors
///
/// Returns a [`ValidationError`] when `value` is not a 4-8 digit code.
pub fn require_numeric_code(field: &str, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if !(4..=8).contains(&value.len()) || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new(field, "must be a 4-8 digit code"));
    }
    Ok(())
}

/// # Errors
///
/// Returns a [`ValidationError`] when `value` is negative or not finite.
pub fn require_non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::new(field, "must be zero or greater"));
    }
    Ok(())
}

/// # Errors
///
/// Returns a [`ValidationError`] when `quantity` is zero.
pub fn require_positive_quantity(field: &str, quantity: u32) -> Result<(), ValidationError> {
    if quantity == 0 {
        return Err(ValidationError::new(field, "must be at least 1"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonempty_rejects_whitespace() {
        assert!(require_nonempty("name", "Main St").is_ok());
        assert!(require_nonempty("name", "   ").is_err());
        assert!(require_nonempty("name", "").is_err());
    }

    #[test]
    fn email_shape() {
        assert!(require_email("email", "owner@shop.example").is_ok());
        assert!(require_email("email", "no-at-sign").is_err());
        assert!(require_email("email", "@shop.example").is_err());
        assert!(require_email("email", "owner@nodot").is_err());
    }

    #[test]
    fn numeric_code_bounds() {
        assert!(require_numeric_code("code", "1234").is_ok());
        assert!(require_numeric_code("code", "12345678").is_ok());
        assert!(require_numeric_code("code", "123").is_err());
        assert!(require_numeric_code("code", "123456789").is_err());
        assert!(require_numeric_code("code", "12a4").is_err());
    }

    #[test]
    fn amounts_and_quantities() {
        assert!(require_non_negative("price", 0.0).is_ok());
        assert!(require_non_negative("price", -1.0).is_err());
        assert!(require_non_negative("price", f64::NAN).is_err());
        assert!(require_positive_quantity("quantity", 1).is_ok());
        assert!(require_positive_quantity("quantity", 0).is_err());
    }

    #[test]
    fn error_message_names_the_field() {
        let err = require_nonempty("name", "").unwrap_err();
        assert_eq!(err.to_string(), "invalid name: must not be empty");
    }
}
