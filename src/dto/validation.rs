//! Validation helpers for DTOs.

use serde_json::Value;
use validator::{ValidationError, ValidationErrors};

/// Parses a technology index received as a path segment.
///
/// # Examples
///
/// ```ignore
/// parse_technology_index("3")   // Ok(3)
/// parse_technology_index("-1")  // Err - negative
/// parse_technology_index("1.5") // Err - not an integer
/// ```
pub fn parse_technology_index(raw: &str) -> Result<u32, ValidationError> {
    raw.parse::<u32>().map_err(|_| {
        let mut err = ValidationError::new("tech_index_format");
        err.message = Some(format!("`{raw}` is not a non-negative integer").into());
        err
    })
}

/// Validates a JSON technology index, accepting integral numbers only.
///
/// Integral floats such as `3.0` are accepted because JSON does not distinguish them from `3`.
pub fn validate_tech_index(value: &Value) -> Result<u32, ValidationError> {
    let Value::Number(number) = value else {
        let mut err = ValidationError::new("tech_index_type");
        err.message = Some("techIndex must be a number".into());
        return Err(err);
    };

    let index = match number.as_u64() {
        Some(index) => Some(index),
        None => number
            .as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0 && *f >= 0.0)
            .map(|f| f as u64),
    };

    index
        .and_then(|index| u32::try_from(index).ok())
        .ok_or_else(|| {
            let mut err = ValidationError::new("tech_index_range");
            err.message = Some(format!("techIndex must be a non-negative integer (got {number})").into());
            err
        })
}

/// Validates that a JSON value is a string and returns it.
pub fn validate_text(value: &Value, code: &'static str) -> Result<String, ValidationError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        _ => {
            let mut err = ValidationError::new(code);
            err.message = Some("expected a string".into());
            Err(err)
        }
    }
}

/// Error raised when a required field is absent from the payload.
pub fn missing_field() -> ValidationError {
    let mut err = ValidationError::new("required");
    err.message = Some("Missing required parameters: techIndex and guessedName".into());
    err
}

/// Wrap a single field failure into [`ValidationErrors`].
pub fn field_error(field: &'static str, error: ValidationError) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(field, error);
    errors
}
