use std::fmt;

use crate::qris::MerchantOverrides;

pub const MERCHANT_NAME_MAX_LEN: usize = 25;
pub const MERCHANT_CITY_MAX_LEN: usize = 15;
pub const POSTAL_CODE_MAX_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), ValidationError>;

pub fn sanitize_string(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_whitespace() || !ch.is_control())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn validate_required(field: &'static str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }

    Ok(())
}

pub fn validate_max_len(field: &'static str, value: &str, max_len: usize) -> ValidationResult {
    if value.chars().count() > max_len {
        return Err(ValidationError::new(
            field,
            format!("must be at most {} characters", max_len),
        ));
    }

    Ok(())
}

pub fn validate_positive_amount(amount: i64) -> ValidationResult {
    if amount <= 0 {
        return Err(ValidationError::new("amount", "must be greater than zero"));
    }

    Ok(())
}

pub fn validate_fee_value(fee_value: f64) -> ValidationResult {
    if !fee_value.is_finite() {
        return Err(ValidationError::new("fee_value", "must be a finite number"));
    }

    Ok(())
}

pub fn validate_postal_code(postal_code: &str) -> ValidationResult {
    validate_required("postal_code", postal_code)?;
    validate_max_len("postal_code", postal_code, POSTAL_CODE_MAX_LEN)?;

    if !postal_code.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(ValidationError::new(
            "postal_code",
            "must contain only digits",
        ));
    }

    Ok(())
}

/// Cleans override values and checks them against the EMV field limits.
/// Values that are blank after cleaning are dropped.
pub fn sanitize_overrides(overrides: &MerchantOverrides) -> Result<MerchantOverrides, ValidationError> {
    let clean = |value: &Option<String>| {
        value
            .as_deref()
            .map(sanitize_string)
            .filter(|v| !v.is_empty())
    };

    let name = clean(&overrides.name);
    let city = clean(&overrides.city);
    let post_code = clean(&overrides.post_code);

    if let Some(name) = &name {
        validate_max_len("merchant_name", name, MERCHANT_NAME_MAX_LEN)?;
    }
    if let Some(city) = &city {
        validate_max_len("merchant_city", city, MERCHANT_CITY_MAX_LEN)?;
    }
    if let Some(post_code) = &post_code {
        validate_postal_code(post_code)?;
    }

    Ok(MerchantOverrides {
        name,
        city,
        post_code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_required_field() {
        assert!(validate_required("field", "value").is_ok());
        assert!(validate_required("field", "   ").is_err());
    }

    #[test]
    fn validates_max_len() {
        assert!(validate_max_len("field", "abc", 3).is_ok());
        assert!(validate_max_len("field", "abcd", 3).is_err());
    }

    #[test]
    fn sanitizes_string() {
        assert_eq!(sanitize_string("  hello\tworld  "), "hello world");
        assert_eq!(sanitize_string("single"), "single");
        assert_eq!(sanitize_string(" \n "), "");
        assert_eq!(sanitize_string("ab\u{0000}cd\u{0007}"), "abcd");
    }

    #[test]
    fn validates_positive_amount() {
        assert!(validate_positive_amount(1).is_ok());
        assert!(validate_positive_amount(0).is_err());
        assert!(validate_positive_amount(-5).is_err());
    }

    #[test]
    fn validates_fee_value() {
        assert!(validate_fee_value(2.5).is_ok());
        assert!(validate_fee_value(-1.0).is_ok());
        assert!(validate_fee_value(f64::NAN).is_err());
        assert!(validate_fee_value(f64::INFINITY).is_err());
    }

    #[test]
    fn validates_postal_code() {
        assert!(validate_postal_code("12190").is_ok());
        assert!(validate_postal_code("12A90").is_err());
        assert!(validate_postal_code("").is_err());
        assert!(validate_postal_code(&"1".repeat(11)).is_err());
    }

    #[test]
    fn sanitizes_overrides() {
        let overrides = MerchantOverrides {
            name: Some("  Kedai\tKopi ".to_string()),
            city: Some(" ".to_string()),
            post_code: None,
        };
        let clean = sanitize_overrides(&overrides).unwrap();

        assert_eq!(clean.name.as_deref(), Some("Kedai Kopi"));
        assert_eq!(clean.city, None);
        assert_eq!(clean.post_code, None);
    }

    #[test]
    fn rejects_overrides_beyond_field_limits() {
        let overrides = MerchantOverrides {
            name: Some("N".repeat(26)),
            ..Default::default()
        };
        let err = sanitize_overrides(&overrides).unwrap_err();
        assert_eq!(err.field, "merchant_name");

        let overrides = MerchantOverrides {
            city: Some("KOTA ADMINISTRASI".to_string()),
            ..Default::default()
        };
        assert_eq!(sanitize_overrides(&overrides).unwrap_err().field, "merchant_city");
    }
}
