use serde::Deserialize;
use serde::Serialize;

use crate::error::ValidationError;

pub const DEFAULT_DIAL_CODE: &str = "+1";

/// Phone number as entered in the sign-up form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub country_dial_code: String,
    pub phone_number: String,
}

impl PhoneNumber {
    pub fn new(country_dial_code: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            country_dial_code: country_dial_code.into(),
            phone_number: phone_number.into(),
        }
    }
}

impl Default for PhoneNumber {
    fn default() -> Self {
        Self::new(DEFAULT_DIAL_CODE, "")
    }
}

/// Joins the dial code and the number, dropping separators from the number.
///
/// `-`, `(`, `)` and whitespace are removed; anything else is kept as typed.
pub fn compose_phone_number_input(phone: &PhoneNumber) -> Result<String, ValidationError> {
    if phone.phone_number.is_empty() {
        return Err(ValidationError::PhoneEmpty);
    }

    let sanitized: String = phone
        .phone_number
        .chars()
        .filter(|c| !matches!(c, '-' | '(' | ')') && !c.is_whitespace())
        .collect();

    Ok(format!("{}{}", phone.country_dial_code, sanitized))
}
