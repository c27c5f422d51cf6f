use std::borrow::Cow;

use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError};

use kala_domain::phone::{is_valid_mobile, is_valid_otp_code};

use crate::error::ApiError;

pub mod auth;
pub mod banner;
pub mod health;
pub mod otp;
pub mod profile;
pub mod social;
pub mod talent;
pub mod user;
pub mod work;

/// Run declarative validation on a request body.
pub(crate) fn validated<T: Validate>(body: T) -> Result<T, ApiError> {
    body.validate()?;
    Ok(body)
}

/// Parse an optional raw query string; absent means all defaults.
pub(crate) fn parse_query<T: DeserializeOwned + Default>(
    raw: Option<String>,
) -> Result<T, ApiError> {
    match raw.as_deref() {
        None | Some("") => Ok(T::default()),
        Some(q) => serde_qs::from_str(q).map_err(|e| ApiError::InvalidInput(e.to_string())),
    }
}

/// Parse a path segment holding one of the string-backed enums.
pub(crate) fn parse_segment<T>(raw: &str) -> Result<T, ApiError>
where
    T: std::str::FromStr<Err = kala_domain::UnknownVariant>,
{
    raw.parse().map_err(|e: kala_domain::UnknownVariant| ApiError::InvalidInput(e.to_string()))
}

pub(crate) fn validate_mobile(phone: &str) -> Result<(), ValidationError> {
    if is_valid_mobile(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("mobile")
            .with_message(Cow::Borrowed("phone must be a 10-digit Indian mobile number")))
    }
}

pub(crate) fn validate_otp(code: &str) -> Result<(), ValidationError> {
    if is_valid_otp_code(code) {
        Ok(())
    } else {
        Err(ValidationError::new("otp").with_message(Cow::Borrowed("otp must be exactly 6 digits")))
    }
}
