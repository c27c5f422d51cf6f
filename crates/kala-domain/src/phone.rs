//! Phone-number and one-time-code format rules.

/// Length of an Indian mobile number without country code.
pub const PHONE_LEN: usize = 10;

/// Length of a numeric one-time code.
pub const OTP_LEN: usize = 6;

/// Validate an Indian mobile number: exactly 10 ASCII digits, first digit 6-9.
pub fn is_valid_mobile(phone: &str) -> bool {
    phone.len() == PHONE_LEN
        && phone.bytes().all(|b| b.is_ascii_digit())
        && matches!(phone.as_bytes().first(), Some(b'6'..=b'9'))
}

/// Validate a one-time code: exactly 6 ASCII digits. Leading zeros are allowed.
pub fn is_valid_otp_code(code: &str) -> bool {
    code.len() == OTP_LEN && code.bytes().all(|b| b.is_ascii_digit())
}
