use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::{DbErr, SqlErr};

/// API domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("an OTP is already pending for this phone")]
    OtpAlreadyPending,
    #[error("failed to deliver OTP")]
    OtpDeliveryFailed,
    #[error("no pending OTP for this phone")]
    OtpNotFound,
    #[error("OTP has expired")]
    OtpExpired,
    #[error("maximum OTP attempts exceeded")]
    OtpAttemptsExceeded,
    #[error("invalid OTP, {remaining} attempts remaining")]
    InvalidOtp { remaining: i32 },
    #[error("email already exists")]
    EmailAlreadyExists,
    #[error("profile already exists")]
    ProfileAlreadyExists,
    #[error("talent profile already exists")]
    TalentProfileAlreadyExists,
    #[error("user not found")]
    UserNotFound,
    #[error("profile not found")]
    ProfileNotFound,
    #[error("talent profile not found")]
    TalentProfileNotFound,
    #[error("social account not found")]
    SocialAccountNotFound,
    #[error("banner not found")]
    BannerNotFound,
    #[error("work sample not found")]
    WorkSampleNotFound,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("unauthorized")]
    Unauthorized,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OtpAlreadyPending => "OTP_ALREADY_PENDING",
            Self::OtpDeliveryFailed => "OTP_DELIVERY_FAILED",
            Self::OtpNotFound => "OTP_NOT_FOUND",
            Self::OtpExpired => "OTP_EXPIRED",
            Self::OtpAttemptsExceeded => "OTP_ATTEMPTS_EXCEEDED",
            Self::InvalidOtp { .. } => "INVALID_OTP",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::ProfileAlreadyExists => "PROFILE_ALREADY_EXISTS",
            Self::TalentProfileAlreadyExists => "TALENT_PROFILE_ALREADY_EXISTS",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::ProfileNotFound => "PROFILE_NOT_FOUND",
            Self::TalentProfileNotFound => "TALENT_PROFILE_NOT_FOUND",
            Self::SocialAccountNotFound => "SOCIAL_ACCOUNT_NOT_FOUND",
            Self::BannerNotFound => "BANNER_NOT_FOUND",
            Self::WorkSampleNotFound => "WORK_SAMPLE_NOT_FOUND",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::OtpAlreadyPending => StatusCode::TOO_MANY_REQUESTS,
            Self::OtpDeliveryFailed => StatusCode::BAD_GATEWAY,
            Self::OtpNotFound
            | Self::UserNotFound
            | Self::ProfileNotFound
            | Self::TalentProfileNotFound
            | Self::SocialAccountNotFound
            | Self::BannerNotFound
            | Self::WorkSampleNotFound => StatusCode::NOT_FOUND,
            Self::OtpExpired
            | Self::OtpAttemptsExceeded
            | Self::InvalidOtp { .. }
            | Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::EmailAlreadyExists
            | Self::ProfileAlreadyExists
            | Self::TalentProfileAlreadyExists => StatusCode::CONFLICT,
            Self::InvalidCredentials | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::InvalidInput(errors.to_string())
    }
}

impl From<kala_auth_types::token::AuthError> for ApiError {
    fn from(e: kala_auth_types::token::AuthError) -> Self {
        use kala_auth_types::token::AuthError;
        match e {
            AuthError::Signing(e) => Self::Internal(anyhow::Error::new(e).context("sign token")),
            _ => Self::Unauthorized,
        }
    }
}

/// Whether a store error is a unique-constraint violation.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
