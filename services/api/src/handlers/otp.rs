use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use validator::Validate;

use kala_auth_types::identity::Identity;

use crate::error::ApiError;
use crate::handlers::{validate_mobile, validate_otp, validated};
use crate::state::AppState;
use crate::usecase::otp::{OtpIssued, ResendOtpUseCase, SendOtpUseCase, VerifyOtpUseCase};

#[derive(Debug, Deserialize, Validate)]
pub struct SendOtpRequest {
    #[validate(custom(function = "validate_mobile"))]
    pub phone: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(custom(function = "validate_mobile"))]
    pub phone: String,
    #[validate(custom(function = "validate_otp"))]
    pub otp: String,
}

/// Envelope used by every `/sms` endpoint.
#[derive(Debug, Serialize)]
pub struct SmsEnvelope<T> {
    pub success: bool,
    pub message: &'static str,
    pub data: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpSentData {
    pub phone: String,
    pub expires_in: i64,
}

#[derive(Debug, Serialize)]
pub struct OtpVerifiedData {
    pub verified: bool,
}

fn sent(issued: OtpIssued) -> Json<SmsEnvelope<OtpSentData>> {
    Json(SmsEnvelope {
        success: true,
        message: "OTP sent successfully",
        data: OtpSentData {
            phone: issued.phone,
            expires_in: issued.expires_in_minutes,
        },
    })
}

// ── POST /sms/send-otp ───────────────────────────────────────────────────────

pub async fn send_otp(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<SendOtpRequest>,
) -> Result<Json<SmsEnvelope<OtpSentData>>, ApiError> {
    let body = validated(body)?;
    let usecase = SendOtpUseCase {
        otps: state.otp_repo(),
        sms: state.sms_gateway(),
    };
    let issued = usecase.execute(identity.user_id, &body.phone).await?;
    Ok(sent(issued))
}

// ── POST /sms/verify-otp ─────────────────────────────────────────────────────

pub async fn verify_otp(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<VerifyOtpRequest>,
) -> Result<Json<SmsEnvelope<OtpVerifiedData>>, ApiError> {
    let body = validated(body)?;
    let usecase = VerifyOtpUseCase {
        otps: state.otp_repo(),
    };
    usecase
        .execute(identity.user_id, &body.phone, &body.otp)
        .await?;
    Ok(Json(SmsEnvelope {
        success: true,
        message: "Phone number verified successfully",
        data: OtpVerifiedData { verified: true },
    }))
}

// ── POST /sms/resend-otp ─────────────────────────────────────────────────────

pub async fn resend_otp(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<SendOtpRequest>,
) -> Result<Json<SmsEnvelope<OtpSentData>>, ApiError> {
    let body = validated(body)?;
    let usecase = ResendOtpUseCase {
        otps: state.otp_repo(),
        sms: state.sms_gateway(),
    };
    let issued = usecase.execute(identity.user_id, &body.phone).await?;
    Ok(sent(issued))
}
