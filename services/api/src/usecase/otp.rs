//! Phone verification by one-time code.
//!
//! A challenge is created on send, loses one attempt per wrong code and is
//! deleted once it is verified, expires, runs out of attempts or is replaced
//! by a resend.

use chrono::{DateTime, Duration, Utc};
use rand::RngExt;
use uuid::Uuid;

use crate::domain::repository::{OtpRepository, SmsGateway};
use crate::domain::types::{
    OTP_CODE_RANGE, OTP_MAX_ATTEMPTS, OTP_TTL_MINUTES, OtpChallenge, PhoneConfirmation,
    otp_message,
};
use crate::error::ApiError;

fn generate_code() -> String {
    rand::rng().random_range(OTP_CODE_RANGE).to_string()
}

/// Result of a successful send or resend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpIssued {
    pub phone: String,
    pub expires_at: DateTime<Utc>,
    pub expires_in_minutes: i64,
}

/// Deliver a fresh code and persist the challenge only once delivery succeeded.
async fn issue<O, S>(otps: &O, sms: &S, user_id: Uuid, phone: &str) -> Result<OtpIssued, ApiError>
where
    O: OtpRepository,
    S: SmsGateway,
{
    let code = generate_code();
    let now = Utc::now();

    let delivered = match sms.send(phone, &otp_message(&code)).await {
        Ok(delivered) => delivered,
        Err(e) => {
            tracing::warn!(%user_id, error = %e, "otp delivery errored");
            false
        }
    };
    if !delivered {
        return Err(ApiError::OtpDeliveryFailed);
    }

    let challenge = OtpChallenge {
        id: Uuid::now_v7(),
        user_id,
        phone: phone.to_owned(),
        otp: code,
        expires_at: now + Duration::minutes(OTP_TTL_MINUTES),
        is_verified: false,
        attempts: 0,
        created_at: now,
    };
    otps.create(&challenge).await?;
    tracing::info!(%user_id, challenge_id = %challenge.id, "otp issued");

    Ok(OtpIssued {
        phone: challenge.phone,
        expires_at: challenge.expires_at,
        expires_in_minutes: OTP_TTL_MINUTES,
    })
}

// ── SendOtp ──────────────────────────────────────────────────────────────────

pub struct SendOtpUseCase<O: OtpRepository, S: SmsGateway> {
    pub otps: O,
    pub sms: S,
}

impl<O: OtpRepository, S: SmsGateway> SendOtpUseCase<O, S> {
    pub async fn execute(&self, user_id: Uuid, phone: &str) -> Result<OtpIssued, ApiError> {
        if self
            .otps
            .find_pending(user_id, phone, Utc::now())
            .await?
            .is_some()
        {
            return Err(ApiError::OtpAlreadyPending);
        }
        issue(&self.otps, &self.sms, user_id, phone).await
    }
}

// ── ResendOtp ────────────────────────────────────────────────────────────────

pub struct ResendOtpUseCase<O: OtpRepository, S: SmsGateway> {
    pub otps: O,
    pub sms: S,
}

impl<O: OtpRepository, S: SmsGateway> ResendOtpUseCase<O, S> {
    pub async fn execute(&self, user_id: Uuid, phone: &str) -> Result<OtpIssued, ApiError> {
        self.otps.delete_for(user_id, phone).await?;
        issue(&self.otps, &self.sms, user_id, phone).await
    }
}

// ── VerifyOtp ────────────────────────────────────────────────────────────────

pub struct VerifyOtpUseCase<O: OtpRepository> {
    pub otps: O,
}

impl<O: OtpRepository> VerifyOtpUseCase<O> {
    pub async fn execute(&self, user_id: Uuid, phone: &str, code: &str) -> Result<(), ApiError> {
        let challenge = self
            .otps
            .find_latest_unverified(user_id, phone)
            .await?
            .ok_or(ApiError::OtpNotFound)?;

        if challenge.is_expired_at(Utc::now()) {
            self.otps.delete(challenge.id).await?;
            return Err(ApiError::OtpExpired);
        }

        if challenge.attempts >= OTP_MAX_ATTEMPTS {
            self.otps.delete(challenge.id).await?;
            return Err(ApiError::OtpAttemptsExceeded);
        }

        if challenge.otp != code {
            return match self.otps.record_failed_attempt(challenge.id).await? {
                Some(attempts) => Err(ApiError::InvalidOtp {
                    remaining: OTP_MAX_ATTEMPTS - attempts,
                }),
                None => self.discard_spent(challenge.id).await,
            };
        }

        match self
            .otps
            .confirm_phone(challenge.id, user_id, phone)
            .await?
        {
            PhoneConfirmation::Confirmed => {
                tracing::info!(%user_id, "phone verified");
                Ok(())
            }
            PhoneConfirmation::ChallengeSpent => self.discard_spent(challenge.id).await,
            PhoneConfirmation::UserMissing => Err(ApiError::UserNotFound),
        }
    }

    /// Concurrent guesses used up the attempts after this one read the challenge.
    async fn discard_spent(&self, id: Uuid) -> Result<(), ApiError> {
        self.otps.delete(id).await?;
        Err(ApiError::OtpAttemptsExceeded)
    }
}

// ── SweepExpiredOtps ─────────────────────────────────────────────────────────

pub struct SweepExpiredOtpsUseCase<O: OtpRepository> {
    pub otps: O,
}

impl<O: OtpRepository> SweepExpiredOtpsUseCase<O> {
    pub async fn execute(&self, now: DateTime<Utc>) -> Result<u64, ApiError> {
        self.otps.delete_expired(now).await
    }
}
