use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionError, TransactionTrait,
};
use uuid::Uuid;

use kala_api_schema::{mobile_otps, users};

use crate::domain::repository::OtpRepository;
use crate::domain::types::{OTP_MAX_ATTEMPTS, OtpChallenge, PhoneConfirmation};
use crate::error::{ApiError, is_unique_violation};
use crate::infra::db::transaction_db_err;

/// Reasons a phone confirmation rolls back.
#[derive(Debug, thiserror::Error)]
enum ConfirmAbort {
    #[error(transparent)]
    Db(#[from] DbErr),
    #[error("challenge spent")]
    ChallengeSpent,
    #[error("user missing")]
    UserMissing,
}

#[derive(Clone)]
pub struct DbOtpRepository {
    pub db: DatabaseConnection,
}

impl OtpRepository for DbOtpRepository {
    async fn find_pending(
        &self,
        user_id: Uuid,
        phone: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<OtpChallenge>, ApiError> {
        let model = mobile_otps::Entity::find()
            .filter(mobile_otps::Column::UserId.eq(user_id))
            .filter(mobile_otps::Column::Phone.eq(phone))
            .filter(mobile_otps::Column::IsVerified.eq(false))
            .filter(mobile_otps::Column::ExpiresAt.gt(now))
            .order_by_desc(mobile_otps::Column::CreatedAt)
            .one(&self.db)
            .await
            .context("find pending otp")?;
        Ok(model.map(otp_from_model))
    }

    async fn find_latest_unverified(
        &self,
        user_id: Uuid,
        phone: &str,
    ) -> Result<Option<OtpChallenge>, ApiError> {
        let model = mobile_otps::Entity::find()
            .filter(mobile_otps::Column::UserId.eq(user_id))
            .filter(mobile_otps::Column::Phone.eq(phone))
            .filter(mobile_otps::Column::IsVerified.eq(false))
            .order_by_desc(mobile_otps::Column::CreatedAt)
            .one(&self.db)
            .await
            .context("find latest unverified otp")?;
        Ok(model.map(otp_from_model))
    }

    async fn create(&self, challenge: &OtpChallenge) -> Result<(), ApiError> {
        // `uq_mobile_otps_pending` admits one unverified row per (user, phone).
        let result = self
            .db
            .transaction::<_, (), DbErr>(|txn| {
                let challenge = challenge.clone();
                Box::pin(async move {
                    mobile_otps::Entity::delete_many()
                        .filter(mobile_otps::Column::UserId.eq(challenge.user_id))
                        .filter(mobile_otps::Column::Phone.eq(challenge.phone.as_str()))
                        .filter(mobile_otps::Column::ExpiresAt.lt(challenge.created_at))
                        .exec(txn)
                        .await?;
                    otp_active_model(&challenge).insert(txn).await?;
                    Ok(())
                })
            })
            .await
            .map_err(transaction_db_err);

        match result {
            Ok(()) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(ApiError::OtpAlreadyPending),
            Err(e) => Err(anyhow::Error::new(e).context("create otp").into()),
        }
    }

    async fn record_failed_attempt(&self, id: Uuid) -> Result<Option<i32>, ApiError> {
        let updated = mobile_otps::Entity::update_many()
            .col_expr(
                mobile_otps::Column::Attempts,
                Expr::col(mobile_otps::Column::Attempts).add(1),
            )
            .filter(mobile_otps::Column::Id.eq(id))
            .filter(mobile_otps::Column::Attempts.lt(OTP_MAX_ATTEMPTS))
            .exec_with_returning(&self.db)
            .await
            .context("record failed otp attempt")?;
        Ok(updated.first().map(|m| m.attempts))
    }

    async fn delete(&self, id: Uuid) -> Result<(), ApiError> {
        mobile_otps::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete otp")?;
        Ok(())
    }

    async fn delete_for(&self, user_id: Uuid, phone: &str) -> Result<u64, ApiError> {
        let result = mobile_otps::Entity::delete_many()
            .filter(mobile_otps::Column::UserId.eq(user_id))
            .filter(mobile_otps::Column::Phone.eq(phone))
            .exec(&self.db)
            .await
            .context("delete otps for phone")?;
        Ok(result.rows_affected)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, ApiError> {
        let result = mobile_otps::Entity::delete_many()
            .filter(mobile_otps::Column::ExpiresAt.lt(now))
            .exec(&self.db)
            .await
            .context("delete expired otps")?;
        Ok(result.rows_affected)
    }

    async fn confirm_phone(
        &self,
        challenge_id: Uuid,
        user_id: Uuid,
        phone: &str,
    ) -> Result<PhoneConfirmation, ApiError> {
        let phone = phone.to_owned();
        let result = self
            .db
            .transaction::<_, (), ConfirmAbort>(|txn| {
                Box::pin(async move {
                    let consumed = mobile_otps::Entity::delete_many()
                        .filter(mobile_otps::Column::Id.eq(challenge_id))
                        .filter(mobile_otps::Column::Attempts.lt(OTP_MAX_ATTEMPTS))
                        .exec(txn)
                        .await?;
                    if consumed.rows_affected == 0 {
                        return Err(ConfirmAbort::ChallengeSpent);
                    }

                    let updated = users::Entity::update_many()
                        .col_expr(users::Column::Phone, Expr::value(Some(phone)))
                        .col_expr(users::Column::PhoneVerified, Expr::value(true))
                        .col_expr(users::Column::UpdatedAt, Expr::value(Utc::now()))
                        .filter(users::Column::Id.eq(user_id))
                        .exec(txn)
                        .await?;
                    if updated.rows_affected == 0 {
                        return Err(ConfirmAbort::UserMissing);
                    }
                    Ok(())
                })
            })
            .await;

        match result {
            Ok(()) => Ok(PhoneConfirmation::Confirmed),
            Err(TransactionError::Transaction(ConfirmAbort::ChallengeSpent)) => {
                Ok(PhoneConfirmation::ChallengeSpent)
            }
            Err(TransactionError::Transaction(ConfirmAbort::UserMissing)) => {
                Ok(PhoneConfirmation::UserMissing)
            }
            Err(TransactionError::Transaction(ConfirmAbort::Db(e)))
            | Err(TransactionError::Connection(e)) => {
                Err(anyhow::Error::new(e).context("confirm phone").into())
            }
        }
    }
}

fn otp_active_model(challenge: &OtpChallenge) -> mobile_otps::ActiveModel {
    mobile_otps::ActiveModel {
        id: Set(challenge.id),
        user_id: Set(challenge.user_id),
        phone: Set(challenge.phone.clone()),
        otp: Set(challenge.otp.clone()),
        expires_at: Set(challenge.expires_at),
        is_verified: Set(challenge.is_verified),
        attempts: Set(challenge.attempts),
        created_at: Set(challenge.created_at),
    }
}

fn otp_from_model(model: mobile_otps::Model) -> OtpChallenge {
    OtpChallenge {
        id: model.id,
        user_id: model.user_id,
        phone: model.phone,
        otp: model.otp,
        expires_at: model.expires_at,
        is_verified: model.is_verified,
        attempts: model.attempts,
        created_at: model.created_at,
    }
}
