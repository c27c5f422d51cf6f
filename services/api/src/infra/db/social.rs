use anyhow::Context as _;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel as _, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use uuid::Uuid;

use kala_api_schema::{talent_profiles, talent_social_accounts};
use kala_domain::social::Platform;

use crate::domain::repository::SocialAccountRepository;
use crate::domain::types::{SocialAccount, SocialAccountChanges};
use crate::error::ApiError;
use crate::infra::db::parse_column;

#[derive(Clone)]
pub struct DbSocialAccountRepository {
    pub db: DatabaseConnection,
}

impl SocialAccountRepository for DbSocialAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<SocialAccount>, ApiError> {
        let model = talent_social_accounts::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find social account")?;
        model.map(social_from_model).transpose()
    }

    async fn list_by_talent(
        &self,
        talent_profile_id: Uuid,
    ) -> Result<Vec<SocialAccount>, ApiError> {
        let models = talent_social_accounts::Entity::find()
            .filter(talent_social_accounts::Column::TalentProfileId.eq(talent_profile_id))
            .order_by_desc(talent_social_accounts::Column::IsPrimary)
            .order_by_desc(talent_social_accounts::Column::FollowersCount)
            .all(&self.db)
            .await
            .context("list social accounts by talent")?;
        models.into_iter().map(social_from_model).collect()
    }

    async fn list_by_platform(
        &self,
        talent_profile_id: Uuid,
        platform: Platform,
    ) -> Result<Vec<SocialAccount>, ApiError> {
        let models = talent_social_accounts::Entity::find()
            .filter(talent_social_accounts::Column::TalentProfileId.eq(talent_profile_id))
            .filter(talent_social_accounts::Column::Platform.eq(platform.as_str()))
            .order_by_desc(talent_social_accounts::Column::IsPrimary)
            .order_by_desc(talent_social_accounts::Column::FollowersCount)
            .all(&self.db)
            .await
            .context("list social accounts by platform")?;
        models.into_iter().map(social_from_model).collect()
    }

    async fn insert(&self, account: &SocialAccount) -> Result<(), ApiError> {
        if !account.is_primary {
            social_active_model(account)
                .insert(&self.db)
                .await
                .context("insert social account")?;
            return Ok(());
        }

        self.db
            .transaction::<_, (), DbErr>(|txn| {
                let account = account.clone();
                Box::pin(async move {
                    demote_siblings(txn, account.talent_profile_id, None).await?;
                    social_active_model(&account).insert(txn).await?;
                    Ok(())
                })
            })
            .await
            .context("insert primary social account")?;
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &SocialAccountChanges,
    ) -> Result<Option<SocialAccount>, ApiError> {
        let Some(row) = talent_social_accounts::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find social account for update")?
        else {
            return Ok(None);
        };

        let promote = changes.is_primary == Some(true);
        let talent_profile_id = row.talent_profile_id;
        let mut am = row.into_active_model();
        if let Some(v) = &changes.handle {
            am.handle = Set(v.clone());
        }
        if let Some(v) = &changes.profile_url {
            am.profile_url = Set(v.clone());
        }
        if let Some(v) = changes.followers_count {
            am.followers_count = Set(v);
        }
        if let Some(v) = changes.engagement_rate {
            am.engagement_rate = Set(Some(v));
        }
        if let Some(v) = changes.is_verified {
            am.is_verified = Set(v);
        }
        if let Some(v) = changes.is_primary {
            am.is_primary = Set(v);
        }
        am.updated_at = Set(Utc::now());

        let model = if promote {
            self.db
                .transaction::<_, talent_social_accounts::Model, DbErr>(|txn| {
                    Box::pin(async move {
                        demote_siblings(txn, talent_profile_id, Some(id)).await?;
                        am.update(txn).await
                    })
                })
                .await
                .context("update social account as primary")?
        } else {
            am.update(&self.db).await.context("update social account")?
        };
        social_from_model(model).map(Some)
    }

    async fn set_primary(&self, id: Uuid) -> Result<Option<SocialAccount>, ApiError> {
        let Some(row) = talent_social_accounts::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find social account to promote")?
        else {
            return Ok(None);
        };

        let talent_profile_id = row.talent_profile_id;
        let mut am = row.into_active_model();
        am.is_primary = Set(true);
        am.updated_at = Set(Utc::now());

        let model = self
            .db
            .transaction::<_, talent_social_accounts::Model, DbErr>(|txn| {
                Box::pin(async move {
                    demote_siblings(txn, talent_profile_id, Some(id)).await?;
                    am.update(txn).await
                })
            })
            .await
            .context("set primary social account")?;
        social_from_model(model).map(Some)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = talent_social_accounts::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete social account")?;
        Ok(result.rows_affected > 0)
    }
}

/// Clear `is_primary` on every account of the profile except `keep`.
///
/// Takes a row lock on the parent talent profile first, so concurrent
/// promotions within one profile serialize and the last writer wins.
/// Must run inside the transaction that writes the new primary.
async fn demote_siblings<C: ConnectionTrait>(
    conn: &C,
    talent_profile_id: Uuid,
    keep: Option<Uuid>,
) -> Result<(), DbErr> {
    talent_profiles::Entity::find_by_id(talent_profile_id)
        .lock_exclusive()
        .one(conn)
        .await?;

    let mut query = talent_social_accounts::Entity::update_many()
        .col_expr(talent_social_accounts::Column::IsPrimary, Expr::value(false))
        .col_expr(talent_social_accounts::Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(talent_social_accounts::Column::TalentProfileId.eq(talent_profile_id))
        .filter(talent_social_accounts::Column::IsPrimary.eq(true));
    if let Some(id) = keep {
        query = query.filter(talent_social_accounts::Column::Id.ne(id));
    }
    query.exec(conn).await?;
    Ok(())
}

fn social_active_model(account: &SocialAccount) -> talent_social_accounts::ActiveModel {
    talent_social_accounts::ActiveModel {
        id: Set(account.id),
        talent_profile_id: Set(account.talent_profile_id),
        platform: Set(account.platform.as_str().to_owned()),
        handle: Set(account.handle.clone()),
        profile_url: Set(account.profile_url.clone()),
        followers_count: Set(account.followers_count),
        engagement_rate: Set(account.engagement_rate),
        is_verified: Set(account.is_verified),
        is_primary: Set(account.is_primary),
        created_at: Set(account.created_at),
        updated_at: Set(account.updated_at),
    }
}

fn social_from_model(model: talent_social_accounts::Model) -> Result<SocialAccount, ApiError> {
    Ok(SocialAccount {
        id: model.id,
        talent_profile_id: model.talent_profile_id,
        platform: parse_column(&model.platform, "platform")?,
        handle: model.handle,
        profile_url: model.profile_url,
        followers_count: model.followers_count,
        engagement_rate: model.engagement_rate,
        is_verified: model.is_verified,
        is_primary: model.is_primary,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
