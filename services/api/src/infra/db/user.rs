use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, IntoActiveModel as _, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, TransactionTrait,
};
use uuid::Uuid;

use kala_api_schema::{user_profiles, users};
use kala_domain::pagination::Sort;

use crate::domain::repository::UserRepository;
use crate::domain::types::{
    ADMIN_USER_TYPE, TalentProfile, User, UserChanges, UserFilter, UserProfile, UserSortBy,
    UserStats, UserTypeCount,
};
use crate::error::{ApiError, is_unique_violation};
use crate::infra::db::profile::profile_active_model;
use crate::infra::db::talent::talent_active_model;
use crate::infra::db::{icontains, transaction_db_err};

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        match user_active_model(user).insert(&self.db).await {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(ApiError::EmailAlreadyExists),
            Err(e) => Err(anyhow::Error::new(e).context("create user").into()),
        }
    }

    async fn register(
        &self,
        user: &User,
        profile: &UserProfile,
        talent: &TalentProfile,
    ) -> Result<(), ApiError> {
        let result = self
            .db
            .transaction::<_, (), DbErr>(|txn| {
                let user = user.clone();
                let profile = profile.clone();
                let talent = talent.clone();
                Box::pin(async move {
                    user_active_model(&user).insert(txn).await?;
                    insert_profile(txn, &profile).await?;
                    insert_talent(txn, &talent).await?;
                    Ok(())
                })
            })
            .await;

        match result.map_err(transaction_db_err) {
            Ok(()) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(ApiError::EmailAlreadyExists),
            Err(e) => Err(anyhow::Error::new(e).context("register user").into()),
        }
    }

    async fn update(&self, id: Uuid, changes: &UserChanges) -> Result<Option<User>, ApiError> {
        let Some(row) = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user for update")?
        else {
            return Ok(None);
        };

        let mut am = row.into_active_model();
        if let Some(email) = &changes.email {
            am.email = Set(email.clone());
        }
        if let Some(phone) = &changes.phone {
            am.phone = Set(Some(phone.clone()));
        }
        if let Some(user_type) = &changes.user_type {
            am.user_type = Set(user_type.clone());
        }
        if let Some(is_premium) = changes.is_premium {
            am.is_premium = Set(is_premium);
        }
        if let Some(expires_at) = changes.premium_expires_at {
            am.premium_expires_at = Set(Some(expires_at));
        }
        if let Some(is_active) = changes.is_active {
            am.is_active = Set(is_active);
        }
        if let Some(verified) = changes.email_verified {
            am.email_verified = Set(verified);
        }
        if let Some(verified) = changes.phone_verified {
            am.phone_verified = Set(verified);
        }
        am.updated_at = Set(Utc::now());

        match am.update(&self.db).await {
            Ok(model) => Ok(Some(user_from_model(model))),
            Err(e) if is_unique_violation(&e) => Err(ApiError::EmailAlreadyExists),
            Err(e) => Err(anyhow::Error::new(e).context("update user").into()),
        }
    }

    async fn set_password_hash(&self, id: Uuid, password_hash: &str) -> Result<bool, ApiError> {
        let result = users::Entity::update_many()
            .col_expr(users::Column::PasswordHash, Expr::value(password_hash))
            .col_expr(users::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(users::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("update password hash")?;
        Ok(result.rows_affected > 0)
    }

    async fn touch_last_login(&self, id: Uuid, at: DateTime<Utc>) -> Result<(), ApiError> {
        users::Entity::update_many()
            .col_expr(users::Column::LastLogin, Expr::value(Some(at)))
            .filter(users::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("touch last login")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = users::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(result.rows_affected > 0)
    }

    async fn list(&self, filter: &UserFilter) -> Result<(Vec<User>, u64), ApiError> {
        let mut cond = Condition::all().add(users::Column::UserType.ne(ADMIN_USER_TYPE));
        if let Some(search) = filter.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            cond = cond.add(
                Condition::any()
                    .add(icontains((users::Entity, users::Column::Email), search))
                    .add(icontains(
                        (user_profiles::Entity, user_profiles::Column::FirstName),
                        search,
                    ))
                    .add(icontains(
                        (user_profiles::Entity, user_profiles::Column::LastName),
                        search,
                    ))
                    .add(icontains(
                        (user_profiles::Entity, user_profiles::Column::DisplayName),
                        search,
                    )),
            );
        }
        if let Some(user_type) = &filter.user_type {
            cond = cond.add(users::Column::UserType.eq(user_type.as_str()));
        }
        if let Some(is_premium) = filter.is_premium {
            cond = cond.add(users::Column::IsPremium.eq(is_premium));
        }
        if let Some(is_active) = filter.is_active {
            cond = cond.add(users::Column::IsActive.eq(is_active));
        }
        if let Some(verified) = filter.email_verified {
            cond = cond.add(users::Column::EmailVerified.eq(verified));
        }

        let query = users::Entity::find()
            .join(JoinType::LeftJoin, users::Relation::Profile.def())
            .filter(cond);

        let total = query
            .clone()
            .count(&self.db)
            .await
            .context("count users")?;

        let query = match filter.sort_by {
            UserSortBy::CreatedAt(Sort::Desc) => query.order_by_desc(users::Column::CreatedAt),
            UserSortBy::CreatedAt(Sort::Asc) => query.order_by_asc(users::Column::CreatedAt),
            UserSortBy::Email(Sort::Desc) => query.order_by_desc(users::Column::Email),
            UserSortBy::Email(Sort::Asc) => query.order_by_asc(users::Column::Email),
        };
        let models = query
            .offset(filter.page.offset())
            .limit(u64::from(filter.page.limit))
            .all(&self.db)
            .await
            .context("list users")?;

        Ok((models.into_iter().map(user_from_model).collect(), total))
    }

    async fn stats(&self) -> Result<UserStats, ApiError> {
        let total = users::Entity::find()
            .count(&self.db)
            .await
            .context("count users")?;
        let active = users::Entity::find()
            .filter(users::Column::IsActive.eq(true))
            .count(&self.db)
            .await
            .context("count active users")?;
        let premium = users::Entity::find()
            .filter(users::Column::IsPremium.eq(true))
            .count(&self.db)
            .await
            .context("count premium users")?;

        let rows: Vec<(String, i64)> = users::Entity::find()
            .select_only()
            .column(users::Column::UserType)
            .column_as(Expr::col(users::Column::Id).count(), "count")
            .group_by(users::Column::UserType)
            .order_by_asc(users::Column::UserType)
            .into_tuple()
            .all(&self.db)
            .await
            .context("count users by type")?;

        Ok(UserStats {
            total,
            active,
            premium,
            inactive: total.saturating_sub(active),
            by_type: rows
                .into_iter()
                .map(|(user_type, count)| UserTypeCount {
                    user_type,
                    count: u64::try_from(count).unwrap_or_default(),
                })
                .collect(),
        })
    }
}

fn user_active_model(user: &User) -> users::ActiveModel {
    users::ActiveModel {
        id: Set(user.id),
        email: Set(user.email.clone()),
        password_hash: Set(user.password_hash.clone()),
        phone: Set(user.phone.clone()),
        user_type: Set(user.user_type.clone()),
        is_premium: Set(user.is_premium),
        premium_expires_at: Set(user.premium_expires_at),
        is_active: Set(user.is_active),
        email_verified: Set(user.email_verified),
        phone_verified: Set(user.phone_verified),
        created_at: Set(user.created_at),
        updated_at: Set(user.updated_at),
        last_login: Set(user.last_login),
    }
}

async fn insert_profile(txn: &DatabaseTransaction, profile: &UserProfile) -> Result<(), DbErr> {
    profile_active_model(profile).insert(txn).await?;
    Ok(())
}

async fn insert_talent(txn: &DatabaseTransaction, talent: &TalentProfile) -> Result<(), DbErr> {
    talent_active_model(talent).insert(txn).await?;
    Ok(())
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        phone: model.phone,
        user_type: model.user_type,
        is_premium: model.is_premium,
        premium_expires_at: model.premium_expires_at,
        is_active: model.is_active,
        email_verified: model.email_verified,
        phone_verified: model.phone_verified,
        created_at: model.created_at,
        updated_at: model.updated_at,
        last_login: model.last_login,
    }
}

