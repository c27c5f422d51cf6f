use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    IntoActiveModel as _, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use kala_api_schema::user_profiles;

use crate::domain::repository::ProfileRepository;
use crate::domain::types::{ProfileChanges, UserProfile};
use crate::error::ApiError;
use crate::infra::db::{icontains, map_owned_insert};

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<UserProfile>, ApiError> {
        let model = user_profiles::Entity::find()
            .filter(user_profiles::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find profile by user")?;
        Ok(model.map(profile_from_model))
    }

    async fn create(&self, profile: &UserProfile) -> Result<(), ApiError> {
        profile_active_model(profile)
            .insert(&self.db)
            .await
            .map_err(|e| map_owned_insert(e, ApiError::ProfileAlreadyExists, "create profile"))?;
        Ok(())
    }

    async fn update(
        &self,
        user_id: Uuid,
        changes: &ProfileChanges,
    ) -> Result<Option<UserProfile>, ApiError> {
        let Some(row) = user_profiles::Entity::find()
            .filter(user_profiles::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find profile for update")?
        else {
            return Ok(None);
        };

        let mut am = row.into_active_model();
        if let Some(v) = &changes.first_name {
            am.first_name = Set(Some(v.clone()));
        }
        if let Some(v) = &changes.last_name {
            am.last_name = Set(Some(v.clone()));
        }
        if let Some(v) = &changes.display_name {
            am.display_name = Set(Some(v.clone()));
        }
        if let Some(v) = &changes.bio {
            am.bio = Set(Some(v.clone()));
        }
        if let Some(v) = &changes.profile_image_url {
            am.profile_image_url = Set(Some(v.clone()));
        }
        if let Some(v) = &changes.banner_image_url {
            am.banner_image_url = Set(Some(v.clone()));
        }
        if let Some(v) = &changes.location_city {
            am.location_city = Set(Some(v.clone()));
        }
        if let Some(v) = &changes.location_state {
            am.location_state = Set(Some(v.clone()));
        }
        if let Some(v) = &changes.location_country {
            am.location_country = Set(Some(v.clone()));
        }
        if let Some(v) = &changes.website_url {
            am.website_url = Set(Some(v.clone()));
        }
        if let Some(v) = &changes.languages {
            am.languages = Set(Some(v.clone()));
        }
        if let Some(v) = &changes.time_zone {
            am.time_zone = Set(Some(v.clone()));
        }
        am.updated_at = Set(Utc::now());

        let model = am.update(&self.db).await.context("update profile")?;
        Ok(Some(profile_from_model(model)))
    }

    async fn delete(&self, user_id: Uuid) -> Result<bool, ApiError> {
        let result = user_profiles::Entity::delete_many()
            .filter(user_profiles::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .context("delete profile")?;
        Ok(result.rows_affected > 0)
    }

    async fn search(&self, query: &str) -> Result<Vec<UserProfile>, ApiError> {
        let models = user_profiles::Entity::find()
            .filter(
                Condition::any()
                    .add(icontains(user_profiles::Column::LocationCity, query))
                    .add(icontains(user_profiles::Column::LocationState, query))
                    .add(icontains(user_profiles::Column::LocationCountry, query))
                    .add(icontains(user_profiles::Column::DisplayName, query)),
            )
            .order_by_desc(user_profiles::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("search profiles")?;
        Ok(models.into_iter().map(profile_from_model).collect())
    }
}

pub(crate) fn profile_active_model(profile: &UserProfile) -> user_profiles::ActiveModel {
    user_profiles::ActiveModel {
        id: Set(profile.id),
        user_id: Set(profile.user_id),
        first_name: Set(profile.first_name.clone()),
        last_name: Set(profile.last_name.clone()),
        display_name: Set(profile.display_name.clone()),
        bio: Set(profile.bio.clone()),
        profile_image_url: Set(profile.profile_image_url.clone()),
        banner_image_url: Set(profile.banner_image_url.clone()),
        location_city: Set(profile.location_city.clone()),
        location_state: Set(profile.location_state.clone()),
        location_country: Set(profile.location_country.clone()),
        website_url: Set(profile.website_url.clone()),
        languages: Set(profile.languages.clone()),
        time_zone: Set(profile.time_zone.clone()),
        created_at: Set(profile.created_at),
        updated_at: Set(profile.updated_at),
    }
}

fn profile_from_model(model: user_profiles::Model) -> UserProfile {
    UserProfile {
        id: model.id,
        user_id: model.user_id,
        first_name: model.first_name,
        last_name: model.last_name,
        display_name: model.display_name,
        bio: model.bio,
        profile_image_url: model.profile_image_url,
        banner_image_url: model.banner_image_url,
        location_city: model.location_city,
        location_state: model.location_state,
        location_country: model.location_country,
        website_url: model.website_url,
        languages: model.languages,
        time_zone: model.time_zone,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
