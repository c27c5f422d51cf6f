use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    IntoActiveModel as _, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use kala_api_schema::talent_profiles;
use kala_domain::talent::AvailabilityStatus;

use crate::domain::repository::TalentRepository;
use crate::domain::types::{TalentChanges, TalentFilter, TalentProfile};
use crate::error::ApiError;
use crate::infra::db::{map_owned_insert, parse_column};

#[derive(Clone)]
pub struct DbTalentRepository {
    pub db: DatabaseConnection,
}

impl DbTalentRepository {
    async fn find_row_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<talent_profiles::Model>, ApiError> {
        Ok(talent_profiles::Entity::find()
            .filter(talent_profiles::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find talent profile by user")?)
    }
}

impl TalentRepository for DbTalentRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<TalentProfile>, ApiError> {
        let model = talent_profiles::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find talent profile by id")?;
        model.map(talent_from_model).transpose()
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<TalentProfile>, ApiError> {
        self.find_row_by_user(user_id)
            .await?
            .map(talent_from_model)
            .transpose()
    }

    async fn create(&self, talent: &TalentProfile) -> Result<(), ApiError> {
        talent_active_model(talent)
            .insert(&self.db)
            .await
            .map_err(|e| {
                map_owned_insert(e, ApiError::TalentProfileAlreadyExists, "create talent profile")
            })?;
        Ok(())
    }

    async fn update(
        &self,
        user_id: Uuid,
        changes: &TalentChanges,
    ) -> Result<Option<TalentProfile>, ApiError> {
        let Some(row) = self.find_row_by_user(user_id).await? else {
            return Ok(None);
        };

        let mut am = row.into_active_model();
        if let Some(v) = changes.talent_type {
            am.talent_type = Set(Some(v.as_str().to_owned()));
        }
        if let Some(v) = &changes.categories {
            am.categories = Set(v.clone());
        }
        if let Some(v) = &changes.specializations {
            am.specializations = Set(Some(v.clone()));
        }
        if let Some(v) = changes.experience_level {
            am.experience_level = Set(Some(v.as_str().to_owned()));
        }
        if let Some(v) = changes.years_of_experience {
            am.years_of_experience = Set(Some(v));
        }
        if let Some(v) = changes.rate_per_hour {
            am.rate_per_hour = Set(Some(v));
        }
        if let Some(v) = changes.rate_per_project {
            am.rate_per_project = Set(Some(v));
        }
        if let Some(v) = changes.rate_per_post {
            am.rate_per_post = Set(Some(v));
        }
        if let Some(v) = &changes.currency {
            am.currency = Set(v.clone());
        }
        if let Some(v) = changes.availability_status {
            am.availability_status = Set(v.as_str().to_owned());
        }
        if let Some(v) = &changes.portfolio_description {
            am.portfolio_description = Set(Some(v.clone()));
        }
        if let Some(v) = &changes.achievements {
            am.achievements = Set(Some(v.clone()));
        }
        if let Some(v) = &changes.awards {
            am.awards = Set(Some(v.clone()));
        }
        if let Some(v) = &changes.certifications {
            am.certifications = Set(Some(v.clone()));
        }
        if let Some(v) = &changes.collaboration_preferences {
            am.collaboration_preferences = Set(Some(v.clone()));
        }
        am.updated_at = Set(Utc::now());

        let model = am.update(&self.db).await.context("update talent profile")?;
        talent_from_model(model).map(Some)
    }

    async fn set_availability(
        &self,
        user_id: Uuid,
        status: AvailabilityStatus,
    ) -> Result<Option<TalentProfile>, ApiError> {
        let Some(row) = self.find_row_by_user(user_id).await? else {
            return Ok(None);
        };
        let mut am = row.into_active_model();
        am.availability_status = Set(status.as_str().to_owned());
        am.updated_at = Set(Utc::now());
        let model = am.update(&self.db).await.context("update availability")?;
        talent_from_model(model).map(Some)
    }

    async fn delete(&self, user_id: Uuid) -> Result<bool, ApiError> {
        let result = talent_profiles::Entity::delete_many()
            .filter(talent_profiles::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .context("delete talent profile")?;
        Ok(result.rows_affected > 0)
    }

    async fn list(&self, filter: &TalentFilter) -> Result<Vec<TalentProfile>, ApiError> {
        let mut query = talent_profiles::Entity::find();
        if let Some(v) = filter.talent_type {
            query = query.filter(talent_profiles::Column::TalentType.eq(v.as_str()));
        }
        if let Some(v) = filter.experience_level {
            query = query.filter(talent_profiles::Column::ExperienceLevel.eq(v.as_str()));
        }
        if let Some(v) = filter.availability_status {
            query = query.filter(talent_profiles::Column::AvailabilityStatus.eq(v.as_str()));
        }
        if filter.min_rate.is_some() || filter.max_rate.is_some() {
            query = query.filter(
                Condition::any()
                    .add(rate_within(talent_profiles::Column::RatePerHour, filter))
                    .add(rate_within(talent_profiles::Column::RatePerProject, filter)),
            );
        }

        let models = query
            .order_by_desc(talent_profiles::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list talent profiles")?;
        models.into_iter().map(talent_from_model).collect()
    }
}

fn rate_within(col: talent_profiles::Column, filter: &TalentFilter) -> Condition {
    let mut cond = Condition::all();
    if let Some(min) = filter.min_rate {
        cond = cond.add(col.gte(min));
    }
    if let Some(max) = filter.max_rate {
        cond = cond.add(col.lte(max));
    }
    cond
}

pub(crate) fn talent_active_model(talent: &TalentProfile) -> talent_profiles::ActiveModel {
    talent_profiles::ActiveModel {
        id: Set(talent.id),
        user_id: Set(talent.user_id),
        talent_type: Set(talent.talent_type.map(|v| v.as_str().to_owned())),
        categories: Set(talent.categories.clone()),
        specializations: Set(talent.specializations.clone()),
        experience_level: Set(talent.experience_level.map(|v| v.as_str().to_owned())),
        years_of_experience: Set(talent.years_of_experience),
        rate_per_hour: Set(talent.rate_per_hour),
        rate_per_project: Set(talent.rate_per_project),
        rate_per_post: Set(talent.rate_per_post),
        currency: Set(talent.currency.clone()),
        availability_status: Set(talent.availability_status.as_str().to_owned()),
        portfolio_description: Set(talent.portfolio_description.clone()),
        achievements: Set(talent.achievements.clone()),
        awards: Set(talent.awards.clone()),
        certifications: Set(talent.certifications.clone()),
        collaboration_preferences: Set(talent.collaboration_preferences.clone()),
        verify_badge: Set(talent.verify_badge),
        created_at: Set(talent.created_at),
        updated_at: Set(talent.updated_at),
    }
}

fn talent_from_model(model: talent_profiles::Model) -> Result<TalentProfile, ApiError> {
    Ok(TalentProfile {
        id: model.id,
        user_id: model.user_id,
        talent_type: model
            .talent_type
            .as_deref()
            .map(|v| parse_column(v, "talent_type"))
            .transpose()?,
        categories: model.categories,
        specializations: model.specializations,
        experience_level: model
            .experience_level
            .as_deref()
            .map(|v| parse_column(v, "experience_level"))
            .transpose()?,
        years_of_experience: model.years_of_experience,
        rate_per_hour: model.rate_per_hour,
        rate_per_project: model.rate_per_project,
        rate_per_post: model.rate_per_post,
        currency: model.currency,
        availability_status: parse_column(&model.availability_status, "availability_status")?,
        portfolio_description: model.portfolio_description,
        achievements: model.achievements,
        awards: model.awards,
        certifications: model.certifications,
        collaboration_preferences: model.collaboration_preferences,
        verify_badge: model.verify_badge,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
