use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use kala_domain::talent::{AvailabilityStatus, DEFAULT_CURRENCY, ExperienceLevel, TalentType};

use crate::domain::repository::{SocialAccountRepository, TalentRepository};
use crate::domain::types::{TalentChanges, TalentFilter, TalentProfile, TalentWithSocials};
use crate::error::ApiError;

// ── CreateTalent ─────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct CreateTalentInput {
    pub user_id: Uuid,
    pub talent_type: Option<TalentType>,
    pub categories: Option<Value>,
    pub specializations: Option<Value>,
    pub experience_level: Option<ExperienceLevel>,
    pub years_of_experience: Option<i32>,
    pub rate_per_hour: Option<f64>,
    pub rate_per_project: Option<f64>,
    pub rate_per_post: Option<f64>,
    pub currency: Option<String>,
    pub availability_status: Option<AvailabilityStatus>,
    pub portfolio_description: Option<String>,
    pub achievements: Option<String>,
    pub awards: Option<Value>,
    pub certifications: Option<Value>,
    pub collaboration_preferences: Option<Value>,
}

pub struct CreateTalentUseCase<T: TalentRepository> {
    pub talents: T,
}

impl<T: TalentRepository> CreateTalentUseCase<T> {
    pub async fn execute(&self, input: CreateTalentInput) -> Result<TalentProfile, ApiError> {
        let now = Utc::now();
        let talent = TalentProfile {
            id: Uuid::now_v7(),
            user_id: input.user_id,
            talent_type: input.talent_type,
            categories: input.categories.unwrap_or_else(|| Value::Array(vec![])),
            specializations: input.specializations,
            experience_level: input.experience_level,
            years_of_experience: input.years_of_experience,
            rate_per_hour: input.rate_per_hour,
            rate_per_project: input.rate_per_project,
            rate_per_post: input.rate_per_post,
            currency: input
                .currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_owned()),
            availability_status: input.availability_status.unwrap_or_default(),
            portfolio_description: input.portfolio_description,
            achievements: input.achievements,
            awards: input.awards,
            certifications: input.certifications,
            collaboration_preferences: input.collaboration_preferences,
            verify_badge: false,
            created_at: now,
            updated_at: now,
        };
        self.talents.create(&talent).await?;
        Ok(talent)
    }
}

// ── GetTalent ────────────────────────────────────────────────────────────────

pub struct GetTalentUseCase<T: TalentRepository, S: SocialAccountRepository> {
    pub talents: T,
    pub socials: S,
}

impl<T: TalentRepository, S: SocialAccountRepository> GetTalentUseCase<T, S> {
    pub async fn execute(&self, user_id: Uuid) -> Result<TalentWithSocials, ApiError> {
        let talent = self
            .talents
            .find_by_user(user_id)
            .await?
            .ok_or(ApiError::TalentProfileNotFound)?;
        let social_accounts = self.socials.list_by_talent(talent.id).await?;
        Ok(TalentWithSocials {
            talent,
            social_accounts,
        })
    }
}

// ── ListTalents ──────────────────────────────────────────────────────────────

pub struct ListTalentsUseCase<T: TalentRepository> {
    pub talents: T,
}

impl<T: TalentRepository> ListTalentsUseCase<T> {
    pub async fn execute(&self, filter: TalentFilter) -> Result<Vec<TalentProfile>, ApiError> {
        if let (Some(min), Some(max)) = (filter.min_rate, filter.max_rate) {
            if min > max {
                return Err(ApiError::InvalidInput(
                    "min_rate must not exceed max_rate".to_owned(),
                ));
            }
        }
        self.talents.list(&filter).await
    }
}

// ── UpdateTalent ─────────────────────────────────────────────────────────────

pub struct UpdateTalentUseCase<T: TalentRepository> {
    pub talents: T,
}

impl<T: TalentRepository> UpdateTalentUseCase<T> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        changes: TalentChanges,
    ) -> Result<TalentProfile, ApiError> {
        self.talents
            .update(user_id, &changes)
            .await?
            .ok_or(ApiError::TalentProfileNotFound)
    }

    pub async fn availability(
        &self,
        user_id: Uuid,
        status: AvailabilityStatus,
    ) -> Result<TalentProfile, ApiError> {
        self.talents
            .set_availability(user_id, status)
            .await?
            .ok_or(ApiError::TalentProfileNotFound)
    }
}

// ── DeleteTalent ─────────────────────────────────────────────────────────────

pub struct DeleteTalentUseCase<T: TalentRepository> {
    pub talents: T,
}

impl<T: TalentRepository> DeleteTalentUseCase<T> {
    pub async fn execute(&self, user_id: Uuid) -> Result<(), ApiError> {
        if self.talents.delete(user_id).await? {
            Ok(())
        } else {
            Err(ApiError::TalentProfileNotFound)
        }
    }
}
