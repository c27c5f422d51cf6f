use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use kala_auth_types::identity::Identity;
use kala_domain::talent::{AvailabilityStatus, ExperienceLevel, TalentType};

use crate::domain::types::{TalentChanges, TalentFilter, TalentProfile};
use crate::error::ApiError;
use crate::handlers::social::SocialAccountResponse;
use crate::handlers::{parse_query, validated};
use crate::state::AppState;
use crate::usecase::talent::{
    CreateTalentInput, CreateTalentUseCase, DeleteTalentUseCase, GetTalentUseCase,
    ListTalentsUseCase, UpdateTalentUseCase,
};

#[derive(Debug, Serialize)]
pub struct TalentResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub talent_type: Option<TalentType>,
    pub categories: Value,
    pub specializations: Option<Value>,
    pub experience_level: Option<ExperienceLevel>,
    pub years_of_experience: Option<i32>,
    pub rate_per_hour: Option<f64>,
    pub rate_per_project: Option<f64>,
    pub rate_per_post: Option<f64>,
    pub currency: String,
    pub availability_status: AvailabilityStatus,
    pub portfolio_description: Option<String>,
    pub achievements: Option<String>,
    pub awards: Option<Value>,
    pub certifications: Option<Value>,
    pub collaboration_preferences: Option<Value>,
    pub verify_badge: bool,
    #[serde(serialize_with = "kala_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "kala_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<TalentProfile> for TalentResponse {
    fn from(t: TalentProfile) -> Self {
        Self {
            id: t.id,
            user_id: t.user_id,
            talent_type: t.talent_type,
            categories: t.categories,
            specializations: t.specializations,
            experience_level: t.experience_level,
            years_of_experience: t.years_of_experience,
            rate_per_hour: t.rate_per_hour,
            rate_per_project: t.rate_per_project,
            rate_per_post: t.rate_per_post,
            currency: t.currency,
            availability_status: t.availability_status,
            portfolio_description: t.portfolio_description,
            achievements: t.achievements,
            awards: t.awards,
            certifications: t.certifications,
            collaboration_preferences: t.collaboration_preferences,
            verify_badge: t.verify_badge,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TalentDetailResponse {
    #[serde(flatten)]
    pub talent: TalentResponse,
    pub social_accounts: Vec<SocialAccountResponse>,
}

// ── POST /talents ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTalentRequest {
    pub user_id: Uuid,
    pub talent_type: Option<TalentType>,
    pub categories: Option<Value>,
    pub specializations: Option<Value>,
    pub experience_level: Option<ExperienceLevel>,
    #[validate(range(min = 0, max = 80))]
    pub years_of_experience: Option<i32>,
    #[validate(range(min = 0.0))]
    pub rate_per_hour: Option<f64>,
    #[validate(range(min = 0.0))]
    pub rate_per_project: Option<f64>,
    #[validate(range(min = 0.0))]
    pub rate_per_post: Option<f64>,
    #[validate(length(equal = 3))]
    pub currency: Option<String>,
    pub availability_status: Option<AvailabilityStatus>,
    pub portfolio_description: Option<String>,
    pub achievements: Option<String>,
    pub awards: Option<Value>,
    pub certifications: Option<Value>,
    pub collaboration_preferences: Option<Value>,
}

pub async fn create_talent(
    _identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateTalentRequest>,
) -> Result<(StatusCode, Json<TalentResponse>), ApiError> {
    let body = validated(body)?;
    let usecase = CreateTalentUseCase {
        talents: state.talent_repo(),
    };
    let talent = usecase
        .execute(CreateTalentInput {
            user_id: body.user_id,
            talent_type: body.talent_type,
            categories: body.categories,
            specializations: body.specializations,
            experience_level: body.experience_level,
            years_of_experience: body.years_of_experience,
            rate_per_hour: body.rate_per_hour,
            rate_per_project: body.rate_per_project,
            rate_per_post: body.rate_per_post,
            currency: body.currency,
            availability_status: body.availability_status,
            portfolio_description: body.portfolio_description,
            achievements: body.achievements,
            awards: body.awards,
            certifications: body.certifications,
            collaboration_preferences: body.collaboration_preferences,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(talent.into())))
}

// ── GET /talents ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct TalentListQuery {
    pub talent_type: Option<TalentType>,
    pub experience_level: Option<ExperienceLevel>,
    pub availability_status: Option<AvailabilityStatus>,
    pub min_rate: Option<f64>,
    pub max_rate: Option<f64>,
}

pub async fn list_talents(
    _identity: Identity,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<TalentResponse>>, ApiError> {
    let query: TalentListQuery = parse_query(raw_query)?;
    let usecase = ListTalentsUseCase {
        talents: state.talent_repo(),
    };
    let talents = usecase
        .execute(TalentFilter {
            talent_type: query.talent_type,
            experience_level: query.experience_level,
            availability_status: query.availability_status,
            min_rate: query.min_rate,
            max_rate: query.max_rate,
        })
        .await?;
    Ok(Json(talents.into_iter().map(Into::into).collect()))
}

// ── GET /talents/{user_id} ───────────────────────────────────────────────────

pub async fn get_talent(
    _identity: Identity,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<TalentDetailResponse>, ApiError> {
    let usecase = GetTalentUseCase {
        talents: state.talent_repo(),
        socials: state.social_repo(),
    };
    let found = usecase.execute(user_id).await?;
    Ok(Json(TalentDetailResponse {
        talent: found.talent.into(),
        social_accounts: found.social_accounts.into_iter().map(Into::into).collect(),
    }))
}

// ── PATCH /talents/{user_id} ─────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTalentRequest {
    pub talent_type: Option<TalentType>,
    pub categories: Option<Value>,
    pub specializations: Option<Value>,
    pub experience_level: Option<ExperienceLevel>,
    #[validate(range(min = 0, max = 80))]
    pub years_of_experience: Option<i32>,
    #[validate(range(min = 0.0))]
    pub rate_per_hour: Option<f64>,
    #[validate(range(min = 0.0))]
    pub rate_per_project: Option<f64>,
    #[validate(range(min = 0.0))]
    pub rate_per_post: Option<f64>,
    #[validate(length(equal = 3))]
    pub currency: Option<String>,
    pub availability_status: Option<AvailabilityStatus>,
    pub portfolio_description: Option<String>,
    pub achievements: Option<String>,
    pub awards: Option<Value>,
    pub certifications: Option<Value>,
    pub collaboration_preferences: Option<Value>,
}

pub async fn update_talent(
    _identity: Identity,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<UpdateTalentRequest>,
) -> Result<Json<TalentResponse>, ApiError> {
    let body = validated(body)?;
    let usecase = UpdateTalentUseCase {
        talents: state.talent_repo(),
    };
    let talent = usecase
        .execute(
            user_id,
            TalentChanges {
                talent_type: body.talent_type,
                categories: body.categories,
                specializations: body.specializations,
                experience_level: body.experience_level,
                years_of_experience: body.years_of_experience,
                rate_per_hour: body.rate_per_hour,
                rate_per_project: body.rate_per_project,
                rate_per_post: body.rate_per_post,
                currency: body.currency,
                availability_status: body.availability_status,
                portfolio_description: body.portfolio_description,
                achievements: body.achievements,
                awards: body.awards,
                certifications: body.certifications,
                collaboration_preferences: body.collaboration_preferences,
            },
        )
        .await?;
    Ok(Json(talent.into()))
}

// ── PATCH /talents/{user_id}/availability ────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AvailabilityRequest {
    pub availability_status: AvailabilityStatus,
}

pub async fn update_availability(
    _identity: Identity,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<AvailabilityRequest>,
) -> Result<Json<TalentResponse>, ApiError> {
    let usecase = UpdateTalentUseCase {
        talents: state.talent_repo(),
    };
    let talent = usecase
        .availability(user_id, body.availability_status)
        .await?;
    Ok(Json(talent.into()))
}

// ── DELETE /talents/{user_id} ────────────────────────────────────────────────

pub async fn delete_talent(
    _identity: Identity,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteTalentUseCase {
        talents: state.talent_repo(),
    };
    usecase.execute(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
