use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use kala_domain::social::Platform;

use crate::domain::types::{SocialAccount, SocialAccountChanges};
use crate::error::ApiError;
use crate::handlers::{parse_segment, validated};
use crate::state::AppState;
use crate::usecase::social::{
    CreateSocialAccountInput, CreateSocialAccountUseCase, DeleteSocialAccountUseCase,
    GetSocialAccountUseCase, ListSocialAccountsUseCase, SetPrimarySocialAccountUseCase,
    UpdateSocialAccountUseCase,
};

#[derive(Debug, Serialize)]
pub struct SocialAccountResponse {
    pub id: Uuid,
    pub talent_profile_id: Uuid,
    pub platform: Platform,
    pub handle: String,
    pub profile_url: String,
    pub followers_count: i64,
    pub engagement_rate: Option<f64>,
    pub is_verified: bool,
    pub is_primary: bool,
    #[serde(serialize_with = "kala_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "kala_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<SocialAccount> for SocialAccountResponse {
    fn from(a: SocialAccount) -> Self {
        Self {
            id: a.id,
            talent_profile_id: a.talent_profile_id,
            platform: a.platform,
            handle: a.handle,
            profile_url: a.profile_url,
            followers_count: a.followers_count,
            engagement_rate: a.engagement_rate,
            is_verified: a.is_verified,
            is_primary: a.is_primary,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

fn to_responses(accounts: Vec<SocialAccount>) -> Json<Vec<SocialAccountResponse>> {
    Json(accounts.into_iter().map(Into::into).collect())
}

// ── POST /socials ────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct CreateSocialAccountRequest {
    pub talent_profile_id: Uuid,
    pub platform: Platform,
    #[validate(length(min = 1, max = 100))]
    pub handle: String,
    #[validate(url)]
    pub profile_url: String,
    #[validate(range(min = 0))]
    pub followers_count: Option<i64>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub engagement_rate: Option<f64>,
    pub is_verified: Option<bool>,
    pub is_primary: Option<bool>,
}

pub async fn create_social_account(
    State(state): State<AppState>,
    Json(body): Json<CreateSocialAccountRequest>,
) -> Result<(StatusCode, Json<SocialAccountResponse>), ApiError> {
    let body = validated(body)?;
    let usecase = CreateSocialAccountUseCase {
        socials: state.social_repo(),
        talents: state.talent_repo(),
    };
    let account = usecase
        .execute(CreateSocialAccountInput {
            talent_profile_id: body.talent_profile_id,
            platform: body.platform,
            handle: body.handle,
            profile_url: body.profile_url,
            followers_count: body.followers_count,
            engagement_rate: body.engagement_rate,
            is_verified: body.is_verified,
            is_primary: body.is_primary,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(account.into())))
}

// ── GET /socials/talent/{talent_profile_id} ──────────────────────────────────

pub async fn list_social_accounts(
    State(state): State<AppState>,
    Path(talent_profile_id): Path<Uuid>,
) -> Result<Json<Vec<SocialAccountResponse>>, ApiError> {
    let usecase = ListSocialAccountsUseCase {
        socials: state.social_repo(),
    };
    Ok(to_responses(usecase.execute(talent_profile_id).await?))
}

// ── GET /socials/talent/{talent_profile_id}/platform/{platform} ──────────────

pub async fn list_social_accounts_by_platform(
    State(state): State<AppState>,
    Path((talent_profile_id, platform)): Path<(Uuid, String)>,
) -> Result<Json<Vec<SocialAccountResponse>>, ApiError> {
    let platform: Platform = parse_segment(&platform)?;
    let usecase = ListSocialAccountsUseCase {
        socials: state.social_repo(),
    };
    Ok(to_responses(
        usecase.by_platform(talent_profile_id, platform).await?,
    ))
}

// ── GET /socials/{id} ────────────────────────────────────────────────────────

pub async fn get_social_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SocialAccountResponse>, ApiError> {
    let usecase = GetSocialAccountUseCase {
        socials: state.social_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── PATCH /socials/{id} ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSocialAccountRequest {
    #[validate(length(min = 1, max = 100))]
    pub handle: Option<String>,
    #[validate(url)]
    pub profile_url: Option<String>,
    #[validate(range(min = 0))]
    pub followers_count: Option<i64>,
    #[validate(range(min = 0.0, max = 100.0))]
    pub engagement_rate: Option<f64>,
    pub is_verified: Option<bool>,
    pub is_primary: Option<bool>,
}

pub async fn update_social_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateSocialAccountRequest>,
) -> Result<Json<SocialAccountResponse>, ApiError> {
    let body = validated(body)?;
    let usecase = UpdateSocialAccountUseCase {
        socials: state.social_repo(),
    };
    let account = usecase
        .execute(
            id,
            SocialAccountChanges {
                handle: body.handle,
                profile_url: body.profile_url,
                followers_count: body.followers_count,
                engagement_rate: body.engagement_rate,
                is_verified: body.is_verified,
                is_primary: body.is_primary,
            },
        )
        .await?;
    Ok(Json(account.into()))
}

// ── PATCH /socials/{id}/set-primary ──────────────────────────────────────────

pub async fn set_primary_social_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SocialAccountResponse>, ApiError> {
    let usecase = SetPrimarySocialAccountUseCase {
        socials: state.social_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── DELETE /socials/{id} ─────────────────────────────────────────────────────

pub async fn delete_social_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteSocialAccountUseCase {
        socials: state.social_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
