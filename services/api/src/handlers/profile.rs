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

use crate::domain::types::{ProfileChanges, UserProfile};
use crate::error::ApiError;
use crate::handlers::{parse_query, validated};
use crate::state::AppState;
use crate::usecase::profile::{
    CreateProfileInput, CreateProfileUseCase, DeleteProfileUseCase, GetProfileUseCase,
    SearchProfilesUseCase, UpdateProfileUseCase,
};

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
    pub banner_image_url: Option<String>,
    pub location_city: Option<String>,
    pub location_state: Option<String>,
    pub location_country: Option<String>,
    pub website_url: Option<String>,
    pub languages: Option<Value>,
    pub time_zone: Option<String>,
    #[serde(serialize_with = "kala_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "kala_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<UserProfile> for ProfileResponse {
    fn from(p: UserProfile) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            first_name: p.first_name,
            last_name: p.last_name,
            display_name: p.display_name,
            bio: p.bio,
            profile_image_url: p.profile_image_url,
            banner_image_url: p.banner_image_url,
            location_city: p.location_city,
            location_state: p.location_state,
            location_country: p.location_country,
            website_url: p.website_url,
            languages: p.languages,
            time_zone: p.time_zone,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

// ── POST /profiles ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProfileRequest {
    pub user_id: Uuid,
    #[validate(length(max = 100))]
    pub first_name: Option<String>,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
    #[validate(length(max = 100))]
    pub display_name: Option<String>,
    #[validate(length(max = 1000))]
    pub bio: Option<String>,
    #[validate(url)]
    pub profile_image_url: Option<String>,
    #[validate(url)]
    pub banner_image_url: Option<String>,
    pub location_city: Option<String>,
    pub location_state: Option<String>,
    pub location_country: Option<String>,
    #[validate(url)]
    pub website_url: Option<String>,
    pub languages: Option<Value>,
    pub time_zone: Option<String>,
}

pub async fn create_profile(
    State(state): State<AppState>,
    Json(body): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>), ApiError> {
    let body = validated(body)?;
    let usecase = CreateProfileUseCase {
        profiles: state.profile_repo(),
    };
    let profile = usecase
        .execute(CreateProfileInput {
            user_id: body.user_id,
            first_name: body.first_name,
            last_name: body.last_name,
            display_name: body.display_name,
            bio: body.bio,
            profile_image_url: body.profile_image_url,
            banner_image_url: body.banner_image_url,
            location_city: body.location_city,
            location_state: body.location_state,
            location_country: body.location_country,
            website_url: body.website_url,
            languages: body.languages,
            time_zone: body.time_zone,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(profile.into())))
}

// ── GET /profiles/search ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

pub async fn search_profiles(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<ProfileResponse>>, ApiError> {
    let query: SearchQuery = parse_query(raw_query)?;
    let usecase = SearchProfilesUseCase {
        profiles: state.profile_repo(),
    };
    let profiles = usecase.execute(&query.q).await?;
    Ok(Json(profiles.into_iter().map(Into::into).collect()))
}

// ── GET /profiles/{user_id} ──────────────────────────────────────────────────

pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let usecase = GetProfileUseCase {
        profiles: state.profile_repo(),
    };
    Ok(Json(usecase.execute(user_id).await?.into()))
}

// ── PATCH /profiles/{user_id} ────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 100))]
    pub first_name: Option<String>,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
    #[validate(length(max = 100))]
    pub display_name: Option<String>,
    #[validate(length(max = 1000))]
    pub bio: Option<String>,
    #[validate(url)]
    pub profile_image_url: Option<String>,
    #[validate(url)]
    pub banner_image_url: Option<String>,
    pub location_city: Option<String>,
    pub location_state: Option<String>,
    pub location_country: Option<String>,
    #[validate(url)]
    pub website_url: Option<String>,
    pub languages: Option<Value>,
    pub time_zone: Option<String>,
}

pub async fn update_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let body = validated(body)?;
    let usecase = UpdateProfileUseCase {
        profiles: state.profile_repo(),
    };
    let profile = usecase
        .execute(
            user_id,
            ProfileChanges {
                first_name: body.first_name,
                last_name: body.last_name,
                display_name: body.display_name,
                bio: body.bio,
                profile_image_url: body.profile_image_url,
                banner_image_url: body.banner_image_url,
                location_city: body.location_city,
                location_state: body.location_state,
                location_country: body.location_country,
                website_url: body.website_url,
                languages: body.languages,
                time_zone: body.time_zone,
            },
        )
        .await?;
    Ok(Json(profile.into()))
}

// ── DELETE /profiles/{user_id} ───────────────────────────────────────────────

pub async fn delete_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteProfileUseCase {
        profiles: state.profile_repo(),
    };
    usecase.execute(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
