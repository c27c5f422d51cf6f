use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use kala_domain::pagination::{Page, PageRequest, Sort};

use crate::domain::types::{
    DEFAULT_USER_TYPE, RatingSummary, User, UserChanges, UserFilter, UserSortBy, UserStats,
};
use crate::error::ApiError;
use crate::handlers::profile::ProfileResponse;
use crate::handlers::social::SocialAccountResponse;
use crate::handlers::talent::TalentResponse;
use crate::handlers::{parse_query, validated};
use crate::state::AppState;
use crate::usecase::user::{
    CreateUserInput, CreateUserUseCase, DeactivateUserUseCase, DeleteUserUseCase,
    GetTalentViewUseCase, GetUserUseCase, ListUsersUseCase, UpdateUserUseCase, UserStatsUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

/// Public view of an account. The password hash is never serialized.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub phone: Option<String>,
    pub user_type: String,
    pub is_premium: bool,
    #[serde(serialize_with = "kala_core::serde::to_rfc3339_ms_opt")]
    pub premium_expires_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub email_verified: bool,
    pub phone_verified: bool,
    #[serde(serialize_with = "kala_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "kala_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
    #[serde(serialize_with = "kala_core::serde::to_rfc3339_ms_opt")]
    pub last_login: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            phone: u.phone,
            user_type: u.user_type,
            is_premium: u.is_premium,
            premium_expires_at: u.premium_expires_at,
            is_active: u.is_active,
            email_verified: u.email_verified,
            phone_verified: u.phone_verified,
            created_at: u.created_at,
            updated_at: u.updated_at,
            last_login: u.last_login,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserTypeCountResponse {
    pub user_type: String,
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct UserStatsResponse {
    pub total: u64,
    pub active: u64,
    pub premium: u64,
    pub inactive: u64,
    pub by_type: Vec<UserTypeCountResponse>,
}

impl From<UserStats> for UserStatsResponse {
    fn from(s: UserStats) -> Self {
        Self {
            total: s.total,
            active: s.active,
            premium: s.premium,
            inactive: s.inactive,
            by_type: s
                .by_type
                .into_iter()
                .map(|c| UserTypeCountResponse {
                    user_type: c.user_type,
                    count: c.count,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RatingResponse {
    pub average: f64,
    pub count: u64,
}

impl From<RatingSummary> for RatingResponse {
    fn from(r: RatingSummary) -> Self {
        Self {
            average: r.average,
            count: r.count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TalentViewResponse {
    pub user: UserResponse,
    pub profile: Option<ProfileResponse>,
    pub talent: Option<TalentResponse>,
    pub social_accounts: Vec<SocialAccountResponse>,
    pub rating: RatingResponse,
}

// ── POST /users ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 32))]
    pub user_type: Option<String>,
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let body = validated(body)?;
    let usecase = CreateUserUseCase {
        users: state.user_repo(),
        hasher: state.hasher(),
    };
    let user = usecase
        .execute(CreateUserInput {
            email: body.email,
            password: body.password,
            phone: body.phone,
            user_type: body
                .user_type
                .unwrap_or_else(|| DEFAULT_USER_TYPE.to_owned()),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

// ── GET /users ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct UserListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub user_type: Option<String>,
    pub is_premium: Option<bool>,
    pub is_active: Option<bool>,
    pub email_verified: Option<bool>,
    pub sort_by: Option<String>,
    pub sort_order: Option<Sort>,
}

impl From<UserListQuery> for UserFilter {
    fn from(q: UserListQuery) -> Self {
        let defaults = PageRequest::default();
        Self {
            search: q.search,
            user_type: q.user_type,
            is_premium: q.is_premium,
            is_active: q.is_active,
            email_verified: q.email_verified,
            sort_by: UserSortBy::from_parts(q.sort_by.as_deref(), q.sort_order.unwrap_or_default()),
            page: PageRequest {
                limit: q.limit.unwrap_or(defaults.limit),
                page: q.page.unwrap_or(defaults.page),
            },
        }
    }
}

pub async fn list_users(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Page<UserResponse>>, ApiError> {
    let query: UserListQuery = parse_query(raw_query)?;
    let usecase = ListUsersUseCase {
        users: state.user_repo(),
    };
    let page = usecase.execute(query.into()).await?;
    Ok(Json(page.map(UserResponse::from)))
}

// ── GET /users/stats/summary ─────────────────────────────────────────────────

pub async fn user_stats(
    State(state): State<AppState>,
) -> Result<Json<UserStatsResponse>, ApiError> {
    let usecase = UserStatsUseCase {
        users: state.user_repo(),
    };
    Ok(Json(usecase.execute().await?.into()))
}

// ── GET /users/{id} ──────────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let usecase = GetUserUseCase {
        users: state.user_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── GET /users/{id}/talent-view ──────────────────────────────────────────────

pub async fn get_talent_view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TalentViewResponse>, ApiError> {
    let usecase = GetTalentViewUseCase {
        users: state.user_repo(),
        profiles: state.profile_repo(),
        talents: state.talent_repo(),
        socials: state.social_repo(),
        reviews: state.review_repo(),
    };
    let view = usecase.execute(id).await?;
    Ok(Json(TalentViewResponse {
        user: view.user.into(),
        profile: view.profile.map(Into::into),
        talent: view.talent.map(Into::into),
        social_accounts: view.social_accounts.into_iter().map(Into::into).collect(),
        rating: view.rating.into(),
    }))
}

// ── PATCH /users/{id} ────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 32))]
    pub user_type: Option<String>,
    pub is_premium: Option<bool>,
    pub premium_expires_at: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
    pub email_verified: Option<bool>,
    pub phone_verified: Option<bool>,
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let body = validated(body)?;
    let usecase = UpdateUserUseCase {
        users: state.user_repo(),
    };
    let user = usecase
        .execute(
            id,
            UserChanges {
                email: body.email,
                phone: body.phone,
                user_type: body.user_type,
                is_premium: body.is_premium,
                premium_expires_at: body.premium_expires_at,
                is_active: body.is_active,
                email_verified: body.email_verified,
                phone_verified: body.phone_verified,
            },
        )
        .await?;
    Ok(Json(user.into()))
}

// ── DELETE /users/soft/{id} ──────────────────────────────────────────────────

pub async fn deactivate_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let usecase = DeactivateUserUseCase {
        users: state.user_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── DELETE /users/hard/{id} ──────────────────────────────────────────────────

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteUserUseCase {
        users: state.user_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
