use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use validator::Validate;

use kala_auth_types::identity::Identity;

use crate::domain::types::DEFAULT_USER_TYPE;
use crate::error::ApiError;
use crate::handlers::user::UserResponse;
use crate::handlers::validated;
use crate::state::AppState;
use crate::usecase::auth::{
    AuthSession, LoginInput, LoginUseCase, RegisterInput, RegisterUseCase, UpdatePasswordUseCase,
};
use crate::usecase::user::GetUserUseCase;

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

impl From<AuthSession> for AuthResponse {
    fn from(s: AuthSession) -> Self {
        Self {
            user: s.user.into(),
            token: s.token,
        }
    }
}

// ── POST /auth/register ──────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(length(min = 1, max = 32))]
    pub user_type: Option<String>,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let body = validated(body)?;
    let usecase = RegisterUseCase {
        users: state.user_repo(),
        hasher: state.hasher(),
        jwt_secret: state.jwt_secret.as_str().to_owned(),
    };
    let session = usecase
        .execute(RegisterInput {
            email: body.email,
            password: body.password,
            user_type: body
                .user_type
                .unwrap_or_else(|| DEFAULT_USER_TYPE.to_owned()),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(session.into())))
}

// ── POST /auth/login ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let body = validated(body)?;
    let usecase = LoginUseCase {
        users: state.user_repo(),
        hasher: state.hasher(),
        jwt_secret: state.jwt_secret.as_str().to_owned(),
    };
    let session = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(session.into()))
}

// ── PATCH /auth/password ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 8))]
    pub password: String,
}

pub async fn update_password(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<UpdatePasswordRequest>,
) -> Result<StatusCode, ApiError> {
    let body = validated(body)?;
    let usecase = UpdatePasswordUseCase {
        users: state.user_repo(),
        hasher: state.hasher(),
    };
    usecase.execute(identity.user_id, &body.password).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /auth/profile ────────────────────────────────────────────────────────

pub async fn me(
    identity: Identity,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, ApiError> {
    let usecase = GetUserUseCase {
        users: state.user_repo(),
    };
    Ok(Json(usecase.execute(identity.user_id).await?.into()))
}
