use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use kala_domain::banner::BannerType;

use crate::domain::types::{Banner, BannerChanges};
use crate::error::ApiError;
use crate::handlers::{parse_query, validated};
use crate::state::AppState;
use crate::usecase::banner::{
    CreateBannerInput, CreateBannerUseCase, DeleteBannerUseCase, GetBannerUseCase,
    ListBannersUseCase, UpdateBannerUseCase,
};

#[derive(Debug, Serialize)]
pub struct BannerResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub link: Option<String>,
    pub position: Option<i32>,
    #[serde(rename = "type")]
    pub banner_type: BannerType,
    #[serde(serialize_with = "kala_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "kala_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<Banner> for BannerResponse {
    fn from(b: Banner) -> Self {
        Self {
            id: b.id,
            title: b.title,
            description: b.description,
            url: b.url,
            link: b.link,
            position: b.position,
            banner_type: b.banner_type,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBannerRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub description: Option<String>,
    #[validate(url)]
    pub url: String,
    #[validate(url)]
    pub link: Option<String>,
    pub position: Option<i32>,
    #[serde(rename = "type")]
    pub banner_type: BannerType,
}

pub async fn create_banner(
    State(state): State<AppState>,
    Json(body): Json<CreateBannerRequest>,
) -> Result<(StatusCode, Json<BannerResponse>), ApiError> {
    let body = validated(body)?;
    let usecase = CreateBannerUseCase {
        banners: state.banner_repo(),
    };
    let banner = usecase
        .execute(CreateBannerInput {
            title: body.title,
            description: body.description,
            url: body.url,
            link: body.link,
            position: body.position,
            banner_type: body.banner_type,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(banner.into())))
}

#[derive(Debug, Deserialize, Default)]
pub struct BannerListQuery {
    #[serde(rename = "type")]
    pub banner_type: Option<BannerType>,
}

pub async fn list_banners(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<BannerResponse>>, ApiError> {
    let query: BannerListQuery = parse_query(raw_query)?;
    let usecase = ListBannersUseCase {
        banners: state.banner_repo(),
    };
    let banners = usecase.execute(query.banner_type).await?;
    Ok(Json(banners.into_iter().map(Into::into).collect()))
}

pub async fn get_banner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BannerResponse>, ApiError> {
    let usecase = GetBannerUseCase {
        banners: state.banner_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBannerRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(url)]
    pub url: Option<String>,
    #[validate(url)]
    pub link: Option<String>,
    pub position: Option<i32>,
    #[serde(rename = "type")]
    pub banner_type: Option<BannerType>,
}

pub async fn update_banner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateBannerRequest>,
) -> Result<Json<BannerResponse>, ApiError> {
    let body = validated(body)?;
    let usecase = UpdateBannerUseCase {
        banners: state.banner_repo(),
    };
    let banner = usecase
        .execute(
            id,
            BannerChanges {
                title: body.title,
                description: body.description,
                url: body.url,
                link: body.link,
                position: body.position,
                banner_type: body.banner_type,
            },
        )
        .await?;
    Ok(Json(banner.into()))
}

pub async fn delete_banner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteBannerUseCase {
        banners: state.banner_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
