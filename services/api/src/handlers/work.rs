use axum::{
    Json,
    extract::{Path, RawQuery, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use kala_domain::work::{WorkSampleType, WorkStatus};

use crate::domain::types::{WorkSample, WorkSampleChanges, WorkSampleFilter};
use crate::error::ApiError;
use crate::handlers::{parse_query, parse_segment, validated};
use crate::state::AppState;
use crate::usecase::work::{
    CreateWorkSampleInput, CreateWorkSampleUseCase, DeleteWorkSampleUseCase,
    GetWorkSampleUseCase, ListWorkSamplesUseCase, UpdateWorkSampleUseCase,
};

#[derive(Debug, Serialize)]
pub struct WorkSampleResponse {
    pub id: Uuid,
    pub talent_profile_id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub sample_type: WorkSampleType,
    pub url: String,
    pub status: WorkStatus,
    #[serde(serialize_with = "kala_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "kala_core::serde::to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl From<WorkSample> for WorkSampleResponse {
    fn from(w: WorkSample) -> Self {
        Self {
            id: w.id,
            talent_profile_id: w.talent_profile_id,
            title: w.title,
            sample_type: w.sample_type,
            url: w.url,
            status: w.status,
            created_at: w.created_at,
            updated_at: w.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: u64,
}

fn to_responses(samples: Vec<WorkSample>) -> Json<Vec<WorkSampleResponse>> {
    Json(samples.into_iter().map(Into::into).collect())
}

/// Query filters shared by list and count.
#[derive(Debug, Deserialize, Default)]
pub struct WorkSampleQuery {
    pub talent_profile_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub sample_type: Option<WorkSampleType>,
    pub status: Option<WorkStatus>,
}

impl From<WorkSampleQuery> for WorkSampleFilter {
    fn from(q: WorkSampleQuery) -> Self {
        Self {
            talent_profile_id: q.talent_profile_id,
            sample_type: q.sample_type,
            status: q.status,
        }
    }
}

// ── POST /work-samples ───────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct CreateWorkSampleRequest {
    pub talent_profile_id: Uuid,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[serde(rename = "type")]
    pub sample_type: WorkSampleType,
    #[validate(url, length(max = 500))]
    pub url: String,
}

pub async fn create_work_sample(
    State(state): State<AppState>,
    Json(body): Json<CreateWorkSampleRequest>,
) -> Result<(StatusCode, Json<WorkSampleResponse>), ApiError> {
    let body = validated(body)?;
    let usecase = CreateWorkSampleUseCase {
        samples: state.work_repo(),
        talents: state.talent_repo(),
    };
    let sample = usecase
        .execute(CreateWorkSampleInput {
            talent_profile_id: body.talent_profile_id,
            title: body.title,
            sample_type: body.sample_type,
            url: body.url,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(sample.into())))
}

// ── GET /work-samples ────────────────────────────────────────────────────────

pub async fn list_work_samples(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<WorkSampleResponse>>, ApiError> {
    let query: WorkSampleQuery = parse_query(raw_query)?;
    let usecase = ListWorkSamplesUseCase {
        samples: state.work_repo(),
    };
    Ok(to_responses(usecase.execute(query.into()).await?))
}

// ── GET /work-samples/count ──────────────────────────────────────────────────

pub async fn count_work_samples(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<CountResponse>, ApiError> {
    let query: WorkSampleQuery = parse_query(raw_query)?;
    let usecase = ListWorkSamplesUseCase {
        samples: state.work_repo(),
    };
    let count = usecase.count(query.into()).await?;
    Ok(Json(CountResponse { count }))
}

// ── GET /work-samples/talent/{talent_profile_id} ─────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct ByTalentQuery {
    #[serde(rename = "type")]
    pub sample_type: Option<WorkSampleType>,
}

pub async fn list_by_talent(
    State(state): State<AppState>,
    Path(talent_profile_id): Path<Uuid>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<WorkSampleResponse>>, ApiError> {
    let query: ByTalentQuery = parse_query(raw_query)?;
    let usecase = ListWorkSamplesUseCase {
        samples: state.work_repo(),
    };
    Ok(to_responses(
        usecase
            .by_talent(talent_profile_id, query.sample_type)
            .await?,
    ))
}

// ── GET /work-samples/type/{type} ────────────────────────────────────────────

pub async fn list_by_type(
    State(state): State<AppState>,
    Path(sample_type): Path<String>,
) -> Result<Json<Vec<WorkSampleResponse>>, ApiError> {
    let sample_type: WorkSampleType = parse_segment(&sample_type)?;
    let usecase = ListWorkSamplesUseCase {
        samples: state.work_repo(),
    };
    Ok(to_responses(usecase.by_type(sample_type).await?))
}

// ── GET /work-samples/status/{status} ────────────────────────────────────────

pub async fn list_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<Json<Vec<WorkSampleResponse>>, ApiError> {
    let status: WorkStatus = parse_segment(&status)?;
    let usecase = ListWorkSamplesUseCase {
        samples: state.work_repo(),
    };
    Ok(to_responses(usecase.by_status(status).await?))
}

// ── GET /work-samples/{id} ───────────────────────────────────────────────────

pub async fn get_work_sample(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WorkSampleResponse>, ApiError> {
    let usecase = GetWorkSampleUseCase {
        samples: state.work_repo(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── PATCH /work-samples/{id} ─────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateWorkSampleRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub sample_type: Option<WorkSampleType>,
    #[validate(url, length(max = 500))]
    pub url: Option<String>,
    pub status: Option<WorkStatus>,
}

pub async fn update_work_sample(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateWorkSampleRequest>,
) -> Result<Json<WorkSampleResponse>, ApiError> {
    let body = validated(body)?;
    let usecase = UpdateWorkSampleUseCase {
        samples: state.work_repo(),
    };
    let sample = usecase
        .execute(
            id,
            WorkSampleChanges {
                title: body.title,
                sample_type: body.sample_type,
                url: body.url,
                status: body.status,
            },
        )
        .await?;
    Ok(Json(sample.into()))
}

// ── PATCH /work-samples/{id}/status ──────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: WorkStatus,
}

pub async fn update_work_sample_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<WorkSampleResponse>, ApiError> {
    let usecase = UpdateWorkSampleUseCase {
        samples: state.work_repo(),
    };
    Ok(Json(usecase.status(id, body.status).await?.into()))
}

// ── DELETE /work-samples/{id} ────────────────────────────────────────────────

pub async fn delete_work_sample(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteWorkSampleUseCase {
        samples: state.work_repo(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /work-samples/talent-profile/{talent_profile_id} ──────────────────

pub async fn delete_talent_work_samples(
    State(state): State<AppState>,
    Path(talent_profile_id): Path<Uuid>,
) -> Result<Json<CountResponse>, ApiError> {
    let usecase = DeleteWorkSampleUseCase {
        samples: state.work_repo(),
    };
    let count = usecase.for_talent(talent_profile_id).await?;
    Ok(Json(CountResponse { count }))
}
