use chrono::Utc;
use uuid::Uuid;

use kala_domain::work::{WorkSampleType, WorkStatus};

use crate::domain::repository::{TalentRepository, WorkSampleRepository};
use crate::domain::types::{WorkSample, WorkSampleChanges, WorkSampleFilter};
use crate::error::ApiError;

// ── CreateWorkSample ─────────────────────────────────────────────────────────

pub struct CreateWorkSampleInput {
    pub talent_profile_id: Uuid,
    pub title: String,
    pub sample_type: WorkSampleType,
    pub url: String,
}

pub struct CreateWorkSampleUseCase<W: WorkSampleRepository, T: TalentRepository> {
    pub samples: W,
    pub talents: T,
}

impl<W: WorkSampleRepository, T: TalentRepository> CreateWorkSampleUseCase<W, T> {
    pub async fn execute(&self, input: CreateWorkSampleInput) -> Result<WorkSample, ApiError> {
        if self
            .talents
            .find_by_id(input.talent_profile_id)
            .await?
            .is_none()
        {
            return Err(ApiError::TalentProfileNotFound);
        }
        let now = Utc::now();
        let sample = WorkSample {
            id: Uuid::now_v7(),
            talent_profile_id: input.talent_profile_id,
            title: input.title,
            sample_type: input.sample_type,
            url: input.url,
            status: WorkStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        self.samples.create(&sample).await?;
        Ok(sample)
    }
}

// ── ListWorkSamples ──────────────────────────────────────────────────────────

/// Listing, counting and the by-talent / by-type / by-status shortcuts all
/// go through one filter.
pub struct ListWorkSamplesUseCase<W: WorkSampleRepository> {
    pub samples: W,
}

impl<W: WorkSampleRepository> ListWorkSamplesUseCase<W> {
    pub async fn execute(&self, filter: WorkSampleFilter) -> Result<Vec<WorkSample>, ApiError> {
        self.samples.list(&filter).await
    }

    pub async fn count(&self, filter: WorkSampleFilter) -> Result<u64, ApiError> {
        self.samples.count(&filter).await
    }

    pub async fn by_talent(
        &self,
        talent_profile_id: Uuid,
        sample_type: Option<WorkSampleType>,
    ) -> Result<Vec<WorkSample>, ApiError> {
        self.execute(WorkSampleFilter {
            talent_profile_id: Some(talent_profile_id),
            sample_type,
            status: None,
        })
        .await
    }

    pub async fn by_type(&self, sample_type: WorkSampleType) -> Result<Vec<WorkSample>, ApiError> {
        self.execute(WorkSampleFilter {
            sample_type: Some(sample_type),
            ..Default::default()
        })
        .await
    }

    pub async fn by_status(&self, status: WorkStatus) -> Result<Vec<WorkSample>, ApiError> {
        self.execute(WorkSampleFilter {
            status: Some(status),
            ..Default::default()
        })
        .await
    }
}

// ── GetWorkSample ────────────────────────────────────────────────────────────

pub struct GetWorkSampleUseCase<W: WorkSampleRepository> {
    pub samples: W,
}

impl<W: WorkSampleRepository> GetWorkSampleUseCase<W> {
    pub async fn execute(&self, id: Uuid) -> Result<WorkSample, ApiError> {
        self.samples
            .find_by_id(id)
            .await?
            .ok_or(ApiError::WorkSampleNotFound)
    }
}

// ── UpdateWorkSample ─────────────────────────────────────────────────────────

pub struct UpdateWorkSampleUseCase<W: WorkSampleRepository> {
    pub samples: W,
}

impl<W: WorkSampleRepository> UpdateWorkSampleUseCase<W> {
    pub async fn execute(
        &self,
        id: Uuid,
        changes: WorkSampleChanges,
    ) -> Result<WorkSample, ApiError> {
        self.samples
            .update(id, &changes)
            .await?
            .ok_or(ApiError::WorkSampleNotFound)
    }

    pub async fn status(&self, id: Uuid, status: WorkStatus) -> Result<WorkSample, ApiError> {
        self.samples
            .set_status(id, status)
            .await?
            .ok_or(ApiError::WorkSampleNotFound)
    }
}

// ── DeleteWorkSample ─────────────────────────────────────────────────────────

pub struct DeleteWorkSampleUseCase<W: WorkSampleRepository> {
    pub samples: W,
}

impl<W: WorkSampleRepository> DeleteWorkSampleUseCase<W> {
    pub async fn execute(&self, id: Uuid) -> Result<(), ApiError> {
        if self.samples.delete(id).await? {
            Ok(())
        } else {
            Err(ApiError::WorkSampleNotFound)
        }
    }

    /// Remove every sample of a talent profile. Returns how many were deleted.
    pub async fn for_talent(&self, talent_profile_id: Uuid) -> Result<u64, ApiError> {
        self.samples.delete_by_talent(talent_profile_id).await
    }
}
