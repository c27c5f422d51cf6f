use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel as _, PaginatorTrait, QueryFilter, QueryOrder, Select,
};
use uuid::Uuid;

use kala_api_schema::work_samples;
use kala_domain::work::WorkStatus;

use crate::domain::repository::WorkSampleRepository;
use crate::domain::types::{WorkSample, WorkSampleChanges, WorkSampleFilter};
use crate::error::ApiError;
use crate::infra::db::parse_column;

#[derive(Clone)]
pub struct DbWorkSampleRepository {
    pub db: DatabaseConnection,
}

fn filtered(filter: &WorkSampleFilter) -> Select<work_samples::Entity> {
    let mut query = work_samples::Entity::find();
    if let Some(id) = filter.talent_profile_id {
        query = query.filter(work_samples::Column::TalentProfileId.eq(id));
    }
    if let Some(t) = filter.sample_type {
        query = query.filter(work_samples::Column::SampleType.eq(t.as_str()));
    }
    if let Some(s) = filter.status {
        query = query.filter(work_samples::Column::Status.eq(s.as_str()));
    }
    query
}

impl WorkSampleRepository for DbWorkSampleRepository {
    async fn create(&self, sample: &WorkSample) -> Result<(), ApiError> {
        work_samples::ActiveModel {
            id: Set(sample.id),
            talent_profile_id: Set(sample.talent_profile_id),
            title: Set(sample.title.clone()),
            sample_type: Set(sample.sample_type.as_str().to_owned()),
            url: Set(sample.url.clone()),
            status: Set(sample.status.as_str().to_owned()),
            created_at: Set(sample.created_at),
            updated_at: Set(sample.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create work sample")?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<WorkSample>, ApiError> {
        let model = work_samples::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find work sample")?;
        model.map(sample_from_model).transpose()
    }

    async fn list(&self, filter: &WorkSampleFilter) -> Result<Vec<WorkSample>, ApiError> {
        let models = filtered(filter)
            .order_by_desc(work_samples::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list work samples")?;
        models.into_iter().map(sample_from_model).collect()
    }

    async fn count(&self, filter: &WorkSampleFilter) -> Result<u64, ApiError> {
        let count = filtered(filter)
            .count(&self.db)
            .await
            .context("count work samples")?;
        Ok(count)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &WorkSampleChanges,
    ) -> Result<Option<WorkSample>, ApiError> {
        let Some(row) = work_samples::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find work sample for update")?
        else {
            return Ok(None);
        };

        let mut am = row.into_active_model();
        if let Some(v) = &changes.title {
            am.title = Set(v.clone());
        }
        if let Some(v) = changes.sample_type {
            am.sample_type = Set(v.as_str().to_owned());
        }
        if let Some(v) = &changes.url {
            am.url = Set(v.clone());
        }
        if let Some(v) = changes.status {
            am.status = Set(v.as_str().to_owned());
        }
        am.updated_at = Set(Utc::now());

        let model = am.update(&self.db).await.context("update work sample")?;
        sample_from_model(model).map(Some)
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: WorkStatus,
    ) -> Result<Option<WorkSample>, ApiError> {
        self.update(
            id,
            &WorkSampleChanges {
                status: Some(status),
                ..Default::default()
            },
        )
        .await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = work_samples::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete work sample")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_by_talent(&self, talent_profile_id: Uuid) -> Result<u64, ApiError> {
        let result = work_samples::Entity::delete_many()
            .filter(work_samples::Column::TalentProfileId.eq(talent_profile_id))
            .exec(&self.db)
            .await
            .context("delete work samples for talent")?;
        Ok(result.rows_affected)
    }
}

fn sample_from_model(model: work_samples::Model) -> Result<WorkSample, ApiError> {
    Ok(WorkSample {
        id: model.id,
        talent_profile_id: model.talent_profile_id,
        title: model.title,
        sample_type: parse_column(&model.sample_type, "work sample type")?,
        url: model.url,
        status: parse_column(&model.status, "work sample status")?,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
