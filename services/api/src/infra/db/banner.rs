use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel as _, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use kala_api_schema::banners;
use kala_domain::banner::BannerType;

use crate::domain::repository::BannerRepository;
use crate::domain::types::{Banner, BannerChanges};
use crate::error::ApiError;
use crate::infra::db::parse_column;

#[derive(Clone)]
pub struct DbBannerRepository {
    pub db: DatabaseConnection,
}

impl BannerRepository for DbBannerRepository {
    async fn create(&self, banner: &Banner) -> Result<(), ApiError> {
        banners::ActiveModel {
            id: Set(banner.id),
            title: Set(banner.title.clone()),
            description: Set(banner.description.clone()),
            url: Set(banner.url.clone()),
            link: Set(banner.link.clone()),
            position: Set(banner.position),
            banner_type: Set(banner.banner_type.as_str().to_owned()),
            created_at: Set(banner.created_at),
            updated_at: Set(banner.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create banner")?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Banner>, ApiError> {
        let model = banners::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find banner")?;
        model.map(banner_from_model).transpose()
    }

    async fn list(&self, banner_type: Option<BannerType>) -> Result<Vec<Banner>, ApiError> {
        let mut query = banners::Entity::find();
        if let Some(t) = banner_type {
            query = query.filter(banners::Column::BannerType.eq(t.as_str()));
        }
        let models = query
            .order_by_desc(banners::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list banners")?;
        models.into_iter().map(banner_from_model).collect()
    }

    async fn update(&self, id: Uuid, changes: &BannerChanges) -> Result<Option<Banner>, ApiError> {
        let Some(row) = banners::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find banner for update")?
        else {
            return Ok(None);
        };

        let mut am = row.into_active_model();
        if let Some(v) = &changes.title {
            am.title = Set(v.clone());
        }
        if let Some(v) = &changes.description {
            am.description = Set(Some(v.clone()));
        }
        if let Some(v) = &changes.url {
            am.url = Set(v.clone());
        }
        if let Some(v) = &changes.link {
            am.link = Set(Some(v.clone()));
        }
        if let Some(v) = changes.position {
            am.position = Set(Some(v));
        }
        if let Some(v) = changes.banner_type {
            am.banner_type = Set(v.as_str().to_owned());
        }
        am.updated_at = Set(Utc::now());

        let model = am.update(&self.db).await.context("update banner")?;
        banner_from_model(model).map(Some)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = banners::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete banner")?;
        Ok(result.rows_affected > 0)
    }
}

fn banner_from_model(model: banners::Model) -> Result<Banner, ApiError> {
    Ok(Banner {
        id: model.id,
        title: model.title,
        description: model.description,
        url: model.url,
        link: model.link,
        position: model.position,
        banner_type: parse_column(&model.banner_type, "banner type")?,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
