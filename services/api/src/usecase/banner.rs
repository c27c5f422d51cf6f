use chrono::Utc;
use uuid::Uuid;

use kala_domain::banner::BannerType;

use crate::domain::repository::BannerRepository;
use crate::domain::types::{Banner, BannerChanges};
use crate::error::ApiError;

pub struct CreateBannerInput {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub link: Option<String>,
    pub position: Option<i32>,
    pub banner_type: BannerType,
}

pub struct CreateBannerUseCase<B: BannerRepository> {
    pub banners: B,
}

impl<B: BannerRepository> CreateBannerUseCase<B> {
    pub async fn execute(&self, input: CreateBannerInput) -> Result<Banner, ApiError> {
        let now = Utc::now();
        let banner = Banner {
            id: Uuid::now_v7(),
            title: input.title,
            description: input.description,
            url: input.url,
            link: input.link,
            position: input.position,
            banner_type: input.banner_type,
            created_at: now,
            updated_at: now,
        };
        self.banners.create(&banner).await?;
        Ok(banner)
    }
}

pub struct ListBannersUseCase<B: BannerRepository> {
    pub banners: B,
}

impl<B: BannerRepository> ListBannersUseCase<B> {
    pub async fn execute(&self, banner_type: Option<BannerType>) -> Result<Vec<Banner>, ApiError> {
        self.banners.list(banner_type).await
    }
}

pub struct GetBannerUseCase<B: BannerRepository> {
    pub banners: B,
}

impl<B: BannerRepository> GetBannerUseCase<B> {
    pub async fn execute(&self, id: Uuid) -> Result<Banner, ApiError> {
        self.banners
            .find_by_id(id)
            .await?
            .ok_or(ApiError::BannerNotFound)
    }
}

pub struct UpdateBannerUseCase<B: BannerRepository> {
    pub banners: B,
}

impl<B: BannerRepository> UpdateBannerUseCase<B> {
    pub async fn execute(&self, id: Uuid, changes: BannerChanges) -> Result<Banner, ApiError> {
        self.banners
            .update(id, &changes)
            .await?
            .ok_or(ApiError::BannerNotFound)
    }
}

pub struct DeleteBannerUseCase<B: BannerRepository> {
    pub banners: B,
}

impl<B: BannerRepository> DeleteBannerUseCase<B> {
    pub async fn execute(&self, id: Uuid) -> Result<(), ApiError> {
        if self.banners.delete(id).await? {
            Ok(())
        } else {
            Err(ApiError::BannerNotFound)
        }
    }
}
