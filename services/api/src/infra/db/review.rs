use anyhow::Context as _;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect};
use uuid::Uuid;

use kala_api_schema::reviews;

use crate::domain::repository::ReviewRepository;
use crate::domain::types::RatingSummary;
use crate::error::ApiError;

#[derive(Clone)]
pub struct DbReviewRepository {
    pub db: DatabaseConnection,
}

impl ReviewRepository for DbReviewRepository {
    async fn rating_for(&self, user_id: Uuid) -> Result<RatingSummary, ApiError> {
        let ratings: Vec<i16> = reviews::Entity::find()
            .select_only()
            .column(reviews::Column::Rating)
            .filter(reviews::Column::RevieweeId.eq(user_id))
            .into_tuple()
            .all(&self.db)
            .await
            .context("load review ratings")?;
        Ok(RatingSummary::from_ratings(&ratings))
    }
}
