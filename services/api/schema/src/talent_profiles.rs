use sea_orm::entity::prelude::*;

/// Marketplace listing for a user offering services.
///
/// Enum-like columns (`talent_type`, `experience_level`,
/// `availability_status`) hold the lowercase wire strings.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "talent_profiles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub user_id: Uuid,
    pub talent_type: Option<String>,
    pub categories: Json,
    pub specializations: Option<Json>,
    pub experience_level: Option<String>,
    pub years_of_experience: Option<i32>,
    pub rate_per_hour: Option<f64>,
    pub rate_per_project: Option<f64>,
    pub rate_per_post: Option<f64>,
    pub currency: String,
    pub availability_status: String,
    pub portfolio_description: Option<String>,
    pub achievements: Option<String>,
    pub awards: Option<Json>,
    pub certifications: Option<Json>,
    pub collaboration_preferences: Option<Json>,
    pub verify_badge: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::talent_social_accounts::Entity")]
    SocialAccounts,
    #[sea_orm(has_many = "super::work_samples::Entity")]
    WorkSamples,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::talent_social_accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SocialAccounts.def()
    }
}

impl Related<super::work_samples::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkSamples.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
