use sea_orm::entity::prelude::*;

/// Social-media account linked to a talent profile.
///
/// At most one row per `talent_profile_id` has `is_primary = true`; a
/// partial unique index backs this up.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "talent_social_accounts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub talent_profile_id: Uuid,
    pub platform: String,
    pub handle: String,
    pub profile_url: String,
    pub followers_count: i64,
    pub engagement_rate: Option<f64>,
    pub is_verified: bool,
    pub is_primary: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::talent_profiles::Entity",
        from = "Column::TalentProfileId",
        to = "super::talent_profiles::Column::Id"
    )]
    TalentProfile,
}

impl Related<super::talent_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TalentProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
