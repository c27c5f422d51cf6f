use sea_orm::entity::prelude::*;

/// Portfolio item uploaded by a talent, moderated through `status`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "work_samples")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub talent_profile_id: Uuid,
    pub title: String,
    #[sea_orm(column_name = "type")]
    pub sample_type: String,
    pub url: String,
    pub status: String,
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
