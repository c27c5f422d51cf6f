use sea_orm::entity::prelude::*;

/// Account record. `is_active = false` marks a soft-deleted account.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    pub user_type: String,
    pub is_premium: bool,
    pub premium_expires_at: Option<chrono::DateTime<chrono::Utc>>,
    pub is_active: bool,
    pub email_verified: bool,
    pub phone_verified: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::user_profiles::Entity")]
    Profile,
    #[sea_orm(has_one = "super::talent_profiles::Entity")]
    TalentProfile,
    #[sea_orm(has_many = "super::mobile_otps::Entity")]
    MobileOtps,
}

impl Related<super::user_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl Related<super::talent_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TalentProfile.def()
    }
}

impl Related<super::mobile_otps::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MobileOtps.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
