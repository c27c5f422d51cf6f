use sea_orm_migration::prelude::*;

mod m20250601_000001_create_users;
mod m20250601_000002_create_user_profiles;
mod m20250601_000003_create_talent_profiles;
mod m20250601_000004_create_talent_social_accounts;
mod m20250601_000005_create_mobile_otps;
mod m20250601_000006_create_banners;
mod m20250601_000007_create_work_samples;
mod m20250601_000008_create_reviews;
mod m20250601_000009_add_indexes;
mod m20250601_000010_unique_pending_otp;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_users::Migration),
            Box::new(m20250601_000002_create_user_profiles::Migration),
            Box::new(m20250601_000003_create_talent_profiles::Migration),
            Box::new(m20250601_000004_create_talent_social_accounts::Migration),
            Box::new(m20250601_000005_create_mobile_otps::Migration),
            Box::new(m20250601_000006_create_banners::Migration),
            Box::new(m20250601_000007_create_work_samples::Migration),
            Box::new(m20250601_000008_create_reviews::Migration),
            Box::new(m20250601_000009_add_indexes::Migration),
            Box::new(m20250601_000010_unique_pending_otp::Migration),
        ]
    }
}
