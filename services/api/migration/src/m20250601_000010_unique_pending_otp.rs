use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        // Keep only the newest unverified challenge per (user, phone).
        db.execute_unprepared(
            "DELETE FROM mobile_otps older USING mobile_otps newer \
             WHERE NOT older.is_verified AND NOT newer.is_verified \
             AND older.user_id = newer.user_id AND older.phone = newer.phone \
             AND older.created_at < newer.created_at",
        )
        .await?;
        db.execute_unprepared(
            "CREATE UNIQUE INDEX IF NOT EXISTS uq_mobile_otps_pending \
             ON mobile_otps (user_id, phone) WHERE NOT is_verified",
        )
        .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uq_mobile_otps_pending").to_owned())
            .await
    }
}
