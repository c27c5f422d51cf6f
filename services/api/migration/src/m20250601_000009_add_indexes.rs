use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(MobileOtps::Table)
                    .col(MobileOtps::UserId)
                    .col(MobileOtps::Phone)
                    .name("idx_mobile_otps_user_id_phone")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(MobileOtps::Table)
                    .col(MobileOtps::ExpiresAt)
                    .name("idx_mobile_otps_expires_at")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(TalentSocialAccounts::Table)
                    .col(TalentSocialAccounts::TalentProfileId)
                    .name("idx_talent_social_accounts_talent_profile_id")
                    .to_owned(),
            )
            .await?;
        // sea-query has no partial-index builder.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS uq_talent_social_accounts_primary \
                 ON talent_social_accounts (talent_profile_id) WHERE is_primary",
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(WorkSamples::Table)
                    .col(WorkSamples::TalentProfileId)
                    .name("idx_work_samples_talent_profile_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Reviews::Table)
                    .col(Reviews::RevieweeId)
                    .name("idx_reviews_reviewee_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_reviews_reviewee_id",
            "idx_work_samples_talent_profile_id",
            "uq_talent_social_accounts_primary",
            "idx_talent_social_accounts_talent_profile_id",
            "idx_mobile_otps_expires_at",
            "idx_mobile_otps_user_id_phone",
        ] {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(Iden)]
enum MobileOtps {
    Table,
    UserId,
    Phone,
    ExpiresAt,
}

#[derive(Iden)]
enum TalentSocialAccounts {
    Table,
    TalentProfileId,
}

#[derive(Iden)]
enum WorkSamples {
    Table,
    TalentProfileId,
}

#[derive(Iden)]
enum Reviews {
    Table,
    RevieweeId,
}
