use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TalentSocialAccounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TalentSocialAccounts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TalentSocialAccounts::TalentProfileId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TalentSocialAccounts::Platform)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(ColumnDef::new(TalentSocialAccounts::Handle).string().not_null())
                    .col(
                        ColumnDef::new(TalentSocialAccounts::ProfileUrl)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TalentSocialAccounts::FollowersCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TalentSocialAccounts::EngagementRate)
                            .double()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(TalentSocialAccounts::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(TalentSocialAccounts::IsPrimary)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(TalentSocialAccounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TalentSocialAccounts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(
                                TalentSocialAccounts::Table,
                                TalentSocialAccounts::TalentProfileId,
                            )
                            .to(TalentProfiles::Table, TalentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TalentSocialAccounts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TalentSocialAccounts {
    Table,
    Id,
    TalentProfileId,
    Platform,
    Handle,
    ProfileUrl,
    FollowersCount,
    EngagementRate,
    IsVerified,
    IsPrimary,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum TalentProfiles {
    Table,
    Id,
}
