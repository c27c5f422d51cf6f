use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TalentProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TalentProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TalentProfiles::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(TalentProfiles::TalentType).string_len(32).null())
                    .col(
                        ColumnDef::new(TalentProfiles::Categories)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(ColumnDef::new(TalentProfiles::Specializations).json_binary().null())
                    .col(
                        ColumnDef::new(TalentProfiles::ExperienceLevel)
                            .string_len(32)
                            .null(),
                    )
                    .col(ColumnDef::new(TalentProfiles::YearsOfExperience).integer().null())
                    .col(ColumnDef::new(TalentProfiles::RatePerHour).double().null())
                    .col(ColumnDef::new(TalentProfiles::RatePerProject).double().null())
                    .col(ColumnDef::new(TalentProfiles::RatePerPost).double().null())
                    .col(
                        ColumnDef::new(TalentProfiles::Currency)
                            .string_len(8)
                            .not_null()
                            .default("INR"),
                    )
                    .col(
                        ColumnDef::new(TalentProfiles::AvailabilityStatus)
                            .string_len(32)
                            .not_null()
                            .default("available"),
                    )
                    .col(ColumnDef::new(TalentProfiles::PortfolioDescription).text().null())
                    .col(ColumnDef::new(TalentProfiles::Achievements).text().null())
                    .col(ColumnDef::new(TalentProfiles::Awards).json_binary().null())
                    .col(ColumnDef::new(TalentProfiles::Certifications).json_binary().null())
                    .col(
                        ColumnDef::new(TalentProfiles::CollaborationPreferences)
                            .json_binary()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(TalentProfiles::VerifyBadge)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(TalentProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TalentProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(TalentProfiles::Table, TalentProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TalentProfiles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TalentProfiles {
    Table,
    Id,
    UserId,
    TalentType,
    Categories,
    Specializations,
    ExperienceLevel,
    YearsOfExperience,
    RatePerHour,
    RatePerProject,
    RatePerPost,
    Currency,
    AvailabilityStatus,
    PortfolioDescription,
    Achievements,
    Awards,
    Certifications,
    CollaborationPreferences,
    VerifyBadge,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
