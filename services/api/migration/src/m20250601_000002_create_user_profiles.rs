use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserProfiles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(UserProfiles::FirstName).string().null())
                    .col(ColumnDef::new(UserProfiles::LastName).string().null())
                    .col(ColumnDef::new(UserProfiles::DisplayName).string().null())
                    .col(ColumnDef::new(UserProfiles::Bio).text().null())
                    .col(ColumnDef::new(UserProfiles::ProfileImageUrl).string().null())
                    .col(ColumnDef::new(UserProfiles::BannerImageUrl).string().null())
                    .col(ColumnDef::new(UserProfiles::LocationCity).string().null())
                    .col(ColumnDef::new(UserProfiles::LocationState).string().null())
                    .col(
                        ColumnDef::new(UserProfiles::LocationCountry)
                            .string()
                            .null()
                            .default("India"),
                    )
                    .col(ColumnDef::new(UserProfiles::WebsiteUrl).string().null())
                    .col(ColumnDef::new(UserProfiles::Languages).json_binary().null())
                    .col(
                        ColumnDef::new(UserProfiles::TimeZone)
                            .string()
                            .null()
                            .default("Asia/Kolkata"),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(UserProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserProfiles::Table, UserProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserProfiles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserProfiles {
    Table,
    Id,
    UserId,
    FirstName,
    LastName,
    DisplayName,
    Bio,
    ProfileImageUrl,
    BannerImageUrl,
    LocationCity,
    LocationState,
    LocationCountry,
    WebsiteUrl,
    Languages,
    TimeZone,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
