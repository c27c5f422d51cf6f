use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MobileOtps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MobileOtps::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MobileOtps::UserId).uuid().not_null())
                    .col(ColumnDef::new(MobileOtps::Phone).string_len(15).not_null())
                    .col(ColumnDef::new(MobileOtps::Otp).string_len(6).not_null())
                    .col(
                        ColumnDef::new(MobileOtps::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(MobileOtps::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(MobileOtps::Attempts)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(MobileOtps::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(MobileOtps::Table, MobileOtps::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MobileOtps::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum MobileOtps {
    Table,
    Id,
    UserId,
    Phone,
    Otp,
    ExpiresAt,
    IsVerified,
    Attempts,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
