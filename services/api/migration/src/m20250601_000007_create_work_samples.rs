use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkSamples::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkSamples::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WorkSamples::TalentProfileId).uuid().not_null())
                    .col(ColumnDef::new(WorkSamples::Title).string_len(255).not_null())
                    .col(ColumnDef::new(WorkSamples::Type).string_len(16).not_null())
                    .col(ColumnDef::new(WorkSamples::Url).string_len(500).not_null())
                    .col(
                        ColumnDef::new(WorkSamples::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(WorkSamples::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(WorkSamples::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(WorkSamples::Table, WorkSamples::TalentProfileId)
                            .to(TalentProfiles::Table, TalentProfiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkSamples::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum WorkSamples {
    Table,
    Id,
    TalentProfileId,
    Title,
    Type,
    Url,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum TalentProfiles {
    Table,
    Id,
}
