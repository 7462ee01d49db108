//! Create `branch_hours` table: one row per branch and day of week.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BranchHours::Table)
                    .if_not_exists()
                    .col(uuid(BranchHours::Id).primary_key())
                    .col(uuid(BranchHours::BranchId).not_null())
                    .col(string_len(BranchHours::DayOfWeek, 16).not_null())
                    .col(time_null(BranchHours::OpenTime))
                    .col(time_null(BranchHours::CloseTime))
                    .col(boolean(BranchHours::IsClosed).default(false))
                    .col(timestamp_with_time_zone(BranchHours::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(BranchHours::UpdatedAt).not_null())
                    .col(string_len_null(BranchHours::CreatedBy, 64))
                    .col(string_len_null(BranchHours::UpdatedBy, 64))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hours_branch")
                            .from(BranchHours::Table, BranchHours::BranchId)
                            .to(Branch::Table, Branch::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BranchHours::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum BranchHours {
    Table,
    Id,
    BranchId,
    DayOfWeek,
    OpenTime,
    CloseTime,
    IsClosed,
    CreatedAt,
    UpdatedAt,
    CreatedBy,
    UpdatedBy,
}

#[derive(DeriveIden)]
enum Branch { Table, Id }
