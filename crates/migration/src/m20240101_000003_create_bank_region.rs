//! Create `bank_region` table with FK to `bank_division`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BankRegion::Table)
                    .if_not_exists()
                    .col(uuid(BankRegion::Id).primary_key())
                    .col(uuid(BankRegion::DivisionId).not_null())
                    .col(string_len(BankRegion::Code, 32).not_null())
                    .col(string_len(BankRegion::Name, 128).not_null())
                    .col(text_null(BankRegion::Description))
                    .col(boolean(BankRegion::IsActive).default(true))
                    .col(timestamp_with_time_zone(BankRegion::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(BankRegion::UpdatedAt).not_null())
                    .col(string_len_null(BankRegion::CreatedBy, 64))
                    .col(string_len_null(BankRegion::UpdatedBy, 64))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_region_division")
                            .from(BankRegion::Table, BankRegion::DivisionId)
                            .to(BankDivision::Table, BankDivision::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BankRegion::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum BankRegion {
    Table,
    Id,
    DivisionId,
    Code,
    Name,
    Description,
    IsActive,
    CreatedAt,
    UpdatedAt,
    CreatedBy,
    UpdatedBy,
}

#[derive(DeriveIden)]
enum BankDivision { Table, Id }
