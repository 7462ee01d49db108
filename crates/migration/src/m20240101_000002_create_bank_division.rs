//! Create `bank_division` table with FK to `bank`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BankDivision::Table)
                    .if_not_exists()
                    .col(uuid(BankDivision::Id).primary_key())
                    .col(uuid(BankDivision::BankId).not_null())
                    .col(string_len(BankDivision::Code, 32).not_null())
                    .col(string_len(BankDivision::Name, 128).not_null())
                    .col(text_null(BankDivision::Description))
                    .col(boolean(BankDivision::IsActive).default(true))
                    .col(timestamp_with_time_zone(BankDivision::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(BankDivision::UpdatedAt).not_null())
                    .col(string_len_null(BankDivision::CreatedBy, 64))
                    .col(string_len_null(BankDivision::UpdatedBy, 64))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_division_bank")
                            .from(BankDivision::Table, BankDivision::BankId)
                            .to(Bank::Table, Bank::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BankDivision::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum BankDivision {
    Table,
    Id,
    BankId,
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
enum Bank { Table, Id }
