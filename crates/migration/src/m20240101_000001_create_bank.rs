//! Create `bank` table.
//!
//! Root of the organization hierarchy; every other table hangs off it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bank::Table)
                    .if_not_exists()
                    .col(uuid(Bank::Id).primary_key())
                    .col(string_len(Bank::Code, 32).unique_key().not_null())
                    .col(string_len(Bank::Name, 128).not_null())
                    .col(string_len_null(Bank::SwiftCode, 11))
                    .col(string_len_null(Bank::CountryCode, 3))
                    .col(boolean(Bank::IsActive).default(true))
                    .col(timestamp_with_time_zone(Bank::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Bank::UpdatedAt).not_null())
                    .col(string_len_null(Bank::CreatedBy, 64))
                    .col(string_len_null(Bank::UpdatedBy, 64))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Bank::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Bank {
    Table,
    Id,
    Code,
    Name,
    SwiftCode,
    CountryCode,
    IsActive,
    CreatedAt,
    UpdatedAt,
    CreatedBy,
    UpdatedBy,
}
