//! Create `branch` table with FKs to `bank` and optional `bank_region`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Branch::Table)
                    .if_not_exists()
                    .col(uuid(Branch::Id).primary_key())
                    .col(uuid(Branch::BankId).not_null())
                    .col(uuid_null(Branch::RegionId))
                    .col(string_len(Branch::Code, 32).not_null())
                    .col(string_len(Branch::Name, 128).not_null())
                    .col(string_len(Branch::AddressLine1, 256).not_null())
                    .col(string_len_null(Branch::AddressLine2, 256))
                    .col(string_len(Branch::City, 128).not_null())
                    .col(string_len_null(Branch::State, 128))
                    .col(string_len_null(Branch::PostalCode, 32))
                    .col(string_len_null(Branch::CountryCode, 3))
                    .col(string_len_null(Branch::Phone, 32))
                    .col(string_len_null(Branch::Email, 128))
                    .col(string_len(Branch::Status, 32).not_null().default("OPEN"))
                    .col(boolean(Branch::IsActive).default(true))
                    .col(timestamp_with_time_zone(Branch::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Branch::UpdatedAt).not_null())
                    .col(string_len_null(Branch::CreatedBy, 64))
                    .col(string_len_null(Branch::UpdatedBy, 64))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_branch_bank")
                            .from(Branch::Table, Branch::BankId)
                            .to(Bank::Table, Bank::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_branch_region")
                            .from(Branch::Table, Branch::RegionId)
                            .to(BankRegion::Table, BankRegion::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Branch::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Branch {
    Table,
    Id,
    BankId,
    RegionId,
    Code,
    Name,
    AddressLine1,
    AddressLine2,
    City,
    State,
    PostalCode,
    CountryCode,
    Phone,
    Email,
    Status,
    IsActive,
    CreatedAt,
    UpdatedAt,
    CreatedBy,
    UpdatedBy,
}

#[derive(DeriveIden)]
enum Bank { Table, Id }

#[derive(DeriveIden)]
enum BankRegion { Table, Id }
