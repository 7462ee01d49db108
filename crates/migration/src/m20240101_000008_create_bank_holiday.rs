//! Create `bank_holiday` table; a holiday belongs to a bank, a branch, or both.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BankHoliday::Table)
                    .if_not_exists()
                    .col(uuid(BankHoliday::Id).primary_key())
                    .col(uuid_null(BankHoliday::BankId))
                    .col(uuid_null(BankHoliday::BranchId))
                    .col(string_len(BankHoliday::Name, 128).not_null())
                    .col(date(BankHoliday::HolidayDate).not_null())
                    .col(boolean(BankHoliday::IsRecurring).default(false))
                    .col(text_null(BankHoliday::Description))
                    .col(boolean(BankHoliday::IsActive).default(true))
                    .col(timestamp_with_time_zone(BankHoliday::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(BankHoliday::UpdatedAt).not_null())
                    .col(string_len_null(BankHoliday::CreatedBy, 64))
                    .col(string_len_null(BankHoliday::UpdatedBy, 64))
                    .check(
                        Expr::col(BankHoliday::BankId)
                            .is_not_null()
                            .or(Expr::col(BankHoliday::BranchId).is_not_null()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_holiday_bank")
                            .from(BankHoliday::Table, BankHoliday::BankId)
                            .to(Bank::Table, Bank::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_holiday_branch")
                            .from(BankHoliday::Table, BankHoliday::BranchId)
                            .to(Branch::Table, Branch::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BankHoliday::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum BankHoliday {
    Table,
    Id,
    BankId,
    BranchId,
    Name,
    HolidayDate,
    IsRecurring,
    Description,
    IsActive,
    CreatedAt,
    UpdatedAt,
    CreatedBy,
    UpdatedBy,
}

#[derive(DeriveIden)]
enum Bank { Table, Id }

#[derive(DeriveIden)]
enum Branch { Table, Id }
