use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkingCalendar::Table)
                    .if_not_exists()
                    .col(uuid(WorkingCalendar::Id).primary_key())
                    .col(uuid(WorkingCalendar::BankId).not_null())
                    .col(string_len(WorkingCalendar::Name, 128).not_null())
                    .col(text_null(WorkingCalendar::Description))
                    .col(string_len(WorkingCalendar::Timezone, 64).not_null().default("UTC"))
                    .col(boolean(WorkingCalendar::IsDefault).default(false))
                    .col(boolean(WorkingCalendar::IsActive).default(true))
                    .col(timestamp_with_time_zone(WorkingCalendar::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(WorkingCalendar::UpdatedAt).not_null())
                    .col(string_len_null(WorkingCalendar::CreatedBy, 64))
                    .col(string_len_null(WorkingCalendar::UpdatedBy, 64))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_calendar_bank")
                            .from(WorkingCalendar::Table, WorkingCalendar::BankId)
                            .to(Bank::Table, Bank::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(WorkingCalendar::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum WorkingCalendar {
    Table,
    Id,
    BankId,
    Name,
    Description,
    Timezone,
    IsDefault,
    IsActive,
    CreatedAt,
    UpdatedAt,
    CreatedBy,
    UpdatedBy,
}

#[derive(DeriveIden)]
enum Bank { Table, Id }
