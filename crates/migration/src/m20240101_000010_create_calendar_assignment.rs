//! Create `calendar_assignment` table.
//!
//! Links a working calendar to a branch, department or position scope for an
//! effective date range.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CalendarAssignment::Table)
                    .if_not_exists()
                    .col(uuid(CalendarAssignment::Id).primary_key())
                    .col(uuid(CalendarAssignment::CalendarId).not_null())
                    .col(uuid_null(CalendarAssignment::BranchId))
                    .col(uuid_null(CalendarAssignment::DepartmentId))
                    .col(uuid_null(CalendarAssignment::PositionId))
                    .col(date(CalendarAssignment::EffectiveFrom).not_null())
                    .col(date_null(CalendarAssignment::EffectiveTo))
                    .col(boolean(CalendarAssignment::IsActive).default(true))
                    .col(timestamp_with_time_zone(CalendarAssignment::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(CalendarAssignment::UpdatedAt).not_null())
                    .col(string_len_null(CalendarAssignment::CreatedBy, 64))
                    .col(string_len_null(CalendarAssignment::UpdatedBy, 64))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_calendar")
                            .from(CalendarAssignment::Table, CalendarAssignment::CalendarId)
                            .to(WorkingCalendar::Table, WorkingCalendar::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_branch")
                            .from(CalendarAssignment::Table, CalendarAssignment::BranchId)
                            .to(Branch::Table, Branch::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_department")
                            .from(CalendarAssignment::Table, CalendarAssignment::DepartmentId)
                            .to(BranchDepartment::Table, BranchDepartment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assignment_position")
                            .from(CalendarAssignment::Table, CalendarAssignment::PositionId)
                            .to(BranchPosition::Table, BranchPosition::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(CalendarAssignment::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum CalendarAssignment {
    Table,
    Id,
    CalendarId,
    BranchId,
    DepartmentId,
    PositionId,
    EffectiveFrom,
    EffectiveTo,
    IsActive,
    CreatedAt,
    UpdatedAt,
    CreatedBy,
    UpdatedBy,
}

#[derive(DeriveIden)]
enum WorkingCalendar { Table, Id }

#[derive(DeriveIden)]
enum Branch { Table, Id }

#[derive(DeriveIden)]
enum BranchDepartment { Table, Id }

#[derive(DeriveIden)]
enum BranchPosition { Table, Id }
