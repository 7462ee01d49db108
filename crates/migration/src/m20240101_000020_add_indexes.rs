use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// (index name, table, columns, unique)
type IndexSpec = (&'static str, Tbl, &'static [Col], bool);

const INDEXES: &[IndexSpec] = &[
    // Codes are unique within their parent
    ("uniq_division_bank_code", Tbl::BankDivision, &[Col::BankId, Col::Code], true),
    ("uniq_region_division_code", Tbl::BankRegion, &[Col::DivisionId, Col::Code], true),
    ("uniq_branch_bank_code", Tbl::Branch, &[Col::BankId, Col::Code], true),
    ("uniq_department_branch_code", Tbl::BranchDepartment, &[Col::BranchId, Col::Code], true),
    ("uniq_position_department_code", Tbl::BranchPosition, &[Col::DepartmentId, Col::Code], true),
    ("uniq_hours_branch_day", Tbl::BranchHours, &[Col::BranchId, Col::DayOfWeek], true),
    // FK lookups
    ("idx_branch_region", Tbl::Branch, &[Col::RegionId], false),
    ("idx_holiday_bank", Tbl::BankHoliday, &[Col::BankId], false),
    ("idx_holiday_branch", Tbl::BankHoliday, &[Col::BranchId], false),
    ("idx_holiday_date", Tbl::BankHoliday, &[Col::HolidayDate], false),
    ("idx_calendar_bank", Tbl::WorkingCalendar, &[Col::BankId], false),
    ("idx_assignment_calendar", Tbl::CalendarAssignment, &[Col::CalendarId], false),
    ("idx_assignment_branch", Tbl::CalendarAssignment, &[Col::BranchId], false),
    ("idx_bank_audit_bank", Tbl::BankAuditLog, &[Col::BankId], false),
    ("idx_bank_audit_created", Tbl::BankAuditLog, &[Col::CreatedAt], false),
    ("idx_branch_audit_branch", Tbl::BranchAuditLog, &[Col::BranchId], false),
    ("idx_branch_audit_created", Tbl::BranchAuditLog, &[Col::CreatedAt], false),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, cols, unique) in INDEXES {
            let mut index = Index::create();
            index.name(*name).table(*table);
            for col in cols.iter() {
                index.col(*col);
            }
            if *unique {
                index.unique();
            }
            manager.create_index(index.to_owned()).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, _, _) in INDEXES.iter().rev() {
            manager
                .drop_index(Index::drop().name(*name).table(*table).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum Tbl {
    BankDivision,
    BankRegion,
    Branch,
    BranchDepartment,
    BranchPosition,
    BranchHours,
    BankHoliday,
    WorkingCalendar,
    CalendarAssignment,
    BankAuditLog,
    BranchAuditLog,
}

#[derive(DeriveIden, Clone, Copy)]
enum Col {
    BankId,
    BranchId,
    DivisionId,
    DepartmentId,
    RegionId,
    CalendarId,
    Code,
    DayOfWeek,
    HolidayDate,
    CreatedAt,
}
