//! camelCase transport shapes and their mapping to rows.
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

mod audit;
mod bank;
mod branch;
mod calendar;

pub use audit::{BankAuditLogDto, BranchAuditLogDto};
pub use bank::{BankDivisionDto, BankDto, BankRegionDto};
pub use branch::{BranchDepartmentDto, BranchDto, BranchHoursDto, BranchPositionDto};
pub use calendar::{BankHolidayDto, CalendarAssignmentDto, WorkingCalendarDto};

/// Audit columns shared by every mutable entity. Timestamps are server-managed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditFields {
    #[schema(value_type = Option<String>, format = DateTime)]
    pub created_at: Option<DateTimeWithTimeZone>,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub updated_at: Option<DateTimeWithTimeZone>,
    pub created_by: Option<String>,
    pub updated_by: Option<String>,
}

impl AuditFields {
    pub fn from_row(
        created_at: DateTimeWithTimeZone,
        updated_at: DateTimeWithTimeZone,
        created_by: Option<String>,
        updated_by: Option<String>,
    ) -> Self {
        Self { created_at: Some(created_at), updated_at: Some(updated_at), created_by, updated_by }
    }
}
