use utoipa::OpenApi;
use utoipa::ToSchema;

use service::dto::*;
use service::filter::{FilterCriteria, FilterField, FilterOperator, SortDirection, SortField};
use service::pagination::*;

use crate::errors::ErrorBody;
use crate::routes::{
    assignments, audit_logs, banks, branches, calendars, departments, divisions, holidays, hours, positions, regions,
};

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        banks::filter_banks, banks::create_bank, banks::get_bank, banks::update_bank, banks::delete_bank,
        divisions::filter_divisions, divisions::create_division, divisions::get_division,
        divisions::update_division, divisions::delete_division,
        divisions::filter_divisions_for_bank, divisions::create_division_for_bank, divisions::get_division_for_bank,
        divisions::update_division_for_bank, divisions::delete_division_for_bank,
        regions::filter_regions, regions::create_region, regions::get_region, regions::update_region, regions::delete_region,
        regions::filter_regions_for_division, regions::create_region_for_division, regions::get_region_for_division,
        regions::update_region_for_division, regions::delete_region_for_division,
        branches::filter_branches, branches::create_branch, branches::get_branch, branches::update_branch,
        branches::delete_branch,
        branches::filter_branches_for_bank, branches::create_branch_for_bank, branches::get_branch_for_bank,
        branches::update_branch_for_bank, branches::delete_branch_for_bank,
        departments::filter_departments, departments::create_department, departments::get_department,
        departments::update_department, departments::delete_department,
        departments::filter_departments_for_branch, departments::create_department_for_branch,
        departments::get_department_for_branch, departments::update_department_for_branch,
        departments::delete_department_for_branch,
        positions::filter_positions, positions::create_position, positions::get_position, positions::update_position,
        positions::delete_position,
        positions::filter_positions_for_department, positions::create_position_for_department,
        positions::get_position_for_department, positions::update_position_for_department,
        positions::delete_position_for_department,
        hours::filter_branch_hours, hours::create_hours, hours::get_hours, hours::update_hours, hours::delete_hours,
        hours::filter_branch_hours_for_branch, hours::create_hours_for_branch, hours::get_hours_for_branch,
        hours::update_hours_for_branch, hours::delete_hours_for_branch,
        holidays::filter_holidays, holidays::create_holiday, holidays::get_holiday, holidays::update_holiday,
        holidays::delete_holiday,
        holidays::filter_holidays_for_bank, holidays::create_holiday_for_bank, holidays::get_holiday_for_bank,
        holidays::update_holiday_for_bank, holidays::delete_holiday_for_bank,
        calendars::filter_calendars, calendars::create_calendar, calendars::get_calendar, calendars::update_calendar,
        calendars::delete_calendar,
        calendars::filter_calendars_for_bank, calendars::create_calendar_for_bank, calendars::get_calendar_for_bank,
        calendars::update_calendar_for_bank, calendars::delete_calendar_for_bank,
        calendars::get_default_calendar, calendars::resolve_calendar,
        assignments::filter_assignments, assignments::create_assignment, assignments::get_assignment,
        assignments::update_assignment, assignments::delete_assignment,
        assignments::filter_assignments_for_calendar, assignments::create_assignment_for_calendar,
        assignments::get_assignment_for_calendar, assignments::update_assignment_for_calendar,
        assignments::delete_assignment_for_calendar,
        audit_logs::filter_bank_audit_logs, audit_logs::create_bank_audit_log, audit_logs::get_bank_audit_log,
        audit_logs::update_bank_audit_log, audit_logs::delete_bank_audit_log,
        audit_logs::filter_bank_audit_logs_for_bank, audit_logs::create_bank_audit_log_for_bank,
        audit_logs::get_bank_audit_log_for_bank, audit_logs::update_bank_audit_log_for_bank,
        audit_logs::delete_bank_audit_log_for_bank,
        audit_logs::filter_branch_audit_logs, audit_logs::create_branch_audit_log, audit_logs::get_branch_audit_log,
        audit_logs::update_branch_audit_log, audit_logs::delete_branch_audit_log,
        audit_logs::filter_branch_audit_logs_for_branch, audit_logs::create_branch_audit_log_for_branch,
        audit_logs::get_branch_audit_log_for_branch, audit_logs::update_branch_audit_log_for_branch,
        audit_logs::delete_branch_audit_log_for_branch,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBody,
            FilterCriteria, FilterField, FilterOperator, SortField, SortDirection,
            AuditFields,
            BankDto, BankDivisionDto, BankRegionDto,
            BranchDto, BranchDepartmentDto, BranchPositionDto, BranchHoursDto,
            BankHolidayDto, WorkingCalendarDto, CalendarAssignmentDto,
            BankAuditLogDto, BranchAuditLogDto,
            BankPage, BankDivisionPage, BankRegionPage, BranchPage, BranchDepartmentPage, BranchPositionPage,
            BranchHoursPage, BankHolidayPage, WorkingCalendarPage, CalendarAssignmentPage,
            BankAuditLogPage, BranchAuditLogPage,
        )
    ),
    tags(
        (name = "health"),
        (name = "banks"),
        (name = "divisions"),
        (name = "regions"),
        (name = "branches"),
        (name = "departments"),
        (name = "positions"),
        (name = "hours"),
        (name = "holidays"),
        (name = "calendars"),
        (name = "assignments"),
        (name = "audit-logs")
    )
)]
pub struct ApiDoc;
