pub mod errors;
pub mod db;
pub mod enums;
pub mod validation;

pub mod bank;
pub mod bank_division;
pub mod bank_region;
pub mod branch;
pub mod branch_department;
pub mod branch_position;
pub mod branch_hours;
pub mod bank_holiday;
pub mod working_calendar;
pub mod calendar_assignment;
pub mod bank_audit_log;
pub mod branch_audit_log;

#[cfg(test)]
mod tests;
