//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_bank;
mod m20240101_000002_create_bank_division;
mod m20240101_000003_create_bank_region;
mod m20240101_000004_create_branch;
mod m20240101_000005_create_branch_department;
mod m20240101_000006_create_branch_position;
mod m20240101_000007_create_branch_hours;
mod m20240101_000008_create_bank_holiday;
mod m20240101_000009_create_working_calendar;
mod m20240101_000010_create_calendar_assignment;
mod m20240101_000011_create_audit_logs;
mod m20240101_000020_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_bank::Migration),
            Box::new(m20240101_000002_create_bank_division::Migration),
            Box::new(m20240101_000003_create_bank_region::Migration),
            Box::new(m20240101_000004_create_branch::Migration),
            Box::new(m20240101_000005_create_branch_department::Migration),
            Box::new(m20240101_000006_create_branch_position::Migration),
            Box::new(m20240101_000007_create_branch_hours::Migration),
            Box::new(m20240101_000008_create_bank_holiday::Migration),
            Box::new(m20240101_000009_create_working_calendar::Migration),
            Box::new(m20240101_000010_create_calendar_assignment::Migration),
            Box::new(m20240101_000011_create_audit_logs::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000020_add_indexes::Migration),
        ]
    }
}
