//! Entity services and their wiring.
//!
//! Each service owns a [`CrudService`](crate::crud::CrudService) for its
//! entity plus `Arc`s to the services of its parents, used for existence
//! and ownership checks.
use std::sync::Arc;

use sea_orm::DatabaseConnection;

use models::{
    bank, bank_audit_log, bank_division, bank_holiday, bank_region, branch, branch_audit_log, branch_department,
    branch_hours, branch_position, calendar_assignment, working_calendar,
};

use crate::repository::{mock::MemoryRepository, SeaOrmRepository, SharedRepository};

pub mod assignment_service;
pub mod audit_log_service;
pub mod bank_service;
pub mod branch_service;
pub mod calendar_service;
pub mod department_service;
pub mod division_service;
pub mod holiday_service;
pub mod hours_service;
pub mod position_service;
pub mod region_service;

pub use assignment_service::AssignmentService;
pub use audit_log_service::{BankAuditLogService, BranchAuditLogService};
pub use bank_service::BankService;
pub use branch_service::BranchService;
pub use calendar_service::CalendarService;
pub use department_service::DepartmentService;
pub use division_service::DivisionService;
pub use holiday_service::HolidayService;
pub use hours_service::HoursService;
pub use position_service::PositionService;
pub use region_service::RegionService;

/// One repository per entity.
#[derive(Clone)]
pub struct Repositories {
    pub banks: SharedRepository<bank::Model>,
    pub divisions: SharedRepository<bank_division::Model>,
    pub regions: SharedRepository<bank_region::Model>,
    pub branches: SharedRepository<branch::Model>,
    pub departments: SharedRepository<branch_department::Model>,
    pub positions: SharedRepository<branch_position::Model>,
    pub hours: SharedRepository<branch_hours::Model>,
    pub holidays: SharedRepository<bank_holiday::Model>,
    pub calendars: SharedRepository<working_calendar::Model>,
    pub assignments: SharedRepository<calendar_assignment::Model>,
    pub bank_audit_logs: SharedRepository<bank_audit_log::Model>,
    pub branch_audit_logs: SharedRepository<branch_audit_log::Model>,
}

impl Repositories {
    pub fn seaorm(db: &DatabaseConnection) -> Self {
        Self {
            banks: Arc::new(SeaOrmRepository::<bank::Entity>::new(db.clone())),
            divisions: Arc::new(SeaOrmRepository::<bank_division::Entity>::new(db.clone())),
            regions: Arc::new(SeaOrmRepository::<bank_region::Entity>::new(db.clone())),
            branches: Arc::new(SeaOrmRepository::<branch::Entity>::new(db.clone())),
            departments: Arc::new(SeaOrmRepository::<branch_department::Entity>::new(db.clone())),
            positions: Arc::new(SeaOrmRepository::<branch_position::Entity>::new(db.clone())),
            hours: Arc::new(SeaOrmRepository::<branch_hours::Entity>::new(db.clone())),
            holidays: Arc::new(SeaOrmRepository::<bank_holiday::Entity>::new(db.clone())),
            calendars: Arc::new(SeaOrmRepository::<working_calendar::Entity>::new(db.clone())),
            assignments: Arc::new(SeaOrmRepository::<calendar_assignment::Entity>::new(db.clone())),
            bank_audit_logs: Arc::new(SeaOrmRepository::<bank_audit_log::Entity>::new(db.clone())),
            branch_audit_logs: Arc::new(SeaOrmRepository::<branch_audit_log::Entity>::new(db.clone())),
        }
    }

    /// Process-local storage, no foreign keys enforced.
    pub fn in_memory() -> Self {
        Self {
            banks: MemoryRepository::shared(),
            divisions: MemoryRepository::shared(),
            regions: MemoryRepository::shared(),
            branches: MemoryRepository::shared(),
            departments: MemoryRepository::shared(),
            positions: MemoryRepository::shared(),
            hours: MemoryRepository::shared(),
            holidays: MemoryRepository::shared(),
            calendars: MemoryRepository::shared(),
            assignments: MemoryRepository::shared(),
            bank_audit_logs: MemoryRepository::shared(),
            branch_audit_logs: MemoryRepository::shared(),
        }
    }
}

/// The full, immutable service graph.
#[derive(Clone)]
pub struct Services {
    pub banks: Arc<BankService>,
    pub divisions: Arc<DivisionService>,
    pub regions: Arc<RegionService>,
    pub branches: Arc<BranchService>,
    pub departments: Arc<DepartmentService>,
    pub positions: Arc<PositionService>,
    pub hours: Arc<HoursService>,
    pub holidays: Arc<HolidayService>,
    pub calendars: Arc<CalendarService>,
    pub assignments: Arc<AssignmentService>,
    pub bank_audit_logs: Arc<BankAuditLogService>,
    pub branch_audit_logs: Arc<BranchAuditLogService>,
}

impl Services {
    pub fn new(repos: Repositories) -> Self {
        let banks = Arc::new(BankService::new(repos.banks));
        let divisions = Arc::new(DivisionService::new(repos.divisions, banks.clone()));
        let regions = Arc::new(RegionService::new(repos.regions, divisions.clone()));
        let branches = Arc::new(BranchService::new(repos.branches, banks.clone(), regions.clone()));
        let departments = Arc::new(DepartmentService::new(repos.departments, branches.clone()));
        let positions = Arc::new(PositionService::new(repos.positions, departments.clone()));
        let hours = Arc::new(HoursService::new(repos.hours, branches.clone()));
        let holidays = Arc::new(HolidayService::new(repos.holidays, banks.clone(), branches.clone()));
        let calendars = Arc::new(CalendarService::new(repos.calendars, banks.clone()));
        let assignments = Arc::new(AssignmentService::new(
            repos.assignments,
            calendars.clone(),
            branches.clone(),
            departments.clone(),
            positions.clone(),
        ));
        let bank_audit_logs = Arc::new(BankAuditLogService::new(repos.bank_audit_logs, banks.clone()));
        let branch_audit_logs = Arc::new(BranchAuditLogService::new(repos.branch_audit_logs, branches.clone()));
        Self {
            banks,
            divisions,
            regions,
            branches,
            departments,
            positions,
            hours,
            holidays,
            calendars,
            assignments,
            bank_audit_logs,
            branch_audit_logs,
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Repositories::in_memory())
    }
}
