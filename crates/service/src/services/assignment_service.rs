use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use models::calendar_assignment;

use crate::crud::{required, CrudService, Dto};
use crate::dto::{CalendarAssignmentDto, WorkingCalendarDto};
use crate::errors::{ServiceError, ServiceResult};
use crate::filter::{FilterCriteria, FilterOperator};
use crate::pagination::Page;
use crate::repository::SharedRepository;
use crate::services::{BranchService, CalendarService, DepartmentService, PositionService};

/// Links working calendars to branches, departments or positions.
pub struct AssignmentService {
    crud: CrudService<CalendarAssignmentDto>,
    calendars: Arc<CalendarService>,
    branches: Arc<BranchService>,
    departments: Arc<DepartmentService>,
    positions: Arc<PositionService>,
}

impl AssignmentService {
    pub fn new(
        repo: SharedRepository<calendar_assignment::Model>,
        calendars: Arc<CalendarService>,
        branches: Arc<BranchService>,
        departments: Arc<DepartmentService>,
        positions: Arc<PositionService>,
    ) -> Self {
        Self { crud: CrudService::new(repo), calendars, branches, departments, positions }
    }

    async fn verify_path(&self, bank_id: Uuid, calendar_id: Uuid, assignment_id: Uuid) -> ServiceResult<calendar_assignment::Model> {
        self.calendars.verify_calendar_in_bank(bank_id, calendar_id).await?;
        let (_, assignment) = self
            .crud
            .verify_owned_by(self.calendars.crud(), calendar_id, assignment_id, |a| Some(a.calendar_id))
            .await?;
        Ok(assignment)
    }

    /// Bank owning whichever scope the assignment targets.
    async fn bank_of_scopes(&self, dto: &CalendarAssignmentDto) -> ServiceResult<Vec<Uuid>> {
        let mut banks = Vec::new();
        if let Some(branch_id) = dto.branch_id {
            banks.push(self.branches.require_branch(branch_id).await?.bank_id);
        }
        let mut department_ids: Vec<Uuid> = dto.department_id.into_iter().collect();
        if let Some(position_id) = dto.position_id {
            department_ids.push(self.positions.crud().require(position_id).await?.department_id);
        }
        for department_id in department_ids {
            let department = self.departments.crud().require(department_id).await?;
            banks.push(self.branches.require_branch(department.branch_id).await?.bank_id);
        }
        Ok(banks)
    }

    async fn save(&self, existing: Option<&calendar_assignment::Model>, dto: CalendarAssignmentDto) -> ServiceResult<CalendarAssignmentDto> {
        dto.validate()?;
        let calendar_id = required(dto.calendar_id, "calendarId")?;
        let calendar = self.calendars.crud().require(calendar_id).await?;
        if self.bank_of_scopes(&dto).await?.iter().any(|bank| *bank != calendar.bank_id) {
            return Err(ServiceError::Validation(format!(
                "assignment scope must belong to bank {} of calendar {}",
                calendar.bank_id, calendar_id
            )));
        }
        match existing {
            Some(existing) => self.crud.replace(existing, dto).await,
            None => self.crud.create(dto).await,
        }
    }

    pub async fn filter_calendar_assignments(&self, criteria: &FilterCriteria) -> ServiceResult<Page<CalendarAssignmentDto>> {
        self.crud.filter(criteria).await
    }

    #[instrument(skip(self, dto), fields(calendar_id = ?dto.calendar_id))]
    pub async fn create_calendar_assignment(&self, dto: CalendarAssignmentDto) -> ServiceResult<CalendarAssignmentDto> {
        let created = self.save(None, dto).await?;
        info!(assignment_id = ?created.id, "assignment_created");
        Ok(created)
    }

    #[instrument(skip(self, dto), fields(assignment_id = %id))]
    pub async fn update_calendar_assignment(&self, id: Uuid, dto: CalendarAssignmentDto) -> ServiceResult<CalendarAssignmentDto> {
        let existing = self.crud.require(id).await?;
        let updated = self.save(Some(&existing), dto).await?;
        info!("assignment_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(assignment_id = %id))]
    pub async fn delete_calendar_assignment(&self, id: Uuid) -> ServiceResult<()> {
        self.crud.delete(id).await?;
        info!("assignment_deleted");
        Ok(())
    }

    pub async fn get_calendar_assignment_by_id(&self, id: Uuid) -> ServiceResult<CalendarAssignmentDto> {
        self.crud.get_by_id(id).await
    }

    pub async fn filter_calendar_assignments_for_calendar(
        &self,
        bank_id: Uuid,
        calendar_id: Uuid,
        criteria: &FilterCriteria,
    ) -> ServiceResult<Page<CalendarAssignmentDto>> {
        self.calendars.verify_calendar_in_bank(bank_id, calendar_id).await?;
        self.crud.filter(&criteria.clone().scoped_to("calendar_id", calendar_id)).await
    }

    pub async fn create_calendar_assignment_for_calendar(
        &self,
        bank_id: Uuid,
        calendar_id: Uuid,
        mut dto: CalendarAssignmentDto,
    ) -> ServiceResult<CalendarAssignmentDto> {
        self.calendars.verify_calendar_in_bank(bank_id, calendar_id).await?;
        dto.calendar_id = Some(calendar_id);
        self.create_calendar_assignment(dto).await
    }

    #[instrument(skip(self, dto), fields(calendar_id = %calendar_id, assignment_id = %assignment_id))]
    pub async fn update_calendar_assignment_for_calendar(
        &self,
        bank_id: Uuid,
        calendar_id: Uuid,
        assignment_id: Uuid,
        mut dto: CalendarAssignmentDto,
    ) -> ServiceResult<CalendarAssignmentDto> {
        let existing = self.verify_path(bank_id, calendar_id, assignment_id).await?;
        dto.calendar_id = Some(calendar_id);
        let updated = self.save(Some(&existing), dto).await?;
        info!("assignment_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(calendar_id = %calendar_id, assignment_id = %assignment_id))]
    pub async fn delete_calendar_assignment_for_calendar(&self, bank_id: Uuid, calendar_id: Uuid, assignment_id: Uuid) -> ServiceResult<()> {
        self.verify_path(bank_id, calendar_id, assignment_id).await?;
        self.crud.delete(assignment_id).await?;
        info!("assignment_deleted");
        Ok(())
    }

    pub async fn get_calendar_assignment_by_id_for_calendar(
        &self,
        bank_id: Uuid,
        calendar_id: Uuid,
        assignment_id: Uuid,
    ) -> ServiceResult<CalendarAssignmentDto> {
        self.verify_path(bank_id, calendar_id, assignment_id)
            .await
            .map(CalendarAssignmentDto::from_model)
    }

    /// Picks the latest-starting assignment at one level whose calendar is usable.
    async fn pick(&self, bank_id: Uuid, criteria: FilterCriteria, on: NaiveDate) -> ServiceResult<Option<WorkingCalendarDto>> {
        let mut candidates: Vec<_> = self
            .crud
            .find_all(&criteria)
            .await?
            .into_iter()
            .filter(|a| a.is_effective_on(on))
            .collect();
        candidates.sort_by(|a, b| b.effective_from.cmp(&a.effective_from));
        for assignment in candidates {
            let Some(calendar) = self.calendars.crud().find(assignment.calendar_id).await? else {
                continue;
            };
            if calendar.is_active && calendar.bank_id == bank_id {
                debug!(assignment_id = %assignment.id, calendar_id = %calendar.id, "assignment matched");
                return Ok(Some(WorkingCalendarDto::from_model(calendar)));
            }
        }
        Ok(None)
    }

    /// Calendar in force for an org unit on `on`.
    ///
    /// Position assignments win over department ones, which win over branch
    /// ones; the bank's default calendar is the last resort.
    #[instrument(skip(self))]
    pub async fn resolve_calendar(
        &self,
        bank_id: Uuid,
        branch_id: Uuid,
        department_id: Option<Uuid>,
        position_id: Option<Uuid>,
        on: NaiveDate,
    ) -> ServiceResult<WorkingCalendarDto> {
        self.branches.verify_branch_in_bank(bank_id, branch_id).await?;
        let mut department_id = department_id;
        if let Some(position_id) = position_id {
            let position = self.positions.crud().require(position_id).await?;
            if department_id.is_some_and(|d| d != position.department_id) {
                return Err(ServiceError::not_found_for("Position", "Department", position.department_id));
            }
            department_id = Some(position.department_id);
        }
        if let Some(department_id) = department_id {
            self.departments.verify_department_in_branch(branch_id, department_id).await?;
        }

        let null = serde_json::Value::Null;
        let mut levels = Vec::new();
        if let Some(position_id) = position_id {
            levels.push(FilterCriteria::new().scoped_to("position_id", position_id));
        }
        if let Some(department_id) = department_id {
            levels.push(
                FilterCriteria::new()
                    .scoped_to("department_id", department_id)
                    .with("position_id", FilterOperator::IsNull, null.clone()),
            );
        }
        levels.push(
            FilterCriteria::new()
                .scoped_to("branch_id", branch_id)
                .with("department_id", FilterOperator::IsNull, null.clone())
                .with("position_id", FilterOperator::IsNull, null),
        );

        for level in levels {
            if let Some(calendar) = self.pick(bank_id, level, on).await? {
                return Ok(calendar);
            }
        }
        self.calendars.get_default_calendar(bank_id).await
    }
}
