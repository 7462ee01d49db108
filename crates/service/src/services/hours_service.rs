use std::sync::Arc;

use sea_orm::ActiveEnum;
use tracing::{info, instrument};
use uuid::Uuid;

use models::branch_hours;

use crate::crud::{required, CrudService, Dto};
use crate::dto::BranchHoursDto;
use crate::errors::ServiceResult;
use crate::filter::FilterCriteria;
use crate::pagination::Page;
use crate::repository::SharedRepository;
use crate::services::BranchService;

/// Weekly opening hours, one row per branch and weekday.
pub struct HoursService {
    crud: CrudService<BranchHoursDto>,
    branches: Arc<BranchService>,
}

impl HoursService {
    pub fn new(repo: SharedRepository<branch_hours::Model>, branches: Arc<BranchService>) -> Self {
        Self { crud: CrudService::new(repo), branches }
    }

    async fn verify_path(&self, bank_id: Uuid, branch_id: Uuid, hours_id: Uuid) -> ServiceResult<branch_hours::Model> {
        self.branches.verify_branch_in_bank(bank_id, branch_id).await?;
        let (_, hours) = self
            .crud
            .verify_owned_by(self.branches.crud(), branch_id, hours_id, |h| Some(h.branch_id))
            .await?;
        Ok(hours)
    }

    async fn save(&self, existing: Option<&branch_hours::Model>, dto: BranchHoursDto) -> ServiceResult<BranchHoursDto> {
        let branch_id = required(dto.branch_id, "branchId")?;
        self.branches.require_branch(branch_id).await?;
        let day = dto.day_of_week.to_value();
        let criteria = FilterCriteria::new().scoped_to("branch_id", branch_id).where_eq("day_of_week", day);
        self.crud
            .ensure_unique(criteria, existing.map(|h| h.id), || {
                format!("hours for {:?} already exist for branch {}", dto.day_of_week, branch_id)
            })
            .await?;
        match existing {
            Some(existing) => self.crud.replace(existing, dto).await,
            None => self.crud.create(dto).await,
        }
    }

    pub async fn filter_branch_hours(&self, criteria: &FilterCriteria) -> ServiceResult<Page<BranchHoursDto>> {
        self.crud.filter(criteria).await
    }

    #[instrument(skip(self, dto), fields(branch_id = ?dto.branch_id, day = ?dto.day_of_week))]
    pub async fn create_branch_hours(&self, dto: BranchHoursDto) -> ServiceResult<BranchHoursDto> {
        let created = self.save(None, dto).await?;
        info!(hours_id = ?created.id, "branch_hours_created");
        Ok(created)
    }

    #[instrument(skip(self, dto), fields(hours_id = %id))]
    pub async fn update_branch_hours(&self, id: Uuid, dto: BranchHoursDto) -> ServiceResult<BranchHoursDto> {
        let existing = self.crud.require(id).await?;
        let updated = self.save(Some(&existing), dto).await?;
        info!("branch_hours_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(hours_id = %id))]
    pub async fn delete_branch_hours(&self, id: Uuid) -> ServiceResult<()> {
        self.crud.delete(id).await?;
        info!("branch_hours_deleted");
        Ok(())
    }

    pub async fn get_branch_hours_by_id(&self, id: Uuid) -> ServiceResult<BranchHoursDto> {
        self.crud.get_by_id(id).await
    }

    pub async fn filter_branch_hours_for_branch(
        &self,
        bank_id: Uuid,
        branch_id: Uuid,
        criteria: &FilterCriteria,
    ) -> ServiceResult<Page<BranchHoursDto>> {
        self.branches.verify_branch_in_bank(bank_id, branch_id).await?;
        self.crud.filter(&criteria.clone().scoped_to("branch_id", branch_id)).await
    }

    pub async fn create_branch_hours_for_branch(&self, bank_id: Uuid, branch_id: Uuid, mut dto: BranchHoursDto) -> ServiceResult<BranchHoursDto> {
        self.branches.verify_branch_in_bank(bank_id, branch_id).await?;
        dto.branch_id = Some(branch_id);
        self.create_branch_hours(dto).await
    }

    #[instrument(skip(self, dto), fields(branch_id = %branch_id, hours_id = %hours_id))]
    pub async fn update_branch_hours_for_branch(
        &self,
        bank_id: Uuid,
        branch_id: Uuid,
        hours_id: Uuid,
        mut dto: BranchHoursDto,
    ) -> ServiceResult<BranchHoursDto> {
        let existing = self.verify_path(bank_id, branch_id, hours_id).await?;
        dto.branch_id = Some(branch_id);
        let updated = self.save(Some(&existing), dto).await?;
        info!("branch_hours_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(branch_id = %branch_id, hours_id = %hours_id))]
    pub async fn delete_branch_hours_for_branch(&self, bank_id: Uuid, branch_id: Uuid, hours_id: Uuid) -> ServiceResult<()> {
        self.verify_path(bank_id, branch_id, hours_id).await?;
        self.crud.delete(hours_id).await?;
        info!("branch_hours_deleted");
        Ok(())
    }

    pub async fn get_branch_hours_by_id_for_branch(&self, bank_id: Uuid, branch_id: Uuid, hours_id: Uuid) -> ServiceResult<BranchHoursDto> {
        self.verify_path(bank_id, branch_id, hours_id).await.map(BranchHoursDto::from_model)
    }
}
