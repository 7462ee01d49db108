use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use models::branch_department;

use crate::crud::{required, CrudService, Dto};
use crate::dto::BranchDepartmentDto;
use crate::errors::ServiceResult;
use crate::filter::FilterCriteria;
use crate::pagination::Page;
use crate::repository::SharedRepository;
use crate::services::BranchService;

pub struct DepartmentService {
    crud: CrudService<BranchDepartmentDto>,
    branches: Arc<BranchService>,
}

impl DepartmentService {
    pub fn new(repo: SharedRepository<branch_department::Model>, branches: Arc<BranchService>) -> Self {
        Self { crud: CrudService::new(repo), branches }
    }

    pub(crate) fn crud(&self) -> &CrudService<BranchDepartmentDto> {
        &self.crud
    }

    pub async fn verify_department_in_branch(&self, branch_id: Uuid, department_id: Uuid) -> ServiceResult<branch_department::Model> {
        let (_, department) = self
            .crud
            .verify_owned_by(self.branches.crud(), branch_id, department_id, |d| Some(d.branch_id))
            .await?;
        Ok(department)
    }

    /// Department under `/banks/{bank_id}/branches/{branch_id}`.
    pub async fn verify_department_path(&self, bank_id: Uuid, branch_id: Uuid, department_id: Uuid) -> ServiceResult<branch_department::Model> {
        self.branches.verify_branch_in_bank(bank_id, branch_id).await?;
        self.verify_department_in_branch(branch_id, department_id).await
    }

    async fn save(&self, existing: Option<&branch_department::Model>, dto: BranchDepartmentDto) -> ServiceResult<BranchDepartmentDto> {
        let branch_id = required(dto.branch_id, "branchId")?;
        self.branches.require_branch(branch_id).await?;
        let criteria = FilterCriteria::new().scoped_to("branch_id", branch_id).where_eq("code", dto.code.as_str());
        self.crud
            .ensure_unique(criteria, existing.map(|d| d.id), || {
                format!("department with code {} already exists in branch {}", dto.code, branch_id)
            })
            .await?;
        match existing {
            Some(existing) => self.crud.replace(existing, dto).await,
            None => self.crud.create(dto).await,
        }
    }

    pub async fn filter_branch_departments(&self, criteria: &FilterCriteria) -> ServiceResult<Page<BranchDepartmentDto>> {
        self.crud.filter(criteria).await
    }

    #[instrument(skip(self, dto), fields(branch_id = ?dto.branch_id, code = %dto.code))]
    pub async fn create_branch_department(&self, dto: BranchDepartmentDto) -> ServiceResult<BranchDepartmentDto> {
        let created = self.save(None, dto).await?;
        info!(department_id = ?created.id, "department_created");
        Ok(created)
    }

    #[instrument(skip(self, dto), fields(department_id = %id))]
    pub async fn update_branch_department(&self, id: Uuid, dto: BranchDepartmentDto) -> ServiceResult<BranchDepartmentDto> {
        let existing = self.crud.require(id).await?;
        let updated = self.save(Some(&existing), dto).await?;
        info!("department_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(department_id = %id))]
    pub async fn delete_branch_department(&self, id: Uuid) -> ServiceResult<()> {
        self.crud.delete(id).await?;
        info!("department_deleted");
        Ok(())
    }

    pub async fn get_branch_department_by_id(&self, id: Uuid) -> ServiceResult<BranchDepartmentDto> {
        self.crud.get_by_id(id).await
    }

    pub async fn filter_branch_departments_for_branch(
        &self,
        bank_id: Uuid,
        branch_id: Uuid,
        criteria: &FilterCriteria,
    ) -> ServiceResult<Page<BranchDepartmentDto>> {
        self.branches.verify_branch_in_bank(bank_id, branch_id).await?;
        self.crud.filter(&criteria.clone().scoped_to("branch_id", branch_id)).await
    }

    pub async fn create_branch_department_for_branch(
        &self,
        bank_id: Uuid,
        branch_id: Uuid,
        mut dto: BranchDepartmentDto,
    ) -> ServiceResult<BranchDepartmentDto> {
        self.branches.verify_branch_in_bank(bank_id, branch_id).await?;
        dto.branch_id = Some(branch_id);
        self.create_branch_department(dto).await
    }

    #[instrument(skip(self, dto), fields(bank_id = %bank_id, branch_id = %branch_id, department_id = %department_id))]
    pub async fn update_branch_department_for_branch(
        &self,
        bank_id: Uuid,
        branch_id: Uuid,
        department_id: Uuid,
        mut dto: BranchDepartmentDto,
    ) -> ServiceResult<BranchDepartmentDto> {
        let existing = self.verify_department_path(bank_id, branch_id, department_id).await?;
        dto.branch_id = Some(branch_id);
        let updated = self.save(Some(&existing), dto).await?;
        info!("department_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(bank_id = %bank_id, branch_id = %branch_id, department_id = %department_id))]
    pub async fn delete_branch_department_for_branch(&self, bank_id: Uuid, branch_id: Uuid, department_id: Uuid) -> ServiceResult<()> {
        self.verify_department_path(bank_id, branch_id, department_id).await?;
        self.crud.delete(department_id).await?;
        info!("department_deleted");
        Ok(())
    }

    pub async fn get_branch_department_by_id_for_branch(
        &self,
        bank_id: Uuid,
        branch_id: Uuid,
        department_id: Uuid,
    ) -> ServiceResult<BranchDepartmentDto> {
        self.verify_department_path(bank_id, branch_id, department_id)
            .await
            .map(BranchDepartmentDto::from_model)
    }
}
