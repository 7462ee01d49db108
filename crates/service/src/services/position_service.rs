use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use models::branch_position;

use crate::crud::{required, CrudService, Dto};
use crate::dto::BranchPositionDto;
use crate::errors::ServiceResult;
use crate::filter::FilterCriteria;
use crate::pagination::Page;
use crate::repository::SharedRepository;
use crate::services::DepartmentService;

pub struct PositionService {
    crud: CrudService<BranchPositionDto>,
    departments: Arc<DepartmentService>,
}

impl PositionService {
    pub fn new(repo: SharedRepository<branch_position::Model>, departments: Arc<DepartmentService>) -> Self {
        Self { crud: CrudService::new(repo), departments }
    }

    pub(crate) fn crud(&self) -> &CrudService<BranchPositionDto> {
        &self.crud
    }

    async fn verify_path(&self, bank_id: Uuid, branch_id: Uuid, department_id: Uuid, position_id: Uuid) -> ServiceResult<branch_position::Model> {
        self.departments.verify_department_path(bank_id, branch_id, department_id).await?;
        let (_, position) = self
            .crud
            .verify_owned_by(self.departments.crud(), department_id, position_id, |p| Some(p.department_id))
            .await?;
        Ok(position)
    }

    async fn save(&self, existing: Option<&branch_position::Model>, dto: BranchPositionDto) -> ServiceResult<BranchPositionDto> {
        let department_id = required(dto.department_id, "departmentId")?;
        self.departments.crud().require(department_id).await?;
        let criteria = FilterCriteria::new()
            .scoped_to("department_id", department_id)
            .where_eq("code", dto.code.as_str());
        self.crud
            .ensure_unique(criteria, existing.map(|p| p.id), || {
                format!("position with code {} already exists in department {}", dto.code, department_id)
            })
            .await?;
        match existing {
            Some(existing) => self.crud.replace(existing, dto).await,
            None => self.crud.create(dto).await,
        }
    }

    pub async fn filter_branch_positions(&self, criteria: &FilterCriteria) -> ServiceResult<Page<BranchPositionDto>> {
        self.crud.filter(criteria).await
    }

    #[instrument(skip(self, dto), fields(department_id = ?dto.department_id, code = %dto.code))]
    pub async fn create_branch_position(&self, dto: BranchPositionDto) -> ServiceResult<BranchPositionDto> {
        let created = self.save(None, dto).await?;
        info!(position_id = ?created.id, "position_created");
        Ok(created)
    }

    #[instrument(skip(self, dto), fields(position_id = %id))]
    pub async fn update_branch_position(&self, id: Uuid, dto: BranchPositionDto) -> ServiceResult<BranchPositionDto> {
        let existing = self.crud.require(id).await?;
        let updated = self.save(Some(&existing), dto).await?;
        info!("position_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(position_id = %id))]
    pub async fn delete_branch_position(&self, id: Uuid) -> ServiceResult<()> {
        self.crud.delete(id).await?;
        info!("position_deleted");
        Ok(())
    }

    pub async fn get_branch_position_by_id(&self, id: Uuid) -> ServiceResult<BranchPositionDto> {
        self.crud.get_by_id(id).await
    }

    pub async fn filter_branch_positions_for_department(
        &self,
        bank_id: Uuid,
        branch_id: Uuid,
        department_id: Uuid,
        criteria: &FilterCriteria,
    ) -> ServiceResult<Page<BranchPositionDto>> {
        self.departments.verify_department_path(bank_id, branch_id, department_id).await?;
        self.crud.filter(&criteria.clone().scoped_to("department_id", department_id)).await
    }

    pub async fn create_branch_position_for_department(
        &self,
        bank_id: Uuid,
        branch_id: Uuid,
        department_id: Uuid,
        mut dto: BranchPositionDto,
    ) -> ServiceResult<BranchPositionDto> {
        self.departments.verify_department_path(bank_id, branch_id, department_id).await?;
        dto.department_id = Some(department_id);
        self.create_branch_position(dto).await
    }

    #[instrument(skip(self, dto), fields(department_id = %department_id, position_id = %position_id))]
    pub async fn update_branch_position_for_department(
        &self,
        bank_id: Uuid,
        branch_id: Uuid,
        department_id: Uuid,
        position_id: Uuid,
        mut dto: BranchPositionDto,
    ) -> ServiceResult<BranchPositionDto> {
        let existing = self.verify_path(bank_id, branch_id, department_id, position_id).await?;
        dto.department_id = Some(department_id);
        let updated = self.save(Some(&existing), dto).await?;
        info!("position_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(department_id = %department_id, position_id = %position_id))]
    pub async fn delete_branch_position_for_department(
        &self,
        bank_id: Uuid,
        branch_id: Uuid,
        department_id: Uuid,
        position_id: Uuid,
    ) -> ServiceResult<()> {
        self.verify_path(bank_id, branch_id, department_id, position_id).await?;
        self.crud.delete(position_id).await?;
        info!("position_deleted");
        Ok(())
    }

    pub async fn get_branch_position_by_id_for_department(
        &self,
        bank_id: Uuid,
        branch_id: Uuid,
        department_id: Uuid,
        position_id: Uuid,
    ) -> ServiceResult<BranchPositionDto> {
        self.verify_path(bank_id, branch_id, department_id, position_id)
            .await
            .map(BranchPositionDto::from_model)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use crate::dto::BranchPositionDto;
    use crate::errors::ServiceError;
    use crate::filter::FilterCriteria;
    use crate::services::fixtures::*;

    #[tokio::test]
    async fn position_path_is_checked_top_down() {
        let s = services();
        let bank_id = bank(&s, "A").await.id.unwrap();
        let other_bank = bank(&s, "B").await.id.unwrap();
        let branch_id = branch(&s, bank_id, "HQ").await.id.unwrap();
        let dept = department(&s, branch_id, "OPS").await.id.unwrap();
        let pos = position(&s, dept, "TLR").await.id.unwrap();

        let found = s
            .positions
            .get_branch_position_by_id_for_department(bank_id, branch_id, dept, pos)
            .await
            .unwrap();
        assert_eq!(found.title, "TLR officer");

        let err = s
            .positions
            .get_branch_position_by_id_for_department(other_bank, branch_id, dept, pos)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), format!("Branch not found for bank with ID: {}", other_bank));

        let other_dept = department(&s, branch_id, "LOANS").await.id.unwrap();
        let err = s
            .positions
            .delete_branch_position_for_department(bank_id, branch_id, other_dept, pos)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), format!("Position not found for department with ID: {}", other_dept));
    }

    #[tokio::test]
    async fn nested_update_pins_department() {
        let s = services();
        let bank_id = bank(&s, "A").await.id.unwrap();
        let branch_id = branch(&s, bank_id, "HQ").await.id.unwrap();
        let dept = department(&s, branch_id, "OPS").await.id.unwrap();
        let elsewhere = department(&s, branch_id, "LOANS").await.id.unwrap();
        let pos = position(&s, dept, "TLR").await.id.unwrap();

        let body = BranchPositionDto {
            department_id: Some(elsewhere),
            code: "TLR".into(),
            title: "Senior teller".into(),
            ..Default::default()
        };
        let updated = s
            .positions
            .update_branch_position_for_department(bank_id, branch_id, dept, pos, body)
            .await
            .unwrap();
        assert_eq!(updated.department_id, Some(dept));
        assert_eq!(updated.title, "Senior teller");

        let page = s
            .positions
            .filter_branch_positions_for_department(bank_id, branch_id, elsewhere, &FilterCriteria::new())
            .await
            .unwrap();
        assert_eq!(page.total_elements, 0);
    }

    #[tokio::test]
    async fn flat_create_needs_existing_department() {
        let s = services();
        let missing = Uuid::new_v4();
        let dto = BranchPositionDto { department_id: Some(missing), code: "X".into(), title: "X".into(), ..Default::default() };
        let err = s.positions.create_branch_position(dto).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.to_string(), format!("Department not found with ID: {}", missing));
    }
}
