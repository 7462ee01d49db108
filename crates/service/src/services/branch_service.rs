use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use models::branch;

use crate::crud::{required, CrudService, Dto};
use crate::dto::BranchDto;
use crate::errors::{ServiceError, ServiceResult};
use crate::filter::FilterCriteria;
use crate::pagination::Page;
use crate::repository::SharedRepository;
use crate::services::{BankService, RegionService};

pub struct BranchService {
    crud: CrudService<BranchDto>,
    banks: Arc<BankService>,
    regions: Arc<RegionService>,
}

impl BranchService {
    pub fn new(repo: SharedRepository<branch::Model>, banks: Arc<BankService>, regions: Arc<RegionService>) -> Self {
        Self { crud: CrudService::new(repo), banks, regions }
    }

    pub(crate) fn crud(&self) -> &CrudService<BranchDto> {
        &self.crud
    }

    pub async fn require_branch(&self, id: Uuid) -> ServiceResult<branch::Model> {
        self.crud.require(id).await
    }

    pub async fn verify_branch_in_bank(&self, bank_id: Uuid, branch_id: Uuid) -> ServiceResult<branch::Model> {
        let (_, branch) = self
            .crud
            .verify_owned_by(self.banks.crud(), bank_id, branch_id, |b| Some(b.bank_id))
            .await?;
        Ok(branch)
    }

    async fn save(&self, existing: Option<&branch::Model>, dto: BranchDto) -> ServiceResult<BranchDto> {
        let bank_id = required(dto.bank_id, "bankId")?;
        self.banks.require_bank(bank_id).await?;
        if let Some(region_id) = dto.region_id {
            if self.regions.bank_of_region(region_id).await? != bank_id {
                return Err(ServiceError::Validation(format!(
                    "region {} does not belong to bank {}",
                    region_id, bank_id
                )));
            }
        }
        let criteria = FilterCriteria::new().scoped_to("bank_id", bank_id).where_eq("code", dto.code.as_str());
        self.crud
            .ensure_unique(criteria, existing.map(|b| b.id), || {
                format!("branch with code {} already exists in bank {}", dto.code, bank_id)
            })
            .await?;
        match existing {
            Some(existing) => self.crud.replace(existing, dto).await,
            None => self.crud.create(dto).await,
        }
    }

    pub async fn filter_branches(&self, criteria: &FilterCriteria) -> ServiceResult<Page<BranchDto>> {
        self.crud.filter(criteria).await
    }

    #[instrument(skip(self, dto), fields(bank_id = ?dto.bank_id, code = %dto.code))]
    pub async fn create_branch(&self, dto: BranchDto) -> ServiceResult<BranchDto> {
        let created = self.save(None, dto).await?;
        info!(branch_id = ?created.id, "branch_created");
        Ok(created)
    }

    #[instrument(skip(self, dto), fields(branch_id = %id))]
    pub async fn update_branch(&self, id: Uuid, dto: BranchDto) -> ServiceResult<BranchDto> {
        let existing = self.crud.require(id).await?;
        let updated = self.save(Some(&existing), dto).await?;
        info!(status = ?updated.status, "branch_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(branch_id = %id))]
    pub async fn delete_branch(&self, id: Uuid) -> ServiceResult<()> {
        self.crud.delete(id).await?;
        info!("branch_deleted");
        Ok(())
    }

    pub async fn get_branch_by_id(&self, id: Uuid) -> ServiceResult<BranchDto> {
        self.crud.get_by_id(id).await
    }

    pub async fn filter_branches_for_bank(&self, bank_id: Uuid, criteria: &FilterCriteria) -> ServiceResult<Page<BranchDto>> {
        self.banks.require_bank(bank_id).await?;
        self.crud.filter(&criteria.clone().scoped_to("bank_id", bank_id)).await
    }

    pub async fn create_branch_for_bank(&self, bank_id: Uuid, mut dto: BranchDto) -> ServiceResult<BranchDto> {
        dto.bank_id = Some(bank_id);
        self.create_branch(dto).await
    }

    #[instrument(skip(self, dto), fields(bank_id = %bank_id, branch_id = %branch_id))]
    pub async fn update_branch_for_bank(&self, bank_id: Uuid, branch_id: Uuid, mut dto: BranchDto) -> ServiceResult<BranchDto> {
        let existing = self.verify_branch_in_bank(bank_id, branch_id).await?;
        dto.bank_id = Some(bank_id);
        let updated = self.save(Some(&existing), dto).await?;
        info!(status = ?updated.status, "branch_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(bank_id = %bank_id, branch_id = %branch_id))]
    pub async fn delete_branch_for_bank(&self, bank_id: Uuid, branch_id: Uuid) -> ServiceResult<()> {
        self.verify_branch_in_bank(bank_id, branch_id).await?;
        self.crud.delete(branch_id).await?;
        info!("branch_deleted");
        Ok(())
    }

    pub async fn get_branch_by_id_for_bank(&self, bank_id: Uuid, branch_id: Uuid) -> ServiceResult<BranchDto> {
        self.verify_branch_in_bank(bank_id, branch_id).await.map(BranchDto::from_model)
    }
}

#[cfg(test)]
mod tests {
    use models::enums::BranchStatus;
    use uuid::Uuid;

    use crate::errors::ServiceError;
    use crate::filter::{FilterCriteria, FilterOperator};
    use crate::services::fixtures::*;

    #[tokio::test]
    async fn delete_missing_branch_message() {
        let s = services();
        let id = Uuid::new_v4();
        let err = s.branches.delete_branch(id).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Branch not found with ID: {}", id));
    }

    #[tokio::test]
    async fn region_must_belong_to_branch_bank() {
        let s = services();
        let a = bank(&s, "A").await.id.unwrap();
        let b = bank(&s, "B").await.id.unwrap();
        let region_a = region(&s, division(&s, a, "D").await.id.unwrap(), "R").await.id.unwrap();

        let mut dto = branch_dto(a, "HQ");
        dto.region_id = Some(region_a);
        assert!(s.branches.create_branch(dto.clone()).await.is_ok());

        let mut foreign = branch_dto(b, "HQ");
        foreign.region_id = Some(region_a);
        assert!(matches!(s.branches.create_branch(foreign).await, Err(ServiceError::Validation(_))));

        let mut dangling = branch_dto(a, "X1");
        let missing = Uuid::new_v4();
        dangling.region_id = Some(missing);
        let err = s.branches.create_branch(dangling).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Region not found with ID: {}", missing));
    }

    #[tokio::test]
    async fn update_changes_status_and_keeps_id() {
        let s = services();
        let bank_id = bank(&s, "A").await.id.unwrap();
        let created = branch(&s, bank_id, "HQ").await;
        let id = created.id.unwrap();
        let mut body = branch_dto(bank_id, "HQ");
        body.id = Some(Uuid::new_v4());
        body.status = BranchStatus::UnderRenovation;
        let updated = s.branches.update_branch_for_bank(bank_id, id, body).await.unwrap();
        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.status, BranchStatus::UnderRenovation);
    }

    #[tokio::test]
    async fn scoped_get_and_delete_check_bank() {
        let s = services();
        let a = bank(&s, "A").await.id.unwrap();
        let b = bank(&s, "B").await.id.unwrap();
        let id = branch(&s, a, "HQ").await.id.unwrap();
        let err = s.branches.get_branch_by_id_for_bank(b, id).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Branch not found for bank with ID: {}", b));
        s.branches.delete_branch_for_bank(a, id).await.unwrap();
        assert!(s.branches.get_branch_by_id(id).await.is_err());
    }

    #[tokio::test]
    async fn filter_by_status_and_city() {
        let s = services();
        let bank_id = bank(&s, "A").await.id.unwrap();
        branch(&s, bank_id, "B1").await;
        let mut closed = branch_dto(bank_id, "B2");
        closed.status = BranchStatus::Closed;
        s.branches.create_branch(closed).await.unwrap();

        let criteria = FilterCriteria::new()
            .where_eq("status", "CLOSED")
            .with("city", FilterOperator::Like, "YOR");
        let page = s.branches.filter_branches_for_bank(bank_id, &criteria).await.unwrap();
        assert_eq!(page.total_elements, 1);
        assert_eq!(page.content[0].code, "B2");

        let bad = FilterCriteria::new().where_eq("colour", "red");
        assert!(matches!(s.branches.filter_branches(&bad).await, Err(ServiceError::Validation(_))));
    }
}
