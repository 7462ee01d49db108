use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use models::bank_division;

use crate::crud::{required, CrudService, Dto};
use crate::dto::BankDivisionDto;
use crate::errors::ServiceResult;
use crate::filter::FilterCriteria;
use crate::pagination::Page;
use crate::repository::SharedRepository;
use crate::services::BankService;

pub struct DivisionService {
    crud: CrudService<BankDivisionDto>,
    banks: Arc<BankService>,
}

impl DivisionService {
    pub fn new(repo: SharedRepository<bank_division::Model>, banks: Arc<BankService>) -> Self {
        Self { crud: CrudService::new(repo), banks }
    }

    pub(crate) fn crud(&self) -> &CrudService<BankDivisionDto> {
        &self.crud
    }

    /// The division, provided it belongs to `bank_id`.
    pub async fn verify_division_in_bank(&self, bank_id: Uuid, division_id: Uuid) -> ServiceResult<bank_division::Model> {
        let (_, division) = self
            .crud
            .verify_owned_by(self.banks.crud(), bank_id, division_id, |d| Some(d.bank_id))
            .await?;
        Ok(division)
    }

    async fn save(&self, existing: Option<&bank_division::Model>, dto: BankDivisionDto) -> ServiceResult<BankDivisionDto> {
        let bank_id = required(dto.bank_id, "bankId")?;
        self.banks.require_bank(bank_id).await?;
        let criteria = FilterCriteria::new().scoped_to("bank_id", bank_id).where_eq("code", dto.code.as_str());
        self.crud
            .ensure_unique(criteria, existing.map(|d| d.id), || {
                format!("division with code {} already exists in bank {}", dto.code, bank_id)
            })
            .await?;
        match existing {
            Some(existing) => self.crud.replace(existing, dto).await,
            None => self.crud.create(dto).await,
        }
    }

    pub async fn filter_bank_divisions(&self, criteria: &FilterCriteria) -> ServiceResult<Page<BankDivisionDto>> {
        self.crud.filter(criteria).await
    }

    #[instrument(skip(self, dto), fields(bank_id = ?dto.bank_id, code = %dto.code))]
    pub async fn create_bank_division(&self, dto: BankDivisionDto) -> ServiceResult<BankDivisionDto> {
        let created = self.save(None, dto).await?;
        info!(division_id = ?created.id, "division_created");
        Ok(created)
    }

    #[instrument(skip(self, dto), fields(division_id = %id))]
    pub async fn update_bank_division(&self, id: Uuid, dto: BankDivisionDto) -> ServiceResult<BankDivisionDto> {
        let existing = self.crud.require(id).await?;
        let updated = self.save(Some(&existing), dto).await?;
        info!("division_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(division_id = %id))]
    pub async fn delete_bank_division(&self, id: Uuid) -> ServiceResult<()> {
        self.crud.delete(id).await?;
        info!("division_deleted");
        Ok(())
    }

    pub async fn get_bank_division_by_id(&self, id: Uuid) -> ServiceResult<BankDivisionDto> {
        self.crud.get_by_id(id).await
    }

    pub async fn filter_bank_divisions_for_bank(&self, bank_id: Uuid, criteria: &FilterCriteria) -> ServiceResult<Page<BankDivisionDto>> {
        self.banks.require_bank(bank_id).await?;
        self.crud.filter(&criteria.clone().scoped_to("bank_id", bank_id)).await
    }

    pub async fn create_bank_division_for_bank(&self, bank_id: Uuid, mut dto: BankDivisionDto) -> ServiceResult<BankDivisionDto> {
        dto.bank_id = Some(bank_id);
        self.create_bank_division(dto).await
    }

    #[instrument(skip(self, dto), fields(bank_id = %bank_id, division_id = %division_id))]
    pub async fn update_bank_division_for_bank(&self, bank_id: Uuid, division_id: Uuid, mut dto: BankDivisionDto) -> ServiceResult<BankDivisionDto> {
        let existing = self.verify_division_in_bank(bank_id, division_id).await?;
        dto.bank_id = Some(bank_id);
        let updated = self.save(Some(&existing), dto).await?;
        info!("division_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(bank_id = %bank_id, division_id = %division_id))]
    pub async fn delete_bank_division_for_bank(&self, bank_id: Uuid, division_id: Uuid) -> ServiceResult<()> {
        self.verify_division_in_bank(bank_id, division_id).await?;
        self.crud.delete(division_id).await?;
        info!("division_deleted");
        Ok(())
    }

    pub async fn get_bank_division_by_id_for_bank(&self, bank_id: Uuid, division_id: Uuid) -> ServiceResult<BankDivisionDto> {
        self.verify_division_in_bank(bank_id, division_id).await.map(BankDivisionDto::from_model)
    }
}

#[cfg(test)]
mod tests {
    use crate::dto::BankDivisionDto;
    use crate::errors::ServiceError;
    use crate::filter::FilterCriteria;
    use crate::services::fixtures::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn create_requires_existing_bank() {
        let s = services();
        let missing = Uuid::new_v4();
        let err = s
            .divisions
            .create_bank_division(BankDivisionDto { bank_id: Some(missing), code: "D".into(), name: "D".into(), ..Default::default() })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), format!("Bank not found with ID: {}", missing));
    }

    #[tokio::test]
    async fn nested_create_stamps_bank_from_path() {
        let s = services();
        let bank = bank(&s, "B1").await;
        let bank_id = bank.id.unwrap();
        let body = BankDivisionDto { bank_id: Some(Uuid::new_v4()), code: "RET".into(), name: "Retail".into(), ..Default::default() };
        let created = s.divisions.create_bank_division_for_bank(bank_id, body).await.unwrap();
        assert_eq!(created.bank_id, Some(bank_id));
    }

    #[tokio::test]
    async fn scoped_access_checks_owner() {
        let s = services();
        let (a, b) = (bank(&s, "A").await.id.unwrap(), bank(&s, "B").await.id.unwrap());
        let div = division(&s, a, "OPS").await.id.unwrap();

        assert!(s.divisions.get_bank_division_by_id_for_bank(a, div).await.is_ok());
        let err = s.divisions.get_bank_division_by_id_for_bank(b, div).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Division not found for bank with ID: {}", b));

        let err = s.divisions.delete_bank_division_for_bank(b, div).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        // still there after the rejected delete
        assert!(s.divisions.get_bank_division_by_id(div).await.is_ok());
    }

    #[tokio::test]
    async fn scoped_update_cannot_move_division() {
        let s = services();
        let (a, b) = (bank(&s, "A").await.id.unwrap(), bank(&s, "B").await.id.unwrap());
        let div = division(&s, a, "OPS").await.id.unwrap();
        let body = BankDivisionDto { bank_id: Some(b), code: "OPS".into(), name: "Operations".into(), ..Default::default() };
        let updated = s.divisions.update_bank_division_for_bank(a, div, body).await.unwrap();
        assert_eq!(updated.bank_id, Some(a));
        assert_eq!(updated.id, Some(div));
    }

    #[tokio::test]
    async fn codes_unique_per_bank_only() {
        let s = services();
        let (a, b) = (bank(&s, "A").await.id.unwrap(), bank(&s, "B").await.id.unwrap());
        division(&s, a, "OPS").await;
        division(&s, b, "OPS").await;
        let dup = BankDivisionDto { code: "OPS".into(), name: "Again".into(), ..Default::default() };
        assert!(matches!(s.divisions.create_bank_division_for_bank(a, dup).await, Err(ServiceError::Conflict(_))));
    }

    #[tokio::test]
    async fn scoped_filter_only_sees_own_bank() {
        let s = services();
        let (a, b) = (bank(&s, "A").await.id.unwrap(), bank(&s, "B").await.id.unwrap());
        division(&s, a, "D1").await;
        division(&s, a, "D2").await;
        division(&s, b, "D3").await;
        let page = s.divisions.filter_bank_divisions_for_bank(a, &FilterCriteria::new()).await.unwrap();
        assert_eq!(page.total_elements, 2);
        assert!(page.content.iter().all(|d| d.bank_id == Some(a)));
        let all = s.divisions.filter_bank_divisions(&FilterCriteria::new()).await.unwrap();
        assert_eq!(all.total_elements, 3);
    }
}
