use tracing::{info, instrument};
use uuid::Uuid;

use models::bank;

use crate::crud::CrudService;
use crate::dto::BankDto;
use crate::errors::ServiceResult;
use crate::filter::FilterCriteria;
use crate::pagination::Page;
use crate::repository::SharedRepository;

/// Top-level banks. Codes are globally unique.
pub struct BankService {
    crud: CrudService<BankDto>,
}

impl BankService {
    pub fn new(repo: SharedRepository<bank::Model>) -> Self {
        Self { crud: CrudService::new(repo) }
    }

    pub(crate) fn crud(&self) -> &CrudService<BankDto> {
        &self.crud
    }

    /// Loads the bank row or fails with `"Bank not found with ID: <id>"`.
    pub async fn require_bank(&self, id: Uuid) -> ServiceResult<bank::Model> {
        self.crud.require(id).await
    }

    async fn ensure_code_free(&self, code: &str, exclude: Option<Uuid>) -> ServiceResult<()> {
        self.crud
            .ensure_unique(FilterCriteria::new().where_eq("code", code), exclude, || {
                format!("bank with code {} already exists", code)
            })
            .await
    }

    pub async fn filter_banks(&self, criteria: &FilterCriteria) -> ServiceResult<Page<BankDto>> {
        self.crud.filter(criteria).await
    }

    /// Creates a bank.
    ///
    /// # Examples
    /// ```
    /// use service::dto::BankDto;
    /// use service::services::Services;
    ///
    /// let services = Services::in_memory();
    /// let dto = BankDto { code: "TEST".into(), name: "Test Bank".into(), ..Default::default() };
    /// let created = tokio_test::block_on(services.banks.create_bank(dto)).unwrap();
    /// let found = tokio_test::block_on(services.banks.get_bank_by_id(created.id.unwrap())).unwrap();
    /// assert_eq!(found.code, "TEST");
    /// assert_eq!(found.name, "Test Bank");
    /// ```
    #[instrument(skip(self, dto), fields(code = %dto.code))]
    pub async fn create_bank(&self, dto: BankDto) -> ServiceResult<BankDto> {
        self.ensure_code_free(&dto.code, None).await?;
        let created = self.crud.create(dto).await?;
        info!(bank_id = ?created.id, "bank_created");
        Ok(created)
    }

    #[instrument(skip(self, dto), fields(bank_id = %id))]
    pub async fn update_bank(&self, id: Uuid, dto: BankDto) -> ServiceResult<BankDto> {
        let existing = self.crud.require(id).await?;
        self.ensure_code_free(&dto.code, Some(id)).await?;
        let updated = self.crud.replace(&existing, dto).await?;
        info!("bank_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(bank_id = %id))]
    pub async fn delete_bank(&self, id: Uuid) -> ServiceResult<()> {
        self.crud.delete(id).await?;
        info!("bank_deleted");
        Ok(())
    }

    pub async fn get_bank_by_id(&self, id: Uuid) -> ServiceResult<BankDto> {
        self.crud.get_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::dto::BankDto;
    use crate::errors::ServiceError;
    use crate::filter::{FilterCriteria, FilterOperator};
    use crate::services::fixtures::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn create_then_get_returns_same_fields() {
        let s = services();
        let created = s
            .banks
            .create_bank(BankDto { code: "TEST".into(), name: "Test Bank".into(), ..Default::default() })
            .await
            .unwrap();
        let found = s.banks.get_bank_by_id(created.id.unwrap()).await.unwrap();
        assert_eq!(found.code, "TEST");
        assert_eq!(found.name, "Test Bank");
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn codes_differing_in_case_coexist() {
        let s = services();
        bank(&s, "ABC").await;
        let lower = s
            .banks
            .create_bank(BankDto { code: "abc".into(), name: "Lower".into(), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(lower.code, "abc");

        let page = s.banks.filter_banks(&FilterCriteria::new().where_eq("code", "abc")).await.unwrap();
        let codes: Vec<_> = page.content.iter().map(|b| b.code.as_str()).collect();
        assert_eq!(codes, vec!["abc"]);
    }

    #[tokio::test]
    async fn missing_bank_reports_id() {
        let s = services();
        let id = Uuid::new_v4();
        let expected = format!("Bank not found with ID: {}", id);
        assert_eq!(s.banks.get_bank_by_id(id).await.unwrap_err().to_string(), expected);
        assert_eq!(s.banks.delete_bank(id).await.unwrap_err().to_string(), expected);
        let dto = BankDto { code: "X".into(), name: "X".into(), ..Default::default() };
        assert_eq!(s.banks.update_bank(id, dto).await.unwrap_err().to_string(), expected);
    }

    #[tokio::test]
    async fn update_forces_path_id_and_keeps_creation_audit() {
        let s = services();
        let original = s
            .banks
            .create_bank(BankDto {
                code: "ORIG".into(),
                name: "Original".into(),
                audit: crate::dto::AuditFields { created_by: Some("alice".into()), ..Default::default() },
                ..Default::default()
            })
            .await
            .unwrap();
        let id = original.id.unwrap();
        let body = BankDto {
            id: Some(Uuid::new_v4()),
            code: "ORIG".into(),
            name: "Renamed".into(),
            is_active: Some(false),
            audit: crate::dto::AuditFields { created_by: Some("mallory".into()), updated_by: Some("bob".into()), ..Default::default() },
            ..Default::default()
        };
        let updated = s.banks.update_bank(id, body).await.unwrap();
        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.is_active, Some(false));
        assert_eq!(updated.audit.created_by.as_deref(), Some("alice"));
        assert_eq!(updated.audit.updated_by.as_deref(), Some("bob"));
        assert_eq!(updated.audit.created_at, original.audit.created_at);
        assert!(updated.audit.updated_at >= original.audit.updated_at);
    }

    #[tokio::test]
    async fn duplicate_code_conflicts() {
        let s = services();
        let first = bank(&s, "DUP").await;
        let err = s
            .banks
            .create_bank(BankDto { code: "DUP".into(), name: "Again".into(), ..Default::default() })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));

        // keeping its own code on update is fine
        let same = BankDto { code: "DUP".into(), name: "Same".into(), ..Default::default() };
        s.banks.update_bank(first.id.unwrap(), same).await.unwrap();

        let other = bank(&s, "OTHER").await;
        let steal = BankDto { code: "DUP".into(), name: "Thief".into(), ..Default::default() };
        assert!(matches!(s.banks.update_bank(other.id.unwrap(), steal).await, Err(ServiceError::Conflict(_))));
    }

    #[tokio::test]
    async fn filter_pages_and_matches() {
        let s = services();
        for code in ["ALPHA", "BETA", "GAMMA"] {
            bank(&s, code).await;
        }
        let page = s
            .banks
            .filter_banks(&FilterCriteria::new().with("name", FilterOperator::Like, "a bank").paged(0, 2))
            .await
            .unwrap();
        // ALPHA Bank, BETA Bank, GAMMA Bank all end in "a Bank"
        assert_eq!(page.total_elements, 3);
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.total_pages, 2);

        let exact = s.banks.filter_banks(&FilterCriteria::new().where_eq("code", "BETA")).await.unwrap();
        assert_eq!(exact.content.len(), 1);
        assert_eq!(exact.content[0].code, "BETA");
    }

    #[tokio::test]
    async fn invalid_payload_is_rejected_before_persisting() {
        let s = services();
        let err = s.banks.create_bank(BankDto { code: "bad code".into(), name: "N".into(), ..Default::default() }).await;
        assert!(matches!(err, Err(ServiceError::Model(_))));
        assert_eq!(s.banks.filter_banks(&FilterCriteria::new()).await.unwrap().total_elements, 0);
    }
}
