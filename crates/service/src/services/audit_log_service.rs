//! Append-only audit trails for banks and branches.
use std::sync::Arc;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use models::{bank_audit_log, branch_audit_log};

use crate::crud::{required, CrudService, Dto};
use crate::dto::{BankAuditLogDto, BranchAuditLogDto};
use crate::errors::{ServiceError, ServiceResult};
use crate::filter::FilterCriteria;
use crate::pagination::Page;
use crate::repository::SharedRepository;
use crate::services::{BankService, BranchService};

fn append_only() -> ServiceError {
    ServiceError::Validation("audit log entries are append-only".into())
}

pub struct BankAuditLogService {
    crud: CrudService<BankAuditLogDto>,
    banks: Arc<BankService>,
}

impl BankAuditLogService {
    pub fn new(repo: SharedRepository<bank_audit_log::Model>, banks: Arc<BankService>) -> Self {
        Self { crud: CrudService::new(repo), banks }
    }

    async fn verify_log_in_bank(&self, bank_id: Uuid, log_id: Uuid) -> ServiceResult<bank_audit_log::Model> {
        let (_, log) = self
            .crud
            .verify_owned_by(self.banks.crud(), bank_id, log_id, |l| Some(l.bank_id))
            .await?;
        Ok(log)
    }

    pub async fn filter_bank_audit_logs(&self, criteria: &FilterCriteria) -> ServiceResult<Page<BankAuditLogDto>> {
        self.crud.filter(criteria).await
    }

    #[instrument(skip(self, dto), fields(bank_id = ?dto.bank_id, action = ?dto.action))]
    pub async fn create_bank_audit_log(&self, dto: BankAuditLogDto) -> ServiceResult<BankAuditLogDto> {
        self.banks.require_bank(required(dto.bank_id, "bankId")?).await?;
        let created = self.crud.create(dto).await?;
        info!(log_id = ?created.id, "bank_audit_log_appended");
        Ok(created)
    }

    /// Always rejected once the entry is known to exist.
    #[instrument(skip(self, _dto), fields(log_id = %id))]
    pub async fn update_bank_audit_log(&self, id: Uuid, _dto: BankAuditLogDto) -> ServiceResult<BankAuditLogDto> {
        self.crud.require(id).await?;
        warn!("rejected audit log rewrite");
        Err(append_only())
    }

    #[instrument(skip(self), fields(log_id = %id))]
    pub async fn delete_bank_audit_log(&self, id: Uuid) -> ServiceResult<()> {
        self.crud.delete(id).await?;
        info!("bank_audit_log_deleted");
        Ok(())
    }

    pub async fn get_bank_audit_log_by_id(&self, id: Uuid) -> ServiceResult<BankAuditLogDto> {
        self.crud.get_by_id(id).await
    }

    pub async fn filter_bank_audit_logs_for_bank(&self, bank_id: Uuid, criteria: &FilterCriteria) -> ServiceResult<Page<BankAuditLogDto>> {
        self.banks.require_bank(bank_id).await?;
        self.crud.filter(&criteria.clone().scoped_to("bank_id", bank_id)).await
    }

    pub async fn create_bank_audit_log_for_bank(&self, bank_id: Uuid, mut dto: BankAuditLogDto) -> ServiceResult<BankAuditLogDto> {
        dto.bank_id = Some(bank_id);
        self.create_bank_audit_log(dto).await
    }

    pub async fn update_bank_audit_log_for_bank(&self, bank_id: Uuid, log_id: Uuid, _dto: BankAuditLogDto) -> ServiceResult<BankAuditLogDto> {
        self.verify_log_in_bank(bank_id, log_id).await?;
        Err(append_only())
    }

    #[instrument(skip(self), fields(bank_id = %bank_id, log_id = %log_id))]
    pub async fn delete_bank_audit_log_for_bank(&self, bank_id: Uuid, log_id: Uuid) -> ServiceResult<()> {
        self.verify_log_in_bank(bank_id, log_id).await?;
        self.crud.delete(log_id).await?;
        info!("bank_audit_log_deleted");
        Ok(())
    }

    pub async fn get_bank_audit_log_by_id_for_bank(&self, bank_id: Uuid, log_id: Uuid) -> ServiceResult<BankAuditLogDto> {
        self.verify_log_in_bank(bank_id, log_id).await.map(BankAuditLogDto::from_model)
    }
}

pub struct BranchAuditLogService {
    crud: CrudService<BranchAuditLogDto>,
    branches: Arc<BranchService>,
}

impl BranchAuditLogService {
    pub fn new(repo: SharedRepository<branch_audit_log::Model>, branches: Arc<BranchService>) -> Self {
        Self { crud: CrudService::new(repo), branches }
    }

    async fn verify_path(&self, bank_id: Uuid, branch_id: Uuid, log_id: Uuid) -> ServiceResult<branch_audit_log::Model> {
        self.branches.verify_branch_in_bank(bank_id, branch_id).await?;
        let (_, log) = self
            .crud
            .verify_owned_by(self.branches.crud(), branch_id, log_id, |l| Some(l.branch_id))
            .await?;
        Ok(log)
    }

    pub async fn filter_branch_audit_logs(&self, criteria: &FilterCriteria) -> ServiceResult<Page<BranchAuditLogDto>> {
        self.crud.filter(criteria).await
    }

    #[instrument(skip(self, dto), fields(branch_id = ?dto.branch_id, action = ?dto.action))]
    pub async fn create_branch_audit_log(&self, dto: BranchAuditLogDto) -> ServiceResult<BranchAuditLogDto> {
        self.branches.require_branch(required(dto.branch_id, "branchId")?).await?;
        let created = self.crud.create(dto).await?;
        info!(log_id = ?created.id, "branch_audit_log_appended");
        Ok(created)
    }

    #[instrument(skip(self, _dto), fields(log_id = %id))]
    pub async fn update_branch_audit_log(&self, id: Uuid, _dto: BranchAuditLogDto) -> ServiceResult<BranchAuditLogDto> {
        self.crud.require(id).await?;
        warn!("rejected audit log rewrite");
        Err(append_only())
    }

    #[instrument(skip(self), fields(log_id = %id))]
    pub async fn delete_branch_audit_log(&self, id: Uuid) -> ServiceResult<()> {
        self.crud.delete(id).await?;
        info!("branch_audit_log_deleted");
        Ok(())
    }

    pub async fn get_branch_audit_log_by_id(&self, id: Uuid) -> ServiceResult<BranchAuditLogDto> {
        self.crud.get_by_id(id).await
    }

    pub async fn filter_branch_audit_logs_for_branch(
        &self,
        bank_id: Uuid,
        branch_id: Uuid,
        criteria: &FilterCriteria,
    ) -> ServiceResult<Page<BranchAuditLogDto>> {
        self.branches.verify_branch_in_bank(bank_id, branch_id).await?;
        self.crud.filter(&criteria.clone().scoped_to("branch_id", branch_id)).await
    }

    pub async fn create_branch_audit_log_for_branch(
        &self,
        bank_id: Uuid,
        branch_id: Uuid,
        mut dto: BranchAuditLogDto,
    ) -> ServiceResult<BranchAuditLogDto> {
        self.branches.verify_branch_in_bank(bank_id, branch_id).await?;
        dto.branch_id = Some(branch_id);
        self.create_branch_audit_log(dto).await
    }

    pub async fn update_branch_audit_log_for_branch(
        &self,
        bank_id: Uuid,
        branch_id: Uuid,
        log_id: Uuid,
        _dto: BranchAuditLogDto,
    ) -> ServiceResult<BranchAuditLogDto> {
        self.verify_path(bank_id, branch_id, log_id).await?;
        Err(append_only())
    }

    #[instrument(skip(self), fields(branch_id = %branch_id, log_id = %log_id))]
    pub async fn delete_branch_audit_log_for_branch(&self, bank_id: Uuid, branch_id: Uuid, log_id: Uuid) -> ServiceResult<()> {
        self.verify_path(bank_id, branch_id, log_id).await?;
        self.crud.delete(log_id).await?;
        info!("branch_audit_log_deleted");
        Ok(())
    }

    pub async fn get_branch_audit_log_by_id_for_branch(
        &self,
        bank_id: Uuid,
        branch_id: Uuid,
        log_id: Uuid,
    ) -> ServiceResult<BranchAuditLogDto> {
        self.verify_path(bank_id, branch_id, log_id).await.map(BranchAuditLogDto::from_model)
    }
}
