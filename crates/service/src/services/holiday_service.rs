use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use models::bank_holiday;

use crate::crud::{CrudService, Dto};
use crate::dto::BankHolidayDto;
use crate::errors::{ServiceError, ServiceResult};
use crate::filter::FilterCriteria;
use crate::pagination::Page;
use crate::repository::SharedRepository;
use crate::services::{BankService, BranchService};

/// Bank-wide or branch-specific holidays.
pub struct HolidayService {
    crud: CrudService<BankHolidayDto>,
    banks: Arc<BankService>,
    branches: Arc<BranchService>,
}

impl HolidayService {
    pub fn new(repo: SharedRepository<bank_holiday::Model>, banks: Arc<BankService>, branches: Arc<BranchService>) -> Self {
        Self { crud: CrudService::new(repo), banks, branches }
    }

    pub async fn verify_holiday_in_bank(&self, bank_id: Uuid, holiday_id: Uuid) -> ServiceResult<bank_holiday::Model> {
        let (_, holiday) = self
            .crud
            .verify_owned_by(self.banks.crud(), bank_id, holiday_id, |h| h.bank_id)
            .await?;
        Ok(holiday)
    }

    async fn save(&self, existing: Option<&bank_holiday::Model>, dto: BankHolidayDto) -> ServiceResult<BankHolidayDto> {
        dto.validate()?;
        if let Some(bank_id) = dto.bank_id {
            self.banks.require_bank(bank_id).await?;
        }
        if let Some(branch_id) = dto.branch_id {
            let branch = self.branches.require_branch(branch_id).await?;
            if dto.bank_id.is_some_and(|bank_id| bank_id != branch.bank_id) {
                return Err(ServiceError::Validation(format!(
                    "branch {} does not belong to bank {}",
                    branch_id,
                    branch.bank_id
                )));
            }
        }
        match existing {
            Some(existing) => self.crud.replace(existing, dto).await,
            None => self.crud.create(dto).await,
        }
    }

    pub async fn filter_bank_holidays(&self, criteria: &FilterCriteria) -> ServiceResult<Page<BankHolidayDto>> {
        self.crud.filter(criteria).await
    }

    #[instrument(skip(self, dto), fields(bank_id = ?dto.bank_id, branch_id = ?dto.branch_id, date = %dto.holiday_date))]
    pub async fn create_bank_holiday(&self, dto: BankHolidayDto) -> ServiceResult<BankHolidayDto> {
        let created = self.save(None, dto).await?;
        info!(holiday_id = ?created.id, "holiday_created");
        Ok(created)
    }

    #[instrument(skip(self, dto), fields(holiday_id = %id))]
    pub async fn update_bank_holiday(&self, id: Uuid, dto: BankHolidayDto) -> ServiceResult<BankHolidayDto> {
        let existing = self.crud.require(id).await?;
        let updated = self.save(Some(&existing), dto).await?;
        info!("holiday_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(holiday_id = %id))]
    pub async fn delete_bank_holiday(&self, id: Uuid) -> ServiceResult<()> {
        self.crud.delete(id).await?;
        info!("holiday_deleted");
        Ok(())
    }

    pub async fn get_bank_holiday_by_id(&self, id: Uuid) -> ServiceResult<BankHolidayDto> {
        self.crud.get_by_id(id).await
    }

    pub async fn filter_bank_holidays_for_bank(&self, bank_id: Uuid, criteria: &FilterCriteria) -> ServiceResult<Page<BankHolidayDto>> {
        self.banks.require_bank(bank_id).await?;
        self.crud.filter(&criteria.clone().scoped_to("bank_id", bank_id)).await
    }

    pub async fn create_bank_holiday_for_bank(&self, bank_id: Uuid, mut dto: BankHolidayDto) -> ServiceResult<BankHolidayDto> {
        dto.bank_id = Some(bank_id);
        self.create_bank_holiday(dto).await
    }

    #[instrument(skip(self, dto), fields(bank_id = %bank_id, holiday_id = %holiday_id))]
    pub async fn update_bank_holiday_for_bank(&self, bank_id: Uuid, holiday_id: Uuid, mut dto: BankHolidayDto) -> ServiceResult<BankHolidayDto> {
        let existing = self.verify_holiday_in_bank(bank_id, holiday_id).await?;
        dto.bank_id = Some(bank_id);
        let updated = self.save(Some(&existing), dto).await?;
        info!("holiday_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(bank_id = %bank_id, holiday_id = %holiday_id))]
    pub async fn delete_bank_holiday_for_bank(&self, bank_id: Uuid, holiday_id: Uuid) -> ServiceResult<()> {
        self.verify_holiday_in_bank(bank_id, holiday_id).await?;
        self.crud.delete(holiday_id).await?;
        info!("holiday_deleted");
        Ok(())
    }

    pub async fn get_bank_holiday_by_id_for_bank(&self, bank_id: Uuid, holiday_id: Uuid) -> ServiceResult<BankHolidayDto> {
        self.verify_holiday_in_bank(bank_id, holiday_id).await.map(BankHolidayDto::from_model)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use uuid::Uuid;

    use crate::dto::BankHolidayDto;
    use crate::errors::ServiceError;
    use crate::filter::{FilterCriteria, FilterOperator};
    use crate::services::fixtures::*;

    fn holiday(bank_id: Option<Uuid>, branch_id: Option<Uuid>, name: &str, ymd: (i32, u32, u32)) -> BankHolidayDto {
        BankHolidayDto {
            bank_id,
            branch_id,
            name: name.into(),
            holiday_date: NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn holiday_needs_some_owner() {
        let s = services();
        let err = s.holidays.create_bank_holiday(holiday(None, None, "Orphan", (2025, 1, 1))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn branch_holiday_must_match_bank() {
        let s = services();
        let a = bank(&s, "A").await.id.unwrap();
        let b = bank(&s, "B").await.id.unwrap();
        let hq = branch(&s, a, "HQ").await.id.unwrap();

        let local = s.holidays.create_bank_holiday(holiday(None, Some(hq), "Founders day", (2025, 6, 1))).await.unwrap();
        assert_eq!(local.bank_id, None);

        let mixed = s.holidays.create_bank_holiday(holiday(Some(b), Some(hq), "Clash", (2025, 6, 2))).await;
        assert!(matches!(mixed, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn scoped_holidays_by_date_range() {
        let s = services();
        let bank_id = bank(&s, "A").await.id.unwrap();
        for (name, date) in [("New year", (2025, 1, 1)), ("Christmas", (2025, 12, 25)), ("Old", (2024, 12, 25))] {
            s.holidays.create_bank_holiday_for_bank(bank_id, holiday(None, None, name, date)).await.unwrap();
        }
        let criteria = FilterCriteria::new()
            .with("holidayDate", FilterOperator::Gte, "2025-01-01")
            .with("holidayDate", FilterOperator::Lte, "2025-12-31");
        let page = s.holidays.filter_bank_holidays_for_bank(bank_id, &criteria).await.unwrap();
        assert_eq!(page.total_elements, 2);

        let other = bank(&s, "B").await.id.unwrap();
        let id = page.content[0].id.unwrap();
        let err = s.holidays.get_bank_holiday_by_id_for_bank(other, id).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Holiday not found for bank with ID: {}", other));
    }
}
