use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use models::working_calendar;

use crate::crud::{required, CrudService, Dto};
use crate::dto::WorkingCalendarDto;
use crate::errors::{ServiceError, ServiceResult};
use crate::filter::FilterCriteria;
use crate::pagination::Page;
use crate::repository::SharedRepository;
use crate::services::BankService;

pub struct CalendarService {
    crud: CrudService<WorkingCalendarDto>,
    banks: Arc<BankService>,
}

impl CalendarService {
    pub fn new(repo: SharedRepository<working_calendar::Model>, banks: Arc<BankService>) -> Self {
        Self { crud: CrudService::new(repo), banks }
    }

    pub(crate) fn crud(&self) -> &CrudService<WorkingCalendarDto> {
        &self.crud
    }

    pub async fn verify_calendar_in_bank(&self, bank_id: Uuid, calendar_id: Uuid) -> ServiceResult<working_calendar::Model> {
        let (_, calendar) = self
            .crud
            .verify_owned_by(self.banks.crud(), bank_id, calendar_id, |c| Some(c.bank_id))
            .await?;
        Ok(calendar)
    }

    /// Clears `is_default` on every other default calendar of the bank.
    async fn demote_defaults(&self, bank_id: Uuid, keep: Option<Uuid>) -> ServiceResult<()> {
        let criteria = FilterCriteria::new().scoped_to("bank_id", bank_id).where_eq("is_default", true);
        for mut calendar in self.crud.find_all(&criteria).await? {
            if Some(calendar.id) == keep {
                continue;
            }
            debug!(calendar_id = %calendar.id, "demoting previous default calendar");
            calendar.is_default = false;
            calendar.updated_at = Utc::now().fixed_offset();
            self.crud.overwrite(calendar).await?;
        }
        Ok(())
    }

    async fn save(&self, existing: Option<&working_calendar::Model>, dto: WorkingCalendarDto) -> ServiceResult<WorkingCalendarDto> {
        let bank_id = required(dto.bank_id, "bankId")?;
        self.banks.require_bank(bank_id).await?;
        let saved = match existing {
            Some(existing) => self.crud.replace(existing, dto).await?,
            None => self.crud.create(dto).await?,
        };
        if saved.is_default {
            self.demote_defaults(bank_id, saved.id).await?;
        }
        Ok(saved)
    }

    /// The bank's calendar flagged `is_default`.
    pub async fn get_default_calendar(&self, bank_id: Uuid) -> ServiceResult<WorkingCalendarDto> {
        self.banks.require_bank(bank_id).await?;
        let criteria = FilterCriteria::new().scoped_to("bank_id", bank_id).where_eq("is_default", true);
        self.crud
            .find_all(&criteria)
            .await?
            .into_iter()
            .next()
            .map(WorkingCalendarDto::from_model)
            .ok_or_else(|| ServiceError::not_found_for("Default calendar", "Bank", bank_id))
    }

    pub async fn filter_working_calendars(&self, criteria: &FilterCriteria) -> ServiceResult<Page<WorkingCalendarDto>> {
        self.crud.filter(criteria).await
    }

    #[instrument(skip(self, dto), fields(bank_id = ?dto.bank_id, is_default = dto.is_default))]
    pub async fn create_working_calendar(&self, dto: WorkingCalendarDto) -> ServiceResult<WorkingCalendarDto> {
        let created = self.save(None, dto).await?;
        info!(calendar_id = ?created.id, "calendar_created");
        Ok(created)
    }

    #[instrument(skip(self, dto), fields(calendar_id = %id))]
    pub async fn update_working_calendar(&self, id: Uuid, dto: WorkingCalendarDto) -> ServiceResult<WorkingCalendarDto> {
        let existing = self.crud.require(id).await?;
        let updated = self.save(Some(&existing), dto).await?;
        info!(is_default = updated.is_default, "calendar_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(calendar_id = %id))]
    pub async fn delete_working_calendar(&self, id: Uuid) -> ServiceResult<()> {
        self.crud.delete(id).await?;
        info!("calendar_deleted");
        Ok(())
    }

    pub async fn get_working_calendar_by_id(&self, id: Uuid) -> ServiceResult<WorkingCalendarDto> {
        self.crud.get_by_id(id).await
    }

    pub async fn filter_working_calendars_for_bank(&self, bank_id: Uuid, criteria: &FilterCriteria) -> ServiceResult<Page<WorkingCalendarDto>> {
        self.banks.require_bank(bank_id).await?;
        self.crud.filter(&criteria.clone().scoped_to("bank_id", bank_id)).await
    }

    pub async fn create_working_calendar_for_bank(&self, bank_id: Uuid, mut dto: WorkingCalendarDto) -> ServiceResult<WorkingCalendarDto> {
        dto.bank_id = Some(bank_id);
        self.create_working_calendar(dto).await
    }

    #[instrument(skip(self, dto), fields(bank_id = %bank_id, calendar_id = %calendar_id))]
    pub async fn update_working_calendar_for_bank(
        &self,
        bank_id: Uuid,
        calendar_id: Uuid,
        mut dto: WorkingCalendarDto,
    ) -> ServiceResult<WorkingCalendarDto> {
        let existing = self.verify_calendar_in_bank(bank_id, calendar_id).await?;
        dto.bank_id = Some(bank_id);
        let updated = self.save(Some(&existing), dto).await?;
        info!(is_default = updated.is_default, "calendar_updated");
        Ok(updated)
    }

    #[instrument(skip(self), fields(bank_id = %bank_id, calendar_id = %calendar_id))]
    pub async fn delete_working_calendar_for_bank(&self, bank_id: Uuid, calendar_id: Uuid) -> ServiceResult<()> {
        self.verify_calendar_in_bank(bank_id, calendar_id).await?;
        self.crud.delete(calendar_id).await?;
        info!("calendar_deleted");
        Ok(())
    }

    pub async fn get_working_calendar_by_id_for_bank(&self, bank_id: Uuid, calendar_id: Uuid) -> ServiceResult<WorkingCalendarDto> {
        self.verify_calendar_in_bank(bank_id, calendar_id)
            .await
            .map(WorkingCalendarDto::from_model)
    }
}

#[cfg(test)]
mod tests {
    use crate::dto::WorkingCalendarDto;
    use crate::errors::ServiceError;
    use crate::filter::FilterCriteria;
    use crate::services::fixtures::*;

    #[tokio::test]
    async fn only_one_default_per_bank() {
        let s = services();
        let bank_id = bank(&s, "A").await.id.unwrap();
        let other_bank = bank(&s, "B").await.id.unwrap();
        let first = calendar(&s, bank_id, "Standard", true).await;
        let foreign = calendar(&s, other_bank, "Standard", true).await;
        let second = calendar(&s, bank_id, "Summer", true).await;

        let default = s.calendars.get_default_calendar(bank_id).await.unwrap();
        assert_eq!(default.id, second.id);

        let demoted = s.calendars.get_working_calendar_by_id(first.id.unwrap()).await.unwrap();
        assert!(!demoted.is_default);
        assert!(demoted.audit.updated_at >= first.audit.updated_at);

        // other banks keep their own default
        let untouched = s.calendars.get_default_calendar(other_bank).await.unwrap();
        assert_eq!(untouched.id, foreign.id);
    }

    #[tokio::test]
    async fn default_missing_is_not_found() {
        let s = services();
        let bank_id = bank(&s, "A").await.id.unwrap();
        calendar(&s, bank_id, "Plain", false).await;
        let err = s.calendars.get_default_calendar(bank_id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.to_string(), format!("Default calendar not found for bank with ID: {}", bank_id));
    }

    #[tokio::test]
    async fn timezone_is_validated() {
        let s = services();
        let bank_id = bank(&s, "A").await.id.unwrap();
        let dto = WorkingCalendarDto { name: "Bad".into(), timezone: "Europe / London".into(), ..Default::default() };
        let res = s.calendars.create_working_calendar_for_bank(bank_id, dto).await;
        assert!(matches!(res, Err(ServiceError::Validation(_))));
        let page = s.calendars.filter_working_calendars_for_bank(bank_id, &FilterCriteria::new()).await.unwrap();
        assert_eq!(page.total_elements, 0);
    }
}
