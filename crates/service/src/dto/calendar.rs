use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use models::validation::{require_text, validate_max_len, validate_name};
use models::{bank_holiday, calendar_assignment, working_calendar};

use super::AuditFields;
use crate::crud::{required, Dto, Stamp};
use crate::errors::{ServiceError, ServiceResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BankHolidayDto {
    pub id: Option<Uuid>,
    pub bank_id: Option<Uuid>,
    pub branch_id: Option<Uuid>,
    pub name: String,
    #[schema(value_type = String, format = Date, example = "2025-12-25")]
    pub holiday_date: NaiveDate,
    #[serde(default)]
    pub is_recurring: bool,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Dto for BankHolidayDto {
    type Model = bank_holiday::Model;
    const ENTITY: &'static str = "Holiday";

    fn from_model(m: bank_holiday::Model) -> Self {
        Self {
            id: Some(m.id),
            bank_id: m.bank_id,
            branch_id: m.branch_id,
            name: m.name,
            holiday_date: m.holiday_date,
            is_recurring: m.is_recurring,
            description: m.description,
            is_active: Some(m.is_active),
            audit: AuditFields::from_row(m.created_at, m.updated_at, m.created_by, m.updated_by),
        }
    }

    fn into_model(self, stamp: Stamp) -> ServiceResult<bank_holiday::Model> {
        Ok(bank_holiday::Model {
            id: stamp.id,
            bank_id: self.bank_id,
            branch_id: self.branch_id,
            name: self.name,
            holiday_date: self.holiday_date,
            is_recurring: self.is_recurring,
            description: self.description,
            is_active: self.is_active.unwrap_or(true),
            created_at: stamp.created_at,
            updated_at: stamp.updated_at,
            created_by: stamp.created_by(self.audit.created_by),
            updated_by: self.audit.updated_by,
        })
    }

    fn validate(&self) -> ServiceResult<()> {
        if self.bank_id.is_none() && self.branch_id.is_none() {
            return Err(ServiceError::Validation("holiday requires bankId or branchId".into()));
        }
        validate_name(&self.name)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkingCalendarDto {
    pub id: Option<Uuid>,
    pub bank_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    #[schema(example = "Europe/London")]
    pub timezone: String,
    #[serde(default)]
    pub is_default: bool,
    pub is_active: Option<bool>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Dto for WorkingCalendarDto {
    type Model = working_calendar::Model;
    const ENTITY: &'static str = "Calendar";

    fn from_model(m: working_calendar::Model) -> Self {
        Self {
            id: Some(m.id),
            bank_id: Some(m.bank_id),
            name: m.name,
            description: m.description,
            timezone: m.timezone,
            is_default: m.is_default,
            is_active: Some(m.is_active),
            audit: AuditFields::from_row(m.created_at, m.updated_at, m.created_by, m.updated_by),
        }
    }

    fn into_model(self, stamp: Stamp) -> ServiceResult<working_calendar::Model> {
        Ok(working_calendar::Model {
            id: stamp.id,
            bank_id: required(self.bank_id, "bankId")?,
            name: self.name,
            description: self.description,
            timezone: self.timezone,
            is_default: self.is_default,
            is_active: self.is_active.unwrap_or(true),
            created_at: stamp.created_at,
            updated_at: stamp.updated_at,
            created_by: stamp.created_by(self.audit.created_by),
            updated_by: self.audit.updated_by,
        })
    }

    fn validate(&self) -> ServiceResult<()> {
        required(self.bank_id, "bankId")?;
        validate_name(&self.name)?;
        require_text("timezone", &self.timezone)?;
        validate_max_len("timezone", &self.timezone, 64)?;
        if self.timezone.contains(char::is_whitespace) {
            return Err(ServiceError::Validation("timezone must be an IANA zone name".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarAssignmentDto {
    pub id: Option<Uuid>,
    pub calendar_id: Option<Uuid>,
    pub branch_id: Option<Uuid>,
    pub department_id: Option<Uuid>,
    pub position_id: Option<Uuid>,
    #[schema(value_type = String, format = Date)]
    pub effective_from: NaiveDate,
    #[schema(value_type = Option<String>, format = Date)]
    pub effective_to: Option<NaiveDate>,
    pub is_active: Option<bool>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Dto for CalendarAssignmentDto {
    type Model = calendar_assignment::Model;
    const ENTITY: &'static str = "Assignment";

    fn from_model(m: calendar_assignment::Model) -> Self {
        Self {
            id: Some(m.id),
            calendar_id: Some(m.calendar_id),
            branch_id: m.branch_id,
            department_id: m.department_id,
            position_id: m.position_id,
            effective_from: m.effective_from,
            effective_to: m.effective_to,
            is_active: Some(m.is_active),
            audit: AuditFields::from_row(m.created_at, m.updated_at, m.created_by, m.updated_by),
        }
    }

    fn into_model(self, stamp: Stamp) -> ServiceResult<calendar_assignment::Model> {
        Ok(calendar_assignment::Model {
            id: stamp.id,
            calendar_id: required(self.calendar_id, "calendarId")?,
            branch_id: self.branch_id,
            department_id: self.department_id,
            position_id: self.position_id,
            effective_from: self.effective_from,
            effective_to: self.effective_to,
            is_active: self.is_active.unwrap_or(true),
            created_at: stamp.created_at,
            updated_at: stamp.updated_at,
            created_by: stamp.created_by(self.audit.created_by),
            updated_by: self.audit.updated_by,
        })
    }

    fn validate(&self) -> ServiceResult<()> {
        required(self.calendar_id, "calendarId")?;
        if self.branch_id.is_none() && self.department_id.is_none() && self.position_id.is_none() {
            return Err(ServiceError::Validation(
                "assignment requires at least one of branchId, departmentId, positionId".into(),
            ));
        }
        if let Some(to) = self.effective_to {
            if to < self.effective_from {
                return Err(ServiceError::Validation("effectiveTo must not be before effectiveFrom".into()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn holiday_needs_a_scope() {
        let dto = BankHolidayDto { name: "New Year".into(), holiday_date: date(2025, 1, 1), ..Default::default() };
        assert!(dto.validate().is_err());
        let scoped = BankHolidayDto { branch_id: Some(Uuid::new_v4()), ..dto };
        assert!(scoped.validate().is_ok());
    }

    #[test]
    fn assignment_date_range() {
        let base = CalendarAssignmentDto {
            calendar_id: Some(Uuid::new_v4()),
            branch_id: Some(Uuid::new_v4()),
            effective_from: date(2025, 3, 1),
            ..Default::default()
        };
        assert!(base.validate().is_ok());
        let inverted = CalendarAssignmentDto { effective_to: Some(date(2025, 2, 1)), ..base.clone() };
        assert!(inverted.validate().is_err());
        let unscoped = CalendarAssignmentDto { branch_id: None, ..base };
        assert!(unscoped.validate().is_err());
    }

    #[test]
    fn calendar_timezone_required() {
        let dto = WorkingCalendarDto { bank_id: Some(Uuid::new_v4()), name: "Std".into(), timezone: "".into(), ..Default::default() };
        assert!(dto.validate().is_err());
        let ok = WorkingCalendarDto { timezone: "Europe/Paris".into(), ..dto };
        assert!(ok.validate().is_ok());
    }
}
