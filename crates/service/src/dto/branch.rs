use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use models::enums::{BranchStatus, DayOfWeek};
use models::validation::{require_text, validate_code, validate_country_code, validate_email, validate_max_len, validate_name};
use models::{branch, branch_department, branch_hours, branch_position};

use super::AuditFields;
use crate::crud::{required, Dto, Stamp};
use crate::errors::{ServiceError, ServiceResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BranchDto {
    pub id: Option<Uuid>,
    pub bank_id: Option<Uuid>,
    pub region_id: Option<Uuid>,
    pub code: String,
    pub name: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    #[schema(value_type = String, example = "OPEN")]
    pub status: BranchStatus,
    pub is_active: Option<bool>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Dto for BranchDto {
    type Model = branch::Model;
    const ENTITY: &'static str = "Branch";

    fn from_model(m: branch::Model) -> Self {
        Self {
            id: Some(m.id),
            bank_id: Some(m.bank_id),
            region_id: m.region_id,
            code: m.code,
            name: m.name,
            address_line1: m.address_line1,
            address_line2: m.address_line2,
            city: m.city,
            state: m.state,
            postal_code: m.postal_code,
            country_code: m.country_code,
            phone: m.phone,
            email: m.email,
            status: m.status,
            is_active: Some(m.is_active),
            audit: AuditFields::from_row(m.created_at, m.updated_at, m.created_by, m.updated_by),
        }
    }

    fn into_model(self, stamp: Stamp) -> ServiceResult<branch::Model> {
        Ok(branch::Model {
            id: stamp.id,
            bank_id: required(self.bank_id, "bankId")?,
            region_id: self.region_id,
            code: self.code,
            name: self.name,
            address_line1: self.address_line1,
            address_line2: self.address_line2,
            city: self.city,
            state: self.state,
            postal_code: self.postal_code,
            country_code: self.country_code,
            phone: self.phone,
            email: self.email,
            status: self.status,
            is_active: self.is_active.unwrap_or(true),
            created_at: stamp.created_at,
            updated_at: stamp.updated_at,
            created_by: stamp.created_by(self.audit.created_by),
            updated_by: self.audit.updated_by,
        })
    }

    fn validate(&self) -> ServiceResult<()> {
        required(self.bank_id, "bankId")?;
        validate_code(&self.code)?;
        validate_name(&self.name)?;
        require_text("addressLine1", &self.address_line1)?;
        validate_max_len("addressLine1", &self.address_line1, 256)?;
        require_text("city", &self.city)?;
        validate_country_code(self.country_code.as_deref())?;
        validate_email(self.email.as_deref())?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BranchDepartmentDto {
    pub id: Option<Uuid>,
    pub branch_id: Option<Uuid>,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Dto for BranchDepartmentDto {
    type Model = branch_department::Model;
    const ENTITY: &'static str = "Department";

    fn from_model(m: branch_department::Model) -> Self {
        Self {
            id: Some(m.id),
            branch_id: Some(m.branch_id),
            code: m.code,
            name: m.name,
            description: m.description,
            is_active: Some(m.is_active),
            audit: AuditFields::from_row(m.created_at, m.updated_at, m.created_by, m.updated_by),
        }
    }

    fn into_model(self, stamp: Stamp) -> ServiceResult<branch_department::Model> {
        Ok(branch_department::Model {
            id: stamp.id,
            branch_id: required(self.branch_id, "branchId")?,
            code: self.code,
            name: self.name,
            description: self.description,
            is_active: self.is_active.unwrap_or(true),
            created_at: stamp.created_at,
            updated_at: stamp.updated_at,
            created_by: stamp.created_by(self.audit.created_by),
            updated_by: self.audit.updated_by,
        })
    }

    fn validate(&self) -> ServiceResult<()> {
        required(self.branch_id, "branchId")?;
        validate_code(&self.code)?;
        validate_name(&self.name)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BranchPositionDto {
    pub id: Option<Uuid>,
    pub department_id: Option<Uuid>,
    pub code: String,
    /// Job title.
    pub title: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Dto for BranchPositionDto {
    type Model = branch_position::Model;
    const ENTITY: &'static str = "Position";

    fn from_model(m: branch_position::Model) -> Self {
        Self {
            id: Some(m.id),
            department_id: Some(m.department_id),
            code: m.code,
            title: m.title,
            description: m.description,
            is_active: Some(m.is_active),
            audit: AuditFields::from_row(m.created_at, m.updated_at, m.created_by, m.updated_by),
        }
    }

    fn into_model(self, stamp: Stamp) -> ServiceResult<branch_position::Model> {
        Ok(branch_position::Model {
            id: stamp.id,
            department_id: required(self.department_id, "departmentId")?,
            code: self.code,
            title: self.title,
            description: self.description,
            is_active: self.is_active.unwrap_or(true),
            created_at: stamp.created_at,
            updated_at: stamp.updated_at,
            created_by: stamp.created_by(self.audit.created_by),
            updated_by: self.audit.updated_by,
        })
    }

    fn validate(&self) -> ServiceResult<()> {
        required(self.department_id, "departmentId")?;
        validate_code(&self.code)?;
        require_text("title", &self.title)?;
        validate_max_len("title", &self.title, 128)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BranchHoursDto {
    pub id: Option<Uuid>,
    pub branch_id: Option<Uuid>,
    #[schema(value_type = String, example = "MONDAY")]
    pub day_of_week: DayOfWeek,
    #[schema(value_type = Option<String>, example = "09:00:00")]
    pub open_time: Option<NaiveTime>,
    #[schema(value_type = Option<String>, example = "17:00:00")]
    pub close_time: Option<NaiveTime>,
    #[serde(default)]
    pub is_closed: bool,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Dto for BranchHoursDto {
    type Model = branch_hours::Model;
    const ENTITY: &'static str = "Branch hours";

    fn from_model(m: branch_hours::Model) -> Self {
        Self {
            id: Some(m.id),
            branch_id: Some(m.branch_id),
            day_of_week: m.day_of_week,
            open_time: m.open_time,
            close_time: m.close_time,
            is_closed: m.is_closed,
            audit: AuditFields::from_row(m.created_at, m.updated_at, m.created_by, m.updated_by),
        }
    }

    fn into_model(self, stamp: Stamp) -> ServiceResult<branch_hours::Model> {
        Ok(branch_hours::Model {
            id: stamp.id,
            branch_id: required(self.branch_id, "branchId")?,
            day_of_week: self.day_of_week,
            open_time: self.open_time,
            close_time: self.close_time,
            is_closed: self.is_closed,
            created_at: stamp.created_at,
            updated_at: stamp.updated_at,
            created_by: stamp.created_by(self.audit.created_by),
            updated_by: self.audit.updated_by,
        })
    }

    /// Open days need both times with `openTime < closeTime`.
    fn validate(&self) -> ServiceResult<()> {
        required(self.branch_id, "branchId")?;
        if self.is_closed {
            return Ok(());
        }
        match (self.open_time, self.close_time) {
            (Some(open), Some(close)) if open < close => Ok(()),
            (Some(_), Some(_)) => Err(ServiceError::Validation("openTime must be before closeTime".into())),
            _ => Err(ServiceError::Validation("openTime and closeTime are required unless isClosed".into())),
        }
    }
}
