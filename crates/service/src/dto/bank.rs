use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use models::validation::{require_text, validate_code, validate_country_code, validate_name};
use models::{bank, bank_division, bank_region};

use super::AuditFields;
use crate::crud::{required, Dto, Stamp};
use crate::errors::{ServiceError, ServiceResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BankDto {
    pub id: Option<Uuid>,
    #[schema(example = "ACME")]
    pub code: String,
    pub name: String,
    pub swift_code: Option<String>,
    pub country_code: Option<String>,
    /// Defaults to `true` when omitted.
    pub is_active: Option<bool>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Dto for BankDto {
    type Model = bank::Model;
    const ENTITY: &'static str = "Bank";

    fn from_model(m: bank::Model) -> Self {
        Self {
            id: Some(m.id),
            code: m.code,
            name: m.name,
            swift_code: m.swift_code,
            country_code: m.country_code,
            is_active: Some(m.is_active),
            audit: AuditFields::from_row(m.created_at, m.updated_at, m.created_by, m.updated_by),
        }
    }

    fn into_model(self, stamp: Stamp) -> ServiceResult<bank::Model> {
        Ok(bank::Model {
            id: stamp.id,
            code: self.code,
            name: self.name,
            swift_code: self.swift_code,
            country_code: self.country_code,
            is_active: self.is_active.unwrap_or(true),
            created_at: stamp.created_at,
            updated_at: stamp.updated_at,
            created_by: stamp.created_by(self.audit.created_by),
            updated_by: self.audit.updated_by,
        })
    }

    fn validate(&self) -> ServiceResult<()> {
        validate_code(&self.code)?;
        validate_name(&self.name)?;
        validate_country_code(self.country_code.as_deref())?;
        if let Some(swift) = self.swift_code.as_deref() {
            if !matches!(swift.len(), 8 | 11) || !swift.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(ServiceError::Validation("swiftCode must be 8 or 11 alphanumeric characters".into()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BankDivisionDto {
    pub id: Option<Uuid>,
    /// Taken from the path on nested endpoints.
    pub bank_id: Option<Uuid>,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Dto for BankDivisionDto {
    type Model = bank_division::Model;
    const ENTITY: &'static str = "Division";

    fn from_model(m: bank_division::Model) -> Self {
        Self {
            id: Some(m.id),
            bank_id: Some(m.bank_id),
            code: m.code,
            name: m.name,
            description: m.description,
            is_active: Some(m.is_active),
            audit: AuditFields::from_row(m.created_at, m.updated_at, m.created_by, m.updated_by),
        }
    }

    fn into_model(self, stamp: Stamp) -> ServiceResult<bank_division::Model> {
        Ok(bank_division::Model {
            id: stamp.id,
            bank_id: required(self.bank_id, "bankId")?,
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
        required(self.bank_id, "bankId")?;
        validate_code(&self.code)?;
        validate_name(&self.name)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BankRegionDto {
    pub id: Option<Uuid>,
    pub division_id: Option<Uuid>,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: Option<bool>,
    #[serde(flatten)]
    pub audit: AuditFields,
}

impl Dto for BankRegionDto {
    type Model = bank_region::Model;
    const ENTITY: &'static str = "Region";

    fn from_model(m: bank_region::Model) -> Self {
        Self {
            id: Some(m.id),
            division_id: Some(m.division_id),
            code: m.code,
            name: m.name,
            description: m.description,
            is_active: Some(m.is_active),
            audit: AuditFields::from_row(m.created_at, m.updated_at, m.created_by, m.updated_by),
        }
    }

    fn into_model(self, stamp: Stamp) -> ServiceResult<bank_region::Model> {
        Ok(bank_region::Model {
            id: stamp.id,
            division_id: required(self.division_id, "divisionId")?,
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
        required(self.division_id, "divisionId")?;
        validate_code(&self.code)?;
        require_text("name", &self.name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bank_round_trips_through_model() {
        let dto = BankDto { code: "TEST".into(), name: "Test Bank".into(), ..Default::default() };
        dto.validate().unwrap();
        let stamp = Stamp::new();
        let id = stamp.id;
        let back = BankDto::from_model(dto.clone().into_model(stamp).unwrap());
        assert_eq!(back.id, Some(id));
        assert_eq!(back.code, dto.code);
        assert_eq!(back.name, dto.name);
        assert_eq!(back.is_active, Some(true));
        assert!(back.audit.created_at.is_some());
    }

    #[test]
    fn wire_format_is_camel_case_and_flat() {
        let dto: BankDivisionDto = serde_json::from_value(json!({
            "bankId": "00000000-0000-0000-0000-000000000001",
            "code": "RET",
            "name": "Retail",
            "createdBy": "alice"
        }))
        .unwrap();
        assert_eq!(dto.audit.created_by.as_deref(), Some("alice"));
        let out = serde_json::to_value(&dto).unwrap();
        assert_eq!(out["bankId"], "00000000-0000-0000-0000-000000000001");
        assert!(out.get("audit").is_none());
        assert!(out.get("createdAt").is_some());
    }

    #[test]
    fn validation_rejects_bad_input() {
        let bad_swift = BankDto { code: "B1".into(), name: "B".into(), swift_code: Some("XYZ".into()), ..Default::default() };
        assert!(bad_swift.validate().is_err());
        let orphan = BankDivisionDto { code: "D1".into(), name: "D".into(), ..Default::default() };
        assert!(matches!(orphan.validate(), Err(ServiceError::Validation(m)) if m == "bankId is required"));
        let blank = BankRegionDto { division_id: Some(Uuid::new_v4()), code: "R1".into(), name: " ".into(), ..Default::default() };
        assert!(blank.validate().is_err());
    }
}
