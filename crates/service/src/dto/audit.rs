use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use models::enums::AuditAction;
use models::validation::{require_text, validate_max_len};
use models::{bank_audit_log, branch_audit_log};

use crate::crud::{required, Dto, Stamp};
use crate::errors::ServiceResult;

fn validate_entry(entity_name: &str, entity_id: Option<Uuid>) -> ServiceResult<()> {
    require_text("entityName", entity_name)?;
    validate_max_len("entityName", entity_name, 64)?;
    required(entity_id, "entityId")?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BankAuditLogDto {
    pub id: Option<Uuid>,
    pub bank_id: Option<Uuid>,
    #[schema(value_type = String, example = "CREATED")]
    pub action: AuditAction,
    pub entity_name: String,
    pub entity_id: Option<Uuid>,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<serde_json::Value>,
    pub ip_address: Option<String>,
    pub user_id: Option<String>,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub created_at: Option<DateTimeWithTimeZone>,
}

impl Dto for BankAuditLogDto {
    type Model = bank_audit_log::Model;
    const ENTITY: &'static str = "Audit log";

    fn from_model(m: bank_audit_log::Model) -> Self {
        Self {
            id: Some(m.id),
            bank_id: Some(m.bank_id),
            action: m.action,
            entity_name: m.entity_name,
            entity_id: Some(m.entity_id),
            metadata: m.metadata,
            ip_address: m.ip_address,
            user_id: m.user_id,
            created_at: Some(m.created_at),
        }
    }

    fn into_model(self, stamp: Stamp) -> ServiceResult<bank_audit_log::Model> {
        Ok(bank_audit_log::Model {
            id: stamp.id,
            bank_id: required(self.bank_id, "bankId")?,
            action: self.action,
            entity_name: self.entity_name,
            entity_id: required(self.entity_id, "entityId")?,
            metadata: self.metadata,
            ip_address: self.ip_address,
            user_id: self.user_id,
            created_at: stamp.created_at,
        })
    }

    fn validate(&self) -> ServiceResult<()> {
        required(self.bank_id, "bankId")?;
        validate_entry(&self.entity_name, self.entity_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BranchAuditLogDto {
    pub id: Option<Uuid>,
    pub branch_id: Option<Uuid>,
    #[schema(value_type = String, example = "UPDATED")]
    pub action: AuditAction,
    pub entity_name: String,
    pub entity_id: Option<Uuid>,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<serde_json::Value>,
    pub ip_address: Option<String>,
    pub user_id: Option<String>,
    #[schema(value_type = Option<String>, format = DateTime)]
    pub created_at: Option<DateTimeWithTimeZone>,
}

impl Dto for BranchAuditLogDto {
    type Model = branch_audit_log::Model;
    const ENTITY: &'static str = "Audit log";

    fn from_model(m: branch_audit_log::Model) -> Self {
        Self {
            id: Some(m.id),
            branch_id: Some(m.branch_id),
            action: m.action,
            entity_name: m.entity_name,
            entity_id: Some(m.entity_id),
            metadata: m.metadata,
            ip_address: m.ip_address,
            user_id: m.user_id,
            created_at: Some(m.created_at),
        }
    }

    fn into_model(self, stamp: Stamp) -> ServiceResult<branch_audit_log::Model> {
        Ok(branch_audit_log::Model {
            id: stamp.id,
            branch_id: required(self.branch_id, "branchId")?,
            action: self.action,
            entity_name: self.entity_name,
            entity_id: required(self.entity_id, "entityId")?,
            metadata: self.metadata,
            ip_address: self.ip_address,
            user_id: self.user_id,
            created_at: stamp.created_at,
        })
    }

    fn validate(&self) -> ServiceResult<()> {
        required(self.branch_id, "branchId")?;
        validate_entry(&self.entity_name, self.entity_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_action_and_metadata() {
        let dto: BranchAuditLogDto = serde_json::from_value(json!({
            "branchId": Uuid::new_v4(),
            "action": "DEACTIVATED",
            "entityName": "Branch",
            "entityId": Uuid::new_v4(),
            "metadata": {"reason": "refit"}
        }))
        .unwrap();
        assert_eq!(dto.action, AuditAction::Deactivated);
        dto.validate().unwrap();
        let model = dto.into_model(Stamp::new()).unwrap();
        assert_eq!(model.metadata, Some(json!({"reason": "refit"})));
    }

    #[test]
    fn entity_fields_are_required() {
        let dto = BankAuditLogDto {
            id: None,
            bank_id: Some(Uuid::new_v4()),
            action: AuditAction::Created,
            entity_name: "Bank".into(),
            entity_id: None,
            metadata: None,
            ip_address: None,
            user_id: None,
            created_at: None,
        };
        assert!(dto.validate().is_err());
    }
}
