use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    /// Carries the full, caller-facing message.
    #[error("{0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// `"<Entity> not found with ID: <id>"`
    pub fn not_found(entity: &str, id: Uuid) -> Self {
        Self::NotFound(format!("{} not found with ID: {}", entity, id))
    }

    /// `"<Child> not found for <parent> with ID: <parent_id>"`
    pub fn not_found_for(child: &str, parent: &str, parent_id: Uuid) -> Self {
        Self::NotFound(format!("{} not found for {} with ID: {}", child, parent.to_lowercase(), parent_id))
    }

    pub fn required(field: &str) -> Self {
        Self::Validation(format!("{} is required", field))
    }

    /// Stable machine-readable code, independent of the message text.
    pub fn code(&self) -> u16 {
        match self {
            Self::Validation(_) => 1001,
            Self::NotFound(_) => 1004,
            Self::Conflict(_) => 1009,
            Self::Db(_) => 1500,
            Self::Model(ModelError::Validation(_)) => 1002,
            Self::Model(ModelError::Db(_)) => 1501,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Validation(m) | Self::NotFound(m) | Self::Conflict(m) | Self::Db(m) => m.clone(),
            Self::Model(ModelError::Validation(m)) | Self::Model(ModelError::Db(m)) => m.clone(),
        }
    }

    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Db(_) | Self::Model(ModelError::Db(_)))
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        Self::Db(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages() {
        let id = Uuid::nil();
        assert_eq!(
            ServiceError::not_found("Branch", id).to_string(),
            format!("Branch not found with ID: {}", id)
        );
        assert_eq!(
            ServiceError::not_found_for("Region", "Division", id).to_string(),
            format!("Region not found for division with ID: {}", id)
        );
    }

    #[test]
    fn codes_are_distinct_per_kind() {
        let errs = [
            ServiceError::Validation("v".into()),
            ServiceError::NotFound("n".into()),
            ServiceError::Conflict("c".into()),
            ServiceError::Db("d".into()),
            ServiceError::Model(ModelError::Validation("m".into())),
            ServiceError::Model(ModelError::Db("m".into())),
        ];
        let mut codes: Vec<u16> = errs.iter().map(|e| e.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errs.len());
        assert!(!ServiceError::Db("x".into()).is_client_error());
        assert!(ServiceError::Conflict("x".into()).is_client_error());
    }

    #[test]
    fn db_errors_convert() {
        let e: ServiceError = DbErr::Custom("boom".into()).into();
        assert!(matches!(e, ServiceError::Db(ref m) if m.contains("boom")));
    }
}
