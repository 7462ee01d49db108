use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};
use utoipa::ToSchema;

use models::errors::ModelError;
use service::errors::ServiceError;

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Short title such as `Not Found`.
    pub error: String,
    pub message: String,
    pub code: u16,
}

#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

pub type ApiResult<T> = Result<T, JsonApiError>;

impl JsonApiError {
    pub fn new(status: StatusCode, title: &str, message: Option<String>) -> Self {
        let message = message.unwrap_or_else(|| title.to_string());
        Self { status, body: ErrorBody { error: title.to_string(), message, code: status.as_u16() } }
    }

    fn with_code(mut self, code: u16) -> Self {
        self.body.code = code;
        self
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let (status, title) = match &e {
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            ServiceError::Validation(_) | ServiceError::Model(ModelError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "Validation Error")
            }
            ServiceError::Conflict(_) => (StatusCode::CONFLICT, "Conflict"),
            ServiceError::Db(_) | ServiceError::Model(ModelError::Db(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };
        if e.is_client_error() {
            warn!(code = e.code(), error = %e, "request rejected");
        } else {
            error!(code = e.code(), error = %e, "request failed");
        }
        Self::new(status, title, Some(e.message())).with_code(e.code())
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
}
