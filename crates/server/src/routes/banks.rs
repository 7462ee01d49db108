use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use service::dto::BankDto;
use service::filter::FilterCriteria;
use service::pagination::{BankPage, Page};

use crate::errors::{ApiResult, ErrorBody};
use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/banks/filter", post(filter_banks))
        .route("/banks", post(create_bank))
        .route("/banks/:bank_id", get(get_bank).put(update_bank).delete(delete_bank))
}

#[utoipa::path(post, path = "/api/v1/banks/filter", tag = "banks", request_body = FilterCriteria,
    responses((status = 200, body = BankPage), (status = 400, body = ErrorBody)))]
pub async fn filter_banks(State(state): State<ServerState>, Json(criteria): Json<FilterCriteria>) -> ApiResult<Json<Page<BankDto>>> {
    Ok(Json(state.services.banks.filter_banks(&criteria).await?))
}

#[utoipa::path(post, path = "/api/v1/banks", tag = "banks", request_body = BankDto,
    responses((status = 201, body = BankDto), (status = 400, body = ErrorBody), (status = 409, body = ErrorBody)))]
pub async fn create_bank(State(state): State<ServerState>, Json(dto): Json<BankDto>) -> ApiResult<(StatusCode, Json<BankDto>)> {
    let created = state.services.banks.create_bank(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/banks/{bank_id}", tag = "banks",
    params(("bank_id" = Uuid, Path, description = "Bank id")),
    responses((status = 200, body = BankDto), (status = 404, body = ErrorBody)))]
pub async fn get_bank(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<Json<BankDto>> {
    Ok(Json(state.services.banks.get_bank_by_id(id).await?))
}

#[utoipa::path(put, path = "/api/v1/banks/{bank_id}", tag = "banks", request_body = BankDto,
    params(("bank_id" = Uuid, Path, description = "Bank id")),
    responses((status = 200, body = BankDto), (status = 404, body = ErrorBody), (status = 409, body = ErrorBody)))]
pub async fn update_bank(State(state): State<ServerState>, Path(id): Path<Uuid>, Json(dto): Json<BankDto>) -> ApiResult<Json<BankDto>> {
    Ok(Json(state.services.banks.update_bank(id, dto).await?))
}

#[utoipa::path(delete, path = "/api/v1/banks/{bank_id}", tag = "banks",
    params(("bank_id" = Uuid, Path, description = "Bank id")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_bank(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    state.services.banks.delete_bank(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
