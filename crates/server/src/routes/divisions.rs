use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use service::dto::BankDivisionDto;
use service::filter::FilterCriteria;
use service::pagination::{BankDivisionPage, Page};

use crate::errors::{ApiResult, ErrorBody};
use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/bank-divisions/filter", post(filter_divisions))
        .route("/bank-divisions", post(create_division))
        .route("/bank-divisions/:id", get(get_division).put(update_division).delete(delete_division))
        .route("/banks/:bank_id/divisions/filter", post(filter_divisions_for_bank))
        .route("/banks/:bank_id/divisions", post(create_division_for_bank))
        .route("/banks/:bank_id/divisions/:division_id", get(get_division_for_bank).put(update_division_for_bank).delete(delete_division_for_bank))
}

#[utoipa::path(post, path = "/api/v1/bank-divisions/filter", tag = "divisions", request_body = FilterCriteria,
    responses((status = 200, body = BankDivisionPage), (status = 400, body = ErrorBody)))]
pub async fn filter_divisions(State(state): State<ServerState>, Json(criteria): Json<FilterCriteria>) -> ApiResult<Json<Page<BankDivisionDto>>> {
    Ok(Json(state.services.divisions.filter_bank_divisions(&criteria).await?))
}

#[utoipa::path(post, path = "/api/v1/bank-divisions", tag = "divisions", request_body = BankDivisionDto,
    responses((status = 201, body = BankDivisionDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn create_division(State(state): State<ServerState>, Json(dto): Json<BankDivisionDto>) -> ApiResult<(StatusCode, Json<BankDivisionDto>)> {
    let created = state.services.divisions.create_bank_division(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/bank-divisions/{id}", tag = "divisions", params(("id" = Uuid, Path, description = "Division id")),
    responses((status = 200, body = BankDivisionDto), (status = 404, body = ErrorBody)))]
pub async fn get_division(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<Json<BankDivisionDto>> {
    Ok(Json(state.services.divisions.get_bank_division_by_id(id).await?))
}

#[utoipa::path(put, path = "/api/v1/bank-divisions/{id}", tag = "divisions", request_body = BankDivisionDto, params(("id" = Uuid, Path, description = "Division id")),
    responses((status = 200, body = BankDivisionDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_division(State(state): State<ServerState>, Path(id): Path<Uuid>, Json(dto): Json<BankDivisionDto>) -> ApiResult<Json<BankDivisionDto>> {
    Ok(Json(state.services.divisions.update_bank_division(id, dto).await?))
}

#[utoipa::path(delete, path = "/api/v1/bank-divisions/{id}", tag = "divisions", params(("id" = Uuid, Path, description = "Division id")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_division(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    state.services.divisions.delete_bank_division(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(post, path = "/api/v1/banks/{bank_id}/divisions/filter", tag = "divisions", request_body = FilterCriteria, params(("bank_id" = Uuid, Path, description = "Bank id")),
    responses((status = 200, body = BankDivisionPage), (status = 404, body = ErrorBody)))]
pub async fn filter_divisions_for_bank(
    State(state): State<ServerState>,
    Path(bank_id): Path<Uuid>,
    Json(criteria): Json<FilterCriteria>,
) -> ApiResult<Json<Page<BankDivisionDto>>> {
    Ok(Json(state.services.divisions.filter_bank_divisions_for_bank(bank_id, &criteria).await?))
}

#[utoipa::path(post, path = "/api/v1/banks/{bank_id}/divisions", tag = "divisions", request_body = BankDivisionDto, params(("bank_id" = Uuid, Path, description = "Bank id")),
    responses((status = 201, body = BankDivisionDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn create_division_for_bank(
    State(state): State<ServerState>,
    Path(bank_id): Path<Uuid>,
    Json(dto): Json<BankDivisionDto>,
) -> ApiResult<(StatusCode, Json<BankDivisionDto>)> {
    let created = state.services.divisions.create_bank_division_for_bank(bank_id, dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/banks/{bank_id}/divisions/{division_id}", tag = "divisions", params(("bank_id" = Uuid, Path, description = "Bank id"), ("division_id" = Uuid, Path, description = "Division id")),
    responses((status = 200, body = BankDivisionDto), (status = 404, body = ErrorBody)))]
pub async fn get_division_for_bank(State(state): State<ServerState>, Path((bank_id, division_id)): Path<(Uuid, Uuid)>) -> ApiResult<Json<BankDivisionDto>> {
    Ok(Json(state.services.divisions.get_bank_division_by_id_for_bank(bank_id, division_id).await?))
}

#[utoipa::path(put, path = "/api/v1/banks/{bank_id}/divisions/{division_id}", tag = "divisions", request_body = BankDivisionDto, params(("bank_id" = Uuid, Path, description = "Bank id"), ("division_id" = Uuid, Path, description = "Division id")),
    responses((status = 200, body = BankDivisionDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_division_for_bank(
    State(state): State<ServerState>,
    Path((bank_id, division_id)): Path<(Uuid, Uuid)>,
    Json(dto): Json<BankDivisionDto>,
) -> ApiResult<Json<BankDivisionDto>> {
    Ok(Json(state.services.divisions.update_bank_division_for_bank(bank_id, division_id, dto).await?))
}

#[utoipa::path(delete, path = "/api/v1/banks/{bank_id}/divisions/{division_id}", tag = "divisions", params(("bank_id" = Uuid, Path, description = "Bank id"), ("division_id" = Uuid, Path, description = "Division id")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_division_for_bank(State(state): State<ServerState>, Path((bank_id, division_id)): Path<(Uuid, Uuid)>) -> ApiResult<StatusCode> {
    state.services.divisions.delete_bank_division_for_bank(bank_id, division_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
