use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use service::dto::BranchHoursDto;
use service::filter::FilterCriteria;
use service::pagination::{BranchHoursPage, Page};

use crate::errors::{ApiResult, ErrorBody};
use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/branch-hours/filter", post(filter_branch_hours))
        .route("/branch-hours", post(create_hours))
        .route("/branch-hours/:id", get(get_hours).put(update_hours).delete(delete_hours))
        .route("/banks/:bank_id/branches/:branch_id/hours/filter", post(filter_branch_hours_for_branch))
        .route("/banks/:bank_id/branches/:branch_id/hours", post(create_hours_for_branch))
        .route("/banks/:bank_id/branches/:branch_id/hours/:hours_id", get(get_hours_for_branch).put(update_hours_for_branch).delete(delete_hours_for_branch))
}

#[utoipa::path(post, path = "/api/v1/branch-hours/filter", tag = "hours", request_body = FilterCriteria,
    responses((status = 200, body = BranchHoursPage), (status = 400, body = ErrorBody)))]
pub async fn filter_branch_hours(State(state): State<ServerState>, Json(criteria): Json<FilterCriteria>) -> ApiResult<Json<Page<BranchHoursDto>>> {
    Ok(Json(state.services.hours.filter_branch_hours(&criteria).await?))
}

#[utoipa::path(post, path = "/api/v1/branch-hours", tag = "hours", request_body = BranchHoursDto,
    responses((status = 201, body = BranchHoursDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn create_hours(State(state): State<ServerState>, Json(dto): Json<BranchHoursDto>) -> ApiResult<(StatusCode, Json<BranchHoursDto>)> {
    let created = state.services.hours.create_branch_hours(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/branch-hours/{id}", tag = "hours", params(("id" = Uuid, Path, description = "Branch hours id")),
    responses((status = 200, body = BranchHoursDto), (status = 404, body = ErrorBody)))]
pub async fn get_hours(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<Json<BranchHoursDto>> {
    Ok(Json(state.services.hours.get_branch_hours_by_id(id).await?))
}

#[utoipa::path(put, path = "/api/v1/branch-hours/{id}", tag = "hours", request_body = BranchHoursDto, params(("id" = Uuid, Path, description = "Branch hours id")),
    responses((status = 200, body = BranchHoursDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_hours(State(state): State<ServerState>, Path(id): Path<Uuid>, Json(dto): Json<BranchHoursDto>) -> ApiResult<Json<BranchHoursDto>> {
    Ok(Json(state.services.hours.update_branch_hours(id, dto).await?))
}

#[utoipa::path(delete, path = "/api/v1/branch-hours/{id}", tag = "hours", params(("id" = Uuid, Path, description = "Branch hours id")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_hours(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    state.services.hours.delete_branch_hours(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(post, path = "/api/v1/banks/{bank_id}/branches/{branch_id}/hours/filter", tag = "hours", request_body = FilterCriteria, params(("bank_id" = Uuid, Path, description = "Bank id"), ("branch_id" = Uuid, Path, description = "Branch id")),
    responses((status = 200, body = BranchHoursPage), (status = 404, body = ErrorBody)))]
pub async fn filter_branch_hours_for_branch(
    State(state): State<ServerState>,
    Path((bank_id, branch_id)): Path<(Uuid, Uuid)>,
    Json(criteria): Json<FilterCriteria>,
) -> ApiResult<Json<Page<BranchHoursDto>>> {
    Ok(Json(state.services.hours.filter_branch_hours_for_branch(bank_id, branch_id, &criteria).await?))
}

#[utoipa::path(post, path = "/api/v1/banks/{bank_id}/branches/{branch_id}/hours", tag = "hours", request_body = BranchHoursDto, params(("bank_id" = Uuid, Path, description = "Bank id"), ("branch_id" = Uuid, Path, description = "Branch id")),
    responses((status = 201, body = BranchHoursDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn create_hours_for_branch(
    State(state): State<ServerState>,
    Path((bank_id, branch_id)): Path<(Uuid, Uuid)>,
    Json(dto): Json<BranchHoursDto>,
) -> ApiResult<(StatusCode, Json<BranchHoursDto>)> {
    let created = state.services.hours.create_branch_hours_for_branch(bank_id, branch_id, dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/banks/{bank_id}/branches/{branch_id}/hours/{hours_id}", tag = "hours", params(("bank_id" = Uuid, Path, description = "Bank id"), ("branch_id" = Uuid, Path, description = "Branch id"), ("hours_id" = Uuid, Path, description = "Hours id")),
    responses((status = 200, body = BranchHoursDto), (status = 404, body = ErrorBody)))]
pub async fn get_hours_for_branch(State(state): State<ServerState>, Path((bank_id, branch_id, hours_id)): Path<(Uuid, Uuid, Uuid)>) -> ApiResult<Json<BranchHoursDto>> {
    Ok(Json(state.services.hours.get_branch_hours_by_id_for_branch(bank_id, branch_id, hours_id).await?))
}

#[utoipa::path(put, path = "/api/v1/banks/{bank_id}/branches/{branch_id}/hours/{hours_id}", tag = "hours", request_body = BranchHoursDto, params(("bank_id" = Uuid, Path, description = "Bank id"), ("branch_id" = Uuid, Path, description = "Branch id"), ("hours_id" = Uuid, Path, description = "Hours id")),
    responses((status = 200, body = BranchHoursDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_hours_for_branch(
    State(state): State<ServerState>,
    Path((bank_id, branch_id, hours_id)): Path<(Uuid, Uuid, Uuid)>,
    Json(dto): Json<BranchHoursDto>,
) -> ApiResult<Json<BranchHoursDto>> {
    Ok(Json(state.services.hours.update_branch_hours_for_branch(bank_id, branch_id, hours_id, dto).await?))
}

#[utoipa::path(delete, path = "/api/v1/banks/{bank_id}/branches/{branch_id}/hours/{hours_id}", tag = "hours", params(("bank_id" = Uuid, Path, description = "Bank id"), ("branch_id" = Uuid, Path, description = "Branch id"), ("hours_id" = Uuid, Path, description = "Hours id")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_hours_for_branch(State(state): State<ServerState>, Path((bank_id, branch_id, hours_id)): Path<(Uuid, Uuid, Uuid)>) -> ApiResult<StatusCode> {
    state.services.hours.delete_branch_hours_for_branch(bank_id, branch_id, hours_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
