use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use service::dto::BranchDto;
use service::filter::FilterCriteria;
use service::pagination::{BranchPage, Page};

use crate::errors::{ApiResult, ErrorBody};
use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/branches/filter", post(filter_branches))
        .route("/branches", post(create_branch))
        .route("/branches/:id", get(get_branch).put(update_branch).delete(delete_branch))
        .route("/banks/:bank_id/branches/filter", post(filter_branches_for_bank))
        .route("/banks/:bank_id/branches", post(create_branch_for_bank))
        .route("/banks/:bank_id/branches/:branch_id", get(get_branch_for_bank).put(update_branch_for_bank).delete(delete_branch_for_bank))
}

#[utoipa::path(post, path = "/api/v1/branches/filter", tag = "branches", request_body = FilterCriteria,
    responses((status = 200, body = BranchPage), (status = 400, body = ErrorBody)))]
pub async fn filter_branches(State(state): State<ServerState>, Json(criteria): Json<FilterCriteria>) -> ApiResult<Json<Page<BranchDto>>> {
    Ok(Json(state.services.branches.filter_branches(&criteria).await?))
}

#[utoipa::path(post, path = "/api/v1/branches", tag = "branches", request_body = BranchDto,
    responses((status = 201, body = BranchDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn create_branch(State(state): State<ServerState>, Json(dto): Json<BranchDto>) -> ApiResult<(StatusCode, Json<BranchDto>)> {
    let created = state.services.branches.create_branch(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/branches/{id}", tag = "branches", params(("id" = Uuid, Path, description = "Branch id")),
    responses((status = 200, body = BranchDto), (status = 404, body = ErrorBody)))]
pub async fn get_branch(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<Json<BranchDto>> {
    Ok(Json(state.services.branches.get_branch_by_id(id).await?))
}

#[utoipa::path(put, path = "/api/v1/branches/{id}", tag = "branches", request_body = BranchDto, params(("id" = Uuid, Path, description = "Branch id")),
    responses((status = 200, body = BranchDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_branch(State(state): State<ServerState>, Path(id): Path<Uuid>, Json(dto): Json<BranchDto>) -> ApiResult<Json<BranchDto>> {
    Ok(Json(state.services.branches.update_branch(id, dto).await?))
}

#[utoipa::path(delete, path = "/api/v1/branches/{id}", tag = "branches", params(("id" = Uuid, Path, description = "Branch id")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_branch(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    state.services.branches.delete_branch(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(post, path = "/api/v1/banks/{bank_id}/branches/filter", tag = "branches", request_body = FilterCriteria, params(("bank_id" = Uuid, Path, description = "Bank id")),
    responses((status = 200, body = BranchPage), (status = 404, body = ErrorBody)))]
pub async fn filter_branches_for_bank(
    State(state): State<ServerState>,
    Path(bank_id): Path<Uuid>,
    Json(criteria): Json<FilterCriteria>,
) -> ApiResult<Json<Page<BranchDto>>> {
    Ok(Json(state.services.branches.filter_branches_for_bank(bank_id, &criteria).await?))
}

#[utoipa::path(post, path = "/api/v1/banks/{bank_id}/branches", tag = "branches", request_body = BranchDto, params(("bank_id" = Uuid, Path, description = "Bank id")),
    responses((status = 201, body = BranchDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn create_branch_for_bank(
    State(state): State<ServerState>,
    Path(bank_id): Path<Uuid>,
    Json(dto): Json<BranchDto>,
) -> ApiResult<(StatusCode, Json<BranchDto>)> {
    let created = state.services.branches.create_branch_for_bank(bank_id, dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/banks/{bank_id}/branches/{branch_id}", tag = "branches", params(("bank_id" = Uuid, Path, description = "Bank id"), ("branch_id" = Uuid, Path, description = "Branch id")),
    responses((status = 200, body = BranchDto), (status = 404, body = ErrorBody)))]
pub async fn get_branch_for_bank(State(state): State<ServerState>, Path((bank_id, branch_id)): Path<(Uuid, Uuid)>) -> ApiResult<Json<BranchDto>> {
    Ok(Json(state.services.branches.get_branch_by_id_for_bank(bank_id, branch_id).await?))
}

#[utoipa::path(put, path = "/api/v1/banks/{bank_id}/branches/{branch_id}", tag = "branches", request_body = BranchDto, params(("bank_id" = Uuid, Path, description = "Bank id"), ("branch_id" = Uuid, Path, description = "Branch id")),
    responses((status = 200, body = BranchDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_branch_for_bank(
    State(state): State<ServerState>,
    Path((bank_id, branch_id)): Path<(Uuid, Uuid)>,
    Json(dto): Json<BranchDto>,
) -> ApiResult<Json<BranchDto>> {
    Ok(Json(state.services.branches.update_branch_for_bank(bank_id, branch_id, dto).await?))
}

#[utoipa::path(delete, path = "/api/v1/banks/{bank_id}/branches/{branch_id}", tag = "branches", params(("bank_id" = Uuid, Path, description = "Bank id"), ("branch_id" = Uuid, Path, description = "Branch id")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_branch_for_bank(State(state): State<ServerState>, Path((bank_id, branch_id)): Path<(Uuid, Uuid)>) -> ApiResult<StatusCode> {
    state.services.branches.delete_branch_for_bank(bank_id, branch_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
