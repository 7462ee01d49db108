use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use service::dto::BranchPositionDto;
use service::filter::FilterCriteria;
use service::pagination::{BranchPositionPage, Page};

use crate::errors::{ApiResult, ErrorBody};
use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/branch-positions/filter", post(filter_positions))
        .route("/branch-positions", post(create_position))
        .route("/branch-positions/:id", get(get_position).put(update_position).delete(delete_position))
        .route("/banks/:bank_id/branches/:branch_id/departments/:department_id/positions/filter", post(filter_positions_for_department))
        .route("/banks/:bank_id/branches/:branch_id/departments/:department_id/positions", post(create_position_for_department))
        .route("/banks/:bank_id/branches/:branch_id/departments/:department_id/positions/:position_id", get(get_position_for_department).put(update_position_for_department).delete(delete_position_for_department))
}

#[utoipa::path(post, path = "/api/v1/branch-positions/filter", tag = "positions", request_body = FilterCriteria,
    responses((status = 200, body = BranchPositionPage), (status = 400, body = ErrorBody)))]
pub async fn filter_positions(State(state): State<ServerState>, Json(criteria): Json<FilterCriteria>) -> ApiResult<Json<Page<BranchPositionDto>>> {
    Ok(Json(state.services.positions.filter_branch_positions(&criteria).await?))
}

#[utoipa::path(post, path = "/api/v1/branch-positions", tag = "positions", request_body = BranchPositionDto,
    responses((status = 201, body = BranchPositionDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn create_position(State(state): State<ServerState>, Json(dto): Json<BranchPositionDto>) -> ApiResult<(StatusCode, Json<BranchPositionDto>)> {
    let created = state.services.positions.create_branch_position(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/branch-positions/{id}", tag = "positions", params(("id" = Uuid, Path, description = "Position id")),
    responses((status = 200, body = BranchPositionDto), (status = 404, body = ErrorBody)))]
pub async fn get_position(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<Json<BranchPositionDto>> {
    Ok(Json(state.services.positions.get_branch_position_by_id(id).await?))
}

#[utoipa::path(put, path = "/api/v1/branch-positions/{id}", tag = "positions", request_body = BranchPositionDto, params(("id" = Uuid, Path, description = "Position id")),
    responses((status = 200, body = BranchPositionDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_position(State(state): State<ServerState>, Path(id): Path<Uuid>, Json(dto): Json<BranchPositionDto>) -> ApiResult<Json<BranchPositionDto>> {
    Ok(Json(state.services.positions.update_branch_position(id, dto).await?))
}

#[utoipa::path(delete, path = "/api/v1/branch-positions/{id}", tag = "positions", params(("id" = Uuid, Path, description = "Position id")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_position(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    state.services.positions.delete_branch_position(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(post, path = "/api/v1/banks/{bank_id}/branches/{branch_id}/departments/{department_id}/positions/filter", tag = "positions", request_body = FilterCriteria, params(("bank_id" = Uuid, Path, description = "Bank id"), ("branch_id" = Uuid, Path, description = "Branch id"), ("department_id" = Uuid, Path, description = "Department id")),
    responses((status = 200, body = BranchPositionPage), (status = 404, body = ErrorBody)))]
pub async fn filter_positions_for_department(
    State(state): State<ServerState>,
    Path((bank_id, branch_id, department_id)): Path<(Uuid, Uuid, Uuid)>,
    Json(criteria): Json<FilterCriteria>,
) -> ApiResult<Json<Page<BranchPositionDto>>> {
    Ok(Json(state.services.positions.filter_branch_positions_for_department(bank_id, branch_id, department_id, &criteria).await?))
}

#[utoipa::path(post, path = "/api/v1/banks/{bank_id}/branches/{branch_id}/departments/{department_id}/positions", tag = "positions", request_body = BranchPositionDto, params(("bank_id" = Uuid, Path, description = "Bank id"), ("branch_id" = Uuid, Path, description = "Branch id"), ("department_id" = Uuid, Path, description = "Department id")),
    responses((status = 201, body = BranchPositionDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn create_position_for_department(
    State(state): State<ServerState>,
    Path((bank_id, branch_id, department_id)): Path<(Uuid, Uuid, Uuid)>,
    Json(dto): Json<BranchPositionDto>,
) -> ApiResult<(StatusCode, Json<BranchPositionDto>)> {
    let created = state.services.positions.create_branch_position_for_department(bank_id, branch_id, department_id, dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/banks/{bank_id}/branches/{branch_id}/departments/{department_id}/positions/{position_id}", tag = "positions", params(("bank_id" = Uuid, Path, description = "Bank id"), ("branch_id" = Uuid, Path, description = "Branch id"), ("department_id" = Uuid, Path, description = "Department id"), ("position_id" = Uuid, Path, description = "Position id")),
    responses((status = 200, body = BranchPositionDto), (status = 404, body = ErrorBody)))]
pub async fn get_position_for_department(State(state): State<ServerState>, Path((bank_id, branch_id, department_id, position_id)): Path<(Uuid, Uuid, Uuid, Uuid)>) -> ApiResult<Json<BranchPositionDto>> {
    Ok(Json(state.services.positions.get_branch_position_by_id_for_department(bank_id, branch_id, department_id, position_id).await?))
}

#[utoipa::path(put, path = "/api/v1/banks/{bank_id}/branches/{branch_id}/departments/{department_id}/positions/{position_id}", tag = "positions", request_body = BranchPositionDto, params(("bank_id" = Uuid, Path, description = "Bank id"), ("branch_id" = Uuid, Path, description = "Branch id"), ("department_id" = Uuid, Path, description = "Department id"), ("position_id" = Uuid, Path, description = "Position id")),
    responses((status = 200, body = BranchPositionDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_position_for_department(
    State(state): State<ServerState>,
    Path((bank_id, branch_id, department_id, position_id)): Path<(Uuid, Uuid, Uuid, Uuid)>,
    Json(dto): Json<BranchPositionDto>,
) -> ApiResult<Json<BranchPositionDto>> {
    Ok(Json(state.services.positions.update_branch_position_for_department(bank_id, branch_id, department_id, position_id, dto).await?))
}

#[utoipa::path(delete, path = "/api/v1/banks/{bank_id}/branches/{branch_id}/departments/{department_id}/positions/{position_id}", tag = "positions", params(("bank_id" = Uuid, Path, description = "Bank id"), ("branch_id" = Uuid, Path, description = "Branch id"), ("department_id" = Uuid, Path, description = "Department id"), ("position_id" = Uuid, Path, description = "Position id")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_position_for_department(State(state): State<ServerState>, Path((bank_id, branch_id, department_id, position_id)): Path<(Uuid, Uuid, Uuid, Uuid)>) -> ApiResult<StatusCode> {
    state.services.positions.delete_branch_position_for_department(bank_id, branch_id, department_id, position_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
