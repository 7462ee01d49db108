use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use service::dto::BranchDepartmentDto;
use service::filter::FilterCriteria;
use service::pagination::{BranchDepartmentPage, Page};

use crate::errors::{ApiResult, ErrorBody};
use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/branch-departments/filter", post(filter_departments))
        .route("/branch-departments", post(create_department))
        .route("/branch-departments/:id", get(get_department).put(update_department).delete(delete_department))
        .route("/banks/:bank_id/branches/:branch_id/departments/filter", post(filter_departments_for_branch))
        .route("/banks/:bank_id/branches/:branch_id/departments", post(create_department_for_branch))
        .route("/banks/:bank_id/branches/:branch_id/departments/:department_id", get(get_department_for_branch).put(update_department_for_branch).delete(delete_department_for_branch))
}

#[utoipa::path(post, path = "/api/v1/branch-departments/filter", tag = "departments", request_body = FilterCriteria,
    responses((status = 200, body = BranchDepartmentPage), (status = 400, body = ErrorBody)))]
pub async fn filter_departments(State(state): State<ServerState>, Json(criteria): Json<FilterCriteria>) -> ApiResult<Json<Page<BranchDepartmentDto>>> {
    Ok(Json(state.services.departments.filter_branch_departments(&criteria).await?))
}

#[utoipa::path(post, path = "/api/v1/branch-departments", tag = "departments", request_body = BranchDepartmentDto,
    responses((status = 201, body = BranchDepartmentDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn create_department(State(state): State<ServerState>, Json(dto): Json<BranchDepartmentDto>) -> ApiResult<(StatusCode, Json<BranchDepartmentDto>)> {
    let created = state.services.departments.create_branch_department(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/branch-departments/{id}", tag = "departments", params(("id" = Uuid, Path, description = "Department id")),
    responses((status = 200, body = BranchDepartmentDto), (status = 404, body = ErrorBody)))]
pub async fn get_department(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<Json<BranchDepartmentDto>> {
    Ok(Json(state.services.departments.get_branch_department_by_id(id).await?))
}

#[utoipa::path(put, path = "/api/v1/branch-departments/{id}", tag = "departments", request_body = BranchDepartmentDto, params(("id" = Uuid, Path, description = "Department id")),
    responses((status = 200, body = BranchDepartmentDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_department(State(state): State<ServerState>, Path(id): Path<Uuid>, Json(dto): Json<BranchDepartmentDto>) -> ApiResult<Json<BranchDepartmentDto>> {
    Ok(Json(state.services.departments.update_branch_department(id, dto).await?))
}

#[utoipa::path(delete, path = "/api/v1/branch-departments/{id}", tag = "departments", params(("id" = Uuid, Path, description = "Department id")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_department(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    state.services.departments.delete_branch_department(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(post, path = "/api/v1/banks/{bank_id}/branches/{branch_id}/departments/filter", tag = "departments", request_body = FilterCriteria, params(("bank_id" = Uuid, Path, description = "Bank id"), ("branch_id" = Uuid, Path, description = "Branch id")),
    responses((status = 200, body = BranchDepartmentPage), (status = 404, body = ErrorBody)))]
pub async fn filter_departments_for_branch(
    State(state): State<ServerState>,
    Path((bank_id, branch_id)): Path<(Uuid, Uuid)>,
    Json(criteria): Json<FilterCriteria>,
) -> ApiResult<Json<Page<BranchDepartmentDto>>> {
    Ok(Json(state.services.departments.filter_branch_departments_for_branch(bank_id, branch_id, &criteria).await?))
}

#[utoipa::path(post, path = "/api/v1/banks/{bank_id}/branches/{branch_id}/departments", tag = "departments", request_body = BranchDepartmentDto, params(("bank_id" = Uuid, Path, description = "Bank id"), ("branch_id" = Uuid, Path, description = "Branch id")),
    responses((status = 201, body = BranchDepartmentDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn create_department_for_branch(
    State(state): State<ServerState>,
    Path((bank_id, branch_id)): Path<(Uuid, Uuid)>,
    Json(dto): Json<BranchDepartmentDto>,
) -> ApiResult<(StatusCode, Json<BranchDepartmentDto>)> {
    let created = state.services.departments.create_branch_department_for_branch(bank_id, branch_id, dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/banks/{bank_id}/branches/{branch_id}/departments/{department_id}", tag = "departments", params(("bank_id" = Uuid, Path, description = "Bank id"), ("branch_id" = Uuid, Path, description = "Branch id"), ("department_id" = Uuid, Path, description = "Department id")),
    responses((status = 200, body = BranchDepartmentDto), (status = 404, body = ErrorBody)))]
pub async fn get_department_for_branch(State(state): State<ServerState>, Path((bank_id, branch_id, department_id)): Path<(Uuid, Uuid, Uuid)>) -> ApiResult<Json<BranchDepartmentDto>> {
    Ok(Json(state.services.departments.get_branch_department_by_id_for_branch(bank_id, branch_id, department_id).await?))
}

#[utoipa::path(put, path = "/api/v1/banks/{bank_id}/branches/{branch_id}/departments/{department_id}", tag = "departments", request_body = BranchDepartmentDto, params(("bank_id" = Uuid, Path, description = "Bank id"), ("branch_id" = Uuid, Path, description = "Branch id"), ("department_id" = Uuid, Path, description = "Department id")),
    responses((status = 200, body = BranchDepartmentDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_department_for_branch(
    State(state): State<ServerState>,
    Path((bank_id, branch_id, department_id)): Path<(Uuid, Uuid, Uuid)>,
    Json(dto): Json<BranchDepartmentDto>,
) -> ApiResult<Json<BranchDepartmentDto>> {
    Ok(Json(state.services.departments.update_branch_department_for_branch(bank_id, branch_id, department_id, dto).await?))
}

#[utoipa::path(delete, path = "/api/v1/banks/{bank_id}/branches/{branch_id}/departments/{department_id}", tag = "departments", params(("bank_id" = Uuid, Path, description = "Bank id"), ("branch_id" = Uuid, Path, description = "Branch id"), ("department_id" = Uuid, Path, description = "Department id")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_department_for_branch(State(state): State<ServerState>, Path((bank_id, branch_id, department_id)): Path<(Uuid, Uuid, Uuid)>) -> ApiResult<StatusCode> {
    state.services.departments.delete_branch_department_for_branch(bank_id, branch_id, department_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
