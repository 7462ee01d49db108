use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use service::dto::{BankAuditLogDto, BranchAuditLogDto};
use service::filter::FilterCriteria;
use service::pagination::{BankAuditLogPage, BranchAuditLogPage, Page};

use crate::errors::{ApiResult, ErrorBody};
use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/bank-audit-logs/filter", post(filter_bank_audit_logs))
        .route("/bank-audit-logs", post(create_bank_audit_log))
        .route("/bank-audit-logs/:id", get(get_bank_audit_log).put(update_bank_audit_log).delete(delete_bank_audit_log))
        .route("/banks/:bank_id/audit-logs/filter", post(filter_bank_audit_logs_for_bank))
        .route("/banks/:bank_id/audit-logs", post(create_bank_audit_log_for_bank))
        .route("/banks/:bank_id/audit-logs/:log_id", get(get_bank_audit_log_for_bank).put(update_bank_audit_log_for_bank).delete(delete_bank_audit_log_for_bank))
        .route("/branch-audit-logs/filter", post(filter_branch_audit_logs))
        .route("/branch-audit-logs", post(create_branch_audit_log))
        .route("/branch-audit-logs/:id", get(get_branch_audit_log).put(update_branch_audit_log).delete(delete_branch_audit_log))
        .route("/banks/:bank_id/branches/:branch_id/audit-logs/filter", post(filter_branch_audit_logs_for_branch))
        .route("/banks/:bank_id/branches/:branch_id/audit-logs", post(create_branch_audit_log_for_branch))
        .route("/banks/:bank_id/branches/:branch_id/audit-logs/:log_id", get(get_branch_audit_log_for_branch).put(update_branch_audit_log_for_branch).delete(delete_branch_audit_log_for_branch))
}

#[utoipa::path(post, path = "/api/v1/bank-audit-logs/filter", tag = "audit-logs", request_body = FilterCriteria,
    responses((status = 200, body = BankAuditLogPage), (status = 400, body = ErrorBody)))]
pub async fn filter_bank_audit_logs(State(state): State<ServerState>, Json(criteria): Json<FilterCriteria>) -> ApiResult<Json<Page<BankAuditLogDto>>> {
    Ok(Json(state.services.bank_audit_logs.filter_bank_audit_logs(&criteria).await?))
}

#[utoipa::path(post, path = "/api/v1/bank-audit-logs", tag = "audit-logs", request_body = BankAuditLogDto,
    responses((status = 201, body = BankAuditLogDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn create_bank_audit_log(State(state): State<ServerState>, Json(dto): Json<BankAuditLogDto>) -> ApiResult<(StatusCode, Json<BankAuditLogDto>)> {
    let created = state.services.bank_audit_logs.create_bank_audit_log(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/bank-audit-logs/{id}", tag = "audit-logs", params(("id" = Uuid, Path, description = "Audit log id")),
    responses((status = 200, body = BankAuditLogDto), (status = 404, body = ErrorBody)))]
pub async fn get_bank_audit_log(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<Json<BankAuditLogDto>> {
    Ok(Json(state.services.bank_audit_logs.get_bank_audit_log_by_id(id).await?))
}

#[utoipa::path(put, path = "/api/v1/bank-audit-logs/{id}", tag = "audit-logs", request_body = BankAuditLogDto, params(("id" = Uuid, Path, description = "Audit log id")),
    responses((status = 200, body = BankAuditLogDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_bank_audit_log(State(state): State<ServerState>, Path(id): Path<Uuid>, Json(dto): Json<BankAuditLogDto>) -> ApiResult<Json<BankAuditLogDto>> {
    Ok(Json(state.services.bank_audit_logs.update_bank_audit_log(id, dto).await?))
}

#[utoipa::path(delete, path = "/api/v1/bank-audit-logs/{id}", tag = "audit-logs", params(("id" = Uuid, Path, description = "Audit log id")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_bank_audit_log(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    state.services.bank_audit_logs.delete_bank_audit_log(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(post, path = "/api/v1/banks/{bank_id}/audit-logs/filter", tag = "audit-logs", request_body = FilterCriteria, params(("bank_id" = Uuid, Path, description = "Bank id")),
    responses((status = 200, body = BankAuditLogPage), (status = 404, body = ErrorBody)))]
pub async fn filter_bank_audit_logs_for_bank(
    State(state): State<ServerState>,
    Path(bank_id): Path<Uuid>,
    Json(criteria): Json<FilterCriteria>,
) -> ApiResult<Json<Page<BankAuditLogDto>>> {
    Ok(Json(state.services.bank_audit_logs.filter_bank_audit_logs_for_bank(bank_id, &criteria).await?))
}

#[utoipa::path(post, path = "/api/v1/banks/{bank_id}/audit-logs", tag = "audit-logs", request_body = BankAuditLogDto, params(("bank_id" = Uuid, Path, description = "Bank id")),
    responses((status = 201, body = BankAuditLogDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn create_bank_audit_log_for_bank(
    State(state): State<ServerState>,
    Path(bank_id): Path<Uuid>,
    Json(dto): Json<BankAuditLogDto>,
) -> ApiResult<(StatusCode, Json<BankAuditLogDto>)> {
    let created = state.services.bank_audit_logs.create_bank_audit_log_for_bank(bank_id, dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/banks/{bank_id}/audit-logs/{log_id}", tag = "audit-logs", params(("bank_id" = Uuid, Path, description = "Bank id"), ("log_id" = Uuid, Path, description = "Audit log id")),
    responses((status = 200, body = BankAuditLogDto), (status = 404, body = ErrorBody)))]
pub async fn get_bank_audit_log_for_bank(State(state): State<ServerState>, Path((bank_id, log_id)): Path<(Uuid, Uuid)>) -> ApiResult<Json<BankAuditLogDto>> {
    Ok(Json(state.services.bank_audit_logs.get_bank_audit_log_by_id_for_bank(bank_id, log_id).await?))
}

#[utoipa::path(put, path = "/api/v1/banks/{bank_id}/audit-logs/{log_id}", tag = "audit-logs", request_body = BankAuditLogDto, params(("bank_id" = Uuid, Path, description = "Bank id"), ("log_id" = Uuid, Path, description = "Audit log id")),
    responses((status = 200, body = BankAuditLogDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_bank_audit_log_for_bank(
    State(state): State<ServerState>,
    Path((bank_id, log_id)): Path<(Uuid, Uuid)>,
    Json(dto): Json<BankAuditLogDto>,
) -> ApiResult<Json<BankAuditLogDto>> {
    Ok(Json(state.services.bank_audit_logs.update_bank_audit_log_for_bank(bank_id, log_id, dto).await?))
}

#[utoipa::path(delete, path = "/api/v1/banks/{bank_id}/audit-logs/{log_id}", tag = "audit-logs", params(("bank_id" = Uuid, Path, description = "Bank id"), ("log_id" = Uuid, Path, description = "Audit log id")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_bank_audit_log_for_bank(State(state): State<ServerState>, Path((bank_id, log_id)): Path<(Uuid, Uuid)>) -> ApiResult<StatusCode> {
    state.services.bank_audit_logs.delete_bank_audit_log_for_bank(bank_id, log_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(post, path = "/api/v1/branch-audit-logs/filter", tag = "audit-logs", request_body = FilterCriteria,
    responses((status = 200, body = BranchAuditLogPage), (status = 400, body = ErrorBody)))]
pub async fn filter_branch_audit_logs(State(state): State<ServerState>, Json(criteria): Json<FilterCriteria>) -> ApiResult<Json<Page<BranchAuditLogDto>>> {
    Ok(Json(state.services.branch_audit_logs.filter_branch_audit_logs(&criteria).await?))
}

#[utoipa::path(post, path = "/api/v1/branch-audit-logs", tag = "audit-logs", request_body = BranchAuditLogDto,
    responses((status = 201, body = BranchAuditLogDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn create_branch_audit_log(State(state): State<ServerState>, Json(dto): Json<BranchAuditLogDto>) -> ApiResult<(StatusCode, Json<BranchAuditLogDto>)> {
    let created = state.services.branch_audit_logs.create_branch_audit_log(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/branch-audit-logs/{id}", tag = "audit-logs", params(("id" = Uuid, Path, description = "Audit log id")),
    responses((status = 200, body = BranchAuditLogDto), (status = 404, body = ErrorBody)))]
pub async fn get_branch_audit_log(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<Json<BranchAuditLogDto>> {
    Ok(Json(state.services.branch_audit_logs.get_branch_audit_log_by_id(id).await?))
}

#[utoipa::path(put, path = "/api/v1/branch-audit-logs/{id}", tag = "audit-logs", request_body = BranchAuditLogDto, params(("id" = Uuid, Path, description = "Audit log id")),
    responses((status = 200, body = BranchAuditLogDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_branch_audit_log(State(state): State<ServerState>, Path(id): Path<Uuid>, Json(dto): Json<BranchAuditLogDto>) -> ApiResult<Json<BranchAuditLogDto>> {
    Ok(Json(state.services.branch_audit_logs.update_branch_audit_log(id, dto).await?))
}

#[utoipa::path(delete, path = "/api/v1/branch-audit-logs/{id}", tag = "audit-logs", params(("id" = Uuid, Path, description = "Audit log id")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_branch_audit_log(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    state.services.branch_audit_logs.delete_branch_audit_log(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(post, path = "/api/v1/banks/{bank_id}/branches/{branch_id}/audit-logs/filter", tag = "audit-logs", request_body = FilterCriteria, params(("bank_id" = Uuid, Path, description = "Bank id"), ("branch_id" = Uuid, Path, description = "Branch id")),
    responses((status = 200, body = BranchAuditLogPage), (status = 404, body = ErrorBody)))]
pub async fn filter_branch_audit_logs_for_branch(
    State(state): State<ServerState>,
    Path((bank_id, branch_id)): Path<(Uuid, Uuid)>,
    Json(criteria): Json<FilterCriteria>,
) -> ApiResult<Json<Page<BranchAuditLogDto>>> {
    Ok(Json(state.services.branch_audit_logs.filter_branch_audit_logs_for_branch(bank_id, branch_id, &criteria).await?))
}

#[utoipa::path(post, path = "/api/v1/banks/{bank_id}/branches/{branch_id}/audit-logs", tag = "audit-logs", request_body = BranchAuditLogDto, params(("bank_id" = Uuid, Path, description = "Bank id"), ("branch_id" = Uuid, Path, description = "Branch id")),
    responses((status = 201, body = BranchAuditLogDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn create_branch_audit_log_for_branch(
    State(state): State<ServerState>,
    Path((bank_id, branch_id)): Path<(Uuid, Uuid)>,
    Json(dto): Json<BranchAuditLogDto>,
) -> ApiResult<(StatusCode, Json<BranchAuditLogDto>)> {
    let created = state.services.branch_audit_logs.create_branch_audit_log_for_branch(bank_id, branch_id, dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/banks/{bank_id}/branches/{branch_id}/audit-logs/{log_id}", tag = "audit-logs", params(("bank_id" = Uuid, Path, description = "Bank id"), ("branch_id" = Uuid, Path, description = "Branch id"), ("log_id" = Uuid, Path, description = "Audit log id")),
    responses((status = 200, body = BranchAuditLogDto), (status = 404, body = ErrorBody)))]
pub async fn get_branch_audit_log_for_branch(State(state): State<ServerState>, Path((bank_id, branch_id, log_id)): Path<(Uuid, Uuid, Uuid)>) -> ApiResult<Json<BranchAuditLogDto>> {
    Ok(Json(state.services.branch_audit_logs.get_branch_audit_log_by_id_for_branch(bank_id, branch_id, log_id).await?))
}

#[utoipa::path(put, path = "/api/v1/banks/{bank_id}/branches/{branch_id}/audit-logs/{log_id}", tag = "audit-logs", request_body = BranchAuditLogDto, params(("bank_id" = Uuid, Path, description = "Bank id"), ("branch_id" = Uuid, Path, description = "Branch id"), ("log_id" = Uuid, Path, description = "Audit log id")),
    responses((status = 200, body = BranchAuditLogDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_branch_audit_log_for_branch(
    State(state): State<ServerState>,
    Path((bank_id, branch_id, log_id)): Path<(Uuid, Uuid, Uuid)>,
    Json(dto): Json<BranchAuditLogDto>,
) -> ApiResult<Json<BranchAuditLogDto>> {
    Ok(Json(state.services.branch_audit_logs.update_branch_audit_log_for_branch(bank_id, branch_id, log_id, dto).await?))
}

#[utoipa::path(delete, path = "/api/v1/banks/{bank_id}/branches/{branch_id}/audit-logs/{log_id}", tag = "audit-logs", params(("bank_id" = Uuid, Path, description = "Bank id"), ("branch_id" = Uuid, Path, description = "Branch id"), ("log_id" = Uuid, Path, description = "Audit log id")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_branch_audit_log_for_branch(State(state): State<ServerState>, Path((bank_id, branch_id, log_id)): Path<(Uuid, Uuid, Uuid)>) -> ApiResult<StatusCode> {
    state.services.branch_audit_logs.delete_branch_audit_log_for_branch(bank_id, branch_id, log_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
