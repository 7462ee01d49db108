use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use service::dto::CalendarAssignmentDto;
use service::filter::FilterCriteria;
use service::pagination::{CalendarAssignmentPage, Page};

use crate::errors::{ApiResult, ErrorBody};
use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/calendar-assignments/filter", post(filter_assignments))
        .route("/calendar-assignments", post(create_assignment))
        .route("/calendar-assignments/:id", get(get_assignment).put(update_assignment).delete(delete_assignment))
        .route("/banks/:bank_id/calendars/:calendar_id/assignments/filter", post(filter_assignments_for_calendar))
        .route("/banks/:bank_id/calendars/:calendar_id/assignments", post(create_assignment_for_calendar))
        .route("/banks/:bank_id/calendars/:calendar_id/assignments/:assignment_id", get(get_assignment_for_calendar).put(update_assignment_for_calendar).delete(delete_assignment_for_calendar))
}

#[utoipa::path(post, path = "/api/v1/calendar-assignments/filter", tag = "assignments", request_body = FilterCriteria,
    responses((status = 200, body = CalendarAssignmentPage), (status = 400, body = ErrorBody)))]
pub async fn filter_assignments(State(state): State<ServerState>, Json(criteria): Json<FilterCriteria>) -> ApiResult<Json<Page<CalendarAssignmentDto>>> {
    Ok(Json(state.services.assignments.filter_calendar_assignments(&criteria).await?))
}

#[utoipa::path(post, path = "/api/v1/calendar-assignments", tag = "assignments", request_body = CalendarAssignmentDto,
    responses((status = 201, body = CalendarAssignmentDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn create_assignment(State(state): State<ServerState>, Json(dto): Json<CalendarAssignmentDto>) -> ApiResult<(StatusCode, Json<CalendarAssignmentDto>)> {
    let created = state.services.assignments.create_calendar_assignment(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/calendar-assignments/{id}", tag = "assignments", params(("id" = Uuid, Path, description = "Assignment id")),
    responses((status = 200, body = CalendarAssignmentDto), (status = 404, body = ErrorBody)))]
pub async fn get_assignment(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<Json<CalendarAssignmentDto>> {
    Ok(Json(state.services.assignments.get_calendar_assignment_by_id(id).await?))
}

#[utoipa::path(put, path = "/api/v1/calendar-assignments/{id}", tag = "assignments", request_body = CalendarAssignmentDto, params(("id" = Uuid, Path, description = "Assignment id")),
    responses((status = 200, body = CalendarAssignmentDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_assignment(State(state): State<ServerState>, Path(id): Path<Uuid>, Json(dto): Json<CalendarAssignmentDto>) -> ApiResult<Json<CalendarAssignmentDto>> {
    Ok(Json(state.services.assignments.update_calendar_assignment(id, dto).await?))
}

#[utoipa::path(delete, path = "/api/v1/calendar-assignments/{id}", tag = "assignments", params(("id" = Uuid, Path, description = "Assignment id")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_assignment(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    state.services.assignments.delete_calendar_assignment(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(post, path = "/api/v1/banks/{bank_id}/calendars/{calendar_id}/assignments/filter", tag = "assignments", request_body = FilterCriteria, params(("bank_id" = Uuid, Path, description = "Bank id"), ("calendar_id" = Uuid, Path, description = "Calendar id")),
    responses((status = 200, body = CalendarAssignmentPage), (status = 404, body = ErrorBody)))]
pub async fn filter_assignments_for_calendar(
    State(state): State<ServerState>,
    Path((bank_id, calendar_id)): Path<(Uuid, Uuid)>,
    Json(criteria): Json<FilterCriteria>,
) -> ApiResult<Json<Page<CalendarAssignmentDto>>> {
    Ok(Json(state.services.assignments.filter_calendar_assignments_for_calendar(bank_id, calendar_id, &criteria).await?))
}

#[utoipa::path(post, path = "/api/v1/banks/{bank_id}/calendars/{calendar_id}/assignments", tag = "assignments", request_body = CalendarAssignmentDto, params(("bank_id" = Uuid, Path, description = "Bank id"), ("calendar_id" = Uuid, Path, description = "Calendar id")),
    responses((status = 201, body = CalendarAssignmentDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn create_assignment_for_calendar(
    State(state): State<ServerState>,
    Path((bank_id, calendar_id)): Path<(Uuid, Uuid)>,
    Json(dto): Json<CalendarAssignmentDto>,
) -> ApiResult<(StatusCode, Json<CalendarAssignmentDto>)> {
    let created = state.services.assignments.create_calendar_assignment_for_calendar(bank_id, calendar_id, dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/banks/{bank_id}/calendars/{calendar_id}/assignments/{assignment_id}", tag = "assignments", params(("bank_id" = Uuid, Path, description = "Bank id"), ("calendar_id" = Uuid, Path, description = "Calendar id"), ("assignment_id" = Uuid, Path, description = "Assignment id")),
    responses((status = 200, body = CalendarAssignmentDto), (status = 404, body = ErrorBody)))]
pub async fn get_assignment_for_calendar(State(state): State<ServerState>, Path((bank_id, calendar_id, assignment_id)): Path<(Uuid, Uuid, Uuid)>) -> ApiResult<Json<CalendarAssignmentDto>> {
    Ok(Json(state.services.assignments.get_calendar_assignment_by_id_for_calendar(bank_id, calendar_id, assignment_id).await?))
}

#[utoipa::path(put, path = "/api/v1/banks/{bank_id}/calendars/{calendar_id}/assignments/{assignment_id}", tag = "assignments", request_body = CalendarAssignmentDto, params(("bank_id" = Uuid, Path, description = "Bank id"), ("calendar_id" = Uuid, Path, description = "Calendar id"), ("assignment_id" = Uuid, Path, description = "Assignment id")),
    responses((status = 200, body = CalendarAssignmentDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_assignment_for_calendar(
    State(state): State<ServerState>,
    Path((bank_id, calendar_id, assignment_id)): Path<(Uuid, Uuid, Uuid)>,
    Json(dto): Json<CalendarAssignmentDto>,
) -> ApiResult<Json<CalendarAssignmentDto>> {
    Ok(Json(state.services.assignments.update_calendar_assignment_for_calendar(bank_id, calendar_id, assignment_id, dto).await?))
}

#[utoipa::path(delete, path = "/api/v1/banks/{bank_id}/calendars/{calendar_id}/assignments/{assignment_id}", tag = "assignments", params(("bank_id" = Uuid, Path, description = "Bank id"), ("calendar_id" = Uuid, Path, description = "Calendar id"), ("assignment_id" = Uuid, Path, description = "Assignment id")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_assignment_for_calendar(State(state): State<ServerState>, Path((bank_id, calendar_id, assignment_id)): Path<(Uuid, Uuid, Uuid)>) -> ApiResult<StatusCode> {
    state.services.assignments.delete_calendar_assignment_for_calendar(bank_id, calendar_id, assignment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
