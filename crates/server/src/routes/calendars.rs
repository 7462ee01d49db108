use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use service::dto::WorkingCalendarDto;
use service::filter::FilterCriteria;
use service::pagination::{WorkingCalendarPage, Page};

use crate::errors::{ApiResult, ErrorBody};
use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/working-calendars/filter", post(filter_calendars))
        .route("/working-calendars", post(create_calendar))
        .route("/working-calendars/:id", get(get_calendar).put(update_calendar).delete(delete_calendar))
        .route("/banks/:bank_id/calendars/default", get(get_default_calendar))
        .route("/banks/:bank_id/calendars/resolve", get(resolve_calendar))
        .route("/banks/:bank_id/calendars/filter", post(filter_calendars_for_bank))
        .route("/banks/:bank_id/calendars", post(create_calendar_for_bank))
        .route("/banks/:bank_id/calendars/:calendar_id", get(get_calendar_for_bank).put(update_calendar_for_bank).delete(delete_calendar_for_bank))
}

#[utoipa::path(post, path = "/api/v1/working-calendars/filter", tag = "calendars", request_body = FilterCriteria,
    responses((status = 200, body = WorkingCalendarPage), (status = 400, body = ErrorBody)))]
pub async fn filter_calendars(State(state): State<ServerState>, Json(criteria): Json<FilterCriteria>) -> ApiResult<Json<Page<WorkingCalendarDto>>> {
    Ok(Json(state.services.calendars.filter_working_calendars(&criteria).await?))
}

#[utoipa::path(post, path = "/api/v1/working-calendars", tag = "calendars", request_body = WorkingCalendarDto,
    responses((status = 201, body = WorkingCalendarDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn create_calendar(State(state): State<ServerState>, Json(dto): Json<WorkingCalendarDto>) -> ApiResult<(StatusCode, Json<WorkingCalendarDto>)> {
    let created = state.services.calendars.create_working_calendar(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/working-calendars/{id}", tag = "calendars", params(("id" = Uuid, Path, description = "Calendar id")),
    responses((status = 200, body = WorkingCalendarDto), (status = 404, body = ErrorBody)))]
pub async fn get_calendar(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<Json<WorkingCalendarDto>> {
    Ok(Json(state.services.calendars.get_working_calendar_by_id(id).await?))
}

#[utoipa::path(put, path = "/api/v1/working-calendars/{id}", tag = "calendars", request_body = WorkingCalendarDto, params(("id" = Uuid, Path, description = "Calendar id")),
    responses((status = 200, body = WorkingCalendarDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_calendar(State(state): State<ServerState>, Path(id): Path<Uuid>, Json(dto): Json<WorkingCalendarDto>) -> ApiResult<Json<WorkingCalendarDto>> {
    Ok(Json(state.services.calendars.update_working_calendar(id, dto).await?))
}

#[utoipa::path(delete, path = "/api/v1/working-calendars/{id}", tag = "calendars", params(("id" = Uuid, Path, description = "Calendar id")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_calendar(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    state.services.calendars.delete_working_calendar(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(post, path = "/api/v1/banks/{bank_id}/calendars/filter", tag = "calendars", request_body = FilterCriteria, params(("bank_id" = Uuid, Path, description = "Bank id")),
    responses((status = 200, body = WorkingCalendarPage), (status = 404, body = ErrorBody)))]
pub async fn filter_calendars_for_bank(
    State(state): State<ServerState>,
    Path(bank_id): Path<Uuid>,
    Json(criteria): Json<FilterCriteria>,
) -> ApiResult<Json<Page<WorkingCalendarDto>>> {
    Ok(Json(state.services.calendars.filter_working_calendars_for_bank(bank_id, &criteria).await?))
}

#[utoipa::path(post, path = "/api/v1/banks/{bank_id}/calendars", tag = "calendars", request_body = WorkingCalendarDto, params(("bank_id" = Uuid, Path, description = "Bank id")),
    responses((status = 201, body = WorkingCalendarDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn create_calendar_for_bank(
    State(state): State<ServerState>,
    Path(bank_id): Path<Uuid>,
    Json(dto): Json<WorkingCalendarDto>,
) -> ApiResult<(StatusCode, Json<WorkingCalendarDto>)> {
    let created = state.services.calendars.create_working_calendar_for_bank(bank_id, dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/banks/{bank_id}/calendars/{calendar_id}", tag = "calendars", params(("bank_id" = Uuid, Path, description = "Bank id"), ("calendar_id" = Uuid, Path, description = "Calendar id")),
    responses((status = 200, body = WorkingCalendarDto), (status = 404, body = ErrorBody)))]
pub async fn get_calendar_for_bank(State(state): State<ServerState>, Path((bank_id, calendar_id)): Path<(Uuid, Uuid)>) -> ApiResult<Json<WorkingCalendarDto>> {
    Ok(Json(state.services.calendars.get_working_calendar_by_id_for_bank(bank_id, calendar_id).await?))
}

#[utoipa::path(put, path = "/api/v1/banks/{bank_id}/calendars/{calendar_id}", tag = "calendars", request_body = WorkingCalendarDto, params(("bank_id" = Uuid, Path, description = "Bank id"), ("calendar_id" = Uuid, Path, description = "Calendar id")),
    responses((status = 200, body = WorkingCalendarDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_calendar_for_bank(
    State(state): State<ServerState>,
    Path((bank_id, calendar_id)): Path<(Uuid, Uuid)>,
    Json(dto): Json<WorkingCalendarDto>,
) -> ApiResult<Json<WorkingCalendarDto>> {
    Ok(Json(state.services.calendars.update_working_calendar_for_bank(bank_id, calendar_id, dto).await?))
}

#[utoipa::path(delete, path = "/api/v1/banks/{bank_id}/calendars/{calendar_id}", tag = "calendars", params(("bank_id" = Uuid, Path, description = "Bank id"), ("calendar_id" = Uuid, Path, description = "Calendar id")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_calendar_for_bank(State(state): State<ServerState>, Path((bank_id, calendar_id)): Path<(Uuid, Uuid)>) -> ApiResult<StatusCode> {
    state.services.calendars.delete_working_calendar_for_bank(bank_id, calendar_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(get, path = "/api/v1/banks/{bank_id}/calendars/default", tag = "calendars",
    params(("bank_id" = Uuid, Path, description = "Bank id")),
    responses((status = 200, body = WorkingCalendarDto), (status = 404, body = ErrorBody)))]
pub async fn get_default_calendar(State(state): State<ServerState>, Path(bank_id): Path<Uuid>) -> ApiResult<Json<WorkingCalendarDto>> {
    Ok(Json(state.services.calendars.get_default_calendar(bank_id).await?))
}

/// Org unit to resolve; `date` defaults to today (UTC).
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ResolveQuery {
    pub branch_id: Uuid,
    pub department_id: Option<Uuid>,
    pub position_id: Option<Uuid>,
    #[param(value_type = Option<String>, format = Date)]
    pub date: Option<NaiveDate>,
}

#[utoipa::path(get, path = "/api/v1/banks/{bank_id}/calendars/resolve", tag = "calendars",
    params(("bank_id" = Uuid, Path, description = "Bank id"), ResolveQuery),
    responses((status = 200, body = WorkingCalendarDto), (status = 404, body = ErrorBody)))]
pub async fn resolve_calendar(
    State(state): State<ServerState>,
    Path(bank_id): Path<Uuid>,
    Query(q): Query<ResolveQuery>,
) -> ApiResult<Json<WorkingCalendarDto>> {
    let on = q.date.unwrap_or_else(|| Utc::now().date_naive());
    let calendar = state
        .services
        .assignments
        .resolve_calendar(bank_id, q.branch_id, q.department_id, q.position_id, on)
        .await?;
    Ok(Json(calendar))
}
