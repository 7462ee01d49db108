use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use service::dto::BankHolidayDto;
use service::filter::FilterCriteria;
use service::pagination::{BankHolidayPage, Page};

use crate::errors::{ApiResult, ErrorBody};
use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/bank-holidays/filter", post(filter_holidays))
        .route("/bank-holidays", post(create_holiday))
        .route("/bank-holidays/:id", get(get_holiday).put(update_holiday).delete(delete_holiday))
        .route("/banks/:bank_id/holidays/filter", post(filter_holidays_for_bank))
        .route("/banks/:bank_id/holidays", post(create_holiday_for_bank))
        .route("/banks/:bank_id/holidays/:holiday_id", get(get_holiday_for_bank).put(update_holiday_for_bank).delete(delete_holiday_for_bank))
}

#[utoipa::path(post, path = "/api/v1/bank-holidays/filter", tag = "holidays", request_body = FilterCriteria,
    responses((status = 200, body = BankHolidayPage), (status = 400, body = ErrorBody)))]
pub async fn filter_holidays(State(state): State<ServerState>, Json(criteria): Json<FilterCriteria>) -> ApiResult<Json<Page<BankHolidayDto>>> {
    Ok(Json(state.services.holidays.filter_bank_holidays(&criteria).await?))
}

#[utoipa::path(post, path = "/api/v1/bank-holidays", tag = "holidays", request_body = BankHolidayDto,
    responses((status = 201, body = BankHolidayDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn create_holiday(State(state): State<ServerState>, Json(dto): Json<BankHolidayDto>) -> ApiResult<(StatusCode, Json<BankHolidayDto>)> {
    let created = state.services.holidays.create_bank_holiday(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/bank-holidays/{id}", tag = "holidays", params(("id" = Uuid, Path, description = "Holiday id")),
    responses((status = 200, body = BankHolidayDto), (status = 404, body = ErrorBody)))]
pub async fn get_holiday(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<Json<BankHolidayDto>> {
    Ok(Json(state.services.holidays.get_bank_holiday_by_id(id).await?))
}

#[utoipa::path(put, path = "/api/v1/bank-holidays/{id}", tag = "holidays", request_body = BankHolidayDto, params(("id" = Uuid, Path, description = "Holiday id")),
    responses((status = 200, body = BankHolidayDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_holiday(State(state): State<ServerState>, Path(id): Path<Uuid>, Json(dto): Json<BankHolidayDto>) -> ApiResult<Json<BankHolidayDto>> {
    Ok(Json(state.services.holidays.update_bank_holiday(id, dto).await?))
}

#[utoipa::path(delete, path = "/api/v1/bank-holidays/{id}", tag = "holidays", params(("id" = Uuid, Path, description = "Holiday id")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_holiday(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    state.services.holidays.delete_bank_holiday(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(post, path = "/api/v1/banks/{bank_id}/holidays/filter", tag = "holidays", request_body = FilterCriteria, params(("bank_id" = Uuid, Path, description = "Bank id")),
    responses((status = 200, body = BankHolidayPage), (status = 404, body = ErrorBody)))]
pub async fn filter_holidays_for_bank(
    State(state): State<ServerState>,
    Path(bank_id): Path<Uuid>,
    Json(criteria): Json<FilterCriteria>,
) -> ApiResult<Json<Page<BankHolidayDto>>> {
    Ok(Json(state.services.holidays.filter_bank_holidays_for_bank(bank_id, &criteria).await?))
}

#[utoipa::path(post, path = "/api/v1/banks/{bank_id}/holidays", tag = "holidays", request_body = BankHolidayDto, params(("bank_id" = Uuid, Path, description = "Bank id")),
    responses((status = 201, body = BankHolidayDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn create_holiday_for_bank(
    State(state): State<ServerState>,
    Path(bank_id): Path<Uuid>,
    Json(dto): Json<BankHolidayDto>,
) -> ApiResult<(StatusCode, Json<BankHolidayDto>)> {
    let created = state.services.holidays.create_bank_holiday_for_bank(bank_id, dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/banks/{bank_id}/holidays/{holiday_id}", tag = "holidays", params(("bank_id" = Uuid, Path, description = "Bank id"), ("holiday_id" = Uuid, Path, description = "Holiday id")),
    responses((status = 200, body = BankHolidayDto), (status = 404, body = ErrorBody)))]
pub async fn get_holiday_for_bank(State(state): State<ServerState>, Path((bank_id, holiday_id)): Path<(Uuid, Uuid)>) -> ApiResult<Json<BankHolidayDto>> {
    Ok(Json(state.services.holidays.get_bank_holiday_by_id_for_bank(bank_id, holiday_id).await?))
}

#[utoipa::path(put, path = "/api/v1/banks/{bank_id}/holidays/{holiday_id}", tag = "holidays", request_body = BankHolidayDto, params(("bank_id" = Uuid, Path, description = "Bank id"), ("holiday_id" = Uuid, Path, description = "Holiday id")),
    responses((status = 200, body = BankHolidayDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_holiday_for_bank(
    State(state): State<ServerState>,
    Path((bank_id, holiday_id)): Path<(Uuid, Uuid)>,
    Json(dto): Json<BankHolidayDto>,
) -> ApiResult<Json<BankHolidayDto>> {
    Ok(Json(state.services.holidays.update_bank_holiday_for_bank(bank_id, holiday_id, dto).await?))
}

#[utoipa::path(delete, path = "/api/v1/banks/{bank_id}/holidays/{holiday_id}", tag = "holidays", params(("bank_id" = Uuid, Path, description = "Bank id"), ("holiday_id" = Uuid, Path, description = "Holiday id")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_holiday_for_bank(State(state): State<ServerState>, Path((bank_id, holiday_id)): Path<(Uuid, Uuid)>) -> ApiResult<StatusCode> {
    state.services.holidays.delete_bank_holiday_for_bank(bank_id, holiday_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
