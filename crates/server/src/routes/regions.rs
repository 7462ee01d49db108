use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use service::dto::BankRegionDto;
use service::filter::FilterCriteria;
use service::pagination::{BankRegionPage, Page};

use crate::errors::{ApiResult, ErrorBody};
use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/bank-regions/filter", post(filter_regions))
        .route("/bank-regions", post(create_region))
        .route("/bank-regions/:id", get(get_region).put(update_region).delete(delete_region))
        .route("/banks/:bank_id/divisions/:division_id/regions/filter", post(filter_regions_for_division))
        .route("/banks/:bank_id/divisions/:division_id/regions", post(create_region_for_division))
        .route("/banks/:bank_id/divisions/:division_id/regions/:region_id", get(get_region_for_division).put(update_region_for_division).delete(delete_region_for_division))
}

#[utoipa::path(post, path = "/api/v1/bank-regions/filter", tag = "regions", request_body = FilterCriteria,
    responses((status = 200, body = BankRegionPage), (status = 400, body = ErrorBody)))]
pub async fn filter_regions(State(state): State<ServerState>, Json(criteria): Json<FilterCriteria>) -> ApiResult<Json<Page<BankRegionDto>>> {
    Ok(Json(state.services.regions.filter_bank_regions(&criteria).await?))
}

#[utoipa::path(post, path = "/api/v1/bank-regions", tag = "regions", request_body = BankRegionDto,
    responses((status = 201, body = BankRegionDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn create_region(State(state): State<ServerState>, Json(dto): Json<BankRegionDto>) -> ApiResult<(StatusCode, Json<BankRegionDto>)> {
    let created = state.services.regions.create_bank_region(dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/bank-regions/{id}", tag = "regions", params(("id" = Uuid, Path, description = "Region id")),
    responses((status = 200, body = BankRegionDto), (status = 404, body = ErrorBody)))]
pub async fn get_region(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<Json<BankRegionDto>> {
    Ok(Json(state.services.regions.get_bank_region_by_id(id).await?))
}

#[utoipa::path(put, path = "/api/v1/bank-regions/{id}", tag = "regions", request_body = BankRegionDto, params(("id" = Uuid, Path, description = "Region id")),
    responses((status = 200, body = BankRegionDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_region(State(state): State<ServerState>, Path(id): Path<Uuid>, Json(dto): Json<BankRegionDto>) -> ApiResult<Json<BankRegionDto>> {
    Ok(Json(state.services.regions.update_bank_region(id, dto).await?))
}

#[utoipa::path(delete, path = "/api/v1/bank-regions/{id}", tag = "regions", params(("id" = Uuid, Path, description = "Region id")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_region(State(state): State<ServerState>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    state.services.regions.delete_bank_region(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(post, path = "/api/v1/banks/{bank_id}/divisions/{division_id}/regions/filter", tag = "regions", request_body = FilterCriteria, params(("bank_id" = Uuid, Path, description = "Bank id"), ("division_id" = Uuid, Path, description = "Division id")),
    responses((status = 200, body = BankRegionPage), (status = 404, body = ErrorBody)))]
pub async fn filter_regions_for_division(
    State(state): State<ServerState>,
    Path((bank_id, division_id)): Path<(Uuid, Uuid)>,
    Json(criteria): Json<FilterCriteria>,
) -> ApiResult<Json<Page<BankRegionDto>>> {
    Ok(Json(state.services.regions.filter_bank_regions_for_division(bank_id, division_id, &criteria).await?))
}

#[utoipa::path(post, path = "/api/v1/banks/{bank_id}/divisions/{division_id}/regions", tag = "regions", request_body = BankRegionDto, params(("bank_id" = Uuid, Path, description = "Bank id"), ("division_id" = Uuid, Path, description = "Division id")),
    responses((status = 201, body = BankRegionDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn create_region_for_division(
    State(state): State<ServerState>,
    Path((bank_id, division_id)): Path<(Uuid, Uuid)>,
    Json(dto): Json<BankRegionDto>,
) -> ApiResult<(StatusCode, Json<BankRegionDto>)> {
    let created = state.services.regions.create_bank_region_for_division(bank_id, division_id, dto).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(get, path = "/api/v1/banks/{bank_id}/divisions/{division_id}/regions/{region_id}", tag = "regions", params(("bank_id" = Uuid, Path, description = "Bank id"), ("division_id" = Uuid, Path, description = "Division id"), ("region_id" = Uuid, Path, description = "Region id")),
    responses((status = 200, body = BankRegionDto), (status = 404, body = ErrorBody)))]
pub async fn get_region_for_division(State(state): State<ServerState>, Path((bank_id, division_id, region_id)): Path<(Uuid, Uuid, Uuid)>) -> ApiResult<Json<BankRegionDto>> {
    Ok(Json(state.services.regions.get_bank_region_by_id_for_division(bank_id, division_id, region_id).await?))
}

#[utoipa::path(put, path = "/api/v1/banks/{bank_id}/divisions/{division_id}/regions/{region_id}", tag = "regions", request_body = BankRegionDto, params(("bank_id" = Uuid, Path, description = "Bank id"), ("division_id" = Uuid, Path, description = "Division id"), ("region_id" = Uuid, Path, description = "Region id")),
    responses((status = 200, body = BankRegionDto), (status = 400, body = ErrorBody), (status = 404, body = ErrorBody)))]
pub async fn update_region_for_division(
    State(state): State<ServerState>,
    Path((bank_id, division_id, region_id)): Path<(Uuid, Uuid, Uuid)>,
    Json(dto): Json<BankRegionDto>,
) -> ApiResult<Json<BankRegionDto>> {
    Ok(Json(state.services.regions.update_bank_region_for_division(bank_id, division_id, region_id, dto).await?))
}

#[utoipa::path(delete, path = "/api/v1/banks/{bank_id}/divisions/{division_id}/regions/{region_id}", tag = "regions", params(("bank_id" = Uuid, Path, description = "Bank id"), ("division_id" = Uuid, Path, description = "Division id"), ("region_id" = Uuid, Path, description = "Region id")),
    responses((status = 204), (status = 404, body = ErrorBody)))]
pub async fn delete_region_for_division(State(state): State<ServerState>, Path((bank_id, division_id, region_id)): Path<(Uuid, Uuid, Uuid)>) -> ApiResult<StatusCode> {
    state.services.regions.delete_bank_region_for_division(bank_id, division_id, region_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
