//! Reservation HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use uuid::Uuid;

use crate::application::{CancelActor, CreateReservation, ReservationService};
use crate::domain::{DomainError, ReservationStatus};
use crate::interfaces::http::common::{
    parse_date, parse_time, ApiError, ApiResponse, PaginatedResponse, ValidatedJson,
};
use crate::shared::types::PaginationParams;

use super::dto::*;

/// Application state for reservation handlers.
#[derive(Clone)]
pub struct ReservationAppState {
    pub reservations: Arc<ReservationService>,
}

fn parse_status(value: Option<&str>) -> Result<Option<ReservationStatus>, ApiError> {
    match value {
        None => Ok(None),
        Some(s) => ReservationStatus::parse(s).map(Some).ok_or_else(|| {
            ApiError(DomainError::Validation(format!(
                "Unknown reservation status '{}'",
                s
            )))
        }),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/reservations",
    tag = "Reservations",
    request_body = CreateReservationRequest,
    responses(
        (status = 200, description = "Reservation confirmed", body = ApiResponse<ReservationDto>),
        (status = 404, description = "Restaurant or table not found"),
        (status = 409, description = "Slot taken or booking precondition failed"),
        (status = 400, description = "Invalid date or time format")
    )
)]
pub async fn create_reservation(
    State(state): State<ReservationAppState>,
    ValidatedJson(request): ValidatedJson<CreateReservationRequest>,
) -> Result<Json<ApiResponse<ReservationDto>>, ApiError> {
    let cmd = CreateReservation {
        restaurant_id: request.restaurant_id,
        table_id: request.table_id,
        customer_id: request.customer_id,
        date: parse_date(&request.reservation_date)?,
        start_time: parse_time(&request.start_time)?,
        party_size: request.party_size,
        special_requests: request.special_requests,
    };

    let reservation = state.reservations.create_reservation(cmd).await?;
    Ok(Json(ApiResponse::success(reservation.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/reservations/{id}",
    tag = "Reservations",
    params(("id" = Uuid, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation details", body = ApiResponse<ReservationDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_reservation(
    State(state): State<ReservationAppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ReservationDto>>, ApiError> {
    let reservation = state.reservations.get(id).await?;
    Ok(Json(ApiResponse::success(reservation.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/reservations/code/{code}",
    tag = "Reservations",
    params(("code" = String, Path, description = "Confirmation code")),
    responses(
        (status = 200, description = "Reservation details", body = ApiResponse<ReservationDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_reservation_by_code(
    State(state): State<ReservationAppState>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<ReservationDto>>, ApiError> {
    let reservation = state.reservations.get_by_confirmation_code(&code).await?;
    Ok(Json(ApiResponse::success(reservation.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/reservations/{id}/cancel",
    tag = "Reservations",
    params(("id" = Uuid, Path, description = "Reservation ID")),
    request_body = CancelReservationRequest,
    responses(
        (status = 200, description = "Reservation cancelled", body = ApiResponse<ReservationDto>),
        (status = 403, description = "Not the reservation's customer"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Not cancellable (already final or inside the lead-time window)")
    )
)]
pub async fn cancel_reservation(
    State(state): State<ReservationAppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<CancelReservationRequest>,
) -> Result<Json<ApiResponse<ReservationDto>>, ApiError> {
    let actor = match request.customer_id {
        Some(customer_id) => CancelActor::Customer(customer_id),
        None => CancelActor::Restaurant,
    };
    let reservation = state.reservations.cancel(id, actor, request.reason).await?;
    Ok(Json(ApiResponse::success(reservation.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/reservations/{id}/complete",
    tag = "Reservations",
    params(("id" = Uuid, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation completed", body = ApiResponse<ReservationDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Not in Confirmed status")
    )
)]
pub async fn complete_reservation(
    State(state): State<ReservationAppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ReservationDto>>, ApiError> {
    let reservation = state.reservations.complete(id).await?;
    Ok(Json(ApiResponse::success(reservation.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/reservations/{id}/no-show",
    tag = "Reservations",
    params(("id" = Uuid, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation marked as no-show", body = ApiResponse<ReservationDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Not in Confirmed status")
    )
)]
pub async fn mark_no_show(
    State(state): State<ReservationAppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ReservationDto>>, ApiError> {
    let reservation = state.reservations.mark_no_show(id).await?;
    Ok(Json(ApiResponse::success(reservation.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/restaurants/{restaurant_id}/reservations",
    tag = "Reservations",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
        RestaurantReservationsQuery
    ),
    responses(
        (status = 200, description = "Reservations for the restaurant", body = ApiResponse<PaginatedResponse<ReservationDto>>),
        (status = 400, description = "Invalid filter")
    )
)]
pub async fn list_restaurant_reservations(
    State(state): State<ReservationAppState>,
    Path(restaurant_id): Path<Uuid>,
    Query(query): Query<RestaurantReservationsQuery>,
) -> Result<Json<ApiResponse<PaginatedResponse<ReservationDto>>>, ApiError> {
    let date = query.date.as_deref().map(parse_date).transpose()?;
    let status = parse_status(query.status.as_deref())?;
    let pagination = PaginationParams::sanitized(query.page, query.limit);

    let page = state
        .reservations
        .list_for_restaurant(restaurant_id, date, status, pagination)
        .await?;
    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(
        page,
        ReservationDto::from,
    ))))
}

#[utoipa::path(
    get,
    path = "/api/v1/customers/{customer_id}/reservations",
    tag = "Reservations",
    params(
        ("customer_id" = Uuid, Path, description = "Customer ID"),
        CustomerReservationsQuery
    ),
    responses(
        (status = 200, description = "Reservations for the customer", body = ApiResponse<PaginatedResponse<ReservationDto>>),
        (status = 400, description = "Invalid filter")
    )
)]
pub async fn list_customer_reservations(
    State(state): State<ReservationAppState>,
    Path(customer_id): Path<Uuid>,
    Query(query): Query<CustomerReservationsQuery>,
) -> Result<Json<ApiResponse<PaginatedResponse<ReservationDto>>>, ApiError> {
    let status = parse_status(query.status.as_deref())?;
    let pagination = PaginationParams::sanitized(query.page, query.limit);

    let page = state
        .reservations
        .list_for_customer(customer_id, status, pagination)
        .await?;
    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(
        page,
        ReservationDto::from,
    ))))
}
