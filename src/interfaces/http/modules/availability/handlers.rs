//! Availability HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use uuid::Uuid;

use crate::application::AvailabilityService;
use crate::interfaces::http::common::{parse_date, ApiError, ApiResponse};

use super::dto::*;

/// Application state for availability handlers.
#[derive(Clone)]
pub struct AvailabilityAppState {
    pub availability: Arc<AvailabilityService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/restaurants/{restaurant_id}/availability",
    tag = "Availability",
    params(
        ("restaurant_id" = Uuid, Path, description = "Restaurant ID"),
        AvailabilityQuery
    ),
    responses(
        (status = 200, description = "Offerable slots, empty when none", body = ApiResponse<Vec<AvailableSlotDto>>),
        (status = 404, description = "Restaurant not found"),
        (status = 400, description = "Invalid date or party size")
    )
)]
pub async fn get_availability(
    State(state): State<AvailabilityAppState>,
    Path(restaurant_id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<ApiResponse<Vec<AvailableSlotDto>>>, ApiError> {
    let date = parse_date(&query.date)?;

    let slots = state
        .availability
        .get_availability(restaurant_id, date, query.party_size)
        .await?;

    Ok(Json(ApiResponse::success(
        slots.into_iter().map(AvailableSlotDto::from).collect(),
    )))
}
