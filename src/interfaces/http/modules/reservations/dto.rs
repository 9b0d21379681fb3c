//! Reservation DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::domain::Reservation;
use crate::interfaces::http::common::{format_date, format_time};

/// Booking request body.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReservationRequest {
    pub restaurant_id: Uuid,
    pub table_id: Uuid,
    pub customer_id: Uuid,
    /// Reservation date, `yyyy-MM-dd`
    pub reservation_date: String,
    /// Seating start, `HH:mm`
    pub start_time: String,
    #[validate(range(min = 1, max = 50, message = "must be between 1 and 50"))]
    pub party_size: i32,
    #[validate(length(max = 500, message = "at most 500 characters"))]
    pub special_requests: Option<String>,
}

/// Cancellation request body.
///
/// When `customer_id` is present the cancellation runs as the customer and
/// is held to the lead-time window; without it the restaurant cancels.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CancelReservationRequest {
    pub customer_id: Option<Uuid>,
    #[validate(length(max = 500, message = "at most 500 characters"))]
    pub reason: Option<String>,
}

/// Query parameters for a restaurant's reservation listing.
#[derive(Debug, Deserialize, IntoParams)]
pub struct RestaurantReservationsQuery {
    /// Filter by date, `yyyy-MM-dd`
    pub date: Option<String>,
    /// Filter by status name, e.g. `Confirmed`
    pub status: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

/// Query parameters for a customer's reservation listing.
#[derive(Debug, Deserialize, IntoParams)]
pub struct CustomerReservationsQuery {
    /// Filter by status name, e.g. `Confirmed`
    pub status: Option<String>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

/// Full reservation view.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReservationDto {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub table_id: Uuid,
    pub customer_id: Uuid,
    /// `yyyy-MM-dd`
    pub reservation_date: String,
    /// `HH:mm`
    pub start_time: String,
    /// `HH:mm`
    pub end_time: String,
    pub duration_minutes: i32,
    pub party_size: i32,
    pub status: String,
    pub special_requests: Option<String>,
    pub confirmation_code: String,
    pub cancelled_at: Option<String>,
    pub cancellation_reason: Option<String>,
    pub created_at: String,
}

impl From<Reservation> for ReservationDto {
    fn from(r: Reservation) -> Self {
        Self {
            id: r.id,
            restaurant_id: r.restaurant_id,
            table_id: r.table_id,
            customer_id: r.customer_id,
            reservation_date: format_date(r.reservation_date),
            start_time: format_time(r.start_time),
            end_time: format_time(r.end_time),
            duration_minutes: r.duration_minutes,
            party_size: r.party_size,
            status: r.status.as_str().to_string(),
            special_requests: r.special_requests,
            confirmation_code: r.confirmation_code,
            cancelled_at: r.cancelled_at.map(|t| t.to_rfc3339()),
            cancellation_reason: r.cancellation_reason,
            created_at: r.created_at.to_rfc3339(),
        }
    }
}
