//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{AvailabilityService, ReservationService};
use crate::interfaces::http::common::{ApiResponse, PaginatedResponse};
use crate::interfaces::http::modules::availability::dto::AvailableSlotDto;
use crate::interfaces::http::modules::availability::handlers::{self as availability, AvailabilityAppState};
use crate::interfaces::http::modules::health::handlers::{self as health, HealthState};
use crate::interfaces::http::modules::reservations::dto::{
    CancelReservationRequest, CreateReservationRequest, ReservationDto,
};
use crate::interfaces::http::modules::reservations::handlers::{
    self as reservations, ReservationAppState,
};

/// Unified state for all routes. Axum extracts the specific handler
/// state via `FromRef`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub availability: Arc<AvailabilityService>,
    pub reservations: Arc<ReservationService>,
    pub started_at: Arc<Instant>,
}

impl FromRef<AppState> for HealthState {
    fn from_ref(s: &AppState) -> Self {
        HealthState {
            db: s.db.clone(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

impl FromRef<AppState> for AvailabilityAppState {
    fn from_ref(s: &AppState) -> Self {
        AvailabilityAppState {
            availability: Arc::clone(&s.availability),
        }
    }
}

impl FromRef<AppState> for ReservationAppState {
    fn from_ref(s: &AppState) -> Self {
        ReservationAppState {
            reservations: Arc::clone(&s.reservations),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Availability
        availability::get_availability,
        // Reservations
        reservations::create_reservation,
        reservations::get_reservation,
        reservations::get_reservation_by_code,
        reservations::cancel_reservation,
        reservations::complete_reservation,
        reservations::mark_no_show,
        reservations::list_restaurant_reservations,
        reservations::list_customer_reservations,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            PaginatedResponse<ReservationDto>,
            // Availability
            AvailableSlotDto,
            // Reservations
            CreateReservationRequest,
            CancelReservationRequest,
            ReservationDto,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Availability", description = "Offerable (slot, table) pairs per restaurant, date and party size"),
        (name = "Reservations", description = "Booking, lifecycle transitions and reservation queries"),
    ),
    info(
        title = "Tablebook Reservation API",
        version = "1.0.0",
        description = "REST API for restaurant table availability and reservations",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    db: DatabaseConnection,
    availability: Arc<AvailabilityService>,
    reservation_service: Arc<ReservationService>,
) -> Router {
    let state = AppState {
        db,
        availability,
        reservations: reservation_service,
        started_at: Arc::new(Instant::now()),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let api_routes = Router::new()
        .route("/reservations", post(reservations::create_reservation))
        .route("/reservations/{id}", get(reservations::get_reservation))
        .route(
            "/reservations/code/{code}",
            get(reservations::get_reservation_by_code),
        )
        .route(
            "/reservations/{id}/cancel",
            post(reservations::cancel_reservation),
        )
        .route(
            "/reservations/{id}/complete",
            post(reservations::complete_reservation),
        )
        .route(
            "/reservations/{id}/no-show",
            post(reservations::mark_no_show),
        )
        .route(
            "/restaurants/{restaurant_id}/availability",
            get(availability::get_availability),
        )
        .route(
            "/restaurants/{restaurant_id}/reservations",
            get(reservations::list_restaurant_reservations),
        )
        .route(
            "/customers/{customer_id}/reservations",
            get(reservations::list_customer_reservations),
        );

    Router::new()
        .merge(swagger_routes)
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_routes)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
