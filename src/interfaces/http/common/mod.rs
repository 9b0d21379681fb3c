//! Shared API plumbing: the response envelope, domain-error mapping and
//! the boundary date/time formats.

pub mod validated_json;

pub use validated_json::{ValidatedJson, ValidatedJsonRejection};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Boundary date format: `yyyy-MM-dd`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Boundary time format: `HH:mm`, zero-padded 24-hour.
pub const TIME_FORMAT: &str = "%H:%M";

/// Standard API response envelope.
///
/// Every REST endpoint returns data in this wrapper.
/// On success: `{"success": true, "data": {...}}`,
/// on failure: `{"success": false, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` if the request succeeded
    pub success: bool,
    /// Payload. `null` on failure
    pub data: Option<T>,
    /// Error description. `null` on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Paginated response envelope payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl<T> PaginatedResponse<T> {
    pub fn from_result<U>(
        result: crate::shared::types::PaginatedResult<U>,
        map: impl Fn(U) -> T,
    ) -> Self {
        Self {
            items: result.items.into_iter().map(map).collect(),
            total: result.total,
            page: result.page,
            limit: result.limit,
            total_pages: result.total_pages,
        }
    }
}

/// Domain error carried to the HTTP boundary.
///
/// Maps each domain error kind onto its HTTP status; the body is the
/// standard envelope with `success: false`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::Conflict(_) => StatusCode::CONFLICT,
            DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
            DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Storage details stay in the logs, not in the response body.
        let message = match &self.0 {
            DomainError::Storage(detail) => {
                tracing::error!(error = %detail, "Storage error on request path");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

/// Parse a `yyyy-MM-dd` boundary date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        ApiError(DomainError::Validation(format!(
            "Invalid date '{}', expected yyyy-MM-dd",
            value
        )))
    })
}

/// Parse an `HH:mm` boundary time.
pub fn parse_time(value: &str) -> Result<NaiveTime, ApiError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|_| {
        ApiError(DomainError::Validation(format!(
            "Invalid time '{}', expected HH:mm",
            value
        )))
    })
}

pub fn format_date(value: NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}

pub fn format_time(value: NaiveTime) -> String {
    value.format(TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_formats_round_trip() {
        let d = parse_date("2026-09-01").unwrap();
        assert_eq!(format_date(d), "2026-09-01");
        let t = parse_time("09:05").unwrap();
        assert_eq!(format_time(t), "09:05");
    }

    #[test]
    fn rejects_malformed_inputs() {
        assert!(parse_date("01-09-2026").is_err());
        assert!(parse_date("2026-13-01").is_err());
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("7pm").is_err());
    }

    #[test]
    fn error_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::<()>::error("nope")).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "nope");
        assert!(body["data"].is_null());
    }
}
