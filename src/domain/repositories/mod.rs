//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//! - `DomainResult` — standard result type for domain operations

use super::opening_hours::OpeningHoursRepository;
use super::reservation::ReservationRepository;
use super::restaurant::RestaurantRepository;
use super::table::TableRepository;
use crate::domain::error::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let restaurant = repos.restaurants().find_by_id(id).await?;
///     let tables = repos.tables().find_bookable(id, 4).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn restaurants(&self) -> &dyn RestaurantRepository;
    fn tables(&self) -> &dyn TableRepository;
    fn opening_hours(&self) -> &dyn OpeningHoursRepository;
    fn reservations(&self) -> &dyn ReservationRepository;
}
