//! Reservation repository interface

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use super::model::{Reservation, ReservationStatus};
use crate::domain::DomainResult;
use crate::shared::types::PaginatedResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Insert a new reservation.
    ///
    /// The store enforces confirmation-code uniqueness; a collision surfaces
    /// as `DomainError::Conflict` and the caller regenerates the code.
    async fn save(&self, reservation: Reservation) -> DomainResult<()>;

    /// Find reservation by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Reservation>>;

    /// Find reservation by its confirmation code
    async fn find_by_confirmation_code(&self, code: &str) -> DomainResult<Option<Reservation>>;

    /// Persist a lifecycle transition (status, cancelled_at, reason).
    async fn update(&self, reservation: Reservation) -> DomainResult<()>;

    /// All occupying-status reservations of a restaurant on one date.
    /// Feeds the availability scan.
    async fn find_occupying_for_date(
        &self,
        restaurant_id: Uuid,
        date: NaiveDate,
    ) -> DomainResult<Vec<Reservation>>;

    /// All occupying-status reservations on one table and date.
    /// Feeds the conflict re-check inside the booking commit.
    async fn find_occupying_for_table(
        &self,
        table_id: Uuid,
        date: NaiveDate,
    ) -> DomainResult<Vec<Reservation>>;

    /// Reservations of a restaurant, optionally filtered by date and status,
    /// ordered by date then start time, paginated.
    async fn find_by_restaurant(
        &self,
        restaurant_id: Uuid,
        date: Option<NaiveDate>,
        status: Option<ReservationStatus>,
        page: u64,
        limit: u64,
    ) -> DomainResult<PaginatedResult<Reservation>>;

    /// Reservations of a customer, optionally filtered by status,
    /// newest first, paginated.
    async fn find_by_customer(
        &self,
        customer_id: Uuid,
        status: Option<ReservationStatus>,
        page: u64,
        limit: u64,
    ) -> DomainResult<PaginatedResult<Reservation>>;
}
