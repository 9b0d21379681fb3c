//! Reservation use cases: the booking commit protocol and the lifecycle
//! transitions (cancel, complete, no-show), plus read queries.
//!
//! The commit path is the correctness-critical piece: validation happens
//! without locks, then the conflict re-check and the insert run under the
//! per-(table, date) exclusion so two racing callers can never both pass the
//! check and both insert.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, NaiveTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::application::locks::TableDateLocks;
use crate::application::slots::{overlaps, seating_end};
use crate::domain::{
    DomainError, DomainResult, RepositoryProvider, Reservation, ReservationStatus,
};
use crate::shared::types::{PaginatedResult, PaginationParams};
use crate::shared::utills::{retry_with_backoff, RetryConfig};

/// How many fresh confirmation codes to try when the store reports a
/// collision before giving up. Collisions are astronomically rare
/// (32^8 codes) but not assumed impossible.
const CODE_RETRY_ATTEMPTS: u32 = 3;

/// Booking request as validated by the boundary.
#[derive(Debug, Clone)]
pub struct CreateReservation {
    pub restaurant_id: Uuid,
    pub table_id: Uuid,
    pub customer_id: Uuid,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub party_size: i32,
    pub special_requests: Option<String>,
}

/// Who is driving a cancellation. Customers are held to the lead-time
/// rule; the restaurant/admin path is not. Authorization itself (roles,
/// ownership) is the surrounding application's job.
#[derive(Debug, Clone, Copy)]
pub enum CancelActor {
    Customer(Uuid),
    Restaurant,
}

pub struct ReservationService {
    repos: Arc<dyn RepositoryProvider>,
    locks: Arc<TableDateLocks>,
    retry: RetryConfig,
    cancellation_window_hours: i64,
}

impl ReservationService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        locks: Arc<TableDateLocks>,
        cancellation_window_hours: i64,
    ) -> Self {
        Self {
            repos,
            locks,
            retry: RetryConfig::default(),
            cancellation_window_hours,
        }
    }

    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    // ── Booking commit ──────────────────────────────────────────

    /// Validate and commit a booking.
    ///
    /// Preconditions are checked in order, each failing with its own error
    /// kind; then the check-then-insert runs under the (table, date)
    /// exclusion. A lost race surfaces as Conflict and is never retried
    /// here; the caller should re-query availability. Transient store
    /// failures retry with backoff, re-acquiring the exclusion each attempt.
    pub async fn create_reservation(&self, cmd: CreateReservation) -> DomainResult<Reservation> {
        let restaurant = self
            .repos
            .restaurants()
            .find_by_id(cmd.restaurant_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Restaurant",
                field: "id",
                value: cmd.restaurant_id.to_string(),
            })?;

        if !restaurant.is_bookable() {
            return Err(DomainError::Conflict(
                "Restaurant is not accepting reservations".into(),
            ));
        }

        let table = self
            .repos
            .tables()
            .find_by_id(cmd.table_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Table",
                field: "id",
                value: cmd.table_id.to_string(),
            })?;

        if table.restaurant_id != cmd.restaurant_id {
            return Err(DomainError::Conflict(
                "Table does not belong to this restaurant".into(),
            ));
        }
        if !table.is_active {
            return Err(DomainError::Conflict("Table is not available".into()));
        }
        if !table.fits(cmd.party_size) {
            return Err(DomainError::Conflict(format!(
                "Party size {} does not fit table capacity {}-{}",
                cmd.party_size, table.min_capacity, table.capacity
            )));
        }

        let hours = match self
            .repos
            .opening_hours()
            .find_for_day(cmd.restaurant_id, cmd.date.weekday())
            .await?
        {
            Some(h) if !h.is_closed => h,
            _ => {
                return Err(DomainError::Conflict(
                    "Restaurant is closed on this day".into(),
                ))
            }
        };

        let duration = restaurant.default_duration_minutes;
        let slot_end = seating_end(cmd.start_time, duration);
        if cmd.start_time < hours.open_time || slot_end > hours.close_time {
            return Err(DomainError::Conflict(
                "Requested time is outside opening hours".into(),
            ));
        }

        let committed = retry_with_backoff(
            self.retry.clone(),
            || self.commit_under_lock(&cmd, duration),
            |err| err.is_transient(),
            "commit_reservation",
        )
        .await?;

        info!(
            reservation = %committed.id,
            table = %committed.table_id,
            date = %committed.reservation_date,
            start = %committed.start_time,
            code = %committed.confirmation_code,
            "Reservation confirmed"
        );
        Ok(committed)
    }

    /// The serialized check-then-insert. Everything in here holds the
    /// (table, date) exclusion; the guard drops on every exit path.
    async fn commit_under_lock(
        &self,
        cmd: &CreateReservation,
        duration: i32,
    ) -> DomainResult<Reservation> {
        let _guard = self.locks.acquire(cmd.table_id, cmd.date).await;

        let slot_end = seating_end(cmd.start_time, duration);
        let existing = self
            .repos
            .reservations()
            .find_occupying_for_table(cmd.table_id, cmd.date)
            .await?;

        let has_conflict = existing.iter().any(|r| {
            r.status.is_occupying() && overlaps(r.start_time, r.end_time, cmd.start_time, slot_end)
        });
        if has_conflict {
            debug!(table = %cmd.table_id, date = %cmd.date, start = %cmd.start_time,
                   "Slot lost to a concurrent booking");
            return Err(DomainError::Conflict(
                "This time slot is no longer available. Please select another slot".into(),
            ));
        }

        // The overlap check already passed, so a Conflict from the insert can
        // only be the confirmation-code unique constraint: regenerate and
        // try again, bounded.
        for attempt in 1..=CODE_RETRY_ATTEMPTS {
            let reservation = Reservation::create(
                cmd.restaurant_id,
                cmd.table_id,
                cmd.customer_id,
                cmd.date,
                cmd.start_time,
                duration,
                cmd.party_size,
                cmd.special_requests.clone(),
            )?;

            match self.repos.reservations().save(reservation.clone()).await {
                Ok(()) => return Ok(reservation),
                Err(DomainError::Conflict(_)) => {
                    debug!(attempt, "Confirmation code collision, regenerating");
                }
                Err(e) => return Err(e),
            }
        }

        // Exhausted every fresh code. Conflict would tell the caller the
        // slot was lost; this is a store-side failure instead.
        Err(DomainError::Storage(
            "Could not generate a unique confirmation code".into(),
        ))
    }

    // ── Lifecycle ───────────────────────────────────────────────

    /// Cancel a reservation. Customer cancellations must respect the
    /// lead-time window; restaurant/admin cancellations need not.
    pub async fn cancel(
        &self,
        id: Uuid,
        actor: CancelActor,
        reason: Option<String>,
    ) -> DomainResult<Reservation> {
        let mut reservation = self.get(id).await?;

        let by_restaurant = match actor {
            CancelActor::Customer(customer_id) => {
                if reservation.customer_id != customer_id {
                    return Err(DomainError::Forbidden(
                        "Not authorized to cancel this reservation".into(),
                    ));
                }
                if !reservation.can_be_cancelled_by_customer(self.cancellation_window_hours, Utc::now())
                {
                    return Err(DomainError::Conflict(format!(
                        "Reservations can only be cancelled at least {} hours in advance",
                        self.cancellation_window_hours
                    )));
                }
                false
            }
            CancelActor::Restaurant => true,
        };

        reservation.cancel(by_restaurant, reason)?;
        self.repos.reservations().update(reservation.clone()).await?;
        info!(reservation = %id, status = %reservation.status, "Reservation cancelled");
        Ok(reservation)
    }

    pub async fn complete(&self, id: Uuid) -> DomainResult<Reservation> {
        let mut reservation = self.get(id).await?;
        reservation.complete()?;
        self.repos.reservations().update(reservation.clone()).await?;
        Ok(reservation)
    }

    pub async fn mark_no_show(&self, id: Uuid) -> DomainResult<Reservation> {
        let mut reservation = self.get(id).await?;
        reservation.mark_no_show()?;
        self.repos.reservations().update(reservation.clone()).await?;
        Ok(reservation)
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn get(&self, id: Uuid) -> DomainResult<Reservation> {
        self.repos
            .reservations()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: id.to_string(),
            })
    }

    pub async fn get_by_confirmation_code(&self, code: &str) -> DomainResult<Reservation> {
        self.repos
            .reservations()
            .find_by_confirmation_code(code)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Reservation",
                field: "confirmation_code",
                value: code.to_string(),
            })
    }

    pub async fn list_for_restaurant(
        &self,
        restaurant_id: Uuid,
        date: Option<NaiveDate>,
        status: Option<ReservationStatus>,
        pagination: PaginationParams,
    ) -> DomainResult<PaginatedResult<Reservation>> {
        self.repos
            .reservations()
            .find_by_restaurant(restaurant_id, date, status, pagination.page, pagination.limit)
            .await
    }

    pub async fn list_for_customer(
        &self,
        customer_id: Uuid,
        status: Option<ReservationStatus>,
        pagination: PaginationParams,
    ) -> DomainResult<PaginatedResult<Reservation>> {
        self.repos
            .reservations()
            .find_by_customer(customer_id, status, pagination.page, pagination.limit)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::availability::AvailabilityService;
    use crate::domain::{OpeningHoursEntry, Restaurant, RestaurantTable};
    use crate::infrastructure::storage::InMemoryRepositoryProvider;
    use chrono::{Duration, Weekday};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn next_week() -> NaiveDate {
        Utc::now().date_naive() + Duration::days(7)
    }

    struct Fixture {
        repos: Arc<InMemoryRepositoryProvider>,
        restaurant_id: Uuid,
        table_id: Uuid,
    }

    impl Fixture {
        /// One restaurant open 11:30-22:00 daily (90-minute seatings) with a
        /// single 2-4 seat table.
        async fn new() -> Self {
            let repos = Arc::new(InMemoryRepositoryProvider::new());
            let restaurant_id = Uuid::new_v4();
            repos
                .restaurants()
                .save(Restaurant {
                    id: restaurant_id,
                    name: "Fixture".into(),
                    description: None,
                    default_duration_minutes: 90,
                    is_approved: true,
                    is_active: true,
                    created_at: Utc::now(),
                    updated_at: Utc::now(),
                })
                .await
                .unwrap();
            for day in [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
                Weekday::Sun,
            ] {
                repos
                    .opening_hours()
                    .save(OpeningHoursEntry {
                        id: Uuid::new_v4(),
                        restaurant_id,
                        day_of_week: day,
                        open_time: t(11, 30),
                        close_time: t(22, 0),
                        is_closed: false,
                    })
                    .await
                    .unwrap();
            }
            let table_id = Uuid::new_v4();
            repos
                .tables()
                .save(RestaurantTable {
                    id: table_id,
                    restaurant_id,
                    table_number: "T1".into(),
                    capacity: 4,
                    min_capacity: 2,
                    is_active: true,
                    notes: None,
                    created_at: Utc::now(),
                })
                .await
                .unwrap();
            Self {
                repos,
                restaurant_id,
                table_id,
            }
        }

        fn service(&self) -> ReservationService {
            ReservationService::new(self.repos.clone(), Arc::new(TableDateLocks::new()), 2)
        }

        fn command(&self, start: NaiveTime) -> CreateReservation {
            CreateReservation {
                restaurant_id: self.restaurant_id,
                table_id: self.table_id,
                customer_id: Uuid::new_v4(),
                date: next_week(),
                start_time: start,
                party_size: 4,
                special_requests: None,
            }
        }
    }

    #[tokio::test]
    async fn books_a_valid_slot_as_confirmed() {
        let fx = Fixture::new().await;
        let r = fx
            .service()
            .create_reservation(fx.command(t(19, 0)))
            .await
            .unwrap();
        assert_eq!(r.status, ReservationStatus::Confirmed);
        assert_eq!(r.start_time, t(19, 0));
        assert_eq!(r.end_time, t(20, 30));
        assert_eq!(r.confirmation_code.len(), 8);
    }

    #[tokio::test]
    async fn second_booking_on_same_slot_conflicts() {
        let fx = Fixture::new().await;
        let svc = fx.service();
        svc.create_reservation(fx.command(t(19, 0))).await.unwrap();
        let err = svc
            .create_reservation(fx.command(t(19, 0)))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn overlapping_interval_conflicts_but_boundary_does_not() {
        let fx = Fixture::new().await;
        let svc = fx.service();
        svc.create_reservation(fx.command(t(19, 0))).await.unwrap();

        // 18:15 overlaps 19:00-20:30
        let err = svc
            .create_reservation(fx.command(t(18, 15)))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        // 17:30 ends exactly at 19:00; 20:30 starts exactly at the end
        svc.create_reservation(fx.command(t(17, 30))).await.unwrap();
        svc.create_reservation(fx.command(t(20, 30))).await.unwrap();
    }

    #[tokio::test]
    async fn race_for_one_slot_yields_exactly_one_winner() {
        let fx = Fixture::new().await;
        let svc = Arc::new(fx.service());

        let mut handles = Vec::new();
        for _ in 0..8 {
            let svc = svc.clone();
            let cmd = fx.command(t(19, 0));
            handles.push(tokio::spawn(
                async move { svc.create_reservation(cmd).await },
            ));
        }

        let mut successes = 0;
        let mut conflicts = 0;
        for h in handles {
            match h.await.unwrap() {
                Ok(_) => successes += 1,
                Err(DomainError::Conflict(_)) => conflicts += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
        assert_eq!(successes, 1);
        assert_eq!(conflicts, 7);

        // Disjointness invariant holds afterwards
        let occupying = fx
            .repos
            .reservations()
            .find_occupying_for_table(fx.table_id, next_week())
            .await
            .unwrap();
        assert_eq!(occupying.len(), 1);
    }

    #[tokio::test]
    async fn every_offered_slot_is_bookable_when_nothing_intervenes() {
        let fx = Fixture::new().await;
        let availability = AvailabilityService::new(fx.repos.clone());
        let svc = fx.service();

        let slots = availability
            .get_availability(fx.restaurant_id, next_week(), 4)
            .await
            .unwrap();
        let first = slots.first().expect("some availability");

        let mut cmd = fx.command(first.slot_time);
        cmd.table_id = first.table_id;
        svc.create_reservation(cmd).await.unwrap();

        // And the booked slot disappears from a fresh query
        let after = availability
            .get_availability(fx.restaurant_id, next_week(), 4)
            .await
            .unwrap();
        assert!(after.iter().all(|s| s.slot_time != first.slot_time));
    }

    #[tokio::test]
    async fn precondition_failures_each_have_their_kind() {
        let fx = Fixture::new().await;
        let svc = fx.service();

        // Unknown restaurant
        let mut cmd = fx.command(t(19, 0));
        cmd.restaurant_id = Uuid::new_v4();
        assert!(matches!(
            svc.create_reservation(cmd).await.unwrap_err(),
            DomainError::NotFound { entity: "Restaurant", .. }
        ));

        // Unknown table
        let mut cmd = fx.command(t(19, 0));
        cmd.table_id = Uuid::new_v4();
        assert!(matches!(
            svc.create_reservation(cmd).await.unwrap_err(),
            DomainError::NotFound { entity: "Table", .. }
        ));

        // Party outside the table range
        let mut cmd = fx.command(t(19, 0));
        cmd.party_size = 1;
        assert!(matches!(
            svc.create_reservation(cmd).await.unwrap_err(),
            DomainError::Conflict(_)
        ));

        // Outside opening hours: 21:00 + 90min > 22:00
        assert!(matches!(
            svc.create_reservation(fx.command(t(21, 0))).await.unwrap_err(),
            DomainError::Conflict(_)
        ));
        // Before opening
        assert!(matches!(
            svc.create_reservation(fx.command(t(10, 0))).await.unwrap_err(),
            DomainError::Conflict(_)
        ));
    }

    #[tokio::test]
    async fn table_from_another_restaurant_is_rejected() {
        let fx = Fixture::new().await;
        let other = Fixture::new().await;
        let svc = fx.service();

        let mut cmd = fx.command(t(19, 0));
        cmd.table_id = other.table_id;
        // Need the other table visible through the same provider
        let foreign = other
            .repos
            .tables()
            .find_by_id(other.table_id)
            .await
            .unwrap()
            .unwrap();
        fx.repos.tables().save(foreign).await.unwrap();

        assert!(matches!(
            svc.create_reservation(cmd).await.unwrap_err(),
            DomainError::Conflict(_)
        ));
    }

    #[tokio::test]
    async fn customer_cancel_respects_lead_time() {
        let fx = Fixture::new().await;
        let svc = fx.service();
        let customer = Uuid::new_v4();

        // Booked for ~1 hour from now (on today's date). Build directly so
        // the opening-hours precondition cannot interfere with the clock.
        let now = Utc::now() + Duration::hours(1);
        let r = Reservation::create(
            fx.restaurant_id,
            fx.table_id,
            customer,
            now.date_naive(),
            now.time(),
            90,
            4,
            None,
        )
        .unwrap();
        fx.repos.reservations().save(r.clone()).await.unwrap();

        let err = svc
            .cancel(r.id, CancelActor::Customer(customer), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        // The restaurant path ignores the window
        let cancelled = svc
            .cancel(r.id, CancelActor::Restaurant, Some("kitchen closed".into()))
            .await
            .unwrap();
        assert_eq!(cancelled.status, ReservationStatus::CancelledByRestaurant);
        assert!(cancelled.cancelled_at.is_some());
    }

    #[tokio::test]
    async fn customer_can_cancel_outside_window_and_slot_reopens() {
        let fx = Fixture::new().await;
        let svc = fx.service();
        let customer = Uuid::new_v4();

        let mut cmd = fx.command(t(19, 0));
        cmd.customer_id = customer;
        let r = svc.create_reservation(cmd).await.unwrap();

        let cancelled = svc
            .cancel(r.id, CancelActor::Customer(customer), Some("plans changed".into()))
            .await
            .unwrap();
        assert_eq!(cancelled.status, ReservationStatus::CancelledByCustomer);

        // Cancelled rows no longer occupy the slot
        svc.create_reservation(fx.command(t(19, 0))).await.unwrap();
    }

    #[tokio::test]
    async fn wrong_customer_cannot_cancel() {
        let fx = Fixture::new().await;
        let svc = fx.service();
        let r = svc.create_reservation(fx.command(t(19, 0))).await.unwrap();

        let err = svc
            .cancel(r.id, CancelActor::Customer(Uuid::new_v4()), None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
    }

    #[tokio::test]
    async fn terminal_reservation_cannot_be_cancelled_again() {
        let fx = Fixture::new().await;
        let svc = fx.service();
        let r = svc.create_reservation(fx.command(t(19, 0))).await.unwrap();

        svc.complete(r.id).await.unwrap();
        let err = svc.cancel(r.id, CancelActor::Restaurant, None).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn no_show_then_lookup_by_code() {
        let fx = Fixture::new().await;
        let svc = fx.service();
        let r = svc.create_reservation(fx.command(t(19, 0))).await.unwrap();

        svc.mark_no_show(r.id).await.unwrap();
        let found = svc
            .get_by_confirmation_code(&r.confirmation_code)
            .await
            .unwrap();
        assert_eq!(found.id, r.id);
        assert_eq!(found.status, ReservationStatus::NoShow);
    }

    #[tokio::test]
    async fn listing_filters_by_status() {
        let fx = Fixture::new().await;
        let svc = fx.service();
        let a = svc.create_reservation(fx.command(t(12, 0))).await.unwrap();
        let _b = svc.create_reservation(fx.command(t(19, 0))).await.unwrap();
        svc.complete(a.id).await.unwrap();

        let confirmed = svc
            .list_for_restaurant(
                fx.restaurant_id,
                Some(next_week()),
                Some(ReservationStatus::Confirmed),
                PaginationParams::sanitized(None, None),
            )
            .await
            .unwrap();
        assert_eq!(confirmed.total, 1);
        assert_eq!(confirmed.items[0].start_time, t(19, 0));
    }

    /// Reservation store whose insert always reports a code collision.
    struct CollidingReservations;

    #[async_trait::async_trait]
    impl crate::domain::ReservationRepository for CollidingReservations {
        async fn save(&self, _reservation: Reservation) -> DomainResult<()> {
            Err(DomainError::Conflict(
                "Unique constraint violated: confirmation_code".into(),
            ))
        }

        async fn find_by_id(&self, _id: Uuid) -> DomainResult<Option<Reservation>> {
            Ok(None)
        }

        async fn find_by_confirmation_code(
            &self,
            _code: &str,
        ) -> DomainResult<Option<Reservation>> {
            Ok(None)
        }

        async fn update(&self, _reservation: Reservation) -> DomainResult<()> {
            Ok(())
        }

        async fn find_occupying_for_date(
            &self,
            _restaurant_id: Uuid,
            _date: NaiveDate,
        ) -> DomainResult<Vec<Reservation>> {
            Ok(Vec::new())
        }

        async fn find_occupying_for_table(
            &self,
            _table_id: Uuid,
            _date: NaiveDate,
        ) -> DomainResult<Vec<Reservation>> {
            Ok(Vec::new())
        }

        async fn find_by_restaurant(
            &self,
            _restaurant_id: Uuid,
            _date: Option<NaiveDate>,
            _status: Option<ReservationStatus>,
            page: u64,
            limit: u64,
        ) -> DomainResult<PaginatedResult<Reservation>> {
            Ok(PaginatedResult::new(Vec::new(), 0, page, limit))
        }

        async fn find_by_customer(
            &self,
            _customer_id: Uuid,
            _status: Option<ReservationStatus>,
            page: u64,
            limit: u64,
        ) -> DomainResult<PaginatedResult<Reservation>> {
            Ok(PaginatedResult::new(Vec::new(), 0, page, limit))
        }
    }

    /// The fixture's restaurant/table/hours data with the colliding
    /// reservation store swapped in.
    struct CollidingProvider {
        inner: Arc<InMemoryRepositoryProvider>,
        reservations: CollidingReservations,
    }

    impl RepositoryProvider for CollidingProvider {
        fn restaurants(&self) -> &dyn crate::domain::RestaurantRepository {
            self.inner.restaurants()
        }

        fn tables(&self) -> &dyn crate::domain::TableRepository {
            self.inner.tables()
        }

        fn opening_hours(&self) -> &dyn crate::domain::OpeningHoursRepository {
            self.inner.opening_hours()
        }

        fn reservations(&self) -> &dyn crate::domain::ReservationRepository {
            &self.reservations
        }
    }

    #[tokio::test]
    async fn exhausted_code_collisions_surface_as_storage_not_conflict() {
        let fx = Fixture::new().await;
        let repos = Arc::new(CollidingProvider {
            inner: fx.repos.clone(),
            reservations: CollidingReservations,
        });
        // One outer attempt keeps the test off the backoff timer; the inner
        // code-regeneration loop still runs its full bound.
        let svc = ReservationService::new(repos, Arc::new(TableDateLocks::new()), 2)
            .with_retry_config(RetryConfig {
                max_attempts: 1,
                initial_delay: std::time::Duration::from_millis(1),
                backoff_multiplier: 1.0,
                max_delay: std::time::Duration::from_millis(1),
            });

        let err = svc
            .create_reservation(fx.command(t(19, 0)))
            .await
            .unwrap_err();
        // A collision is not a lost slot: the caller must see a store
        // failure, not the raw unique-constraint Conflict.
        assert!(matches!(err, DomainError::Storage(_)));
    }
}
