//! Availability engine: turns opening hours, table inventory and existing
//! bookings into the list of offerable (slot, table) pairs.
//!
//! Pure read path. Results are a best-effort snapshot: a returned slot may be
//! raced away by a concurrent commit, which the booking path answers with a
//! Conflict rather than this query taking locks.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, NaiveTime};
use tracing::debug;
use uuid::Uuid;

use crate::application::slots::{candidate_starts, overlaps, seating_end, SLOT_INTERVAL_MINUTES};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

/// One offerable slot: a start time plus the best-fit table assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableSlot {
    pub slot_time: NaiveTime,
    pub table_id: Uuid,
    pub table_number: String,
    pub table_capacity: i32,
}

pub struct AvailabilityService {
    repos: Arc<dyn RepositoryProvider>,
}

impl AvailabilityService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Offerable slots for a restaurant, date and party size, in slot order.
    ///
    /// "No availability" is an empty list, never an error: an unapproved or
    /// inactive restaurant, a closed day, a window shorter than one seating
    /// and a party no table fits all land here. Only a missing restaurant
    /// row is NotFound. Past dates are accepted; rejecting them belongs to
    /// the booking validator.
    pub async fn get_availability(
        &self,
        restaurant_id: Uuid,
        date: NaiveDate,
        party_size: i32,
    ) -> DomainResult<Vec<AvailableSlot>> {
        if party_size < 1 {
            return Err(DomainError::Validation(
                "Party size must be at least 1".into(),
            ));
        }

        let restaurant = self
            .repos
            .restaurants()
            .find_by_id(restaurant_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Restaurant",
                field: "id",
                value: restaurant_id.to_string(),
            })?;

        if !restaurant.is_bookable() {
            return Ok(Vec::new());
        }

        let hours = match self
            .repos
            .opening_hours()
            .find_for_day(restaurant_id, date.weekday())
            .await?
        {
            Some(h) if !h.is_closed => h,
            _ => return Ok(Vec::new()),
        };

        // Sorted ascending by capacity: best fit tries the smallest
        // adequate table first.
        let tables = self
            .repos
            .tables()
            .find_bookable(restaurant_id, party_size)
            .await?;
        if tables.is_empty() {
            return Ok(Vec::new());
        }

        let existing = self
            .repos
            .reservations()
            .find_occupying_for_date(restaurant_id, date)
            .await?;

        let duration = restaurant.default_duration_minutes;
        let mut available = Vec::new();

        for slot_start in candidate_starts(
            hours.open_time,
            hours.close_time,
            duration,
            SLOT_INTERVAL_MINUTES,
        ) {
            let slot_end = seating_end(slot_start, duration);

            for table in &tables {
                if !table.fits(party_size) {
                    continue;
                }

                let has_conflict = existing.iter().any(|r| {
                    r.table_id == table.id
                        && r.status.is_occupying()
                        && overlaps(r.start_time, r.end_time, slot_start, slot_end)
                });

                if !has_conflict {
                    available.push(AvailableSlot {
                        slot_time: slot_start,
                        table_id: table.id,
                        table_number: table.table_number.clone(),
                        table_capacity: table.capacity,
                    });
                    // Best fit: take the smallest suitable table and move on.
                    break;
                }
            }
        }

        debug!(
            restaurant = %restaurant_id,
            %date,
            party_size,
            slots = available.len(),
            "Computed availability"
        );
        Ok(available)
    }
}
