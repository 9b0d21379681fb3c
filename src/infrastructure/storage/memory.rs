use async_trait::async_trait;
use chrono::{NaiveDate, Weekday};
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::opening_hours::{OpeningHoursEntry, OpeningHoursRepository};
use crate::domain::reservation::{Reservation, ReservationRepository, ReservationStatus};
use crate::domain::restaurant::{Restaurant, RestaurantRepository};
use crate::domain::table::{RestaurantTable, TableRepository};
use crate::domain::{DomainError, DomainResult, RepositoryProvider};
use crate::shared::types::PaginatedResult;

#[derive(Default)]
struct InMemoryRestaurants {
    rows: DashMap<Uuid, Restaurant>,
}

#[async_trait]
impl RestaurantRepository for InMemoryRestaurants {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Restaurant>> {
        Ok(self.rows.get(&id).map(|r| r.clone()))
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.rows.len() as u64)
    }

    async fn save(&self, restaurant: Restaurant) -> DomainResult<()> {
        self.rows.insert(restaurant.id, restaurant);
        Ok(())
    }
}

#[derive(Default)]
struct InMemoryTables {
    rows: DashMap<Uuid, RestaurantTable>,
}

#[async_trait]
impl TableRepository for InMemoryTables {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<RestaurantTable>> {
        Ok(self.rows.get(&id).map(|t| t.clone()))
    }

    async fn find_bookable(
        &self,
        restaurant_id: Uuid,
        party_size: i32,
    ) -> DomainResult<Vec<RestaurantTable>> {
        let mut tables: Vec<RestaurantTable> = self
            .rows
            .iter()
            .filter(|t| {
                t.restaurant_id == restaurant_id && t.is_active && t.capacity >= party_size
            })
            .map(|t| t.clone())
            .collect();
        tables.sort_by_key(|t| t.capacity);
        Ok(tables)
    }

    async fn save(&self, table: RestaurantTable) -> DomainResult<()> {
        self.rows.insert(table.id, table);
        Ok(())
    }
}

#[derive(Default)]
struct InMemoryOpeningHours {
    // Keyed per restaurant and weekday so a later save replaces the
    // earlier entry for that day, matching the unique index in the store.
    rows: DashMap<(Uuid, Weekday), OpeningHoursEntry>,
}

#[async_trait]
impl OpeningHoursRepository for InMemoryOpeningHours {
    async fn find_for_day(
        &self,
        restaurant_id: Uuid,
        day: Weekday,
    ) -> DomainResult<Option<OpeningHoursEntry>> {
        Ok(self.rows.get(&(restaurant_id, day)).map(|e| e.clone()))
    }

    async fn save(&self, entry: OpeningHoursEntry) -> DomainResult<()> {
        self.rows
            .insert((entry.restaurant_id, entry.day_of_week), entry);
        Ok(())
    }
}

#[derive(Default)]
struct InMemoryReservations {
    rows: DashMap<Uuid, Reservation>,
    codes: DashMap<String, Uuid>,
}

impl InMemoryReservations {
    fn filtered(&self, pred: impl Fn(&Reservation) -> bool) -> Vec<Reservation> {
        self.rows
            .iter()
            .filter(|r| pred(r))
            .map(|r| r.clone())
            .collect()
    }
}

fn paginate(
    mut items: Vec<Reservation>,
    page: u64,
    limit: u64,
) -> PaginatedResult<Reservation> {
    let total = items.len() as u64;
    let offset = (page.saturating_sub(1) * limit) as usize;
    let items = if offset >= items.len() {
        Vec::new()
    } else {
        items.drain(offset..).take(limit as usize).collect()
    };
    PaginatedResult::new(items, total, page, limit)
}

#[async_trait]
impl ReservationRepository for InMemoryReservations {
    async fn save(&self, reservation: Reservation) -> DomainResult<()> {
        match self.codes.entry(reservation.confirmation_code.clone()) {
            dashmap::Entry::Occupied(_) => {
                return Err(DomainError::Conflict(format!(
                    "Unique constraint violated: confirmation_code {}",
                    reservation.confirmation_code
                )));
            }
            dashmap::Entry::Vacant(slot) => {
                slot.insert(reservation.id);
            }
        }
        self.rows.insert(reservation.id, reservation);
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Reservation>> {
        Ok(self.rows.get(&id).map(|r| r.clone()))
    }

    async fn find_by_confirmation_code(&self, code: &str) -> DomainResult<Option<Reservation>> {
        let id = match self.codes.get(code) {
            Some(id) => *id,
            None => return Ok(None),
        };
        Ok(self.rows.get(&id).map(|r| r.clone()))
    }

    async fn update(&self, reservation: Reservation) -> DomainResult<()> {
        if !self.rows.contains_key(&reservation.id) {
            return Err(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: reservation.id.to_string(),
            });
        }
        self.rows.insert(reservation.id, reservation);
        Ok(())
    }

    async fn find_occupying_for_date(
        &self,
        restaurant_id: Uuid,
        date: NaiveDate,
    ) -> DomainResult<Vec<Reservation>> {
        Ok(self.filtered(|r| {
            r.restaurant_id == restaurant_id
                && r.reservation_date == date
                && r.status.is_occupying()
        }))
    }

    async fn find_occupying_for_table(
        &self,
        table_id: Uuid,
        date: NaiveDate,
    ) -> DomainResult<Vec<Reservation>> {
        Ok(self.filtered(|r| {
            r.table_id == table_id && r.reservation_date == date && r.status.is_occupying()
        }))
    }

    async fn find_by_restaurant(
        &self,
        restaurant_id: Uuid,
        date: Option<NaiveDate>,
        status: Option<ReservationStatus>,
        page: u64,
        limit: u64,
    ) -> DomainResult<PaginatedResult<Reservation>> {
        let mut items = self.filtered(|r| {
            r.restaurant_id == restaurant_id
                && date.map_or(true, |d| r.reservation_date == d)
                && status.map_or(true, |s| r.status == s)
        });
        items.sort_by_key(|r| (r.reservation_date, r.start_time));
        Ok(paginate(items, page, limit))
    }

    async fn find_by_customer(
        &self,
        customer_id: Uuid,
        status: Option<ReservationStatus>,
        page: u64,
        limit: u64,
    ) -> DomainResult<PaginatedResult<Reservation>> {
        let mut items = self
            .filtered(|r| r.customer_id == customer_id && status.map_or(true, |s| r.status == s));
        items.sort_by_key(|r| (r.reservation_date, r.start_time));
        items.reverse();
        Ok(paginate(items, page, limit))
    }
}

/// All four repositories over concurrent in-process maps.
#[derive(Default)]
pub struct InMemoryRepositoryProvider {
    restaurants: InMemoryRestaurants,
    tables: InMemoryTables,
    opening_hours: InMemoryOpeningHours,
    reservations: InMemoryReservations,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn restaurants(&self) -> &dyn RestaurantRepository {
        &self.restaurants
    }

    fn tables(&self) -> &dyn TableRepository {
        &self.tables
    }

    fn opening_hours(&self) -> &dyn OpeningHoursRepository {
        &self.opening_hours
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn sample_reservation(code: &str) -> Reservation {
        Reservation::create(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            90,
            2,
            None,
        )
        .map(|mut r| {
            r.confirmation_code = code.to_string();
            r
        })
        .unwrap()
    }

    #[tokio::test]
    async fn duplicate_confirmation_code_is_a_conflict() {
        let repo = InMemoryReservations::default();
        repo.save(sample_reservation("AAAA2222")).await.unwrap();
        let err = repo.save(sample_reservation("AAAA2222")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn opening_hours_save_replaces_same_weekday() {
        let repo = InMemoryOpeningHours::default();
        let restaurant_id = Uuid::new_v4();
        let mut entry = OpeningHoursEntry {
            id: Uuid::new_v4(),
            restaurant_id,
            day_of_week: Weekday::Fri,
            open_time: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            close_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            is_closed: false,
        };
        repo.save(entry.clone()).await.unwrap();
        entry.is_closed = true;
        repo.save(entry).await.unwrap();

        let stored = repo
            .find_for_day(restaurant_id, Weekday::Fri)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.is_closed);
    }

    #[tokio::test]
    async fn customer_listing_is_newest_first_and_paginated() {
        let repo = InMemoryReservations::default();
        let customer_id = Uuid::new_v4();
        for (i, day) in [1, 2, 3].into_iter().enumerate() {
            let mut r = sample_reservation(&format!("CODE000{}", i));
            r.customer_id = customer_id;
            r.reservation_date = NaiveDate::from_ymd_opt(2026, 9, day).unwrap();
            repo.save(r).await.unwrap();
        }

        let page = repo
            .find_by_customer(customer_id, None, 1, 2)
            .await
            .unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.items.len(), 2);
        assert_eq!(
            page.items[0].reservation_date,
            NaiveDate::from_ymd_opt(2026, 9, 3).unwrap()
        );
    }
}
