//! Demo data seeder
//!
//! Populates an empty database with one bookable restaurant so a fresh
//! install can serve availability and take bookings immediately.

use chrono::{NaiveTime, Utc, Weekday};
use tracing::info;
use uuid::Uuid;

use crate::domain::opening_hours::OpeningHoursEntry;
use crate::domain::restaurant::Restaurant;
use crate::domain::table::RestaurantTable;
use crate::domain::{DomainError, DomainResult, RepositoryProvider};

const ALL_DAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Seed a demo restaurant if the database holds none.
///
/// Returns the new restaurant's id, or `None` when the database was
/// already populated and nothing was written.
pub async fn seed_demo_data(repos: &dyn RepositoryProvider) -> DomainResult<Option<Uuid>> {
    if repos.restaurants().count().await? > 0 {
        return Ok(None);
    }

    let now = Utc::now();
    let restaurant_id = Uuid::new_v4();
    repos
        .restaurants()
        .save(Restaurant {
            id: restaurant_id,
            name: "The Copper Kettle".to_string(),
            description: Some("Seasonal bistro, demo data".to_string()),
            default_duration_minutes: 90,
            is_approved: true,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
        .await?;

    let open = NaiveTime::from_hms_opt(11, 30, 0)
        .ok_or_else(|| DomainError::Storage("invalid seed opening time".to_string()))?;
    let close = NaiveTime::from_hms_opt(22, 0, 0)
        .ok_or_else(|| DomainError::Storage("invalid seed closing time".to_string()))?;
    for day in ALL_DAYS {
        repos
            .opening_hours()
            .save(OpeningHoursEntry {
                id: Uuid::new_v4(),
                restaurant_id,
                day_of_week: day,
                open_time: open,
                close_time: close,
                is_closed: false,
            })
            .await?;
    }

    for (number, min, max) in [("T1", 1, 2), ("T2", 2, 4), ("T3", 4, 6)] {
        repos
            .tables()
            .save(RestaurantTable {
                id: Uuid::new_v4(),
                restaurant_id,
                table_number: number.to_string(),
                capacity: max,
                min_capacity: min,
                is_active: true,
                notes: None,
                created_at: now,
            })
            .await?;
    }

    info!(%restaurant_id, "Seeded demo restaurant with 3 tables and daily hours");
    Ok(Some(restaurant_id))
}
