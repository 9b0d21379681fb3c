//! SeaORM repository implementations

pub mod opening_hours_repository;
pub mod repository_provider;
pub mod reservation_repository;
pub mod restaurant_repository;
pub mod table_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use chrono::Weekday;
use sea_orm::SqlErr;

use crate::domain::DomainError;

/// Map a database error into the domain vocabulary. Unique-constraint
/// violations become Conflicts (the reservation insert relies on this for
/// confirmation-code collisions); everything else is a transient storage
/// failure eligible for retry.
pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            DomainError::Conflict(format!("Unique constraint violated: {}", msg))
        }
        _ => DomainError::Storage(format!("Database error: {}", e)),
    }
}

/// 0 = Sunday .. 6 = Saturday, as the original store encoded day-of-week.
pub(crate) fn weekday_to_db(day: Weekday) -> i32 {
    day.num_days_from_sunday() as i32
}

pub(crate) fn weekday_from_db(value: i32) -> Option<Weekday> {
    match value {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}
