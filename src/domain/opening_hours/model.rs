//! Opening-hours domain entity

use chrono::{NaiveTime, Weekday};
use uuid::Uuid;

/// Opening hours for one day of the week.
///
/// Exactly one entry exists per (restaurant, day_of_week); the owning
/// collaborator enforces that uniqueness. Both times are wall-clock values on
/// the same calendar day, with `open_time < close_time` unless `is_closed`.
#[derive(Debug, Clone)]
pub struct OpeningHoursEntry {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub day_of_week: Weekday,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub is_closed: bool,
}
