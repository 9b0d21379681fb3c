//! Opening-hours repository interface

use async_trait::async_trait;
use chrono::Weekday;
use uuid::Uuid;

use super::model::OpeningHoursEntry;
use crate::domain::DomainResult;

#[async_trait]
pub trait OpeningHoursRepository: Send + Sync {
    /// The opening-hours entry for one day of the week, if any.
    async fn find_for_day(
        &self,
        restaurant_id: Uuid,
        day: Weekday,
    ) -> DomainResult<Option<OpeningHoursEntry>>;

    /// Insert an entry. Only used by the startup seeder.
    async fn save(&self, entry: OpeningHoursEntry) -> DomainResult<()>;
}
