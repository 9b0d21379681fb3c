//! Table repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::RestaurantTable;
use crate::domain::DomainResult;

#[async_trait]
pub trait TableRepository: Send + Sync {
    /// Find table by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<RestaurantTable>>;

    /// All active tables of a restaurant that can seat at least `party_size`,
    /// sorted ascending by capacity. Best-fit assignment relies on the
    /// smallest adequate table coming first.
    async fn find_bookable(
        &self,
        restaurant_id: Uuid,
        party_size: i32,
    ) -> DomainResult<Vec<RestaurantTable>>;

    /// Insert a table row. Only used by the startup seeder.
    async fn save(&self, table: RestaurantTable) -> DomainResult<()>;
}
