//! Restaurant repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Restaurant;
use crate::domain::DomainResult;

#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Find restaurant by ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Restaurant>>;

    /// Number of restaurant rows. Used by the startup seeder.
    async fn count(&self) -> DomainResult<u64>;

    /// Insert a restaurant row. Only used by the startup seeder;
    /// restaurant CRUD itself belongs to the surrounding application.
    async fn save(&self, restaurant: Restaurant) -> DomainResult<()>;
}
