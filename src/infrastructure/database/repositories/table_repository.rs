//! SeaORM implementation of TableRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::db_err;
use crate::domain::table::{RestaurantTable, TableRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::restaurant_table;

pub struct SeaOrmTableRepository {
    db: DatabaseConnection,
}

impl SeaOrmTableRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: restaurant_table::Model) -> RestaurantTable {
    RestaurantTable {
        id: m.id,
        restaurant_id: m.restaurant_id,
        table_number: m.table_number,
        capacity: m.capacity,
        min_capacity: m.min_capacity,
        is_active: m.is_active,
        notes: m.notes,
        created_at: m.created_at,
    }
}

#[async_trait]
impl TableRepository for SeaOrmTableRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<RestaurantTable>> {
        let model = restaurant_table::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_bookable(
        &self,
        restaurant_id: Uuid,
        party_size: i32,
    ) -> DomainResult<Vec<RestaurantTable>> {
        let models = restaurant_table::Entity::find()
            .filter(restaurant_table::Column::RestaurantId.eq(restaurant_id))
            .filter(restaurant_table::Column::IsActive.eq(true))
            .filter(restaurant_table::Column::Capacity.gte(party_size))
            .order_by_asc(restaurant_table::Column::Capacity)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn save(&self, t: RestaurantTable) -> DomainResult<()> {
        let model = restaurant_table::ActiveModel {
            id: Set(t.id),
            restaurant_id: Set(t.restaurant_id),
            table_number: Set(t.table_number),
            capacity: Set(t.capacity),
            min_capacity: Set(t.min_capacity),
            is_active: Set(t.is_active),
            notes: Set(t.notes),
            created_at: Set(t.created_at),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
