//! SeaORM implementation of RestaurantRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use uuid::Uuid;

use super::db_err;
use crate::domain::restaurant::{Restaurant, RestaurantRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::restaurant;

pub struct SeaOrmRestaurantRepository {
    db: DatabaseConnection,
}

impl SeaOrmRestaurantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: restaurant::Model) -> Restaurant {
    Restaurant {
        id: m.id,
        name: m.name,
        description: m.description,
        default_duration_minutes: m.default_duration_minutes,
        is_approved: m.is_approved,
        is_active: m.is_active,
        created_at: m.created_at,
        updated_at: m.updated_at,
    }
}

#[async_trait]
impl RestaurantRepository for SeaOrmRestaurantRepository {
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Restaurant>> {
        let model = restaurant::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn count(&self) -> DomainResult<u64> {
        restaurant::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)
    }

    async fn save(&self, r: Restaurant) -> DomainResult<()> {
        let model = restaurant::ActiveModel {
            id: Set(r.id),
            name: Set(r.name),
            description: Set(r.description),
            default_duration_minutes: Set(r.default_duration_minutes),
            is_approved: Set(r.is_approved),
            is_active: Set(r.is_active),
            created_at: Set(r.created_at),
            updated_at: Set(r.updated_at),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
