//! SeaORM implementation of OpeningHoursRepository

use async_trait::async_trait;
use chrono::Weekday;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::{db_err, weekday_from_db, weekday_to_db};
use crate::domain::opening_hours::{OpeningHoursEntry, OpeningHoursRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::opening_hours;

pub struct SeaOrmOpeningHoursRepository {
    db: DatabaseConnection,
}

impl SeaOrmOpeningHoursRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: opening_hours::Model) -> DomainResult<OpeningHoursEntry> {
    let day_of_week = weekday_from_db(m.day_of_week).ok_or_else(|| {
        DomainError::Storage(format!("Corrupt day_of_week value: {}", m.day_of_week))
    })?;
    Ok(OpeningHoursEntry {
        id: m.id,
        restaurant_id: m.restaurant_id,
        day_of_week,
        open_time: m.open_time,
        close_time: m.close_time,
        is_closed: m.is_closed,
    })
}

#[async_trait]
impl OpeningHoursRepository for SeaOrmOpeningHoursRepository {
    async fn find_for_day(
        &self,
        restaurant_id: Uuid,
        day: Weekday,
    ) -> DomainResult<Option<OpeningHoursEntry>> {
        let model = opening_hours::Entity::find()
            .filter(opening_hours::Column::RestaurantId.eq(restaurant_id))
            .filter(opening_hours::Column::DayOfWeek.eq(weekday_to_db(day)))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn save(&self, e: OpeningHoursEntry) -> DomainResult<()> {
        let model = opening_hours::ActiveModel {
            id: Set(e.id),
            restaurant_id: Set(e.restaurant_id),
            day_of_week: Set(weekday_to_db(e.day_of_week)),
            open_time: Set(e.open_time),
            close_time: Set(e.close_time),
            is_closed: Set(e.is_closed),
        };
        model.insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }
}
