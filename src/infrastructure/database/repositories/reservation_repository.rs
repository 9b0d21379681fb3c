//! SeaORM implementation of ReservationRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

use super::db_err;
use crate::domain::reservation::{Reservation, ReservationRepository, ReservationStatus};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::reservation;
use crate::shared::types::PaginatedResult;

/// Status values that block a table slot. Kept in sync with
/// `ReservationStatus::is_occupying`.
const OCCUPYING_STATUSES: [&str; 2] = ["Pending", "Confirmed"];

pub struct SeaOrmReservationRepository {
    db: DatabaseConnection,
}

impl SeaOrmReservationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: reservation::Model) -> DomainResult<Reservation> {
    let status = ReservationStatus::parse(&m.status)
        .ok_or_else(|| DomainError::Storage(format!("Corrupt reservation status: {}", m.status)))?;
    Ok(Reservation {
        id: m.id,
        restaurant_id: m.restaurant_id,
        table_id: m.table_id,
        customer_id: m.customer_id,
        reservation_date: m.reservation_date,
        start_time: m.start_time,
        end_time: m.end_time,
        duration_minutes: m.duration_minutes,
        party_size: m.party_size,
        status,
        special_requests: m.special_requests,
        confirmation_code: m.confirmation_code,
        cancelled_at: m.cancelled_at,
        cancellation_reason: m.cancellation_reason,
        created_at: m.created_at,
    })
}

fn domain_to_active(r: Reservation) -> reservation::ActiveModel {
    reservation::ActiveModel {
        id: Set(r.id),
        restaurant_id: Set(r.restaurant_id),
        table_id: Set(r.table_id),
        customer_id: Set(r.customer_id),
        reservation_date: Set(r.reservation_date),
        start_time: Set(r.start_time),
        end_time: Set(r.end_time),
        duration_minutes: Set(r.duration_minutes),
        party_size: Set(r.party_size),
        status: Set(r.status.as_str().to_string()),
        special_requests: Set(r.special_requests),
        confirmation_code: Set(r.confirmation_code),
        cancelled_at: Set(r.cancelled_at),
        cancellation_reason: Set(r.cancellation_reason),
        created_at: Set(r.created_at),
    }
}

fn collect_page(
    models: Vec<reservation::Model>,
    total: u64,
    page: u64,
    limit: u64,
) -> DomainResult<PaginatedResult<Reservation>> {
    let items = models
        .into_iter()
        .map(model_to_domain)
        .collect::<DomainResult<Vec<_>>>()?;
    Ok(PaginatedResult::new(items, total, page, limit))
}

#[async_trait]
impl ReservationRepository for SeaOrmReservationRepository {
    async fn save(&self, r: Reservation) -> DomainResult<()> {
        domain_to_active(r).insert(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Reservation>> {
        let model = reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn find_by_confirmation_code(&self, code: &str) -> DomainResult<Option<Reservation>> {
        let model = reservation::Entity::find()
            .filter(reservation::Column::ConfirmationCode.eq(code))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn update(&self, r: Reservation) -> DomainResult<()> {
        domain_to_active(r).update(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_occupying_for_date(
        &self,
        restaurant_id: Uuid,
        date: NaiveDate,
    ) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .filter(reservation::Column::RestaurantId.eq(restaurant_id))
            .filter(reservation::Column::ReservationDate.eq(date))
            .filter(reservation::Column::Status.is_in(OCCUPYING_STATUSES))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn find_occupying_for_table(
        &self,
        table_id: Uuid,
        date: NaiveDate,
    ) -> DomainResult<Vec<Reservation>> {
        let models = reservation::Entity::find()
            .filter(reservation::Column::TableId.eq(table_id))
            .filter(reservation::Column::ReservationDate.eq(date))
            .filter(reservation::Column::Status.is_in(OCCUPYING_STATUSES))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        models.into_iter().map(model_to_domain).collect()
    }

    async fn find_by_restaurant(
        &self,
        restaurant_id: Uuid,
        date: Option<NaiveDate>,
        status: Option<ReservationStatus>,
        page: u64,
        limit: u64,
    ) -> DomainResult<PaginatedResult<Reservation>> {
        let mut query = reservation::Entity::find()
            .filter(reservation::Column::RestaurantId.eq(restaurant_id));
        if let Some(date) = date {
            query = query.filter(reservation::Column::ReservationDate.eq(date));
        }
        if let Some(status) = status {
            query = query.filter(reservation::Column::Status.eq(status.as_str()));
        }
        let query = query
            .order_by_asc(reservation::Column::ReservationDate)
            .order_by_asc(reservation::Column::StartTime);

        let paginator = query.paginate(&self.db, limit);
        let total = paginator.num_items().await.map_err(db_err)?;
        let models = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map_err(db_err)?;
        collect_page(models, total, page, limit)
    }

    async fn find_by_customer(
        &self,
        customer_id: Uuid,
        status: Option<ReservationStatus>,
        page: u64,
        limit: u64,
    ) -> DomainResult<PaginatedResult<Reservation>> {
        let mut query =
            reservation::Entity::find().filter(reservation::Column::CustomerId.eq(customer_id));
        if let Some(status) = status {
            query = query.filter(reservation::Column::Status.eq(status.as_str()));
        }
        let query = query
            .order_by_desc(reservation::Column::ReservationDate)
            .order_by_desc(reservation::Column::StartTime);

        let paginator = query.paginate(&self.db, limit);
        let total = paginator.num_items().await.map_err(db_err)?;
        let models = paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map_err(db_err)?;
        collect_page(models, total, page, limit)
    }
}
