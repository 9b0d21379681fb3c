//! Create reservations table
//!
//! Indexed by (table, date) for the booking conflict scan, by
//! (restaurant, date) for availability queries, and uniquely by
//! confirmation code for customer lookup.

use sea_orm_migration::prelude::*;

use super::m20260301_000001_create_restaurants::Restaurants;
use super::m20260301_000002_create_restaurant_tables::RestaurantTables;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Reservations::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Reservations::RestaurantId).uuid().not_null())
                    .col(ColumnDef::new(Reservations::TableId).uuid().not_null())
                    .col(ColumnDef::new(Reservations::CustomerId).uuid().not_null())
                    .col(
                        ColumnDef::new(Reservations::ReservationDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reservations::StartTime).time().not_null())
                    .col(ColumnDef::new(Reservations::EndTime).time().not_null())
                    .col(
                        ColumnDef::new(Reservations::DurationMinutes)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reservations::PartySize).integer().not_null())
                    .col(
                        ColumnDef::new(Reservations::Status)
                            .string()
                            .not_null()
                            .default("Confirmed"),
                    )
                    .col(ColumnDef::new(Reservations::SpecialRequests).string())
                    .col(
                        ColumnDef::new(Reservations::ConfirmationCode)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Reservations::CancelledAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Reservations::CancellationReason).string())
                    .col(
                        ColumnDef::new(Reservations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_restaurant")
                            .from(Reservations::Table, Reservations::RestaurantId)
                            .to(Restaurants::Table, Restaurants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservations_table")
                            .from(Reservations::Table, Reservations::TableId)
                            .to(RestaurantTables::Table, RestaurantTables::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_table_date")
                    .table(Reservations::Table)
                    .col(Reservations::TableId)
                    .col(Reservations::ReservationDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_restaurant_date")
                    .table(Reservations::Table)
                    .col(Reservations::RestaurantId)
                    .col(Reservations::ReservationDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reservations_confirmation_code")
                    .table(Reservations::Table)
                    .col(Reservations::ConfirmationCode)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Reservations {
    Table,
    Id,
    RestaurantId,
    TableId,
    CustomerId,
    ReservationDate,
    StartTime,
    EndTime,
    DurationMinutes,
    PartySize,
    Status,
    SpecialRequests,
    ConfirmationCode,
    CancelledAt,
    CancellationReason,
    CreatedAt,
}
