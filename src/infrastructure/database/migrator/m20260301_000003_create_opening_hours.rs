//! Create opening_hours table
//!
//! One row per (restaurant, day_of_week), enforced by a unique index.
//! day_of_week is 0 = Sunday through 6 = Saturday.

use sea_orm_migration::prelude::*;

use super::m20260301_000001_create_restaurants::Restaurants;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OpeningHours::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OpeningHours::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OpeningHours::RestaurantId).uuid().not_null())
                    .col(
                        ColumnDef::new(OpeningHours::DayOfWeek)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OpeningHours::OpenTime).time().not_null())
                    .col(ColumnDef::new(OpeningHours::CloseTime).time().not_null())
                    .col(
                        ColumnDef::new(OpeningHours::IsClosed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_opening_hours_restaurant")
                            .from(OpeningHours::Table, OpeningHours::RestaurantId)
                            .to(Restaurants::Table, Restaurants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_opening_hours_restaurant_day")
                    .table(OpeningHours::Table)
                    .col(OpeningHours::RestaurantId)
                    .col(OpeningHours::DayOfWeek)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OpeningHours::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum OpeningHours {
    Table,
    Id,
    RestaurantId,
    DayOfWeek,
    OpenTime,
    CloseTime,
    IsClosed,
}
