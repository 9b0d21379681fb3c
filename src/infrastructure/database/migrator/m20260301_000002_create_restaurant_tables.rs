//! Create restaurant_tables table

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
                    .table(RestaurantTables::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RestaurantTables::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RestaurantTables::RestaurantId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RestaurantTables::TableNumber)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RestaurantTables::Capacity)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RestaurantTables::MinCapacity)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(RestaurantTables::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(RestaurantTables::Notes).string())
                    .col(
                        ColumnDef::new(RestaurantTables::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_tables_restaurant")
                            .from(RestaurantTables::Table, RestaurantTables::RestaurantId)
                            .to(Restaurants::Table, Restaurants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_restaurant_tables_restaurant")
                    .table(RestaurantTables::Table)
                    .col(RestaurantTables::RestaurantId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RestaurantTables::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum RestaurantTables {
    Table,
    Id,
    RestaurantId,
    TableNumber,
    Capacity,
    MinCapacity,
    IsActive,
    Notes,
    CreatedAt,
}
