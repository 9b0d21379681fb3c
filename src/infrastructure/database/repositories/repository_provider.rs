//! SeaORM-backed repository provider

use sea_orm::DatabaseConnection;

use super::opening_hours_repository::SeaOrmOpeningHoursRepository;
use super::reservation_repository::SeaOrmReservationRepository;
use super::restaurant_repository::SeaOrmRestaurantRepository;
use super::table_repository::SeaOrmTableRepository;
use crate::domain::opening_hours::OpeningHoursRepository;
use crate::domain::reservation::ReservationRepository;
use crate::domain::restaurant::RestaurantRepository;
use crate::domain::table::TableRepository;
use crate::domain::RepositoryProvider;

/// Bundles the SeaORM repositories behind the domain's provider trait.
/// All repositories share one connection pool.
pub struct SeaOrmRepositoryProvider {
    restaurants: SeaOrmRestaurantRepository,
    tables: SeaOrmTableRepository,
    opening_hours: SeaOrmOpeningHoursRepository,
    reservations: SeaOrmReservationRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            restaurants: SeaOrmRestaurantRepository::new(db.clone()),
            tables: SeaOrmTableRepository::new(db.clone()),
            opening_hours: SeaOrmOpeningHoursRepository::new(db.clone()),
            reservations: SeaOrmReservationRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn restaurants(&self) -> &dyn RestaurantRepository {
        &self.restaurants
    }

    fn tables(&self) -> &dyn TableRepository {
        &self.tables
    }

    fn opening_hours(&self) -> &dyn OpeningHoursRepository {
        &self.opening_hours
    }

    fn reservations(&self) -> &dyn ReservationRepository {
        &self.reservations
    }
}
