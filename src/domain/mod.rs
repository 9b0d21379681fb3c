//! Domain layer: aggregates, value types and repository traits.
//!
//! Each aggregate lives in its own module with a `model` (entity + behavior)
//! and a `repository` (persistence trait). Restaurant, table and opening-hours
//! records are read-only inputs to the booking core; the reservation aggregate
//! is the only one this service mutates.

pub mod error;
pub mod opening_hours;
pub mod repositories;
pub mod reservation;
pub mod restaurant;
pub mod table;

// Re-export commonly used types
pub use error::DomainError;
pub use opening_hours::{OpeningHoursEntry, OpeningHoursRepository};
pub use repositories::{DomainResult, RepositoryProvider};
pub use reservation::{Reservation, ReservationRepository, ReservationStatus};
pub use restaurant::{Restaurant, RestaurantRepository};
pub use table::{RestaurantTable, TableRepository};
