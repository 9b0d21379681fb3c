//! Restaurant table aggregate (read-only to the booking core).

pub mod model;
pub mod repository;

pub use model::RestaurantTable;
pub use repository::TableRepository;
