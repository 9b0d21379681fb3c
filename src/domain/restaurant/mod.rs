//! Restaurant aggregate (read-only to the booking core).

pub mod model;
pub mod repository;

pub use model::Restaurant;
pub use repository::RestaurantRepository;
