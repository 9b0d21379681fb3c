//! Opening-hours aggregate (read-only to the booking core).

pub mod model;
pub mod repository;

pub use model::OpeningHoursEntry;
pub use repository::OpeningHoursRepository;
