//! Reservation aggregate
//!
//! Contains the Reservation entity, its status state machine,
//! confirmation-code generation and the repository interface.

pub mod model;
pub mod repository;

pub use model::{generate_confirmation_code, Reservation, ReservationStatus};
pub use repository::ReservationRepository;
