//! Application layer: use cases composed from domain aggregates.
//!
//! - `slots`: pure slot-boundary and interval-overlap arithmetic
//! - `locks`: per-(table, date) mutual exclusion for the booking commit
//! - `services`: availability queries and the reservation use cases

pub mod locks;
pub mod services;
pub mod slots;

pub use locks::TableDateLocks;
pub use services::availability::{AvailabilityService, AvailableSlot};
pub use services::reservation::{CancelActor, CreateReservation, ReservationService};
