pub mod availability;
pub mod reservation;

pub use availability::{AvailabilityService, AvailableSlot};
pub use reservation::{CancelActor, CreateReservation, ReservationService};
