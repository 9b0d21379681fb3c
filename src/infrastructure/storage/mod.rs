//! In-memory repository provider
//!
//! Backs the service-level tests and local experimentation without a
//! database. Behaves like the SeaORM provider where it matters:
//! confirmation-code uniqueness is enforced on insert and surfaces as
//! a Conflict, and opening-hours saves upsert per weekday.

mod memory;

pub use memory::InMemoryRepositoryProvider;
