//! Tablebook — restaurant table reservation service.
//!
//! Computes offerable (slot, table) availability from opening hours, table
//! inventory and existing bookings, and commits bookings under a
//! per-(table, date) exclusion so no table is ever double-booked.
//!
//! Layers:
//! - `domain`: aggregates, status state machine, repository traits
//! - `application`: availability engine, booking commit protocol, lifecycle
//! - `infrastructure`: SeaORM over SQLite, migrations, in-memory provider
//! - `interfaces`: REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig};
pub use interfaces::http::create_api_router;
