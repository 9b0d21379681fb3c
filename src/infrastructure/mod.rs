//! Infrastructure layer: persistence (SeaORM over SQLite) and the
//! in-memory repository provider used for tests and local development.

pub mod database;
pub mod storage;

pub use database::{init_database, DatabaseConfig};
