//! HTTP REST API interfaces
//!
//! - `common`: response envelope, error mapping, boundary parsing
//! - `modules`: per-resource DTOs and handlers
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::create_api_router;
