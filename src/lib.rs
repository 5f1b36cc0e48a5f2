//! # User Service
//!
//! HTTP service exposing create, list and get-by-id over a single `users`
//! table.
//!
//! ## Architecture
//!
//! - **domain**: the `User` record, input DTOs and the repository port
//! - **application**: `UserService`, the use cases
//! - **infrastructure**: SeaORM entity, schema migration and repository
//! - **interfaces**: axum REST API with Swagger documentation
//! - **support**: error types and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod support;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmUserRepository};

// Re-export API router
pub use interfaces::http::create_api_router;
