//! # MindWell API
//!
//! HTTP backend for the MindWell platform: user signup with reverse-geocoded
//! location checks (Egypt only), profile lookup, JWT cookie authentication
//! and a health check.
//!
//! ## Architecture
//!
//! - **domain**: User and location types, repository and geocoder traits
//! - **application**: Signup / profile use cases (`UserService`)
//! - **infrastructure**: SeaORM persistence, HERE geocoding client, JWT
//! - **interfaces**: Axum router, middleware and Swagger documentation
//! - **support**: Errors and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod support;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::{create_api_router, ApiState};
