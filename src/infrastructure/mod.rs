//! Infrastructure layer - external concerns

pub mod crypto;
pub mod database;
pub mod geocoding;

pub use database::{init_database, DatabaseConfig};
pub use geocoding::HereGeocoder;
