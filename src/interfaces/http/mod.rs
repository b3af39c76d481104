//! HTTP REST API
//!
//! - `middleware`: auth guard (bearer header or `token` cookie) and cache headers
//! - `modules`: request handlers and DTOs per resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod middleware;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc, ApiState};
