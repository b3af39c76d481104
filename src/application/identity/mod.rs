//! Identity module: signup and profile use cases
//!
//! Contains the `UserService` which orchestrates the signup workflow
//! (email check, geocoding, location rules, persistence, token) and
//! profile lookups.

pub mod service;

pub use service::{SignupInput, SignupResult, UserService};
