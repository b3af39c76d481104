//! Domain layer: entities, value types and the traits infrastructure implements.

pub mod location;
pub mod user;

pub use location::{validate_location, LocationInfo, ReverseGeocoder, EGYPTIAN_CITIES};
pub use user::{CreateUserDto, TokenIssuer, User, UserProfile, UserRepositoryInterface};

// Re-export errors from support for convenience
pub use crate::support::errors::{DomainError, DomainResult};
