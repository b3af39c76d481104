pub mod errors;
pub mod shutdown;

pub use errors::{AuthError, DomainError, DomainResult, GeocodingError};
pub use shutdown::{ShutdownCoordinator, ShutdownSignal};
