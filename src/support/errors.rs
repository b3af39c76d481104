use thiserror::Error;

/// Failures talking to the reverse geocoding provider
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeocodingError {
    #[error("Geocoding service error: {status}")]
    Upstream { status: u16 },

    #[error("Error reverse geocoding coordinates: {0}")]
    Transport(String),

    #[error("Invalid geocoding response: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} not found")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Email already exists")]
    EmailTaken,

    #[error("User location must be within Egypt.")]
    LocationOutsideEgypt,

    #[error("City not supported")]
    UnsupportedCity(String),

    #[error("Unable to determine user location.")]
    LocationUnresolved,

    #[error(transparent)]
    Geocoding(#[from] GeocodingError),

    #[error("Token error: {0}")]
    Token(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Storage(e.to_string())
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Authentication failures raised by the auth guard
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("No token provided")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,
}
