use async_trait::async_trait;

use super::LocationInfo;
use crate::support::errors::GeocodingError;

/// Resolves coordinates into an address.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<LocationInfo, GeocodingError>;
}
