//! HERE Geocoding & Search API client (`/revgeocode`).

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::GeocodingConfig;
use crate::domain::{LocationInfo, ReverseGeocoder};
use crate::support::errors::GeocodingError;

#[derive(Debug, Deserialize)]
struct RevGeocodeResponse {
    #[serde(default)]
    items: Vec<RevGeocodeItem>,
}

#[derive(Debug, Deserialize)]
struct RevGeocodeItem {
    #[serde(default)]
    address: HereAddress,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HereAddress {
    label: Option<String>,
    city: Option<String>,
    country_name: Option<String>,
    country_code: Option<String>,
}

impl From<RevGeocodeResponse> for LocationInfo {
    fn from(response: RevGeocodeResponse) -> Self {
        let Some(item) = response.items.into_iter().next() else {
            return LocationInfo::default();
        };
        LocationInfo {
            address: item.address.label,
            city: item.address.city,
            country: item.address.country_name,
            country_code: item.address.country_code,
        }
    }
}

/// Reverse geocoder backed by the HERE REST API
#[derive(Clone)]
pub struct HereGeocoder {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HereGeocoder {
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodingError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeocodingError::Transport(e.to_string()))?;

        if config.api_key.is_empty() {
            warn!("Geocoding API key is empty; signup requests will be rejected upstream");
        }

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl ReverseGeocoder for HereGeocoder {
    async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<LocationInfo, GeocodingError> {
        let url = format!("{}/revgeocode", self.base_url);
        let at = format!("{},{}", latitude, longitude);

        debug!(latitude, longitude, "Reverse geocoding coordinates");

        let response = self
            .client
            .get(&url)
            .query(&[("at", at.as_str()), ("lang", "en-US"), ("apiKey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| GeocodingError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Geocoding service returned an error");
            return Err(GeocodingError::Upstream {
                status: status.as_u16(),
            });
        }

        let body: RevGeocodeResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::Decode(e.without_url().to_string()))?;

        Ok(body.into())
    }
}
