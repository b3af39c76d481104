use serde::{Deserialize, Serialize};

/// Normalised reverse-geocoding result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationInfo {
    /// Human readable address label
    pub address: Option<String>,
    pub city: Option<String>,
    /// Country name, e.g. "Egypt"
    pub country: Option<String>,
    /// ISO 3166-1 alpha-3 code, e.g. "EGY"
    pub country_code: Option<String>,
}
