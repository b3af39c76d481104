//! Location checks for signup
//!
//! Coordinates are resolved by a [`ReverseGeocoder`]; the result must lie in
//! Egypt and in one of the supported cities.

mod cities;
mod geocoder;
mod model;

pub use cities::{canonical_city, EGYPTIAN_CITIES};
pub use geocoder::ReverseGeocoder;
pub use model::LocationInfo;

use crate::domain::{DomainError, DomainResult};

const EGYPT_NAME: &str = "Egypt";
const EGYPT_ISO3: &str = "EGY";

/// Check a resolved location and return the canonical city name.
pub fn validate_location(location: &LocationInfo) -> DomainResult<String> {
    if !location.is_in_egypt() {
        return Err(DomainError::LocationOutsideEgypt);
    }

    let city = location
        .city
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or(DomainError::LocationUnresolved)?;

    canonical_city(city)
        .map(String::from)
        .ok_or_else(|| DomainError::UnsupportedCity(city.to_string()))
}

impl LocationInfo {
    pub fn is_in_egypt(&self) -> bool {
        let by_name = self
            .country
            .as_deref()
            .is_some_and(|c| c.trim().eq_ignore_ascii_case(EGYPT_NAME));
        let by_code = self
            .country_code
            .as_deref()
            .is_some_and(|c| c.trim().eq_ignore_ascii_case(EGYPT_ISO3));
        by_name || by_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(country: Option<&str>, code: Option<&str>, city: Option<&str>) -> LocationInfo {
        LocationInfo {
            address: None,
            city: city.map(String::from),
            country: country.map(String::from),
            country_code: code.map(String::from),
        }
    }

    #[test]
    fn accepts_supported_egyptian_city() {
        let loc = location(Some("Egypt"), Some("EGY"), Some("El Maadi"));
        assert_eq!(validate_location(&loc).unwrap(), "El Maadi");
    }

    #[test]
    fn country_code_alone_is_enough() {
        let loc = location(None, Some("EGY"), Some("Cairo"));
        assert_eq!(validate_location(&loc).unwrap(), "Cairo");
    }

    #[test]
    fn city_match_is_case_insensitive_and_canonical() {
        let loc = location(Some("Egypt"), None, Some("  alexandria "));
        assert_eq!(validate_location(&loc).unwrap(), "Alexandria");
    }

    #[test]
    fn rejects_foreign_country() {
        let loc = location(Some("USA"), Some("USA"), Some("New York"));
        assert!(matches!(
            validate_location(&loc),
            Err(DomainError::LocationOutsideEgypt)
        ));
    }

    #[test]
    fn rejects_missing_country() {
        let loc = location(None, None, Some("Cairo"));
        assert!(matches!(
            validate_location(&loc),
            Err(DomainError::LocationOutsideEgypt)
        ));
    }

    #[test]
    fn rejects_unsupported_city() {
        let loc = location(Some("Egypt"), Some("EGY"), Some("Siwa Oasis Outpost"));
        match validate_location(&loc) {
            Err(DomainError::UnsupportedCity(city)) => assert_eq!(city, "Siwa Oasis Outpost"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn egypt_without_city_is_unresolved() {
        let loc = location(Some("Egypt"), None, Some("  "));
        assert!(matches!(
            validate_location(&loc),
            Err(DomainError::LocationUnresolved)
        ));
    }
}
