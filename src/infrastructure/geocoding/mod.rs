//! Reverse geocoding clients

mod here;

pub use here::HereGeocoder;
