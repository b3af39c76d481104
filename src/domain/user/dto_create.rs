/// Validated signup data, with the city already resolved by geocoding.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: Option<String>,
}
