pub mod dto;
pub mod handlers;

pub use dto::{ProfileQuery, SignupRequest, UserProfileResponse, UserResponse};
pub use handlers::{get_profile, signup, UserHandlerState};
