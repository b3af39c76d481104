//! Shared HTTP types: error envelope and extractors

mod error;
mod query;
mod validated_json;

pub use error::{ApiError, ErrorBody};
pub use query::ApiQuery;
pub use validated_json::{ValidatedJson, ValidatedJsonRejection};
