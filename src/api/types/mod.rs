//! API request/response types

pub mod error;
pub mod experts;

pub use error::{ApiError, ApiErrorResponse};
pub use experts::{SearchExpertsRequest, SearchExpertsResponse};
