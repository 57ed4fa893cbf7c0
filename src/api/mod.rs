mod cache;
pub mod client;
pub mod error;

pub use cache::SeriesCache;
pub use client::{ApiClient, ProfileResponse};
pub use error::{ApiError, Result};
