use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("backend API error: {0}")]
    Api(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;
