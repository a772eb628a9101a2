use thiserror::Error;

/// Errors from reading a request. Rendering itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid email request: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
