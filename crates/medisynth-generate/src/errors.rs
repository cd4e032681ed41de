use thiserror::Error;

/// Errors emitted by the synthesis engine.
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("empty identifier pool: {0}")]
    EmptyPool(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
