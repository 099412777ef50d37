use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid property key: `{0}`")]
    InvalidKey(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("chart `{0}` is not initialized")]
    ChartNotInitialized(String),

    #[error("invalid plugin id: {0}")]
    InvalidPluginId(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
