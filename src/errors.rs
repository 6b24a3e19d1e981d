use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error loading .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("PORT must be a valid port number (1-65535), got {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("query failed: {0}")]
    Query(#[source] mongodb::error::Error),

    #[error("query timed out after {0:?}")]
    QueryTimeout(std::time::Duration),

    #[error("failed to read results: {0}")]
    Materialize(#[source] mongodb::error::Error),

    #[error("reading results timed out after {0:?}")]
    MaterializeTimeout(std::time::Duration),
}

impl StoreError {
    /// Whether the failure happened while issuing the query (as opposed to
    /// while pulling documents off the cursor).
    pub fn is_query_failure(&self) -> bool {
        matches!(
            self,
            StoreError::Query(_) | StoreError::QueryTimeout(_)
        )
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to connect to MongoDB: {0}")]
    Connect(#[source] mongodb::error::Error),

    #[error("Could not ping MongoDB: {0}")]
    Ping(#[source] mongodb::error::Error),

    #[error("Could not ping MongoDB: timed out after {0:?}")]
    PingTimeout(std::time::Duration),
}
