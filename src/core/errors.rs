use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("connection error: {0}")]
    Connection(#[from] ConnectionError),

    #[error("query error: {0}")]
    Query(#[from] QueryError),

    #[error("report error: {0}")]
    Report(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FetchError {
    pub fn is_connection(&self) -> bool {
        matches!(self, FetchError::Connection(_))
    }

    pub fn is_query(&self) -> bool {
        matches!(self, FetchError::Query(_))
    }
}

/// The service could not be reached, rejected the credentials, or timed out.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ConnectionError(pub String);

/// The server or the transport failed while the collection was being read.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct QueryError(pub String);
