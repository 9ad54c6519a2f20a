//! Crate-wide error type.

/// Errors produced by table binding and record controller operations.
///
/// Every controller call settles with `Ok` or one of these — a failed load
/// is an error, never a request left pending.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// No table configuration is registered under the given key.
    #[error("no table configuration for key: {0}")]
    UnknownTable(String),

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request to the backend failed at the transport level.
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success HTTP status.
    #[error("backend error: status {status}")]
    Backend { status: u16, body: String },

    /// The backend response body could not be deserialized.
    #[error("response decode failed: {0}")]
    Decode(String),
}
