// Error type shared by the reporting client library
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportingError {
    #[error("Unknown metric: {0}")]
    UnknownMetric(String),

    #[error("Invalid server URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid API key: {0}")]
    InvalidApiKey(#[from] tonic::metadata::errors::InvalidMetadataValue),

    #[error("RPC failed: {0}")]
    Rpc(#[from] tonic::Status),
}

pub type Result<T> = std::result::Result<T, ReportingError>;
