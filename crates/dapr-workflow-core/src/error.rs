//! Error types for workflow lifecycle operations.
//!
//! `TransportError` is what a `RequestExecutor` reports. `WorkflowError` is the
//! single channel every public client operation fails through; transport failures
//! are carried inside it unchanged so callers can still inspect them.

/// Failures raised by the request execution capability.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Sidecar returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("{0}")]
    Other(String),
}

#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    /// A required identifier or token was empty. Raised before any request is sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The sidecar answered with something other than a structured record.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

pub type Result<T> = std::result::Result<T, WorkflowError>;
