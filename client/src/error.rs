//! Error types for the RAG client

use crate::state::RequestKind;
use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Another request has not completed yet
    #[error("An {0} request is already in progress")]
    Busy(RequestKind),

    /// The endpoint answered with a non-success status
    #[error("Server returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}
