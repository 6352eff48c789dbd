//! Error types for the Goodreads API client.
//!
//! # Design
//! Every call ends in exactly one of three failures: the request never
//! completed (`Transport`), the server answered outside 2xx
//! (`UnexpectedStatus`), or the body did not decode into the expected
//! envelope (`Decode`). Nothing is retried or recovered here; callers decide.

use std::error::Error as StdError;

use thiserror::Error;

use crate::operation::Operation;

/// The HTTP round-trip could not be completed (DNS, connect, timeout, I/O).
///
/// Carries the endpoint path rather than the full URL so the API key never
/// ends up in error messages or logs.
#[derive(Debug, Error)]
#[error("request to `{endpoint}` failed: {source}")]
pub struct TransportError {
    endpoint: String,
    #[source]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

impl TransportError {
    pub fn new(
        endpoint: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            source: source.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// A 2xx body that is not well-formed for its declared format, or that is
/// missing the nesting the operation expects.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::de::DeError),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors returned by `GoodreadsClient` operations and `parse_*` methods.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server returned a status outside [200, 299]. The body is kept for
    /// diagnostics and never decoded.
    #[error("unexpected response code: {status}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("failed to decode {operation} response: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: DecodeError,
    },
}

impl ApiError {
    /// The HTTP status code, for `UnexpectedStatus` only.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
