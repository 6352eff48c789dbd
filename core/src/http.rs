//! HTTP requests and responses as plain data, plus the transport seam.
//!
//! # Design
//! The client builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network. A `Transport` executes the round-trip in
//! between; swapping it out is how tests run every operation without a
//! network dependency.
//!
//! A transport only reports whether the round-trip completed. Status codes
//! are classified by the client, so a 500 is an `HttpResponse`, not a
//! `TransportError`.

use crate::error::TransportError;
use crate::operation::Operation;
use crate::query::Query;

/// A GET request described as plain data.
///
/// Built by `GoodreadsClient::build_*` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub operation: Operation,
    /// Path with parameters substituted, no leading slash (`author/show/18541`).
    pub endpoint: String,
    pub query: Query,
    /// `{root}/{endpoint}?{query}`.
    pub url: String,
}

impl HttpRequest {
    pub fn get(api_root: &str, operation: Operation, endpoint: String, query: Query) -> Self {
        let url = format!("{api_root}/{endpoint}?{}", query.encode());
        Self {
            operation,
            endpoint,
            query,
            url,
        }
    }
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport`, then passed to `GoodreadsClient::parse_*`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// A 200 response with the given body and no headers.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Executes a GET round-trip.
///
/// Implementations must be usable from several threads at once: the client
/// holds a single shared transport.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}
