//! Blocking client for the public Goodreads REST API.
//!
//! # Overview
//! Each API method (author, user, shelves, reviews, review counts, search,
//! series) is one typed call. A call builds a GET request with a canonical
//! query string, sends it through a `Transport`, and decodes the XML or JSON
//! body into domain records.
//!
//! ```no_run
//! use goodreads_core::{GoodreadsClient, SearchField};
//!
//! let client = GoodreadsClient::new("my-developer-key");
//! for work in client.search_books("Ender's Game", 0, SearchField::Title)? {
//!     println!("{} ({})", work.best_book.title, work.original_publication_year);
//! }
//! # Ok::<(), goodreads_core::ApiError>(())
//! ```
//!
//! # Design
//! - `GoodreadsClient` holds only configuration and a shared transport.
//! - Every operation is split into `build_*` (request as data) and `parse_*`
//!   (response as data); the plain method runs both around the transport.
//! - The default transport is `ureq` (feature `ureq`); tests substitute their
//!   own `Transport`.
//! - Failures are `Transport`, `UnexpectedStatus` or `Decode`. Nothing is
//!   retried.

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod http;
pub mod operation;
pub mod options;
pub mod query;
#[cfg(feature = "ureq")]
pub mod transport;
pub mod types;

pub use client::GoodreadsClient;
pub use config::{ClientConfig, DEFAULT_API_ROOT};
pub use decode::Format;
pub use error::{ApiError, DecodeError, TransportError};
pub use http::{HttpRequest, HttpResponse, Transport};
pub use operation::Operation;
pub use options::{ReviewListOptions, SearchField};
pub use query::Query;
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use types::{
    Author, Book, Review, ReviewCounts, Series, SeriesWork, User, UserShelf, Work, WorkAuthor,
    WorkBook,
};
