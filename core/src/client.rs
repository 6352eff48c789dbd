//! Request builder, transport dispatch and response parser for the Goodreads API.
//!
//! # Design
//! `GoodreadsClient` holds only static configuration and a shared transport;
//! nothing changes between calls, so one client can serve many threads.
//! Each operation is split three ways:
//! - `build_*` produces an `HttpRequest` (pure, deterministic),
//! - `parse_*` consumes an `HttpResponse` (status check, then decode),
//! - the plain method (`author_show`, ...) runs build, transport, parse.
//!
//! Callers that do their own I/O can use the first two and skip the third.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::operation::Operation;
use crate::options::{ReviewListOptions, SearchField};
use crate::query::Query;
use crate::types::{
    review_list, user_shelf_list, work_list, Author, Review, ReviewCounts, Series, User, UserShelf,
    Work,
};

#[cfg(feature = "ureq")]
use crate::transport::UreqTransport;

// Envelopes: the outer shape of each response. Only the payload is returned.

#[derive(Deserialize)]
struct AuthorEnvelope {
    author: Author,
}

#[derive(Deserialize)]
struct UserEnvelope {
    user: User,
}

#[derive(Deserialize)]
struct ShelvesEnvelope {
    #[serde(deserialize_with = "user_shelf_list")]
    shelves: Vec<UserShelf>,
}

#[derive(Deserialize)]
struct ReviewsEnvelope {
    #[serde(deserialize_with = "review_list")]
    reviews: Vec<Review>,
}

#[derive(Deserialize)]
struct ReviewCountsEnvelope {
    books: Vec<ReviewCounts>,
}

#[derive(Deserialize)]
struct SearchEnvelope {
    search: SearchResults,
}

#[derive(Deserialize)]
struct SearchResults {
    #[serde(default, deserialize_with = "work_list")]
    results: Vec<Work>,
}

#[derive(Deserialize)]
struct SeriesEnvelope {
    series: Series,
}

/// Client for the public, read-only Goodreads API.
#[derive(Clone)]
pub struct GoodreadsClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for GoodreadsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoodreadsClient")
            .field("api_root", &self.config.api_root)
            .field("verbose", &self.config.verbose)
            .finish_non_exhaustive()
    }
}

impl GoodreadsClient {
    /// Client against the production host using the default transport.
    #[cfg(feature = "ureq")]
    pub fn new(api_key: &str) -> Self {
        Self::with_config(ClientConfig::new(api_key))
    }

    #[cfg(feature = "ureq")]
    pub fn with_config(config: ClientConfig) -> Self {
        let transport = UreqTransport::new(config.timeout);
        Self::with_transport(config, transport)
    }

    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self {
            config,
            transport: Arc::new(transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // -- author.show ---------------------------------------------------------

    pub fn build_author_show(&self, author_id: &str) -> HttpRequest {
        self.request(
            Operation::AuthorShow,
            format!("author/show/{author_id}"),
            self.query(),
        )
    }

    pub fn parse_author_show(&self, response: HttpResponse) -> Result<Author, ApiError> {
        let envelope: AuthorEnvelope = decode(Operation::AuthorShow, response)?;
        Ok(envelope.author)
    }

    /// Full details of an author.
    pub fn author_show(&self, author_id: &str) -> Result<Author, ApiError> {
        let response = self.send(self.build_author_show(author_id))?;
        self.parse_author_show(response)
    }

    // -- author.books --------------------------------------------------------

    pub fn build_author_books(&self, author_id: &str, page: i32) -> HttpRequest {
        self.request(
            Operation::AuthorBooks,
            format!("author/list/{author_id}"),
            self.query().set_positive("page", page),
        )
    }

    pub fn parse_author_books(&self, response: HttpResponse) -> Result<Author, ApiError> {
        let envelope: AuthorEnvelope = decode(Operation::AuthorBooks, response)?;
        Ok(envelope.author)
    }

    /// One page of an author's books, embedded in the returned `Author`.
    /// `page <= 0` lets the server pick the first page.
    pub fn author_books(&self, author_id: &str, page: i32) -> Result<Author, ApiError> {
        let response = self.send(self.build_author_books(author_id, page))?;
        self.parse_author_books(response)
    }

    // -- user.show -----------------------------------------------------------

    pub fn build_user_show(&self, user_id: &str) -> HttpRequest {
        self.request(
            Operation::UserShow,
            format!("user/show/{user_id}.xml"),
            self.query(),
        )
    }

    pub fn parse_user_show(&self, response: HttpResponse) -> Result<User, ApiError> {
        let envelope: UserEnvelope = decode(Operation::UserShow, response)?;
        Ok(envelope.user)
    }

    /// Public profile of a member.
    pub fn user_show(&self, user_id: &str) -> Result<User, ApiError> {
        let response = self.send(self.build_user_show(user_id))?;
        self.parse_user_show(response)
    }

    // -- shelves.list --------------------------------------------------------

    pub fn build_shelves_list(&self, user_id: &str) -> HttpRequest {
        self.request(
            Operation::ShelvesList,
            "shelf/list.xml".to_string(),
            self.query().set("user_id", user_id),
        )
    }

    pub fn parse_shelves_list(&self, response: HttpResponse) -> Result<Vec<UserShelf>, ApiError> {
        let envelope: ShelvesEnvelope = decode(Operation::ShelvesList, response)?;
        Ok(envelope.shelves)
    }

    /// Shelves belonging to a member.
    pub fn shelves_list(&self, user_id: &str) -> Result<Vec<UserShelf>, ApiError> {
        let response = self.send(self.build_shelves_list(user_id))?;
        self.parse_shelves_list(response)
    }

    // -- reviews.list --------------------------------------------------------

    pub fn build_review_list(&self, user_id: &str, options: &ReviewListOptions) -> HttpRequest {
        let query = self.query().set("id", user_id).set("v", "2");
        self.request(
            Operation::ReviewList,
            format!("review/list/{user_id}.xml"),
            options.apply(query),
        )
    }

    pub fn parse_review_list(&self, response: HttpResponse) -> Result<Vec<Review>, ApiError> {
        let envelope: ReviewsEnvelope = decode(Operation::ReviewList, response)?;
        Ok(envelope.reviews)
    }

    /// Books on a member's shelves, one review record per book.
    pub fn review_list(
        &self,
        user_id: &str,
        options: &ReviewListOptions,
    ) -> Result<Vec<Review>, ApiError> {
        let response = self.send(self.build_review_list(user_id, options))?;
        self.parse_review_list(response)
    }

    // -- book.review_counts --------------------------------------------------

    /// ISBNs are comma-joined as given: no validation, no deduplication.
    pub fn build_book_review_counts<S: AsRef<str>>(&self, isbns: &[S]) -> HttpRequest {
        let isbns = isbns.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
        self.request(
            Operation::BookReviewCounts,
            "book/review_counts.json".to_string(),
            self.query().set("isbns", isbns),
        )
    }

    pub fn parse_book_review_counts(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<ReviewCounts>, ApiError> {
        let envelope: ReviewCountsEnvelope = decode(Operation::BookReviewCounts, response)?;
        Ok(envelope.books)
    }

    /// Review statistics for each known ISBN in `isbns`.
    pub fn book_review_counts<S: AsRef<str>>(
        &self,
        isbns: &[S],
    ) -> Result<Vec<ReviewCounts>, ApiError> {
        let response = self.send(self.build_book_review_counts(isbns))?;
        self.parse_book_review_counts(response)
    }

    // -- search.books --------------------------------------------------------

    pub fn build_search_books(&self, query: &str, page: i32, field: SearchField) -> HttpRequest {
        let query = self
            .query()
            .set("q", query)
            .set("search[field]", field.as_str())
            .set_positive("page", page);
        self.request(Operation::SearchBooks, "search/index.xml".to_string(), query)
    }

    pub fn parse_search_books(&self, response: HttpResponse) -> Result<Vec<Work>, ApiError> {
        let envelope: SearchEnvelope = decode(Operation::SearchBooks, response)?;
        Ok(envelope.search.results)
    }

    /// Works matching `query` by title, author or ISBN.
    pub fn search_books(
        &self,
        query: &str,
        page: i32,
        field: SearchField,
    ) -> Result<Vec<Work>, ApiError> {
        let response = self.send(self.build_search_books(query, page, field))?;
        self.parse_search_books(response)
    }

    // -- series.show ---------------------------------------------------------

    pub fn build_series_show(&self, series_id: &str) -> HttpRequest {
        self.request(
            Operation::SeriesShow,
            format!("series/show/{series_id}"),
            self.query().set("format", "xml"),
        )
    }

    pub fn parse_series_show(&self, response: HttpResponse) -> Result<Series, ApiError> {
        let envelope: SeriesEnvelope = decode(Operation::SeriesShow, response)?;
        Ok(envelope.series)
    }

    /// A series with its works in series order.
    pub fn series_show(&self, series_id: &str) -> Result<Series, ApiError> {
        let response = self.send(self.build_series_show(series_id))?;
        self.parse_series_show(response)
    }

    // -- plumbing ------------------------------------------------------------

    fn query(&self) -> Query {
        Query::new(&self.config.api_key)
    }

    fn request(&self, operation: Operation, endpoint: String, query: Query) -> HttpRequest {
        HttpRequest::get(&self.config.api_root, operation, endpoint, query)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        if self.config.verbose {
            tracing::info!(
                operation = %request.operation,
                endpoint = %request.endpoint,
                url = %request.url,
                "GET"
            );
        } else {
            tracing::debug!(
                operation = %request.operation,
                endpoint = %request.endpoint,
                url = %request.url,
                "GET"
            );
        }

        let response = self.transport.execute(&request)?;
        tracing::debug!(
            operation = %request.operation,
            status = response.status,
            bytes = response.body.len(),
            "response received"
        );
        Ok(response)
    }
}

/// Map non-2xx responses to `UnexpectedStatus` without looking at the body.
fn check_status(operation: Operation, response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    tracing::warn!(%operation, status = response.status, "unexpected response code");
    Err(ApiError::UnexpectedStatus {
        status: response.status,
        body: String::from_utf8_lossy(&response.body).into_owned(),
    })
}

fn decode<T: DeserializeOwned>(
    operation: Operation,
    response: HttpResponse,
) -> Result<T, ApiError> {
    check_status(operation, &response)?;
    operation
        .format()
        .decode(&response.body)
        .map_err(|source| ApiError::Decode { operation, source })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::error::TransportError;

    const TEST_API_KEY: &str = "test-api-key";

    fn client() -> GoodreadsClient {
        GoodreadsClient::with_transport(
            ClientConfig::new(TEST_API_KEY).with_api_root("http://localhost:3000"),
            Unreachable,
        )
    }

    /// Fails every call; for tests that only build or parse.
    struct Unreachable;

    impl Transport for Unreachable {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            Err(TransportError::new(&request.endpoint, "connection refused"))
        }
    }

    /// Asserts the requested endpoint and parameters, then answers with a
    /// canned response.
    struct Canned {
        endpoint: &'static str,
        query: &'static [(&'static str, &'static str)],
        response: HttpResponse,
        calls: Mutex<usize>,
    }

    impl Canned {
        fn new(
            endpoint: &'static str,
            query: &'static [(&'static str, &'static str)],
            response: HttpResponse,
        ) -> Self {
            Self {
                endpoint,
                query,
                response,
                calls: Mutex::new(0),
            }
        }
    }

    impl Transport for Canned {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            *self.calls.lock().unwrap() += 1;
            assert_eq!(request.endpoint, self.endpoint);
            let params: Vec<_> = request.query.iter().collect();
            assert_eq!(params, self.query);
            Ok(self.response.clone())
        }
    }

    fn client_with(transport: Canned) -> GoodreadsClient {
        GoodreadsClient::with_transport(ClientConfig::new(TEST_API_KEY), transport)
    }

    fn xml(body: &str) -> HttpResponse {
        HttpResponse::ok(body)
    }

    #[test]
    fn client_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GoodreadsClient>();
    }

    #[test]
    fn build_author_show_produces_correct_request() {
        let req = client().build_author_show("12345");
        assert_eq!(req.operation, Operation::AuthorShow);
        assert_eq!(req.endpoint, "author/show/12345");
        assert_eq!(
            req.url,
            "http://localhost:3000/author/show/12345?key=test-api-key"
        );
    }

    #[test]
    fn build_author_books_includes_only_positive_page() {
        let req = client().build_author_books("12345", 0);
        assert_eq!(req.query.encode(), "key=test-api-key");

        let req = client().build_author_books("12345", 3);
        assert_eq!(req.endpoint, "author/list/12345");
        assert_eq!(req.query.encode(), "key=test-api-key&page=3");
    }

    #[test]
    fn build_user_show_uses_xml_suffix() {
        let req = client().build_user_show("38763538");
        assert_eq!(req.endpoint, "user/show/38763538.xml");
        assert_eq!(req.query.len(), 1);
    }

    #[test]
    fn build_shelves_list_sends_user_id() {
        let req = client().build_shelves_list("42");
        assert_eq!(req.endpoint, "shelf/list.xml");
        assert_eq!(req.query.encode(), "key=test-api-key&user_id=42");
    }

    #[test]
    fn build_review_list_with_every_option() {
        let options = ReviewListOptions {
            shelf: "read".to_string(),
            sort: "date_read".to_string(),
            search: "search-term".to_string(),
            order: "d".to_string(),
            page: 1,
            per_page: 200,
        };
        let req = client().build_review_list("user-id", &options);
        assert_eq!(req.endpoint, "review/list/user-id.xml");
        assert_eq!(
            req.query.encode(),
            "id=user-id&key=test-api-key&order=d&page=1&per_page=200\
             &search=search-term&shelf=read&sort=date_read&v=2"
        );
    }

    #[test]
    fn build_review_list_defaults_send_only_required() {
        let req = client().build_review_list("7", &ReviewListOptions::default());
        assert_eq!(req.query.encode(), "id=7&key=test-api-key&v=2");
    }

    #[test]
    fn build_book_review_counts_joins_isbns_verbatim() {
        let req = client().build_book_review_counts(&["0441172717", "0441172717", "bogus"]);
        assert_eq!(req.endpoint, "book/review_counts.json");
        assert_eq!(
            req.query.get("isbns"),
            Some("0441172717,0441172717,bogus")
        );
        assert_eq!(req.operation.format(), crate::decode::Format::Json);
    }

    #[test]
    fn build_search_books_encodes_bracketed_field_key() {
        let req = client().build_search_books("Ender's Game", 0, SearchField::Title);
        assert_eq!(req.endpoint, "search/index.xml");
        assert_eq!(
            req.url,
            "http://localhost:3000/search/index.xml?key=test-api-key\
             &q=Ender%27s%20Game&search%5Bfield%5D=title"
        );

        let req = client().build_search_books("dune", 2, SearchField::All);
        assert_eq!(req.query.get("page"), Some("2"));
        assert_eq!(req.query.get("search[field]"), Some("all"));
    }

    #[test]
    fn build_series_show_requests_xml_format() {
        let req = client().build_series_show("40321");
        assert_eq!(req.endpoint, "series/show/40321");
        assert_eq!(req.query.encode(), "format=xml&key=test-api-key");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = GoodreadsClient::with_transport(
            ClientConfig::new(TEST_API_KEY).with_api_root("http://localhost:3000/"),
            Unreachable,
        );
        let req = client.build_series_show("1");
        assert!(req.url.starts_with("http://localhost:3000/series/show/1?"));
    }

    #[test]
    fn parse_author_show_unwraps_envelope() {
        let author = client()
            .parse_author_show(xml(
                "<response><author><id>A1</id><name>N1</name></author></response>",
            ))
            .unwrap();
        assert_eq!(
            author,
            Author {
                id: "A1".to_string(),
                name: "N1".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn parse_book_review_counts_keeps_rating_text() {
        let counts = client()
            .parse_book_review_counts(HttpResponse::ok(
                r#"{"books":[{"id":15,"isbn":"1400078776","isbn13":"9781400078776",
                    "ratings_count":1,"reviews_count":2,"text_reviews_count":3,
                    "work_ratings_count":4,"work_reviews_count":5,
                    "work_text_reviews_count":6,"average_rating":"3.82"}]}"#,
            ))
            .unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[0].id, 15);
        assert_eq!(counts[0].isbn, "1400078776");
        assert_eq!(counts[0].average_rating, "3.82");
        assert_eq!(counts[0].work_text_reviews_count, 6);
    }

    #[test]
    fn parse_wrong_status_skips_decoding() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: b"<response><author".to_vec(),
        };
        let err = client().parse_author_show(response).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedStatus { status: 500, .. }));
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn parse_not_found_is_unexpected_status() {
        let response = HttpResponse {
            status: 404,
            headers: Vec::new(),
            body: b"not found".to_vec(),
        };
        let err = client().parse_user_show(response).unwrap_err();
        match err {
            ApiError::UnexpectedStatus { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "not found");
            }
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[test]
    fn parse_truncated_xml_is_decode_error() {
        let err = client()
            .parse_author_show(xml("<response><author><id>A1</id>"))
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Decode {
                operation: Operation::AuthorShow,
                ..
            }
        ));
    }

    #[test]
    fn parse_missing_envelope_element_is_decode_error() {
        let err = client()
            .parse_series_show(xml("<response><author><id>1</id></author></response>"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn parse_json_endpoint_rejects_xml_body() {
        let err = client()
            .parse_book_review_counts(xml("<response><books/></response>"))
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Decode {
                source: crate::error::DecodeError::Json(_),
                ..
            }
        ));
    }

    #[test]
    fn parse_is_idempotent() {
        let body = "<response><reviews>\
            <review><id>R1</id><rating>4</rating><book><id>B1</id><title>T</title></book></review>\
            </reviews></response>";
        let c = client();
        let first = c.parse_review_list(xml(body)).unwrap();
        let second = c.parse_review_list(xml(body)).unwrap();
        assert_eq!(first, second);
        assert_eq!(first[0].book.title, "T");
    }

    #[test]
    fn author_show_round_trip() {
        let c = client_with(Canned::new(
            "author/show/12345",
            &[("key", TEST_API_KEY)],
            xml("<response><author><id>AuthorID</id><name>AuthorName</name></author></response>"),
        ));
        let author = c.author_show("12345").unwrap();
        assert_eq!(author.id, "AuthorID");
        assert_eq!(author.name, "AuthorName");
    }

    #[test]
    fn author_books_round_trip() {
        let c = client_with(Canned::new(
            "author/list/12345",
            &[("key", TEST_API_KEY), ("page", "1")],
            xml("<response><author><id>AuthorID</id><books>\
                 <book><id>B1</id></book><book><id>B2</id></book>\
                 </books></author></response>"),
        ));
        let author = c.author_books("12345", 1).unwrap();
        let ids: Vec<_> = author.books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["B1", "B2"]);
    }

    #[test]
    fn review_list_round_trip_preserves_order_and_ratings() {
        let c = client_with(Canned::new(
            "review/list/user-id.xml",
            &[
                ("id", "user-id"),
                ("key", TEST_API_KEY),
                ("order", "d"),
                ("page", "1"),
                ("per_page", "200"),
                ("search", "search-term"),
                ("shelf", "read"),
                ("sort", "date_read"),
                ("v", "2"),
            ],
            xml("<response>
                <reviews>
                    <review><id>Review1</id><rating>1</rating></review>
                    <review><id>Review2</id><rating>2</rating></review>
                    <review><id>Review3</id><rating>3</rating></review>
                </reviews>
            </response>"),
        ));
        let options = ReviewListOptions {
            shelf: "read".to_string(),
            sort: "date_read".to_string(),
            search: "search-term".to_string(),
            order: "d".to_string(),
            page: 1,
            per_page: 200,
        };
        let reviews = c.review_list("user-id", &options).unwrap();
        assert_eq!(
            reviews,
            vec![
                Review {
                    id: "Review1".to_string(),
                    rating: 1,
                    ..Default::default()
                },
                Review {
                    id: "Review2".to_string(),
                    rating: 2,
                    ..Default::default()
                },
                Review {
                    id: "Review3".to_string(),
                    rating: 3,
                    ..Default::default()
                },
            ]
        );
    }

    #[test]
    fn user_show_round_trip() {
        let c = client_with(Canned::new(
            "user/show/38763538.xml",
            &[("key", TEST_API_KEY)],
            xml("<response><user><id>38763538</id><name>Kyle</name>\
                 <friends_count type=\"integer\">3</friends_count>\
                 <user_shelves>\
                 <user_shelf><id>1</id><name>read</name><book_count>10</book_count></user_shelf>\
                 <user_shelf><id>2</id><name>to-read</name><book_count>4</book_count></user_shelf>\
                 </user_shelves></user></response>"),
        ));
        let user = c.user_show("38763538").unwrap();
        assert_eq!(user.name, "Kyle");
        assert_eq!(user.friends_count, 3);
        let shelves: Vec<_> = user.user_shelves.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(shelves, ["read", "to-read"]);
    }

    #[test]
    fn shelves_list_round_trip() {
        let c = client_with(Canned::new(
            "shelf/list.xml",
            &[("key", TEST_API_KEY), ("user_id", "42")],
            xml("<response><shelves start=\"1\" end=\"2\" total=\"2\">\
                 <user_shelf><id>1</id><name>read</name><exclusive_flag>true</exclusive_flag></user_shelf>\
                 <user_shelf><id>9</id><name>favorites</name><exclusive_flag>false</exclusive_flag></user_shelf>\
                 </shelves></response>"),
        ));
        let shelves = c.shelves_list("42").unwrap();
        assert_eq!(shelves.len(), 2);
        assert!(shelves[0].exclusive_flag);
        assert!(!shelves[1].exclusive_flag);
    }

    #[test]
    fn search_books_round_trip() {
        let c = client_with(Canned::new(
            "search/index.xml",
            &[("key", TEST_API_KEY), ("q", "ender"), ("search[field]", "author")],
            xml("<response><search><query>ender</query><results>\
                 <work><id>2422333</id><average_rating>4.30</average_rating>\
                 <best_book><id>375802</id><title>Ender's Game</title>\
                 <author><id>589</id><name>Orson Scott Card</name></author></best_book></work>\
                 </results></search></response>"),
        ));
        let works = c.search_books("ender", 0, SearchField::Author).unwrap();
        assert_eq!(works.len(), 1);
        assert_eq!(works[0].id, 2422333);
        assert_eq!(works[0].best_book.author.name, "Orson Scott Card");
        assert!((works[0].average_rating - 4.3).abs() < 1e-9);
    }

    #[test]
    fn search_without_results_is_empty() {
        let c = client_with(Canned::new(
            "search/index.xml",
            &[("key", TEST_API_KEY), ("q", "zzz"), ("search[field]", "all")],
            xml("<response><search><results/></search></response>"),
        ));
        assert!(c.search_books("zzz", 0, SearchField::All).unwrap().is_empty());
    }

    #[test]
    fn series_show_round_trip() {
        let c = client_with(Canned::new(
            "series/show/40321",
            &[("format", "xml"), ("key", TEST_API_KEY)],
            xml("<response><series><id>40321</id><title>Ender's Saga</title>\
                 <series_works_count>2</series_works_count><series_works>\
                 <series_work><id>1</id><user_position>1</user_position><work><id>10</id></work></series_work>\
                 <series_work><id>2</id><user_position>2</user_position><work><id>20</id></work></series_work>\
                 </series_works></series></response>"),
        ));
        let series = c.series_show("40321").unwrap();
        assert_eq!(series.series_works_count, 2);
        assert_eq!(series.series_works[1].work.id, 20);
    }

    #[test]
    fn book_review_counts_round_trip() {
        let c = client_with(Canned::new(
            "book/review_counts.json",
            &[("isbns", "0441172717,0451524934"), ("key", TEST_API_KEY)],
            HttpResponse::ok(r#"{"books":[{"id":1,"isbn":"0441172717"},{"id":2,"isbn":"0451524934"}]}"#),
        ));
        let counts = c.book_review_counts(&["0441172717", "0451524934"]).unwrap();
        let ids: Vec<_> = counts.iter().map(|c| c.id).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn transport_failure_propagates_unchanged() {
        let err = client().author_show("1").unwrap_err();
        match err {
            ApiError::Transport(e) => assert_eq!(e.endpoint(), "author/show/1"),
            other => panic!("expected Transport, got {other:?}"),
        }
    }

    #[test]
    fn server_error_is_surfaced_once() {
        let canned = Arc::new(Canned::new(
            "series/show/1",
            &[("format", "xml"), ("key", TEST_API_KEY)],
            HttpResponse {
                status: 503,
                headers: Vec::new(),
                body: Vec::new(),
            },
        ));
        let c = GoodreadsClient::with_transport(ClientConfig::new(TEST_API_KEY), canned.clone());
        let err = c.series_show("1").unwrap_err();
        assert_eq!(err.status(), Some(503));
        assert_eq!(*canned.calls.lock().unwrap(), 1, "no retry");
    }

    /// Log sink shared with the subscriber.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// Run `author_show` under an info-level subscriber and return what it logged.
    fn logged_at_info(verbose: bool) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .finish();

        let c = GoodreadsClient::with_transport(
            ClientConfig::new(TEST_API_KEY).with_verbose(verbose),
            Canned::new(
                "author/show/7",
                &[("key", TEST_API_KEY)],
                xml("<response><author><id>7</id></author></response>"),
            ),
        );
        tracing::subscriber::with_default(subscriber, || c.author_show("7").unwrap());

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn verbose_logs_request_at_info() {
        let out = logged_at_info(true);
        assert!(out.contains("INFO"), "{out}");
        assert!(out.contains("GET"), "{out}");
        assert!(out.contains("url=https://www.goodreads.com/author/show/7?key="), "{out}");
    }

    #[test]
    fn quiet_client_keeps_request_at_debug() {
        let out = logged_at_info(false);
        assert!(!out.contains("GET"), "{out}");
    }
}
