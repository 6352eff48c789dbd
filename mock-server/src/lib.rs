//! Stand-in for the Goodreads API, serving a small seeded catalog on the same
//! paths, parameters and wire formats as the real service.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;

mod catalog;
mod render;

pub use catalog::{Author, Book, Catalog, Review, Series, Shelf, User};

type Params = Query<HashMap<String, String>>;

/// Books per page on `author/list`.
pub const AUTHOR_BOOKS_PER_PAGE: usize = 30;

/// Works per page on `search/index.xml`.
pub const SEARCH_PER_PAGE: usize = 20;

pub fn app() -> Router {
    app_with(Catalog::seeded())
}

pub fn app_with(catalog: Catalog) -> Router {
    Router::new()
        .route("/author/show/{id}", get(author_show))
        .route("/author/list/{id}", get(author_books))
        .route("/user/show/{file}", get(user_show))
        .route("/shelf/list.xml", get(shelves_list))
        .route("/review/list/{file}", get(review_list))
        .route("/book/review_counts.json", get(review_counts))
        .route("/search/index.xml", get(search_books))
        .route("/series/show/{id}", get(series_show))
        .with_state(Arc::new(catalog))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

type Db = Arc<Catalog>;

async fn author_show(
    State(db): State<Db>,
    Path(id): Path<String>,
    Query(params): Params,
) -> Result<Response, StatusCode> {
    require_key(&params)?;
    let author = db.author(&id).ok_or(StatusCode::NOT_FOUND)?;
    let books: Vec<&Book> = db.books_by(author.id).collect();
    xml("author", &render::author(&db, author, &books))
}

async fn author_books(
    State(db): State<Db>,
    Path(id): Path<String>,
    Query(params): Params,
) -> Result<Response, StatusCode> {
    require_key(&params)?;
    let author = db.author(&id).ok_or(StatusCode::NOT_FOUND)?;
    let page = positive(&params, "page")?.unwrap_or(1);
    let books: Vec<&Book> = db
        .books_by(author.id)
        .skip(offset(page, AUTHOR_BOOKS_PER_PAGE))
        .take(AUTHOR_BOOKS_PER_PAGE)
        .collect();
    xml("author", &render::author(&db, author, &books))
}

async fn user_show(
    State(db): State<Db>,
    Path(file): Path<String>,
    Query(params): Params,
) -> Result<Response, StatusCode> {
    require_key(&params)?;
    let id = file.strip_suffix(".xml").ok_or(StatusCode::NOT_FOUND)?;
    let user = db.user(id).ok_or(StatusCode::NOT_FOUND)?;
    xml("user", &render::user(&db, user))
}

async fn shelves_list(
    State(db): State<Db>,
    Query(params): Params,
) -> Result<Response, StatusCode> {
    require_key(&params)?;
    let user_id = required(&params, "user_id")?;
    let user = db.user(user_id).ok_or(StatusCode::NOT_FOUND)?;
    xml("shelves", &render::shelves_list(&db, user))
}

async fn review_list(
    State(db): State<Db>,
    Path(file): Path<String>,
    Query(params): Params,
) -> Result<Response, StatusCode> {
    require_key(&params)?;
    if params.get("v").map(String::as_str) != Some("2") {
        return Err(StatusCode::BAD_REQUEST);
    }
    let id = file.strip_suffix(".xml").ok_or(StatusCode::NOT_FOUND)?;
    let user = db.user(id).ok_or(StatusCode::NOT_FOUND)?;

    let shelf = params.get("shelf").map(String::as_str).unwrap_or("all");
    let per_page = positive(&params, "per_page")?.unwrap_or(20).min(200);
    let page = positive(&params, "page")?.unwrap_or(1);

    let mut reviews: Vec<&Review> = db
        .reviews_of(user.id)
        .filter(|r| shelf == "all" || r.shelf == shelf)
        .collect();
    if params.get("order").map(String::as_str) == Some("a") {
        reviews.reverse();
    }
    let total = reviews.len();
    let skip = offset(page, per_page);
    let items = reviews
        .into_iter()
        .skip(skip)
        .take(per_page)
        .map(|review| render::review(&db, review))
        .collect();
    xml(
        "reviews",
        &render::ReviewsXml {
            start: skip.saturating_add(1),
            end: page.saturating_mul(per_page).min(total),
            total,
            items,
        },
    )
}

async fn review_counts(
    State(db): State<Db>,
    Query(params): Params,
) -> Result<Response, StatusCode> {
    require_key(&params)?;
    let isbns = required(&params, "isbns")?;
    let books: Vec<_> = isbns
        .split(',')
        .filter_map(|isbn| db.book_by_isbn(isbn.trim()))
        .map(render::review_counts)
        .collect();
    if books.is_empty() {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(render::BooksJson { books }).into_response())
}

async fn search_books(
    State(db): State<Db>,
    Query(params): Params,
) -> Result<Response, StatusCode> {
    require_key(&params)?;
    let query = required(&params, "q")?;
    let needle = query.to_lowercase();
    let field = required(&params, "search[field]")?;
    let page = positive(&params, "page")?.unwrap_or(1);

    let matches = |book: &Book| {
        let author = db.author(book.author_id).map(|a| a.name).unwrap_or_default();
        let title = book.title.to_lowercase().contains(&needle);
        let by = author.to_lowercase().contains(&needle);
        match field {
            "title" => Ok(title),
            "author" => Ok(by),
            "all" => Ok(title || by || book.isbn == needle || book.isbn13 == needle),
            _ => Err(StatusCode::BAD_REQUEST),
        }
    };

    let mut hits = Vec::new();
    for book in db.books.iter() {
        if matches(book)? {
            hits.push(book);
        }
    }
    let total_results = hits.len();
    let items = hits
        .into_iter()
        .skip(offset(page, SEARCH_PER_PAGE))
        .take(SEARCH_PER_PAGE)
        .map(|book| render::work(&db, book))
        .collect();
    xml(
        "search",
        &render::SearchXml {
            query,
            total_results,
            source: "Goodreads",
            results: render::Results { items },
        },
    )
}

async fn series_show(
    State(db): State<Db>,
    Path(id): Path<String>,
    Query(params): Params,
) -> Result<Response, StatusCode> {
    require_key(&params)?;
    if params.get("format").map(String::as_str) != Some("xml") {
        return Err(StatusCode::BAD_REQUEST);
    }
    let series = db.series(&id).ok_or(StatusCode::NOT_FOUND)?;
    xml("series", &render::series(&db, series))
}

fn require_key(params: &HashMap<String, String>) -> Result<(), StatusCode> {
    match params.get("key") {
        Some(key) if !key.is_empty() => Ok(()),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

fn required<'a>(params: &'a HashMap<String, String>, name: &str) -> Result<&'a str, StatusCode> {
    match params.get(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(StatusCode::BAD_REQUEST),
    }
}

/// A page-like parameter: absent is `None`, anything but a positive integer is 400.
fn positive(params: &HashMap<String, String>, name: &str) -> Result<Option<usize>, StatusCode> {
    match params.get(name) {
        None => Ok(None),
        Some(value) => match value.parse::<usize>() {
            Ok(n) if n > 0 => Ok(Some(n)),
            _ => Err(StatusCode::BAD_REQUEST),
        },
    }
}

/// Items before 1-based `page`. Saturates, so a huge page is simply past the end.
fn offset(page: usize, per_page: usize) -> usize {
    page.saturating_sub(1).saturating_mul(per_page)
}

/// Serialize `payload` as `<root>` inside the service's response wrapper,
/// request echo included.
fn xml<T: Serialize>(root: &str, payload: &T) -> Result<Response, StatusCode> {
    let inner = quick_xml::se::to_string_with_root(root, payload).map_err(|e| {
        tracing::error!(error = %e, root, "rendering response");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let body = format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<GoodreadsResponse>\
         <Request><authentication>true</authentication><key><![CDATA[redacted]]></key>\
         <method><![CDATA[mock]]></method></Request>{inner}</GoodreadsResponse>"
    );
    Ok(([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], body).into_response())
}
