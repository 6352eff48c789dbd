//! Serde shapes of the XML payloads, built from catalog records.
//!
//! Field order is element order. `@name` fields become attributes and `$text`
//! is the element text, following `quick_xml::se` conventions. Text is
//! escaped by the serializer.

use serde::Serialize;

use crate::catalog::{Author, Book, Catalog, Review, Series, User};

/// A scalar with a `type="..."` hint, e.g. `<fans_count type="integer">3</fans_count>`.
#[derive(Serialize)]
pub struct Typed<T> {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "$text")]
    value: T,
}

fn integer<T>(value: T) -> Typed<T> {
    Typed {
        kind: "integer",
        value,
    }
}

fn boolean(value: bool) -> Typed<bool> {
    Typed {
        kind: "boolean",
        value,
    }
}

/// `<x nil="true"/>`, optionally typed.
#[derive(Serialize)]
pub struct Nil {
    #[serde(rename = "@type", skip_serializing_if = "Option::is_none")]
    kind: Option<&'static str>,
    #[serde(rename = "@nil")]
    nil: bool,
}

const NIL: Nil = Nil {
    kind: None,
    nil: true,
};

const NIL_INTEGER: Nil = Nil {
    kind: Some("integer"),
    nil: true,
};

#[derive(Serialize)]
pub struct AuthorXml<'a> {
    id: &'a str,
    name: &'a str,
    link: String,
    fans_count: Typed<u32>,
    about: &'a str,
    works_count: usize,
    gender: &'a str,
    hometown: &'a str,
    born_at: &'a str,
    died_at: &'a str,
    goodreads_author: bool,
    user: MemberRef<'a>,
    books: Books<'a>,
}

#[derive(Serialize)]
struct MemberRef<'a> {
    user_id: &'a str,
}

#[derive(Serialize)]
struct Books<'a> {
    #[serde(rename = "book")]
    items: Vec<BookXml<'a>>,
}

#[derive(Serialize)]
pub struct BookXml<'a> {
    id: Typed<&'a str>,
    isbn: &'a str,
    isbn13: &'a str,
    text_reviews_count: Typed<u64>,
    title: &'a str,
    num_pages: u32,
    publisher: &'a str,
    publication_day: Nil,
    publication_year: u32,
    publication_month: Nil,
    average_rating: &'a str,
    ratings_count: u64,
    authors: Authors<'a>,
}

#[derive(Serialize)]
struct Authors<'a> {
    #[serde(rename = "author")]
    items: Vec<BookAuthor<'a>>,
}

#[derive(Serialize)]
struct BookAuthor<'a> {
    id: &'a str,
    name: &'a str,
    role: &'a str,
}

#[derive(Serialize)]
pub struct WorkXml<'a> {
    id: Typed<u64>,
    books_count: Typed<u32>,
    ratings_count: Typed<u64>,
    text_reviews_count: Typed<u64>,
    original_publication_year: Typed<u32>,
    original_publication_month: Nil,
    original_publication_day: Nil,
    average_rating: &'a str,
    best_book: BestBook<'a>,
}

#[derive(Serialize)]
struct BestBook<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    id: Typed<&'a str>,
    title: &'a str,
    author: WorkAuthor<'a>,
    image_url: String,
}

#[derive(Serialize)]
struct WorkAuthor<'a> {
    id: Typed<&'a str>,
    name: &'a str,
}

#[derive(Serialize)]
pub struct UserXml<'a> {
    id: &'a str,
    name: &'a str,
    link: String,
    location: &'a str,
    joined: &'a str,
    friends_count: Typed<u32>,
    reviews_count: Typed<usize>,
    user_shelves: UserShelves<'a>,
}

#[derive(Serialize)]
struct UserShelves<'a> {
    #[serde(rename = "user_shelf")]
    items: Vec<UserShelfXml<'a>>,
}

#[derive(Serialize)]
pub struct UserShelfXml<'a> {
    id: Typed<u32>,
    name: &'a str,
    book_count: Typed<usize>,
    exclusive_flag: Typed<bool>,
    description: Nil,
}

#[derive(Serialize)]
pub struct ShelvesXml<'a> {
    #[serde(rename = "@start")]
    start: usize,
    #[serde(rename = "@end")]
    end: usize,
    #[serde(rename = "@total")]
    total: usize,
    #[serde(rename = "user_shelf")]
    items: Vec<UserShelfXml<'a>>,
}

#[derive(Serialize)]
pub struct ReviewsXml<'a> {
    #[serde(rename = "@start")]
    pub start: usize,
    #[serde(rename = "@end")]
    pub end: usize,
    #[serde(rename = "@total")]
    pub total: usize,
    #[serde(rename = "review")]
    pub items: Vec<ReviewXml<'a>>,
}

#[derive(Serialize)]
pub struct ReviewXml<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    book: Option<BookXml<'a>>,
    rating: u8,
    votes: u32,
    shelves: ReviewShelves<'a>,
    started_at: &'a str,
    read_at: &'a str,
    date_added: &'a str,
    date_updated: &'a str,
    read_count: u8,
    body: &'a str,
}

#[derive(Serialize)]
struct ReviewShelves<'a> {
    shelf: ShelfRef<'a>,
}

#[derive(Serialize)]
struct ShelfRef<'a> {
    #[serde(rename = "@name")]
    name: &'a str,
    #[serde(rename = "@exclusive")]
    exclusive: bool,
}

#[derive(Serialize)]
pub struct SearchXml<'a> {
    pub query: &'a str,
    #[serde(rename = "total-results")]
    pub total_results: usize,
    pub source: &'static str,
    pub results: Results<'a>,
}

#[derive(Serialize)]
pub struct Results<'a> {
    #[serde(rename = "work")]
    pub items: Vec<WorkXml<'a>>,
}

#[derive(Serialize)]
pub struct SeriesXml<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    note: Nil,
    series_works_count: usize,
    primary_work_count: usize,
    numbered: bool,
    series_works: SeriesWorks<'a>,
}

#[derive(Serialize)]
struct SeriesWorks<'a> {
    #[serde(rename = "series_work")]
    items: Vec<SeriesWorkXml<'a>>,
}

#[derive(Serialize)]
struct SeriesWorkXml<'a> {
    id: usize,
    user_position: &'a str,
    work: WorkXml<'a>,
}

/// One entry of the JSON `book/review_counts` payload.
#[derive(Serialize)]
pub struct ReviewCountsJson<'a> {
    id: u64,
    isbn: &'a str,
    isbn13: &'a str,
    ratings_count: u64,
    reviews_count: u64,
    text_reviews_count: u64,
    work_ratings_count: u64,
    work_reviews_count: u64,
    work_text_reviews_count: u64,
    average_rating: &'a str,
}

#[derive(Serialize)]
pub struct BooksJson<'a> {
    pub books: Vec<ReviewCountsJson<'a>>,
}

pub fn author<'a>(db: &'a Catalog, author: &'a Author, books: &[&'a Book]) -> AuthorXml<'a> {
    AuthorXml {
        id: author.id,
        name: author.name,
        link: format!("https://www.goodreads.com/author/show/{}", author.id),
        fans_count: integer(author.fans_count),
        about: author.about,
        works_count: db.books_by(author.id).count(),
        gender: author.gender,
        hometown: author.hometown,
        born_at: author.born_at,
        died_at: author.died_at,
        goodreads_author: !author.user_id.is_empty(),
        user: MemberRef {
            user_id: author.user_id,
        },
        books: Books {
            items: books.iter().map(|b| book(db, b)).collect(),
        },
    }
}

pub fn book<'a>(db: &'a Catalog, book: &'a Book) -> BookXml<'a> {
    let authors = db
        .author(book.author_id)
        .map(|a| BookAuthor {
            id: a.id,
            name: a.name,
            role: "",
        })
        .into_iter()
        .collect();
    BookXml {
        id: integer(book.id),
        isbn: book.isbn,
        isbn13: book.isbn13,
        text_reviews_count: integer(book.text_reviews_count),
        title: book.title,
        num_pages: book.num_pages,
        publisher: book.publisher,
        publication_day: NIL,
        publication_year: book.publication_year,
        publication_month: NIL,
        average_rating: book.average_rating,
        ratings_count: book.ratings_count,
        authors: Authors { items: authors },
    }
}

pub fn work<'a>(db: &'a Catalog, book: &'a Book) -> WorkXml<'a> {
    let (author_id, author_name) = db
        .author(book.author_id)
        .map(|a| (a.id, a.name))
        .unwrap_or_default();
    WorkXml {
        id: integer(book.work_id),
        books_count: integer(book.editions),
        ratings_count: integer(book.ratings_count),
        text_reviews_count: integer(book.text_reviews_count),
        original_publication_year: integer(book.publication_year),
        original_publication_month: NIL_INTEGER,
        original_publication_day: NIL_INTEGER,
        average_rating: book.average_rating,
        best_book: BestBook {
            kind: "Book",
            id: integer(book.id),
            title: book.title,
            author: WorkAuthor {
                id: integer(author_id),
                name: author_name,
            },
            image_url: format!("https://images.example/{}.jpg", book.id),
        },
    }
}

pub fn user<'a>(db: &'a Catalog, user: &'a User) -> UserXml<'a> {
    UserXml {
        id: user.id,
        name: user.name,
        link: format!("https://www.goodreads.com/user/show/{}", user.id),
        location: user.location,
        joined: user.joined,
        friends_count: integer(user.friends_count),
        reviews_count: integer(db.reviews_of(user.id).count()),
        user_shelves: UserShelves {
            items: shelves(db, user),
        },
    }
}

pub fn shelves_list<'a>(db: &'a Catalog, user: &'a User) -> ShelvesXml<'a> {
    let items = shelves(db, user);
    ShelvesXml {
        start: 1,
        end: items.len(),
        total: items.len(),
        items,
    }
}

fn shelves<'a>(db: &'a Catalog, user: &'a User) -> Vec<UserShelfXml<'a>> {
    user.shelves
        .iter()
        .map(|shelf| UserShelfXml {
            id: integer(shelf.id),
            name: shelf.name,
            book_count: integer(
                db.reviews_of(user.id)
                    .filter(|r| r.shelf == shelf.name)
                    .count(),
            ),
            exclusive_flag: boolean(shelf.exclusive),
            description: NIL,
        })
        .collect()
}

pub fn review<'a>(db: &'a Catalog, review: &'a Review) -> ReviewXml<'a> {
    ReviewXml {
        id: review.id,
        book: db.book(review.book_id).map(|b| book(db, b)),
        rating: review.rating,
        votes: 0,
        shelves: ReviewShelves {
            shelf: ShelfRef {
                name: review.shelf,
                exclusive: true,
            },
        },
        started_at: review.started_at,
        read_at: review.read_at,
        date_added: review.date_added,
        date_updated: review.date_added,
        read_count: u8::from(!review.read_at.is_empty()),
        body: review.body,
    }
}

pub fn series<'a>(db: &'a Catalog, series: &'a Series) -> SeriesXml<'a> {
    let items = series
        .works
        .iter()
        .filter_map(|(position, book_id)| Some((*position, db.book(book_id)?)))
        .enumerate()
        .map(|(i, (position, b))| SeriesWorkXml {
            id: i + 1,
            user_position: position,
            work: work(db, b),
        })
        .collect();
    SeriesXml {
        id: series.id,
        title: series.title,
        description: series.description,
        note: NIL,
        series_works_count: series.works.len(),
        primary_work_count: series.works.len(),
        numbered: series.numbered,
        series_works: SeriesWorks { items },
    }
}

pub fn review_counts(book: &Book) -> ReviewCountsJson<'_> {
    ReviewCountsJson {
        id: book.id.parse().unwrap_or_default(),
        isbn: book.isbn,
        isbn13: book.isbn13,
        ratings_count: book.ratings_count,
        reviews_count: book.reviews_count,
        text_reviews_count: book.text_reviews_count,
        work_ratings_count: book.ratings_count,
        work_reviews_count: book.reviews_count,
        work_text_reviews_count: book.text_reviews_count,
        average_rating: book.average_rating,
    }
}
