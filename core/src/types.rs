//! Domain records for the Goodreads API.
//!
//! # Design
//! These mirror the service's wire schema and are rebuilt from scratch on
//! every decode. Every field defaults to its zero value when the element is
//! absent, so "missing" and "empty" are indistinguishable for strings.
//!
//! `Author` owns its `books` and each `Book` owns its `authors`. The nesting
//! is whatever the response contained: a plain tree, no back references.
//!
//! Wrapper elements such as `<books><book>..</book></books>` are flattened
//! into a `Vec` on the parent; list order is the server's order.

use serde::{Deserialize, Deserializer, Serialize};

use crate::decode::{flag, lenient};

/// Generates a deserializer that unwraps `<wrapper><item/>..</wrapper>` into
/// `Vec<item>`.
macro_rules! nested_list {
    ($name:ident, $item:literal, $ty:ty) => {
        pub(crate) fn $name<'de, D>(deserializer: D) -> Result<Vec<$ty>, D::Error>
        where
            D: Deserializer<'de>,
        {
            #[derive(Deserialize)]
            struct Wrapper {
                #[serde(rename = $item, default)]
                items: Vec<$ty>,
            }
            Ok(Wrapper::deserialize(deserializer)?.items)
        }
    };
}

nested_list!(book_list, "book", Book);
nested_list!(author_list, "author", Author);
nested_list!(user_shelf_list, "user_shelf", UserShelf);
nested_list!(review_list, "review", Review);
nested_list!(work_list, "work", Work);
nested_list!(series_work_list, "series_work", SeriesWork);

fn nested_user_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Default, Deserialize)]
    #[serde(default)]
    struct AuthorUser {
        user_id: String,
    }
    Ok(AuthorUser::deserialize(deserializer)?.user_id)
}

/// A book author, as returned by `author.show` and `author.books`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub small_image_url: String,
    pub large_image_url: String,
    pub link: String,
    #[serde(deserialize_with = "lenient")]
    pub average_rating: f32,
    #[serde(deserialize_with = "lenient")]
    pub ratings_count: i32,
    #[serde(deserialize_with = "lenient")]
    pub text_reviews_count: i32,
    #[serde(deserialize_with = "lenient")]
    pub fans_count: i32,
    #[serde(deserialize_with = "lenient")]
    pub author_followers: i32,
    pub about: String,
    #[serde(deserialize_with = "lenient")]
    pub works_count: i32,
    pub gender: String,
    pub hometown: String,
    pub born_at: String,
    pub died_at: String,
    #[serde(deserialize_with = "flag")]
    pub goodreads_author: bool,
    /// Member id when the author also has a reader account.
    #[serde(rename(deserialize = "user"), deserialize_with = "nested_user_id")]
    pub user_id: String,
    #[serde(deserialize_with = "book_list")]
    pub books: Vec<Book>,
}

/// A catalog entry for one edition of a book.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    pub id: String,
    pub isbn: String,
    pub isbn13: String,
    #[serde(deserialize_with = "lenient")]
    pub text_reviews_count: i32,
    pub uri: String,
    pub title: String,
    pub title_without_series: String,
    pub image_url: String,
    pub small_image_url: String,
    pub large_image_url: String,
    pub link: String,
    #[serde(deserialize_with = "lenient")]
    pub num_pages: i32,
    pub format: String,
    pub edition_information: String,
    pub publisher: String,
    #[serde(deserialize_with = "lenient")]
    pub publication_day: i32,
    #[serde(deserialize_with = "lenient")]
    pub publication_year: i32,
    #[serde(deserialize_with = "lenient")]
    pub publication_month: i32,
    #[serde(deserialize_with = "lenient")]
    pub average_rating: f32,
    #[serde(deserialize_with = "lenient")]
    pub ratings_count: i32,
    pub description: String,
    #[serde(deserialize_with = "author_list")]
    pub authors: Vec<Author>,
}

/// A member's review of a book. Timestamps are passed through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    pub id: String,
    pub book: Book,
    /// Star rating as sent by the server; the range is not checked here.
    #[serde(deserialize_with = "lenient")]
    pub rating: i32,
    pub started_at: String,
    pub read_at: String,
    pub date_added: String,
    pub date_updated: String,
    #[serde(deserialize_with = "lenient")]
    pub read_count: i32,
    pub body: String,
}

/// Review statistics for one ISBN, from the JSON `book.review_counts` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewCounts {
    pub id: i64,
    pub isbn: String,
    pub isbn13: String,
    pub ratings_count: i64,
    pub reviews_count: i64,
    pub text_reviews_count: i64,
    pub work_ratings_count: i64,
    pub work_reviews_count: i64,
    pub work_text_reviews_count: i64,
    /// Kept as text; the server does not guarantee a numeric literal.
    pub average_rating: String,
}

/// A member profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub name: String,
    pub link: String,
    pub image_url: String,
    pub small_image_url: String,
    pub about: String,
    pub gender: String,
    pub location: String,
    pub website: String,
    pub joined: String,
    pub last_active: String,
    #[serde(deserialize_with = "lenient")]
    pub friends_count: i32,
    #[serde(deserialize_with = "lenient")]
    pub groups_count: i32,
    #[serde(deserialize_with = "lenient")]
    pub reviews_count: i32,
    #[serde(deserialize_with = "user_shelf_list")]
    pub user_shelves: Vec<UserShelf>,
}

/// A named shelf owned by a member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserShelf {
    pub id: String,
    pub name: String,
    pub book_count: String,
    /// Exclusive shelves (read, to-read, ...) hold a book at most once per member.
    #[serde(deserialize_with = "flag")]
    pub exclusive_flag: bool,
    pub description: String,
}

/// A search hit: the work behind a set of editions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Work {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    #[serde(deserialize_with = "lenient")]
    pub books_count: i32,
    #[serde(deserialize_with = "lenient")]
    pub ratings_count: i32,
    #[serde(deserialize_with = "lenient")]
    pub text_reviews_count: i32,
    #[serde(deserialize_with = "lenient")]
    pub original_publication_year: i32,
    #[serde(deserialize_with = "lenient")]
    pub original_publication_month: i32,
    #[serde(deserialize_with = "lenient")]
    pub original_publication_day: i32,
    #[serde(deserialize_with = "lenient")]
    pub average_rating: f64,
    pub best_book: WorkBook,
}

/// The reduced book record embedded in a `Work`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkBook {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    pub title: String,
    pub author: WorkAuthor,
    pub image_url: String,
    pub small_image_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkAuthor {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    pub name: String,
}

/// A numbered series and its member works.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Series {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    pub title: String,
    pub description: String,
    pub note: String,
    #[serde(deserialize_with = "lenient")]
    pub series_works_count: i32,
    #[serde(deserialize_with = "lenient")]
    pub primary_work_count: i32,
    #[serde(deserialize_with = "flag")]
    pub numbered: bool,
    #[serde(deserialize_with = "series_work_list")]
    pub series_works: Vec<SeriesWork>,
}

/// A work's place in a series. `user_position` is free text ("1", "2.5", "0-3").
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesWork {
    #[serde(deserialize_with = "lenient")]
    pub id: i64,
    pub user_position: String,
    pub work: Work,
}
