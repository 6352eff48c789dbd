use std::fmt;

use crate::decode::Format;

/// The API methods this client knows how to call.
///
/// Each operation fixes the wire format of its response, so format selection
/// happens per call site instead of through global configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    AuthorShow,
    AuthorBooks,
    UserShow,
    ShelvesList,
    ReviewList,
    BookReviewCounts,
    SearchBooks,
    SeriesShow,
}

impl Operation {
    /// Method name as listed in the service's API documentation.
    pub fn name(self) -> &'static str {
        match self {
            Operation::AuthorShow => "author.show",
            Operation::AuthorBooks => "author.books",
            Operation::UserShow => "user.show",
            Operation::ShelvesList => "shelves.list",
            Operation::ReviewList => "reviews.list",
            Operation::BookReviewCounts => "book.review_counts",
            Operation::SearchBooks => "search.books",
            Operation::SeriesShow => "series.show",
        }
    }

    pub fn format(self) -> Format {
        match self {
            Operation::BookReviewCounts => Format::Json,
            _ => Format::Xml,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
