//! Typed inputs for operations with optional parameters.

use std::fmt;
use std::str::FromStr;

use crate::query::Query;

/// Which fields a book search matches against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SearchField {
    Author,
    Title,
    #[default]
    All,
}

impl SearchField {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchField::Author => "author",
            SearchField::Title => "title",
            SearchField::All => "all",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "author" => Ok(SearchField::Author),
            "title" => Ok(SearchField::Title),
            "all" => Ok(SearchField::All),
            other => Err(format!(
                "unknown search field `{other}`, expected one of: author, title, all"
            )),
        }
    }
}

/// Optional filters for listing the reviews on a member's shelves.
///
/// Empty strings and non-positive page values are left out of the request so
/// the server applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewListOptions {
    /// Shelf name, e.g. `read`, `currently-reading`.
    pub shelf: String,
    /// Sort column, e.g. `date_read`, `title`, `rating`.
    pub sort: String,
    /// Free-text query over the listed books.
    pub search: String,
    /// `a` or `d`.
    pub order: String,
    pub page: i32,
    /// 1 to 200 on the server side.
    pub per_page: i32,
}

impl ReviewListOptions {
    pub(crate) fn apply(&self, query: Query) -> Query {
        query
            .set_non_empty("shelf", &self.shelf)
            .set_non_empty("sort", &self.sort)
            .set_non_empty("search", &self.search)
            .set_non_empty("order", &self.order)
            .set_positive("page", self.page)
            .set_positive("per_page", self.per_page)
    }
}
