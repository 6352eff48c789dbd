//! The in-memory data behind the mock endpoints.
//!
//! Records are defined here independently of the client crate; integration
//! tests catch drift between the two.

#[derive(Clone, Debug)]
pub struct Author {
    pub id: &'static str,
    pub name: &'static str,
    pub about: &'static str,
    pub gender: &'static str,
    pub hometown: &'static str,
    pub born_at: &'static str,
    pub died_at: &'static str,
    pub fans_count: u32,
    /// Empty when the author has no member account.
    pub user_id: &'static str,
}

#[derive(Clone, Debug)]
pub struct Book {
    pub id: &'static str,
    pub work_id: u64,
    pub isbn: &'static str,
    pub isbn13: &'static str,
    pub title: &'static str,
    pub author_id: &'static str,
    pub publisher: &'static str,
    pub publication_year: u32,
    pub num_pages: u32,
    pub editions: u32,
    pub average_rating: &'static str,
    pub ratings_count: u64,
    pub reviews_count: u64,
    pub text_reviews_count: u64,
}

#[derive(Clone, Debug)]
pub struct Shelf {
    pub id: u32,
    pub name: &'static str,
    pub exclusive: bool,
}

#[derive(Clone, Debug)]
pub struct User {
    pub id: &'static str,
    pub name: &'static str,
    pub location: &'static str,
    pub joined: &'static str,
    pub friends_count: u32,
    pub shelves: Vec<Shelf>,
}

#[derive(Clone, Debug)]
pub struct Review {
    pub id: &'static str,
    pub user_id: &'static str,
    pub book_id: &'static str,
    pub shelf: &'static str,
    pub rating: u8,
    pub started_at: &'static str,
    pub read_at: &'static str,
    pub date_added: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Debug)]
pub struct Series {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub numbered: bool,
    /// `(user_position, book_id)` in series order.
    pub works: Vec<(&'static str, &'static str)>,
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub authors: Vec<Author>,
    pub books: Vec<Book>,
    pub users: Vec<User>,
    /// Newest first, per user.
    pub reviews: Vec<Review>,
    pub series: Vec<Series>,
}

impl Catalog {
    pub fn author(&self, id: &str) -> Option<&Author> {
        self.authors.iter().find(|a| a.id == id)
    }

    pub fn books_by<'a>(&'a self, author_id: &'a str) -> impl Iterator<Item = &'a Book> + 'a {
        self.books.iter().filter(move |b| b.author_id == author_id)
    }

    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn book_by_isbn(&self, isbn: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.isbn == isbn || b.isbn13 == isbn)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn reviews_of<'a>(&'a self, user_id: &'a str) -> impl Iterator<Item = &'a Review> + 'a {
        self.reviews.iter().filter(move |r| r.user_id == user_id)
    }

    pub fn series(&self, id: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.id == id)
    }

    pub fn seeded() -> Self {
        Self {
            authors: vec![
                Author {
                    id: "589",
                    name: "Orson Scott Card",
                    about: "Orson Scott Card is best known for his science fiction novel Ender's Game.",
                    gender: "male",
                    hometown: "Richland, Washington",
                    born_at: "1951/08/24",
                    died_at: "",
                    fans_count: 12019,
                    user_id: "",
                },
                Author {
                    id: "58",
                    name: "Frank Herbert",
                    about: "Franklin Patrick Herbert Jr. was an American science fiction author.",
                    gender: "male",
                    hometown: "Tacoma, Washington",
                    born_at: "1920/10/08",
                    died_at: "1986/02/11",
                    fans_count: 9044,
                    user_id: "",
                },
                Author {
                    id: "7401",
                    name: "Kyle Banks",
                    about: "",
                    gender: "",
                    hometown: "",
                    born_at: "",
                    died_at: "",
                    fans_count: 3,
                    user_id: "38763538",
                },
            ],
            books: vec![
                Book {
                    id: "375802",
                    work_id: 2422333,
                    isbn: "0812550706",
                    isbn13: "9780812550702",
                    title: "Ender's Game",
                    author_id: "589",
                    publisher: "Tor",
                    publication_year: 1985,
                    num_pages: 324,
                    editions: 254,
                    average_rating: "4.30",
                    ratings_count: 1_353_321,
                    reviews_count: 2_019_554,
                    text_reviews_count: 48_277,
                },
                Book {
                    id: "7967",
                    work_id: 1017,
                    isbn: "0812550757",
                    isbn13: "9780812550757",
                    title: "Speaker for the Dead",
                    author_id: "589",
                    publisher: "Tor",
                    publication_year: 1986,
                    num_pages: 382,
                    editions: 117,
                    average_rating: "4.07",
                    ratings_count: 220_571,
                    reviews_count: 330_114,
                    text_reviews_count: 8_956,
                },
                Book {
                    id: "234225",
                    work_id: 3634639,
                    isbn: "0441172717",
                    isbn13: "9780441172719",
                    title: "Dune",
                    author_id: "58",
                    publisher: "Ace Books",
                    publication_year: 1965,
                    num_pages: 535,
                    editions: 417,
                    average_rating: "4.25",
                    ratings_count: 1_004_452,
                    reviews_count: 1_620_334,
                    text_reviews_count: 29_040,
                },
                Book {
                    id: "44492285",
                    work_id: 3634570,
                    isbn: "0441104029",
                    isbn13: "9780441104024",
                    title: "Children of Dune",
                    author_id: "58",
                    publisher: "Ace Books",
                    publication_year: 1976,
                    num_pages: 444,
                    editions: 196,
                    average_rating: "3.94",
                    ratings_count: 151_778,
                    reviews_count: 219_200,
                    text_reviews_count: 3_504,
                },
            ],
            users: vec![User {
                id: "38763538",
                name: "Kyle Banks",
                location: "Toronto, ON, Canada",
                joined: "02/2015",
                friends_count: 12,
                shelves: vec![
                    Shelf {
                        id: 1,
                        name: "read",
                        exclusive: true,
                    },
                    Shelf {
                        id: 2,
                        name: "currently-reading",
                        exclusive: true,
                    },
                    Shelf {
                        id: 3,
                        name: "to-read",
                        exclusive: true,
                    },
                    Shelf {
                        id: 4,
                        name: "favorites",
                        exclusive: false,
                    },
                ],
            }],
            reviews: vec![
                Review {
                    id: "1001",
                    user_id: "38763538",
                    book_id: "375802",
                    shelf: "read",
                    rating: 5,
                    started_at: "Tue Jan 05 00:00:00 -0800 2016",
                    read_at: "Sun Jan 17 00:00:00 -0800 2016",
                    date_added: "Tue Jan 05 08:12:44 -0800 2016",
                    body: "A classic. <b>Loved it.</b>",
                },
                Review {
                    id: "1002",
                    user_id: "38763538",
                    book_id: "7967",
                    shelf: "read",
                    rating: 4,
                    started_at: "",
                    read_at: "Sat Mar 12 00:00:00 -0800 2016",
                    date_added: "Mon Feb 01 10:01:02 -0800 2016",
                    body: "",
                },
                Review {
                    id: "1003",
                    user_id: "38763538",
                    book_id: "234225",
                    shelf: "read",
                    rating: 3,
                    started_at: "",
                    read_at: "Fri Jul 01 00:00:00 -0700 2016",
                    date_added: "Wed Apr 06 19:45:00 -0700 2016",
                    body: "Slow start & worth it.",
                },
                Review {
                    id: "1004",
                    user_id: "38763538",
                    book_id: "44492285",
                    shelf: "to-read",
                    rating: 0,
                    started_at: "",
                    read_at: "",
                    date_added: "Thu Jul 07 21:00:00 -0700 2016",
                    body: "",
                },
            ],
            series: vec![
                Series {
                    id: "40321",
                    title: "Ender's Saga",
                    description: "The Ender Quintet.",
                    numbered: true,
                    works: vec![("1", "375802"), ("2", "7967")],
                },
                Series {
                    id: "45935",
                    title: "Dune",
                    description: "",
                    numbered: true,
                    works: vec![("1", "234225"), ("3", "44492285")],
                },
            ],
        }
    }
}
