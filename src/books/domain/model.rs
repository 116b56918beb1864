use std::fmt;
use std::fmt::{Display, Formatter};
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::ReadStatus;

// Book abstracts one title of the personal collection. Title and author are fixed at
// construction; rating and read flag change only through the catalog's mutators.
// Duplicate (title, author) pairs are legal, book_id tells them apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    book_id: String,
    title: String,
    author: String,
    rating: i32,
    read: bool,
}

impl Book {
    pub fn new(title: &str, author: &str, rating: i32) -> Self {
        Self {
            book_id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            author: author.to_string(),
            rating,
            read: false,
        }
    }

    /// Builds a book carrying the sentinel rating 0.
    pub fn unrated(title: &str, author: &str) -> Self {
        Self::new(title, author, 0)
    }

    pub fn book_id(&self) -> &str {
        self.book_id.as_str()
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn author(&self) -> &str {
        self.author.as_str()
    }

    pub fn rating(&self) -> i32 {
        self.rating
    }

    pub fn is_read(&self) -> bool {
        self.read
    }

    pub fn status(&self) -> ReadStatus {
        ReadStatus::from_flag(self.read)
    }

    pub fn is_rated(&self) -> bool {
        self.rating != 0
    }

    pub fn has_title(&self, query: &str) -> bool {
        self.title.eq_ignore_ascii_case(query)
    }

    pub fn has_author(&self, query: &str) -> bool {
        self.author.eq_ignore_ascii_case(query)
    }

    pub(crate) fn set_read(&mut self, read: bool) {
        self.read = read;
    }

    pub(crate) fn set_rating(&mut self, rating: i32) {
        self.rating = rating;
    }
}

impl Identifiable for Book {
    fn id(&self) -> String {
        self.book_id.to_string()
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}, Rating: {} ({})", self.title, self.author, self.rating, self.status())
    }
}
