//! Record types for the catalog domain
//!
//! `Book` is an immutable value object: five fields fixed at construction,
//! compared by contents, never by identity. `Field` names the fields for
//! violation reporting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a `Book` field, as reported in violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// ISBN-10 identifier
    Isbn,
    /// Book title
    Title,
    /// Book author
    Author,
    /// Sale price
    Price,
    /// Publisher name (no constraints)
    Publisher,
}

impl Field {
    /// Returns the field name used in violation reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Isbn => "isbn",
            Field::Title => "title",
            Field::Author => "author",
            Field::Price => "price",
            Field::Publisher => "publisher",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable book record as exchanged with the catalog service.
///
/// Created once via [`Book::of`] and read through accessors; there is no
/// mutation API. A missing price is `None` — payloads may omit it, and the
/// validator reports the omission rather than guessing a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    isbn: String,
    title: String,
    author: String,
    price: Option<f64>,
    publisher: String,
}

impl Book {
    /// Creates a book from the five catalog fields, in order.
    pub fn of(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        price: Option<f64>,
        publisher: impl Into<String>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            price,
            publisher: publisher.into(),
        }
    }

    /// Returns the ISBN as supplied, unnormalized.
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the price, if one was supplied.
    pub fn price(&self) -> Option<f64> {
        self.price
    }

    /// Returns the publisher.
    pub fn publisher(&self) -> &str {
        &self.publisher
    }
}
