//! The catalog rule table
//!
//! Constraints are declared as an enumerable list of per-field rules, each
//! pairing a predicate with the message reported on failure. A generic loop
//! in `validator` evaluates them; no rule inspects another rule's outcome.
//!
//! Rule semantics:
//! - "Defined" for strings means non-blank (not empty, not whitespace-only)
//! - The ISBN format rule checks 10-character lexical shape only, no checksum
//! - A blank ISBN fails both the defined rule and the format rule
//! - The positive-price rule skips when no price is present, so a missing
//!   price yields exactly one violation

use regex::Regex;
use std::sync::OnceLock;

use super::types::{Book, Field};

/// ISBN-10 lexical shape: nine digits then a digit or 'X'.
const ISBN_PATTERN: &str = "^([0-9]{9}[0-9X])$";

pub const MSG_ISBN_REQUIRED: &str = "The book ISBN must be defined.";
pub const MSG_ISBN_FORMAT: &str = "The ISBN format must be valid.";
pub const MSG_TITLE_REQUIRED: &str = "The book title must be defined.";
pub const MSG_AUTHOR_REQUIRED: &str = "The book author must be defined.";
pub const MSG_PRICE_REQUIRED: &str = "The book price must be defined.";
pub const MSG_PRICE_POSITIVE: &str = "The book price must be greater than zero.";

/// Outcome of evaluating one rule against one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleOutcome {
    /// Constraint holds.
    Pass,
    /// Constraint violated; report the rule's message.
    Fail,
    /// Rule not applicable to this record.
    Skip,
}

/// A single field constraint.
pub struct Rule {
    /// Field the constraint applies to
    pub field: Field,
    /// Message reported when the rule fails
    pub message: &'static str,
    /// Predicate evaluated against the whole record
    pub check: fn(&Book) -> RuleOutcome,
}

/// Every catalog rule, evaluated independently for every record.
pub const RULES: &[Rule] = &[
    Rule {
        field: Field::Isbn,
        message: MSG_ISBN_REQUIRED,
        check: isbn_defined,
    },
    Rule {
        field: Field::Isbn,
        message: MSG_ISBN_FORMAT,
        check: isbn_format,
    },
    Rule {
        field: Field::Title,
        message: MSG_TITLE_REQUIRED,
        check: title_defined,
    },
    Rule {
        field: Field::Author,
        message: MSG_AUTHOR_REQUIRED,
        check: author_defined,
    },
    Rule {
        field: Field::Price,
        message: MSG_PRICE_REQUIRED,
        check: price_defined,
    },
    Rule {
        field: Field::Price,
        message: MSG_PRICE_POSITIVE,
        check: price_positive,
    },
];

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn outcome(holds: bool) -> RuleOutcome {
    if holds {
        RuleOutcome::Pass
    } else {
        RuleOutcome::Fail
    }
}

fn isbn_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ISBN_PATTERN).expect("ISBN pattern compiles"))
}

fn isbn_defined(book: &Book) -> RuleOutcome {
    outcome(!blank(book.isbn()))
}

fn isbn_format(book: &Book) -> RuleOutcome {
    outcome(isbn_regex().is_match(book.isbn()))
}

fn title_defined(book: &Book) -> RuleOutcome {
    outcome(!blank(book.title()))
}

fn author_defined(book: &Book) -> RuleOutcome {
    outcome(!blank(book.author()))
}

fn price_defined(book: &Book) -> RuleOutcome {
    outcome(book.price().is_some())
}

fn price_positive(book: &Book) -> RuleOutcome {
    match book.price() {
        // Absent price is the defined rule's finding, not a zero comparison
        None => RuleOutcome::Skip,
        Some(p) => outcome(p > 0.0),
    }
}
