//! Rule evaluation
//!
//! One generic loop over the rule table. Validation is pure: same record in,
//! same violation set out, nothing mutated, nothing shared. Safe to call
//! concurrently from any number of threads.

use super::rules::{RuleOutcome, RULES};
use super::types::Book;
use super::violations::{ValidationError, Violation, ViolationSet};

/// Validates a book against every catalog rule.
///
/// Rules are evaluated independently and every failure is collected; one bad
/// field never masks another. An empty set means the record satisfies all
/// constraints. Never panics or errors for any `Book`.
pub fn validate(book: &Book) -> ViolationSet {
    let mut violations = ViolationSet::default();
    for rule in RULES {
        if (rule.check)(book) == RuleOutcome::Fail {
            violations.insert(Violation {
                field: rule.field,
                message: rule.message,
            });
        }
    }
    violations
}

impl Book {
    /// Validates this record, as a `Result` for `?`-style call sites.
    ///
    /// Equivalent to `validate(self).into_result()`.
    pub fn validated(&self) -> Result<(), ValidationError> {
        validate(self).into_result()
    }
}
