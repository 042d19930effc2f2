//! Violation reporting
//!
//! A failed rule yields a `Violation`, not an error: validation reports
//! findings as data and has no abnormal failure mode. `ValidationError`
//! adapts a non-empty set for callers that want a `Result`.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

use super::types::Field;

/// A single field constraint failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Violation {
    /// Field the failed rule applies to
    pub field: Field,
    /// Human-readable message, suitable for a client error response
    pub message: &'static str,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// The violations collected for one record. Empty means the record is
/// accepted.
///
/// Set semantics: no duplicates, order-irrelevant membership. Iteration is
/// deterministic (field, then message).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViolationSet(BTreeSet<Violation>);

impl ViolationSet {
    pub(crate) fn insert(&mut self, violation: Violation) {
        self.0.insert(violation);
    }

    /// Returns true when the record satisfied every rule.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of distinct violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates violations in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }

    /// Returns every violation message, for rendering to a client.
    pub fn messages(&self) -> Vec<&'static str> {
        self.0.iter().map(|v| v.message).collect()
    }

    /// Returns true when some violation carries exactly this message.
    pub fn contains_message(&self, message: &str) -> bool {
        self.0.iter().any(|v| v.message == message)
    }

    /// Converts into a `Result`: `Ok` when empty, otherwise a
    /// [`ValidationError`] carrying the set.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations: self })
        }
    }
}

impl fmt::Display for ViolationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation)?;
            first = false;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ViolationSet {
    type Item = &'a Violation;
    type IntoIter = std::collections::btree_set::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Returned by `Result`-oriented entry points when a record has violations.
///
/// Always carries a non-empty set; construct via [`ViolationSet::into_result`].
#[derive(Debug, Clone, Error)]
#[error("invalid book record: {violations}")]
pub struct ValidationError {
    violations: ViolationSet,
}

impl ValidationError {
    /// The violations that rejected the record.
    pub fn violations(&self) -> &ViolationSet {
        &self.violations
    }
}
