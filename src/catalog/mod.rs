//! Catalog record validation subsystem
//!
//! Book records are checked field by field against an explicit, enumerable
//! rule table. Each failed rule yields one `Violation`; the violations for a
//! record form a set, and an empty set means acceptance.
//!
//! # Design Principles
//!
//! - Every applicable rule runs; failures are collected, never short-circuited
//! - Violations are data, not errors
//! - Validation is deterministic and side-effect free
//! - Records are immutable; validation never mutates

mod rules;
mod types;
mod validator;
mod violations;

pub use types::{Book, Field};
pub use validator::validate;
pub use violations::{ValidationError, Violation, ViolationSet};
