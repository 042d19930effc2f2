//! catalog-validation - Strict, deterministic validation for book catalog records
//!
//! Exposes a pure `validate` contract over immutable `Book` records. A
//! surrounding catalog service constructs records from incoming payloads,
//! validates them here, and decides how to surface any violations.

pub mod catalog;
