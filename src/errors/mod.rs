//! Diagnostic types produced while parsing.
//!
//! Parse failures never abort a parse. They are recorded as [`errors::Error`]
//! values, each carrying:
//!
//! - The specific failure as an [`errors::ErrorImpl`] variant
//! - The literal text of the offending token
//! - A human-readable suggestion

pub mod errors;
