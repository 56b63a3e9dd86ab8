//! Shared domain types, errors, and validation helpers for the museum API.
//!
//! This crate performs no I/O; both `museum-db` and `museum-api` depend on it.

pub mod error;
pub mod museum;
pub mod types;
pub mod validation;
