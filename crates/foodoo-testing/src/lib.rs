//! Test utilities for the Foodoo backend.
//!
//! Provides bearer-token minting for authenticated test requests.
//! Import in `#[cfg(test)]` blocks or `tests/` only — never in production code.

pub mod auth;
