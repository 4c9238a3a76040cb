//! Auth types shared across the Foodoo backend.
//!
//! Provides JWT issue/validation and the `Identity` bearer-token extractor.

pub mod bearer;
pub mod token;
