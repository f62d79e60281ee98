//! Shared domain types, errors and validation rules for the notes service.

pub mod error;
pub mod notes;
pub mod sample_data;
pub mod types;
