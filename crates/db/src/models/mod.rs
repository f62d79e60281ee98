//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` request DTOs as sent by clients
//! - Normalized create/update inputs handed to the store

pub mod category;
pub mod note;
