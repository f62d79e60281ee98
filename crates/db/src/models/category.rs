//! Category model.

use notes_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub color: String,
}

/// DTO for creating a new category.
///
/// Missing fields deserialize as empty strings so they fail validation
/// rather than body parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: String,
}

/// DTO for updating a category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub color: Option<String>,
}

/// Result of a successful category delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryDeletion {
    pub id: DbId,
    /// Category that inherited the deleted category's notes, if any.
    pub reassigned_to: Option<DbId>,
    pub reassigned_notes: i64,
}
