//! Note model.

use notes_core::notes::CategoryRef;
use notes_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `notes` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category_id: DbId,
    pub updated_at: Timestamp,
}

/// Request body for creating a note.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category_id: Option<CategoryRef>,
}

/// Request body for updating a note. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<CategoryRef>,
}

/// Validated input for inserting a note.
#[derive(Debug, Clone)]
pub struct CreateNote {
    pub title: String,
    pub description: String,
    pub category_id: DbId,
}

/// Validated partial update of a note.
#[derive(Debug, Clone, Default)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<DbId>,
}
