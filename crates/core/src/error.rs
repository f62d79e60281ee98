use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A category still has notes attached and no reassignment target was given.
    #[error("Category {id} still has {note_count} associated notes")]
    CategoryInUse { id: DbId, note_count: i64 },

    #[error("Internal error: {0}")]
    Internal(String),
}
