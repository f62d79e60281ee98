//! The storage capability handlers depend on.
//!
//! [`NotesStore`] is object safe so the API holds an `Arc<dyn NotesStore>`
//! and never knows which backend it talks to. Both implementations enforce
//! the same rules:
//!
//! - category names are unique ([`CoreError::Conflict`]);
//! - a category with notes is only deleted when a reassignment target is
//!   given ([`CoreError::CategoryInUse`] otherwise), and reassignment plus
//!   delete commit together or not at all.
//!
//! Inputs are expected to be normalized by `notes_core::notes` first.

mod memory;
mod postgres;

use async_trait::async_trait;
use notes_core::error::CoreError;
use notes_core::types::DbId;

pub use memory::MemoryNotesStore;
pub use postgres::PgNotesStore;

use crate::error::StoreResult;
use crate::models::category::{Category, CategoryDeletion, CreateCategory, UpdateCategory};
use crate::models::note::{CreateNote, Note, UpdateNote};

#[async_trait]
pub trait NotesStore: Send + Sync {
    /// Verify the backend is reachable.
    async fn health_check(&self) -> StoreResult<()>;

    /// List all categories, ordered by id.
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    async fn find_category(&self, id: DbId) -> StoreResult<Option<Category>>;

    async fn find_category_by_name(&self, name: &str) -> StoreResult<Option<Category>>;

    /// Insert a category. Fails with a conflict if the name is taken.
    async fn create_category(&self, input: &CreateCategory) -> StoreResult<Category>;

    /// Apply a partial update. `Ok(None)` if the category does not exist.
    async fn update_category(
        &self,
        id: DbId,
        input: &UpdateCategory,
    ) -> StoreResult<Option<Category>>;

    /// Delete a category, moving its notes to `target` when given.
    async fn delete_category(
        &self,
        id: DbId,
        target: Option<DbId>,
    ) -> StoreResult<CategoryDeletion>;

    /// List all notes, most recently updated first.
    async fn list_notes(&self) -> StoreResult<Vec<Note>>;

    async fn find_note(&self, id: DbId) -> StoreResult<Option<Note>>;

    async fn create_note(&self, input: &CreateNote) -> StoreResult<Note>;

    /// Apply a partial update and refresh `updated_at`. `Ok(None)` if absent.
    async fn update_note(&self, id: DbId, input: &UpdateNote) -> StoreResult<Option<Note>>;

    /// Delete a note. Returns `true` if it existed.
    async fn delete_note(&self, id: DbId) -> StoreResult<bool>;
}

fn category_not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: "Category",
        id,
    }
}

fn duplicate_name(name: &str) -> CoreError {
    CoreError::Conflict(format!("A category named '{name}' already exists"))
}

/// Reject a reassignment target equal to the category being deleted.
fn check_target_differs(id: DbId, target: DbId) -> Result<(), CoreError> {
    if id == target {
        return Err(CoreError::Validation(
            "Cannot reassign notes to the category being deleted".to_string(),
        ));
    }
    Ok(())
}
