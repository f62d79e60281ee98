//! PostgreSQL-backed [`NotesStore`].

use async_trait::async_trait;
use notes_core::error::CoreError;
use notes_core::types::DbId;

use super::{category_not_found, check_target_differs, duplicate_name, NotesStore};
use crate::error::StoreResult;
use crate::models::category::{Category, CategoryDeletion, CreateCategory, UpdateCategory};
use crate::models::note::{CreateNote, Note, UpdateNote};
use crate::repositories::{CategoryRepo, NoteRepo};
use crate::DbPool;

/// Store that runs every call on a pooled connection.
///
/// Single-statement operations use a plain connection; anything that reads
/// before it writes runs in a transaction. A transaction dropped on an
/// error path rolls back.
#[derive(Clone)]
pub struct PgNotesStore {
    pool: DbPool,
}

impl PgNotesStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotesStore for PgNotesStore {
    async fn health_check(&self) -> StoreResult<()> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let mut conn = self.pool.acquire().await?;
        Ok(CategoryRepo::list(&mut conn).await?)
    }

    async fn find_category(&self, id: DbId) -> StoreResult<Option<Category>> {
        let mut conn = self.pool.acquire().await?;
        Ok(CategoryRepo::find_by_id(&mut conn, id).await?)
    }

    async fn find_category_by_name(&self, name: &str) -> StoreResult<Option<Category>> {
        let mut conn = self.pool.acquire().await?;
        Ok(CategoryRepo::find_by_name(&mut conn, name).await?)
    }

    async fn create_category(&self, input: &CreateCategory) -> StoreResult<Category> {
        let mut tx = self.pool.begin().await?;

        // The unique constraint still backs this up under concurrent inserts.
        if CategoryRepo::find_by_name(&mut tx, &input.name).await?.is_some() {
            return Err(duplicate_name(&input.name).into());
        }
        let category = CategoryRepo::create(&mut tx, input).await?;

        tx.commit().await?;
        Ok(category)
    }

    async fn update_category(
        &self,
        id: DbId,
        input: &UpdateCategory,
    ) -> StoreResult<Option<Category>> {
        let mut tx = self.pool.begin().await?;

        if let Some(name) = &input.name {
            if let Some(existing) = CategoryRepo::find_by_name(&mut tx, name).await? {
                if existing.id != id {
                    return Err(duplicate_name(name).into());
                }
            }
        }
        let category = CategoryRepo::update(&mut tx, id, input).await?;

        tx.commit().await?;
        Ok(category)
    }

    async fn delete_category(
        &self,
        id: DbId,
        target: Option<DbId>,
    ) -> StoreResult<CategoryDeletion> {
        let mut tx = self.pool.begin().await?;

        let lock_ids = match target {
            Some(target) if target != id => vec![id, target],
            _ => vec![id],
        };
        let locked = CategoryRepo::lock_by_ids(&mut tx, &lock_ids).await?;
        if !locked.contains(&id) {
            return Err(category_not_found(id).into());
        }

        let reassigned_notes = match target {
            None => {
                let note_count = NoteRepo::count_by_category(&mut tx, id).await?;
                if note_count > 0 {
                    return Err(CoreError::CategoryInUse { id, note_count }.into());
                }
                0
            }
            Some(target) => {
                check_target_differs(id, target)?;
                if !locked.contains(&target) {
                    return Err(category_not_found(target).into());
                }
                NoteRepo::reassign_category(&mut tx, id, target).await? as i64
            }
        };

        if !CategoryRepo::delete(&mut tx, id).await? {
            return Err(category_not_found(id).into());
        }

        tx.commit().await?;
        Ok(CategoryDeletion {
            id,
            reassigned_to: target,
            reassigned_notes,
        })
    }

    async fn list_notes(&self) -> StoreResult<Vec<Note>> {
        let mut conn = self.pool.acquire().await?;
        Ok(NoteRepo::list(&mut conn).await?)
    }

    async fn find_note(&self, id: DbId) -> StoreResult<Option<Note>> {
        let mut conn = self.pool.acquire().await?;
        Ok(NoteRepo::find_by_id(&mut conn, id).await?)
    }

    async fn create_note(&self, input: &CreateNote) -> StoreResult<Note> {
        let mut conn = self.pool.acquire().await?;
        Ok(NoteRepo::create(&mut conn, input).await?)
    }

    async fn update_note(&self, id: DbId, input: &UpdateNote) -> StoreResult<Option<Note>> {
        let mut conn = self.pool.acquire().await?;
        Ok(NoteRepo::update(&mut conn, id, input).await?)
    }

    async fn delete_note(&self, id: DbId) -> StoreResult<bool> {
        let mut conn = self.pool.acquire().await?;
        Ok(NoteRepo::delete(&mut conn, id).await?)
    }
}
