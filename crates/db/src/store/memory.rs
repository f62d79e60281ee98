//! In-memory [`NotesStore`] for tests and database-less local runs.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use notes_core::error::CoreError;
use notes_core::notes::{DEFAULT_CATEGORY_COLOR, DEFAULT_CATEGORY_NAME};
use notes_core::types::DbId;
use tokio::sync::RwLock;

use super::{category_not_found, check_target_differs, duplicate_name, NotesStore};
use crate::error::StoreResult;
use crate::models::category::{Category, CategoryDeletion, CreateCategory, UpdateCategory};
use crate::models::note::{CreateNote, Note, UpdateNote};

#[derive(Debug, Clone)]
struct MemoryState {
    categories: BTreeMap<DbId, Category>,
    notes: BTreeMap<DbId, Note>,
    next_category_id: DbId,
    next_note_id: DbId,
}

impl MemoryState {
    fn empty() -> Self {
        Self {
            categories: BTreeMap::new(),
            notes: BTreeMap::new(),
            next_category_id: 1,
            next_note_id: 1,
        }
    }

    fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.values().find(|c| c.name == name)
    }

    fn insert_category(&mut self, name: &str, color: &str) -> Category {
        let category = Category {
            id: self.next_category_id,
            name: name.to_string(),
            color: color.to_string(),
        };
        self.next_category_id += 1;
        self.categories.insert(category.id, category.clone());
        category
    }

    fn require_category(&self, id: DbId) -> Result<(), CoreError> {
        if self.categories.contains_key(&id) {
            Ok(())
        } else {
            Err(CoreError::Validation(format!("Category {id} does not exist")))
        }
    }

    fn count_notes_in(&self, category_id: DbId) -> i64 {
        self.notes
            .values()
            .filter(|n| n.category_id == category_id)
            .count() as i64
    }

    fn reassign_notes(&mut self, from: DbId, to: DbId) -> i64 {
        let mut moved = 0;
        for note in self.notes.values_mut().filter(|n| n.category_id == from) {
            note.category_id = to;
            moved += 1;
        }
        moved
    }
}

/// Store holding both tables in process memory.
///
/// Writers are serialized by a [`RwLock`]. Multi-step mutations run against
/// a copy of the state that replaces the live state only when every step
/// succeeded. Foreign keys are checked the way the database checks them,
/// as validation errors.
#[derive(Debug)]
pub struct MemoryNotesStore {
    state: RwLock<MemoryState>,
    /// Makes the next category delete fail after its notes were moved.
    #[cfg(test)]
    fail_next_category_removal: std::sync::atomic::AtomicBool,
}

impl Default for MemoryNotesStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryNotesStore {
    /// A store holding only the fallback category (id 1), like a freshly
    /// migrated database.
    pub fn new() -> Self {
        let mut state = MemoryState::empty();
        state.insert_category(DEFAULT_CATEGORY_NAME, DEFAULT_CATEGORY_COLOR);
        Self {
            state: RwLock::new(state),
            #[cfg(test)]
            fail_next_category_removal: std::sync::atomic::AtomicBool::new(false),
        }
    }

    /// Run `f` against a working copy and publish it only if `f` succeeds.
    async fn transaction<T>(
        &self,
        f: impl FnOnce(&mut MemoryState) -> Result<T, CoreError>,
    ) -> StoreResult<T> {
        let mut live = self.state.write().await;
        let mut working = live.clone();
        let out = f(&mut working)?;
        *live = working;
        Ok(out)
    }
}

#[async_trait]
impl NotesStore for MemoryNotesStore {
    async fn health_check(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.state.read().await.categories.values().cloned().collect())
    }

    async fn find_category(&self, id: DbId) -> StoreResult<Option<Category>> {
        Ok(self.state.read().await.categories.get(&id).cloned())
    }

    async fn find_category_by_name(&self, name: &str) -> StoreResult<Option<Category>> {
        Ok(self.state.read().await.category_by_name(name).cloned())
    }

    async fn create_category(&self, input: &CreateCategory) -> StoreResult<Category> {
        self.transaction(|state| {
            if state.category_by_name(&input.name).is_some() {
                return Err(duplicate_name(&input.name));
            }
            Ok(state.insert_category(&input.name, &input.color))
        })
        .await
    }

    async fn update_category(
        &self,
        id: DbId,
        input: &UpdateCategory,
    ) -> StoreResult<Option<Category>> {
        self.transaction(|state| {
            if let Some(name) = &input.name {
                if state.category_by_name(name).is_some_and(|c| c.id != id) {
                    return Err(duplicate_name(name));
                }
            }
            let Some(category) = state.categories.get_mut(&id) else {
                return Ok(None);
            };
            if let Some(name) = &input.name {
                category.name = name.clone();
            }
            if let Some(color) = &input.color {
                category.color = color.clone();
            }
            Ok(Some(category.clone()))
        })
        .await
    }

    async fn delete_category(
        &self,
        id: DbId,
        target: Option<DbId>,
    ) -> StoreResult<CategoryDeletion> {
        self.transaction(|state| {
            if !state.categories.contains_key(&id) {
                return Err(category_not_found(id));
            }

            let reassigned_notes = match target {
                None => {
                    let note_count = state.count_notes_in(id);
                    if note_count > 0 {
                        return Err(CoreError::CategoryInUse { id, note_count });
                    }
                    0
                }
                Some(target) => {
                    check_target_differs(id, target)?;
                    if !state.categories.contains_key(&target) {
                        return Err(category_not_found(target));
                    }
                    state.reassign_notes(id, target)
                }
            };

            #[cfg(test)]
            if self
                .fail_next_category_removal
                .swap(false, std::sync::atomic::Ordering::SeqCst)
            {
                return Err(CoreError::Internal("category removal failed".to_string()));
            }

            state.categories.remove(&id);
            Ok(CategoryDeletion {
                id,
                reassigned_to: target,
                reassigned_notes,
            })
        })
        .await
    }

    async fn list_notes(&self) -> StoreResult<Vec<Note>> {
        let state = self.state.read().await;
        let mut notes: Vec<Note> = state.notes.values().cloned().collect();
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        Ok(notes)
    }

    async fn find_note(&self, id: DbId) -> StoreResult<Option<Note>> {
        Ok(self.state.read().await.notes.get(&id).cloned())
    }

    async fn create_note(&self, input: &CreateNote) -> StoreResult<Note> {
        self.transaction(|state| {
            state.require_category(input.category_id)?;
            let note = Note {
                id: state.next_note_id,
                title: input.title.clone(),
                description: input.description.clone(),
                category_id: input.category_id,
                updated_at: Utc::now(),
            };
            state.next_note_id += 1;
            state.notes.insert(note.id, note.clone());
            Ok(note)
        })
        .await
    }

    async fn update_note(&self, id: DbId, input: &UpdateNote) -> StoreResult<Option<Note>> {
        self.transaction(|state| {
            if let Some(category_id) = input.category_id {
                state.require_category(category_id)?;
            }
            let Some(note) = state.notes.get_mut(&id) else {
                return Ok(None);
            };
            if let Some(title) = &input.title {
                note.title = title.clone();
            }
            if let Some(description) = &input.description {
                note.description = description.clone();
            }
            if let Some(category_id) = input.category_id {
                note.category_id = category_id;
            }
            note.updated_at = Utc::now();
            Ok(Some(note.clone()))
        })
        .await
    }

    async fn delete_note(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.state.write().await.notes.remove(&id).is_some())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
