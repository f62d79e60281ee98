//! Request handlers.
//!
//! Each submodule provides async handler functions for one entity type.
//! Handlers normalize input through `notes_core::notes`, delegate to the
//! [`NotesStore`](notes_db::store::NotesStore) in [`AppState`](crate::state::AppState),
//! and map errors via [`AppError`](crate::error::AppError).

pub mod categories;
pub mod notes;
