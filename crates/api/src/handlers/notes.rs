//! Handlers for notes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use notes_core::error::CoreError;
use notes_core::notes::{validate_description, validate_title, CategoryRef};
use notes_core::types::DbId;
use notes_db::models::note::{CreateNote, CreateNoteRequest, UpdateNote, UpdateNoteRequest};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

fn note_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Note", id })
}

/// Turn a client category reference into the id of an existing category.
///
/// - omitted, or a blank name: the fallback category;
/// - a name: the matching category, or whatever the policy says for
///   unknown names;
/// - an id: used as is.
///
/// The resulting id must refer to a present category.
async fn resolve_category(state: &AppState, reference: Option<&CategoryRef>) -> AppResult<DbId> {
    let policy = state.config.category_policy;

    let id = match reference {
        Some(CategoryRef::ById(id)) => *id,
        Some(by_name) => match by_name.name() {
            Some(name) => match state.store.find_category_by_name(name).await? {
                Some(category) => return Ok(category.id),
                None => policy.on_unknown_name(name)?,
            },
            None => policy.fallback_category_id,
        },
        None => policy.fallback_category_id,
    };

    if state.store.find_category(id).await?.is_none() {
        return Err(CoreError::Validation(format!("Category {id} does not exist")).into());
    }
    Ok(id)
}

/// GET /notes
///
/// List all notes, most recently updated first.
pub async fn list_notes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let notes = state.store.list_notes().await?;
    Ok(Json(notes))
}

/// GET /notes/{id}
pub async fn get_note(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let note = state
        .store
        .find_note(id)
        .await?
        .ok_or_else(|| note_not_found(id))?;

    Ok(Json(note))
}

/// POST /notes
///
/// Create a note. Title and description are trimmed and must not be empty.
pub async fn create_note(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateNoteRequest>,
) -> AppResult<impl IntoResponse> {
    let title = validate_title(&input.title)?;
    let description = validate_description(&input.description)?;
    let category_id = resolve_category(&state, input.category_id.as_ref()).await?;

    let note = state
        .store
        .create_note(&CreateNote {
            title,
            description,
            category_id,
        })
        .await?;

    tracing::info!(
        note_id = note.id,
        category_id = note.category_id,
        "Note created"
    );

    Ok((StatusCode::CREATED, Json(note)))
}

/// PUT /notes/{id}
///
/// Partially update a note. Only supplied fields change; `updated_at` is
/// always refreshed.
pub async fn update_note(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateNoteRequest>,
) -> AppResult<impl IntoResponse> {
    if state.store.find_note(id).await?.is_none() {
        return Err(note_not_found(id));
    }

    let title = input.title.as_deref().map(validate_title).transpose()?;
    let description = input
        .description
        .as_deref()
        .map(validate_description)
        .transpose()?;
    let category_id = match &input.category_id {
        Some(reference) => Some(resolve_category(&state, Some(reference)).await?),
        None => None,
    };

    let note = state
        .store
        .update_note(
            id,
            &UpdateNote {
                title,
                description,
                category_id,
            },
        )
        .await?
        .ok_or_else(|| note_not_found(id))?;

    tracing::info!(note_id = id, category_id = note.category_id, "Note updated");

    Ok(Json(note))
}

/// DELETE /notes/{id}
pub async fn delete_note(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    if !state.store.delete_note(id).await? {
        return Err(note_not_found(id));
    }

    tracing::info!(note_id = id, "Note deleted");

    Ok(Json(json!({ "message": "Note deleted successfully" })))
}
