//! Handlers for note categories.
//!
//! Category deletion follows a two-step protocol: a plain delete of a
//! category that still has notes is refused with the dependent note count,
//! and the client retries with `targetCategoryId` to move those notes.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::{json, Value};

use notes_core::error::CoreError;
use notes_core::notes::{parse_target_category_id, validate_category_color, validate_category_name};
use notes_core::types::DbId;
use notes_db::models::category::{CreateCategory, UpdateCategory};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::state::AppState;

fn category_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}

/// Read `targetCategoryId` from an optional JSON body.
///
/// An empty body, or a body without the key, means no reassignment.
fn parse_delete_body(body: &[u8]) -> AppResult<Option<DbId>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))?;
    match value.get("targetCategoryId") {
        Some(target) => Ok(parse_target_category_id(target)?),
        None => Ok(None),
    }
}

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = state.store.list_categories().await?;
    Ok(Json(categories))
}

/// GET /categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = state
        .store
        .find_category(id)
        .await?
        .ok_or_else(|| category_not_found(id))?;

    Ok(Json(category))
}

/// POST /categories
///
/// Create a category. Name and color are required; names are unique.
pub async fn create_category(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let input = CreateCategory {
        name: validate_category_name(&input.name)?,
        color: validate_category_color(&input.color)?,
    };

    let category = state.store.create_category(&input).await?;

    tracing::info!(
        category_id = category.id,
        name = %category.name,
        "Category created"
    );

    Ok((StatusCode::CREATED, Json(category)))
}

/// PUT /categories/{id}
///
/// Rename or recolor a category.
pub async fn update_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    let input = UpdateCategory {
        name: input.name.as_deref().map(validate_category_name).transpose()?,
        color: input.color.as_deref().map(validate_category_color).transpose()?,
    };

    let category = state
        .store
        .update_category(id, &input)
        .await?
        .ok_or_else(|| category_not_found(id))?;

    tracing::info!(category_id = id, "Category updated");

    Ok(Json(category))
}

/// DELETE /categories/{id}
///
/// Optional body: `{ "targetCategoryId": <id> }`. The fallback category
/// cannot be deleted.
pub async fn delete_category(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let target = parse_delete_body(&body)?;

    if state.config.category_policy.is_fallback(id) {
        return Err(CoreError::Validation(
            "The default category cannot be deleted".to_string(),
        )
        .into());
    }

    let deletion = state.store.delete_category(id, target).await?;

    tracing::info!(
        category_id = id,
        reassigned_to = ?deletion.reassigned_to,
        reassigned_notes = deletion.reassigned_notes,
        "Category deleted"
    );

    Ok(Json(json!({
        "message": "Category deleted successfully",
        "reassignedNotes": deletion.reassigned_notes,
    })))
}
