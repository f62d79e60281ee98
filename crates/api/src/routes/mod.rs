pub mod categories;
pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /notes                      list, create
/// /notes/{id}                 get, update, delete
///
/// /categories                 list, create
/// /categories/{id}            get, update, delete (optional reassignment body)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/notes", notes::router())
        .nest("/categories", categories::router())
}
