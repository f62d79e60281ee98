//! Repository for the `notes` table.

use notes_core::types::DbId;
use sqlx::PgConnection;

use crate::models::note::{CreateNote, Note, UpdateNote};

/// Column list for notes queries.
const COLUMNS: &str = "id, title, description, category_id, updated_at";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// List all notes, most recently updated first.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes ORDER BY updated_at DESC, id DESC");
        sqlx::query_as::<_, Note>(&query)
            .fetch_all(&mut *conn)
            .await
    }

    /// Find a note by its ID.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Create a new note stamped with the current time.
    pub async fn create(conn: &mut PgConnection, input: &CreateNote) -> Result<Note, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (title, description, category_id, updated_at)
             VALUES ($1, $2, $3, NOW())
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category_id)
            .fetch_one(&mut *conn)
            .await
    }

    /// Update a note by ID. Only non-`None` fields are applied; `updated_at`
    /// is always refreshed.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                category_id = COALESCE($4, category_id),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category_id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Delete a note by ID. Returns `true` if a row was deleted.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count the notes filed under a category.
    pub async fn count_by_category(
        conn: &mut PgConnection,
        category_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM notes WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(&mut *conn)
            .await?;
        Ok(count.0)
    }

    /// Move every note of `from` to `to`. Returns the number of notes moved.
    ///
    /// `updated_at` is left alone: the notes themselves did not change.
    pub async fn reassign_category(
        conn: &mut PgConnection,
        from: DbId,
        to: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE notes SET category_id = $2 WHERE category_id = $1")
            .bind(from)
            .bind(to)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }
}
