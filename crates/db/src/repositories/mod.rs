//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async SQL methods that
//! take an explicit `&mut PgConnection`, so callers decide whether a call
//! runs on a pooled connection or inside a transaction.

pub mod category_repo;
pub mod note_repo;

pub use category_repo::CategoryRepo;
pub use note_repo::NoteRepo;
