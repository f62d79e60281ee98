//! Populate an empty store with the sample categories and notes.

use notes_core::sample_data::{SAMPLE_CATEGORIES, SAMPLE_NOTES};

use crate::error::StoreResult;
use crate::models::category::CreateCategory;
use crate::models::note::CreateNote;
use crate::store::NotesStore;

/// Insert the sample data unless the store already holds notes.
///
/// Categories that already exist (by name) are reused. Returns the number
/// of notes inserted.
pub async fn seed_sample_data(store: &dyn NotesStore) -> StoreResult<usize> {
    if !store.list_notes().await?.is_empty() {
        tracing::debug!("Store already has notes, skipping sample data");
        return Ok(0);
    }

    let mut category_ids = Vec::with_capacity(SAMPLE_CATEGORIES.len());
    for &(name, color) in SAMPLE_CATEGORIES {
        let category = match store.find_category_by_name(name).await? {
            Some(existing) => existing,
            None => {
                store
                    .create_category(&CreateCategory {
                        name: name.to_string(),
                        color: color.to_string(),
                    })
                    .await?
            }
        };
        category_ids.push((name, category.id));
    }

    for sample in SAMPLE_NOTES {
        let Some(&(_, category_id)) = category_ids
            .iter()
            .find(|(name, _)| *name == sample.category)
        else {
            continue;
        };
        store
            .create_note(&CreateNote {
                title: sample.title.to_string(),
                description: sample.description.to_string(),
                category_id,
            })
            .await?;
    }

    tracing::info!(
        categories = SAMPLE_CATEGORIES.len(),
        notes = SAMPLE_NOTES.len(),
        "Sample data seeded"
    );
    Ok(SAMPLE_NOTES.len())
}
