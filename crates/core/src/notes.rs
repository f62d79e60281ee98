//! Note and category constants, validation and category reference rules.
//!
//! Every write path normalizes user input through the functions here before
//! it reaches a store, so trimming and emptiness checks behave the same for
//! the PostgreSQL and in-memory backends.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a note title in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length of a category name in characters.
pub const MAX_CATEGORY_NAME_LENGTH: usize = 50;

/// Id of the category created by the initial migration.
pub const DEFAULT_CATEGORY_ID: DbId = 1;

/// Name of the category created by the initial migration.
pub const DEFAULT_CATEGORY_NAME: &str = "Misc";

/// Color of the category created by the initial migration.
pub const DEFAULT_CATEGORY_COLOR: &str = "#9e9e9e";

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Trim `value` and reject it if nothing is left.
fn required(label: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{label} is required")));
    }
    Ok(trimmed.to_string())
}

/// Trim `value`, reject it if empty or longer than `max` characters.
fn bounded(label: &str, value: &str, max: usize) -> Result<String, CoreError> {
    let trimmed = required(label, value)?;
    if trimmed.chars().count() > max {
        return Err(CoreError::Validation(format!(
            "{label} exceeds maximum length of {max} characters"
        )));
    }
    Ok(trimmed)
}

/// Validate and normalize a note title.
pub fn validate_title(title: &str) -> Result<String, CoreError> {
    bounded("Title", title, MAX_TITLE_LENGTH)
}

/// Validate and normalize a note description.
pub fn validate_description(description: &str) -> Result<String, CoreError> {
    required("Description", description)
}

/// Validate and normalize a category name.
pub fn validate_category_name(name: &str) -> Result<String, CoreError> {
    bounded("Name", name, MAX_CATEGORY_NAME_LENGTH)
}

/// Validate and normalize a category color.
///
/// Colors are expected to be hex codes like `#9e9e9e`, but only emptiness
/// is enforced.
pub fn validate_category_color(color: &str) -> Result<String, CoreError> {
    required("Color", color)
}

// ---------------------------------------------------------------------------
// Category references
// ---------------------------------------------------------------------------

/// How a note names its category on input.
///
/// Clients send `category_id` either as a numeric id or as a category name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    ById(DbId),
    ByName(String),
}

impl CategoryRef {
    /// The trimmed name for a `ByName` reference, `None` for an id or a blank name.
    pub fn name(&self) -> Option<&str> {
        match self {
            CategoryRef::ById(_) => None,
            CategoryRef::ByName(name) => Some(name.trim()).filter(|n| !n.is_empty()),
        }
    }
}

/// Rules for turning a [`CategoryRef`] into a concrete category id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryPolicy {
    /// Category used when a note omits its category.
    pub fallback_category_id: DbId,
    /// When set, an unknown category name is rejected instead of falling back.
    pub strict: bool,
}

impl Default for CategoryPolicy {
    fn default() -> Self {
        Self {
            fallback_category_id: DEFAULT_CATEGORY_ID,
            strict: false,
        }
    }
}

impl CategoryPolicy {
    /// Decide what an unresolvable category name maps to.
    pub fn on_unknown_name(&self, name: &str) -> Result<DbId, CoreError> {
        if self.strict {
            Err(CoreError::Validation(format!("Unknown category '{name}'")))
        } else {
            Ok(self.fallback_category_id)
        }
    }

    /// Whether `id` is the fallback category, which must not be deleted.
    pub fn is_fallback(&self, id: DbId) -> bool {
        id == self.fallback_category_id
    }
}

/// Parse the optional `targetCategoryId` of a category delete request.
///
/// Accepts `null`, a JSON integer, or a string holding an integer (HTML
/// selects submit strings). An empty string counts as absent.
pub fn parse_target_category_id(value: &Value) -> Result<Option<DbId>, CoreError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n.as_i64().map(Some).ok_or_else(|| {
            CoreError::Validation(format!("Invalid target category id: {n}"))
        }),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s.trim().parse::<DbId>().map(Some).map_err(|_| {
            CoreError::Validation(format!("Invalid target category id: '{s}'"))
        }),
        other => Err(CoreError::Validation(format!(
            "Invalid target category id: {other}"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    // -- field validation ----------------------------------------------------

    #[test]
    fn title_is_trimmed() {
        assert_eq!(validate_title("  Groceries \n").unwrap(), "Groceries");
    }

    #[test]
    fn blank_title_rejected() {
        let err = validate_title("   ").unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == "Title is required");
    }

    #[test]
    fn title_at_max_length_accepted() {
        let title = "t".repeat(MAX_TITLE_LENGTH);
        assert!(validate_title(&title).is_ok());
    }

    #[test]
    fn title_over_max_length_rejected() {
        let title = "t".repeat(MAX_TITLE_LENGTH + 1);
        let err = validate_title(&title).unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("exceeds maximum length"));
    }

    #[test]
    fn long_description_accepted() {
        let description = "d".repeat(50_000);
        assert_eq!(validate_description(&description).unwrap().len(), 50_000);
    }

    #[test]
    fn empty_description_rejected() {
        assert_matches!(validate_description(""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn category_fields_validated() {
        assert_eq!(validate_category_name(" Work ").unwrap(), "Work");
        assert_eq!(validate_category_color(" #2196f3").unwrap(), "#2196f3");
        assert_matches!(validate_category_name(""), Err(CoreError::Validation(_)));
        assert_matches!(validate_category_color("  "), Err(CoreError::Validation(_)));
    }

    #[test]
    fn color_format_not_enforced() {
        assert_eq!(validate_category_color("blue").unwrap(), "blue");
    }

    // -- CategoryRef ---------------------------------------------------------

    #[test]
    fn category_ref_from_number_and_string() {
        let by_id: CategoryRef = serde_json::from_value(json!(3)).unwrap();
        let by_name: CategoryRef = serde_json::from_value(json!("Work")).unwrap();
        assert_eq!(by_id, CategoryRef::ById(3));
        assert_eq!(by_name, CategoryRef::ByName("Work".to_string()));
    }

    #[test]
    fn blank_category_name_has_no_name() {
        assert_eq!(CategoryRef::ByName("  ".into()).name(), None);
        assert_eq!(CategoryRef::ByName(" Ideas ".into()).name(), Some("Ideas"));
        assert_eq!(CategoryRef::ById(1).name(), None);
    }

    // -- CategoryPolicy ------------------------------------------------------

    #[test]
    fn lenient_policy_falls_back() {
        let policy = CategoryPolicy::default();
        assert_eq!(policy.on_unknown_name("Nope").unwrap(), DEFAULT_CATEGORY_ID);
    }

    #[test]
    fn strict_policy_rejects_unknown_name() {
        let policy = CategoryPolicy {
            fallback_category_id: 4,
            strict: true,
        };
        assert_matches!(policy.on_unknown_name("Nope"), Err(CoreError::Validation(_)));
        assert!(policy.is_fallback(4));
        assert!(!policy.is_fallback(1));
    }

    // -- parse_target_category_id --------------------------------------------

    #[test]
    fn target_id_accepts_number_string_and_null() {
        assert_eq!(parse_target_category_id(&json!(null)).unwrap(), None);
        assert_eq!(parse_target_category_id(&json!(7)).unwrap(), Some(7));
        assert_eq!(parse_target_category_id(&json!("7")).unwrap(), Some(7));
        assert_eq!(parse_target_category_id(&json!("")).unwrap(), None);
    }

    #[test]
    fn target_id_rejects_garbage() {
        assert_matches!(
            parse_target_category_id(&json!("seven")),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            parse_target_category_id(&json!(1.5)),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            parse_target_category_id(&json!([1])),
            Err(CoreError::Validation(_))
        );
    }
}
