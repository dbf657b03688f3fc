//! Block categories and collections
//!
//! Categories group block types in the inserter; collections group them by
//! namespace. Both are flat and carry display metadata only.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::block_type::Icon;

/// Block category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category key referenced by `BlockType::category`
    pub slug: String,
    /// Human-readable title
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

impl Category {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            icon: None,
        }
    }

    /// Get a human-readable name for the category
    pub fn display_name(&self) -> &str {
        &self.title
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Block collection, keyed by namespace in the state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
}

impl Collection {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_display() {
        let category = Category::new("text", "Text");
        assert_eq!(category.to_string(), "Text");
    }

    #[test]
    fn test_category_deserialization() {
        let category: Category = serde_json::from_value(json!({
            "slug": "media",
            "title": "Media",
            "icon": "format-image"
        }))
        .unwrap();
        assert_eq!(category.slug, "media");
        assert_eq!(category.icon, Some(json!("format-image")));
    }
}
