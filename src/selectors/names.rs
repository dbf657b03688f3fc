//! Category, collection and well-known block name selectors
//!
//! These are plain reads of the state with no computation.

use crate::categories::Category;
use crate::core::registry::{BlockTypesState, CollectionMap};

/// Block categories, in the order they were registered
pub fn get_categories(state: &BlockTypesState) -> &[Category] {
    &state.categories
}

/// Collections keyed by block name namespace
///
/// # Returns
/// * Every registered collection; empty when none are registered
pub fn get_collections(state: &BlockTypesState) -> &CollectionMap {
    &state.collections
}

/// Name of the block inserted by default
pub fn get_default_block_name(state: &BlockTypesState) -> Option<&str> {
    state.default_block_name.as_deref()
}

/// Name of the block that holds non-block (freeform) content
pub fn get_freeform_fallback_block_name(state: &BlockTypesState) -> Option<&str> {
    state.freeform_fallback_name.as_deref()
}

/// Name of the block that stands in for unregistered blocks
pub fn get_unregistered_fallback_block_name(state: &BlockTypesState) -> Option<&str> {
    state.unregistered_fallback_name.as_deref()
}

/// Name of the block used to group other blocks
pub fn get_grouping_block_name(state: &BlockTypesState) -> Option<&str> {
    state.grouping_block_name.as_deref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::Collection;

    #[test]
    fn test_well_known_names() {
        let state = BlockTypesState::new()
            .with_default_block_name(Some("core/paragraph"))
            .with_freeform_fallback_name(Some("core/freeform"))
            .with_unregistered_fallback_name(Some("core/missing"))
            .with_grouping_block_name(Some("core/group"));

        assert_eq!(get_default_block_name(&state), Some("core/paragraph"));
        assert_eq!(get_freeform_fallback_block_name(&state), Some("core/freeform"));
        assert_eq!(get_unregistered_fallback_block_name(&state), Some("core/missing"));
        assert_eq!(get_grouping_block_name(&state), Some("core/group"));
    }

    #[test]
    fn test_names_absent_by_default() {
        let state = BlockTypesState::new();
        assert!(get_default_block_name(&state).is_none());
        assert!(get_freeform_fallback_block_name(&state).is_none());
        assert!(get_unregistered_fallback_block_name(&state).is_none());
        assert!(get_grouping_block_name(&state).is_none());
    }

    #[test]
    fn test_categories_and_collections_pass_through() {
        let state = BlockTypesState::new()
            .with_categories(vec![Category::new("text", "Text"), Category::new("media", "Media")])
            .with_collection("core", Collection::new("Core"));

        let categories = get_categories(&state);
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[1].slug, "media");
        assert!(std::ptr::eq(categories, state.categories.as_slice()));

        assert_eq!(get_collections(&state)["core"].title, "Core");
    }
}
