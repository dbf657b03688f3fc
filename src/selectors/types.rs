//! Block type, variation and style selectors

use std::sync::Arc;

use super::BlockTypeSelectors;
use crate::core::block_type::{
    Attributes, BlockStyle, BlockType, BlockVariation, DisplayInformation, VariationScope,
};
use crate::core::error::SelectorError;
use crate::core::registry::BlockTypesState;

/// Look up a block type by name
pub fn get_block_type<'a>(state: &'a BlockTypesState, name: &str) -> Option<&'a BlockType> {
    state.block_type(name)
}

/// Variations stored for a block, optionally restricted to a scope
///
/// Returns `None` when nothing is stored for the block. With a scope, only
/// variations whose effective scope contains it are kept; a variation that
/// declares no scope is offered in `block` and `inserter`.
pub fn get_block_variations<'a>(
    state: &'a BlockTypesState,
    block_name: &str,
    scope: Option<&VariationScope>,
) -> Option<Vec<&'a BlockVariation>> {
    let variations = state.block_variations.get(block_name)?;
    Some(
        variations
            .iter()
            .filter(|variation| scope.map_or(true, |scope| variation.is_in_scope(scope)))
            .collect(),
    )
}

/// The variation a new block of this type starts as
///
/// The last variation flagged `is_default` wins; without one, the first
/// variation is used.
pub fn get_default_block_variation<'a>(
    state: &'a BlockTypesState,
    block_name: &str,
    scope: Option<&VariationScope>,
) -> Option<&'a BlockVariation> {
    let variations = get_block_variations(state, block_name, scope)?;
    variations
        .iter()
        .rev()
        .find(|variation| variation.is_default)
        .or_else(|| variations.first())
        .copied()
}

/// The first variation the block type's matcher accepts for `attributes`
///
/// `None` when the block is not registered, declares no matcher, or has no
/// variations in scope.
pub fn get_active_block_variation<'a>(
    state: &'a BlockTypesState,
    block_name: &str,
    attributes: &Attributes,
    scope: Option<&VariationScope>,
) -> Option<&'a BlockVariation> {
    let matcher = state.block_type(block_name)?.variation_matcher.as_ref()?;
    get_block_variations(state, block_name, scope)?
        .into_iter()
        .find(|variation| matcher.matches(attributes, variation))
}

/// Title, icon and description to show for a block instance
///
/// Starts from the block type's own values and overlays whichever of them
/// the active variation sets.
pub fn get_block_display_information(
    state: &BlockTypesState,
    name: &str,
    attributes: &Attributes,
) -> Result<DisplayInformation, SelectorError> {
    let block_type = state.block_type(name).ok_or_else(|| {
        tracing::debug!(block = name, "display information requested for unregistered block");
        SelectorError::BlockTypeNotFound(name.to_string())
    })?;

    let info = DisplayInformation::from(block_type);
    Ok(match get_active_block_variation(state, name, attributes, None) {
        Some(variation) => info.overlay(variation),
        None => info,
    })
}

/// Style variants registered for a block
pub fn get_block_styles<'a>(
    state: &'a BlockTypesState,
    block_name: &str,
) -> Option<&'a [BlockStyle]> {
    state.block_styles.get(block_name).map(Vec::as_slice)
}

impl BlockTypeSelectors {
    /// Every registered block type, annotated with its variations
    ///
    /// The same `Arc` is returned for as long as neither the block type map
    /// nor the variation map of the state is replaced.
    pub fn get_block_types(&self, state: &BlockTypesState) -> Arc<Vec<Arc<BlockType>>> {
        let deps = (state.block_types.clone(), state.block_variations.clone());
        self.block_types.get_or_compute(deps, || {
            Arc::new(
                state
                    .block_types
                    .values()
                    .map(|block_type| {
                        let mut annotated = BlockType::clone(block_type);
                        annotated.variations = get_block_variations(state, &block_type.name, None)
                            .map(|variations| variations.into_iter().cloned().collect())
                            .unwrap_or_default();
                        Arc::new(annotated)
                    })
                    .collect(),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::block_type::VariationMatcher;
    use serde_json::json;

    fn heading_state() -> BlockTypesState {
        BlockTypesState::new()
            .with_block_types([BlockType::new("core/heading", "Heading")
                .with_icon("heading")
                .with_description("Introduce new sections")
                .with_matcher(VariationMatcher::attributes(["level"]))])
            .with_variations(
                "core/heading",
                vec![
                    BlockVariation::new("h1").with_title("Heading 1").with_attribute("level", 1),
                    BlockVariation::new("h2")
                        .with_title("Heading 2")
                        .with_icon("heading-level-2")
                        .with_attribute("level", 2),
                    BlockVariation::new("h3").with_attribute("level", 3).with_scope([
                        VariationScope::Transform,
                    ]),
                ],
            )
    }

    fn attributes(value: serde_json::Value) -> Attributes {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_get_block_type() {
        let state = heading_state();
        let block_type = get_block_type(&state, "core/heading").unwrap();
        assert!(std::ptr::eq(block_type, state.block_types["core/heading"].as_ref()));
        assert!(get_block_type(&state, "core/missing").is_none());
    }

    #[test]
    fn test_get_block_variations_scope_filter() {
        let state = heading_state();

        let all = get_block_variations(&state, "core/heading", None).unwrap();
        assert_eq!(all.len(), 3);

        let inserter = get_block_variations(&state, "core/heading", Some(&VariationScope::Inserter))
            .unwrap();
        let names: Vec<_> = inserter.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["h1", "h2"]);

        let transform =
            get_block_variations(&state, "core/heading", Some(&VariationScope::Transform)).unwrap();
        assert_eq!(transform.len(), 1);
        assert_eq!(transform[0].name, "h3");
    }

    #[test]
    fn test_get_block_variations_absent() {
        let state = heading_state();
        assert!(get_block_variations(&state, "core/paragraph", None).is_none());
    }

    #[test]
    fn test_active_variation_requires_matcher() {
        let state = BlockTypesState::new()
            .with_block_types([BlockType::new("core/group", "Group")])
            .with_variations("core/group", vec![BlockVariation::new("row")]);

        let active = get_active_block_variation(&state, "core/group", &Attributes::new(), None);
        assert!(active.is_none());
    }

    #[test]
    fn test_active_variation_respects_scope() {
        let state = heading_state();
        let level_three = attributes(json!({ "level": 3 }));

        let unscoped = get_active_block_variation(&state, "core/heading", &level_three, None);
        assert_eq!(unscoped.map(|v| v.name.as_str()), Some("h3"));

        let inserter = get_active_block_variation(
            &state,
            "core/heading",
            &level_three,
            Some(&VariationScope::Inserter),
        );
        assert!(inserter.is_none());
    }

    #[test]
    fn test_display_information_overlays_matched_variation() {
        let state = heading_state();
        let block_attributes = attributes(json!({ "level": 2 }));
        let info =
            get_block_display_information(&state, "core/heading", &block_attributes).unwrap();

        assert_eq!(info.title, "Heading 2");
        assert_eq!(info.icon, Some(json!("heading-level-2")));
        assert_eq!(info.description.as_deref(), Some("Introduce new sections"));
    }

    #[test]
    fn test_display_information_without_match() {
        let state = heading_state();
        let block_attributes = attributes(json!({ "level": 6 }));
        let info =
            get_block_display_information(&state, "core/heading", &block_attributes).unwrap();

        assert_eq!(info.title, "Heading");
        assert_eq!(info.icon, Some(json!("heading")));
    }

    #[test]
    fn test_display_information_unregistered() {
        let state = heading_state();
        let result = get_block_display_information(&state, "core/missing", &Attributes::new());
        assert!(matches!(
            result,
            Err(SelectorError::BlockTypeNotFound(name)) if name == "core/missing"
        ));
    }

    #[test]
    fn test_get_block_styles() {
        let state = heading_state().with_styles(
            "core/heading",
            vec![BlockStyle {
                name: "fancy".into(),
                label: Some("Fancy".into()),
                is_default: false,
                inline_style: None,
            }],
        );

        let styles = get_block_styles(&state, "core/heading").unwrap();
        assert_eq!(styles.len(), 1);
        assert_eq!(styles[0].name, "fancy");
        assert!(get_block_styles(&state, "core/paragraph").is_none());
    }

    #[test]
    fn test_get_block_types_annotates_variations() {
        let state = heading_state()
            .with_block_types([
                BlockType::new("core/paragraph", "Paragraph"),
                BlockType::new("core/heading", "Heading"),
            ]);
        let selectors = BlockTypeSelectors::new();

        let block_types = selectors.get_block_types(&state);
        assert_eq!(block_types.len(), 2);
        assert_eq!(block_types[0].name, "core/paragraph");
        assert!(block_types[0].variations.is_empty());
        assert_eq!(block_types[1].variations.len(), 3);
        assert!(state.block_types["core/heading"].variations.is_empty());
    }
}
