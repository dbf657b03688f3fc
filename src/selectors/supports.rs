//! Support introspection selectors

use serde_json::Value;

use crate::core::block_type::BlockTypeRef;
use crate::core::registry::BlockTypesState;
use crate::core::support::{is_truthy, FeaturePath};

/// Value of a feature in a block type's support tree
///
/// `default` is returned when the block is not registered, any segment of
/// `feature` is missing, or the value found there is `null`.
///
/// # Example
/// ```
/// use block_types::core::block_type::BlockType;
/// use block_types::core::registry::BlockTypesState;
/// use block_types::selectors::get_block_support;
/// use serde_json::{json, Value};
///
/// let state = BlockTypesState::new().with_block_types([BlockType::new("core/image", "Image")
///     .with_supports(json!({ "color": { "background": true } }))]);
///
/// let off = Value::Bool(false);
/// let background = get_block_support(&state, "core/image", "color.background", off.clone());
/// assert_eq!(background, json!(true));
/// assert_eq!(get_block_support(&state, "core/image", "color.text", off), json!(false));
/// ```
pub fn get_block_support<'a>(
    state: &'a BlockTypesState,
    block: impl Into<BlockTypeRef<'a>>,
    feature: impl Into<FeaturePath>,
    default: Value,
) -> Value {
    let block: BlockTypeRef<'a> = block.into();
    let Some(block_type) = block.resolve(state) else {
        return default;
    };
    let feature: FeaturePath = feature.into();
    feature
        .lookup(&block_type.supports)
        .filter(|value| !value.is_null())
        .cloned()
        .unwrap_or(default)
}

/// Whether a block type supports a feature
pub fn has_block_support<'a>(
    state: &'a BlockTypesState,
    block: impl Into<BlockTypeRef<'a>>,
    feature: impl Into<FeaturePath>,
    default_supports: bool,
) -> bool {
    is_truthy(&get_block_support(
        state,
        block,
        feature,
        Value::Bool(default_supports),
    ))
}
