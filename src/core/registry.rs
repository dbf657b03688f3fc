//! Block type registry state
//!
//! `BlockTypesState` is the snapshot every selector reads from. It is never
//! mutated in place: each `with_*` method consumes the snapshot and returns a
//! new one in which only the touched field has a fresh `Arc`. Untouched
//! fields keep their allocation, which is what lets the memoized selectors
//! tell by identity whether their inputs changed.
//!
//! A snapshot can also be described as plain JSON (`StateSnapshot`) and
//! loaded with [`BlockTypesState::from_json`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::block_type::{BlockStyle, BlockType, BlockVariation};
use super::error::SelectorError;
use crate::categories::{Category, Collection};

/// Registered block types keyed by name, in registration order
pub type BlockTypeMap = IndexMap<String, Arc<BlockType>>;
/// Variations keyed by owning block name
pub type VariationMap = IndexMap<String, Vec<BlockVariation>>;
/// Style variants keyed by owning block name
pub type StyleMap = IndexMap<String, Vec<BlockStyle>>;
/// Collections keyed by namespace
pub type CollectionMap = IndexMap<String, Collection>;

/// Immutable snapshot of the block type registry
#[derive(Debug, Clone, Default)]
pub struct BlockTypesState {
    pub block_types: Arc<BlockTypeMap>,
    pub block_variations: Arc<VariationMap>,
    pub block_styles: Arc<StyleMap>,
    pub categories: Arc<Vec<Category>>,
    pub collections: Arc<CollectionMap>,
    pub default_block_name: Option<String>,
    pub freeform_fallback_name: Option<String>,
    pub unregistered_fallback_name: Option<String>,
    pub grouping_block_name: Option<String>,
}

impl BlockTypesState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a state from its JSON snapshot form
    ///
    /// # Example
    /// ```
    /// use block_types::core::registry::BlockTypesState;
    ///
    /// let state = BlockTypesState::from_json(
    ///     r#"{ "blockTypes": [{ "name": "core/paragraph", "title": "Paragraph" }] }"#,
    /// ).unwrap();
    /// assert!(state.block_type("core/paragraph").is_some());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SelectorError> {
        let snapshot: StateSnapshot = serde_json::from_str(json)?;
        tracing::debug!(
            block_types = snapshot.block_types.len(),
            categories = snapshot.categories.len(),
            "loaded block types state snapshot"
        );
        Ok(snapshot.into())
    }

    /// Serialize back to the JSON snapshot form
    pub fn to_json(&self) -> Result<String, SelectorError> {
        Ok(serde_json::to_string(&self.to_snapshot())?)
    }

    pub fn to_snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            block_types: self
                .block_types
                .values()
                .map(|block_type| BlockType::clone(block_type))
                .collect(),
            block_variations: VariationMap::clone(&self.block_variations),
            block_styles: StyleMap::clone(&self.block_styles),
            categories: Vec::clone(&self.categories),
            collections: CollectionMap::clone(&self.collections),
            default_block_name: self.default_block_name.clone(),
            freeform_fallback_name: self.freeform_fallback_name.clone(),
            unregistered_fallback_name: self.unregistered_fallback_name.clone(),
            grouping_block_name: self.grouping_block_name.clone(),
        }
    }

    /// Look up a block type by name
    pub fn block_type(&self, name: &str) -> Option<&BlockType> {
        self.block_types.get(name).map(Arc::as_ref)
    }

    /// Number of registered block types
    pub fn count(&self) -> usize {
        self.block_types.len()
    }

    /// Replace the block type map
    ///
    /// # Arguments
    /// * `block_types` - The complete new set, registered in iteration order
    ///
    /// # Returns
    /// * The state with a fresh `block_types` map; every other field keeps
    ///   its identity, so memoized aggregates over them stay valid
    pub fn with_block_types(mut self, block_types: impl IntoIterator<Item = BlockType>) -> Self {
        self.block_types = Arc::new(
            block_types
                .into_iter()
                .map(|block_type| (block_type.name.clone(), Arc::new(block_type)))
                .collect(),
        );
        self
    }

    /// Replace the variations stored for one block
    ///
    /// # Arguments
    /// * `block_name` - Owning block; need not be registered
    /// * `variations` - Replaces any list already stored for that block
    pub fn with_variations(
        mut self,
        block_name: impl Into<String>,
        variations: Vec<BlockVariation>,
    ) -> Self {
        let mut map = VariationMap::clone(&self.block_variations);
        map.insert(block_name.into(), variations);
        self.block_variations = Arc::new(map);
        self
    }

    /// Replace the style variants stored for one block
    pub fn with_styles(mut self, block_name: impl Into<String>, styles: Vec<BlockStyle>) -> Self {
        let mut map = StyleMap::clone(&self.block_styles);
        map.insert(block_name.into(), styles);
        self.block_styles = Arc::new(map);
        self
    }

    /// Replace the category list
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = Arc::new(categories);
        self
    }

    /// Add or replace the collection for a namespace
    ///
    /// # Arguments
    /// * `namespace` - Block name prefix, e.g. `core`
    /// * `collection` - Title and icon shown for that namespace
    pub fn with_collection(mut self, namespace: impl Into<String>, collection: Collection) -> Self {
        let mut map = CollectionMap::clone(&self.collections);
        map.insert(namespace.into(), collection);
        self.collections = Arc::new(map);
        self
    }

    /// Set or clear the default block name
    pub fn with_default_block_name(mut self, name: Option<impl Into<String>>) -> Self {
        self.default_block_name = name.map(Into::into);
        self
    }

    /// Set or clear the block used for raw HTML content
    pub fn with_freeform_fallback_name(mut self, name: Option<impl Into<String>>) -> Self {
        self.freeform_fallback_name = name.map(Into::into);
        self
    }

    /// Set or clear the block standing in for unregistered content
    pub fn with_unregistered_fallback_name(mut self, name: Option<impl Into<String>>) -> Self {
        self.unregistered_fallback_name = name.map(Into::into);
        self
    }

    /// Set or clear the block used to group a selection
    pub fn with_grouping_block_name(mut self, name: Option<impl Into<String>>) -> Self {
        self.grouping_block_name = name.map(Into::into);
        self
    }
}

/// Plain serialized description of a [`BlockTypesState`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StateSnapshot {
    pub block_types: Vec<BlockType>,
    pub block_variations: VariationMap,
    pub block_styles: StyleMap,
    pub categories: Vec<Category>,
    pub collections: CollectionMap,
    pub default_block_name: Option<String>,
    pub freeform_fallback_name: Option<String>,
    pub unregistered_fallback_name: Option<String>,
    pub grouping_block_name: Option<String>,
}

impl From<StateSnapshot> for BlockTypesState {
    fn from(snapshot: StateSnapshot) -> Self {
        BlockTypesState {
            block_types: Arc::new(
                snapshot
                    .block_types
                    .into_iter()
                    .map(|block_type| (block_type.name.clone(), Arc::new(block_type)))
                    .collect(),
            ),
            block_variations: Arc::new(snapshot.block_variations),
            block_styles: Arc::new(snapshot.block_styles),
            categories: Arc::new(snapshot.categories),
            collections: Arc::new(snapshot.collections),
            default_block_name: snapshot.default_block_name,
            freeform_fallback_name: snapshot.freeform_fallback_name,
            unregistered_fallback_name: snapshot.unregistered_fallback_name,
            grouping_block_name: snapshot.grouping_block_name,
        }
    }
}
