//! Selectors over a [`BlockTypesState`](crate::core::registry::BlockTypesState)
//!
//! Every selector is a pure read of the state passed to it. Most are free
//! functions; the two aggregates that must keep referential stability across
//! calls (`get_block_types`, `get_child_block_names`) are methods on
//! [`BlockTypeSelectors`], which owns their caches.
//!
//! Memoized results are only correct if states are replaced wholesale
//! between queries. See [`crate::core::registry`].

pub mod children;
pub mod matching;
pub mod names;
pub mod supports;
pub mod types;

use std::sync::Arc;

use crate::core::block_type::BlockType;
use crate::core::memo::{KeyedMemo, Memo};
use crate::core::registry::{BlockTypeMap, VariationMap};

pub use matching::is_matching_search_term;
pub use names::{
    get_categories, get_collections, get_default_block_name, get_freeform_fallback_block_name,
    get_grouping_block_name, get_unregistered_fallback_block_name,
};
pub use supports::{get_block_support, has_block_support};
pub use types::{
    get_active_block_variation, get_block_display_information, get_block_styles, get_block_type,
    get_block_variations, get_default_block_variation,
};

/// Holder of the memo caches behind the aggregate selectors
///
/// One instance is meant to live as long as the store it reads from. It is
/// `Send + Sync` and every method takes `&self`.
pub struct BlockTypeSelectors {
    block_types: Memo<(Arc<BlockTypeMap>, Arc<VariationMap>), Arc<Vec<Arc<BlockType>>>>,
    child_block_names: KeyedMemo<Arc<BlockTypeMap>, String, Arc<Vec<String>>>,
}

impl BlockTypeSelectors {
    pub fn new() -> Self {
        Self {
            block_types: Memo::new("get_block_types"),
            child_block_names: KeyedMemo::new("get_child_block_names"),
        }
    }

    /// Drop every cached result
    pub fn clear(&self) {
        self.block_types.clear();
        self.child_block_names.clear();
    }
}

impl Default for BlockTypeSelectors {
    fn default() -> Self {
        Self::new()
    }
}
