//! Parent/child relationship selectors

use std::sync::Arc;

use super::supports::has_block_support;
use super::BlockTypeSelectors;
use crate::core::registry::BlockTypesState;

impl BlockTypeSelectors {
    /// Names of registered block types that list `block_name` as a parent
    ///
    /// Results are cached per `block_name` until the state's block type map
    /// is replaced.
    pub fn get_child_block_names(
        &self,
        state: &BlockTypesState,
        block_name: &str,
    ) -> Arc<Vec<String>> {
        self.child_block_names
            .get_or_compute(state.block_types.clone(), block_name, || {
                Arc::new(
                    state
                        .block_types
                        .values()
                        .filter(|block_type| block_type.has_parent(block_name))
                        .map(|block_type| block_type.name.clone())
                        .collect(),
                )
            })
    }

    pub fn has_child_blocks(&self, state: &BlockTypesState, block_name: &str) -> bool {
        !self.get_child_block_names(state, block_name).is_empty()
    }

    /// Whether any child block can be added from the inserter
    pub fn has_child_blocks_with_inserter_support(
        &self,
        state: &BlockTypesState,
        block_name: &str,
    ) -> bool {
        self.get_child_block_names(state, block_name)
            .iter()
            .any(|child| has_block_support(state, child, "inserter", true))
    }
}
