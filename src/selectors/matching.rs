//! Search matching selectors

use std::sync::Arc;

use super::BlockTypeSelectors;
use crate::core::block_type::{BlockType, BlockTypeRef};
use crate::core::error::SelectorError;
use crate::core::registry::BlockTypesState;
use crate::core::search::SearchTerm;

/// Whether a block type matches a search term
///
/// The term and each candidate are compared with diacritics removed,
/// lowercased and trimmed. Candidates are the title, each keyword and the
/// category.
pub fn is_matching_search_term<'a>(
    state: &'a BlockTypesState,
    block: impl Into<BlockTypeRef<'a>>,
    search_term: &str,
) -> Result<bool, SelectorError> {
    let block: BlockTypeRef<'a> = block.into();
    let block_type = block.resolve(state).ok_or_else(|| {
        tracing::debug!(block = block.name(), "search match requested for unregistered block");
        SelectorError::BlockTypeNotFound(block.name().to_string())
    })?;

    Ok(matches_term(block_type, &SearchTerm::new(search_term)))
}

fn matches_term(block_type: &BlockType, term: &SearchTerm) -> bool {
    term.matches(&block_type.title)
        || block_type.keywords.iter().any(|keyword| term.matches(keyword))
        || block_type
            .category
            .as_deref()
            .is_some_and(|category| term.matches(category))
}

impl BlockTypeSelectors {
    /// Registered block types matching a search term, in registration order
    pub fn search_block_types(
        &self,
        state: &BlockTypesState,
        search_term: &str,
    ) -> Vec<Arc<BlockType>> {
        let term = SearchTerm::new(search_term);
        self.get_block_types(state)
            .iter()
            .filter(|block_type| matches_term(block_type, &term))
            .cloned()
            .collect()
    }
}
