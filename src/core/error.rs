//! Error types for the selector layer

/// Selector error types
///
/// Most selectors degrade to an absent or empty result and never error. Only
/// the selectors that need a registered block type to produce anything
/// meaningful report [`SelectorError::BlockTypeNotFound`].
#[derive(Debug, thiserror::Error)]
pub enum SelectorError {
    /// The block name did not resolve to a registered block type
    #[error("Block type not found: {0}")]
    BlockTypeNotFound(String),

    /// A state snapshot could not be parsed
    #[error("Invalid state snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
