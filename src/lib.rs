//! Block Types - read-only selectors over a block type registry
//!
//! This crate provides the query layer over an in-memory registry of block
//! type definitions: lookups, variation resolution, support introspection,
//! search matching and parent/child relationships.

pub mod categories;
pub mod core;
pub mod selectors;
mod tests;

// Re-export commonly used types
pub use crate::categories::{Category, Collection};
pub use crate::core::{
    BlockType, BlockTypeRef, BlockTypesState, BlockVariation, SelectorError, VariationScope,
};
pub use crate::selectors::BlockTypeSelectors;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
