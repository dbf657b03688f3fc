//! Core block type abstractions
//!
//! This module defines the block type data model, the registry state the
//! selectors read, and the supporting pieces they are built from: support
//! tree traversal, search normalization and identity-keyed memoization.

pub mod block_type;
pub mod error;
pub mod memo;
pub mod registry;
pub mod search;
pub mod support;

pub use block_type::{
    Attributes, BlockStyle, BlockType, BlockTypeRef, BlockVariation, DisplayInformation, Icon,
    VariationMatcher, VariationScope,
};
pub use error::SelectorError;
pub use registry::{BlockTypesState, StateSnapshot};
pub use support::FeaturePath;
