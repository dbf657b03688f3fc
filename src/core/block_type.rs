//! Block type definitions and related types
//!
//! This module defines the metadata that describes a registered block type,
//! its variations and style variants, and the small value types the
//! selectors hand back (display information, name-or-type references).

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use super::registry::BlockTypesState;
use super::support::is_truthy;

/// Icon descriptor (a dashicon slug or a structured description)
///
/// Icons are carried through untouched; this layer never interprets them.
pub type Icon = Value;

/// Block attribute values, keyed by attribute name
pub type Attributes = serde_json::Map<String, Value>;

/// Signature of a variation predicate: `(block_attributes, variation_attributes)`
pub type MatcherFn = dyn Fn(&Attributes, &Attributes) -> bool + Send + Sync;

/// Scopes applied to a variation that declares none
pub const DEFAULT_VARIATION_SCOPES: &[VariationScope] =
    &[VariationScope::Block, VariationScope::Inserter];

/// A registered block type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockType {
    /// Unique block name, e.g. `core/paragraph`
    pub name: String,
    /// Human-readable title
    pub title: String,
    /// Icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category slug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Extra search keywords
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Block names this block may be nested in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Vec<String>>,
    /// Support tree (nested feature flags)
    #[serde(default)]
    pub supports: Value,
    /// Variations, filled in by `get_block_types`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variations: Vec<BlockVariation>,
    /// Rule deciding which variation a block instance corresponds to
    #[serde(rename = "isActive", default, skip_serializing_if = "Option::is_none")]
    pub variation_matcher: Option<VariationMatcher>,
}

impl BlockType {
    /// Create a block type with a name and title and everything else empty
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            icon: None,
            description: None,
            category: None,
            keywords: Vec::new(),
            parent: None,
            supports: Value::Null,
            variations: Vec::new(),
            variation_matcher: None,
        }
    }

    /// Set the icon
    pub fn with_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the category slug
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Replace the search keywords
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict the block to being nested in the given blocks
    ///
    /// # Arguments
    /// * `parent` - Allowed parent block names; an empty list allows none
    pub fn with_parent<I, S>(mut self, parent: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.parent = Some(parent.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the support tree
    pub fn with_supports(mut self, supports: Value) -> Self {
        self.supports = supports;
        self
    }

    /// Set the rule used to find the active variation
    pub fn with_matcher(mut self, matcher: VariationMatcher) -> Self {
        self.variation_matcher = Some(matcher);
        self
    }

    /// Whether `block_name` is listed as an allowed parent
    pub fn has_parent(&self, block_name: &str) -> bool {
        self.parent
            .as_ref()
            .is_some_and(|parents| parents.iter().any(|p| p == block_name))
    }
}

/// A named preset of a block type's attributes and display metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockVariation {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Where the variation is offered; `None` means [`DEFAULT_VARIATION_SCOPES`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<Vec<VariationScope>>,
    #[serde(default)]
    pub is_default: bool,
    /// Attribute values the variation presets
    #[serde(default)]
    pub attributes: Attributes,
}

impl BlockVariation {
    /// Create a variation with only a name; it is offered in the default scopes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: None,
            description: None,
            icon: None,
            category: None,
            keywords: Vec::new(),
            scope: None,
            is_default: false,
            attributes: Attributes::new(),
        }
    }

    /// Set the title shown in place of the block's
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description shown in place of the block's
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the icon shown in place of the block's
    pub fn with_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the scopes explicitly
    ///
    /// An empty list means the variation is offered nowhere.
    pub fn with_scope(mut self, scope: impl IntoIterator<Item = VariationScope>) -> Self {
        self.scope = Some(scope.into_iter().collect());
        self
    }

    /// Preset one attribute value
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Flag as the default variation
    pub fn as_default(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Scopes in effect, falling back to [`DEFAULT_VARIATION_SCOPES`]
    pub fn effective_scope(&self) -> &[VariationScope] {
        self.scope.as_deref().unwrap_or(DEFAULT_VARIATION_SCOPES)
    }

    /// Whether the variation is offered in `scope`
    pub fn is_in_scope(&self, scope: &VariationScope) -> bool {
        self.effective_scope().contains(scope)
    }
}

/// Context a variation is offered in
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VariationScope {
    /// Offered on a block instance (e.g. the placeholder picker)
    Block,
    /// Offered in the inserter
    Inserter,
    /// Offered as a transform target
    Transform,
    /// Any other tag
    Custom(String),
}

impl VariationScope {
    /// Tag as it appears in serialized form
    pub fn as_str(&self) -> &str {
        match self {
            VariationScope::Block => "block",
            VariationScope::Inserter => "inserter",
            VariationScope::Transform => "transform",
            VariationScope::Custom(tag) => tag,
        }
    }
}

impl From<&str> for VariationScope {
    fn from(tag: &str) -> Self {
        match tag {
            "block" => VariationScope::Block,
            "inserter" => VariationScope::Inserter,
            "transform" => VariationScope::Transform,
            other => VariationScope::Custom(other.to_string()),
        }
    }
}

impl From<String> for VariationScope {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "block" | "inserter" | "transform" => VariationScope::from(tag.as_str()),
            _ => VariationScope::Custom(tag),
        }
    }
}

impl From<VariationScope> for String {
    fn from(scope: VariationScope) -> Self {
        match scope {
            VariationScope::Custom(tag) => tag,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for VariationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule deciding which variation a block instance's attributes correspond to
#[derive(Clone)]
pub enum VariationMatcher {
    /// Arbitrary predicate over `(block_attributes, variation_attributes)`
    Predicate(Arc<MatcherFn>),
    /// Matches when every listed attribute is equal in both attribute maps
    Attributes(Vec<String>),
}

impl VariationMatcher {
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Attributes, &Attributes) -> bool + Send + Sync + 'static,
    {
        VariationMatcher::Predicate(Arc::new(f))
    }

    pub fn attributes<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        VariationMatcher::Attributes(names.into_iter().map(Into::into).collect())
    }

    pub fn matches(&self, block_attributes: &Attributes, variation: &BlockVariation) -> bool {
        match self {
            VariationMatcher::Predicate(f) => f(block_attributes, &variation.attributes),
            VariationMatcher::Attributes(names) => names
                .iter()
                .all(|name| block_attributes.get(name) == variation.attributes.get(name)),
        }
    }
}

impl fmt::Debug for VariationMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VariationMatcher::Predicate(_) => f.write_str("Predicate(..)"),
            VariationMatcher::Attributes(names) => {
                f.debug_tuple("Attributes").field(names).finish()
            }
        }
    }
}

// Only the attribute-list form has a serialized representation; predicates
// serialize as null.
impl Serialize for VariationMatcher {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            VariationMatcher::Predicate(_) => serializer.serialize_none(),
            VariationMatcher::Attributes(names) => names.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for VariationMatcher {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<String>::deserialize(deserializer).map(VariationMatcher::Attributes)
    }
}

/// A style variant registered for a block type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStyle {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_style: Option<String>,
}

/// Title, icon and description to show for a block instance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayInformation {
    pub title: String,
    pub icon: Option<Icon>,
    pub description: Option<String>,
}

impl From<&BlockType> for DisplayInformation {
    fn from(block_type: &BlockType) -> Self {
        Self {
            title: block_type.title.clone(),
            icon: block_type.icon.clone(),
            description: block_type.description.clone(),
        }
    }
}

impl DisplayInformation {
    /// Overlay the fields a variation sets, keeping the rest
    ///
    /// Empty strings and falsy icons (`null`, `false`, `0`, `""`) count as
    /// unset.
    pub fn overlay(mut self, variation: &BlockVariation) -> Self {
        if let Some(title) = variation.title.as_ref().filter(|t| !t.is_empty()) {
            self.title = title.clone();
        }
        if let Some(icon) = variation.icon.as_ref().filter(|icon| is_truthy(icon)) {
            self.icon = Some(icon.clone());
        }
        if let Some(description) = variation.description.as_ref().filter(|d| !d.is_empty()) {
            self.description = Some(description.clone());
        }
        self
    }
}

/// A block given either by name or as an already-resolved block type
#[derive(Debug, Clone, Copy)]
pub enum BlockTypeRef<'a> {
    Name(&'a str),
    Type(&'a BlockType),
}

impl<'a> BlockTypeRef<'a> {
    /// Resolve to a block type, looking names up in `state`
    pub fn resolve(self, state: &'a BlockTypesState) -> Option<&'a BlockType> {
        match self {
            BlockTypeRef::Name(name) => state.block_type(name),
            BlockTypeRef::Type(block_type) => Some(block_type),
        }
    }

    pub fn name(&self) -> &'a str {
        match *self {
            BlockTypeRef::Name(name) => name,
            BlockTypeRef::Type(block_type) => &block_type.name,
        }
    }
}

impl<'a> From<&'a str> for BlockTypeRef<'a> {
    fn from(name: &'a str) -> Self {
        BlockTypeRef::Name(name)
    }
}

impl<'a> From<&'a String> for BlockTypeRef<'a> {
    fn from(name: &'a String) -> Self {
        BlockTypeRef::Name(name)
    }
}

impl<'a> From<&'a BlockType> for BlockTypeRef<'a> {
    fn from(block_type: &'a BlockType) -> Self {
        BlockTypeRef::Type(block_type)
    }
}

impl<'a> From<&'a Arc<BlockType>> for BlockTypeRef<'a> {
    fn from(block_type: &'a Arc<BlockType>) -> Self {
        BlockTypeRef::Type(block_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_variation_default_scope() {
        let variation = BlockVariation::new("plain");
        assert!(variation.is_in_scope(&VariationScope::Block));
        assert!(variation.is_in_scope(&VariationScope::Inserter));
        assert!(!variation.is_in_scope(&VariationScope::Transform));
    }

    #[test]
    fn test_variation_explicit_empty_scope() {
        let variation = BlockVariation::new("hidden").with_scope([]);
        assert!(!variation.is_in_scope(&VariationScope::Block));
        assert!(!variation.is_in_scope(&VariationScope::Inserter));
    }

    #[test]
    fn test_scope_serialization() {
        let scopes: Vec<VariationScope> =
            serde_json::from_value(json!(["block", "transform", "toolbar"])).unwrap();
        assert_eq!(
            scopes,
            vec![
                VariationScope::Block,
                VariationScope::Transform,
                VariationScope::Custom("toolbar".into()),
            ]
        );
        assert_eq!(
            serde_json::to_value(&scopes).unwrap(),
            json!(["block", "transform", "toolbar"])
        );
    }

    #[test]
    fn test_block_type_deserialization() {
        let block_type: BlockType = serde_json::from_value(json!({
            "name": "core/embed",
            "title": "Embed",
            "category": "embed",
            "keywords": ["video"],
            "supports": { "align": true },
            "isActive": ["providerNameSlug"]
        }))
        .unwrap();

        assert_eq!(block_type.name, "core/embed");
        assert_eq!(block_type.category.as_deref(), Some("embed"));
        assert_eq!(block_type.supports, json!({ "align": true }));
        assert!(matches!(
            block_type.variation_matcher,
            Some(VariationMatcher::Attributes(ref names)) if names == &["providerNameSlug"]
        ));
        assert!(block_type.parent.is_none());
    }

    #[test]
    fn test_attribute_matcher() {
        let matcher = VariationMatcher::attributes(["providerNameSlug"]);
        let youtube = BlockVariation::new("youtube").with_attribute("providerNameSlug", "youtube");

        let mut attributes = Attributes::new();
        attributes.insert("providerNameSlug".into(), json!("youtube"));
        attributes.insert("url".into(), json!("https://youtu.be/x"));
        assert!(matcher.matches(&attributes, &youtube));

        attributes.insert("providerNameSlug".into(), json!("vimeo"));
        assert!(!matcher.matches(&attributes, &youtube));
    }

    #[test]
    fn test_predicate_matcher() {
        let matcher = VariationMatcher::predicate(|block, variation| {
            block.get("level") == variation.get("level")
        });
        let h2 = BlockVariation::new("h2").with_attribute("level", 2);

        let mut attributes = Attributes::new();
        attributes.insert("level".into(), json!(2));
        assert!(matcher.matches(&attributes, &h2));
        assert_eq!(format!("{:?}", matcher), "Predicate(..)");
    }

    #[test]
    fn test_display_information_overlay() {
        let block_type = BlockType::new("core/embed", "Embed")
            .with_icon("embed-generic")
            .with_description("Embed content");
        let variation = BlockVariation::new("youtube").with_title("YouTube");

        let info = DisplayInformation::from(&block_type).overlay(&variation);
        assert_eq!(info.title, "YouTube");
        assert_eq!(info.icon, Some(json!("embed-generic")));
        assert_eq!(info.description.as_deref(), Some("Embed content"));
    }

    #[test]
    fn test_display_information_overlay_skips_falsy_fields() {
        let block_type = BlockType::new("core/embed", "Embed")
            .with_icon("base")
            .with_description("Embed content");

        for icon in [json!(""), json!(false), json!(0), Value::Null] {
            let variation = BlockVariation::new("blank")
                .with_title("")
                .with_description("")
                .with_icon(icon);

            let info = DisplayInformation::from(&block_type).overlay(&variation);
            assert_eq!(info.title, "Embed");
            assert_eq!(info.icon, Some(json!("base")));
            assert_eq!(info.description.as_deref(), Some("Embed content"));
        }
    }

    #[test]
    fn test_has_parent() {
        let column = BlockType::new("core/column", "Column").with_parent(["core/columns"]);
        assert!(column.has_parent("core/columns"));
        assert!(!column.has_parent("core/group"));
        assert!(!BlockType::new("core/group", "Group").has_parent("core/columns"));
    }
}
