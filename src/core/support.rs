//! Support tree traversal
//!
//! A block type's `supports` is a nested JSON object of feature flags and
//! settings, e.g. `{ "color": { "background": true, "text": false } }`.
//! Features are addressed by a path of keys, usually written dotted
//! (`"color.background"`).

use serde_json::Value;

/// Path of keys into a support tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturePath(Vec<String>);

impl FeaturePath {
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Follow the path through `tree`
    ///
    /// Returns `None` when a segment is missing or the walk reaches a value
    /// that is not an object. An explicit `null` at the end of the path is
    /// present and returned as such.
    pub fn lookup<'a>(&self, tree: &'a Value) -> Option<&'a Value> {
        self.0
            .iter()
            .try_fold(tree, |node, segment| node.as_object()?.get(segment))
    }
}

impl From<&str> for FeaturePath {
    fn from(path: &str) -> Self {
        FeaturePath(path.split('.').map(str::to_string).collect())
    }
}

impl From<&String> for FeaturePath {
    fn from(path: &String) -> Self {
        FeaturePath::from(path.as_str())
    }
}

impl From<&[&str]> for FeaturePath {
    fn from(segments: &[&str]) -> Self {
        FeaturePath(segments.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for FeaturePath {
    fn from(segments: [&str; N]) -> Self {
        FeaturePath(segments.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<String>> for FeaturePath {
    fn from(segments: Vec<String>) -> Self {
        FeaturePath(segments)
    }
}

/// JavaScript-style truthiness of a support value
///
/// `false`, `null`, zero and the empty string are falsy; every other value,
/// including empty objects and arrays, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
