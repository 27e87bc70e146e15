//! # Dotted-path lookup in JSON
//!
//! Notion's record maps are deeply nested JSON. Instead of chains of
//! `.get()` calls, callers write `"value.properties.title.0.0"` and get the
//! leaf back, or a default when any step is missing.
//!
//! Lookup is all-or-nothing: on arrays a segment must parse as a non-negative
//! index in range, on objects it must be a present key, and scalars cannot be
//! indexed at all. The first failing step ends the walk.

use serde_json::Value;

static NULL: Value = Value::Null;

/// An ordered list of keys into a JSON tree.
///
/// Built from a string by splitting on `.`. An empty string is a single
/// empty key, not the empty path, so `""` only matches a `""` key at the
/// root. Use [`KeyPath::root`] to address the tree itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct KeyPath(pub Vec<String>);

impl KeyPath {
    pub fn root() -> Self {
        KeyPath(Vec::new())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for KeyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl From<&str> for KeyPath {
    fn from(s: &str) -> Self {
        KeyPath(s.split('.').map(str::to_string).collect())
    }
}

impl From<String> for KeyPath {
    fn from(s: String) -> Self {
        KeyPath::from(s.as_str())
    }
}

impl From<Vec<String>> for KeyPath {
    fn from(segments: Vec<String>) -> Self {
        KeyPath(segments)
    }
}

impl From<&[&str]> for KeyPath {
    fn from(segments: &[&str]) -> Self {
        KeyPath(segments.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for KeyPath {
    fn from(segments: [&str; N]) -> Self {
        KeyPath(segments.iter().map(|s| s.to_string()).collect())
    }
}

/// Walks `obj` along `path`, returning `None` as soon as a step fails.
///
/// ```
/// use notion_utils::path::get_by_path;
/// use serde_json::json;
///
/// let record = json!({"items": [{"name": "first"}]});
/// assert_eq!(get_by_path("items.0.name", &record), Some(&json!("first")));
/// assert_eq!(get_by_path(["items", "1"], &record), None);
/// ```
pub fn get_by_path<'a>(path: impl Into<KeyPath>, obj: &'a Value) -> Option<&'a Value> {
    let path = path.into();
    let mut value = obj;

    for (depth, key) in path.segments().iter().enumerate() {
        let next = match value {
            Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
            Value::Object(map) => map.get(key),
            _ => None,
        };

        match next {
            Some(v) => value = v,
            None => {
                tracing::debug!(path = %path, depth, key = key.as_str(), "path lookup missed");
                return None;
            }
        }
    }

    Some(value)
}

/// Like [`get_by_path`], falling back to `default` on a miss.
pub fn get_by_path_or<'a>(
    path: impl Into<KeyPath>,
    obj: &'a Value,
    default: &'a Value,
) -> &'a Value {
    get_by_path(path, obj).unwrap_or(default)
}

/// Like [`get_by_path`], falling back to JSON `null` on a miss.
pub fn get_by_path_or_null(path: impl Into<KeyPath>, obj: &Value) -> &Value {
    get_by_path(path, obj).unwrap_or(&NULL)
}

/// Wraps a value in a list unless it already is one.
pub fn to_list(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => vec![other],
    }
}
