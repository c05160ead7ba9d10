use crate::identifiers::TagName;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Separator used by the delimited form of a required-tag field.
pub const TAG_DELIMITER: char = ',';

/// Required-tag specification as stored on an event.
///
/// Both shapes are equivalent once normalized: `"a, b, c"` and
/// `["a", "b", "c"]` produce the same [`RequiredTags`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequiredTagSpec {
    /// Ordered list of tag names.
    List(Vec<String>),
    /// Single comma-delimited string of tag names.
    Delimited(String),
}

impl RequiredTagSpec {
    /// Interprets a raw event field value.
    ///
    /// Null, empty strings, booleans and objects carry no requirement and
    /// yield `None`. Arrays keep their string and numeric entries; numbers
    /// are read as their decimal rendering, as are bare numeric fields.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(Self::Delimited(s.clone())),
            Value::Number(n) => Some(Self::Delimited(n.to_string())),
            Value::Array(items) => Some(Self::List(
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect(),
            )),
            Value::Null | Value::Bool(_) | Value::Object(_) => None,
        }
    }

    /// Normalizes to an ordered list of trimmed, non-empty tag names.
    ///
    /// Order and duplicates are preserved.
    pub fn normalize(&self) -> RequiredTags {
        let names: Vec<TagName> = match self {
            Self::List(items) => items.iter().filter_map(|s| trimmed(s)).collect(),
            Self::Delimited(s) => s.split(TAG_DELIMITER).filter_map(trimmed).collect(),
        };
        RequiredTags(names)
    }
}

fn trimmed(s: &str) -> Option<TagName> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(TagName::new(s))
    }
}

/// Normalized, ordered list of required tag names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequiredTags(Vec<TagName>);

impl RequiredTags {
    /// Wraps an already-normalized list.
    pub fn new(names: Vec<TagName>) -> Self {
        Self(names)
    }

    /// Parses the delimited form (`"a, b, c"`).
    pub fn parse_delimited(s: &str) -> Self {
        RequiredTagSpec::Delimited(s.to_string()).normalize()
    }

    /// True when nothing is required.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of required entries, duplicates included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates the required names in order.
    pub fn iter(&self) -> std::slice::Iter<'_, TagName> {
        self.0.iter()
    }

    /// Borrows the names as a slice.
    pub fn as_slice(&self) -> &[TagName] {
        &self.0
    }

    /// Human-readable form used in warnings: names joined with `", "`.
    pub fn display(&self) -> String {
        self.0
            .iter()
            .map(TagName::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<'a> IntoIterator for &'a RequiredTags {
    type Item = &'a TagName;
    type IntoIter = std::slice::Iter<'a, TagName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
