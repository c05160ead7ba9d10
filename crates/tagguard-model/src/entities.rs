use crate::identifiers::{FieldId, ResourceName, TagName};
use crate::required::RequiredTagSpec;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Tag attached to a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name; required tags are matched against this.
    pub name: TagName,
}

impl Tag {
    /// Creates a tag with the given name.
    pub fn new(name: impl Into<TagName>) -> Self {
        Self { name: name.into() }
    }
}

/// Bookable resource and the tags it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Resource name; events reference resources by this name.
    pub name: ResourceName,
    /// Tags carried by the resource, in host order. Duplicates are kept.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<Tag>,
}

impl Resource {
    /// Creates a resource from a name and a list of tag names.
    pub fn new<I, T>(name: impl Into<ResourceName>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TagName>,
    {
        Self {
            name: name.into(),
            tags: tags.into_iter().map(Tag::new).collect(),
        }
    }
}

/// Calendar event as handed to the before-save gate.
///
/// Only the attached resource names are modelled explicitly; every other
/// field is kept verbatim so the required-tag field can be looked up by
/// whatever identifier the calendar source uses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Event {
    /// Names of the resources attached to the event.
    #[serde(default, rename = "resource", deserialize_with = "null_as_empty")]
    pub resources: Vec<ResourceName>,
    /// Remaining event fields keyed by field id.
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl Event {
    /// Returns the raw value of a field, if present.
    pub fn field(&self, id: &FieldId) -> Option<&Value> {
        self.fields.get(id.as_str())
    }

    /// Reads the required-tag specification stored in `id`.
    ///
    /// Returns `None` when the field is missing or holds nothing usable.
    pub fn required_tags(&self, id: &FieldId) -> Option<RequiredTagSpec> {
        self.field(id).and_then(RequiredTagSpec::from_value)
    }

    /// True if this event differs from `original` in any field or resource.
    pub fn differs_from(&self, original: &Event) -> bool {
        self != original
    }
}

/// Reads a missing or `null` list as empty.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
