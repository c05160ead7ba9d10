//! Array intersection by name.
//!
//! Used twice per validation: once to resolve which directory resources are
//! attached to an event, and once per resource to find which of its tags
//! are required.

use serde::{Deserialize, Serialize};
use tagguard_model::{Resource, ResourceName, Tag, TagName};

/// Anything that can be matched by its `name` field.
pub trait Named {
    /// Returns the name compared by [`match_by_name`].
    fn name(&self) -> &str;
}

impl Named for Tag {
    fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl Named for Resource {
    fn name(&self) -> &str {
        self.name.as_str()
    }
}

impl Named for TagName {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl Named for ResourceName {
    fn name(&self) -> &str {
        self.as_str()
    }
}

/// How a candidate name is compared with a needle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Case-sensitive equality.
    #[default]
    Exact,
    /// Case-sensitive containment: the candidate name contains the needle.
    Partial,
}

impl MatchMode {
    /// Returns true if `candidate` matches `needle` under this mode.
    pub fn matches(self, candidate: &str, needle: &str) -> bool {
        match self {
            MatchMode::Exact => candidate == needle,
            MatchMode::Partial => candidate.contains(needle),
        }
    }
}

/// Returns the candidates whose name matches any needle.
///
/// Candidates keep their own order. A candidate matching several needles
/// appears once; repeated candidates each appear.
pub fn match_by_name<'a, N, T>(needles: &[N], candidates: &'a [T], mode: MatchMode) -> Vec<&'a T>
where
    N: Named,
    T: Named,
{
    candidates
        .iter()
        .filter(|candidate| {
            needles
                .iter()
                .any(|needle| mode.matches(candidate.name(), needle.name()))
        })
        .collect()
}
