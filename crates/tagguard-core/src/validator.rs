use crate::matcher::{match_by_name, MatchMode};
use serde::Serialize;
use tagguard_model::{RequiredTags, Resource, ResourceName, Tag};
use tracing::debug;

/// Outcome of matching required tags against a set of resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagReport {
    /// Required tags, normalized.
    pub required: RequiredTags,
    /// Every matched tag instance across all resources, duplicates included.
    ///
    /// Empty when matching short-circuited or no resource was given.
    pub matched: Vec<Tag>,
    /// First resource that carried none of the required tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected_resource: Option<ResourceName>,
}

impl TagReport {
    /// Acceptance rule: total matched instances must reach the number of
    /// required entries.
    pub fn passed(&self) -> bool {
        self.matched.len() >= self.required.len()
    }

    /// Number of matched tag instances.
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    /// Required tags formatted for display.
    pub fn required_display(&self) -> String {
        self.required.display()
    }
}

/// Checks attached resources against an event's required tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagValidator {
    mode: MatchMode,
}

impl TagValidator {
    /// Creates a validator comparing tag names with `mode`.
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    /// Match mode used for tag names.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Resolves attached resource names against the known resources.
    ///
    /// Always exact. Names absent from `known` are dropped.
    pub fn resolve_attached<'a>(
        &self,
        attached: &[ResourceName],
        known: &'a [Resource],
    ) -> Vec<&'a Resource> {
        match_by_name(attached, known, MatchMode::Exact)
    }

    /// Collects the required tags carried by each resource.
    ///
    /// Stops at the first resource with no required tag and returns an
    /// empty list together with that resource's name.
    pub fn matching_tags<'a, I>(
        &self,
        required: &RequiredTags,
        resources: I,
    ) -> (Vec<Tag>, Option<ResourceName>)
    where
        I: IntoIterator<Item = &'a Resource>,
    {
        let mut matched = Vec::new();
        for resource in resources {
            let hits = match_by_name(required.as_slice(), &resource.tags, self.mode);
            if hits.is_empty() {
                debug!(resource = %resource.name, "resource carries no required tag");
                return (Vec::new(), Some(resource.name.clone()));
            }
            matched.extend(hits.into_iter().cloned());
        }
        (matched, None)
    }

    /// Validates `resources` against `required`.
    ///
    /// An empty requirement passes regardless of resources. With a
    /// non-empty requirement and no resources nothing can match, so the
    /// report fails.
    pub fn validate<'a, I>(&self, required: &RequiredTags, resources: I) -> TagReport
    where
        I: IntoIterator<Item = &'a Resource>,
    {
        if required.is_empty() {
            return TagReport {
                required: required.clone(),
                matched: Vec::new(),
                rejected_resource: None,
            };
        }

        let (matched, rejected_resource) = self.matching_tags(required, resources);
        TagReport {
            required: required.clone(),
            matched,
            rejected_resource,
        }
    }
}
