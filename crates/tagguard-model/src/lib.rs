//! Data model primitives for the tagguard before-save gate.
//!
//! Everything here is read-only input to a single validation call: the
//! edited event, the resources known to the calendar and the tags they
//! carry. The required-tag field on an event may be written as a list or
//! as a comma-delimited string; [`RequiredTagSpec`] folds both shapes into
//! one ordered [`RequiredTags`] list.
//!
#![deny(missing_docs)]

/// Events, resources and tags.
pub mod entities;
/// Validated identifier newtypes.
pub mod identifiers;
/// Required-tag specifications and their normalized form.
pub mod required;
/// Validation errors for identifiers.
pub mod validation;

pub use entities::{Event, Resource, Tag};
pub use identifiers::{AccountId, FieldId, ResourceName, TagName};
pub use required::{RequiredTagSpec, RequiredTags};
pub use validation::ValidationError;
