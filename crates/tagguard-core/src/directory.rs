//! Host lookups consumed by the before-save hook.

use crate::errors::DirectoryError;
use std::path::Path;
use tagguard_model::{AccountId, Resource};

/// Source of the resources known to the calendar.
///
/// Queried fresh on every evaluation; implementations must not assume the
/// result is cached.
pub trait ResourceDirectory {
    /// Returns every known resource with its tags.
    fn resources(&self) -> Result<Vec<Resource>, DirectoryError>;
}

/// Source of the currently signed-in account.
pub trait AccountSource {
    /// Returns the current account, if one is signed in.
    fn current_account(&self) -> Option<AccountId>;
}

/// Directory backed by a fixed list of resources.
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    resources: Vec<Resource>,
}

impl StaticDirectory {
    /// Creates a directory over `resources`.
    pub fn new(resources: Vec<Resource>) -> Self {
        Self { resources }
    }

    /// Loads a JSON array of resources.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let bytes = std::fs::read(path)?;
        let resources: Vec<Resource> = serde_json::from_slice(&bytes)?;
        Ok(Self::new(resources))
    }

    /// Borrows the resources.
    pub fn as_slice(&self) -> &[Resource] {
        &self.resources
    }
}

impl ResourceDirectory for StaticDirectory {
    fn resources(&self) -> Result<Vec<Resource>, DirectoryError> {
        Ok(self.resources.clone())
    }
}

/// Account source returning a fixed account.
#[derive(Debug, Clone, Default)]
pub struct StaticAccount(Option<AccountId>);

impl StaticAccount {
    /// Creates a source that always reports `account`.
    pub fn new(account: Option<AccountId>) -> Self {
        Self(account)
    }
}

impl AccountSource for StaticAccount {
    fn current_account(&self) -> Option<AccountId> {
        self.0.clone()
    }
}
