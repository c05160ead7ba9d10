use crate::errors::ConfigError;
use crate::matcher::MatchMode;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;
use std::time::Duration;
use tagguard_model::{AccountId, FieldId};

/// Display name used in error reports when none is configured.
pub const DEFAULT_ACTION_NAME: &str = "Required Tags";

/// Immutable configuration for the before-save action.
///
/// Every key is optional in the JSON form:
///
/// ```json
/// {
///   "name": "Required Tags",
///   "tag_match_field": "dbk-additionalField-03",
///   "restricted_to_accounts": ["person@domain.com"],
///   "run_timeout": 0,
///   "match_mode": "exact"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionConfig {
    /// Action name shown in error reports.
    pub name: String,
    /// Event field holding the required tags. Empty or absent disables the check.
    #[serde(deserialize_with = "blank_as_none")]
    pub tag_match_field: Option<FieldId>,
    /// Accounts the action runs for. Empty means everyone.
    pub restricted_to_accounts: Vec<AccountId>,
    /// Seconds allowed before a timeout is reported. Zero disables the guard.
    #[serde(rename = "run_timeout")]
    pub run_timeout_secs: u64,
    /// How required tag names are compared with resource tags.
    pub match_mode: MatchMode,
}

impl Default for ActionConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_ACTION_NAME.to_string(),
            tag_match_field: None,
            restricted_to_accounts: Vec::new(),
            run_timeout_secs: 0,
            match_mode: MatchMode::Exact,
        }
    }
}

impl ActionConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ActionConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Checks identifiers that serde accepts without validation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for account in &self.restricted_to_accounts {
            AccountId::parse(account.as_str())?;
        }
        Ok(())
    }

    /// Returns true if the action should run for `account`.
    ///
    /// An empty allow-list admits everyone, including an unknown account.
    pub fn applies_to(&self, account: Option<&AccountId>) -> bool {
        if self.restricted_to_accounts.is_empty() {
            return true;
        }
        account.is_some_and(|a| self.restricted_to_accounts.contains(a))
    }

    /// Run budget, or `None` when the guard is disabled.
    pub fn run_timeout(&self) -> Option<Duration> {
        (self.run_timeout_secs > 0).then(|| Duration::from_secs(self.run_timeout_secs))
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<FieldId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => FieldId::parse(s).map(Some).map_err(serde::de::Error::custom),
    }
}
