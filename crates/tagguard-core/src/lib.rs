//! Required-tag validation and before-save gating for calendar events.
//!
//! This crate provides:
//! - A name matcher with exact and partial modes
//! - The tag validator and its match report
//! - An immutable action configuration loaded from JSON
//! - Host lookups (resource directory, current account) as traits
//! - The before-save hook that combines the above into a save decision
//!
//! Core invariants:
//! - All inputs are read-only for the duration of one evaluation
//! - An absent or empty requirement always lets the save proceed
//! - Every evaluation ends in a decision or an error report, never a hang
//!
#![deny(missing_docs)]

/// Configuration for the before-save action.
pub mod config;
/// Host lookups injected into the hook.
pub mod directory;
/// Error types for core operations.
pub mod errors;
/// Before-save hook, decisions and error reports.
pub mod hook;
/// Array intersection by name.
pub mod matcher;
/// Tag validation logic and reports.
pub mod validator;

pub use config::ActionConfig;
pub use directory::{AccountSource, ResourceDirectory, StaticAccount, StaticDirectory};
pub use errors::{ConfigError, DirectoryError, HookError};
pub use hook::{
    BeforeSaveHook, BlockNotice, ErrorReport, HookOutcome, ProceedReason, Resolution, RunGuard,
    SaveDecision, SaveRequest, UserChoice,
};
pub use matcher::{match_by_name, MatchMode, Named};
pub use validator::{TagReport, TagValidator};
