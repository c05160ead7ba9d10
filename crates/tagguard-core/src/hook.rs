//! Before-save hook.
//!
//! The host calls [`BeforeSaveHook::run`] once per save attempt and gets a
//! [`HookOutcome`] back: either a [`SaveDecision`] to act on, or an
//! [`ErrorReport`] that already names the [`Resolution`] to apply so the
//! pending save is never left open.

use crate::config::ActionConfig;
use crate::directory::{AccountSource, ResourceDirectory};
use crate::errors::HookError;
use crate::validator::{TagReport, TagValidator};
use std::time::{Duration, Instant};
use tagguard_model::Event;
use tracing::{debug, info, warn};

/// Warning title shown when resources lack required tags.
pub const BLOCK_TITLE: &str = "Resource missing required tags";
/// Title of the generic error report.
pub const ERROR_TITLE: &str = "Error Running Custom Action";

/// Save attempt handed to the hook.
#[derive(Debug, Clone, Copy)]
pub struct SaveRequest<'a> {
    /// Event as it will be saved.
    pub edited: &'a Event,
    /// Event as it was before editing; `None` for a new event.
    pub original: Option<&'a Event>,
    /// True when the save was triggered by a drag and drop.
    pub before_drop: bool,
}

impl<'a> SaveRequest<'a> {
    /// Creates a request for a new event.
    pub fn new(edited: &'a Event) -> Self {
        Self {
            edited,
            original: None,
            before_drop: false,
        }
    }

    /// Sets the pre-edit event.
    pub fn with_original(mut self, original: Option<&'a Event>) -> Self {
        self.original = original;
        self
    }

    /// Marks the request as a drag and drop re-evaluation.
    pub fn before_drop(mut self, before_drop: bool) -> Self {
        self.before_drop = before_drop;
        self
    }

    /// True if the edited event differs from the original, or is new.
    pub fn has_changes(&self) -> bool {
        self.original
            .map(|original| self.edited.differs_from(original))
            .unwrap_or(true)
    }
}

/// Which continuation finalizes the pending save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Let the save proceed.
    Confirm,
    /// Abort the save.
    Cancel,
}

impl Resolution {
    /// Lowercase name for output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resolution::Confirm => "confirm",
            Resolution::Cancel => "cancel",
        }
    }
}

/// Button the user picked on a [`BlockNotice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserChoice {
    /// The confirm button (`OK`).
    Ok,
    /// The cancel button (`Cancel` or `Revert`).
    Cancel,
}

impl From<UserChoice> for Resolution {
    fn from(choice: UserChoice) -> Self {
        match choice {
            UserChoice::Ok => Resolution::Confirm,
            UserChoice::Cancel => Resolution::Cancel,
        }
    }
}

/// Why a save was allowed through without a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProceedReason {
    /// The current account is not on the allow-list.
    AccountNotListed,
    /// Nothing changed and the save was not a drag and drop.
    Unchanged,
    /// The event has no required tags.
    NoRequirement,
    /// Attached resources carry the required tags.
    Satisfied,
}

impl ProceedReason {
    /// Stable snake_case code for output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProceedReason::AccountNotListed => "account_not_listed",
            ProceedReason::Unchanged => "unchanged",
            ProceedReason::NoRequirement => "no_requirement",
            ProceedReason::Satisfied => "satisfied",
        }
    }
}

/// Warning presented when required tags are missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNotice {
    /// Dialog title.
    pub title: String,
    /// Dialog body.
    pub message: String,
    /// Label of the button that lets the save proceed.
    pub confirm_label: String,
    /// Label of the button that aborts the save.
    pub cancel_label: String,
    /// Match details behind the warning.
    pub report: TagReport,
}

impl BlockNotice {
    fn new(report: TagReport, before_drop: bool) -> Self {
        let message = format!(
            "The resource(s) assigned to this event do not contain all of the required tags ({}).",
            report.required_display()
        );
        Self {
            title: BLOCK_TITLE.to_string(),
            message,
            confirm_label: "OK".to_string(),
            cancel_label: if before_drop { "Revert" } else { "Cancel" }.to_string(),
            report,
        }
    }

    /// Required tags as shown in the message.
    pub fn required_tags(&self) -> String {
        self.report.required_display()
    }

}

/// Result of a successful evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveDecision {
    /// Save may proceed with no warning.
    Proceed(ProceedReason),
    /// Save is held until the user answers the warning.
    Blocked(BlockNotice),
}

impl SaveDecision {
    /// True when a warning must be shown.
    pub fn is_blocked(&self) -> bool {
        matches!(self, SaveDecision::Blocked(_))
    }

    /// Resolution to apply without asking the user, if any.
    pub fn immediate_resolution(&self) -> Option<Resolution> {
        match self {
            SaveDecision::Proceed(_) => Some(Resolution::Confirm),
            SaveDecision::Blocked(_) => None,
        }
    }
}

/// Error surfaced to the user when an evaluation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    /// Dialog title.
    pub title: String,
    /// Dialog body.
    pub message: String,
    /// Continuation to apply to the pending save.
    pub resolution: Resolution,
}

impl ErrorReport {
    /// Builds a report for `error` raised by the action `action_name`.
    ///
    /// The save is confirmed when the run guard was armed and cancelled
    /// otherwise.
    pub fn new(action_name: &str, error: &HookError, guard_armed: bool) -> Self {
        Self {
            title: ERROR_TITLE.to_string(),
            message: format!(
                "There was a problem running the action \"{}\". Error: {}. \
                 This may result in unexpected behavior of the calendar.",
                action_name, error
            ),
            resolution: if guard_armed {
                Resolution::Confirm
            } else {
                Resolution::Cancel
            },
        }
    }
}

/// Final outcome of [`BeforeSaveHook::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// Evaluation completed.
    Decided(SaveDecision),
    /// Evaluation failed; the report carries the resolution.
    Failed(ErrorReport),
}

impl HookOutcome {
    /// True when the save proceeds without a warning or an error.
    pub fn is_clean(&self) -> bool {
        matches!(self, HookOutcome::Decided(SaveDecision::Proceed(_)))
    }
}

/// Wall-clock guard over one save attempt.
///
/// The budget covers the whole attempt, including the time a
/// [`BlockNotice`] stays open. [`BeforeSaveHook::run`] only checks it once
/// the decision is made; a host that shows the warning keeps the guard from
/// [`BeforeSaveHook::start_guard`] and answers through [`RunGuard::settle`].
#[derive(Debug, Clone, Copy)]
pub struct RunGuard {
    started: Instant,
    budget: Option<Duration>,
}

impl RunGuard {
    /// Starts the clock. A `None` budget never fires.
    pub fn arm(budget: Option<Duration>) -> Self {
        Self {
            started: Instant::now(),
            budget,
        }
    }

    /// True if a budget is set.
    pub fn is_armed(&self) -> bool {
        self.budget.is_some()
    }

    /// Fails with [`HookError::Timeout`] once the budget is spent.
    pub fn check(&self) -> Result<(), HookError> {
        let Some(budget) = self.budget else {
            return Ok(());
        };
        let elapsed = self.started.elapsed();
        if elapsed > budget {
            return Err(HookError::Timeout { elapsed, budget });
        }
        Ok(())
    }

    /// Maps the user's answer to a warning, unless the budget ran out
    /// while the warning was open.
    pub fn settle(&self, choice: UserChoice) -> Result<Resolution, HookError> {
        self.check()?;
        Ok(Resolution::from(choice))
    }
}

/// Before-save gate over injected host lookups.
pub struct BeforeSaveHook<'a, D, A> {
    config: &'a ActionConfig,
    directory: &'a D,
    account: &'a A,
    validator: TagValidator,
}

impl<'a, D, A> BeforeSaveHook<'a, D, A>
where
    D: ResourceDirectory,
    A: AccountSource,
{
    /// Creates a hook for `config` over the given lookups.
    pub fn new(config: &'a ActionConfig, directory: &'a D, account: &'a A) -> Self {
        Self {
            config,
            directory,
            account,
            validator: TagValidator::new(config.match_mode),
        }
    }

    /// Starts a guard with the configured run budget.
    pub fn start_guard(&self) -> RunGuard {
        RunGuard::arm(self.config.run_timeout())
    }

    /// Evaluates a save attempt and never fails: errors become reports.
    pub fn run(&self, request: &SaveRequest<'_>) -> HookOutcome {
        let guard = self.start_guard();
        match self.evaluate_guarded(request, &guard) {
            Ok(decision) => HookOutcome::Decided(decision),
            Err(e) => HookOutcome::Failed(self.error_report(&e, &guard)),
        }
    }

    /// Evaluates a save attempt.
    pub fn evaluate(&self, request: &SaveRequest<'_>) -> Result<SaveDecision, HookError> {
        self.evaluate_guarded(request, &self.start_guard())
    }

    /// Builds the report for an error raised under `guard`.
    pub fn error_report(&self, error: &HookError, guard: &RunGuard) -> ErrorReport {
        warn!(action = %self.config.name, error = %error, "before-save action failed");
        ErrorReport::new(&self.config.name, error, guard.is_armed())
    }

    /// Evaluates a save attempt against a guard the caller keeps.
    pub fn evaluate_guarded(
        &self,
        request: &SaveRequest<'_>,
        guard: &RunGuard,
    ) -> Result<SaveDecision, HookError> {
        let account = self.account.current_account();
        if !self.config.applies_to(account.as_ref()) {
            debug!(account = ?account, "account not on allow-list, skipping");
            return Ok(SaveDecision::Proceed(ProceedReason::AccountNotListed));
        }

        let decision = self.decide(request)?;
        guard.check()?;
        Ok(decision)
    }

    fn decide(&self, request: &SaveRequest<'_>) -> Result<SaveDecision, HookError> {
        if !request.has_changes() && !request.before_drop {
            debug!("event unchanged, skipping");
            return Ok(SaveDecision::Proceed(ProceedReason::Unchanged));
        }

        let Some(field) = self.config.tag_match_field.as_ref() else {
            debug!("no tag field configured, skipping");
            return Ok(SaveDecision::Proceed(ProceedReason::NoRequirement));
        };
        let Some(spec) = request.edited.required_tags(field) else {
            debug!(field = %field, "event has no required tags");
            return Ok(SaveDecision::Proceed(ProceedReason::NoRequirement));
        };
        let required = spec.normalize();
        if required.is_empty() {
            debug!(field = %field, "required tag list is empty");
            return Ok(SaveDecision::Proceed(ProceedReason::NoRequirement));
        }

        let known = self.directory.resources()?;
        let attached = self
            .validator
            .resolve_attached(&request.edited.resources, &known);
        let report = self.validator.validate(&required, attached);

        if report.passed() {
            info!(
                required = %report.required_display(),
                matched = report.matched_count(),
                "required tags satisfied"
            );
            Ok(SaveDecision::Proceed(ProceedReason::Satisfied))
        } else {
            warn!(
                required = %report.required_display(),
                matched = report.matched_count(),
                rejected = ?report.rejected_resource,
                "resources missing required tags"
            );
            Ok(SaveDecision::Blocked(BlockNotice::new(
                report,
                request.before_drop,
            )))
        }
    }
}
