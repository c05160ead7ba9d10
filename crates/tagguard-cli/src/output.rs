//! Output formatting utilities.

use serde_json::{json, Value};
use tagguard_core::{HookOutcome, SaveDecision};
use tagguard_model::{Resource, TagName};

/// Renders a hook outcome as JSON.
pub fn outcome_json(outcome: &HookOutcome) -> Value {
    match outcome {
        HookOutcome::Decided(SaveDecision::Proceed(reason)) => json!({
            "decision": "proceed",
            "reason": reason.as_str(),
            "resolution": "confirm"
        }),
        HookOutcome::Decided(SaveDecision::Blocked(notice)) => json!({
            "decision": "blocked",
            "title": notice.title,
            "message": notice.message,
            "required_tags": notice.report.required,
            "matched_count": notice.report.matched_count(),
            "rejected_resource": notice.report.rejected_resource,
            "buttons": {
                "confirm": notice.confirm_label,
                "cancel": notice.cancel_label
            }
        }),
        HookOutcome::Failed(report) => json!({
            "decision": "error",
            "title": report.title,
            "message": report.message,
            "resolution": report.resolution.as_str()
        }),
    }
}

/// Renders a hook outcome for a terminal.
pub fn format_outcome(outcome: &HookOutcome) -> String {
    match outcome {
        HookOutcome::Decided(SaveDecision::Proceed(reason)) => {
            format!("PROCEED  {}", reason.as_str())
        }
        HookOutcome::Decided(SaveDecision::Blocked(notice)) => format!(
            "BLOCKED  {}\n{}\n[{}] [{}]",
            notice.title, notice.message, notice.confirm_label, notice.cancel_label
        ),
        HookOutcome::Failed(report) => format!(
            "ERROR    {}\n{}\nresolution: {}",
            report.title,
            report.message,
            report.resolution.as_str()
        ),
    }
}

/// Renders a resource as JSON.
pub fn resource_json(resource: &Resource) -> Value {
    json!({
        "name": resource.name,
        "tags": resource.tags.iter().map(|t| t.name.as_str()).collect::<Vec<_>>()
    })
}

/// Formats a resource as a table row.
pub fn format_table_row(resource: &Resource) -> String {
    let tags = resource
        .tags
        .iter()
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{:<32} {}", truncate(resource.name.as_str(), 32), tags)
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!("{:<32} {}", "RESOURCE", "TAGS");
    println!("{}", "-".repeat(70));
}

/// Formats normalized tag names, one per line.
pub fn format_tag_lines(tags: &[TagName]) -> String {
    tags.iter()
        .map(TagName::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
