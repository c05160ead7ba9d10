//! Normalize command implementation.

use crate::output;
use serde_json::Value;
use tagguard_model::{RequiredTagSpec, RequiredTags};

pub fn run(spec: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tags = parse_spec(&spec)?;

    if json {
        println!("{}", serde_json::to_string(&tags)?);
    } else if !tags.is_empty() {
        println!("{}", output::format_tag_lines(tags.as_slice()));
    }

    Ok(())
}

/// Reads a JSON array when the input looks like one, else the delimited form.
fn parse_spec(spec: &str) -> Result<RequiredTags, Box<dyn std::error::Error>> {
    if spec.trim_start().starts_with('[') {
        let value: Value = serde_json::from_str(spec)
            .map_err(|e| format!("Invalid JSON array: {}", e))?;
        return Ok(RequiredTagSpec::from_value(&value)
            .map(|s| s.normalize())
            .unwrap_or_default());
    }
    Ok(RequiredTags::parse_delimited(spec))
}
