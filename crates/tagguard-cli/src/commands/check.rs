//! Check command implementation.

use crate::input::read_json;
use crate::output;
use clap::Args;
use tagguard_core::{
    ActionConfig, BeforeSaveHook, MatchMode, SaveRequest, StaticAccount, StaticDirectory,
};
use tagguard_model::{AccountId, Event, FieldId};
use tracing::debug;

/// Exit code used by `--strict` when the save would not go through cleanly.
const BLOCKED_EXIT_CODE: i32 = 2;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Event being saved (JSON)
    #[arg(long)]
    event: String,
    /// Known resources (JSON array)
    #[arg(long)]
    resources: String,
    /// Event before editing (JSON); omit for a new event
    #[arg(long)]
    original: Option<String>,
    /// Action config (JSON)
    #[arg(long)]
    config: Option<String>,
    /// Override the required-tag field id
    #[arg(long)]
    field: Option<String>,
    /// Signed-in account
    #[arg(long)]
    account: Option<String>,
    /// Treat the save as a drag and drop
    #[arg(long)]
    before_drop: bool,
    /// Allow partial tag name matches
    #[arg(long)]
    partial: bool,
    /// Output as JSON
    #[arg(long)]
    json: bool,
    /// Exit with code 2 unless the save proceeds without a warning
    #[arg(long)]
    strict: bool,
}

pub fn run(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => ActionConfig::from_path(path)?,
        None => ActionConfig::default(),
    };
    if let Some(field) = args.field {
        config.tag_match_field = Some(FieldId::parse(field)?);
    }
    if args.partial {
        config.match_mode = MatchMode::Partial;
    }
    debug!(?config, "loaded action config");

    let edited: Event = read_json(&args.event)?;
    let original: Option<Event> = args
        .original
        .as_ref()
        .map(|path| read_json::<Event>(path))
        .transpose()?;
    let directory = StaticDirectory::from_path(&args.resources)
        .map_err(|e| format!("Failed to load resources: {}", e))?;
    let account = StaticAccount::new(args.account.map(AccountId::parse).transpose()?);

    let hook = BeforeSaveHook::new(&config, &directory, &account);
    let request = SaveRequest::new(&edited)
        .with_original(original.as_ref())
        .before_drop(args.before_drop);
    let outcome = hook.run(&request);

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::outcome_json(&outcome))?
        );
    } else {
        println!("{}", output::format_outcome(&outcome));
    }

    if args.strict && !outcome.is_clean() {
        std::process::exit(BLOCKED_EXIT_CODE);
    }
    Ok(())
}
