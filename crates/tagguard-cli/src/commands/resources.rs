//! Resources command implementation.

use crate::output;
use tagguard_core::StaticDirectory;

pub fn run(file: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let directory = StaticDirectory::from_path(&file)
        .map_err(|e| format!("Failed to load resources: {}", e))?;

    if json {
        let rows: Vec<_> = directory
            .as_slice()
            .iter()
            .map(output::resource_json)
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    output::print_table_header();
    for resource in directory.as_slice() {
        println!("{}", output::format_table_row(resource));
    }

    Ok(())
}
