//! Output formatting helpers for CLI commands

use crate::config::ActionConfig;
use crate::engine::RelayResult;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use serde_json::json;

/// Format actions as a table, in registration order
pub fn format_actions_table(actions: &[ActionConfig]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Key", "Route", "Description", "Webhook"]);

    for action in actions {
        table.add_row(vec![
            Cell::new(&action.key),
            Cell::new(action.route.as_deref().unwrap_or("-")),
            Cell::new(&action.description),
            Cell::new(&action.url),
        ]);
    }

    table.to_string()
}

/// Format actions as JSON
pub fn format_actions_json(actions: &[ActionConfig]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&json!({
        "actions": actions,
        "total_count": actions.len(),
    }))
}

/// Format a dispatch result for humans
pub fn format_result(result: &RelayResult) -> String {
    let marker = if result.success {
        "✓".green()
    } else {
        "✗".red()
    };

    match result.status_code {
        Some(status) => format!(
            "{} {}: {} (HTTP {})",
            marker, result.action, result.message, status
        ),
        None => format!("{} {}: {}", marker, result.action, result.message),
    }
}
