//! Actions command implementation

use crate::cli::output::{format_actions_json, format_actions_table};
use crate::cli::ActionsArgs;
use crate::registry::ActionRegistry;

/// Handle `relay actions` command
pub fn handle_actions(
    args: &ActionsArgs,
    registry: &ActionRegistry,
) -> Result<String, Box<dyn std::error::Error>> {
    if args.json {
        return Ok(format_actions_json(registry.list())?);
    }

    if registry.is_empty() {
        return Ok(format!(
            "No actions configured. Run `relay config init` or add [[actions]] to {}.",
            args.config.display()
        ));
    }

    Ok(format_actions_table(registry.list()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ActionConfig;
    use std::path::PathBuf;

    fn args(json: bool) -> ActionsArgs {
        ActionsArgs {
            json,
            config: PathBuf::from("relay.toml"),
        }
    }

    #[test]
    fn test_actions_empty_registry_hint() {
        let registry = ActionRegistry::default();
        let output = handle_actions(&args(false), &registry).unwrap();
        assert!(output.contains("No actions configured"));
    }

    #[test]
    fn test_actions_json_lists_all() {
        let registry = ActionRegistry::new(vec![
            ActionConfig::new("a", "http://localhost/a", "A"),
            ActionConfig::new("b", "http://localhost/b", "B"),
        ])
        .unwrap();

        let output = handle_actions(&args(true), &registry).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["total_count"], 2);
    }
}
