//! Trigger command implementation

use crate::cli::output::format_result;
use crate::cli::TriggerArgs;
use crate::engine::{RelayEngine, RelayResult};
use serde_json::{Map, Value};

/// Parse the `--payload` argument into a JSON object.
pub fn parse_payload_arg(
    raw: Option<&str>,
) -> Result<Option<Map<String, Value>>, Box<dyn std::error::Error>> {
    match raw {
        None => Ok(None),
        Some(raw) => match serde_json::from_str::<Value>(raw)? {
            Value::Object(map) => Ok(Some(map)),
            _ => Err("--payload must be a JSON object".into()),
        },
    }
}

/// Rendered outcome of `relay trigger`.
#[derive(Debug)]
pub struct TriggerOutput {
    pub rendered: String,
    pub success: bool,
}

/// Handle `relay trigger` command
pub async fn handle_trigger(
    args: &TriggerArgs,
    engine: &RelayEngine,
) -> Result<TriggerOutput, Box<dyn std::error::Error>> {
    let payload = parse_payload_arg(args.payload.as_deref())?;
    let result = engine.dispatch(&args.key, payload).await;
    render(args, &result)
}

fn render(
    args: &TriggerArgs,
    result: &RelayResult,
) -> Result<TriggerOutput, Box<dyn std::error::Error>> {
    let rendered = if args.json {
        serde_json::to_string_pretty(result)?
    } else {
        format_result(result)
    };

    Ok(TriggerOutput {
        rendered,
        success: result.success,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ActionRegistry;
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Duration;

    fn args(key: &str, payload: Option<&str>) -> TriggerArgs {
        TriggerArgs {
            key: key.to_string(),
            payload: payload.map(str::to_string),
            json: true,
            config: PathBuf::from("relay.toml"),
        }
    }

    #[test]
    fn test_parse_payload_arg() {
        assert!(parse_payload_arg(None).unwrap().is_none());

        let payload = parse_payload_arg(Some(r#"{"url": "https://gmail.com"}"#))
            .unwrap()
            .unwrap();
        assert_eq!(payload["url"], "https://gmail.com");

        assert!(parse_payload_arg(Some("[1]")).is_err());
        assert!(parse_payload_arg(Some("{oops")).is_err());
    }

    #[tokio::test]
    async fn test_trigger_unknown_action_reports_failure() {
        let registry = Arc::new(ActionRegistry::default());
        let engine = RelayEngine::new(registry, Duration::from_secs(1)).unwrap();

        let output = handle_trigger(&args("nonexistent_key", None), &engine)
            .await
            .unwrap();
        assert!(!output.success);

        let parsed: RelayResult = serde_json::from_str(&output.rendered).unwrap();
        assert_eq!(parsed.message, "Unknown action: nonexistent_key");
    }
}
