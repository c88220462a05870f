//! Webhook action definitions

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Routes served by the API itself; alias routes may not shadow them.
pub const RESERVED_ROUTES: &[&str] = &["/health", "/metrics", "/api/status", "/api/actions"];

/// Route prefixes owned by the parameterised API routes.
pub const RESERVED_PREFIXES: &[&str] = &["/api/actions/", "/api/test-webhook/"];

/// A single webhook action as declared in an `[[actions]]` table.
///
/// # Example
///
/// ```rust
/// use relay::config::ActionConfig;
///
/// let toml = r#"
/// key = "block_touch"
/// url = "https://trigger.example.com/block"
/// description = "Block touch input"
/// route = "/api/block-touch"
/// payload_fields = ["duration"]
/// payload_defaults = { duration = 10 }
/// "#;
/// let action: ActionConfig = toml::from_str(toml).unwrap();
/// assert_eq!(action.route.as_deref(), Some("/api/block-touch"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionConfig {
    pub key: String,
    pub url: String,
    pub description: String,
    /// Alias route that triggers this action, e.g. `/api/lock`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Fields of the inbound body forwarded when triggered through the alias route
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payload_fields: Vec<String>,
    /// Fields filled in when the inbound body does not provide them
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub payload_defaults: Map<String, Value>,
}

impl ActionConfig {
    /// Create an action with no alias route and no payload shaping.
    pub fn new(
        key: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            url: url.into(),
            description: description.into(),
            route: None,
            payload_fields: Vec::new(),
            payload_defaults: Map::new(),
        }
    }

    /// Attach an alias route.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Build the payload forwarded for a request that came in on the alias route.
    ///
    /// Only `payload_fields` are copied from `body` (null and empty-string
    /// values are skipped), then `payload_defaults` fill whatever is still
    /// missing. Returns `None`
    /// when nothing remains, so the webhook receives `{}`.
    pub fn shape_payload(&self, body: Option<&Map<String, Value>>) -> Option<Map<String, Value>> {
        let mut payload = Map::new();

        if let Some(body) = body {
            for field in &self.payload_fields {
                match body.get(field) {
                    Some(Value::Null) | None => {}
                    Some(Value::String(text)) if text.is_empty() => {}
                    Some(value) => {
                        payload.insert(field.clone(), value.clone());
                    }
                }
            }
        }

        for (field, value) in &self.payload_defaults {
            payload
                .entry(field.clone())
                .or_insert_with(|| value.clone());
        }

        if payload.is_empty() {
            None
        } else {
            Some(payload)
        }
    }
}

/// Whether `route` collides with a route the API serves itself.
pub(crate) fn route_is_reserved(route: &str) -> bool {
    RESERVED_ROUTES.contains(&route)
        || RESERVED_PREFIXES
            .iter()
            .any(|prefix| route.starts_with(prefix))
}
