//! Persisted entity records as stored in the entity table.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// A Home Assistant entity exposed to Alexa.
///
/// Field names follow the stored item layout: `entity_id` is snake case, the
/// remaining attributes already use Alexa's camel case names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityRecord {
    #[serde(rename = "entity_id")]
    pub entity_id: String,
    pub manufacturer_name: String,
    pub friendly_name: String,
    pub description: String,
    #[serde(default)]
    pub display_categories: Vec<String>,
    #[serde(default)]
    pub capabilities: Vec<Capability>,
}

/// An interface the endpoint supports, e.g. `Alexa.PowerController`.
///
/// Kept exactly as stored and handed to Alexa unchanged; only a few
/// read-only accessors interpret it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capability(pub Map<String, Value>);

impl Capability {
    /// Build a plain `AlexaInterface` capability without properties.
    pub fn alexa_interface(interface: &str, version: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("type".to_string(), json!("AlexaInterface"));
        fields.insert("interface".to_string(), json!(interface));
        fields.insert("version".to_string(), json!(version));
        Self(fields)
    }

    pub fn capability_type(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    pub fn interface(&self) -> Option<&str> {
        self.0.get("interface").and_then(Value::as_str)
    }

    /// Interface version; stored either as a string or a number.
    pub fn version(&self) -> Option<&Value> {
        self.0.get("version")
    }
}
