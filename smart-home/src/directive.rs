//! Inbound Smart Home directives.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::envelope::ErrorType;

pub const DISCOVERY_NAMESPACE: &str = "Alexa.Discovery";
pub const POWER_CONTROLLER_NAMESPACE: &str = "Alexa.PowerController";

/// The event Alexa sends to the skill Lambda.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartHomeRequest {
    pub directive: Directive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directive {
    pub header: DirectiveHeader,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<RequestEndpoint>,
    #[serde(default = "empty_payload")]
    pub payload: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectiveHeader {
    pub namespace: String,
    #[serde(default)]
    pub name: String,
    pub message_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_token: Option<String>,
    #[serde(default)]
    pub payload_version: String,
}

/// Endpoint targeted by a directive.
///
/// Only `endpointId` is interpreted; scope, cookie and anything else are kept
/// as sent so they can be echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEndpoint {
    pub endpoint_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RequestEndpoint {
    pub fn new(endpoint_id: impl Into<String>) -> Self {
        Self {
            endpoint_id: endpoint_id.into(),
            extra: Map::new(),
        }
    }

    /// Copy of this endpoint carrying only the identifier.
    pub fn id_only(&self) -> Self {
        Self::new(self.endpoint_id.clone())
    }
}

/// Power state requested by a `TurnOn`/`TurnOff` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PowerState {
    On,
    Off,
}

impl PowerState {
    pub fn from_directive_name(name: &str) -> Option<Self> {
        match name {
            "TurnOn" => Some(PowerState::On),
            "TurnOff" => Some(PowerState::Off),
            _ => None,
        }
    }
}

/// A directive rejected before reaching any handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    pub kind: ErrorType,
    pub message: &'static str,
}

/// What a directive asks the skill to do, resolved from its namespace.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<'a> {
    Discover,
    SetPower {
        endpoint: &'a RequestEndpoint,
        requested: Option<PowerState>,
    },
    Rejected(Rejection),
}

impl Directive {
    pub fn command(&self) -> Command<'_> {
        match self.header.namespace.as_str() {
            DISCOVERY_NAMESPACE => Command::Discover,
            POWER_CONTROLLER_NAMESPACE => match &self.endpoint {
                Some(endpoint) => Command::SetPower {
                    endpoint,
                    requested: PowerState::from_directive_name(&self.header.name),
                },
                None => Command::Rejected(Rejection {
                    kind: ErrorType::EndpointUnreachable,
                    message: "Endpoint required but missing.",
                }),
            },
            _ => Command::Rejected(Rejection {
                kind: ErrorType::InvalidDirective,
                message: "Unsupported namespace provided.",
            }),
        }
    }
}

fn empty_payload() -> Value {
    Value::Object(Map::new())
}
