//! Alexa response envelopes.

use serde::Serialize;
use serde_json::{Map, Value};
use shared::{Capability, EntityRecord};

use crate::directive::{Directive, PowerState, RequestEndpoint};

pub const PAYLOAD_VERSION: &str = "3";
pub const ERROR_NAMESPACE: &str = "Alexa";
pub const ERROR_RESPONSE_NAME: &str = "ErrorResponse";

/// Response returned to Alexa for every directive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlexaResponse {
    pub event: Event,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub header: ResponseHeader,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<RequestEndpoint>,
    pub payload: ResponsePayload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseHeader {
    pub namespace: String,
    pub name: String,
    pub message_id: String,
    pub payload_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_token: Option<String>,
}

impl ResponseHeader {
    /// Header answering `directive`, copying its message id and correlation token.
    pub fn reply_to(directive: &Directive, namespace: &str, name: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            name: name.to_string(),
            message_id: directive.header.message_id.clone(),
            payload_version: PAYLOAD_VERSION.to_string(),
            correlation_token: directive.header.correlation_token.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponsePayload {
    Discovery(DiscoveryPayload),
    PowerController(PowerControllerPayload),
    Error(ErrorPayload),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscoveryPayload {
    pub endpoints: Vec<DiscoveryEndpoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryEndpoint {
    pub endpoint_id: String,
    pub manufacturer_name: String,
    pub friendly_name: String,
    pub description: String,
    pub display_categories: Vec<String>,
    pub cookie: Map<String, Value>,
    pub capabilities: Vec<Capability>,
}

impl From<EntityRecord> for DiscoveryEndpoint {
    fn from(record: EntityRecord) -> Self {
        Self {
            endpoint_id: record.entity_id,
            manufacturer_name: record.manufacturer_name,
            friendly_name: record.friendly_name,
            description: record.description,
            display_categories: record.display_categories,
            cookie: Map::new(),
            capabilities: record.capabilities,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PowerControllerPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<PowerState>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorType {
    EndpointUnreachable,
    InternalError,
    InvalidDirective,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorPayload {
    #[serde(rename = "type")]
    pub error_type: ErrorType,
    pub message: String,
}

impl AlexaResponse {
    pub fn header(&self) -> &ResponseHeader {
        &self.event.header
    }

    pub fn is_error(&self) -> bool {
        self.event.header.namespace == ERROR_NAMESPACE
            && self.event.header.name == ERROR_RESPONSE_NAME
    }

    /// Error payload, if this is an `ErrorResponse` carrying one.
    pub fn error(&self) -> Option<&ErrorPayload> {
        match &self.event.payload {
            ResponsePayload::Error(payload) => Some(payload),
            _ => None,
        }
    }
}

/// Build the standard `Alexa.ErrorResponse` for `directive`.
pub fn build_error(
    directive: &Directive,
    kind: ErrorType,
    message: impl Into<String>,
) -> AlexaResponse {
    AlexaResponse {
        event: Event {
            header: ResponseHeader::reply_to(directive, ERROR_NAMESPACE, ERROR_RESPONSE_NAME),
            endpoint: directive.endpoint.as_ref().map(RequestEndpoint::id_only),
            payload: ResponsePayload::Error(ErrorPayload {
                error_type: kind,
                message: message.into(),
            }),
        },
    }
}
