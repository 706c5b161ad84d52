//! In-memory collaborators and request builders for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{json, Value};
use shared::{CredentialSource, EntityRecord, EntityStore, Error, Result};

use crate::directive::SmartHomeRequest;

pub struct MemoryStore {
    records: Vec<EntityRecord>,
}

impl MemoryStore {
    pub fn new(records: Vec<EntityRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn list_entities(&self) -> Result<Vec<EntityRecord>> {
        Ok(self.records.clone())
    }
}

pub struct FailingStore;

#[async_trait]
impl EntityStore for FailingStore {
    async fn list_entities(&self) -> Result<Vec<EntityRecord>> {
        Err(Error::StoreUnavailable("simulated scan error".to_string()))
    }
}

pub struct StaticToken {
    token: String,
    calls: AtomicUsize,
}

impl StaticToken {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CredentialSource for StaticToken {
    async fn get_token(&self) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.token.clone())
    }
}

pub fn entity(entity_id: &str, friendly_name: &str) -> EntityRecord {
    EntityRecord {
        entity_id: entity_id.to_string(),
        manufacturer_name: "Acme".to_string(),
        friendly_name: friendly_name.to_string(),
        description: "A light".to_string(),
        display_categories: vec!["LIGHT".to_string()],
        capabilities: vec![],
    }
}

pub fn request(directive: Value) -> SmartHomeRequest {
    serde_json::from_value(json!({ "directive": directive })).unwrap()
}

fn header(namespace: &str, name: &str, message_id: &str, correlation_token: Option<&str>) -> Value {
    let mut header = json!({
        "namespace": namespace,
        "name": name,
        "messageId": message_id,
        "payloadVersion": "3"
    });
    if let Some(token) = correlation_token {
        header["correlationToken"] = json!(token);
    }
    header
}

pub fn discover_request(correlation_token: Option<&str>) -> SmartHomeRequest {
    request(json!({
        "header": header("Alexa.Discovery", "Discover", "m1", correlation_token),
        "payload": {"scope": {"type": "BearerToken", "token": "access-token"}}
    }))
}

pub fn power_request(
    name: &str,
    endpoint_id: Option<&str>,
    correlation_token: Option<&str>,
) -> SmartHomeRequest {
    let mut directive = json!({
        "header": header("Alexa.PowerController", name, "m2", correlation_token),
        "payload": {}
    });
    if let Some(id) = endpoint_id {
        directive["endpoint"] = json!({
            "scope": {"type": "BearerToken", "token": "access-token"},
            "endpointId": id,
            "cookie": {}
        });
    }
    request(directive)
}
