//! Entity table access (DynamoDB).

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use tracing::{debug, warn};

use crate::{Config, EntityRecord, Error, Result};

/// Read access to the stored entity records.
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Return every stored entity, in store iteration order.
    async fn list_entities(&self) -> Result<Vec<EntityRecord>>;
}

/// Entity store backed by a single DynamoDB table scan.
pub struct DynamoEntityStore {
    client: DynamoClient,
    table_name: String,
}

impl DynamoEntityStore {
    pub fn new(client: DynamoClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    pub fn from_config(client: DynamoClient, config: &Config) -> Self {
        Self::new(client, config.entity_table_name.clone())
    }
}

#[async_trait]
impl EntityStore for DynamoEntityStore {
    async fn list_entities(&self) -> Result<Vec<EntityRecord>> {
        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| {
                Error::StoreUnavailable(format!("Failed to scan {}: {}", self.table_name, e))
            })?;

        // Only the first page is read; later pages are not requested.
        if output.last_evaluated_key().is_some() {
            warn!(
                table = %self.table_name,
                "Entity scan was truncated, remaining items are not returned"
            );
        }

        let records = output
            .items()
            .iter()
            .map(item_to_record)
            .collect::<Result<Vec<_>>>()?;

        debug!(table = %self.table_name, count = records.len(), "Scanned entities");
        Ok(records)
    }
}

/// Decode one stored item into an entity record.
pub fn item_to_record(item: &HashMap<String, AttributeValue>) -> Result<EntityRecord> {
    Ok(serde_dynamo::from_item(item.clone())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn s(value: &str) -> AttributeValue {
        AttributeValue::S(value.to_string())
    }

    fn kitchen_item() -> HashMap<String, AttributeValue> {
        let properties = HashMap::from([
            (
                "supported".to_string(),
                AttributeValue::L(vec![AttributeValue::M(HashMap::from([(
                    "name".to_string(),
                    s("powerState"),
                )]))]),
            ),
            ("nonControllable".to_string(), AttributeValue::Bool(false)),
            ("retrievable".to_string(), AttributeValue::Bool(true)),
        ]);
        let capability = HashMap::from([
            ("type".to_string(), s("AlexaInterface")),
            ("interface".to_string(), s("Alexa.PowerController")),
            ("version".to_string(), s("3")),
            ("properties".to_string(), AttributeValue::M(properties)),
        ]);

        HashMap::from([
            ("entity_id".to_string(), s("light.kitchen")),
            ("manufacturerName".to_string(), s("Acme")),
            ("friendlyName".to_string(), s("Kitchen Light")),
            ("description".to_string(), s("A light")),
            (
                "displayCategories".to_string(),
                AttributeValue::L(vec![s("LIGHT")]),
            ),
            (
                "capabilities".to_string(),
                AttributeValue::L(vec![AttributeValue::M(capability)]),
            ),
        ])
    }

    #[test]
    fn test_item_to_record() {
        let record = item_to_record(&kitchen_item()).unwrap();
        assert_eq!(record.entity_id, "light.kitchen");
        assert_eq!(record.friendly_name, "Kitchen Light");
        assert_eq!(record.display_categories, vec!["LIGHT"]);
        assert_eq!(record.capabilities.len(), 1);
        assert_eq!(
            serde_json::to_value(&record.capabilities[0]).unwrap(),
            json!({
                "type": "AlexaInterface",
                "interface": "Alexa.PowerController",
                "version": "3",
                "properties": {
                    "supported": [{"name": "powerState"}],
                    "nonControllable": false,
                    "retrievable": true
                }
            })
        );
    }

    #[test]
    fn test_numeric_capability_version() {
        let mut item = kitchen_item();
        let capability = HashMap::from([
            ("type".to_string(), s("AlexaInterface")),
            ("interface".to_string(), s("Alexa")),
            ("version".to_string(), AttributeValue::N("3".to_string())),
        ]);
        item.insert(
            "capabilities".to_string(),
            AttributeValue::L(vec![AttributeValue::M(capability)]),
        );

        let record = item_to_record(&item).unwrap();
        assert_eq!(record.capabilities[0].version(), Some(&json!(3)));
    }

    #[test]
    fn test_string_set_categories() {
        let mut item = kitchen_item();
        item.insert(
            "displayCategories".to_string(),
            AttributeValue::Ss(vec!["LIGHT".to_string()]),
        );
        let record = item_to_record(&item).unwrap();
        assert_eq!(record.display_categories, vec!["LIGHT"]);
    }

    #[test]
    fn test_incomplete_item_fails_to_decode() {
        let mut item = kitchen_item();
        item.remove("friendlyName");
        assert!(matches!(item_to_record(&item).unwrap_err(), Error::Decode(_)));
    }
}
