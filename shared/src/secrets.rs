//! AWS Secrets Manager integration for the Home Assistant token.

use async_trait::async_trait;
use aws_sdk_secretsmanager::Client as SecretsClient;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::{Config, Error, Result};

/// Source of the Home Assistant access token.
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Fetch the token used for Home Assistant API calls.
    async fn get_token(&self) -> Result<String>;
}

/// Get the raw secret string from Secrets Manager.
pub async fn get_secret(client: &SecretsClient, secret_id: &str) -> Result<String> {
    let response = client
        .get_secret_value()
        .secret_id(secret_id)
        .send()
        .await
        .map_err(|e| Error::Aws(format!("Failed to get secret: {}", e)))?;

    response
        .secret_string()
        .map(str::to_string)
        .ok_or_else(|| Error::NotFound("Secret string is empty or undefined".to_string()))
}

/// Pull a string field out of a JSON secret payload.
pub fn extract_token(secret_string: &str, field: &str) -> Result<String> {
    let secret: Value = serde_json::from_str(secret_string)?;
    let object = secret
        .as_object()
        .ok_or_else(|| Error::Internal("Secret payload is not a JSON object".to_string()))?;

    match object.get(field) {
        None => Err(Error::NotFound(format!("field '{}' missing from secret", field))),
        Some(Value::String(token)) => Ok(token.clone()),
        Some(_) => Err(Error::TypeMismatch(format!("field '{}' is not a string", field))),
    }
}

/// Token source backed by a Secrets Manager secret, cached per instance.
pub struct SecretsManagerCredentials {
    client: SecretsClient,
    secret_id: String,
    token_field: String,
    cached: RwLock<Option<String>>,
}

impl SecretsManagerCredentials {
    pub fn new(client: SecretsClient, secret_id: String, token_field: String) -> Self {
        Self {
            client,
            secret_id,
            token_field,
            cached: RwLock::new(None),
        }
    }

    pub fn from_config(client: SecretsClient, config: &Config) -> Self {
        Self::new(
            client,
            config.ha_secret_id.clone(),
            config.ha_token_field.clone(),
        )
    }
}

#[async_trait]
impl CredentialSource for SecretsManagerCredentials {
    async fn get_token(&self) -> Result<String> {
        if let Some(token) = self.cached.read().await.as_ref() {
            return Ok(token.clone());
        }

        let secret_string = get_secret(&self.client, &self.secret_id)
            .await
            .inspect_err(|e| tracing::error!("Error retrieving secret: {}", e))?;
        let token = extract_token(&secret_string, &self.token_field)?;

        *self.cached.write().await = Some(token.clone());
        Ok(token)
    }
}
