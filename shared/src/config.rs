//! Configuration management for the skill Lambda.

use std::env;

/// DynamoDB table holding the Home Assistant entity records.
pub const DEFAULT_ENTITY_TABLE: &str = "home-assistant-entities";
/// Secrets Manager id of the secret holding the Home Assistant token.
pub const DEFAULT_SECRET_ID: &str = "/autofrog-ha-skill/secrets";
/// Field of the secret JSON that carries the token.
pub const DEFAULT_TOKEN_FIELD: &str = "ha_token";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name of the entity table scanned during discovery
    pub entity_table_name: String,
    /// Id or ARN of the Home Assistant secret
    pub ha_secret_id: String,
    /// Name of the token field inside the secret
    pub ha_token_field: String,
    /// AWS region
    pub aws_region: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            entity_table_name: var("ENTITY_TABLE_NAME", DEFAULT_ENTITY_TABLE),
            ha_secret_id: var("HA_SECRET_ID", DEFAULT_SECRET_ID),
            ha_token_field: var("HA_TOKEN_FIELD", DEFAULT_TOKEN_FIELD),
            aws_region: var("AWS_REGION", "us-east-1"),
        }
    }
}
