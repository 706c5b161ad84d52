//! Shared library for the smart home skill Lambda.
//!
//! This crate provides configuration, error types, the stored entity model and
//! the AWS-backed collaborators (entity table, token secret).

pub mod config;
pub mod error;
pub mod models;
pub mod secrets;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use models::{Capability, EntityRecord};
pub use secrets::{extract_token, get_secret, CredentialSource, SecretsManagerCredentials};
pub use store::{DynamoEntityStore, EntityStore};
