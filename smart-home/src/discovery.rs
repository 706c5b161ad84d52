//! `Alexa.Discovery` handling.

use std::sync::Arc;

use shared::{EntityStore, Result};
use tracing::info;

use crate::directive::{Directive, DISCOVERY_NAMESPACE};
use crate::envelope::{
    AlexaResponse, DiscoveryEndpoint, DiscoveryPayload, Event, ResponseHeader, ResponsePayload,
};

pub const DISCOVER_RESPONSE_NAME: &str = "Discover.Response";

/// Answers discovery with every entity in the store.
pub struct DiscoveryHandler {
    store: Arc<dyn EntityStore>,
}

impl DiscoveryHandler {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    /// Build the `Discover.Response` for `directive`.
    ///
    /// Store failures are returned as-is; no partial endpoint list is produced.
    pub async fn discover(&self, directive: &Directive) -> Result<AlexaResponse> {
        let endpoints: Vec<DiscoveryEndpoint> = self
            .store
            .list_entities()
            .await?
            .into_iter()
            .map(DiscoveryEndpoint::from)
            .collect();

        info!("Discovered {} endpoints", endpoints.len());

        Ok(AlexaResponse {
            event: Event {
                header: ResponseHeader::reply_to(
                    directive,
                    DISCOVERY_NAMESPACE,
                    DISCOVER_RESPONSE_NAME,
                ),
                endpoint: None,
                payload: ResponsePayload::Discovery(DiscoveryPayload { endpoints }),
            },
        })
    }
}
