//! Directive routing: the single place handler failures become error envelopes.

use std::sync::Arc;

use shared::{CredentialSource, EntityStore, Result};
use tracing::{error, info, warn};

use crate::directive::{Command, Directive, SmartHomeRequest};
use crate::discovery::DiscoveryHandler;
use crate::envelope::{build_error, AlexaResponse, ErrorType};
use crate::power::PowerControlHandler;

pub struct Router {
    discovery: DiscoveryHandler,
    power: PowerControlHandler,
}

impl Router {
    pub fn new(store: Arc<dyn EntityStore>, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            discovery: DiscoveryHandler::new(store),
            power: PowerControlHandler::new(credentials),
        }
    }

    /// Answer one directive. Never fails: errors are turned into `INTERNAL_ERROR`.
    pub async fn route(&self, request: &SmartHomeRequest) -> AlexaResponse {
        let directive = &request.directive;
        info!(
            namespace = %directive.header.namespace,
            name = %directive.header.name,
            message_id = %directive.header.message_id,
            "Handling directive"
        );

        match self.dispatch(directive).await {
            Ok(response) => response,
            Err(e) => {
                error!(downstream = e.is_downstream(), "Error handling directive: {}", e);
                build_error(directive, ErrorType::InternalError, "An internal error occurred.")
            }
        }
    }

    async fn dispatch(&self, directive: &Directive) -> Result<AlexaResponse> {
        match directive.command() {
            Command::Discover => self.discovery.discover(directive).await,
            Command::SetPower {
                endpoint,
                requested,
            } => self.power.set_power(directive, endpoint, requested).await,
            Command::Rejected(rejection) => {
                warn!(
                    namespace = %directive.header.namespace,
                    kind = ?rejection.kind,
                    "Rejected directive: {}",
                    rejection.message
                );
                Ok(build_error(directive, rejection.kind, rejection.message))
            }
        }
    }
}
