//! `Alexa.PowerController` handling.

use std::sync::Arc;

use shared::{CredentialSource, Result};
use tracing::info;

use crate::directive::{Directive, PowerState, RequestEndpoint};
use crate::envelope::{
    AlexaResponse, Event, PowerControllerPayload, ResponseHeader, ResponsePayload, ERROR_NAMESPACE,
    ERROR_RESPONSE_NAME,
};

/// Handles power directives for a single endpoint.
///
/// No device command is issued yet: every directive is answered with an
/// `ErrorResponse` that has an empty payload and echoes the request endpoint.
pub struct PowerControlHandler {
    // TODO: fetch the Home Assistant token here and call its switch services.
    #[allow(dead_code)]
    credentials: Arc<dyn CredentialSource>,
}

impl PowerControlHandler {
    pub fn new(credentials: Arc<dyn CredentialSource>) -> Self {
        Self { credentials }
    }

    pub async fn set_power(
        &self,
        directive: &Directive,
        endpoint: &RequestEndpoint,
        requested: Option<PowerState>,
    ) -> Result<AlexaResponse> {
        info!(
            endpoint_id = %endpoint.endpoint_id,
            requested = ?requested,
            "Power control is not implemented"
        );

        Ok(AlexaResponse {
            event: Event {
                header: ResponseHeader::reply_to(directive, ERROR_NAMESPACE, ERROR_RESPONSE_NAME),
                endpoint: Some(endpoint.clone()),
                payload: ResponsePayload::PowerController(PowerControllerPayload::default()),
            },
        })
    }
}
