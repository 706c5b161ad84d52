//! Alexa Smart Home skill: directive routing and response envelopes.

pub mod directive;
pub mod discovery;
pub mod envelope;
pub mod power;
pub mod router;

#[cfg(test)]
mod test_support;

pub use directive::{Directive, DirectiveHeader, PowerState, RequestEndpoint, SmartHomeRequest};
pub use envelope::{build_error, AlexaResponse, ErrorType};
pub use router::Router;
