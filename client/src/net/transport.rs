//! The widget's network seam.

use std::future::Future;

use super::api::{self, DeliveryError};

/// Delivers one user message and resolves to the assistant's reply.
///
/// Implemented over HTTP by [`HttpTransport`]; tests substitute scripted
/// transports.
pub trait ChatTransport {
    fn send(&self, message: String) -> impl Future<Output = Result<String, DeliveryError>>;
}

/// `POST {endpoint}` with `{ "message": ... }`, expecting `{ "reply": ... }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ChatTransport for HttpTransport {
    async fn send(&self, message: String) -> Result<String, DeliveryError> {
        api::post_chat_message(&self.endpoint, &message).await
    }
}
