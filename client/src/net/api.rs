//! REST API helpers for the chat endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning
//! [`DeliveryError::Unavailable`], since these endpoints are only called from
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every way a call can fail (request, status, body) collapses into one
//! `DeliveryError`. Callers render a single apology for all of them; the
//! variant only feeds diagnostics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::{ChatReply, ChatRequest, HistoryResponse};
use super::types::HistoryEntry;

/// Why a reply could not be obtained.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    /// The request could not be built or sent (offline, DNS, CORS, ...).
    #[error("request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-success HTTP status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// The body was not the expected JSON payload.
    #[error("malformed response: {0}")]
    Decode(String),

    /// No browser networking in this build.
    #[error("chat endpoint not available outside the browser")]
    Unavailable,
}

/// Send `message` to the chat endpoint and return the assistant's reply.
///
/// # Errors
///
/// Returns a [`DeliveryError`] on network failure, non-success status, or a
/// body without a string `reply` field.
pub async fn post_chat_message(endpoint: &str, message: &str) -> Result<String, DeliveryError> {
    #[cfg(feature = "hydrate")]
    {
        let body = ChatRequest { message: message.to_owned() };
        let resp = gloo_net::http::Request::post(endpoint)
            .json(&body)
            .map_err(|e| DeliveryError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| DeliveryError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(DeliveryError::Status(resp.status()));
        }
        let reply: ChatReply = resp
            .json()
            .await
            .map_err(|e| DeliveryError::Decode(e.to_string()))?;
        Ok(reply.reply)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, message);
        Err(DeliveryError::Unavailable)
    }
}

/// Fetch recorded exchanges, oldest first.
///
/// # Errors
///
/// Returns a [`DeliveryError`] under the same conditions as [`post_chat_message`].
pub async fn fetch_history(endpoint: &str) -> Result<Vec<HistoryEntry>, DeliveryError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(endpoint)
            .send()
            .await
            .map_err(|e| DeliveryError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(DeliveryError::Status(resp.status()));
        }
        let body: HistoryResponse = resp
            .json()
            .await
            .map_err(|e| DeliveryError::Decode(e.to_string()))?;
        Ok(body.exchanges)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err(DeliveryError::Unavailable)
    }
}
