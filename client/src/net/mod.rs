//! Networking modules for the chat endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the JSON wire schema shared with the server, `api` performs
//! the HTTP calls, and `transport` exposes them behind the `ChatTransport`
//! seam the widget depends on.

pub mod api;
pub mod transport;
pub mod types;
