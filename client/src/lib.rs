//! # shopdesk-client
//!
//! Leptos + WASM chat widget for the shop assistant.
//!
//! The widget captures a message, renders it immediately, relays it to the
//! same-origin `/chat` endpoint and renders the reply (or a fixed apology when
//! delivery fails). Rendering and networking are injected into [`widget::ChatWidget`]
//! through the [`widget::TranscriptView`] and [`net::transport::ChatTransport`]
//! seams so the interaction loop can be exercised natively in tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
pub mod widget;

/// WASM entry point: hydrate the server-rendered chat page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;
    use crate::config::{Locale, WidgetConfig};

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    // The server stamps the configured locale on <html lang>; mirror it so
    // hydrated strings match the SSR output.
    let locale = document()
        .document_element()
        .and_then(|el| el.get_attribute("lang"))
        .and_then(|code| Locale::from_code(&code))
        .unwrap_or_default();

    leptos::mount::hydrate_body(move || {
        provide_context(WidgetConfig::for_locale(locale));
        view! { <App/> }
    });
}
