//! Chat widget interaction loop.
//!
//! DESIGN
//! ======
//! `ChatWidget` owns no DOM and no network code. It receives a
//! [`TranscriptView`] (the rendering surface) and a [`ChatTransport`] and
//! drives one linear flow per submission:
//!
//! input -> local render -> network call -> reply-or-error render
//!
//! Everything up to the network call happens synchronously inside
//! [`ChatWidget::submit`], so the user's bubble is visible before any
//! response can resolve. The remainder is returned as a future for the caller
//! to spawn.
//!
//! ERROR HANDLING
//! ==============
//! Delivery failures are logged and rendered as the fixed apology bubble.
//! They never escape the pending future, and every non-blank submission ends
//! with exactly one response entry.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use std::future::Future;

use crate::config::WidgetStrings;
use crate::net::transport::ChatTransport;
use crate::state::transcript::{ExchangeId, Message};
use crate::util::keys::is_submit_key;

/// Rendering surface the widget writes to.
///
/// Methods take `&self`; implementations hold shared handles (signals, node
/// refs) to the transcript container, placeholder and input.
pub trait TranscriptView {
    /// Append a new message group holding `request`.
    fn open_exchange(&self, request: Message) -> ExchangeId;
    /// Append `response` to the group opened for `id`.
    fn resolve_exchange(&self, id: ExchangeId, response: Message);
    /// Drop the empty-conversation placeholder if it is shown.
    fn remove_placeholder(&self);
    /// Clear the input field and give it focus.
    fn reset_input(&self);
    /// Scroll the transcript to its last element once layout settles.
    fn scroll_to_bottom(&self);
}

/// The chat widget: a view, a transport, and the strings it renders with.
#[derive(Clone)]
pub struct ChatWidget<V, T> {
    view: V,
    transport: T,
    strings: WidgetStrings,
}

impl<V, T> ChatWidget<V, T>
where
    V: TranscriptView + Clone + 'static,
    T: ChatTransport + Clone + 'static,
{
    pub fn new(view: V, transport: T, strings: WidgetStrings) -> Self {
        Self { view, transport, strings }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Page load: settle the scroll position once.
    pub fn mount(&self) {
        self.view.scroll_to_bottom();
    }

    /// Keydown in the input: submit `raw_text` on Enter without Shift.
    ///
    /// Any other key, Shift+Enter, or an Enter that confirms an IME
    /// composition returns `None` and leaves the view untouched.
    #[must_use = "the pending delivery does nothing unless awaited or spawned"]
    pub fn submit_on_key(
        &self,
        key: &str,
        shift: bool,
        composing: bool,
        raw_text: &str,
    ) -> Option<impl Future<Output = ()> + use<V, T>> {
        if !is_submit_key(key, shift, composing) {
            return None;
        }
        self.submit(raw_text)
    }

    /// Submit the raw input value.
    ///
    /// Returns `None` without touching the view when the trimmed text is
    /// empty. Otherwise the user bubble is rendered, the placeholder removed,
    /// the input reset and a scroll scheduled before returning the pending
    /// delivery.
    #[must_use = "the pending delivery does nothing unless awaited or spawned"]
    pub fn submit(&self, raw_text: &str) -> Option<impl Future<Output = ()> + use<V, T>> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.view.open_exchange(self.strings.user_message(text));
        self.view.remove_placeholder();
        self.view.reset_input();
        self.view.scroll_to_bottom();

        let view = self.view.clone();
        let transport = self.transport.clone();
        let strings = self.strings.clone();
        let text = text.to_owned();

        Some(async move {
            let response = match transport.send(text).await {
                Ok(reply) => strings.assistant_message(reply),
                Err(e) => {
                    leptos::logging::error!("chat delivery failed: {e}");
                    strings.error_message()
                }
            };
            view.resolve_exchange(id, response);
            view.scroll_to_bottom();
        })
    }
}
