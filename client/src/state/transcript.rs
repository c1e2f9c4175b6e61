//! Conversation transcript: messages grouped into request/response exchanges.
//!
//! DESIGN
//! ======
//! The transcript is append-only. A submission opens an exchange holding the
//! user message; the single response (reply or error) later resolves that
//! same exchange by id. Responses to concurrent submissions may arrive in any
//! order, but each one lands in the group of the request that produced it.

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

use crate::util::escape::escape_html;

/// Who a message is attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    SystemError,
}

impl Role {
    /// Avatar glyph shown next to the bubble.
    pub fn avatar(self) -> &'static str {
        match self {
            Self::User => "👤",
            Self::Assistant => "🤖",
            Self::SystemError => "⚠️",
        }
    }

    /// Bubble modifier class. Errors share the assistant-side styling.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "user-message",
            Self::Assistant | Self::SystemError => "ai-message",
        }
    }
}

/// A single rendered chat message. `text` is stored raw and escaped on render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub author: String,
    pub text: String,
    pub role: Role,
}

impl Message {
    pub fn new(role: Role, author: impl Into<String>, text: impl Into<String>) -> Self {
        Self { author: author.into(), text: text.into(), role }
    }

    /// Escaped body markup, the only form in which `text` is inserted into the page.
    pub fn body_html(&self) -> String {
        escape_html(&self.text)
    }
}

/// Identifier of an exchange within one transcript.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExchangeId(u64);

/// One user message and, once it arrives, its reply or error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exchange {
    pub id: ExchangeId,
    pub request: Message,
    pub response: Option<Message>,
}

impl Exchange {
    /// Messages of this exchange in display order.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        std::iter::once(&self.request).chain(self.response.as_ref())
    }

    /// List key: stable while pending, changes once when the response lands.
    pub fn render_key(&self) -> (ExchangeId, bool) {
        (self.id, self.response.is_some())
    }
}

/// Ordered transcript plus the empty-conversation placeholder flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptState {
    exchanges: Vec<Exchange>,
    next_id: u64,
    placeholder_visible: bool,
}

impl Default for TranscriptState {
    fn default() -> Self {
        Self { exchanges: Vec::new(), next_id: 0, placeholder_visible: true }
    }
}

impl TranscriptState {
    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    pub fn placeholder_visible(&self) -> bool {
        self.placeholder_visible
    }

    /// Flattened messages in display order.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.exchanges.iter().flat_map(|ex| ex.messages())
    }

    /// Append a new exchange for `request` and return its id.
    pub fn open_exchange(&mut self, request: Message) -> ExchangeId {
        let id = ExchangeId(self.next_id);
        self.next_id += 1;
        self.exchanges.push(Exchange { id, request, response: None });
        id
    }

    /// Attach the response for `id`.
    ///
    /// Returns `false` (and changes nothing) if the exchange is unknown or
    /// already resolved: each submission gets at most one response entry.
    pub fn resolve_exchange(&mut self, id: ExchangeId, response: Message) -> bool {
        match self.exchanges.iter_mut().find(|ex| ex.id == id) {
            Some(exchange) if exchange.response.is_none() => {
                exchange.response = Some(response);
                true
            }
            _ => false,
        }
    }

    pub fn remove_placeholder(&mut self) {
        self.placeholder_visible = false;
    }

    /// Load previously recorded exchanges into an untouched transcript.
    ///
    /// Ignored once the user has submitted anything, so history never lands
    /// after live messages. Returns whether anything was loaded.
    pub fn seed_history(&mut self, history: impl IntoIterator<Item = (Message, Message)>) -> bool {
        if !self.exchanges.is_empty() {
            return false;
        }
        for (request, response) in history {
            let id = self.open_exchange(request);
            self.resolve_exchange(id, response);
        }
        if self.exchanges.is_empty() {
            return false;
        }
        self.remove_placeholder();
        true
    }
}
