//! Widget configuration: endpoints, scroll timing, and localized strings.
//!
//! The server picks a [`Locale`] and stamps it on the page; the root `App`
//! provides the matching [`WidgetConfig`] through Leptos context.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::transcript::{Message, Role};

pub const DEFAULT_CHAT_ENDPOINT: &str = "/chat";
pub const DEFAULT_HISTORY_ENDPOINT: &str = "/chat/history";
pub const DEFAULT_SCROLL_DELAY_MS: u32 = 100;

/// Display language of the widget chrome and fixed messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    /// BCP 47 language tag used for `<html lang>`.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Some(Self::En),
            "ru" | "ru-ru" => Some(Self::Ru),
            _ => None,
        }
    }

    pub fn strings(self) -> WidgetStrings {
        match self {
            Self::En => WidgetStrings::english(),
            Self::Ru => WidgetStrings::russian(),
        }
    }
}

/// Fixed labels and texts shown by the widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetStrings {
    pub title: String,
    pub user_author: String,
    pub assistant_author: String,
    pub system_author: String,
    /// Apology shown in place of a reply when delivery fails.
    pub error_text: String,
    pub input_placeholder: String,
    pub empty_text: String,
    pub send_label: String,
}

impl Default for WidgetStrings {
    fn default() -> Self {
        Self::english()
    }
}

impl WidgetStrings {
    pub fn english() -> Self {
        Self {
            title: "Shop assistant".to_owned(),
            user_author: "You".to_owned(),
            assistant_author: "AI Assistant".to_owned(),
            system_author: "System".to_owned(),
            error_text: "Sorry, something went wrong while sending your message. Please try again.".to_owned(),
            input_placeholder: "Type a message...".to_owned(),
            empty_text: "Ask about any product in the catalog to start the conversation.".to_owned(),
            send_label: "Send".to_owned(),
        }
    }

    pub fn russian() -> Self {
        Self {
            title: "AI Помощник магазина".to_owned(),
            user_author: "Вы".to_owned(),
            assistant_author: "AI Помощник".to_owned(),
            system_author: "Система".to_owned(),
            error_text: "Извините, произошла ошибка при отправке сообщения. Попробуйте еще раз.".to_owned(),
            input_placeholder: "Введите сообщение...".to_owned(),
            empty_text: "Спросите о любом товаре из каталога, чтобы начать диалог.".to_owned(),
            send_label: "Отправить".to_owned(),
        }
    }

    pub fn user_message(&self, text: impl Into<String>) -> Message {
        Message::new(Role::User, self.user_author.clone(), text)
    }

    pub fn assistant_message(&self, text: impl Into<String>) -> Message {
        Message::new(Role::Assistant, self.assistant_author.clone(), text)
    }

    pub fn error_message(&self) -> Message {
        Message::new(Role::SystemError, self.system_author.clone(), self.error_text.clone())
    }
}

/// Everything the chat panel needs besides its DOM nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetConfig {
    pub locale: Locale,
    pub endpoint: String,
    pub history_endpoint: String,
    pub scroll_delay_ms: u32,
    pub strings: WidgetStrings,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

impl WidgetConfig {
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            locale,
            endpoint: DEFAULT_CHAT_ENDPOINT.to_owned(),
            history_endpoint: DEFAULT_HISTORY_ENDPOINT.to_owned(),
            scroll_delay_ms: DEFAULT_SCROLL_DELAY_MS,
            strings: locale.strings(),
        }
    }
}
