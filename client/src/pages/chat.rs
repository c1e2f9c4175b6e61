//! Chat page: header plus the chat panel.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::config::WidgetConfig;

#[component]
pub fn ChatPage() -> impl IntoView {
    let config = expect_context::<WidgetConfig>();

    view! {
        <main class="chat-page">
            <header class="chat-header">
                <h1>{config.strings.title}</h1>
            </header>
            <ChatPanel/>
        </main>
    }
}
