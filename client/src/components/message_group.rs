//! Message group and bubble rendering.

use leptos::prelude::*;

use crate::state::transcript::{Exchange, Message};

/// One exchange: the user's bubble followed by its reply or error, if any.
#[component]
pub fn MessageGroup(exchange: Exchange) -> impl IntoView {
    let Exchange { request, response, .. } = exchange;

    view! {
        <div class="message-group">
            <MessageBubble message=request/>
            {response.map(|message| view! { <MessageBubble message=message/> })}
        </div>
    }
}

/// A single bubble. The body is inserted as escaped markup only.
#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    let class = format!("message {}", message.role.css_class());
    let avatar = message.role.avatar();
    let body = message.body_html();

    view! {
        <div class=class>
            <div class="message-avatar">{avatar}</div>
            <div class="message-content">
                <span class="message-author">{message.author}</span>
                <p inner_html=body></p>
            </div>
        </div>
    }
}
