//! Chat panel: transcript, placeholder, and the message form.
//!
//! DESIGN
//! ======
//! The panel owns the DOM handles (container, input) and hands them to a
//! `ChatWidget` through `DomTranscript`, the browser implementation of
//! `TranscriptView`. The widget decides what to render; this module only
//! decides how.

use leptos::prelude::*;

use crate::components::message_group::MessageGroup;
use crate::config::WidgetConfig;
use crate::net::api;
use crate::net::transport::HttpTransport;
use crate::state::transcript::{Exchange, ExchangeId, Message, TranscriptState};
use crate::util::keys::is_submit_key;
use crate::widget::{ChatWidget, TranscriptView};

/// Browser-side transcript view backed by signals and node refs.
#[derive(Clone, Copy)]
struct DomTranscript {
    transcript: RwSignal<TranscriptState>,
    input: RwSignal<String>,
    chat_box: NodeRef<leptos::html::Div>,
    input_ref: NodeRef<leptos::html::Textarea>,
    scroll_delay_ms: u32,
}

impl TranscriptView for DomTranscript {
    fn open_exchange(&self, request: Message) -> ExchangeId {
        self.transcript
            .try_update(|t| t.open_exchange(request))
            .unwrap_or_default()
    }

    fn resolve_exchange(&self, id: ExchangeId, response: Message) {
        self.transcript.update(|t| {
            t.resolve_exchange(id, response);
        });
    }

    fn remove_placeholder(&self) {
        if self.transcript.with_untracked(TranscriptState::placeholder_visible) {
            self.transcript.update(TranscriptState::remove_placeholder);
        }
    }

    fn reset_input(&self) {
        self.input.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = self.input_ref.get_untracked() {
                let _ = el.focus();
            }
        }
    }

    fn scroll_to_bottom(&self) {
        #[cfg(feature = "hydrate")]
        {
            // Deferred so freshly inserted bubbles are laid out first.
            let chat_box = self.chat_box;
            gloo_timers::callback::Timeout::new(self.scroll_delay_ms, move || {
                if let Some(el) = chat_box.get_untracked() {
                    el.set_scroll_top(el.scroll_height());
                }
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.chat_box, self.input_ref, self.scroll_delay_ms);
        }
    }
}

/// Chat panel showing the transcript and an input for sending new messages.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let config = expect_context::<WidgetConfig>();
    let transcript = expect_context::<RwSignal<TranscriptState>>();

    let input = RwSignal::new(String::new());
    let chat_box = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    let dom = DomTranscript { transcript, input, chat_box, input_ref, scroll_delay_ms: config.scroll_delay_ms };
    let widget = ChatWidget::new(dom, HttpTransport::new(config.endpoint.clone()), config.strings.clone());

    // Page load: settle the scroll position, then preload recorded history.
    let history_endpoint = config.history_endpoint.clone();
    let history_strings = config.strings.clone();
    let mount_widget = widget.clone();
    Effect::new(move || {
        mount_widget.mount();

        let endpoint = history_endpoint.clone();
        let strings = history_strings.clone();
        leptos::task::spawn_local(async move {
            match api::fetch_history(&endpoint).await {
                Ok(entries) => {
                    let pairs = entries
                        .into_iter()
                        .map(|e| (strings.user_message(e.message), strings.assistant_message(e.reply)));
                    let seeded = transcript
                        .try_update(|t| t.seed_history(pairs))
                        .unwrap_or(false);
                    if seeded {
                        dom.scroll_to_bottom();
                    }
                }
                Err(e) => leptos::logging::warn!("chat history unavailable: {e}"),
            }
        });
    });

    let on_submit = {
        let widget = widget.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if let Some(pending) = widget.submit(&input.get_untracked()) {
                leptos::task::spawn_local(pending);
            }
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let (key, shift, composing) = (ev.key(), ev.shift_key(), ev.is_composing());
        if is_submit_key(&key, shift, composing) {
            ev.prevent_default();
        }
        if let Some(pending) = widget.submit_on_key(&key, shift, composing, &input.get_untracked()) {
            leptos::task::spawn_local(pending);
        }
    };

    let empty_text = config.strings.empty_text.clone();
    let placeholder = config.strings.input_placeholder.clone();
    let send_label = config.strings.send_label.clone();

    view! {
        <div class="chat-container">
            <div id="chat-box" class="chat-box" node_ref=chat_box>
                {move || {
                    transcript
                        .with(TranscriptState::placeholder_visible)
                        .then(|| view! { <div class="empty-chat">{empty_text.clone()}</div> })
                }}
                // Keyed by id and resolution, so only a group that just got
                // its reply is rebuilt.
                <For
                    each=move || transcript.with(|t| t.exchanges().to_vec())
                    key=Exchange::render_key
                    children=|exchange| view! { <MessageGroup exchange=exchange/> }
                />
            </div>

            <form id="chat-form" class="chat-form" on:submit=on_submit>
                <textarea
                    id="user-input"
                    class="chat-input"
                    rows="1"
                    placeholder=placeholder
                    node_ref=input_ref
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button class="send-button" type="submit" disabled=move || input.get().trim().is_empty()>
                    {send_label}
                </button>
            </form>
        </div>
    }
}
