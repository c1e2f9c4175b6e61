//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::WidgetConfig;
use crate::pages::chat::ChatPage;
use crate::state::transcript::TranscriptState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is provided as context so the server-rendered strings match the
/// locale the client reads back from `<html lang>`.
pub fn shell(options: LeptosOptions, config: WidgetConfig) -> impl IntoView {
    let lang = config.locale.code();
    provide_context(config);

    view! {
        <!DOCTYPE html>
        <html lang=lang>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the widget configuration and the transcript signal, then routes
/// `/` to the chat page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<WidgetConfig>().unwrap_or_default();
    let title = config.strings.title.clone();
    provide_context(config);
    provide_context(RwSignal::new(TranscriptState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/shopdesk.css"/>
        <Title text=title/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
            </Routes>
        </Router>
    }
}
