mod config;
mod db;
mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use shopdesk_client::config::WidgetConfig;

use crate::llm::LlmChat;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");

    let pool = db::init_pool(&config.database_url)
        .await
        .expect("database init failed");

    // Non-fatal: /chat answers 503 until the LLM is configured.
    let llm: Option<Arc<dyn LlmChat>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured; chat replies disabled");
            None
        }
    };

    let base_prompt = services::assistant::load_prompt(&config.prompt_file).await;
    let products = services::catalog::load_products_or_empty(&pool).await;
    let system_prompt = services::assistant::build_system_prompt(&base_prompt, &products);

    let state = state::AppState::new(pool, llm, system_prompt)
        .with_history_limit(config.history_limit)
        .with_widget(WidgetConfig::for_locale(config.locale));

    let app = routes::leptos_app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, locale = config.locale.code(), "shopdesk listening");
    axum::serve(listener, app).await.expect("server failed");
}
