//! Chat routes: answer a message and replay recorded history.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use shopdesk_client::net::types::{ChatReply, ChatRequest, HistoryResponse};
use tracing::{error, warn};

use crate::services::assistant::{self, AssistantError};
use crate::services::history;
use crate::state::AppState;

/// `POST /chat`: answer one visitor message.
///
/// Success is always `200 {"reply": ...}` with real assistant text. Every
/// failure is a non-2xx status so the widget shows its own apology.
pub async fn chat(State(state): State<AppState>, Json(body): Json<ChatRequest>) -> Result<Json<ChatReply>, StatusCode> {
    let reply = assistant::reply(state.llm.as_deref(), &state.system_prompt, &body.message)
        .await
        .map_err(assistant_error_to_status)?;

    let _record = history::spawn_record_exchange(state.pool.clone(), body.message.trim().to_owned(), reply.clone());

    Ok(Json(ChatReply { reply }))
}

/// `GET /chat/history`: most recent exchanges, oldest first.
pub async fn history(State(state): State<AppState>) -> Result<Json<HistoryResponse>, StatusCode> {
    let exchanges = history::recent_exchanges(&state.pool, state.history_limit)
        .await
        .map_err(|e| {
            error!(error = %e, "chat history query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    Ok(Json(HistoryResponse { exchanges }))
}

pub(crate) fn assistant_error_to_status(err: AssistantError) -> StatusCode {
    match err {
        AssistantError::EmptyMessage => StatusCode::BAD_REQUEST,
        AssistantError::LlmNotConfigured => {
            warn!("chat request rejected: LLM not configured");
            StatusCode::SERVICE_UNAVAILABLE
        }
        AssistantError::EmptyReply => {
            warn!("LLM returned an empty reply");
            StatusCode::BAD_GATEWAY
        }
        AssistantError::Llm(e) => {
            error!(error = %e, "LLM call failed");
            StatusCode::BAD_GATEWAY
        }
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
