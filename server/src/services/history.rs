//! Chat history persistence.
//!
//! Each answered exchange is stored as one `chat_history` row. Recording
//! happens off the request path so a slow or failing database never delays
//! or changes the reply the visitor sees.

use shopdesk_client::net::types::HistoryEntry;
use sqlx::PgPool;
use tokio::task::JoinHandle;
use tracing::{debug, error};

/// Insert one exchange and return its row id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub async fn record_exchange(pool: &PgPool, user_message: &str, llm_reply: &str) -> Result<i64, sqlx::Error> {
    let (id,) = sqlx::query_as::<_, (i64,)>(
        "INSERT INTO chat_history (user_message, llm_reply) VALUES ($1, $2) RETURNING id",
    )
    .bind(user_message)
    .bind(llm_reply)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Record an exchange on a background task, logging the outcome.
pub fn spawn_record_exchange(pool: PgPool, user_message: String, llm_reply: String) -> JoinHandle<()> {
    tokio::spawn(async move {
        match record_exchange(&pool, &user_message, &llm_reply).await {
            Ok(id) => debug!(id, "chat exchange recorded"),
            Err(e) => error!(error = %e, "chat exchange record failed"),
        }
    })
}

/// Return the newest `limit` exchanges, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn recent_exchanges(pool: &PgPool, limit: i64) -> Result<Vec<HistoryEntry>, sqlx::Error> {
    let rows = sqlx::query_as::<_, (String, String, String)>(
        r#"SELECT user_message, llm_reply,
                  to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"')
           FROM (
               SELECT id, user_message, llm_reply, created_at
               FROM chat_history
               ORDER BY created_at DESC, id DESC
               LIMIT $1
           ) recent
           ORDER BY created_at ASC, id ASC"#,
    )
    .bind(limit.max(0))
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(history_entry).collect())
}

fn history_entry((message, reply, created_at): (String, String, String)) -> HistoryEntry {
    HistoryEntry { message, reply, created_at: Some(created_at) }
}

#[cfg(test)]
#[path = "history_test.rs"]
mod tests;
