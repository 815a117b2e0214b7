//! Public chat endpoints: message → response, conversation tail, analytics.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use campus_core::ConversationRecord;

use crate::error::ApiError;
use crate::AppState;

/// Placeholder analytics, reported as-is; nothing measures them.
pub(crate) const ANALYTICS_SUCCESS_RATE: u32 = 95;
pub(crate) const ANALYTICS_AVG_RESPONSE_TIME: f64 = 0.8;

#[derive(serde::Deserialize)]
pub(crate) struct ChatRequest {
    /// Absent or null message is answered like empty text (fallback).
    #[serde(default)]
    message: Option<String>,
}

/// POST /get_response
pub(crate) async fn get_response(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(req) = body?;
    let response = state.selector.respond(req.message.as_deref().unwrap_or_default());
    Ok(Json(serde_json::json!({
        "response": response,
        "timestamp": chrono::Local::now().format("%H:%M:%S").to_string(),
        "status": "success",
    })))
}

/// GET /api/conversation_history – the most recent records, oldest first.
pub(crate) async fn conversation_history(State(state): State<AppState>) -> Json<Vec<ConversationRecord>> {
    Json(state.selector.log().recent(state.config.history_limit))
}

/// GET /api/analytics
pub(crate) async fn analytics(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "total_questions": state.selector.log().len(),
        "success_rate": ANALYTICS_SUCCESS_RATE,
        "avg_response_time": ANALYTICS_AVG_RESPONSE_TIME,
    }))
}
