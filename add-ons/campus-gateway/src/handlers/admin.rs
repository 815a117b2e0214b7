//! Admin surface: session login/logout and the knowledge base editor.
//!
//! `knowledge_base`, `add_question` and `stats` sit behind [`require_admin`](crate::session::require_admin).

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::IntoResponse;
use axum::Json;
use campus_core::{CampusError, KnowledgeBase};

use crate::error::ApiError;
use crate::session::{cleared_cookie, session_cookie, token_from_headers};
use crate::AppState;

const ALL_FIELDS_REQUIRED: &str = "All fields are required";
const FAILED_TO_ADD: &str = "Failed to add question";

#[derive(serde::Deserialize)]
pub(crate) struct LoginRequest {
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

/// POST /admin/login
pub(crate) async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body?;
    let accepted = req.username.as_deref() == Some(state.config.admin_username.as_str())
        && req.password.as_deref() == Some(state.config.admin_password.as_str());
    if !accepted {
        tracing::warn!(target: "campus::admin", username = ?req.username, "Admin login rejected");
        return Err(CampusError::Auth("Invalid credentials".to_string()).into());
    }

    let token = state.sessions.issue();
    tracing::info!(target: "campus::admin", active_sessions = state.sessions.len(), "Admin logged in");
    Ok((
        [(header::SET_COOKIE, session_cookie(&token, state.sessions.ttl()))],
        Json(serde_json::json!({ "status": "success", "message": "Login successful" })),
    ))
}

/// POST /admin/logout – always succeeds.
pub(crate) async fn logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(token) = token_from_headers(&headers) {
        state.sessions.revoke(&token);
        tracing::info!(target: "campus::admin", "Admin logged out");
    }
    (
        [(header::SET_COOKIE, cleared_cookie())],
        Json(serde_json::json!({ "status": "success", "message": "Logout successful" })),
    )
}

/// GET /admin/check_auth
pub(crate) async fn check_auth(State(state): State<AppState>, headers: HeaderMap) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "authenticated": state.sessions.is_authenticated(&headers) }))
}

/// GET /admin/knowledge_base
pub(crate) async fn knowledge_base(State(state): State<AppState>) -> Json<KnowledgeBase> {
    Json(state.knowledge.snapshot())
}

/// `patterns` arrives either as a list or as one comma-separated string.
#[derive(serde::Deserialize)]
#[serde(untagged)]
pub(crate) enum PatternsField {
    List(Vec<String>),
    Text(String),
}

impl PatternsField {
    fn into_patterns(self) -> Vec<String> {
        let raw = match self {
            Self::List(items) => items,
            Self::Text(text) => text.split(',').map(str::to_string).collect(),
        };
        raw.into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect()
    }
}

#[derive(serde::Deserialize)]
pub(crate) struct AddQuestionRequest {
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    patterns: Option<PatternsField>,
    #[serde(default)]
    answer: Option<String>,
}

/// POST /admin/add_question
pub(crate) async fn add_question(
    State(state): State<AppState>,
    body: Result<Json<AddQuestionRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Json(req) = body.map_err(|rejection| {
        tracing::debug!(target: "campus::admin", error = %rejection.body_text(), "Rejected add_question body");
        ApiError::validation(ALL_FIELDS_REQUIRED)
    })?;
    let category = req.category.filter(|c| !c.trim().is_empty());
    let patterns = req.patterns.map(PatternsField::into_patterns).filter(|p| !p.is_empty());
    let answer = req.answer.filter(|a| !a.trim().is_empty());
    let (Some(category), Some(patterns), Some(answer)) = (category, patterns, answer) else {
        return Err(ApiError::validation(ALL_FIELDS_REQUIRED));
    };

    // The document rewrite is blocking file I/O.
    let knowledge = Arc::clone(&state.knowledge);
    let added = tokio::task::spawn_blocking(move || knowledge.add_question(&category, &patterns, &answer))
        .await
        .map_err(|e| {
            tracing::error!(target: "campus::knowledge", error = %e, "add_question task failed");
            ApiError::internal(FAILED_TO_ADD)
        })?;
    added.map_err(|e| {
        if e.is_storage() {
            tracing::error!(target: "campus::knowledge", error = %e, "Failed to persist knowledge base");
            ApiError::internal(FAILED_TO_ADD)
        } else {
            e.into()
        }
    })?;

    Ok(Json(serde_json::json!({ "status": "success", "message": "Question added successfully" })))
}

/// GET /admin/stats
pub(crate) async fn stats(State(state): State<AppState>) -> Json<serde_json::Value> {
    let kb = state.knowledge.stats();
    Json(serde_json::json!({
        "total_questions": kb.total_questions,
        "total_categories": kb.total_categories,
        "conversation_count": state.selector.log().len(),
    }))
}
