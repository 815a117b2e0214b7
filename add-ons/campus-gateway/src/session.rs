//! Server-side admin sessions: an opaque random token in an HttpOnly cookie,
//! looked up in a concurrent map with a fixed lifetime.

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use dashmap::DashMap;
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

pub(crate) const SESSION_COOKIE: &str = "campus_session";

pub(crate) struct SessionStore {
    sessions: DashMap<String, Instant>,
    ttl: Duration,
}

impl SessionStore {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    pub(crate) fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issues a fresh token. Expired sessions are purged first.
    pub(crate) fn issue(&self) -> String {
        let ttl = self.ttl;
        self.sessions.retain(|_, issued| issued.elapsed() < ttl);
        let token = Uuid::new_v4().simple().to_string();
        self.sessions.insert(token.clone(), Instant::now());
        token
    }

    pub(crate) fn is_valid(&self, token: &str) -> bool {
        let expired = match self.sessions.get(token) {
            Some(issued) => issued.elapsed() >= self.ttl,
            None => return false,
        };
        if expired {
            self.sessions.remove(token);
        }
        !expired
    }

    pub(crate) fn revoke(&self, token: &str) {
        self.sessions.remove(token);
    }

    pub(crate) fn is_authenticated(&self, headers: &HeaderMap) -> bool {
        token_from_headers(headers).is_some_and(|t| self.is_valid(&t))
    }

    pub(crate) fn len(&self) -> usize {
        self.sessions.len()
    }
}

/// Session token from the request's `Cookie` headers, if any.
pub(crate) fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

pub(crate) fn session_cookie(token: &str, ttl: Duration) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE,
        token,
        ttl.as_secs()
    )
}

pub(crate) fn cleared_cookie() -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", SESSION_COOKIE)
}

/// Route layer for admin-only endpoints.
pub(crate) async fn require_admin(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if state.sessions.is_authenticated(request.headers()) {
        next.run(request).await
    } else {
        ApiError::auth("Admin authentication required").into_response()
    }
}
