//! Axum-based gateway for the campus FAQ assistant. Config-driven via CoreConfig.

mod error;
mod handlers;
mod session;

use axum::http::{header, HeaderValue, Method};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use campus_core::{CoreConfig, KnowledgeStore, ResponseSelector};
use handlers::{admin, chat};
use session::SessionStore;
use std::path::Path as StdPath;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Pre-flight check: verify the knowledge document parses and the port is available.
fn run_verify() -> Result<(), String> {
    let config = CoreConfig::load().map_err(|e| format!("Config load failed: {}", e))?;

    // 1. Knowledge document
    let kb_path = StdPath::new(&config.knowledge_base_path);
    print!("Checking knowledge base {}... ", kb_path.display());
    if kb_path.exists() {
        let kb = KnowledgeStore::load_document(kb_path)
            .map_err(|e| format!("knowledge base unreadable: {}", e))?;
        println!(
            "OK ({} categories, {} questions)",
            kb.total_categories(),
            kb.total_questions()
        );
    } else {
        println!("absent (default knowledge base will be seeded on start)");
    }

    // 2. Port availability
    let addr = config.bind_addr();
    print!("Checking {}... ", addr);
    match std::net::TcpListener::bind(&addr) {
        Ok(listener) => {
            drop(listener);
            println!("OK (available)");
        }
        Err(e) => {
            return Err(format!("{} BLOCKED: {}", addr, e));
        }
    }

    if config.uses_default_admin_password() {
        println!("WARNING: admin password is the built-in default; set CAMPUS__ADMIN_PASSWORD.");
    }

    println!("\nSUCCESS: All systems GO. Ready to start gateway.");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[campus-gateway] .env not loaded: {} (using system environment)", e);
    }

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--verify") {
        match run_verify() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("PRE-FLIGHT FAILED: {}", e);
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CoreConfig::load()?;
    if config.uses_default_admin_password() {
        tracing::warn!(
            target: "campus::admin",
            "Admin password is the built-in default; set CAMPUS__ADMIN_PASSWORD"
        );
    }
    let knowledge = KnowledgeStore::open_path(&config.knowledge_base_path)?;

    let state = AppState::new(config, knowledge);
    let addr = state.config.bind_addr();
    let app_name = state.config.app_name.clone();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("{} listening on {}", app_name, addr);
    axum::serve(listener, build_app(state)).await?;
    Ok(())
}

fn build_app(state: AppState) -> Router {
    let frontend = state
        .config
        .frontend_enabled
        .then(|| std::path::PathBuf::from(&state.config.frontend_dir));
    let cors = cors_layer(&state.config.cors_origins);

    let admin_only = Router::new()
        .route("/admin/knowledge_base", get(admin::knowledge_base))
        .route("/admin/add_question", post(admin::add_question))
        .route("/admin/stats", get(admin::stats))
        .route_layer(middleware::from_fn_with_state(state.clone(), session::require_admin));

    let mut app = Router::new()
        .route("/api/v1/health", get(health))
        .route("/get_response", post(chat::get_response))
        .route("/api/conversation_history", get(chat::conversation_history))
        .route("/api/analytics", get(chat::analytics))
        .route("/admin/login", post(admin::login))
        .route("/admin/logout", post(admin::logout))
        .route("/admin/check_auth", get(admin::check_auth))
        .merge(admin_only)
        .with_state(state);

    if let Some(frontend_dir) = frontend {
        // `/` -> index.html, `/static/*` -> the rest of the UI (script.js, styles, images)
        app = app
            .route_service("/", ServeFile::new(frontend_dir.join("index.html")))
            .nest_service("/static", ServeDir::new(frontend_dir));
    }

    match cors {
        Some(cors) => app.layer(cors),
        None => app,
    }
}

/// Credentialed CORS for the configured origins; `None` when no origin is configured.
fn cors_layer(origins: &[String]) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    if origins.is_empty() {
        return None;
    }
    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true),
    )
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<CoreConfig>,
    pub(crate) knowledge: Arc<KnowledgeStore>,
    pub(crate) selector: Arc<ResponseSelector>,
    pub(crate) sessions: Arc<SessionStore>,
}

impl AppState {
    pub(crate) fn new(config: CoreConfig, knowledge: KnowledgeStore) -> Self {
        let knowledge = Arc::new(knowledge);
        let selector = ResponseSelector::with_seed(
            Arc::clone(&knowledge) as Arc<dyn campus_core::KnowledgeSource>,
            Arc::new(campus_core::ConversationLog::new()),
            config.rng_seed,
        );
        let sessions = SessionStore::new(Duration::from_secs(config.session_ttl_secs));
        Self {
            config: Arc::new(config),
            knowledge,
            selector: Arc::new(selector),
            sessions: Arc::new(sessions),
        }
    }
}

/// GET /api/v1/health – liveness check for UI and scripts.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
