//! Shared configuration used by the core and the gateway.

use serde::{Deserialize, Serialize};

/// Number of conversation records returned by the history endpoint.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Built-in admin password. Deployments are expected to override it.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

const DEFAULT_APP_NAME: &str = "ADTU Smart Campus Assistant";
const DEFAULT_ADMIN_USERNAME: &str = "adtuadmin";
const DEFAULT_KB_PATH: &str = "knowledge_base.json";
const DEFAULT_SESSION_TTL_SECS: u64 = 8 * 60 * 60;

/// Global application configuration (gateway + knowledge store). Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Application identity, shown in start-up logs.
    pub app_name: String,
    /// Bind address for the gateway.
    pub host: String,
    /// HTTP port for the gateway.
    pub port: u16,
    /// Path of the persisted knowledge document.
    pub knowledge_base_path: String,

    /// If true, the gateway serves the chat UI from `frontend_dir`. (Config alias: `ui_enabled`)
    #[serde(default, alias = "ui_enabled")]
    pub frontend_enabled: bool,
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: String,

    pub admin_username: String,
    pub admin_password: String,
    /// Lifetime of an admin session token, in seconds.
    pub session_ttl_secs: u64,
    /// Tail size for `/api/conversation_history`.
    pub history_limit: usize,
    /// Seed for response selection. Unset means seeded from OS entropy.
    #[serde(default)]
    pub rng_seed: Option<u64>,
    /// Origins allowed to call the API with credentials. Empty disables CORS.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_frontend_dir() -> String {
    "static".to_string()
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            host: "0.0.0.0".to_string(),
            port: 5000,
            knowledge_base_path: DEFAULT_KB_PATH.to_string(),
            frontend_enabled: false,
            frontend_dir: default_frontend_dir(),
            admin_username: DEFAULT_ADMIN_USERNAME.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            history_limit: DEFAULT_HISTORY_LIMIT,
            rng_seed: None,
            cors_origins: Vec::new(),
        }
    }
}

impl CoreConfig {
    /// Load config from file and environment. Precedence: env `CAMPUS__*` > file at `CAMPUS_CONFIG`
    /// (default `config/gateway`, extension resolved by the loader) > defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path = std::env::var("CAMPUS_CONFIG").unwrap_or_else(|_| "config/gateway".to_string());
        Self::load_from(&config_path)
    }

    /// Same as [`CoreConfig::load`] with an explicit file name. A missing file is not an error.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let built = config::Config::builder()
            .set_default("app_name", DEFAULT_APP_NAME)?
            .set_default("host", "0.0.0.0")?
            .set_default("port", 5000_i64)?
            .set_default("knowledge_base_path", DEFAULT_KB_PATH)?
            .set_default("admin_username", DEFAULT_ADMIN_USERNAME)?
            .set_default("admin_password", DEFAULT_ADMIN_PASSWORD)?
            .set_default("session_ttl_secs", DEFAULT_SESSION_TTL_SECS as i64)?
            .set_default("history_limit", DEFAULT_HISTORY_LIMIT as i64)?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("CAMPUS").separator("__"))
            .build()?;

        built.try_deserialize()
    }

    /// True when the admin password was never changed from the shipped default.
    pub fn uses_default_admin_password(&self) -> bool {
        self.admin_password == DEFAULT_ADMIN_PASSWORD
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
