use crate::auth::jwt::JwtConfig;

/// Which verdict provider backs the news check endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// The built-in deterministic heuristic scorer (default).
    Rules,
    /// An external chat-completion model reached over HTTP.
    Model,
}

/// Configuration for the external model provider.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Chat-completions endpoint URL.
    pub api_url: String,
    /// Bearer token for the endpoint.
    pub api_key: String,
    /// Model identifier sent in the request body.
    pub model: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Which verdict provider to use for news checks.
    pub provider: ProviderKind,
    /// External model settings; present only when `provider` is `Model`.
    pub model: Option<ModelConfig>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `VERDICT_PROVIDER`     | `rules`                    |
    /// | `MODEL_API_URL`        | -- (required for `model`)  |
    /// | `MODEL_API_KEY`        | -- (required for `model`)  |
    /// | `MODEL_NAME`           | -- (required for `model`)  |
    ///
    /// # Panics
    ///
    /// Panics on malformed numeric values, an unknown `VERDICT_PROVIDER`, or
    /// a `model` provider with incomplete `MODEL_*` settings. Startup is the
    /// right time to fail on misconfiguration.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let provider = match std::env::var("VERDICT_PROVIDER")
            .unwrap_or_else(|_| "rules".into())
            .as_str()
        {
            "rules" => ProviderKind::Rules,
            "model" => ProviderKind::Model,
            other => panic!("VERDICT_PROVIDER must be 'rules' or 'model', got '{other}'"),
        };

        let model = match provider {
            ProviderKind::Rules => None,
            ProviderKind::Model => Some(ModelConfig {
                api_url: std::env::var("MODEL_API_URL")
                    .expect("MODEL_API_URL must be set when VERDICT_PROVIDER=model"),
                api_key: std::env::var("MODEL_API_KEY")
                    .expect("MODEL_API_KEY must be set when VERDICT_PROVIDER=model"),
                model: std::env::var("MODEL_NAME")
                    .expect("MODEL_NAME must be set when VERDICT_PROVIDER=model"),
            }),
        };

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            provider,
            model,
        }
    }
}
