use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the secrets have defaults suitable for local
/// development. In production, override via environment variables.
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
    /// Identity-provider token configuration (shared HS256 secret).
    pub jwt: JwtConfig,
    /// Generative-language API configuration.
    pub ai: AiConfig,
}

/// Configuration for the generative-language API client.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// Base URL of the API (default: the hosted endpoint).
    pub api_url: Option<String>,
    /// API key. Required.
    pub api_key: String,
    /// Questions to request per generated interview (default: `10`).
    pub question_count: usize,
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
    /// | `GEMINI_API_URL`       | hosted endpoint            |
    /// | `GEMINI_API_KEY`       | **required**               |
    /// | `QUESTION_COUNT`       | `10`                       |
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

        let jwt = JwtConfig::from_env();
        let ai = AiConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            ai,
        }
    }
}

impl AiConfig {
    /// Load AI client configuration from environment variables.
    ///
    /// # Panics
    ///
    /// Panics if `GEMINI_API_KEY` is not set.
    pub fn from_env() -> Self {
        let api_url = std::env::var("GEMINI_API_URL").ok();
        let api_key =
            std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set in the environment");

        let question_count: usize = std::env::var("QUESTION_COUNT")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("QUESTION_COUNT must be a valid usize");

        Self {
            api_url,
            api_key,
            question_count,
        }
    }
}
