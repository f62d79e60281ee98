use notes_core::notes::{CategoryPolicy, DEFAULT_CATEGORY_ID};
use notes_core::types::DbId;

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
    /// PostgreSQL URL. `None` runs the service on the in-memory store.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections (default: `10`).
    pub db_max_connections: u32,
    /// How note category references are resolved.
    pub category_policy: CategoryPolicy,
    /// Insert sample categories and notes into an empty store at startup.
    pub seed_sample_data: bool,
    /// Emit logs as JSON lines instead of human-readable text.
    pub json_logs: bool,
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
    /// | `DATABASE_URL`         | unset (in-memory store)    |
    /// | `DB_MAX_CONNECTIONS`   | `10`                       |
    /// | `FALLBACK_CATEGORY_ID` | `1`                        |
    /// | `STRICT_CATEGORY_REFS` | `false`                    |
    /// | `SEED_SAMPLE_DATA`     | `false`                    |
    /// | `LOG_FORMAT`           | `text` (`json` for JSON)   |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Panics on values that fail to parse: misconfiguration should stop
    /// the server at startup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");

        let port: u16 = var("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let db_max_connections: u32 = var("DB_MAX_CONNECTIONS", "10")
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let fallback_category_id: DbId =
            var("FALLBACK_CATEGORY_ID", &DEFAULT_CATEGORY_ID.to_string())
                .parse()
                .expect("FALLBACK_CATEGORY_ID must be a valid integer");

        let strict = parse_flag(&var("STRICT_CATEGORY_REFS", "false"))
            .expect("STRICT_CATEGORY_REFS must be true or false");

        let seed_sample_data = parse_flag(&var("SEED_SAMPLE_DATA", "false"))
            .expect("SEED_SAMPLE_DATA must be true or false");

        let json_logs = var("LOG_FORMAT", "text").eq_ignore_ascii_case("json");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            db_max_connections,
            category_policy: CategoryPolicy {
                fallback_category_id,
                strict,
            },
            seed_sample_data,
            json_logs,
        }
    }
}

/// Parse a boolean environment flag (`true`/`false`, `1`/`0`, `yes`/`no`).
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
