use std::path::PathBuf;

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
    /// JSON file with business calendar definitions. When unset, the
    /// built-in calendars are used.
    pub calendars_path: Option<PathBuf>,
    /// Upper bound on tickets evaluated by a single batch request.
    pub max_tickets_per_request: usize,
    /// Widest `from`..`to` range, in days, accepted by working-minutes queries.
    pub max_working_span_days: i64,
}

/// Default for [`ServerConfig::max_tickets_per_request`].
pub const DEFAULT_MAX_TICKETS_PER_REQUEST: usize = 500;

/// Default for [`ServerConfig::max_working_span_days`].
pub const DEFAULT_MAX_WORKING_SPAN_DAYS: i64 = 366;

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                    |
    /// |---------------------------|----------------------------|
    /// | `HOST`                    | `0.0.0.0`                  |
    /// | `PORT`                    | `3000`                     |
    /// | `CORS_ORIGINS`            | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                       |
    /// | `CALENDARS_PATH`          | unset (built-in calendars) |
    /// | `MAX_TICKETS_PER_REQUEST` | `500`                      |
    /// | `MAX_WORKING_SPAN_DAYS`   | `366`                      |
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

        let calendars_path = std::env::var("CALENDARS_PATH")
            .ok()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let max_tickets_per_request: usize = std::env::var("MAX_TICKETS_PER_REQUEST")
            .map(|v| {
                v.parse()
                    .expect("MAX_TICKETS_PER_REQUEST must be a valid usize")
            })
            .unwrap_or(DEFAULT_MAX_TICKETS_PER_REQUEST);

        let max_working_span_days: i64 = std::env::var("MAX_WORKING_SPAN_DAYS")
            .map(|v| {
                v.parse()
                    .expect("MAX_WORKING_SPAN_DAYS must be a valid i64")
            })
            .unwrap_or(DEFAULT_MAX_WORKING_SPAN_DAYS);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            calendars_path,
            max_tickets_per_request,
            max_working_span_days,
        }
    }
}
