use std::time::Duration;

use folio_db::PoolSettings;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`
    /// plus `FRONTEND_URL` when set.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Deployment environment name (default: `development`).
    pub app_env: String,
    /// Store connect timeout in seconds (default: `5`).
    pub db_connect_timeout_secs: u64,
    /// Store pool size (default: `10`).
    pub db_max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                                         |
    /// |---------------------------|-------------------------------------------------|
    /// | `HOST`                    | `0.0.0.0`                                       |
    /// | `PORT`                    | `3001`                                          |
    /// | `CORS_ORIGINS`            | `http://localhost:3000,http://localhost:5173`   |
    /// | `FRONTEND_URL`            | unset                                           |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                                            |
    /// | `APP_ENV`                 | `development`                                   |
    /// | `DB_CONNECT_TIMEOUT_SECS` | `5`                                             |
    /// | `DB_MAX_CONNECTIONS`      | `10`                                            |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let mut cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000,http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if let Ok(frontend) = std::env::var("FRONTEND_URL") {
            let frontend = frontend.trim().to_string();
            if !frontend.is_empty() && !cors_origins.contains(&frontend) {
                cors_origins.push(frontend);
            }
        }

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        let db_connect_timeout_secs: u64 = std::env::var("DB_CONNECT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("DB_CONNECT_TIMEOUT_SECS must be a valid u64");

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            app_env,
            db_connect_timeout_secs,
            db_max_connections,
        }
    }

    /// Whether 500 responses may carry diagnostic detail.
    pub fn exposes_error_details(&self) -> bool {
        !self.app_env.eq_ignore_ascii_case("production")
    }

    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.db_max_connections,
            connect_timeout: Duration::from_secs(self.db_connect_timeout_secs),
        }
    }
}
