use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Absolute base (scheme + authority) used when building links.
    /// Falls back to the request `Host` header when unset.
    pub public_url: Option<String>,
    pub debug: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://orders.db?mode=rwc".to_string());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(5000);
        let public_url = env::var("APP_PUBLIC_URL")
            .ok()
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        let debug = env::var("DEBUG")
            .map(|v| matches!(v.as_str(), "true" | "True" | "1"))
            .unwrap_or(false);
        Ok(Self {
            port,
            database_url,
            host,
            public_url,
            debug,
        })
    }

    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info,orders_service=debug"
        }
    }
}
