use serde::{Deserialize, Serialize};

use crate::error::{ErError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub cors_origins: Vec<String>,
    /// Artificial latency before answering `/analyze`. Zero disables it.
    pub analyze_delay_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
            debug: false,
            cors_origins: vec![
                "http://localhost:5173".into(),
                "http://localhost:3000".into(),
            ],
            analyze_delay_ms: 0,
        }
    }
}

impl ServerConfig {
    /// Build configuration from process environment, falling back to defaults.
    ///
    /// Reads `HOST`, `PORT`, `DEBUG`, `CORS_ORIGINS` (comma-separated) and
    /// `ANALYZE_DELAY_MS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ErError::Config(format!("invalid PORT: {port}")))?;
        }
        if let Some(debug) = lookup("DEBUG") {
            config.debug = matches!(debug.trim().to_lowercase().as_str(), "true" | "1" | "yes");
        }
        if let Some(origins) = lookup("CORS_ORIGINS") {
            let parsed: Vec<String> = origins
                .split(',')
                .map(|o| o.trim())
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
            if parsed.is_empty() {
                tracing::debug!("CORS_ORIGINS is empty, keeping defaults");
            } else {
                config.cors_origins = parsed;
            }
        }
        if let Some(delay) = lookup("ANALYZE_DELAY_MS") {
            config.analyze_delay_ms = delay
                .trim()
                .parse()
                .map_err(|_| ErError::Config(format!("invalid ANALYZE_DELAY_MS: {delay}")))?;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
